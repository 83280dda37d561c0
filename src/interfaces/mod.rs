//! Edge adapters: CSV order input, report output and the console presenter.

pub mod csv;
pub mod presenter;
