//! Core model of the wash tunnel: phases, options and pricing, and the
//! state machine that ties them together.

pub mod machine;
pub mod money;
pub mod options;
pub mod order;
pub mod phase;
pub mod ports;
