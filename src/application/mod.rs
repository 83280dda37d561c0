//! Application layer driving wash orders through the tunnel.
//!
//! `WashTunnel` is the owning collaborator of the state machine: it serializes
//! access behind one lock and reports each cycle to a `CycleObserver`.

pub mod tunnel;
