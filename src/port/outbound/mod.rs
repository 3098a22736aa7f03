//! Outbound ports: what the session needs from the outside world.

mod store;

pub use store::LineStore;
