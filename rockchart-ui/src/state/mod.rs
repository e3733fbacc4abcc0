//! State Management
//!
//! Global application state and the publication scheduler.

pub mod global;
pub mod publisher;

pub use global::{provide_global_state, GlobalState};
pub use publisher::{Publisher, Ticket};
