//! Publication Pipeline
//!
//! - **request**: chart entry template derived from a finished submission
//! - **simulator**: delayed, cancellable publication on the tokio runtime
//!
//! # Timeline
//!
//! ```text
//! submit ──review delay──→ stage (pending) ──reveal delay──→ visible + NEW ──marker──→ visible
//! ```

pub mod request;

#[cfg(feature = "runtime")]
pub mod simulator;

pub use request::PublishRequest;

#[cfg(feature = "runtime")]
pub use simulator::{PublicationSimulator, PublishHandle, PublishOutcome};
