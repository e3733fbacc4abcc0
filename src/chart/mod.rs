//! Live Chart
//!
//! - **store**: the owned chart state container and id generator
//! - **shared**: lock-protected handle with change events (native runtime)

pub mod store;

#[cfg(feature = "runtime")]
pub mod shared;

pub use store::{ChartStore, EntryIdGenerator};

#[cfg(feature = "runtime")]
pub use shared::{ChartEvent, SharedChart};
