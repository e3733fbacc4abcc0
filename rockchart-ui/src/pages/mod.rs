//! Pages
//!
//! Top-level page components.

pub mod landing;

pub use landing::Landing;
