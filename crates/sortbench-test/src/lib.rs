//! Shared test fixtures for sortbench crates.
//!
//! - [`check`] - Sortedness and permutation checks
//! - [`scripted`] - A strategy with a scripted operation count
//! - [`books`] - Book constructors
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! sortbench-test = { workspace = true }
//! ```

pub mod books;
pub mod check;
pub mod scripted;

pub use books::book;
pub use check::{is_permutation, is_sorted};
pub use scripted::ScriptedStrategy;
