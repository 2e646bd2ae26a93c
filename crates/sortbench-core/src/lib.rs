//! sortbench Core - Core types and traits for sorting benchmarks
//!
//! This crate provides the fundamental abstractions shared by the engine:
//! - Element capabilities ([`SortElement`], [`BucketKey`])
//! - The [`Book`] record, an ordered non-numeric element
//! - Algorithm identifiers ([`AlgorithmKind`])
//! - Error types

pub mod algorithm;
pub mod book;
pub mod element;
pub mod error;

pub use algorithm::AlgorithmKind;
pub use book::{sample_shelf, Book};
pub use element::{BucketKey, SortElement};
pub use error::{Result, SortBenchError};
