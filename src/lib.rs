//! A guided tour of pattern matching over a small person/hero model.
//!
//! Run with: cargo run --bin pattern_tour

pub mod config;
pub mod console;
pub mod error;
pub mod model;
pub mod patterns;
pub mod tour;

pub use error::{Result, TourError};
