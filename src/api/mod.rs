//! Remote animal lookups.

pub mod client;

pub use client::{AnimalsClient, DEFAULT_API_URL};
