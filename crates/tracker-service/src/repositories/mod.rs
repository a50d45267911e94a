//! Storage seams for the tracker service.

pub mod applications;

pub use applications::{ApplicationStore, InMemoryApplicationStore};
