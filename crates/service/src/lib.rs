//! Service layer holding the in-memory student collection.
//! - Seeds itself once from a remote source on first use.
//! - Validates client input through the `models` crate.
//! - Exposes a `SeedSource` seam so callers can swap the remote fetch.

pub mod errors;
pub mod students;

pub use students::{HttpSeedSource, SeedSource, StaticSeedSource, StudentStore};
