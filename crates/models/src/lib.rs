//! Domain entities shared by the service and server crates.

pub mod errors;
pub mod student;

pub use student::{Student, StudentInput};
