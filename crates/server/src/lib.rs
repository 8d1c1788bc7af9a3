pub mod errors;
pub mod observability;
pub mod openapi;
pub mod routes;
pub mod startup;
pub mod views;

pub use routes::ServerState;
pub use startup::run_with;
