pub mod catalog;
pub mod config;
pub mod error;
pub mod observability;
pub mod recognizer;
pub mod routes;

pub use config::Config;
pub use error::AppError;
pub use routes::AppState;
