pub mod assessment;
pub mod config;
pub mod diseases;
pub mod error;
pub mod knowledge;
pub mod repository;
pub mod telemetry;
pub mod yoga;

pub use error::AppError;
