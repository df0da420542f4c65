pub mod catalog;
pub mod error;
pub mod ports;
pub mod project;
pub mod requirements;

// Re-exports to keep imports short elsewhere
pub use error::DomainError;
