//! Infrastructure layer - Configuration and file-backed persistence

pub mod config;
pub mod repository;

pub use config::Config;
pub use repository::{FileSystemRepository, PlanRepository, PlanStatus, StoredPlan};
