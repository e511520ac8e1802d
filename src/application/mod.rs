//! Application layer - Use cases and orchestration

pub mod assign_series;
pub mod edit_day;
pub mod init;
pub mod manage_config;
pub mod publish;
pub mod set_range;
pub mod show_plan;

pub use assign_series::{AssignSeriesService, AssignmentReport};
pub use edit_day::EditDayService;
pub use publish::PublishService;
pub use set_range::SetRangeService;
pub use show_plan::{show_plan, PlanView};
