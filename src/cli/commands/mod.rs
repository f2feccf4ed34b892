//! CLI command implementations.

mod config;
mod doctor;
mod fact;
mod fetch;
mod recommend;
mod serve;

pub use config::run_config;
pub use doctor::run_doctor;
pub use fact::run_fact;
pub use fetch::run_fetch;
pub use recommend::{run_recommend, RecommendOptions};
pub use serve::run_serve;
