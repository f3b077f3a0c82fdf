#![warn(clippy::pedantic)]

pub mod dashboard;
pub mod log;
mod service;
mod settings;

pub use dashboard::Dashboard;
pub use service::Service;
pub use settings::*;
