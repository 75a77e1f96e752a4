pub mod actions;
pub mod endpoints;
pub mod http;
pub mod service;

pub use crate::domain::model::{ApiResponse, Operation, Record, Resource};
pub use crate::domain::ports::{ActionHandler, ConfigProvider};
pub use crate::utils::error::Result;
