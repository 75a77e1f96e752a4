pub mod config;
pub mod core;
pub mod domain;
pub mod services;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ClientConfig;

pub use crate::core::actions::{Action, ActionBar};
pub use crate::core::endpoints::{build_api_url, Endpoints, PathTemplate};
pub use crate::core::http::ApiClient;
pub use crate::core::service::{CrudService, SearchService};
pub use domain::model::{ApiResponse, Operation, Record, Resource};
pub use services::ApiServices;
pub use utils::error::{ApiError, Result};
