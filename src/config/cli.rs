use crate::config::toml_config::{ClientConfig, BASE_URL_ENV};
use crate::domain::model::Resource;
use crate::utils::error::{ApiError, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "dashboard-api")]
#[command(about = "Command-line access to the inventory dashboard REST API")]
pub struct CliConfig {
    /// Origin of the REST API, e.g. http://localhost:8091
    #[arg(long, global = true, env = BASE_URL_ENV)]
    pub base_url: Option<String>,

    /// TOML file with an [api] section
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(long, short, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every record of a resource
    List { resource: Resource },
    /// Fetch one record
    Get { resource: Resource, id: String },
    /// Create a record from a JSON body
    Create {
        resource: Resource,
        #[arg(long)]
        body: String,
    },
    /// Replace a record with a JSON body
    Update {
        resource: Resource,
        id: String,
        #[arg(long)]
        body: String,
    },
    /// Delete one record
    Delete { resource: Resource, id: String },
    /// Search through the backend (categorias, productos, proveedores, clientes)
    Search {
        resource: Resource,
        term: String,
        /// Filter the full listing client-side instead of calling the search endpoint
        #[arg(long)]
        local: bool,
    },
    /// List products of a category
    ByCategory { categoria: String },
    /// Search products by name inside one category
    SearchCategory { categoria: String, term: String },
    /// Print the resolved URL for an operation without calling it
    Url {
        resource: String,
        operation: String,
        /// Placeholder values as name=value
        #[arg(value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
}

fn parse_param(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim_start_matches(':').to_string(), v.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))
}

impl clap::ValueEnum for Resource {
    fn value_variants<'a>() -> &'a [Self] {
        &Resource::ALL
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

impl CliConfig {
    /// Resolves the effective client settings.
    ///
    /// Precedence: flags, then the environment, then the config file, then
    /// built-in defaults.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = ClientConfig::load(self.config.as_deref())?;

        if let Some(url) = &self.base_url {
            config.api.base_url = url.trim().to_string();
        }
        if let Some(timeout) = self.timeout {
            config.api.timeout_seconds = timeout;
        }

        Ok(config)
    }
}

/// Parses a JSON body given on the command line.
pub fn parse_body(raw: &str) -> Result<serde_json::Value> {
    serde_json::from_str(raw).map_err(|e| ApiError::InvalidConfigValueError {
        field: "--body".to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
