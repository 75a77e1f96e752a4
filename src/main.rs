use clap::Parser;
use dashboard_api::config::cli::{parse_body, Command, LogFormat};
use dashboard_api::utils::error::ErrorCategory;
use dashboard_api::utils::{logger, validation::Validate};
use dashboard_api::{ApiClient, ApiServices, CliConfig, Endpoints};
use serde_json::Value;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(),
    }

    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match run(&cli).await {
        Ok(output) => match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("❌ could not render response: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            tracing::error!("❌ request failed: {} (category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = match e.category() {
                ErrorCategory::Http => 2,
                ErrorCategory::Transport => 3,
                ErrorCategory::Payload => 4,
                ErrorCategory::Usage | ErrorCategory::Config => 64,
            };
            std::process::exit(exit_code);
        }
    }
}

async fn run(cli: &CliConfig) -> dashboard_api::Result<Value> {
    let config = cli.client_config()?;
    config.validate()?;

    let client = ApiClient::from_config(&config)?;
    tracing::info!("Using API at {}", client.base_url());
    let services = ApiServices::new(client.clone());

    let output = match &cli.command {
        Command::List { resource } => services.crud(*resource).list_all().await?,
        Command::Get { resource, id } => services.crud(*resource).get_by_id(id).await?,
        Command::Create { resource, body } => {
            services.crud(*resource).create(&parse_body(body)?).await?
        }
        Command::Update { resource, id, body } => services
            .crud(*resource)
            .update(id, &parse_body(body)?)
            .await?
            .into_value(),
        Command::Delete { resource, id } => {
            services.crud(*resource).delete(id).await?.into_value()
        }
        Command::Search {
            resource,
            term,
            local,
        } => {
            let service = services.searchable(*resource)?;
            if *local {
                Value::Array(service.search_local(term).await?)
            } else {
                service.search(term).await?
            }
        }
        Command::ByCategory { categoria } => services.productos.by_category(categoria).await?,
        Command::SearchCategory { categoria, term } => Value::Array(
            services
                .productos
                .search_in_category(categoria, term)
                .await?,
        ),
        Command::Url {
            resource,
            operation,
            params,
        } => {
            let endpoint = Endpoints::lookup_by_name(resource, operation)?;
            let params: Vec<(&str, &str)> = params
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            Value::String(format!(
                "{} {}",
                endpoint.method,
                client.url_for(&endpoint, &params)?
            ))
        }
    };

    Ok(output)
}
