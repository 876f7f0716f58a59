use rozbijacz::cli::commands::{CliArgs, Commands, HealthArgs, ServeArgs};
use rozbijacz::llm::{LLMClient, LLMRequest};
use rozbijacz::util::logging::{config_from_env, init_logging, parse_level};
use rozbijacz::{RozbijaczConfig, NAME, VERSION};

use clap::Parser;
use std::process;
use std::sync::Arc;
use tracing::{debug, error, info, warn, Level};

const HEALTH_PROMPT: &str = "Odpowiedz jednym słowem: OK";

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Serve(serve_args) => handle_serve(serve_args).await,
        Commands::Health(health_args) => handle_health(health_args).await,
    };

    process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let level = if let Some(level_str) = &args.log_level {
        Some(parse_level(level_str))
    } else if args.verbose {
        Some(Level::DEBUG)
    } else if args.quiet {
        Some(Level::ERROR)
    } else {
        None
    };

    init_logging(config_from_env(level));
}

async fn handle_serve(args: &ServeArgs) -> i32 {
    let default_config = RozbijaczConfig::default();
    let config = RozbijaczConfig {
        bind_addr: args.bind.clone().unwrap_or(default_config.bind_addr),
        model: args.model.clone().unwrap_or(default_config.model),
        request_timeout_secs: args.timeout.or(default_config.request_timeout_secs),
        static_dir: args.static_dir.clone().unwrap_or(default_config.static_dir),
        ..default_config
    };

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return 1;
    }
    debug!("{}", config);

    if let Err(e) = config.check_credentials() {
        warn!("{}. Stage requests will fail until it is set", e);
    }

    let client = match config.create_client() {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create backend client: {}", e);
            return 1;
        }
    };
    info!(
        "Using {} backend with model {}",
        client.name(),
        client.model_info().unwrap_or_default()
    );

    match rozbijacz::serve(config, client).await {
        Ok(()) => 0,
        Err(e) => {
            error!("Server error: {:#}", e);
            1
        }
    }
}

async fn handle_health(args: &HealthArgs) -> i32 {
    info!("Checking backend health");

    let default_config = RozbijaczConfig::default();
    let config = RozbijaczConfig {
        model: args.model.clone().unwrap_or(default_config.model),
        request_timeout_secs: Some(args.timeout),
        ..default_config
    };

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        println!("gemini: unavailable ({})", e);
        return 1;
    }

    if let Err(e) = config.check_credentials() {
        error!("{}", e);
        println!("gemini: unavailable ({})", e);
        return 1;
    }

    let client: Arc<dyn LLMClient> = match config.create_client() {
        Ok(client) => client as Arc<dyn LLMClient>,
        Err(e) => {
            error!("Failed to create backend client: {}", e);
            return 1;
        }
    };

    match client.generate(LLMRequest::new(HEALTH_PROMPT)).await {
        Ok(response) => {
            info!(
                "Backend answered in {} ms",
                response.response_time.as_millis()
            );
            println!(
                "{}: available (model {}, {} ms)",
                client.name(),
                config.model,
                response.response_time.as_millis()
            );
            0
        }
        Err(e) => {
            warn!("Backend health check failed: {}", e);
            println!("{}: unavailable ({})", client.name(), e);
            1
        }
    }
}
