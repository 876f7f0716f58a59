use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Coaching backend that breaks a stuck task into a warm-up and nano-steps
#[derive(Parser, Debug)]
#[command(
    name = "rozbijacz",
    about = "Coaching backend that breaks a stuck task into a warm-up and nano-steps",
    version,
    author,
    long_about = "rozbijacz serves a four-stage coaching conversation over HTTP. Each stage \
                  renders a prompt, asks Gemini for a JSON answer and returns it to the page."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Run the HTTP server",
        long_about = "Starts the HTTP server with the four stage endpoints and the static page.\n\n\
                      Examples:\n  \
                      rozbijacz serve\n  \
                      rozbijacz serve --bind 0.0.0.0:8080\n  \
                      rozbijacz serve --model gemini-2.5-pro --timeout 60"
    )]
    Serve(ServeArgs),

    #[command(
        about = "Check backend availability",
        long_about = "Sends a short prompt to the configured model and reports whether it answered.\n\n\
                      Examples:\n  \
                      rozbijacz health\n  \
                      rozbijacz health --model gemini-2.5-pro"
    )]
    Health(HealthArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    #[arg(
        short = 'b',
        long,
        value_name = "ADDR",
        help = "Address to listen on (overrides ROZBIJACZ_BIND)"
    )]
    pub bind: Option<String>,

    #[arg(
        short = 'm',
        long,
        value_name = "MODEL",
        help = "Gemini model name (overrides ROZBIJACZ_MODEL)"
    )]
    pub model: Option<String>,

    #[arg(
        long,
        value_name = "SECONDS",
        help = "Backend request timeout in seconds (default: no timeout)"
    )]
    pub timeout: Option<u64>,

    #[arg(
        long,
        value_name = "DIR",
        help = "Directory holding index.html (overrides ROZBIJACZ_STATIC_DIR)"
    )]
    pub static_dir: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct HealthArgs {
    #[arg(short = 'm', long, value_name = "MODEL", help = "Gemini model name to check")]
    pub model: Option<String>,

    #[arg(
        long,
        value_name = "SECONDS",
        default_value = "30",
        help = "Request timeout in seconds"
    )]
    pub timeout: u64,
}
