use clap::Parser;

pub const DEFAULT_PORT: u16 = 80;
pub const DEFAULT_MESSAGE: &str = "Hello from snooze!\n";

/// Command-line flags. Environment variables take precedence over these.
#[derive(Parser, Debug, Default)]
#[command(name = "snooze", about = "HTTP endpoint that snoozes before answering")]
pub struct Cli {
    /// Message to send for non-snooze paths
    #[arg(short, long)]
    pub message: Option<String>,

    /// Port to listen on (default: 80)
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub default_message: String,
}

impl Config {
    /// Resolves the server configuration.
    ///
    /// Precedence, highest first: environment variables (`PORT`, `MESSAGE`),
    /// then command-line flags, then built-in defaults. `PORT` is honored
    /// only when it parses to a nonzero port number.
    pub fn load(cli: Cli) -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .filter(|p| *p > 0)
            .or(cli.port)
            .unwrap_or(DEFAULT_PORT);

        let default_message = std::env::var("MESSAGE")
            .ok()
            .or(cli.message)
            .unwrap_or_else(|| DEFAULT_MESSAGE.to_string());

        Self {
            port,
            default_message,
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
