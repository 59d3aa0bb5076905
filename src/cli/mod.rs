use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::config::ServerConfig;
use commands::serve;

#[derive(Parser)]
#[command(name = "segwatch")]
#[command(about = "Serves the SegWatch dashboard bundle and forwards its API calls")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind the HTTP listener to
    #[arg(short, long, env = "SEGWATCH_BIND_ADDRESS", default_value = "0.0.0.0:8000")]
    pub bind_address: String,

    /// Directory holding the built frontend (`trunk build --release` output)
    #[arg(short, long, env = "SEGWATCH_DIST_DIR", default_value = "workspace/frontend/dist")]
    pub dist_dir: PathBuf,

    /// Base URL of the model service that answers `/dashboard` and `/predict`
    ///
    /// Examples:
    ///   http://127.0.0.1:5000
    ///   http://model-service.internal:8080
    #[arg(long, env = "SEGWATCH_API_UPSTREAM")]
    pub api_upstream: Option<String>,

    /// Seconds to wait for the model service before answering 502
    #[arg(long, env = "SEGWATCH_UPSTREAM_TIMEOUT", default_value_t = 30)]
    pub upstream_timeout: u64,
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        ServerConfig {
            bind_address: args.bind_address,
            dist_dir: args.dist_dir,
            api_upstream: args
                .api_upstream
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
            upstream_timeout_secs: args.upstream_timeout,
        }
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => {
                serve(args.into()).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["segwatch", "serve"]).unwrap();
        let Commands::Serve(args) = cli.command;
        let config = ServerConfig::from(args);
        assert_eq!(config.dist_dir, PathBuf::from("workspace/frontend/dist"));
        assert_eq!(config.upstream_timeout_secs, 30);
    }

    #[test]
    fn test_upstream_trailing_slash_is_trimmed() {
        let cli = Cli::try_parse_from([
            "segwatch",
            "serve",
            "--api-upstream",
            "http://127.0.0.1:5000/",
        ])
        .unwrap();
        let Commands::Serve(args) = cli.command;
        let config = ServerConfig::from(args);
        assert_eq!(config.api_upstream.as_deref(), Some("http://127.0.0.1:5000"));
    }

    #[test]
    fn test_empty_upstream_means_unconfigured() {
        let cli =
            Cli::try_parse_from(["segwatch", "serve", "--api-upstream", ""]).unwrap();
        let Commands::Serve(args) = cli.command;
        assert!(ServerConfig::from(args).api_upstream.is_none());
    }
}
