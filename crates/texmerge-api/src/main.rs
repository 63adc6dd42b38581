#![forbid(unsafe_code)]

//! Texmerge API server binary.

use anyhow::Result;
use clap::Parser;

/// Serve the texmerge HTTP API.
#[derive(Parser, Debug)]
#[command(name = "texmerge-api")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0", env = "TEXMERGE_API_HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8000, env = "TEXMERGE_API_PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    let args = Args::parse();
    texmerge_api::serve(&format!("{}:{}", args.host, args.port)).await?;

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }
}
