//! Ping Centre command-line tool.
//!
//! Sends a single telemetry ping for a topic, the same way an application
//! build would:
//!
//!   pingcentre --topic ios-mock --schema mock.json --channel beta '{"title": "x"}'

use anyhow::{Context, Result};
use clap::Parser;
use pingcentre_cli::{load_config, load_topic, parse_payload};
use pingcentre_client::{DefaultPingCentre, HttpTransport, PingCentre, PingCentreClient};
use pingcentre_types::{BuildChannel, ClientId};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "pingcentre")]
#[command(about = "Send a telemetry ping to Ping Centre")]
struct Args {
    /// Topic the ping belongs to
    #[arg(short, long)]
    topic: String,

    /// JSON Schema file for the topic (any payload is accepted without one)
    #[arg(short, long)]
    schema: Option<PathBuf>,

    /// Build channel selecting the endpoint
    #[arg(short, long, default_value = "developer")]
    channel: BuildChannel,

    /// Post to this URL instead of the channel's endpoint
    #[arg(long)]
    url: Option<String>,

    /// Client ID to report (a fresh one is generated otherwise)
    #[arg(long)]
    client_id: Option<ClientId>,

    /// JSON config file for the client
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip schema validation
    #[arg(long)]
    no_validate: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Ping data as a JSON object
    #[arg(default_value = "{}")]
    data: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let topic = load_topic(&args.topic, args.schema.as_deref())?;
    let config = load_config(args.config.as_deref())?;
    let data = parse_payload(&args.data)?;
    let client_id = args.client_id.unwrap_or_default();

    let client = match args.url {
        Some(url) => {
            let transport = Arc::new(HttpTransport::new(&config)?);
            DefaultPingCentre::with_url(topic, url, client_id, transport, config)
        }
        None => PingCentre::client_for_topic_with(topic, args.channel, client_id, config)?,
    };

    info!(
        topic = %client.topic().name(),
        client_id = %client.client_id(),
        url = %client.endpoint_url(),
        "Sending ping"
    );
    client
        .send_ping_with(&data, !args.no_validate)
        .await
        .context("ping was not sent")?;
    info!("Done");
    Ok(())
}
