use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use url::Url;

use statuswatch::config::{self, AppConfig, ServiceConfig};
use statuswatch::icons::IconRegistry;
use statuswatch::placeholder::PlaceholderEngine;
use statuswatch::{HealthOrchestrator, HealthSnapshot};

#[derive(Parser, Debug)]
#[command(name = "statuswatch")]
#[command(about = "Polls configured services and reports their health status")]
struct Args {
    /// Directory searched for config.yaml (then config1..3.yaml)
    #[arg(short = 'd', long, default_value = ".")]
    config_dir: PathBuf,

    /// Explicit configuration file, bypassing discovery
    #[arg(short = 'f', long)]
    file: Option<PathBuf>,

    /// Poll interval in seconds
    #[arg(short, long, default_value = "30")]
    interval: u64,

    /// Per-probe timeout in milliseconds
    #[arg(short, long, default_value = "5000")]
    timeout: u64,

    /// Run a single polling cycle and exit
    #[arg(long)]
    once: bool,

    /// Emit each snapshot as a JSON line instead of formatted rows
    #[arg(long)]
    json: bool,

    /// Page URL backing the {url}/{hostname}/... placeholders
    #[arg(long)]
    page_url: Option<Url>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let placeholders = match args.page_url.clone() {
        Some(url) => PlaceholderEngine::with_page_url(url),
        None => PlaceholderEngine::new(),
    };

    let mut config = config::load(&args.config_dir, args.file.as_ref())?;
    config.resolve_placeholders(&placeholders);

    let orchestrator = HealthOrchestrator::builder()
        .mapper(config.status_mapper())
        .probe_timeout(Duration::from_millis(args.timeout))
        .poll_interval(Duration::from_secs(args.interval))
        .build()?;

    if args.once {
        let snapshot = orchestrator.check_all(&config.endpoints()).await;
        render(&config, &snapshot, args.json)?;
        return Ok(());
    }

    run_poll(&config, &orchestrator, args.json).await
}

/// Subscribe to the recurring poll and render every published snapshot
/// until interrupted.
async fn run_poll(
    config: &AppConfig,
    orchestrator: &HealthOrchestrator,
    json: bool,
) -> Result<()> {
    let (handle, mut rx) = orchestrator.start(config.endpoints());

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = rx.borrow_and_update().clone();
                render(config, &snapshot, json)?;
            }
            _ = tokio::signal::ctrl_c() => {
                break;
            }
        }
    }

    handle.stop();
    Ok(())
}

/// Render one snapshot: JSON line or one formatted row per service.
fn render(config: &AppConfig, snapshot: &HealthSnapshot, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(snapshot)?);
        return Ok(());
    }

    let colors = config.color_resolver();
    let icons = IconRegistry::new();

    println!("{} - {} services", config.server.name, snapshot.len());
    for (service, outcome) in config.services.iter().zip(snapshot.iter()) {
        println!(
            "  {} {:<24} {:<12} {:>4}  {:<16} {}",
            glyph(&icons, service),
            service.name,
            outcome.status,
            outcome.status_code,
            outcome.method,
            colors.color_for_code(outcome.status_code),
        );
    }
    Ok(())
}

fn glyph(icons: &IconRegistry, service: &ServiceConfig) -> &'static str {
    icons.get(&service.icon).unwrap_or(" ")
}
