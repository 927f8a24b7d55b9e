use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "orbit-gif", version)]
struct Cli {
    /// Source silhouette PNG (default: gopherbw.png).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output GIF path (default: animeAround.gif).
    #[arg(long)]
    out: Option<PathBuf>,

    /// JSON config; missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Layout strategy.
    #[arg(long, value_enum)]
    layout: Option<LayoutChoice>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayoutChoice {
    Arc,
    Rotate,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();
    let cfg = resolve_config(cli)?;

    orbit_gif::run(&cfg).with_context(|| {
        format!(
            "render '{}' -> '{}'",
            cfg.input.display(),
            cfg.output.display()
        )
    })?;

    eprintln!("wrote {}", cfg.output.display());
    Ok(())
}

fn resolve_config(cli: Cli) -> anyhow::Result<orbit_gif::OrbitConfig> {
    let mut cfg = match &cli.config {
        Some(path) => orbit_gif::OrbitConfig::from_json_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => orbit_gif::OrbitConfig::default(),
    };

    if let Some(p) = cli.in_path {
        cfg.input = p;
    }
    if let Some(p) = cli.out {
        cfg.output = p;
    }
    if let Some(layout) = cli.layout {
        cfg.layout = match layout {
            LayoutChoice::Arc => orbit_gif::LayoutStrategy::Arc,
            LayoutChoice::Rotate => orbit_gif::LayoutStrategy::Rotate,
        };
    }

    cfg.validate()?;
    Ok(cfg)
}
