use anyhow::{Context, Result};
use bodeplot::{load_measurement, Config, Renderer};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bodeplot")]
#[command(about = "Render frequency response measurements as SVG Bode plots", long_about = None)]
struct Cli {
    #[arg(short, long)]
    verbose: bool,
    #[arg(long, env = "BODEPLOT_CONFIG")]
    config: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Plot one or more Room EQ Wizard text exports
    Render(RenderOpts),
    /// Print the effective configuration as TOML
    Config,
    /// Generate shell completions
    Completions { shell: Shell },
}

#[derive(clap::Args, Debug)]
struct RenderOpts {
    #[arg(required = true)]
    files: Vec<PathBuf>,
    #[arg(short, long)]
    output: Option<String>,
    #[arg(long)]
    markers: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    match cli.command {
        Commands::Render(opts) => run_render(opts, load_config(cli.config.as_deref())?)?,
        Commands::Config => {
            let config = load_config(cli.config.as_deref())?;
            print!("{}", config.to_toml().context("Failed to serialize configuration")?);
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "bodeplot", &mut std::io::stdout());
        }
    }

    Ok(())
}

fn load_config(path: Option<&str>) -> Result<Config> {
    match path {
        Some(p) => {
            let path = PathBuf::from(shellexpand::tilde(p).into_owned());
            Config::load_from_path(path.clone())
                .with_context(|| format!("Failed to load config from {}", path.display()))
        }
        None => Config::load().or_else(|e| {
            tracing::warn!("Ignoring unreadable user config: {}", e);
            Ok(Config::default())
        }),
    }
}

fn run_render(opts: RenderOpts, mut config: Config) -> Result<()> {
    if let Some(output) = opts.output {
        config.output.path = output;
    }
    if opts.markers {
        config.style.show_markers = true;
    }

    let mut renderer = Renderer::from_config(&config)?;

    for file in &opts.files {
        let trace = load_measurement(file)
            .with_context(|| format!("Failed to read measurement {}", file.display()))?;
        println!("Loaded: {} ({} points)", trace.name, trace.len());
        renderer.add_trace(trace);
    }

    let summary = renderer.render().context("Failed to render plot")?;
    for skipped in &summary.skipped {
        println!("Skipped: {} ({})", skipped.name, skipped.error);
    }

    let output_path = renderer.output_path().to_path_buf();
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    renderer
        .save()
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!("\n{} of {} trace(s) plotted.", summary.drawn, renderer.count());
    println!("Output: {}", output_path.display());

    Ok(())
}
