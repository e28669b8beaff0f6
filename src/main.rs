use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use flowcheck::config::Config;
use flowcheck::diagram;
use flowcheck::discover::discover_workflows;
use flowcheck::registry::PortalRegistry;
use flowcheck::report::{ReportFormat, Reporter};

/// Validate workflow definitions against the portal registry and render them as Mermaid flowcharts
#[derive(Parser, Debug)]
#[command(name = "flowcheck", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Project root that relative paths are resolved against
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// YAML settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory scanned for workflow files
    #[arg(long, global = true)]
    workflows_dir: Option<PathBuf>,

    /// Process workflows in lexicographic order instead of directory order
    #[arg(long, global = true)]
    sorted: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check every workflow for required fields and known portals
    Validate {
        /// Portal registry file
        #[arg(long)]
        registry: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = FormatCli::Text)]
        format: FormatCli,
    },

    /// Write one Mermaid diagram per workflow
    Visualize {
        /// Output directory for diagrams
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatCli {
    Text,
    Json,
}

impl From<FormatCli> for ReportFormat {
    fn from(f: FormatCli) -> Self {
        match f {
            FormatCli::Text => ReportFormat::Text,
            FormatCli::Json => ReportFormat::Json,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(dir) = &cli.workflows_dir {
        config.workflows_dir = dir.clone();
    }
    config.sort_paths |= cli.sorted;
    debug!(?config, root = %cli.root.display(), "configuration resolved");

    match cli.command {
        Command::Validate { registry, format } => {
            if let Some(path) = registry {
                config.registry_path = path;
            }
            validate(&cli.root, &config, format.into())
        }
        Command::Visualize { out_dir } => {
            if let Some(dir) = out_dir {
                config.diagrams_dir = dir;
            }
            visualize(&cli.root, &config)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn validate(root: &Path, config: &Config, format: ReportFormat) -> Result<ExitCode> {
    let registry_path = config.registry_path(root);
    let registry = PortalRegistry::load(&registry_path)?;

    let workflows_dir = config.workflows_dir(root);
    let paths = discover_workflows(
        &workflows_dir,
        &config.workflow_extension,
        Some(&registry_path),
        config.sort_paths,
    )
    .with_context(|| format!("cannot list workflows in {}", workflows_dir.display()))?;

    let mut reporter = Reporter::new(io::stdout().lock()).with_format(format);
    let summary = reporter.run(&paths, root, &registry)?;

    Ok(ExitCode::from(summary.exit_code()))
}

fn visualize(root: &Path, config: &Config) -> Result<ExitCode> {
    let workflows_dir = config.workflows_dir(root);
    let diagrams_dir = config.diagrams_dir(root);
    let registry_path = config.registry_path(root);

    let paths = discover_workflows(
        &workflows_dir,
        &config.workflow_extension,
        Some(&registry_path),
        config.sort_paths,
    )
    .with_context(|| format!("cannot list workflows in {}", workflows_dir.display()))?;

    for path in paths {
        let written = diagram::visualize_file(&path, &diagrams_dir, &config.diagram_extension)?;
        println!("[visualize] Wrote {}", written.display());
    }

    Ok(ExitCode::SUCCESS)
}
