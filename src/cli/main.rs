// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.
/**
 * Nessus Interpreter - Operator CLI
 *
 * Features:
 * - Segment AI interpretation reports into summary + per-finding sections
 * - Inspect which views each workflow phase unlocks
 * - Replay a captured scan session offline from files
 *
 * (c) 2026 Bountyy Oy
 */
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, Level};

use nessus_interpreter::config::{AppConfig, ConfigLoader};
use nessus_interpreter::interpreter::Interpreter;
use nessus_interpreter::scan_request::{ScanRequest, ScanType};
use nessus_interpreter::service::FileService;
use nessus_interpreter::view::Disclosure;
use nessus_interpreter::{segment, Access, ParsedReport, Phase, ScanSession, View};

/// Nessus Interpreter - scan workflow and AI report tooling
#[derive(Parser)]
#[command(name = "nessus-interpreter")]
#[command(author = "Bountyy Oy <info@bountyy.fi>")]
#[command(version)]
#[command(about = "Gate the scan -> interpret -> advanced scan workflow and segment AI reports.", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Quiet mode - only show errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path (yaml, toml or json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Split an interpretation report into intro and sections
    Segment {
        /// Report file, or - for stdin
        input: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show which views a workflow phase unlocks
    Gate {
        /// Phase name, e.g. scan-complete
        phase: Phase,
    },

    /// Replay a full session from captured service responses
    Replay {
        /// Scan results JSON (finding key -> finding)
        #[arg(long)]
        results: PathBuf,

        /// Interpretation report text
        #[arg(long)]
        interpretation: PathBuf,

        /// Advanced scan results JSON (array of findings)
        #[arg(long)]
        advanced: Option<PathBuf>,

        /// Interpreter to request (defaults to the configured one)
        #[arg(short, long)]
        interpreter: Option<Interpreter>,

        /// Scan type (defaults to the configured one)
        #[arg(long)]
        scan_type: Option<ScanType>,

        /// Operator name
        #[arg(long, default_value = "operator")]
        name: String,

        /// Operator password
        #[arg(long, env = "NESSUS_PASSWORD", hide_env_values = true, default_value = "replay")]
        password: String,

        /// Scan name
        #[arg(long, default_value = "replay")]
        scan_name: String,

        /// Target address
        #[arg(long, default_value = "127.0.0.1")]
        target: String,

        /// Expand every finding panel
        #[arg(long)]
        expand: bool,

        /// Toggle one panel open: a scan finding key or advanced-<N>
        #[arg(long = "open", value_name = "ID")]
        open: Vec<String>,
    },

    /// Print the effective configuration
    Config,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(&cli, &config);
    debug!("Effective configuration: {:?}", config);

    match cli.command {
        Commands::Segment { input, format } => run_segment(&input, format),
        Commands::Gate { phase } => {
            run_gate(phase);
            Ok(())
        }
        Commands::Replay {
            results,
            interpretation,
            advanced,
            interpreter,
            scan_type,
            name,
            password,
            scan_name,
            target,
            expand,
            open,
        } => {
            let mut service = FileService::new(results, interpretation);
            if let Some(path) = advanced {
                service = service.with_advanced(path);
            }
            let request = ScanRequest::new(
                name,
                password,
                scan_name,
                scan_type.unwrap_or(config.defaults.scan_type),
                target,
            );
            let interpreter = interpreter.unwrap_or(config.defaults.interpreter);

            let panels = open_panels(&open);

            // Single-threaded: one call in flight at a time
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(run_replay(Arc::new(service), request, interpreter, expand, &panels))
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => ConfigLoader::new(path)?
            .load_config()
            .with_context(|| format!("Failed to load configuration from {:?}", path)),
        None => AppConfig::from_env(),
    }
}

fn init_logging(cli: &Cli, config: &AppConfig) {
    let level = if cli.debug {
        Some(Level::DEBUG)
    } else if cli.verbose {
        Some(Level::INFO)
    } else if cli.quiet {
        Some(Level::ERROR)
    } else {
        None
    };

    let filter = match level {
        Some(level) => tracing_subscriber::EnvFilter::new(level.as_str()),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.observability.log_level)),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if config.observability.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read report from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(input).with_context(|| format!("Failed to read report: {:?}", input))
}

fn run_segment(input: &Path, format: OutputFormat) -> Result<()> {
    let raw = read_input(input)?;
    let report = segment(&raw);
    info!("Segmented report into {} sections", report.sections.len());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_report(&report),
    }
    Ok(())
}

fn print_report(report: &ParsedReport) {
    println!("=== Summary ===");
    if report.intro.is_empty() {
        println!("(none)");
    } else {
        println!("{}", report.intro);
    }

    for (idx, section) in report.sections.iter().enumerate() {
        println!();
        println!("--- Section {} ---", idx + 1);
        println!("{}", section);
    }
}

fn run_gate(phase: Phase) {
    println!("Phase: {}", phase);
    for view in View::ALL {
        match phase.access(view) {
            Access::Granted => println!("  {:<13} {:<10} reachable", view, view.path()),
            Access::Blocked(reason) => println!(
                "  {:<13} {:<10} blocked: {} - {}",
                view,
                view.path(),
                reason.title(),
                reason.message()
            ),
        }
    }
}

async fn run_replay(
    service: Arc<FileService>,
    request: ScanRequest,
    interpreter: Interpreter,
    expand: bool,
    panels: &Disclosure,
) -> Result<()> {
    let mut session = ScanSession::new(service);

    println!("[1/3] Submitting scan '{}' ({}) against {}", request.scan_name, request.scan_type, request.scan_ip);
    let results = session
        .start_scan(&request)
        .await
        .map_err(|e| anyhow::anyhow!("{} ({})", e.user_message(), e))?;

    println!("Scan Results: {} findings", results.len());
    for (idx, (key, finding)) in results.iter().enumerate() {
        println!("  {}. {}", idx + 1, finding.label());
        if expand || panels.is_open(key) {
            println!("{}", indent(&finding.pretty(), 6));
        }
    }

    println!();
    println!("[2/3] Fetching interpretation from {}", interpreter);
    let interpretation = session
        .fetch_interpretation(interpreter)
        .await
        .map_err(|e| anyhow::anyhow!("{} ({})", e.user_message(), e))?;
    print_report(&interpretation.parsed);

    println!();
    println!("[3/3] Launching advanced scan");
    match session.launch_advanced_scan().await {
        Ok(advanced) => {
            println!("Advanced Scan Results: {} findings", advanced.len());
            for (idx, finding) in advanced.iter().enumerate() {
                println!("  Result #{}: {}", idx + 1, finding.label());
                if expand || panels.is_open(&advanced_panel_id(idx + 1)) {
                    println!("{}", indent(&finding.pretty(), 6));
                }
            }
        }
        Err(e) => println!("  {}", e.user_message()),
    }

    println!();
    println!("Final phase: {}", session.phase());
    Ok(())
}

fn open_panels(ids: &[String]) -> Disclosure {
    let mut panels = Disclosure::new();
    for id in ids {
        panels.toggle(id);
    }
    panels
}

fn advanced_panel_id(number: usize) -> String {
    format!("advanced-{}", number)
}

fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| format!("{}{}", pad, line))
        .collect::<Vec<_>>()
        .join("\n")
}
