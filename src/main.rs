mod catalog;
mod cli;
mod config;
mod ledger;
mod report;

use catalog::TestCategory;
use clap::{Parser, Subcommand};
use colored::Colorize;
use config::RigcheckConfig;
use ledger::TestStatus;
use report::{LedgerReport, ReportFormat};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Load the user config if present, defaulting when absent
fn load_config() -> anyhow::Result<RigcheckConfig> {
    let path = RigcheckConfig::default_path();
    Ok(RigcheckConfig::load_optional(&path)?.unwrap_or_default())
}

/// Colorize a verdict symbol for terminal listings
fn status_icon(status: TestStatus) -> colored::ColoredString {
    match status {
        TestStatus::Pass => "✓".bright_green(),
        TestStatus::Fail => "✗".bright_red(),
        TestStatus::Skipped => "○".bright_yellow(),
    }
}

#[derive(Parser)]
#[command(name = "rigcheck")]
#[command(version, about = "Verdict ledger and scoring reports for display and peripheral diagnostics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Override the results data directory
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the diagnostic catalog with recorded verdicts
    Tests,

    /// Record a verdict for a test
    Mark {
        /// Test id (see `rigcheck tests`)
        test_id: String,

        /// Verdict to record
        #[arg(value_enum)]
        status: TestStatus,

        /// Free-form observation to attach
        #[arg(long)]
        notes: Option<String>,

        /// Display name, required for ids outside the catalog
        #[arg(long)]
        name: Option<String>,
    },

    /// Show the ledger summary and score
    Status,

    /// Render the full diagnostics report
    Report {
        /// Report format
        #[arg(long, value_enum, default_value = "text")]
        format: ReportFormat,

        /// Output file (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Discard all recorded verdicts
    Clear {
        /// Skip confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter_layer = if cli.debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::new("info")
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Rigcheck v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;

    match cli.command {
        Commands::Tests => {
            info!("Listing diagnostic catalog");
            cmd_tests(cli.data_dir, &config)?;
        }
        Commands::Mark {
            test_id,
            status,
            notes,
            name,
        } => {
            info!("Recording {} verdict for {}", status, test_id);
            cmd_mark(cli.data_dir, &config, &test_id, status, name, notes)?;
        }
        Commands::Status => {
            info!("Checking ledger status");
            cmd_status(cli.data_dir, &config)?;
        }
        Commands::Report { format, output } => {
            info!("Generating diagnostics report");
            cmd_report(cli.data_dir, &config, format, output)?;
        }
        Commands::Clear { yes } => {
            info!("Clearing recorded verdicts");
            cmd_clear(cli.data_dir, &config, yes)?;
        }
    }

    Ok(())
}

fn cmd_tests(data_dir: Option<PathBuf>, config: &RigcheckConfig) -> anyhow::Result<()> {
    println!("{}", "🔬 Diagnostic Test Catalog".bright_cyan().bold());
    println!("{}", "─".repeat(50).dimmed());

    let ledger = cli::open_ledger(data_dir, config);
    let results = ledger.all_results();

    for category in TestCategory::all() {
        println!();
        println!("{}", format!("{}", category).bright_yellow().bold());

        for test in catalog::tests_in_category(category) {
            match cli::verdict_for(results, test.id) {
                Some(verdict) => println!(
                    "  {} {} {} {}",
                    status_icon(verdict.status),
                    format!("{:<14}", test.id).cyan(),
                    format!("{:<24}", test.name),
                    format!("[{}]", verdict.status).dimmed()
                ),
                None => println!(
                    "  {} {} {}",
                    "·".dimmed(),
                    format!("{:<14}", test.id).cyan(),
                    format!("{:<24}", test.name).dimmed()
                ),
            }
        }
    }

    println!();
    println!("{}", "─".repeat(50).dimmed());
    println!("  {}", cli::badge_line(&ledger).dimmed());
    println!();
    println!("{}", "💡 Next Step:".bright_green().bold());
    println!(
        "  Run {} to record a verdict",
        "rigcheck mark <TEST_ID> <pass|fail|skipped>".cyan()
    );
    println!();

    Ok(())
}

fn cmd_mark(
    data_dir: Option<PathBuf>,
    config: &RigcheckConfig,
    test_id: &str,
    status: TestStatus,
    name: Option<String>,
    notes: Option<String>,
) -> anyhow::Result<()> {
    let mut ledger = cli::open_ledger(data_dir, config);

    let result = cli::build_verdict(test_id, status, name, notes)?;
    let test_name = result.test_name.clone();
    ledger.add_result(result);

    println!(
        "{} {} {} {}",
        status_icon(status),
        "Recorded".bright_green().bold(),
        test_name.bold(),
        format!("[{}]", status).dimmed()
    );
    println!("  {}", cli::badge_line(&ledger).dimmed());

    Ok(())
}

fn cmd_status(data_dir: Option<PathBuf>, config: &RigcheckConfig) -> anyhow::Result<()> {
    println!("{}", "📊 Rig Status".bright_cyan().bold());
    println!();

    let ledger = cli::open_ledger(data_dir, config);

    if ledger.is_empty() {
        println!("{}", "No verdicts recorded yet.".dimmed());
        println!();
        println!("{}", "💡 Get started:".bright_yellow().bold());
        println!(
            "  {} Run {} to see the diagnostic catalog",
            "1.".bright_blue(),
            "rigcheck tests".cyan()
        );
        println!(
            "  {} Run {} after each test you perform",
            "2.".bright_blue(),
            "rigcheck mark <TEST_ID> <pass|fail|skipped>".cyan()
        );
        println!();
        return Ok(());
    }

    let report = LedgerReport::from_ledger(&ledger);
    let summary = &report.summary;

    let score_line = format!("Score: {}/100", summary.score);
    if summary.failed > 0 {
        println!("  {}", score_line.bright_red().bold());
    } else if summary.passed == summary.total {
        println!("  {}", score_line.bright_green().bold());
    } else {
        println!("  {}", score_line.bright_yellow().bold());
    }
    println!();

    println!("{}", "Recorded Verdicts:".bright_yellow().bold());
    println!("{}", "─".repeat(50).dimmed());

    for result in &report.results {
        println!(
            "  {} {} {}",
            status_icon(result.status),
            format!("{:<26}", result.test_name),
            report::format_recorded(result.timestamp).dimmed()
        );
        if let Some(notes) = &result.notes {
            println!("      {}", format!("note: {}", notes).dimmed());
        }
    }

    println!("{}", "─".repeat(50).dimmed());
    println!(
        "  {} graded | {} passed | {} failed | {} skipped",
        summary.total, summary.passed, summary.failed, summary.skipped
    );
    println!(
        "  Catalog coverage: {}/{} tests",
        summary.catalog_graded, summary.catalog_total
    );
    println!();

    println!("{}", "💡 Next Step:".bright_green().bold());
    if summary.catalog_graded < summary.catalog_total {
        println!(
            "  Run {} to see which tests still need a verdict",
            "rigcheck tests".cyan()
        );
    } else if summary.failed > 0 {
        println!(
            "  Re-run the failing tests, then {} the outcome",
            "rigcheck mark".cyan()
        );
    } else {
        println!(
            "  Run {} to export the full report",
            "rigcheck report --format markdown".cyan()
        );
    }
    println!();

    Ok(())
}

fn cmd_report(
    data_dir: Option<PathBuf>,
    config: &RigcheckConfig,
    format: ReportFormat,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let ledger = cli::open_ledger(data_dir, config);
    let report = LedgerReport::from_ledger(&ledger);
    let rendered = report.format(format);

    match output {
        Some(path) => {
            std::fs::write(&path, &rendered)?;

            println!("{}", "✅ Report written!".bright_green().bold());
            println!();
            println!("{}: {:?}", "Output file".bold(), path);
            println!("{}: {:?}", "Format".bold(), format);
            println!();
        }
        None => {
            for line in rendered.lines() {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

fn cmd_clear(
    data_dir: Option<PathBuf>,
    config: &RigcheckConfig,
    skip_confirm: bool,
) -> anyhow::Result<()> {
    println!("{}", "🔄 Clear Verdicts".bright_cyan().bold());
    println!();

    let mut ledger = cli::open_ledger(data_dir, config);

    if ledger.is_empty() {
        // Still persists, so a corrupt slot comes back as an empty ledger
        ledger.clear_results();
        println!("{}", "No verdicts recorded.".dimmed());
        return Ok(());
    }

    println!("{}", "⚠️  Warning:".yellow().bold());
    println!(
        "  This will discard {} recorded verdict(s)",
        ledger.len().to_string().yellow()
    );
    println!();

    if !skip_confirm {
        print!("Are you sure you want to clear the ledger? [y/N] ");
        use std::io::{self, Write};
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !cli::confirmation_accepted(&input) {
            println!("{}", "Clear cancelled.".dimmed());
            return Ok(());
        }
    }

    ledger.clear_results();

    println!();
    println!("{}", "✅ Ledger cleared!".bright_green().bold());
    println!();
    println!("{}", "💡 Next Step:".bright_yellow().bold());
    println!("  Run {} to start a fresh pass", "rigcheck tests".cyan());
    println!();

    Ok(())
}
