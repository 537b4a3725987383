use cb_app::{AppError, AppResult, CaseFormat, RunProgressEvent, RunRequest, run_service};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cb-cli")]
#[command(about = "combust CLI - Combustion efficiency and emissions calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List fuels in the catalog
    Fuels {
        /// JSON fuel catalog layered over the builtin fuels
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Case-insensitive filter on id, name, formula or alias
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Validate case file syntax and structure
    Validate {
        /// Path to the case file (YAML or JSON)
        case_path: PathBuf,
    },
    /// Run a combustion calculation
    Run {
        /// Path to the case file (YAML or JSON)
        case_path: PathBuf,
        /// JSON fuel catalog layered over the builtin fuels
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Print the full result as JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
    /// Print a starter case file
    Template {
        #[arg(long, value_enum, default_value_t = TemplateFormat::Yaml)]
        format: TemplateFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TemplateFormat {
    Yaml,
    Json,
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fuels { catalog, query } => cmd_fuels(catalog.as_deref(), query.as_deref()),
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Run {
            case_path,
            catalog,
            json,
        } => cmd_run(&case_path, catalog.as_deref(), json),
        Commands::Template { format } => cmd_template(format),
    }
}

fn cmd_fuels(catalog_path: Option<&Path>, query: Option<&str>) -> AppResult<()> {
    let catalog = cb_app::load_catalog(catalog_path)?;
    let fuels = catalog.search(query.unwrap_or(""));

    if fuels.is_empty() {
        println!("No fuels found");
        return Ok(());
    }

    println!(
        "{:<18} {:<22} {:<12} {:<7} {:>9} {:>8}",
        "ID", "Name", "Symbol", "Phase", "M g/mol", "LHV"
    );
    for fuel in fuels {
        println!(
            "{:<18} {:<22} {:<12} {:<7} {:>9.2} {:>8.2}",
            fuel.id,
            fuel.name,
            fuel.symbol,
            fuel.phase.label(),
            fuel.molar_mass,
            fuel.heating_value
        );
    }
    Ok(())
}

fn cmd_validate(case_path: &Path) -> AppResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = cb_app::load_case(case_path)?;
    println!("✓ Case is valid: {} ({} fuel(s))", case.name, case.mixture.len());
    Ok(())
}

fn cmd_run(case_path: &Path, catalog_path: Option<&Path>, json: bool) -> AppResult<()> {
    let request = RunRequest {
        case_path,
        catalog_path,
    };

    let response = run_service::run_case_with_progress(
        &request,
        Some(&mut |event| render_cli_progress(&event)),
    )?;
    clear_progress_line();

    if json {
        let text = serde_json::to_string_pretty(&response.result)
            .map_err(|e| AppError::InvalidInput(format!("Failed to serialize result: {}", e)))?;
        println!("{}", text);
    } else {
        println!("Case: {}", response.case_name);
        println!();
        print!("{}", cb_app::render_text(&response.result));
        println!();
        println!(
            "Timing: load {:.3} ms, compute {:.3} ms, total {:.3} ms",
            response.timing.load_time_s * 1e3,
            response.timing.compute_time_s * 1e3,
            response.timing.total_time_s * 1e3
        );
    }
    Ok(())
}

fn cmd_template(format: TemplateFormat) -> AppResult<()> {
    let format = match format {
        TemplateFormat::Yaml => CaseFormat::Yaml,
        TemplateFormat::Json => CaseFormat::Json,
    };
    print!("{}", cb_app::render_template(format)?);
    Ok(())
}

// Progress goes to stderr so `run --json` output stays parseable.
fn clear_progress_line() {
    eprint!("\r{}\r", " ".repeat(80));
    let _ = io::stderr().flush();
}

fn render_cli_progress(event: &RunProgressEvent) {
    let mut line = format!(
        "\r{}  elapsed={:.2}s",
        event.stage.label(),
        event.elapsed_wall_s
    );
    if let Some(message) = &event.message {
        line.push_str(&format!("  {}", message));
    }
    eprint!("{:<80}", line);
    let _ = io::stderr().flush();
}
