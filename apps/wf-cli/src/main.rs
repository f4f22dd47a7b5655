use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wf_campus::{CampusError, CampusMap, load_campus};
use wf_script::{ScriptDriver, ScriptError};

#[derive(Parser)]
#[command(name = "wf-cli")]
#[command(about = "Wayfinder CLI - shortest routes over weighted networks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate campus file syntax and structure
    Validate {
        /// Path to the campus file (YAML, or JSON by extension)
        campus_path: PathBuf,
    },
    /// List buildings on a campus
    Buildings {
        /// Path to the campus file (YAML, or JSON by extension)
        campus_path: PathBuf,
    },
    /// Find the shortest walking route between two buildings
    Route {
        /// Path to the campus file (YAML, or JSON by extension)
        campus_path: PathBuf,
        /// Short name of the starting building
        start: String,
        /// Short name of the destination building
        end: String,
        /// Print the route as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a graph command script
    Script {
        /// Script file, or `-` for stdin
        script_path: PathBuf,
    },
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Campus(#[from] CampusError),

    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing; RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { campus_path } => cmd_validate(&campus_path),
        Commands::Buildings { campus_path } => cmd_buildings(&campus_path),
        Commands::Route {
            campus_path,
            start,
            end,
            json,
        } => cmd_route(&campus_path, &start, &end, json),
        Commands::Script { script_path } => cmd_script(&script_path),
    }
}

fn cmd_validate(campus_path: &Path) -> CliResult<()> {
    println!("Validating campus: {}", campus_path.display());
    let doc = load_campus(campus_path)?;
    let map = CampusMap::new(doc)?;
    println!("✓ Campus is valid");
    println!("  Buildings: {}", map.buildings().len());
    println!("  Points:    {}", map.graph().node_count());
    println!("  Walkways:  {}", map.graph().edge_count());
    Ok(())
}

fn cmd_buildings(campus_path: &Path) -> CliResult<()> {
    let map = CampusMap::from_file(campus_path)?;
    let names = map.building_names();

    if names.is_empty() {
        println!("No buildings found on campus");
    } else {
        println!("Buildings:");
        for (short, long) in names {
            println!("  {:<8} {}", short, long);
        }
    }
    Ok(())
}

fn cmd_route(campus_path: &Path, start: &str, end: &str, json: bool) -> CliResult<()> {
    let map = CampusMap::from_file(campus_path)?;
    let route = map.route(start, end)?;
    info!(start, end, found = route.is_some(), "route query");

    if json {
        println!("{}", serde_json::to_string_pretty(&route)?);
        return Ok(());
    }

    match route {
        None => println!("No route from {} to {}", start, end),
        Some(route) => {
            println!(
                "Route from {} ({}) to {} ({}):",
                start,
                map.long_name_for_short(start)?,
                end,
                map.long_name_for_short(end)?
            );
            for leg in &route.legs {
                println!("  {} -> {}  {:.3}", leg.start, leg.end, leg.cost);
            }
            println!("Total cost: {:.3}", route.cost);
        }
    }
    Ok(())
}

fn cmd_script(script_path: &Path) -> CliResult<()> {
    let stdout = io::stdout().lock();
    if script_path == Path::new("-") {
        ScriptDriver::new(io::stdin().lock(), stdout).run()?;
    } else {
        let file = BufReader::new(File::open(script_path)?);
        ScriptDriver::new(file, stdout).run()?;
    }
    Ok(())
}
