//! Takeoff - construction takeoff aggregation and BOQ synthesis.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use takeoff_core::Project;
use takeoff_core::storage::{export_file_name, read_snapshot, write_workbook};
use takeoff_engine::engine::{CategoryFilter, format_number};

fn print_usage() {
    eprintln!("Usage: takeoff [OPTIONS] <SNAPSHOT>");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <SNAPSHOT>                Extraction snapshot to load (.json)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -p, --prices <FILE>       Load unit prices from a TOML file");
    eprintln!("  -s, --search <TERM>       Filter items by description substring");
    eprintln!("  -c, --category <NAME>     Filter items by exact category");
    eprintln!("  -o, --output <DIR>        Directory for the exported workbook (default: .)");
    eprintln!("  -h, --help                Print help");
}

struct Args {
    snapshot: PathBuf,
    prices: Option<PathBuf>,
    search: Option<String>,
    category: Option<String>,
    output: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    let mut snapshot: Option<PathBuf> = None;
    let mut prices: Option<PathBuf> = None;
    let mut search: Option<String> = None;
    let mut category: Option<String> = None;
    let mut output = PathBuf::from(".");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-p" | "--prices" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --prices requires a file path");
                    std::process::exit(1);
                }
                prices = Some(PathBuf::from(&args[i]));
            }
            "-s" | "--search" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --search requires a value");
                    std::process::exit(1);
                }
                search = Some(args[i].to_string());
            }
            "-c" | "--category" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --category requires a value");
                    std::process::exit(1);
                }
                category = Some(args[i].to_string());
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires a directory");
                    std::process::exit(1);
                }
                output = PathBuf::from(&args[i]);
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => {
                if snapshot.is_none() {
                    snapshot = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Multiple snapshot files specified");
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    let Some(snapshot) = snapshot else {
        print_usage();
        std::process::exit(1);
    };

    if let Err(e) = run(Args {
        snapshot,
        prices,
        search,
        category,
        output,
    }) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let snapshot = read_snapshot(&args.snapshot)
        .with_context(|| format!("failed to load snapshot {}", args.snapshot.display()))?;
    let mut project = Project::from_snapshot(snapshot);

    if let Some(term) = &args.search {
        project.set_search_term(term);
    }
    if let Some(name) = &args.category {
        project.set_category_filter(CategoryFilter::Only(name.clone()));
    }
    if let Some(path) = &args.prices {
        load_prices(&mut project, path)?;
    }

    let groups = project.grouped_items();
    let summaries = project.rebar_summaries();

    println!("{}", project.name);
    if !project.summary.is_empty() {
        println!("{}", project.summary);
    }
    println!();

    if groups.is_empty() {
        println!("No items match the current filters.");
    }
    for group in &groups {
        println!(
            "  {:<52} {:>10} {}",
            group.name,
            format_number(group.total_quantity),
            group.unit
        );
    }
    for summary in &summaries {
        println!(
            "  {:<52} {:>10} kg",
            summary.name,
            format_number(summary.total_weight)
        );
    }
    println!();
    println!("Grand total: {}", format_number(project.grand_total()));

    let workbook = project.synthesize_workbook();
    let path = args.output.join(export_file_name(&project.name));
    write_workbook(&path, &workbook)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());

    Ok(())
}

/// Load unit prices from a TOML table of display name -> rate. Entries that
/// do not coerce to a number price at zero, matching interactive input.
fn load_prices(project: &mut Project, path: &std::path::Path) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read prices file {}", path.display()))?;
    let table: toml::Table = content
        .parse()
        .with_context(|| format!("failed to parse prices file {}", path.display()))?;

    for (name, value) in table {
        let raw = match value {
            toml::Value::String(s) => s,
            other => other.to_string(),
        };
        project.set_unit_price(&name, &raw);
    }
    Ok(())
}
