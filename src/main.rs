//! Netsketch - schematic planner for SPICE-style netlists.
//!
//! # Usage
//!
//! ```bash
//! netsketch draw circuit.cir --svg circuit.svg
//! cat circuit.cir | netsketch check -
//! netsketch examples 3 --format json
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use netsketch_core::{
    check_netlist, draw_schematic,
    error::{NetsketchError, Result},
    layout::DEFAULT_MAX_PER_ROW,
    library, render_svg,
    storage::{self, CircuitRecord},
    LayoutConfig, Schematic,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

/// Schematic planner for SPICE-style netlists
#[derive(Parser, Debug)]
#[command(name = "netsketch")]
#[command(about = "Validate SPICE-style netlists and plan their schematics", long_about = None)]
#[command(version)]
struct Cli {
    /// Log traversal and layout decisions
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a netlist and plan its schematic
    Draw {
        /// Netlist file, or `-` for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        output: DrawOutput,
    },

    /// Parse and validate a netlist without drawing it
    Check {
        /// Netlist file, or `-` for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// List the built-in examples, or draw one
    Examples {
        /// Example id
        #[arg(value_name = "ID")]
        id: Option<String>,

        #[command(flatten)]
        output: DrawOutput,
    },

    /// Save a netlist as a circuit record
    Save {
        /// Netlist file, or `-` for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Free-text description stored with the netlist
        #[arg(short, long, default_value = "")]
        description: String,

        /// Directory to save into
        #[arg(long, value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        /// File name (defaults to a timestamped name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Load a circuit record and draw it
    Load {
        /// Record file; `.json` is appended when no extension is given
        #[arg(value_name = "RECORD")]
        record: PathBuf,

        #[command(flatten)]
        output: DrawOutput,
    },

    /// List saved circuit records
    List {
        /// Directory to search
        #[arg(long, value_name = "DIR", default_value = ".")]
        dir: PathBuf,
    },
}

#[derive(Args, Debug)]
struct DrawOutput {
    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Groups per row before wrapping
    #[arg(long, default_value_t = DEFAULT_MAX_PER_ROW)]
    max_per_row: usize,

    /// Also write the schematic as SVG
    #[arg(long, value_name = "OUT")]
    svg: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Draw { file, output } => {
            read_netlist(&file).and_then(|text| handle_draw(&text, &output))
        }
        Commands::Check { file, format } => {
            read_netlist(&file).and_then(|text| handle_check(&text, format))
        }
        Commands::Examples { id, output } => handle_examples(id.as_deref(), &output),
        Commands::Save {
            file,
            description,
            dir,
            name,
        } => handle_save(&file, &description, &dir, name.as_deref()),
        Commands::Load { record, output } => handle_load(&record, &output),
        Commands::List { dir } => handle_list(&dir),
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_netlist(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| NetsketchError::file_read("<stdin>", e))?;
        return Ok(text);
    }
    fs::read_to_string(file).map_err(|e| NetsketchError::file_read(file.display().to_string(), e))
}

fn handle_draw(text: &str, output: &DrawOutput) -> Result<i32> {
    let config = LayoutConfig::new().with_max_per_row(output.max_per_row);
    let schematic = draw_schematic(text, &config)?;

    if let Some(path) = &output.svg {
        let svg = render_svg(&schematic.layout)?;
        fs::write(path, svg).map_err(|e| NetsketchError::OutputWrite {
            path: path.display().to_string(),
            source: e,
        })?;
    }

    match output.format {
        OutputFormat::Human => output_human(&schematic, output.svg.as_deref()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&schematic)?),
    }
    Ok(0)
}

fn output_human(schematic: &Schematic, svg: Option<&Path>) {
    println!("Source: {}", schematic.source);
    println!("Path ({} group(s)):", schematic.path.len());
    for (idx, group) in schematic.path.groups.iter().enumerate() {
        println!("  {}. {}", idx + 1, group);
    }
    if !schematic.path.reaches_ground() {
        println!("  (path stops before ground)");
    }

    if !schematic.warnings.is_empty() {
        println!("Warnings:");
        for warning in &schematic.warnings {
            println!("  ! {}", warning);
        }
    }
    if !schematic.unreachable.is_empty() {
        println!("Not drawn: {}", schematic.unreachable.join(", "));
    }
    if !schematic.skipped_lines.is_empty() {
        let lines: Vec<String> = schematic.skipped_lines.iter().map(|l| l.to_string()).collect();
        println!("Skipped lines: {}", lines.join(", "));
    }

    let layout = &schematic.layout;
    println!(
        "Layout: {} primitive(s), {} row(s), {:.1} x {:.1}",
        layout.primitives.len(),
        layout.rows,
        layout.bounds.width(),
        layout.bounds.height()
    );
    if let Some(path) = svg {
        println!("SVG written to {}", path.display());
    }
}

fn handle_check(text: &str, format: OutputFormat) -> Result<i32> {
    let (parsed, report) = check_netlist(text)?;

    match format {
        OutputFormat::Human => {
            println!(
                "{} component(s), {} skipped line(s)",
                parsed.components.len(),
                parsed.skipped_lines.len()
            );
            for error in &report.errors {
                println!("  x {}", error);
            }
            for warning in &report.warnings {
                println!("  ! {}", warning);
            }
            if report.is_ok() {
                println!("No errors found");
            }
        }
        OutputFormat::Json => {
            let value = json!({
                "components": parsed.components,
                "skipped_lines": parsed.skipped_lines,
                "errors": report.errors,
                "warnings": report.warnings,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(if report.is_ok() { 0 } else { 1 })
}

fn handle_examples(id: Option<&str>, output: &DrawOutput) -> Result<i32> {
    let Some(id) = id else {
        match output.format {
            OutputFormat::Human => {
                for example in library::examples() {
                    println!("{:>3}  {}", example.id, example.name);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(library::examples())?)
            }
        }
        return Ok(0);
    };

    let example = library::example(id)?;
    if matches!(output.format, OutputFormat::Human) {
        println!("Example {}: {}", example.id, example.name);
        println!("{}", example.netlist.trim_end());
        println!();
    }
    handle_draw(example.netlist, output)
}

fn handle_save(file: &Path, description: &str, dir: &Path, name: Option<&str>) -> Result<i32> {
    let text = read_netlist(file)?;
    let record = CircuitRecord::new(text, description);
    let path = storage::save_circuit(dir, &record, name)?;
    println!("Saved {}", path.display());
    Ok(0)
}

fn handle_load(record: &Path, output: &DrawOutput) -> Result<i32> {
    let path = if record.extension().is_none() {
        record.with_extension("json")
    } else {
        record.to_path_buf()
    };

    let record = storage::load_circuit(&path)?;
    if matches!(output.format, OutputFormat::Human) {
        println!("Loaded {} ({})", path.display(), record.day());
        if !record.description.is_empty() {
            println!("{}", record.description);
        }
        println!();
    }
    handle_draw(&record.spice_code, output)
}

fn handle_list(dir: &Path) -> Result<i32> {
    let saved = storage::list_saved_circuits(dir)?;
    if saved.is_empty() {
        println!("No saved circuits in {}", dir.display());
        return Ok(0);
    }

    for entry in &saved {
        let name = entry
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match &entry.record {
            Some(record) => println!("{}  {}  {}", name, record.day(), record.description),
            None => println!("{}  (unreadable)", name),
        }
    }
    Ok(0)
}
