use clap::{Parser, Subcommand};
use pw_core::SegmentId;
use pw_engine::{EngineError, PressureResult, PumpingResult};
use pw_project::ProjectError;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Parser)]
#[command(name = "pw-cli")]
#[command(about = "Pipeway CLI - cold water plumbing network sizing tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and structure
    Validate {
        /// Path to the project JSON file
        project_path: PathBuf,
    },
    /// List pipe segments in a project
    Segments {
        /// Path to the project JSON file
        project_path: PathBuf,
    },
    /// Compute the pressure table, or a single segment's results
    Pressure {
        /// Path to the project JSON file
        project_path: PathBuf,
        /// Restrict the output to one segment id
        #[arg(short, long)]
        segment: Option<u64>,
    },
    /// Size the pump of the pumping segment
    Pumping {
        /// Path to the project JSON file
        project_path: PathBuf,
    },
    /// Total pipe length per nominal diameter
    Lengths {
        /// Path to the project JSON file
        project_path: PathBuf,
    },
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("{0}")]
    Usage(String),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Segments { project_path } => cmd_segments(&project_path),
        Commands::Pressure {
            project_path,
            segment,
        } => cmd_pressure(&project_path, segment),
        Commands::Pumping { project_path } => cmd_pumping(&project_path),
        Commands::Lengths { project_path } => cmd_lengths(&project_path),
    }
}

fn cmd_validate(project_path: &Path) -> CliResult<()> {
    println!("Validating project: {}", project_path.display());
    pw_project::load_json(project_path)?;
    println!("✓ Project is valid");
    Ok(())
}

fn cmd_segments(project_path: &Path) -> CliResult<()> {
    let pipeway = pw_project::load_json(project_path)?;

    if pipeway.segments().is_empty() {
        println!("No pipe segments found in project");
    } else {
        println!(
            "Pipe segments ({}, material {}):",
            pipeway.unit().label(),
            pipeway.material().label()
        );
        for segment in pipeway.segments() {
            let predecessor = match segment.predecessor {
                Some(id) => format!("after #{id}"),
                None => "root".to_owned(),
            };
            println!(
                "  #{} {} - {} {} m, {}, {} weights",
                segment.id,
                segment.name,
                segment.nominal_diameter.label(),
                segment.length_m,
                predecessor,
                segment.flow_rate_weights
            );
        }
    }
    Ok(())
}

fn cmd_pressure(project_path: &Path, segment: Option<u64>) -> CliResult<()> {
    let pipeway = pw_project::load_json(project_path)?;

    match segment {
        Some(raw) => {
            let id = SegmentId::new(raw)
                .ok_or_else(|| CliError::Usage("segment id must be non-zero".to_owned()))?;
            let result = pw_engine::calculate_pressure(&pipeway, id)?;
            let name = pipeway.find_by_id(id).map_or("?", |s| s.name.as_str());
            print_pressure_row(id, name, &result);
        }
        None => {
            let table = pw_engine::pressure_table(&pipeway)?;
            if table.is_empty() {
                println!("No pipe segments found in project");
                return Ok(());
            }
            for (id, result) in &table {
                let name = pipeway.find_by_id(*id).map_or("?", |s| s.name.as_str());
                print_pressure_row(*id, name, result);
            }
        }
    }
    Ok(())
}

fn print_pressure_row(id: SegmentId, name: &str, result: &PressureResult) {
    println!("#{} {}", id, name);
    println!(
        "  flow:       {:.4} {}",
        result.flow_rate_l_s, result.flow_rate_unit
    );
    println!(
        "  velocity:   {:.4} {}{}",
        result.velocity_m_s,
        result.velocity_unit,
        warn(result.velocity_warning, "exceeds limit")
    );
    println!(
        "  unit loss:  {:.4} {}",
        result.unitary_pressure_loss, result.unitary_pressure_loss_unit
    );
    println!(
        "  eq. length: {:.4} {}",
        result.equivalent_length_m, result.equivalent_length_unit
    );
    println!(
        "  loss:       {:.4} {}",
        result.pressure_loss, result.pressure_unit
    );
    let pressure_note = if result.pressure_min_warning {
        warn(true, "below minimum")
    } else {
        warn(result.pressure_max_warning, "above maximum")
    };
    println!(
        "  pressure:   {:.4} {}{}",
        result.pressure, result.pressure_unit, pressure_note
    );
}

fn cmd_pumping(project_path: &Path) -> CliResult<()> {
    let pipeway = pw_project::load_json(project_path)?;

    let Some(pumping) = pipeway.pumping() else {
        println!("No pumping segment found in project");
        return Ok(());
    };
    let result = pw_engine::calculate_pumping(&pipeway, pumping)?;
    print_pumping(&result);
    Ok(())
}

fn print_pumping(result: &PumpingResult) {
    println!("Pump sizing:");
    println!(
        "  flow:               {:.4} {}{}",
        result.flow_rate_m3_h,
        result.flow_rate_unit,
        warn(result.flow_rate_warning, "below 15% of daily consumption")
    );
    println!(
        "  suction velocity:   {:.4} m/s",
        result.suction_velocity_m_s
    );
    println!(
        "  discharge velocity: {:.4} m/s{}",
        result.discharge_velocity_m_s,
        warn(result.velocity_warning, "exceeds limit")
    );
    println!(
        "  suction eq. length: {:.4} {} at {:.5} {}",
        result.suction_equivalent_length_m,
        result.equivalent_length_unit,
        result.suction_unitary_loss_mca_m,
        result.unitary_pressure_loss_unit
    );
    println!(
        "  discharge eq. length: {:.4} {} at {:.5} {}",
        result.discharge_equivalent_length_m,
        result.equivalent_length_unit,
        result.discharge_unitary_loss_mca_m,
        result.unitary_pressure_loss_unit
    );
    println!(
        "  manometric height:  {:.4} {}",
        result.manometric_height_m, result.manometric_height_unit
    );
    println!(
        "  calculated power:   {:.4} {}",
        result.calculated_pump_power_cv, result.power_unit
    );
    println!(
        "  selected power:     {:.4} {}{}",
        result.selected_pump_power_cv,
        result.power_unit,
        warn(result.inadequate_diameters_warning, "inadequate diameters")
    );
}

fn cmd_lengths(project_path: &Path) -> CliResult<()> {
    let pipeway = pw_project::load_json(project_path)?;

    let totals = pw_engine::length_by_diameter(&pipeway);
    if totals.is_empty() {
        println!("No pipe segments found in project");
    } else {
        println!("Pipe length per nominal diameter:");
        for (diameter, length_m) in &totals {
            println!("  {:<6} {:.2} m", diameter.label(), length_m);
        }
    }
    Ok(())
}

fn warn(flag: bool, message: &str) -> String {
    if flag {
        format!("  ⚠ {message}")
    } else {
        String::new()
    }
}
