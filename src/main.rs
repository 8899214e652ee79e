use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use platonic_stl::config::FileConfig;
use platonic_stl::mesh::{estimate_stl_size, read_back, verify, write_stl};
use platonic_stl::solids::{Solid, SolidKind};

/// Platonic Solid Generator: STL Exporter
///
/// Generates platonic solids of a given type in ASCII STL format,
/// standing flat on the build plate. The following codes denote the type:
///   1. Tetrahedron
///   2. Cube
///   3. Octahedron
///   4. Dodecahedron
///   5. Icosahedron
///
/// Examples:
///   # Write Dodecahedron.stl to the current directory
///   platonic-stl --type 4
///
///   # Octahedron with a flat base instead of a bottom apex
///   platonic-stl --type 3 --split -o prints/
#[derive(Parser, Debug)]
#[command(name = "platonic-stl")]
#[command(version, about, long_about = None)]
struct Args {
    /// Type of solid to generate (1-5)
    #[arg(short = 't', long = "type", allow_negative_numbers = true)]
    solid_type: Option<i64>,

    /// Flatten the bottom of the octahedron so it prints without supports
    #[arg(long)]
    split: bool,

    /// Directory to write <Name>.stl into (defaults to the current directory)
    #[arg(short = 'o', long)]
    output_dir: Option<PathBuf>,

    /// Re-read the written file and check it against the generated mesh
    #[arg(long)]
    verify: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Path to config file (optional, auto-searches platonic-stl.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };
    let file_config = file_config.unwrap_or_default();

    let selection = match (args.solid_type, file_config.solid_type.as_ref()) {
        (Some(code), _) => SolidKind::from_code(code),
        (None, Some(selector)) => selector.resolve(),
        (None, None) => bail!("Must provide --type <1-5>. Run with --help to list type names."),
    };
    let kind = match selection {
        Ok(kind) => kind,
        Err(e) => {
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let split = args.split || file_config.split;
    let verbose = args.verbose || file_config.verbose;
    let verify_output = args.verify || file_config.verify;
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| file_config.output_dir.clone());

    println!("platonic-stl - Platonic Solid STL Generator");
    println!("===========================================");
    println!();

    if verbose {
        println!("Configuration:");
        println!("  Type: {} ({})", kind.code(), kind);
        println!("  Split: {}", if split { "enabled" } else { "disabled" });
        if split && !kind.supports_split() {
            println!("  (split has no effect on a {})", kind);
        }
        println!("  Output directory: {}", output_dir.display());
        println!("  Verify: {}", if verify_output { "enabled" } else { "disabled" });
        println!();
    }

    let spinner = create_spinner(&format!("Generating solid of type {}...", kind));
    let start = Instant::now();
    let solid = Solid::build(kind, split).context("Failed to generate solid")?;
    spinner.finish_with_message(format!(
        "Generated {}: {} vertices, {} triangles [{:.3}s]",
        solid.name,
        solid.vertices.len(),
        solid.triangles.len(),
        start.elapsed().as_secs_f32()
    ));

    if verbose {
        let (min, max) = solid.bounds();
        println!(
            "  Bounds: ({:.3}, {:.3}, {:.3}) -> ({:.3}, {:.3}, {:.3})",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
        println!("  Lowest point: z = {:.6}", solid.min_z());
    }

    let spinner = create_spinner("Writing STL file...");
    let start = Instant::now();
    let output_path = write_stl(&output_dir, &solid).context("Failed to write STL file")?;
    let file_size = estimate_stl_size(&solid);
    spinner.finish_with_message(format!(
        "Wrote {} triangles ({:.1} KB) [{:.3}s]",
        solid.triangles.len(),
        file_size as f64 / 1024.0,
        start.elapsed().as_secs_f32()
    ));

    if verify_output {
        let spinner = create_spinner("Verifying STL file...");
        let mesh = read_back(&output_path)?;
        verify(&solid, &mesh).context("Written STL does not match the generated solid")?;
        spinner.finish_with_message(format!(
            "Verified {} facets, {} vertices",
            mesh.faces.len(),
            mesh.vertices.len()
        ));
    }

    println!();
    println!(
        "Done! Total time: {:.3}s",
        total_start.elapsed().as_secs_f32()
    );
    println!();
    println!("Output: {}", output_path.display());

    Ok(ExitCode::SUCCESS)
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
