use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use pv_scene::{Scene, SceneResult};
use pv_view::ViewTransform;

/// Viewport used by `info` when reporting the auto-fit zoom.
const REFERENCE_VIEWPORT: (f64, f64) = (1280.0, 720.0);

#[derive(Parser)]
#[command(name = "pv-cli")]
#[command(about = "Piping diagram scene tool - validate, inspect, and reformat scene documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a scene document
    Validate {
        /// Path to the scene JSON file
        scene_path: PathBuf,
    },
    /// Summarize a scene: components, bounds, auto-fit zoom
    Info {
        /// Path to the scene JSON file
        scene_path: PathBuf,
    },
    /// Rewrite a scene in the compact document format
    Fmt {
        /// Path to the scene JSON file
        scene_path: PathBuf,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { scene_path } => cmd_validate(&scene_path),
        Commands::Info { scene_path } => cmd_info(&scene_path),
        Commands::Fmt { scene_path, output } => cmd_fmt(&scene_path, output.as_deref()),
    };

    if let Err(err) = result {
        eprintln!("✗ {err}");
        std::process::exit(1);
    }
}

fn cmd_validate(scene_path: &Path) -> SceneResult<()> {
    println!("Validating scene: {}", scene_path.display());
    let scene = pv_scene::load_file(scene_path)?;
    println!("✓ Scene is valid ({} components)", scene.components.len());
    Ok(())
}

fn cmd_info(scene_path: &Path) -> SceneResult<()> {
    let scene = pv_scene::load_file(scene_path)?;

    if scene.is_empty() {
        println!("Empty scene");
        return Ok(());
    }

    println!("Components:");
    for component in &scene.components {
        println!("  {}", describe(component));
    }

    if let Some((min, max)) = scene.bounding_box() {
        println!(
            "\nBounds: [{}, {}] to [{}, {}] (grid cells)",
            min.x, min.y, max.x, max.y
        );
        let mut view = ViewTransform::default();
        view.fit_to_bounds(Some((min, max)), REFERENCE_VIEWPORT.0, REFERENCE_VIEWPORT.1);
        println!(
            "Auto-fit zoom at {}x{}: {:.3}",
            REFERENCE_VIEWPORT.0, REFERENCE_VIEWPORT.1, view.zoom
        );
    }
    Ok(())
}

fn cmd_fmt(scene_path: &Path, output: Option<&Path>) -> SceneResult<()> {
    let scene = pv_scene::load_file(scene_path)?;
    let text = pv_scene::serialize(&scene)?;

    if let Some(path) = output {
        std::fs::write(path, text)?;
        println!("✓ Wrote {}", path.display());
    } else {
        print!("{text}");
    }
    Ok(())
}

fn describe(component: &pv_model::Component) -> String {
    let id = component.id().unwrap_or("-");
    let pos = component.position();
    let mut line = format!("{:<14} {:<10} at [{}, {}]", component.type_tag(), id, pos.x, pos.y);
    if let Some(end) = component.end_position() {
        line.push_str(&format!(" to [{}, {}]", end.x, end.y));
    }
    let animation = component.animation();
    if !animation.is_empty() {
        line.push_str(&format!(
            " ({} keyframes, {:.1}s cycle)",
            animation.keyframes().len(),
            animation.total_duration()
        ));
    }
    line
}
