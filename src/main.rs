//! Gesture Recognizer - stroke-to-template matching engine
//!
//! Matches captured pointer strokes against a library of template shapes.

use gesture_recognizer::app::cli::{Cli, Commands, ConfigAction};
use gesture_recognizer::app::config::Config;
use gesture_recognizer::capture::types::Stroke;
use gesture_recognizer::recognition::recognizer::Recognizer;
use gesture_recognizer::recognition::template::TemplateLibrary;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first so we can use --verbose to set log level
    let cli = Cli::parse_args();

    // Initialize tracing (--verbose enables debug-level output)
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load config
    let config = if let Some(path) = &cli.config {
        Config::load(path)?
    } else {
        Config::load_default()?
    };

    // Execute command
    match cli.command {
        Commands::Recognize { stroke, templates } => {
            run_recognize(&stroke, &templates, &config)?;
        }
        Commands::Templates { library, detailed } => {
            run_templates(&library, detailed)?;
        }
        Commands::Init { force } => {
            run_init(force, &config)?;
        }
        Commands::Config { action } => {
            run_config(action, &config)?;
        }
    }

    Ok(())
}

fn run_recognize(
    stroke_path: &std::path::Path,
    templates_path: &std::path::Path,
    config: &Config,
) -> anyhow::Result<()> {
    if !stroke_path.exists() {
        anyhow::bail!("Stroke file not found: {:?}", stroke_path);
    }
    if !templates_path.exists() {
        anyhow::bail!("Template library not found: {:?}", templates_path);
    }

    let library = TemplateLibrary::load(templates_path)?;
    info!(
        templates = library.len(),
        path = %templates_path.display(),
        "Loaded template library"
    );

    let stroke = Stroke::load(stroke_path)?;
    info!(
        samples = stroke.len(),
        duration_ms = stroke.duration_ms(),
        "Loaded stroke"
    );

    let recognizer = Recognizer::with_library(config.recognition.clone(), &library)?;
    let result = recognizer.recognize(&stroke.samples);

    match &result.template_name {
        Some(name) => {
            println!("Recognized: {} (score {:.3})", name, result.score);
        }
        None => {
            println!(
                "No match ({} samples, {} templates; strokes need at least {} samples)",
                stroke.len(),
                recognizer.template_count(),
                recognizer.config().min_points
            );
        }
    }

    Ok(())
}

fn run_templates(library_path: &std::path::Path, detailed: bool) -> anyhow::Result<()> {
    if !library_path.exists() {
        anyhow::bail!("Template library not found: {:?}", library_path);
    }

    let library = TemplateLibrary::load(library_path)?;

    match &library.name {
        Some(name) => println!("Library '{}' ({} templates):", name, library.len()),
        None => println!("Library ({} templates):", library.len()),
    }

    for def in library.iter() {
        if detailed {
            println!("  {}  ({} points)", def.name, def.points.len());
        } else {
            println!("  {}", def.name);
        }
    }

    if library.is_empty() {
        println!("  (none)");
    }

    Ok(())
}

fn run_init(force: bool, config: &Config) -> anyhow::Result<()> {
    let config_path = Config::default_path();

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {:?}. Use --force to overwrite.",
            config_path
        );
    }

    config.save_default()?;
    println!("Created config at {:?}", config_path);
    println!("\nConfig content:\n{}", config.to_toml()?);

    std::fs::create_dir_all(Cli::templates_dir())?;
    println!("Created template directory: {:?}", Cli::templates_dir());

    Ok(())
}

fn run_config(action: ConfigAction, config: &Config) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            let toml_str = config.to_toml()?;
            println!("Configuration ({:?}):\n", Config::default_path());
            println!("{}", toml_str);
        }
        ConfigAction::Reset { force } => {
            let config_path = Config::default_path();

            if config_path.exists() && !force {
                println!("Config exists at {:?}", config_path);
                println!("Use --force to reset to defaults");
                return Ok(());
            }

            let default_config = Config::default();
            default_config.save_default()?;
            println!("Configuration reset to defaults at {:?}", config_path);
        }
    }

    Ok(())
}
