//! ensguard - ENS look-alike generator & risk scorer
//!
//! CLI entry point.

use anyhow::Context;
use clap::Parser;
use ensguard::{
    badge,
    config::{BadgeArgs, ExplainArgs, GenerateArgs},
    explain, export, Commands, Config, ExportFormat, Generator, LabelValidator,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    if let Err(e) = ensguard::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        return ExitCode::FAILURE;
    }

    let config = Config::parse();

    // Set up logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config.verbose {
            EnvFilter::new("ensguard=debug,info")
        } else {
            EnvFilter::new("ensguard=info,warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let outcome = match config.command {
        Commands::Generate(args) => run_generate(args),
        Commands::SvgBadge(args) => run_badge(args),
        Commands::Explain(args) => run_explain(args),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<ensguard::GuardError>() {
                Some(guard) => eprintln!("{}", guard.user_message()),
                None => error!("{:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let generator = Generator::with_config(args.generate_config());
    let variants = generator.generate(&args.label)?;

    println!("{}", export::preview(&variants)?);

    let targets: [(ExportFormat, &Option<PathBuf>); 3] = [
        (ExportFormat::Json, &args.json),
        (ExportFormat::Csv, &args.csv),
        (ExportFormat::Txt, &args.txt),
    ];
    for (format, path) in targets {
        if let Some(path) = path {
            format
                .write(&variants, path)
                .with_context(|| format!("writing {} export", format))?;
            println!("{} written: {}", format, path.display());
        }
    }

    Ok(())
}

fn run_badge(args: BadgeArgs) -> anyhow::Result<()> {
    let label = LabelValidator::new().normalize(&args.label);
    badge::write(&label, &args.out)?;
    println!("SVG badge written: {}", args.out.display());
    Ok(())
}

fn run_explain(args: ExplainArgs) -> anyhow::Result<()> {
    let label = LabelValidator::new().normalize(&args.label);
    println!("{}", serde_json::to_string_pretty(&explain::explain(&label))?);
    Ok(())
}
