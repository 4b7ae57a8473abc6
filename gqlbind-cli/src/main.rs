// ABOUTME: Main entry point for the gqlbind binding generator
// ABOUTME: Loads configuration, sets up logging and dispatches generate or fetch

use anyhow::Result;
use clap::Parser;
use std::path::Path;

use gqlbind_cli::cli::{Cli, Commands};
use gqlbind_cli::cli_output::CliOutput;
use gqlbind_cli::config::{resolve_log_level, Config};
use gqlbind_cli::output::SummaryFormatter;
use gqlbind_cli::{fetch, generate};

fn run(cli: Cli, out: &CliOutput) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let level = resolve_log_level(cli.loglevel.as_deref(), config.log_level.as_deref());
    env_logger::Builder::new()
        .parse_filters(&level)
        .format_timestamp(None)
        .init();

    let root = Path::new(".");
    match cli.command {
        Commands::Generate { package, schema } => {
            let schema_path = schema.unwrap_or_else(|| root.join(config.cache.schema_file()));
            let schema = generate::load_schema(&schema_path)?;
            let files = generate::run(&config, &schema, root, package.as_deref())?;

            println!(
                "{}",
                SummaryFormatter::new(out.use_color()).format_files(&files)
            );
            out.success(&format!("generated {} files", files.len()));
        }
        Commands::Fetch => {
            let path = fetch::fetch_schema(&config, root)?;
            out.success(&format!("schema written to {}", path.display()));
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let out = if cli.no_color {
        CliOutput::with_color(false)
    } else {
        CliOutput::new()
    };

    if let Err(err) = run(cli, &out) {
        out.error(&err);
        std::process::exit(1);
    }
}
