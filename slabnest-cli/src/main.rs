use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use slabnest::io::export::export_report;
use slabnest::io::import::Importer;
use slabnest_cli::config::SlabNestConfig;
use slabnest_cli::driver::fulfil;
use slabnest_cli::io::cli::Cli;
use slabnest_cli::io::output::SlabNestOutput;
use slabnest_cli::picker::PolicyPicker;
use slabnest_cli::{EPOCH, io};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            SlabNestConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("Successfully parsed SlabNestConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let ext_order = io::read_order(args.input_file.as_path())?;
    let (pieces, catalog) = Importer::new(&config.packing).import_order(&ext_order)?;
    info!(
        "[MAIN] imported {} order line(s) and {} slab(s)",
        pieces.len(),
        catalog.len()
    );

    let picker = PolicyPicker::new(config.pick_policy, &config.packing);
    let runs = fulfil(&pieces, &catalog, &config, &picker);

    let output = SlabNestOutput {
        order: ext_order,
        report: export_report(&runs),
        config,
        run_time_ms: EPOCH.elapsed().as_millis() as u64,
    };

    let solution_path = args
        .solution_folder
        .join(format!("sol_{input_file_stem}.json"));
    io::write_json(&output, Path::new(&solution_path))?;

    Ok(())
}
