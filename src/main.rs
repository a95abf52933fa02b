mod cli;
mod engine;
mod error;
mod options;
mod report;
mod scanner;
mod store;

use crate::error::{PregrepError, Result as PregrepResult};
use clap::Parser;
use cli::Cli;
use colored::*;
use env_logger::{Builder, Env, Target};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use options::SearchOptions;
use std::fs;
use std::time::Instant;
use store::OptionStore;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "ERROR!".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> PregrepResult<()> {
    setup_logging(cli)?;
    let start_time = Instant::now();

    let store = OptionStore::open_default()?;
    info!("Option store at {}", store.path().display());

    if cli.list {
        report::print_presets(&store.list_all()?);
        return Ok(());
    }

    let options = SearchOptions::resolve(cli, &store)?;
    let pattern = engine::compile(&options.query)?;
    let files = scanner::expand(&options.target)?;
    info!(
        "Searching {} files for pattern '{}'",
        files.len(),
        options.query
    );

    report::print_options(&options, files.len());

    let pb = ProgressBar::new(files.len() as u64).with_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    // Sequential by contract: one file open at a time, results in glob order.
    let mut results = Vec::with_capacity(files.len());
    for path in &files {
        results.push(engine::scan_file(
            path,
            &pattern,
            options.encoding.as_deref(),
            options.ignore_linehead_to,
        ));
        pb.inc(1);
    }
    pb.finish_and_clear();

    report::print_report(&results, &options);

    // Results are already on screen; a failed save must still be loud.
    if let Some(key) = &options.save_key {
        store.save(key, &options)?;
        info!("Saved options under key '{key}'");
    }

    info!(
        "Finished. Total elapsed time: {:.2?}",
        start_time.elapsed()
    );
    Ok(())
}

fn setup_logging(cli: &Cli) -> PregrepResult<()> {
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level));

    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(
            buf,
            "{} [{}] [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    });

    if let Some(log_path) = &cli.log {
        if let Some(parent_dir) = log_path.parent() {
            if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
                fs::create_dir_all(parent_dir).map_err(PregrepError::Io)?;
            }
        }
        let log_file = fs::File::create(log_path).map_err(PregrepError::Io)?;
        builder.target(Target::Pipe(Box::new(log_file)));
    } else {
        builder.target(Target::Stderr);
    }

    builder
        .try_init()
        .map_err(|e| PregrepError::Other(e.to_string()))?;
    Ok(())
}
