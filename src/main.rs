use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use resmart_parser::{
    export_to_csv, find_data_files, parse_resmart_files, ConsolePrinter, CorruptPolicy,
    DateSelection, ExportOptions, ParseOptions, ResmartError, DEFAULT_OUTPUT,
};
use std::path::PathBuf;
use std::time::Instant;

const GIT_SHA: &str = match option_env!("VERGEN_GIT_SHA") {
    Some(sha) => sha,
    None => "unknown",
};

fn build_command() -> Command {
    Command::new("RESmart Parser")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract data from BMC RESmart raw data files to CSV")
        .arg(
            Arg::new("output_file")
                .help("Output data CSV file, careful: existing content is overwritten")
                .default_value(DEFAULT_OUTPUT)
                .index(1),
        )
        .arg(
            Arg::new("time_ymd")
                .long("time_ymd")
                .short('y')
                .help("Print timestamp in Y, M, D, H, M, S format")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("time_seconds")
                .long("time_seconds")
                .short('s')
                .help("Print timestamp as a running seconds count")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Do not print progress and info")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dates")
                .long("dates")
                .short('d')
                .help("Select dates in YYYY-MM-DD format. A single date selects one day, two dates are the start and end of the range")
                .num_args(1..=2)
                .value_name("DATE"),
        )
        .arg(
            Arg::new("path")
                .long("path")
                .short('p')
                .help("Directory holding the raw data files (*.000, *.001, ...)")
                .default_value(".")
                .value_name("DIR"),
        )
        .arg(
            Arg::new("skip-corrupt")
                .long("skip-corrupt")
                .help("Skip files containing a corrupt packet instead of aborting")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output and per-file details")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> Result<()> {
    let start = Instant::now();
    let matches = build_command().get_matches();

    let quiet = matches.get_flag("quiet");
    let debug = matches.get_flag("debug");
    let output_path = matches
        .get_one::<String>("output_file")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let data_dir = matches
        .get_one::<String>("path")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let dates: Vec<&String> = matches
        .get_many::<String>("dates")
        .map(|values| values.collect())
        .unwrap_or_default();

    if debug {
        println!("resmart_parser {} (git {GIT_SHA})", env!("CARGO_PKG_VERSION"));
    }

    // Reject bad dates before touching any file
    let selection = DateSelection::from_args(&dates)?;

    let files = find_data_files(&data_dir)
        .with_context(|| format!("Incorrect path supplied: {}", data_dir.display()))?;
    if files.is_empty() {
        return Err(ResmartError::NoInputFiles(data_dir).into());
    }
    if debug {
        println!("Found {} raw data files in {}", files.len(), data_dir.display());
    }

    let mut printer = ConsolePrinter::new(quiet, debug).with_output(&output_path);

    let parse_options = ParseOptions {
        corrupt_policy: if matches.get_flag("skip-corrupt") {
            CorruptPolicy::SkipFile
        } else {
            CorruptPolicy::Abort
        },
        start_date: selection.start(),
    };
    let set = parse_resmart_files(&files, &parse_options, &mut printer)?;

    if !quiet {
        println!(
            "{} packets found in {} files",
            set.len(),
            set.files_read()
        );
    }
    if debug {
        for file in &set.files {
            println!(
                "  {}: {} packets, {} trailing bytes{}",
                file.path.display(),
                file.packets,
                file.trailing_bytes,
                if file.skipped { " (skipped)" } else { "" }
            );
        }
    }

    let export_options = ExportOptions {
        output_path,
        include_seconds: matches.get_flag("time_seconds"),
        include_ymd: matches.get_flag("time_ymd"),
    };
    let report = export_to_csv(&set, &selection, &export_options, &mut printer)
        .with_context(|| format!("Failed to export {}", export_options.output_path.display()))?;

    if !quiet {
        match report.range {
            Some(range) => println!(
                "Wrote {} rows for {} to {}",
                report.rows_written,
                range,
                report.output_path.display()
            ),
            None => println!("No data to write, {} has a header only", report.output_path.display()),
        }
        println!("Elapsed time = {:.3}", start.elapsed().as_secs_f64());
    }

    Ok(())
}
