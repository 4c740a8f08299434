//! # baryreport
//!
//! A CLI tool that extracts pixel barycentre and beam spot results and prints
//! them as TWiki, LaTeX or CSV tables.
//!
//! ## Usage
//!
//! ```bash
//! # BPIX barycentre as a TWiki table
//! baryreport PixelBaryCentre_2018.json
//!
//! # FPIX, quality-filtered results, as LaTeX
//! baryreport PixelBaryCentre_2018.json -p FPIX --quality -s latex
//!
//! # Beam spot as CSV
//! baryreport PixelBaryCentre_2018.json -t beamspot -s csv
//!
//! # Inspect the file
//! baryreport PixelBaryCentre_2018.json --list-content
//! baryreport PixelBaryCentre_2018.json --list-branches
//!
//! # Driven by a job configuration: one file per configured style
//! baryreport job.json -p BPIX
//! ```

mod logging;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use baryreportlib::{
    find_tree, list_branches, list_content, render, resolve_output_targets, write_reports,
    BaryReportError, DataFile, JobConfig, Kind, Selection, Style, Tree,
};
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("baryreport")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Extract pixel barycentre and beam spot results into text tables")
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .required(true)
                .help("Data file, or a JSON job configuration pointing to one"),
        )
        .arg(
            Arg::new("partition")
                .short('p')
                .long("partition")
                .default_value("BPIX")
                .help("Tracker partition (e.g. BPIX, FPIX, BPIXLYR1)"),
        )
        .arg(
            Arg::new("list-content")
                .short('l')
                .long("list-content")
                .action(ArgAction::SetTrue)
                .help("List the contents of the file and exit"),
        )
        .arg(
            Arg::new("list-branches")
                .long("list-branches")
                .action(ArgAction::SetTrue)
                .help("List the branches of the tree and exit"),
        )
        .arg(
            Arg::new("type")
                .short('t')
                .long("type")
                .default_value("barycentre")
                .value_parser(["barycentre", "beamspot"])
                .ignore_case(true)
                .help("Measurement to read"),
        )
        .arg(
            Arg::new("label")
                .long("label")
                .help("Additional label appended to the tree name"),
        )
        .arg(
            Arg::new("quality")
                .long("quality")
                .action(ArgAction::SetTrue)
                .help("Read results obtained with the pixel quality flag"),
        )
        .arg(
            Arg::new("style")
                .short('s')
                .long("style")
                .default_value("twiki")
                .value_parser(["twiki", "latex", "csv"])
                .ignore_case(true)
                .help("Table style for the output"),
        )
        .arg(
            Arg::new("loglevel")
                .long("loglevel")
                .value_name("LEVEL")
                .default_value("WARNING")
                .value_parser(logging::parse_log_level)
                .help("Log level: a name like DEBUG, INFO or WARNING, or a number (lower is more verbose)"),
        )
}

/// Build the selection from matches
fn extract_selection(matches: &ArgMatches) -> Result<Selection, anyhow::Error> {
    let kind: Kind = matches
        .get_one::<String>("type")
        .map(|s| s.parse::<Kind>())
        .transpose()?
        .unwrap_or_default();
    let partition = matches
        .get_one::<String>("partition")
        .cloned()
        .unwrap_or_else(|| "BPIX".to_string());

    Ok(Selection::new()
        .kind(kind)
        .partition(partition)
        .label(matches.get_one::<String>("label").cloned())
        .quality(matches.get_flag("quality")))
}

fn print_content(file: &DataFile, mut out: impl io::Write) -> io::Result<()> {
    for summary in list_content(file) {
        writeln!(
            out,
            "{}\t{}\t{} branches, {} entries",
            summary.class_name,
            style(format!("{}/{}", summary.folder, summary.tree)).bold(),
            summary.branches,
            summary.entries
        )?;
    }
    Ok(())
}

/// Find the selected tree. When it is missing, log it and dump the file
/// content to stderr before returning the error.
fn lookup_tree<'a>(
    file: &'a DataFile,
    selection: &Selection,
    data_path: &Path,
) -> Result<&'a Tree, anyhow::Error> {
    match find_tree(file, selection) {
        Ok(tree) => Ok(tree),
        Err(e @ BaryReportError::TreeNotFound { .. }) => {
            tracing::error!(
                "Tree \"{}\" not found; content of file \"{}\":",
                selection.tree_name(),
                data_path.display()
            );
            print_content(file, io::stderr().lock())?;
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

fn run(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let fname = matches
        .get_one::<String>("file")
        .map(PathBuf::from)
        .context("missing FILE argument")?;
    let selection = extract_selection(matches)?;
    tracing::debug!(?selection, file = %fname.display(), "arguments");

    // Called from the validation framework, FILE is a job configuration.
    let config = JobConfig::detect(&fname)?;
    let data_path = config
        .as_ref()
        .map(|c| c.input.clone())
        .unwrap_or(fname);

    let file = DataFile::open(&data_path)?;

    if matches.get_flag("list-content") {
        print_content(&file, io::stdout().lock())?;
        return Ok(());
    }

    let tree = lookup_tree(&file, &selection, &data_path)?;

    if matches.get_flag("list-branches") {
        let branches = list_branches(tree);
        tracing::info!(
            "Branches ({}/{}): {}",
            selection.folder_name(),
            tree.name(),
            branches.len()
        );
        println!("{}", branches.join("\n"));
        return Ok(());
    }

    let table = tree.to_table(&selection.columns())?;

    match config {
        None => {
            let table_style = matches
                .get_one::<String>("style")
                .map(|s| s.parse::<Style>())
                .transpose()?
                .unwrap_or_default();
            render(&table, table_style, io::stdout().lock())?;
        }
        Some(config) => {
            let styles = config.styles()?;
            let targets = resolve_output_targets(
                selection.kind,
                &selection.partition,
                selection.quality,
                &styles,
                &config.output,
            );
            write_reports(&table, &targets)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    let level = matches
        .get_one::<tracing::Level>("loglevel")
        .copied()
        .unwrap_or(tracing::Level::WARN);
    logging::init(level);

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
