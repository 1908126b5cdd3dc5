//! Command implementations for the Javelin CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{info, warn};

use crate::analysis::Analyzer;
use crate::cli::args::{Command, JavelinArgs, SearchArgs};
use crate::cli::output::{
    LineListing, SearchOutcome, output_listing, output_search, output_stats, render_listing,
    render_matches,
};
use crate::error::Result;
use crate::index::{IndexBuilder, LineIndex};
use crate::query::{MatchStrategy, QueryEngine};

/// Execute a CLI command.
///
/// Loads the data file, builds the index once, then dispatches. The
/// interactive shell is the default when no subcommand is given.
pub fn execute_command(args: JavelinArgs) -> Result<()> {
    let lines = match &args.data {
        Some(path) => load_lines(path)?,
        None => {
            warn!("no data file given, starting with an empty index");
            Vec::new()
        }
    };

    let builder = IndexBuilder::new();
    let index = builder.build(lines)?;
    info!(
        "indexed {} lines, {} distinct terms",
        index.line_count(),
        index.term_count()
    );

    match &args.command {
        None | Some(Command::Shell) => run_shell(&index, builder.analyzer()),
        Some(Command::Search(search_args)) => {
            run_search(&index, builder.analyzer(), search_args.clone(), &args)
        }
        Some(Command::List) => run_list(&index, &args),
        Some(Command::Stats) => run_stats(&index, &args),
    }
}

/// Load the data file, one record per line.
///
/// A file that cannot be opened is reported and treated as an empty
/// sequence; the caller proceeds with an empty index. Read failures on an
/// opened file do propagate.
pub fn load_lines(path: &Path) -> Result<Vec<String>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            warn!("file not found: {}: {e}", path.display());
            return Ok(Vec::new());
        }
    };

    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    Ok(lines)
}

/// Run the interactive menu shell against the built index.
///
/// Protocol: an integer command selects the action (1 = search, 2 = list
/// all lines, 0 = exit); the search flow then prompts for a strategy
/// token and a line of space-separated terms. EOF on stdin exits.
fn run_shell(index: &LineIndex, analyzer: &Analyzer) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock().lines();
    let engine = QueryEngine::new(index);

    loop {
        print_menu();
        let Some(command) = input.next() else { break };
        let command = command?;
        println!();

        match command.trim() {
            "0" => {
                println!("Bye!");
                break;
            }
            "1" => search_interactive(index, analyzer, &engine, &mut input)?,
            "2" => render_listing(&LineListing::from_index(index)),
            _ => println!("Incorrect option! Try again."),
        }
    }

    Ok(())
}

/// One round of the interactive search flow.
fn search_interactive<I>(
    index: &LineIndex,
    analyzer: &Analyzer,
    engine: &QueryEngine<'_>,
    input: &mut I,
) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    println!("Select a matching strategy: ALL, ANY, NONE");
    let Some(token) = input.next() else {
        return Ok(());
    };
    let strategy = match token?.trim().parse::<MatchStrategy>() {
        Ok(strategy) => strategy,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };

    println!("Enter space-separated terms to search for.");
    let Some(query) = input.next() else {
        return Ok(());
    };
    let terms = analyzer.analyze_terms(&query?)?;

    let match_ids = engine.search(strategy, &terms);
    let outcome = SearchOutcome::resolve(index, strategy, terms, &match_ids);
    render_matches(&outcome);

    Ok(())
}

/// Run a one-shot search and render it in the configured format.
fn run_search(
    index: &LineIndex,
    analyzer: &Analyzer,
    search_args: SearchArgs,
    cli_args: &JavelinArgs,
) -> Result<()> {
    let terms = analyzer.analyze_terms(&search_args.terms)?;
    let engine = QueryEngine::new(index);
    let match_ids = engine.search(search_args.strategy, &terms);
    let outcome = SearchOutcome::resolve(index, search_args.strategy, terms, &match_ids);

    output_search(&outcome, cli_args)
}

/// Print all loaded lines.
fn run_list(index: &LineIndex, cli_args: &JavelinArgs) -> Result<()> {
    output_listing(&LineListing::from_index(index), cli_args)
}

/// Show index statistics.
fn run_stats(index: &LineIndex, cli_args: &JavelinArgs) -> Result<()> {
    output_stats(&index.stats(), cli_args)
}

fn print_menu() {
    println!("=== Menu ===");
    println!("1. Search lines");
    println!("2. Print all lines");
    println!("0. Exit");
}
