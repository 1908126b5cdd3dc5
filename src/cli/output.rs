//! Output formatting for CLI commands.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::cli::args::{JavelinArgs, OutputFormat};
use crate::error::Result;
use crate::index::{IndexStats, LineIndex};
use crate::query::MatchStrategy;

/// A single matched line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedLine {
    /// 0-based line id.
    pub id: u32,
    /// The original line text.
    pub text: String,
}

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub strategy: MatchStrategy,
    pub terms: Vec<String>,
    pub total: usize,
    pub matches: Vec<MatchedLine>,
}

impl SearchOutcome {
    /// Resolve a match set against the index.
    ///
    /// Line ids are sorted ascending so output is deterministic.
    pub fn resolve(
        index: &LineIndex,
        strategy: MatchStrategy,
        terms: Vec<String>,
        match_ids: &AHashSet<u32>,
    ) -> Self {
        let mut ids: Vec<u32> = match_ids.iter().copied().collect();
        ids.sort_unstable();

        let matches: Vec<MatchedLine> = ids
            .into_iter()
            .filter_map(|id| {
                index.line(id).map(|text| MatchedLine {
                    id,
                    text: text.to_string(),
                })
            })
            .collect();

        SearchOutcome {
            strategy,
            terms,
            total: matches.len(),
            matches,
        }
    }
}

/// Result structure for listing all lines.
#[derive(Debug, Serialize, Deserialize)]
pub struct LineListing {
    pub total: usize,
    pub lines: Vec<String>,
}

impl LineListing {
    /// Capture every loaded line in load order.
    pub fn from_index(index: &LineIndex) -> Self {
        LineListing {
            total: index.lines().len(),
            lines: index.lines().to_vec(),
        }
    }
}

/// Output search results in the configured format.
pub fn output_search(outcome: &SearchOutcome, args: &JavelinArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            render_matches(outcome);
            Ok(())
        }
        OutputFormat::Json => output_json(outcome, args),
    }
}

/// Human rendering of search results, shared with the interactive shell.
pub fn render_matches(outcome: &SearchOutcome) {
    if outcome.matches.is_empty() {
        println!("No matching lines found.");
        println!();
    } else {
        println!();
        println!("{} matching lines:", outcome.total);
        for matched in &outcome.matches {
            println!("{}", matched.text);
        }
        println!();
    }
}

/// Output the line listing in the configured format.
pub fn output_listing(listing: &LineListing, args: &JavelinArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            render_listing(listing);
            Ok(())
        }
        OutputFormat::Json => output_json(listing, args),
    }
}

/// Human rendering of the line listing, shared with the interactive shell.
pub fn render_listing(listing: &LineListing) {
    println!("=== All lines ===");
    for line in &listing.lines {
        println!("{line}");
    }
    println!();
}

/// Output index statistics in the configured format.
pub fn output_stats(stats: &IndexStats, args: &JavelinArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("Index statistics:");
            println!("Lines: {}", stats.line_count);
            println!("Distinct terms: {}", stats.term_count);
            Ok(())
        }
        OutputFormat::Json => output_json(stats, args),
    }
}

/// Output a value as JSON, honoring `--pretty`.
fn output_json<T: Serialize>(value: &T, args: &JavelinArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::IndexBuilder;

    fn sample_index() -> LineIndex {
        IndexBuilder::new()
            .build(vec![
                "Alice Smith".to_string(),
                "Bob Jones".to_string(),
                "Alice Jones".to_string(),
            ])
            .unwrap()
    }

    #[test]
    fn test_resolve_sorts_ids_ascending() {
        let index = sample_index();
        let match_ids: AHashSet<u32> = [2, 0].into_iter().collect();

        let outcome = SearchOutcome::resolve(
            &index,
            MatchStrategy::Any,
            vec!["alice".to_string()],
            &match_ids,
        );

        assert_eq!(outcome.total, 2);
        assert_eq!(outcome.matches[0].id, 0);
        assert_eq!(outcome.matches[0].text, "Alice Smith");
        assert_eq!(outcome.matches[1].id, 2);
        assert_eq!(outcome.matches[1].text, "Alice Jones");
    }

    #[test]
    fn test_resolve_empty_match_set() {
        let index = sample_index();
        let outcome = SearchOutcome::resolve(
            &index,
            MatchStrategy::Any,
            vec!["carol".to_string()],
            &AHashSet::new(),
        );

        assert_eq!(outcome.total, 0);
        assert!(outcome.matches.is_empty());
    }

    #[test]
    fn test_listing_preserves_load_order() {
        let index = sample_index();
        let listing = LineListing::from_index(&index);

        assert_eq!(listing.total, 3);
        assert_eq!(listing.lines[0], "Alice Smith");
        assert_eq!(listing.lines[2], "Alice Jones");
    }

    #[test]
    fn test_search_outcome_serializes() {
        let index = sample_index();
        let outcome = SearchOutcome::resolve(
            &index,
            MatchStrategy::All,
            vec!["alice".to_string()],
            &AHashSet::new(),
        );

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["strategy"], "ALL");
        assert_eq!(json["total"], 0);
    }
}
