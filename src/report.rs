use crate::engine::FileResult;
use crate::error::ErrorKind;
use crate::options::SearchOptions;
use colored::*;
use std::collections::BTreeMap;

const RULE: &str = "---------------------------------------";

/// Banner printed before scanning: the resolved options and how many files
/// the target glob expanded to.
pub fn print_options(options: &SearchOptions, target_count: usize) {
    println!("{RULE}");
    println!("{}", "SEARCH OPTIONS:".green().bold());
    println!("    query: {}", options.query);
    println!(
        "    encoding: {}",
        options.encoding.as_deref().unwrap_or("utf-8 (default)")
    );
    println!("    target: {}", options.target);
    println!("    ignore_linehead_to: {}", options.ignore_linehead_to);
    println!("{}", "TARGET FILES:".green().bold());
    println!("    amount: {target_count}");
    println!("{RULE}");
}

/// Final report: matches grouped by file (paths only under
/// `show_only_filename`), then the error summary. Files with neither
/// matches nor errors are omitted.
pub fn print_report(results: &[FileResult], options: &SearchOptions) {
    println!("{RULE}");
    println!("{}", "MATCHES:".green().bold());
    for result in results {
        if result.matches.is_empty() {
            continue;
        }
        if options.show_only_filename {
            println!("    {}", result.path.display().to_string().cyan());
            continue;
        }
        println!("    {}:", result.path.display().to_string().cyan());
        for line in &result.matches {
            println!("        {line}");
        }
    }

    let failed_files = results.iter().filter(|r| !r.errors.is_empty()).count();
    println!("{}", "ERRORS:".red().bold());
    println!("    amount: {failed_files}");

    let mut per_kind: BTreeMap<ErrorKind, usize> = BTreeMap::new();
    for result in results {
        for kind in &result.errors {
            *per_kind.entry(*kind).or_insert(0) += 1;
        }
    }
    for (kind, amount) in per_kind {
        println!("        {kind}: {amount}");
    }
    println!("{RULE}");
}

/// `--list` output: one block per saved preset, in store order.
pub fn print_presets(presets: &[(String, SearchOptions)]) {
    println!("{RULE}");
    for (key, options) in presets {
        println!("[ {} ]", key.cyan().bold());
        println!("    {:>20}: {}", "query", options.query);
        println!(
            "    {:>20}: {}",
            "encoding",
            options.encoding.as_deref().unwrap_or("None")
        );
        println!("    {:>20}: {}", "target", options.target);
        println!("    {:>20}: {}", "ignore_linehead_to", options.ignore_linehead_to);
        println!("    {:>20}: {}", "show_only_filename", options.show_only_filename);
    }
    println!("{RULE}");
}
