//! Command implementations for the priznak CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::classifier::PhraseClassifier;
use crate::classifier::text::normalize_whitespace;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::rules::{RuleSet, RuleSetVersion};

/// Execute a CLI command.
pub fn execute_command(args: PriznakArgs) -> Result<()> {
    match &args.command {
        Command::Classify(classify_args) => classify_texts(classify_args.clone(), &args),
        Command::Compare(compare_args) => compare_versions(compare_args.clone(), &args),
        Command::Rules(rules_args) => show_rules(rules_args.clone(), &args),
    }
}

/// Read input lines from a file or stdin ("-" or no path).
fn read_input_lines(input: Option<&Path>, skip_empty: bool, normalize: bool) -> Result<Vec<String>> {
    let reader: Box<dyn BufRead> = match input {
        Some(path) if path.as_os_str() != "-" => Box::new(BufReader::new(File::open(path)?)),
        _ => Box::new(BufReader::new(io::stdin())),
    };

    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = if normalize {
            normalize_whitespace(&line)
        } else {
            line
        };

        if skip_empty && line.trim().is_empty() {
            continue;
        }
        lines.push(line);
    }

    Ok(lines)
}

/// Classify texts under one rule-set version.
fn classify_texts(args: ClassifyArgs, cli_args: &PriznakArgs) -> Result<()> {
    let version: RuleSetVersion = args.rules.into();

    // Rule compilation happens before any input is read, so a broken
    // pattern aborts the run up front.
    let classifier = PhraseClassifier::new(RuleSet::for_version(version)?);

    if cli_args.verbosity() > 1 {
        match &args.input {
            Some(path) => println!("Reading texts from: {}", path.display()),
            None => println!("Reading texts from stdin"),
        }
    }

    let lines = read_input_lines(args.input.as_deref(), args.skip_empty, args.normalize)?;
    debug!(
        "classifying {} texts under rule-set {}",
        lines.len(),
        version.name()
    );

    let results = classifier.classify_batch(&lines);
    let matched_any = results.iter().filter(|r| r.matched_any()).count();

    output_result(
        "Classification complete",
        &ClassificationReport {
            rule_set: version.name().to_string(),
            total_texts: results.len(),
            matched_any,
            results,
        },
        cli_args,
    )?;

    Ok(())
}

/// Classify texts under both built-in versions side by side.
fn compare_versions(args: CompareArgs, cli_args: &PriznakArgs) -> Result<()> {
    let baseline = PhraseClassifier::new(RuleSet::baseline()?);
    let improved = PhraseClassifier::new(RuleSet::improved()?);

    if cli_args.verbosity() > 1 {
        match &args.input {
            Some(path) => println!("Reading texts from: {}", path.display()),
            None => println!("Reading texts from stdin"),
        }
    }

    let lines = read_input_lines(args.input.as_deref(), args.skip_empty, args.normalize)?;
    debug!("comparing rule-set versions over {} texts", lines.len());

    let results: Vec<VersionPair> = lines
        .iter()
        .map(|text| VersionPair {
            text: text.clone(),
            baseline: baseline.classify(text),
            improved: improved.classify(text),
        })
        .collect();

    let diverging = results
        .iter()
        .filter(|pair| pair.baseline.status != pair.improved.status)
        .count();

    output_result(
        "Comparison complete",
        &ComparisonReport {
            total_texts: results.len(),
            diverging,
            results,
        },
        cli_args,
    )?;

    Ok(())
}

/// Show the rules of a rule-set version.
fn show_rules(args: RulesArgs, cli_args: &PriznakArgs) -> Result<()> {
    let version: RuleSetVersion = args.rules.into();
    let rule_set = RuleSet::for_version(version)?;

    let rules = rule_set
        .rules()
        .iter()
        .map(|rule| RuleInfo {
            name: rule.kind().name().to_string(),
            pattern: rule.pattern().to_string(),
        })
        .collect();

    output_result(
        "Rule-set contents",
        &RuleListing {
            rule_set: version.name().to_string(),
            rules,
        },
        cli_args,
    )?;

    Ok(())
}
