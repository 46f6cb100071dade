//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::classifier::TextClassification;
use crate::cli::args::{OutputFormat, PriznakArgs};
use crate::error::Result;

/// Report for a classification run under one rule-set version.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub rule_set: String,
    pub total_texts: usize,
    pub matched_any: usize,
    pub results: Vec<TextClassification>,
}

/// Side-by-side classification of one text under both built-in versions.
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionPair {
    pub text: String,
    pub baseline: TextClassification,
    pub improved: TextClassification,
}

/// Report for a version comparison run.
#[derive(Debug, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub total_texts: usize,
    /// Texts where the two versions disagree on the derived status.
    pub diverging: usize,
    pub results: Vec<VersionPair>,
}

/// One rule of a listed rule-set.
#[derive(Debug, Serialize, Deserialize)]
pub struct RuleInfo {
    pub name: String,
    pub pattern: String,
}

/// Report for the rules listing command.
#[derive(Debug, Serialize, Deserialize)]
pub struct RuleListing {
    pub rule_set: String,
    pub rules: Vec<RuleInfo>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &PriznakArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Csv => output_csv(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &PriznakArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("ClassificationReport") => {
            output_classification_human(&value)
        }
        _ if std::any::type_name::<T>().contains("ComparisonReport") => {
            output_comparison_human(&value)
        }
        _ if std::any::type_name::<T>().contains("RuleListing") => output_rule_listing_human(&value),
        _ => output_generic_human(&value),
    }
}

/// One rule outcome as a human-readable line, or None when unmatched.
fn match_line(result: &serde_json::Value) -> Option<String> {
    let matched = result.get("matched").and_then(|m| m.as_bool())?;
    if !matched {
        return None;
    }

    let rule = result.get("rule").and_then(|r| r.as_str()).unwrap_or("?");
    let text = result
        .get("matched_text")
        .and_then(|t| t.as_str())
        .unwrap_or("");
    Some(format!("{rule}: \"{text}\""))
}

/// Print both rule outcomes of one classification, indented.
fn print_classification_lines(classification: &serde_json::Value, indent: &str) {
    let mut any = false;
    for key in ["job_search", "ready_to_start"] {
        if let Some(result) = classification.get(key)
            && let Some(line) = match_line(result)
        {
            println!("{indent}{line}");
            any = true;
        }
    }

    if !any {
        println!("{indent}no matches");
    } else if let Some(status) = classification.get("status").and_then(|s| s.as_str()) {
        println!("{indent}status: {status}");
    }
}

/// Output a classification report in human format.
fn output_classification_human(value: &serde_json::Value) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(rule_set) = obj.get("rule_set").and_then(|r| r.as_str()) {
            println!("Rule-set: {rule_set}");
            println!("═════════");
        }

        if let Some(results) = obj.get("results").and_then(|r| r.as_array()) {
            for (i, classification) in results.iter().enumerate() {
                let text = classification
                    .get("text")
                    .and_then(|t| t.as_str())
                    .unwrap_or("");
                println!();
                println!("{}. \"{text}\"", i + 1);
                print_classification_lines(classification, "   ");
            }
        }

        println!();
        if let Some(total) = obj.get("total_texts").and_then(|t| t.as_u64()) {
            println!("Texts classified: {total}");
        }
        if let Some(matched) = obj.get("matched_any").and_then(|m| m.as_u64()) {
            println!("Matched at least one rule: {matched}");
        }
    }
    Ok(())
}

/// Output a comparison report in human format.
fn output_comparison_human(value: &serde_json::Value) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(results) = obj.get("results").and_then(|r| r.as_array()) {
            for (i, pair) in results.iter().enumerate() {
                let text = pair.get("text").and_then(|t| t.as_str()).unwrap_or("");
                if i > 0 {
                    println!();
                }
                println!("{}. \"{text}\"", i + 1);

                for version in ["baseline", "improved"] {
                    if let Some(classification) = pair.get(version) {
                        println!("   {version}:");
                        print_classification_lines(classification, "      ");
                    }
                }
            }
        }

        println!();
        if let Some(total) = obj.get("total_texts").and_then(|t| t.as_u64()) {
            println!("Texts classified: {total}");
        }
        if let Some(diverging) = obj.get("diverging").and_then(|d| d.as_u64()) {
            println!("Versions disagree on: {diverging}");
        }
    }
    Ok(())
}

/// Output a rule listing in human format.
fn output_rule_listing_human(value: &serde_json::Value) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(rule_set) = obj.get("rule_set").and_then(|r| r.as_str()) {
            println!("Rule-set: {rule_set}");
            println!("═════════");
        }

        if let Some(rules) = obj.get("rules").and_then(|r| r.as_array()) {
            for rule in rules {
                let name = rule.get("name").and_then(|n| n.as_str()).unwrap_or("?");
                let pattern = rule.get("pattern").and_then(|p| p.as_str()).unwrap_or("");
                println!();
                println!("{name}:");
                println!("  {pattern}");
            }
        }
    }
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &PriznakArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Output in CSV format.
fn output_csv<T: Serialize>(result: &T, _args: &PriznakArgs) -> Result<()> {
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("ClassificationReport") => {
            output_classification_csv(&value)
        }
        _ if std::any::type_name::<T>().contains("ComparisonReport") => {
            output_comparison_csv(&value)
        }
        _ => output_generic_csv(&value),
    }
}

/// Matched substring of one rule outcome, empty when unmatched.
fn matched_text(classification: &serde_json::Value, key: &str) -> String {
    classification
        .get(key)
        .and_then(|r| r.get("matched_text"))
        .and_then(|t| t.as_str())
        .unwrap_or("")
        .to_string()
}

fn status_of(classification: &serde_json::Value) -> String {
    classification
        .get("status")
        .and_then(|s| s.as_str())
        .unwrap_or("")
        .to_string()
}

/// Output a classification report as CSV rows, one per text.
fn output_classification_csv(value: &serde_json::Value) -> Result<()> {
    println!("text,rule_set,status,job_search,ready_to_start");

    if let Some(results) = value.get("results").and_then(|r| r.as_array()) {
        for classification in results {
            let columns = [
                classification
                    .get("text")
                    .and_then(|t| t.as_str())
                    .unwrap_or("")
                    .to_string(),
                classification
                    .get("rule_set")
                    .and_then(|r| r.as_str())
                    .unwrap_or("")
                    .to_string(),
                status_of(classification),
                matched_text(classification, "job_search"),
                matched_text(classification, "ready_to_start"),
            ];
            let row = columns
                .iter()
                .map(|c| escape_csv(c))
                .collect::<Vec<_>>()
                .join(",");
            println!("{row}");
        }
    }
    Ok(())
}

/// Output a comparison report as CSV rows, one per text.
fn output_comparison_csv(value: &serde_json::Value) -> Result<()> {
    println!(
        "text,baseline_status,baseline_job_search,baseline_ready_to_start,improved_status,improved_job_search,improved_ready_to_start"
    );

    if let Some(results) = value.get("results").and_then(|r| r.as_array()) {
        for pair in results {
            let empty = serde_json::Value::Null;
            let baseline = pair.get("baseline").unwrap_or(&empty);
            let improved = pair.get("improved").unwrap_or(&empty);

            let columns = [
                pair.get("text")
                    .and_then(|t| t.as_str())
                    .unwrap_or("")
                    .to_string(),
                status_of(baseline),
                matched_text(baseline, "job_search"),
                matched_text(baseline, "ready_to_start"),
                status_of(improved),
                matched_text(improved, "job_search"),
                matched_text(improved, "ready_to_start"),
            ];
            let row = columns
                .iter()
                .map(|c| escape_csv(c))
                .collect::<Vec<_>>()
                .join(",");
            println!("{row}");
        }
    }
    Ok(())
}

/// Output arbitrary data as key,value CSV.
fn output_generic_csv(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            println!("key,value");
            for (key, val) in obj {
                let formatted = escape_csv(&format_value(val));
                println!("{key},{formatted}");
            }
        }
        _ => {
            println!("value");
            let formatted = escape_csv(&format_value(value));
            println!("{formatted}");
        }
    }
    Ok(())
}

/// Escape a CSV field if it needs quoting.
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        let escaped = field.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        field.to_string()
    }
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv("with\"quote"), "\"with\"\"quote\"");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(
            format_value(&serde_json::Value::String("test".to_string())),
            "test"
        );
        assert_eq!(
            format_value(&serde_json::Value::Number(serde_json::Number::from(42))),
            "42"
        );
        assert_eq!(format_value(&serde_json::Value::Bool(false)), "false");
        assert_eq!(format_value(&serde_json::Value::Null), "null");
    }

    #[test]
    fn test_matched_text_extraction() {
        let classification = serde_json::json!({
            "job_search": { "matched": true, "matched_text": "ищу работу" },
            "ready_to_start": { "matched": false },
        });

        assert_eq!(matched_text(&classification, "job_search"), "ищу работу");
        assert_eq!(matched_text(&classification, "ready_to_start"), "");
    }

    #[test]
    fn test_match_line() {
        let result = serde_json::json!({
            "rule": "job_search",
            "matched": true,
            "matched_text": "активен",
        });
        assert_eq!(match_line(&result), Some("job_search: \"активен\"".to_string()));

        let unmatched = serde_json::json!({ "rule": "job_search", "matched": false });
        assert_eq!(match_line(&unmatched), None);
    }
}
