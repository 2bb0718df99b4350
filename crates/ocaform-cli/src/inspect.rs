//! Read-only per-bundle summary of the generated overlays.

use std::collections::BTreeMap;

use colored::Colorize;
use serde_json::Value;

#[derive(Debug, PartialEq)]
pub struct OverlaySummary {
    pub capture_base: Option<String>,
    pub languages: Vec<String>,
    /// Widget type → attribute count, sorted by type name.
    pub widget_counts: BTreeMap<String, usize>,
}

pub fn summarize(document: &Value) -> Vec<OverlaySummary> {
    document
        .pointer("/extensions/form")
        .and_then(Value::as_array)
        .map(|overlays| overlays.iter().map(summary_of).collect())
        .unwrap_or_default()
}

fn summary_of(overlay: &Value) -> OverlaySummary {
    let languages = overlay
        .get("language")
        .and_then(Value::as_array)
        .map(|langs| {
            langs
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    let mut widget_counts = BTreeMap::new();
    if let Some(args) = overlay
        .pointer("/interaction/0/arguments")
        .and_then(Value::as_object)
    {
        for spec in args.values() {
            if let Some(kind) = spec.get("type").and_then(Value::as_str) {
                *widget_counts.entry(kind.to_string()).or_insert(0) += 1;
            }
        }
    }

    OverlaySummary {
        capture_base: overlay
            .get("capture_base")
            .and_then(Value::as_str)
            .map(str::to_owned),
        languages,
        widget_counts,
    }
}

pub fn print_summary(document: &Value) {
    let summaries = summarize(document);
    println!("{} {} bundle(s)", "Overlays".green().bold(), summaries.len());
    for summary in &summaries {
        let id = summary.capture_base.as_deref().unwrap_or("(no capture base)");
        let languages = if summary.languages.is_empty() {
            "-".to_string()
        } else {
            summary.languages.join(", ")
        };
        println!("  {} {} languages: {}", "•".cyan(), id.bold(), languages);
        for (kind, count) in &summary.widget_counts {
            println!("      {kind}: {count}");
        }
    }
}
