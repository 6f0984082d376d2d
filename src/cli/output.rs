//! Output formatting for CLI commands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classifier::Classification;
use crate::cli::args::{OutputFormat, TinoArgs};
use crate::error::Result;

/// Response for classifying one text.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub text: String,
    pub result: Classification,
    pub timestamp: DateTime<Utc>,
}

/// One item of a batch response.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchItem {
    pub text: String,
    pub result: Classification,
}

/// Response for batch classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResponse {
    pub results: Vec<BatchItem>,
    pub total: usize,
    pub timestamp: DateTime<Utc>,
}

/// Response for listing catalog intents.
#[derive(Debug, Serialize, Deserialize)]
pub struct IntentsResponse {
    pub intents: Vec<String>,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Vec<String>>>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &TinoArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &TinoArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("BatchResponse") => {
            output_batch_human(&value)
        }
        _ if std::any::type_name::<T>().contains("ClassifyResponse") => {
            output_classification_human(&value)
        }
        _ if std::any::type_name::<T>().contains("IntentsResponse") => {
            output_intents_human(&value)
        }
        _ => {
            // Generic output for other types
            output_generic_human(&value)
        }
    }
}

/// Print one `{text, result}` pair.
fn print_classification_line(text: &str, result: &serde_json::Value) {
    let intent = result
        .get("intent")
        .and_then(|i| i.as_str())
        .unwrap_or("unknown");
    let confidence = result
        .get("confidence")
        .and_then(|c| c.as_f64())
        .unwrap_or(0.0);

    print!("{text:?} => {intent} (confidence: {confidence:.3}");
    if let Some(example) = result.get("matchedExample").and_then(|m| m.as_str()) {
        print!(", matched: {example:?}");
    }
    println!(")");
}

/// Output a single classification in human format.
fn output_classification_human(value: &serde_json::Value) -> Result<()> {
    if let Some(obj) = value.as_object() {
        let text = obj.get("text").and_then(|t| t.as_str()).unwrap_or("");
        if let Some(result) = obj.get("result") {
            print_classification_line(text, result);
        }
    }
    Ok(())
}

/// Output batch results in human format.
fn output_batch_human(value: &serde_json::Value) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(results) = obj.get("results").and_then(|r| r.as_array()) {
            for item in results {
                let text = item.get("text").and_then(|t| t.as_str()).unwrap_or("");
                if let Some(result) = item.get("result") {
                    print_classification_line(text, result);
                }
            }
        }
        if let Some(total) = obj.get("total").and_then(|t| t.as_u64()) {
            println!();
            println!("Total texts: {total}");
        }
    }
    Ok(())
}

/// Output the intent listing in human format.
fn output_intents_human(value: &serde_json::Value) -> Result<()> {
    if let Some(obj) = value.as_object() {
        let examples = obj.get("examples").and_then(|e| e.as_array());
        if let Some(intents) = obj.get("intents").and_then(|i| i.as_array()) {
            for (i, intent) in intents.iter().enumerate() {
                let name = intent.as_str().unwrap_or("unknown");
                println!("{name}");
                if let Some(phrases) = examples.and_then(|e| e.get(i)).and_then(|p| p.as_array())
                {
                    for phrase in phrases {
                        if let Some(text) = phrase.as_str() {
                            println!("  {text}");
                        }
                    }
                }
            }
        }
        if let Some(total) = obj.get("total").and_then(|t| t.as_u64()) {
            println!();
            println!("Total intents: {total}");
        }
    }
    Ok(())
}

/// Generic human output for other types.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                println!("{key}: {val}");
            }
        }
        _ => {
            println!("{value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TinoArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
