//! Command implementations for the Tino CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::Utc;
use lazy_static::lazy_static;

use crate::catalog::{CatalogIndex, IntentCatalog};
use crate::classifier::{
    Classifier, ClassificationOptions, FuzzyClassifier, classify_batch,
};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, TinoError};

lazy_static! {
    /// Demo catalog used when no catalog file is supplied, carried over
    /// from the original deployment this tool grew out of.
    static ref DEFAULT_CATALOG: IntentCatalog = IntentCatalog::from_entries([
        (
            "greeting",
            vec![
                "Hola",
                "Buenas tardes",
                "Hola SAPAL",
                "Que tal sapal",
                "Buena tarde",
                "Hola buen dia",
                "Hola buenos dias",
                "Hola buenas noches",
                "Que tal",
                "/start",
            ],
        ),
        (
            "thanks",
            vec![
                "Muchas gracias",
                "Gracias",
                "Agradezco",
                "muchisimas gracias",
                "te agradezco",
                "muchas gracias",
            ],
        ),
        (
            "check_balance",
            vec![
                "Quiero revisar mi saldo",
                "Quiero saber cual es mi saldo",
                "Conocer mi saldo",
                "Saber mi saldo",
                "cuanto debo de agua",
                "Cuanto debo",
                "saldo",
                "1.- Saldo",
                "Necesito comprobar cuánto dinero tengo.",
                "Me gustaría verificar el saldo de mi cuenta.",
                "consultar mi saldo actual",
            ],
        ),
        (
            "receipt",
            vec![
                "Quiero mi recibo",
                "Necesito mi recibo",
                "Descargar mi recibo",
                "Quiero el recibo",
            ],
        ),
    ])
    .expect("default catalog is well-formed");
}

/// Execute a CLI command.
pub fn execute_command(args: TinoArgs) -> Result<()> {
    match &args.command {
        Command::Classify(classify_args) => classify_text(classify_args.clone(), &args),
        Command::Batch(batch_args) => classify_file(batch_args.clone(), &args),
        Command::Intents(intents_args) => list_intents(intents_args.clone(), &args),
    }
}

/// Load the active catalog: the supplied file, or the built-in default.
fn load_catalog(args: &TinoArgs) -> Result<IntentCatalog> {
    match &args.catalog {
        Some(path) => {
            if args.verbosity() > 1 {
                println!("Loading catalog from: {}", path.display());
            }
            IntentCatalog::from_json_file(path)
        }
        None => Ok(DEFAULT_CATALOG.clone()),
    }
}

/// Merge option overrides onto the defaults.
fn build_options(threshold: Option<f64>, min_margin: Option<f64>) -> Result<ClassificationOptions> {
    let mut options = ClassificationOptions::default();
    if let Some(threshold) = threshold {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(TinoError::invalid_argument("threshold must be in [0, 1]"));
        }
        options.threshold = threshold;
    }
    if let Some(min_margin) = min_margin {
        if !(0.0..=1.0).contains(&min_margin) {
            return Err(TinoError::invalid_argument("min-margin must be in [0, 1]"));
        }
        options.min_margin = min_margin;
    }
    Ok(options)
}

/// Classify a single text.
fn classify_text(args: ClassifyArgs, cli_args: &TinoArgs) -> Result<()> {
    let catalog = load_catalog(cli_args)?;
    let options = build_options(args.threshold, args.min_margin)?;
    let index = CatalogIndex::build(&catalog);

    let classifier = FuzzyClassifier::new();
    let result = classifier.classify(&args.text, &index, &options);

    output_result(
        "Classification result",
        &ClassifyResponse {
            text: args.text,
            result,
            timestamp: Utc::now(),
        },
        cli_args,
    )
}

/// Classify every line of a file against one built index.
fn classify_file(args: BatchArgs, cli_args: &TinoArgs) -> Result<()> {
    let texts = read_texts(&args.texts_file)?;
    if texts.is_empty() {
        return Err(TinoError::InvalidOperation(format!(
            "no utterances found in {}",
            args.texts_file.display()
        )));
    }

    let catalog = load_catalog(cli_args)?;
    let options = build_options(args.threshold, args.min_margin)?;
    let index = CatalogIndex::build(&catalog);

    if cli_args.verbosity() > 1 {
        println!(
            "Classifying {} texts against {} intents",
            texts.len(),
            index.intent_count()
        );
    }

    let classifier = FuzzyClassifier::new();
    let results: Vec<BatchItem> = texts
        .iter()
        .zip(classify_batch(&classifier, &texts, &index, &options))
        .map(|(text, result)| BatchItem {
            text: text.clone(),
            result,
        })
        .collect();

    let total = results.len();
    output_result(
        "Batch classification results",
        &BatchResponse {
            results,
            total,
            timestamp: Utc::now(),
        },
        cli_args,
    )
}

/// List the intents of the active catalog.
fn list_intents(args: IntentsArgs, cli_args: &TinoArgs) -> Result<()> {
    let catalog = load_catalog(cli_args)?;

    let intents: Vec<String> = catalog.names().map(str::to_string).collect();
    let total = intents.len();
    let examples = args
        .examples
        .then(|| catalog.iter().map(|entry| entry.examples.clone()).collect());

    output_result(
        "Available intents",
        &IntentsResponse {
            intents,
            total,
            examples,
        },
        cli_args,
    )
}

/// Read utterances from a file, one per line, skipping blank lines.
fn read_texts(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let mut texts = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        if !line.trim().is_empty() {
            texts.push(line);
        }
    }
    Ok(texts)
}
