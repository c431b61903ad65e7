//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::batch::{format_words, normalize, syllabify_all, Report};
use crate::hierarchy::{Mode, SonorityTable};
use crate::syllabify::{Analysis, Syllabifier};

use super::args::Commands;
use super::paths::{config_file_path_with_override, PersistentConfig};

/// Execute a CLI command
pub fn execute(command: Commands, config_path: Option<&Path>) -> Result<()> {
    let config = PersistentConfig::load_from(config_path)?;

    match command {
        Commands::Word {
            words,
            mode,
            table,
            separator,
            ranks,
        } => {
            let settings = config.merge_with_cli(mode, table, separator, None);
            cmd_word(&words, &settings, ranks)
        }
        Commands::File {
            input,
            output,
            stdout,
            mode,
            table,
            separator,
        } => {
            let settings = config.merge_with_cli(mode, table, separator, output);
            cmd_file(&input, &settings, stdout)
        }
        Commands::Table {
            mode,
            table,
            export,
        } => {
            let settings = config.merge_with_cli(mode, table, None, None);
            cmd_table(&settings, export.as_deref())
        }
        Commands::Settings {
            set_mode,
            set_table,
            clear_table,
            set_separator,
            set_output,
            reset,
        } => cmd_settings(
            config,
            config_path,
            set_mode,
            set_table,
            clear_table,
            set_separator,
            set_output,
            reset,
        ),
    }
}

/// Load the table named in `settings`, or the built-in one for its mode
pub fn load_table(settings: &PersistentConfig) -> Result<SonorityTable> {
    match &settings.table_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read sonority table: {}", path.display()))?;
            SonorityTable::from_json(&json)
                .with_context(|| format!("Invalid sonority table: {}", path.display()))
        }
        None => Ok(SonorityTable::for_mode(settings.mode())),
    }
}

/// Build the syllabifier described by `settings`
pub fn load_syllabifier(settings: &PersistentConfig) -> Result<Syllabifier> {
    let table = load_table(settings)?;
    tracing::debug!(
        mode = %settings.mode(),
        custom_table = settings.table_path.is_some(),
        tiers = table.tiers().len(),
        "loaded sonority table"
    );
    Ok(Syllabifier::with_table(table, settings.mode()))
}

/// Word command
fn cmd_word(words: &[String], settings: &PersistentConfig, ranks: bool) -> Result<()> {
    let syllabifier = load_syllabifier(settings)?;

    for word in words {
        let analysis = syllabifier.analyze(word);
        let joined = analysis.syllables().join(settings.separator());
        if ranks {
            println!("{}  {}", joined.green(), describe_ranks(&analysis).dimmed());
        } else {
            println!("{}", joined);
        }
    }

    Ok(())
}

/// Render phoneme ranks as `p:r` pairs with syllable breaks marked by `|`
fn describe_ranks(analysis: &Analysis) -> String {
    analysis
        .spans
        .iter()
        .map(|span| {
            span.slice(&analysis.word.phonemes)
                .iter()
                .map(|p| format!("{}:{}", p.text, p.rank))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// File command
fn cmd_file(input: &Path, settings: &PersistentConfig, stdout: bool) -> Result<()> {
    let syllabifier = load_syllabifier(settings)?;
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;

    let words = normalize(&text);
    let syllabified = syllabify_all(&syllabifier, &words);
    let report = Report::new(format_words(&syllabified, settings.separator()));

    if stdout {
        println!("{}", report.render());
        return Ok(());
    }

    let output = settings.output_path();
    report
        .write_to(&output)
        .with_context(|| format!("Failed to write report: {}", output.display()))?;

    println!(
        "{} Syllabified {} words from {}",
        "✓".green(),
        words.len().to_string().green(),
        input.display().to_string().cyan()
    );
    println!("  Results saved to {}", output.display().to_string().cyan());

    Ok(())
}

/// Table command
fn cmd_table(settings: &PersistentConfig, export: Option<&Path>) -> Result<()> {
    let table = load_table(settings)?;

    if let Some(path) = export {
        let json = table.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write table: {}", path.display()))?;
        println!(
            "{} Exported table to {}",
            "✓".green(),
            path.display().to_string().cyan()
        );
        return Ok(());
    }

    let source = match &settings.table_path {
        Some(path) => path.display().to_string(),
        None => format!("built-in {}", settings.mode()),
    };

    println!("{}", "Sonority Table".bold().underline());
    println!();
    println!("  Source: {}", source.cyan());
    println!();
    for tier in table.tiers() {
        println!(
            "  {:>3}  {:<12} {}",
            tier.rank.to_string().green(),
            tier.class.to_string().yellow(),
            tier.phonemes.join(" ")
        );
    }
    println!();

    Ok(())
}

/// Settings command
#[allow(clippy::too_many_arguments)]
fn cmd_settings(
    mut config: PersistentConfig,
    config_path: Option<&Path>,
    set_mode: Option<Mode>,
    set_table: Option<PathBuf>,
    clear_table: bool,
    set_separator: Option<String>,
    set_output: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = PersistentConfig::default();
        config.save_to(config_path)?;
        println!("{}", "Configuration reset to defaults".green().bold());
        println!();
        print_config(&config, config_path)?;
        return Ok(());
    }

    let mut changed = false;

    if let Some(mode) = set_mode {
        config.mode = Some(mode);
        println!("  Set default mode: {}", mode.to_string().green());
        changed = true;
    }

    if let Some(table) = set_table {
        let json = std::fs::read_to_string(&table)
            .with_context(|| format!("Failed to read sonority table: {}", table.display()))?;
        SonorityTable::from_json(&json)
            .with_context(|| format!("Invalid sonority table: {}", table.display()))?;
        println!(
            "  Set default table: {}",
            table.display().to_string().cyan()
        );
        config.table_path = Some(table);
        changed = true;
    } else if clear_table {
        config.table_path = None;
        println!("  Cleared default table");
        changed = true;
    }

    if let Some(separator) = set_separator {
        println!("  Set default separator: {}", separator.green());
        config.separator = Some(separator);
        changed = true;
    }

    if let Some(output) = set_output {
        println!(
            "  Set default report path: {}",
            output.display().to_string().cyan()
        );
        config.output_path = Some(output);
        changed = true;
    }

    if changed {
        config.save_to(config_path)?;
        println!();
        println!("{}", "Configuration saved".green().bold());
    }

    println!();
    print_config(&config, config_path)?;

    Ok(())
}

fn print_config(config: &PersistentConfig, config_path: Option<&Path>) -> Result<()> {
    let path = config_file_path_with_override(config_path)?;
    let table = config
        .table_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(built-in)".to_string());

    println!("{}", "Current Configuration".bold().underline());
    println!();
    println!("  File:      {}", path.display().to_string().cyan());
    println!("  Mode:      {}", config.mode().to_string().green());
    println!("  Table:     {}", table.cyan());
    println!("  Separator: {}", config.separator().green());
    println!(
        "  Report:    {}",
        config.output_path().display().to_string().cyan()
    );
    println!();

    Ok(())
}
