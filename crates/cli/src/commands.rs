// FILE: crates/cli/src/commands.rs

use crate::console_speech::ConsoleSynthesizer;
use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use console::style;
use folio_config::{Config, ConfigManager};
use folio_file_formats::{display_name, FileKind, MimeType};
use folio_gallery::{build, FolderScanner, GalleryBuild, GalleryItem, ScanConfig};
use folio_rtf::RtfDecoder;
use speech_engine::{
    signal_channel, RepeatMode, SpeechRate, SynthesisSignal, TtsSequencer,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Loads config from an explicit path, or the platform location with a
/// fall-back to defaults when no usable file exists.
pub fn load_config(explicit_path: Option<&String>) -> Result<Config> {
    match explicit_path {
        Some(path) => ConfigManager::with_path(PathBuf::from(path))
            .load()
            .with_context(|| format!("Failed to load config from {}", path)),
        None => {
            let manager = match ConfigManager::new() {
                Ok(m) => m,
                Err(e) => {
                    log::warn!("config location unavailable ({}), using defaults", e);
                    return Ok(Config::default());
                }
            };
            Ok(manager.load().unwrap_or_else(|e| {
                log::warn!("config unreadable ({}), using defaults", e);
                Config::default()
            }))
        }
    }
}

/// Scan a folder and print the gallery listing
pub async fn scan(matches: &ArgMatches, config: &Config) -> Result<()> {
    let path = matches
        .get_one::<String>("path")
        .ok_or_else(|| anyhow::anyhow!("Path is required"))?;

    let max_depth = match matches.get_one::<String>("max-depth") {
        Some(raw) => raw
            .parse::<usize>()
            .with_context(|| format!("Invalid --max-depth: {}", raw))?,
        None => config.viewer.max_scan_depth,
    };

    let scanner = FolderScanner::with_config(ScanConfig::new().with_max_depth(max_depth));
    let entries = scanner
        .scan(Path::new(path))
        .with_context(|| format!("Failed to scan {}", path))?;

    let gallery = build(entries).context("Failed to build gallery")?;

    if matches.get_flag("json") {
        print_gallery_json(&gallery)?;
    } else {
        print_gallery(&gallery);
    }
    Ok(())
}

fn print_gallery(gallery: &GalleryBuild) {
    let content_count = gallery
        .items
        .iter()
        .filter(|item| !item.is_divider())
        .count();

    println!(
        "\n{} items ({} image path keys)",
        style(content_count).bold().cyan(),
        gallery.image_map.len()
    );
    println!("{}", "=".repeat(60));

    for item in &gallery.items {
        match item {
            GalleryItem::Divider { label } => {
                println!("{}", style(format!("── {} ──", label)).bold());
            }
            GalleryItem::Content(content) => {
                println!(
                    "  {}  {} {}",
                    style(content.key()).dim(),
                    content.display_name(),
                    style(format!("[{}]", content.kind())).dim()
                );
            }
        }
    }
}

fn print_gallery_json(gallery: &GalleryBuild) -> Result<()> {
    let records: Vec<serde_json::Value> = gallery
        .items
        .iter()
        .map(|item| match item {
            GalleryItem::Divider { label } => serde_json::json!({
                "type": "divider",
                "label": label,
            }),
            GalleryItem::Content(content) => serde_json::json!({
                "type": "content",
                "key": content.key(),
                "kind": content.kind(),
                "name": content.original_name(),
                "display_name": content.display_name(),
            }),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

/// Classify a file name and show its MIME type
pub async fn info(matches: &ArgMatches) -> Result<()> {
    let file = matches
        .get_one::<String>("file")
        .ok_or_else(|| anyhow::anyhow!("File name is required"))?;

    let name = Path::new(file)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(file);

    let kind = FileKind::from_name(name);
    println!("{:<14} {}", "name:", name);
    println!("{:<14} {}", "display name:", display_name(name));
    println!("{:<14} {}", "kind:", style(kind).cyan());
    println!("{:<14} {}", "mime:", MimeType::from_name(name).primary());
    println!(
        "{:<14} {}",
        "readable:",
        if kind.supports_speech() { "yes" } else { "no" }
    );
    Ok(())
}

/// Convert an RTF file to plain text on stdout
pub async fn convert(matches: &ArgMatches) -> Result<()> {
    let file = matches
        .get_one::<String>("file")
        .ok_or_else(|| anyhow::anyhow!("File path is required"))?;

    let text = read_text_content(Path::new(file))?;
    println!("{}", text);
    Ok(())
}

/// Read a text file aloud, sentence by sentence
pub async fn read_aloud(matches: &ArgMatches, config: &Config) -> Result<()> {
    let file = matches
        .get_one::<String>("file")
        .ok_or_else(|| anyhow::anyhow!("File path is required"))?;
    let path = Path::new(file);

    let kind = FileKind::from_path(path);
    if !kind.supports_speech() {
        bail!("{} is not a readable text file ({})", file, kind);
    }

    let rate = match matches.get_one::<String>("rate") {
        Some(raw) => {
            let value = raw
                .parse::<f32>()
                .with_context(|| format!("Invalid --rate: {}", raw))?;
            SpeechRate::new(value).map_err(|e| anyhow::anyhow!(e))?
        }
        None => config.speech.speech_rate(),
    };
    let language = match matches.get_one::<String>("language") {
        Some(tag) => speech_engine::LanguageTag::new(tag.clone()),
        None => config.speech.language_tag(),
    };
    let limit = match matches.get_one::<String>("limit") {
        Some(raw) => raw
            .parse::<usize>()
            .with_context(|| format!("Invalid --limit: {}", raw))?,
        None => config.speech.sentence_limit,
    };
    let repeat_mode = if matches.get_flag("repeat") {
        RepeatMode::Repeat
    } else {
        config.speech.repeat_mode
    };

    let text = read_text_content(path)?;

    let (tx, rx) = signal_channel();
    let mut sequencer = TtsSequencer::new(ConsoleSynthesizer::new(tx));
    sequencer.set_rate(rate);
    sequencer.set_language(language);
    sequencer.set_sentence_limit(limit);
    sequencer.set_repeat_mode(repeat_mode);
    sequencer.load_text(&text);

    if sequencer.sentence_count() == 0 {
        bail!("{} contains no readable sentences", file);
    }
    println!(
        "{} {} sentences, reading up to {} at {}",
        style("♪").cyan(),
        sequencer.sentence_count(),
        sequencer.sentence_limit(),
        sequencer.rate()
    );

    match matches.get_one::<String>("from") {
        Some(raw) => {
            let index = raw
                .parse::<usize>()
                .with_context(|| format!("Invalid --from: {}", raw))?;
            if index == 0 {
                bail!("--from is 1-based");
            }
            sequencer.play_from_index(index - 1);
        }
        None => sequencer.play(),
    }

    // Drive the state machine: block on completion signals, debounce,
    // resume. Stale signals after a stop fall out naturally.
    while sequencer.is_playing() {
        let signal = rx.recv().context("synthesis backend disappeared")?;
        match signal {
            SynthesisSignal::Completed(id) => {
                if let Some(continuation) = sequencer.utterance_completed(id) {
                    tokio::time::sleep(sequencer.advance_delay()).await;
                    sequencer.resume(continuation);
                }
            }
            SynthesisSignal::Failed(id, reason) => {
                sequencer.utterance_failed(id, &reason);
            }
        }
    }

    println!(
        "{} read {} sentence(s), stopped at {}",
        style("✓").green().bold(),
        sequencer.sentences_read(),
        sequencer.sentence_indicator()
    );
    Ok(())
}

/// Reads file content as text, decoding RTF when the name says so.
/// Non-UTF-8 bytes degrade lossily rather than failing the read.
fn read_text_content(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let text = String::from_utf8_lossy(&bytes).into_owned();

    Ok(match FileKind::from_path(path) {
        FileKind::Rtf => RtfDecoder::decode(&text),
        _ => text,
    })
}
