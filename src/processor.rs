//! Stage processing API
//!
//! This module provides an extensible API for running the crate's stages
//! over files or strings with different output formats. A processing spec
//! is a `stage-format` string:
//!
//! - `normalize-plain` / `normalize-json` run the comment normalizer
//! - `html-plain` / `html-json` run the typographic scanner
//!
//! The normalize stage additionally takes a [`CommentStyle`] selecting the
//! marker-stripping first stage. The `smarten` binary is a thin wrapper
//! over this module.

use crate::normalize::{normalize_with_style, CommentStyle};
use crate::typography::{self, Diagnostic, ScanOutput};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Represents the processing stage (which transform to run)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Normalize,
    Html,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Json,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a spec string like "normalize-plain" or "html-json"
    pub fn from_string(spec_str: &str) -> Result<Self, ProcessingError> {
        let Some((stage, format)) = spec_str.split_once('-') else {
            return Err(ProcessingError::InvalidSpec(spec_str.to_string()));
        };

        let stage = match stage {
            "normalize" => ProcessingStage::Normalize,
            "html" => ProcessingStage::Html,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "plain" => OutputFormat::Plain,
            "json" => OutputFormat::Json,
            _ => return Err(ProcessingError::InvalidFormat(format.to_string())),
        };

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        let stages = [ProcessingStage::Normalize, ProcessingStage::Html];
        let formats = [OutputFormat::Plain, OutputFormat::Json];
        stages
            .iter()
            .flat_map(|&stage| formats.iter().map(move |&format| ProcessingSpec { stage, format }))
            .collect()
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self.stage {
            ProcessingStage::Normalize => "normalize",
            ProcessingStage::Html => "html",
        };
        let format = match self.format {
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
        };
        write!(f, "{}-{}", stage, format)
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    InvalidSpec(String),
    InvalidStage(String),
    InvalidFormat(String),
    InvalidStyle(String),
    Io(String),
    Serialize(String),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidSpec(spec) => {
                write!(f, "Invalid spec '{}': expected 'stage-format'", spec)
            }
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStyle(style) => write!(f, "Invalid comment style: {}", style),
            ProcessingError::Io(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessingError {}

/// Parse a comment style name ("hash" or "star")
pub fn style_from_string(name: &str) -> Result<CommentStyle, ProcessingError> {
    match name {
        "hash" => Ok(CommentStyle::Hash),
        "star" => Ok(CommentStyle::Star),
        _ => Err(ProcessingError::InvalidStyle(name.to_string())),
    }
}

/// Output of one processing run: the rendered result plus any scanner
/// diagnostics, kept separate so callers can route them to a warning
/// channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    pub output: String,
    pub warnings: Vec<Diagnostic>,
}

#[derive(Serialize)]
struct NormalizedRecord<'a> {
    text: &'a str,
}

/// Process a string according to the given specification
pub fn process_str(
    source: &str,
    spec: &ProcessingSpec,
    style: CommentStyle,
) -> Result<Processed, ProcessingError> {
    match spec.stage {
        ProcessingStage::Normalize => {
            let text = normalize_with_style(source, style);
            let output = match spec.format {
                OutputFormat::Plain => text,
                OutputFormat::Json => to_json(&NormalizedRecord { text: &text })?,
            };
            Ok(Processed {
                output,
                warnings: Vec::new(),
            })
        }
        ProcessingStage::Html => {
            let scanned = typography::scan(source);
            match spec.format {
                OutputFormat::Plain => {
                    let ScanOutput { html, diagnostics } = scanned;
                    Ok(Processed {
                        output: html,
                        warnings: diagnostics,
                    })
                }
                OutputFormat::Json => {
                    let output = to_json(&scanned)?;
                    Ok(Processed {
                        output,
                        warnings: scanned.diagnostics,
                    })
                }
            }
        }
    }
}

/// Process a file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    style: CommentStyle,
) -> Result<Processed, ProcessingError> {
    let file_path = file_path.as_ref();
    let source = fs::read_to_string(file_path)
        .map_err(|e| ProcessingError::Io(format!("Failed to read {}: {}", file_path.display(), e)))?;
    process_str(&source, spec, style)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ProcessingError> {
    serde_json::to_string_pretty(value).map_err(|e| ProcessingError::Serialize(e.to_string()))
}
