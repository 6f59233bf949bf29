//! Integration tests for the stage processing API

use smarten::normalize::CommentStyle;
use smarten::processor::{
    process_file, process_str, style_from_string, OutputFormat, ProcessingSpec, ProcessingStage,
};

#[test]
fn test_every_listed_spec_parses_back() {
    for spec in ProcessingSpec::available_specs() {
        assert_eq!(ProcessingSpec::from_string(&spec.to_string()).unwrap(), spec);
    }
}

#[test]
fn test_unknown_specs_are_rejected() {
    assert!(ProcessingSpec::from_string("normalize").is_err());
    assert!(ProcessingSpec::from_string("html-yaml").is_err());
    assert!(ProcessingSpec::from_string("render-plain").is_err());
}

#[test]
fn test_normalize_stage_plain_output() {
    let spec = ProcessingSpec {
        stage: ProcessingStage::Normalize,
        format: OutputFormat::Plain,
    };
    let processed = process_str("##\n# a\n#\n# b\n", &spec, CommentStyle::Hash).unwrap();
    assert_eq!(processed.output, "a\n\nb");
    assert!(processed.warnings.is_empty());
}

#[test]
fn test_normalize_stage_json_output() {
    let spec = ProcessingSpec::from_string("normalize-json").unwrap();
    let processed = process_str("# a\n", &spec, CommentStyle::Hash).unwrap();
    let value: serde_json::Value = serde_json::from_str(&processed.output).unwrap();
    assert_eq!(value["text"], "a");
}

#[test]
fn test_html_stage_carries_scanner_warnings() {
    let spec = ProcessingSpec::from_string("html-plain").unwrap();
    let processed = process_str("<tt>open", &spec, CommentStyle::Hash).unwrap();
    assert_eq!(processed.output, "<tt>open");
    assert_eq!(processed.warnings.len(), 1);
}

#[test]
fn test_html_stage_json_output_round_trips() {
    let spec = ProcessingSpec::from_string("html-json").unwrap();
    let processed = process_str("it's -- done", &spec, CommentStyle::Hash).unwrap();
    let value: serde_json::Value = serde_json::from_str(&processed.output).unwrap();
    assert_eq!(value["html"], "it&#8217;s &#8211; done");
    assert_eq!(value["diagnostics"].as_array().unwrap().len(), 0);
}

#[test]
fn test_style_selection() {
    assert_eq!(style_from_string("hash").unwrap(), CommentStyle::Hash);
    assert_eq!(style_from_string("star").unwrap(), CommentStyle::Star);
    assert!(style_from_string("dash").is_err());
}

#[test]
fn test_process_file_reports_missing_file() {
    let spec = ProcessingSpec::from_string("normalize-plain").unwrap();
    let result = process_file("no/such/file.txt", &spec, CommentStyle::Hash);
    assert!(result.is_err());
}
