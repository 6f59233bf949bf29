//! Command-line interface for smarten
//! This binary runs the comment-processing stages over a file or stdin.
//!
//! Usage:
//!   smarten execute `<path>` [--format `<spec>`] [--style `<style>`]  - Run a processing spec
//!   smarten list-formats                                          - List available specs

use clap::{Arg, Command};
use smarten::processor::{process_file, process_str, style_from_string, ProcessingSpec};
use std::io::Read;

fn main() {
    let matches = Command::new("smarten")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize comment text and render typographic HTML")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("execute")
                .about("Run a processing spec over a file, or stdin for '-'")
                .arg(
                    Arg::new("path")
                        .help("Path to the input file, or '-' for stdin")
                        .default_value("-")
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Processing spec (e.g. 'normalize-plain', 'html-json')")
                        .default_value("html-plain"),
                )
                .arg(
                    Arg::new("style")
                        .long("style")
                        .short('s')
                        .help("Comment style for the normalize stage ('hash' or 'star')")
                        .default_value("hash"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available processing specs"))
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("execute", execute_matches)) => {
            let path = execute_matches.get_one::<String>("path").unwrap();
            let format = execute_matches.get_one::<String>("format").unwrap();
            let style = execute_matches.get_one::<String>("style").unwrap();
            handle_execute_command(path, format, style);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the execute command
fn handle_execute_command(path: &str, format: &str, style: &str) {
    let spec = ProcessingSpec::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let style = style_from_string(style).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let processed = if path == "-" {
        let mut source = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut source) {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(1);
        }
        process_str(&source, &spec, style)
    } else {
        process_file(path, &spec, style)
    };

    match processed {
        Ok(processed) => {
            for warning in &processed.warnings {
                eprintln!("warning: {}", warning);
            }
            println!("{}", processed.output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available processing specs:");
    for spec in ProcessingSpec::available_specs() {
        println!("  {}", spec);
    }
}
