//! The Vult parser CLI.
//!
//! This binary provides `vult check` and `vult dump` commands: syntax
//! checking with rich diagnostics, and printing the parsed syntax tree.

use clap::{Parser, Subcommand};

mod diagnostics;

/// Command-line interface for the Vult parser.
#[derive(Parser)]
#[command(name = "vult")]
#[command(about = "Parser for the Vult signal-processing language", long_about = None)]
struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Parse source files and report any syntax errors.
    Check {
        /// The source files to check (e.g. `osc.vult`).
        files: Vec<String>,
    },
    /// Parse a source file and print its syntax tree.
    Dump {
        /// The source file to dump.
        file: String,
    },
}

/// Entry point for the Vult CLI.
fn main() {
    let cli = Cli::parse();

    let ok = match cli.command {
        Commands::Check { files } => {
            // Check every file before deciding the exit code.
            let mut all_ok = true;
            for file in &files {
                all_ok &= check_file(file);
            }
            all_ok
        }
        Commands::Dump { file } => dump_file(&file),
    };

    if !ok {
        std::process::exit(1);
    }
}

fn check_file(file: &str) -> bool {
    let results = vult::parser::parse_file(file);
    if results.is_ok() {
        true
    } else {
        diagnostics::report_errors(&results);
        false
    }
}

fn dump_file(file: &str) -> bool {
    let results = vult::parser::parse_file(file);
    match &results.outcome {
        Ok(blocks) => {
            for block in blocks {
                println!("{}", vult::printer::print_stmt(block));
            }
            true
        }
        Err(_) => {
            diagnostics::report_errors(&results);
            false
        }
    }
}
