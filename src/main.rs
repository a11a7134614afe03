//! The Greek compiler CLI.
//!
//! ```text
//! greekc <file> [-o <output>]
//! ```

use std::path::PathBuf;

use clap::Parser;
use greekc::driver::{self, CompileError};

#[derive(Parser)]
#[command(name = "greekc")]
#[command(about = "Compiles a Greek source file to portable C", long_about = None)]
struct Cli {
    /// The root `.greek` source file to compile.
    file: PathBuf,

    /// Write the generated C source here instead of stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = driver::compile_file(&cli.file, cli.output.as_deref()) {
        report_and_exit(&cli.file, error);
    }
}

fn report_and_exit(file: &std::path::Path, error: CompileError) -> ! {
    match &error {
        CompileError::Check(check_error) => {
            let source = driver::read_source_for_diagnostics(file);
            greekc::diagnostics::report_error(&file.display().to_string(), &source, check_error);
        }
        CompileError::ReadEntry { .. } | CompileError::WriteOutput { .. } => {
            eprintln!("{error}");
        }
    }
    std::process::exit(1);
}
