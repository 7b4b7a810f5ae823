//! CLI: args, logging setup, and run logic.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use crate::rewriter::{rewrite_file, RewriteOptions, RewriteOutcome, UnterminatedPolicy};

#[derive(Parser)]
#[command(name = "header-stamp")]
#[command(about = "Replace the leading /** comment of a source file with the project license header.")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// File to rewrite in place
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Verbose: -v = what was done, -vv = scan details, -vvv = every skipped line
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Maximum number of lines kept after the stripped comment (0 = no limit)
    #[arg(long, value_name = "N", default_value_t = crate::rewriter::DEFAULT_MAX_LINES)]
    pub max_lines: usize,

    /// If the leading comment is never closed, write the header alone instead of failing
    #[arg(long)]
    pub allow_unterminated: bool,

    /// Do not write; exit with code 1 if the file would change
    #[arg(long, conflicts_with = "stdout")]
    pub check: bool,

    /// Print the rewritten file to stdout instead of replacing it
    #[arg(long)]
    pub stdout: bool,
}

impl Args {
    pub fn options(&self) -> RewriteOptions {
        RewriteOptions {
            max_lines: (self.max_lines > 0).then_some(self.max_lines),
            unterminated: if self.allow_unterminated {
                UnterminatedPolicy::HeaderOnly
            } else {
                UnterminatedPolicy::Fail
            },
            dry_run: self.check || self.stdout,
        }
    }
}

/// Install a stderr fmt subscriber; level from the `-v` count (warn by default).
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

fn print_output(outcome: &RewriteOutcome) -> i32 {
    let mut out = std::io::stdout().lock();
    match out.write_all(&outcome.output).and_then(|()| out.flush()) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: cannot write to stdout: {e}");
            2
        }
    }
}

pub fn run(args: Args) -> i32 {
    let options = args.options();
    let outcome = match rewrite_file(&args.path, &options) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {e}");
            return 2;
        }
    };

    if args.stdout {
        return print_output(&outcome);
    }
    if args.check {
        if outcome.changed {
            println!("Would rewrite: {}", args.path.display());
            return 1;
        }
        return 0;
    }
    0
}
