//! Replace the leading block comment of a source file with a fixed license header.

pub mod cli;
pub mod error;
pub mod rewriter;

pub use cli::{init_logging, run, Args};
pub use error::RewriteError;
pub use rewriter::{
    render, replace_file, rewrite_file, strip_leading_comment, write_header_and_body, LineBuffer,
    RewriteOptions, RewriteOutcome, StripStatus, Stripped, UnterminatedPolicy, DEFAULT_MAX_LINES,
    FIXED_HEADER,
};
