//! Strip a leading `/**` comment and write the fixed license header in its place.

mod constants;
mod models;
mod rewrite;
mod strip;
mod write;

pub use constants::{DEFAULT_MAX_LINES, FIXED_HEADER};
pub use models::{LineBuffer, RewriteOutcome, StripStatus, Stripped};
pub use rewrite::{render, rewrite_file, RewriteOptions, UnterminatedPolicy};
pub use strip::strip_leading_comment;
pub use write::{replace_file, write_header_and_body};
