//! Fixed header text and comment markers.

/// License header written at the top of every processed file (no trailing newline).
/// First line opens with `/**` and last line closes with `*/`, so a second run
/// strips and re-adds it unchanged.
pub const FIXED_HEADER: &str = "/**
 * Logisim-evolution - digital logic design tool and simulator
 * Copyright by the Logisim-evolution developers
 *
 * https://github.com/logisim-evolution/
 *
 * This is free software released under GNU GPLv3 license
 */";

/// Default number of lines kept in memory when no limit is given on the command line.
pub const DEFAULT_MAX_LINES: usize = 10_000;

/// Opens a leading block comment.
pub const COMMENT_OPEN: &str = r"/\*\*";

/// Closes a block comment.
pub const COMMENT_CLOSE: &str = r"\*/";
