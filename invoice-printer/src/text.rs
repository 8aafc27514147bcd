//! Fixed-width text builder
//!
//! Provides a fluent API for laying out plain-text documents.

use crate::width::{display_width, pad_to_width, wrap_to_width};

/// Plain-text layout builder
///
/// Accumulates a UTF-8 string with lines of at most `width` display cells.
///
/// Lines can run past `width` in three places:
/// - [`write`](Self::write) / [`write_line`](Self::write_line) pass text
///   through untouched
/// - [`text_center`](Self::text_center) prints text wider than the page as is
/// - [`row`](Self::row) never truncates right-aligned cells, so a number
///   wider than its column pushes the rest of the row right
pub struct TextBuilder {
    buf: String,
    width: usize,
}

impl TextBuilder {
    /// Create a new builder with the specified page width in characters
    pub fn new(width: usize) -> Self {
        Self {
            buf: String::with_capacity(4096),
            width,
        }
    }

    // === Text Output ===

    /// Write raw text
    pub fn write(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    /// Write text followed by newline
    pub fn write_line(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self.buf.push('\n');
        self
    }

    /// Write empty line
    pub fn newline(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    // === Separators ===

    /// Print a line of '=' characters
    pub fn eq_sep(&mut self) -> &mut Self {
        self.write_line(&"=".repeat(self.width))
    }

    /// Print a line of '-' characters
    pub fn dash_sep(&mut self) -> &mut Self {
        self.write_line(&"-".repeat(self.width))
    }

    // === Layout Helpers ===

    /// Print text centered in the current line width
    pub fn text_center(&mut self, s: &str) -> &mut Self {
        let w = display_width(s);
        if w >= self.width {
            return self.write_line(s);
        }
        let left = (self.width - w) / 2;
        self.write(&" ".repeat(left));
        self.write_line(s)
    }

    /// Print text flush against the right edge
    pub fn text_right(&mut self, s: &str) -> &mut Self {
        let line = pad_to_width(s, self.width.max(display_width(s)), true);
        self.write_line(&line)
    }

    /// Print left and right text on the same line
    ///
    /// Left text is left-aligned, right text is right-aligned,
    /// with spaces filling the gap. When both do not fit, the right text
    /// moves to its own line.
    pub fn line_lr(&mut self, left: &str, right: &str) -> &mut Self {
        let lw = display_width(left);
        let rw = display_width(right);

        if lw + rw >= self.width {
            self.write_line(left);
            self.text_right(right);
        } else {
            let spaces = self.width - lw - rw;
            self.write(left);
            self.write(&" ".repeat(spaces));
            self.write_line(right);
        }
        self
    }

    /// Print a key-value pair (alias for line_lr)
    pub fn pair(&mut self, key: &str, value: &str) -> &mut Self {
        self.line_lr(key, value)
    }

    /// Print text word-wrapped to the page width, each line prefixed by `indent`
    pub fn wrapped(&mut self, s: &str, indent: usize) -> &mut Self {
        let avail = self.width.saturating_sub(indent).max(1);
        let pad = " ".repeat(indent);
        for line in wrap_to_width(s, avail) {
            self.write(&pad);
            self.write_line(&line);
        }
        self
    }

    /// Print one table row: each cell padded to its column width
    ///
    /// `columns` pairs a width with right alignment; cells are joined by a
    /// single space and trailing blanks are trimmed. Left-aligned cells are
    /// truncated to fit. Right-aligned cells hold numbers and are never cut;
    /// an oversized one pushes the rest of the line right.
    pub fn row(&mut self, cells: &[&str], columns: &[(usize, bool)]) -> &mut Self {
        let line = cells
            .iter()
            .zip(columns)
            .map(|(cell, &(width, right))| {
                if right && display_width(cell) > width {
                    cell.to_string()
                } else {
                    pad_to_width(cell, width, right)
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        self.write_line(line.trim_end())
    }

    // === Build ===

    /// Finalize and return the accumulated string
    pub fn finalize(self) -> String {
        self.buf
    }
}
