//! Display-width utilities for fixed-column text
//!
//! Column math counts terminal cells, not bytes or chars: CJK and other wide
//! characters take two cells, combining marks take none. `₹` is one cell.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Number of terminal cells the string occupies
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_width` cells
///
/// A wide character that would straddle the limit is dropped whole.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut result = String::new();
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width > max_width {
            break;
        }
        result.push(c);
        width += char_width;
    }
    result
}

/// Pad a string to exactly `width` cells
///
/// If the string is longer than the width, it will be truncated.
pub fn pad_to_width(s: &str, width: usize, align_right: bool) -> String {
    let current_width = display_width(s);
    if current_width >= width {
        // Truncation can leave one cell short when a wide char is dropped
        let truncated = truncate_to_width(s, width);
        let gap = width - display_width(&truncated);
        return format!("{}{}", truncated, " ".repeat(gap));
    }
    let spaces = width - current_width;
    if align_right {
        format!("{}{}", " ".repeat(spaces), s)
    } else {
        format!("{}{}", s, " ".repeat(spaces))
    }
}

/// Break text into lines of at most `width` cells, on whitespace
///
/// Words wider than a whole line are split at the limit. Empty input yields
/// no lines.
pub fn wrap_to_width(s: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in s.split_whitespace() {
        let mut word = word.to_string();

        // Hard-split words that cannot fit on any line
        while display_width(&word) > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let head = truncate_to_width(&word, width);
            if head.is_empty() {
                // A single char wider than the line: emit it alone
                let mut chars = word.chars();
                lines.extend(chars.next().map(String::from));
                word = chars.as_str().to_string();
                continue;
            }
            word = word[head.len()..].to_string();
            lines.push(head);
        }
        if word.is_empty() {
            continue;
        }

        let needed = if current.is_empty() {
            display_width(&word)
        } else {
            display_width(&current) + 1 + display_width(&word)
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
