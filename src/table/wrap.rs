//! Word-boundary string wrapping
//!
//! Embedded newlines are hard breaks and win over width: a string that
//! contains `\n` is split on it and nothing more. Otherwise text longer
//! than the width is broken at spaces. Trailing empty segments are
//! dropped in both cases, so `"abc\n"` wraps to a single line.

/// Wrap `text` into lines of at most `width` characters
///
/// Rules, in order:
/// 1. Text containing `\n` is split on `\n`; the segments are returned
///    verbatim (not width-wrapped).
/// 2. Text of at most `width` characters is returned as one line.
/// 3. Otherwise lines are filled greedily with space-separated words.
///    A word longer than `width` gets a line of its own and is never
///    broken.
///
/// Width is measured in `char`s. A `width` of zero is treated as one.
///
/// # Example
/// ```
/// use sqltab::table::wrap;
///
/// assert_eq!(wrap("hello world foo bar", 11), vec!["hello world", "foo bar"]);
/// assert_eq!(wrap("line1\nline2", 80), vec!["line1", "line2"]);
/// ```
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);

    if text.contains('\n') {
        return split_lines(text);
    }

    if text.chars().count() <= width {
        return vec![text.to_string()];
    }

    split_lines(&wrap_words(text, width))
}

/// Split on `\n`, dropping trailing empty segments
fn split_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

/// Greedy wrap at spaces, joining lines with `\n`
fn wrap_words(text: &str, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut out = String::with_capacity(text.len() + len / width);
    let mut offset = 0;

    while len - offset > width {
        if chars[offset] == ' ' {
            offset += 1;
            continue;
        }

        // Last space that still lets the line fit
        let limit = (offset + width).min(len - 1);
        let break_at = (offset..=limit).rev().find(|&i| chars[i] == ' ');

        match break_at {
            Some(space) => {
                out.extend(&chars[offset..space]);
                out.push('\n');
                offset = space + 1;
            }
            None => {
                // Overlong word: run to the next space, unbroken
                match (offset + width..len).find(|&i| chars[i] == ' ') {
                    Some(space) => {
                        out.extend(&chars[offset..space]);
                        out.push('\n');
                        offset = space + 1;
                    }
                    None => break,
                }
            }
        }
    }

    out.extend(&chars[offset..]);
    out
}
