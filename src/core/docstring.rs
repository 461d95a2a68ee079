//! core::docstring
//!
//! Fragment normalization.
//!
//! Fragments are usually written indented to match the code around them.
//! [`clean`] turns a raw fragment into the lines the engine scans:
//!
//! 1. Tabs expand to 8-column tab stops
//! 2. The first line loses its leading whitespace
//! 3. The common indentation of the remaining non-blank lines is removed
//! 4. Leading and trailing empty lines are dropped; lines holding only
//!    whitespace past the margin are kept

const TAB_WIDTH: usize = 8;

/// Normalize a raw fragment into lines.
///
/// # Example
///
/// ```
/// use flatdoc::core::docstring::clean;
///
/// let raw = "Summary.\n\n    Indented body.\n      Nested.\n    ";
/// assert_eq!(clean(raw), vec!["Summary.", "", "Indented body.", "  Nested."]);
/// ```
pub fn clean(raw: &str) -> Vec<String> {
    let mut lines: Vec<String> = raw.lines().map(expand_tabs).collect();

    let margin = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| indentation(line))
        .min();

    if let Some(first) = lines.first_mut() {
        *first = first.trim_start().to_string();
    }
    if let Some(margin) = margin {
        for line in lines.iter_mut().skip(1) {
            *line = line.chars().skip(margin).collect();
        }
    }

    let start = lines
        .iter()
        .position(|line| !line.is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .map_or(start, |i| i + 1);

    lines.drain(start..end).collect()
}

/// Expand tabs to spaces using 8-column tab stops.
pub fn expand_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0;
    for c in line.chars() {
        if c == '\t' {
            let fill = TAB_WIDTH - column % TAB_WIDTH;
            out.extend(std::iter::repeat(' ').take(fill));
            column += fill;
        } else {
            out.push(c);
            column += 1;
        }
    }
    out
}

fn indentation(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}
