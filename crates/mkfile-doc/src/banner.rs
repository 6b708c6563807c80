//! Banner section headers.
//!
//! A banner is a paragraph of exactly five lines, each 80 characters wide:
//! a rule of `#`, an empty bordered line, a bordered title line holding the
//! centered section name, another empty bordered line and a closing rule.
//! Matching is a direct line-by-line comparison; nothing else in a Makefile
//! is interpreted.

use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::lines;

/// Width of every banner line, in characters.
pub const BANNER_WIDTH: usize = 80;

/// Room for the section name between the two border characters.
pub const TITLE_WIDTH: usize = BANNER_WIDTH - 2;

/// First and last banner line: 80 `#` characters.
pub static RULE_LINE: LazyLock<String> = LazyLock::new(|| "#".repeat(BANNER_WIDTH));

/// Second and fourth banner line: `#`, 78 spaces, `#`.
pub static EMPTY_BANNER_LINE: LazyLock<String> =
    LazyLock::new(|| format!("#{}#", " ".repeat(TITLE_WIDTH)));

/// Returns the section name if `contents` is exactly a banner header.
///
/// The name is the title line without its border characters, trimmed of
/// surrounding whitespace. Anything short of an exact match is `None`.
pub fn parse_banner(contents: &str) -> Option<&str> {
    let lines = lines::split_lines(contents);
    let &[top, upper, title, lower, bottom] = lines.as_slice() else {
        return None;
    };

    if top != RULE_LINE.as_str()
        || upper != EMPTY_BANNER_LINE.as_str()
        || lower != EMPTY_BANNER_LINE.as_str()
        || bottom != RULE_LINE.as_str()
    {
        return None;
    }

    if title.chars().count() != BANNER_WIDTH || !title.starts_with('#') || !title.ends_with('#')
    {
        return None;
    }

    // Both borders are single-byte `#`, so byte slicing is on char boundaries.
    Some(title[1..title.len() - 1].trim())
}

/// True for five-line `#` blocks that look like a banner but are not one.
///
/// Used only to warn about near misses (a title line one column short is
/// the usual culprit); such paragraphs stay ordinary paragraphs.
pub fn resembles_banner(contents: &str) -> bool {
    let lines = lines::split_lines(contents);
    lines.len() == 5
        && lines.iter().all(|line| line.starts_with('#'))
        && lines[0].starts_with("####")
        && lines[4].starts_with("####")
        && parse_banner(contents).is_none()
}

/// Renders the five banner lines for `name`, each terminated by `\n`.
///
/// Odd padding puts the extra space on the right.
pub fn render_banner(name: &str) -> String {
    let padding = TITLE_WIDTH.saturating_sub(name.chars().count());
    let left = padding / 2;
    let right = padding - left;

    let rule = RULE_LINE.as_str();
    let empty = EMPTY_BANNER_LINE.as_str();
    format!(
        "{rule}\n{empty}\n#{}{name}{}#\n{empty}\n{rule}\n",
        " ".repeat(left),
        " ".repeat(right)
    )
}

/// Checks that `name` renders to a banner that parses back to the same name.
pub fn validate_section_name(name: &str) -> Result<()> {
    if name.chars().count() > TITLE_WIDTH {
        return Err(Error::invalid_section_name(
            name,
            format!("longer than {TITLE_WIDTH} characters"),
        ));
    }
    if name.contains(lines::is_line_break) {
        return Err(Error::invalid_section_name(name, "contains a line break"));
    }
    if name.trim() != name {
        return Err(Error::invalid_section_name(
            name,
            "has leading or trailing whitespace",
        ));
    }
    Ok(())
}
