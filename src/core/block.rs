//! In-place edits of the front matter block
//!
//! The block is edited as text, never re-serialized, so keys the publisher
//! does not own keep their exact formatting, order and comments. Every edit
//! is confined to the lines between the two delimiters.

use crate::error::Result;
use regex::{NoExpand, Regex};
use std::ops::Range;

const DELIMITER: &str = "---";
const CLOSING_ALT: &str = "...";

/// Byte layout of the front matter block inside a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataBlock {
    /// The opening `---` line including its line ending
    pub opening: Range<usize>,
    /// Everything between the delimiter lines
    pub inner: Range<usize>,
    /// The closing delimiter line, line ending included when present
    pub closing: Range<usize>,
    /// Line ending used by the opening delimiter
    pub line_ending: &'static str,
}

impl MetadataBlock {
    /// Find the front matter block. The opening delimiter must be the very
    /// first line of the document.
    pub fn locate(text: &str) -> Option<Self> {
        let mut lines = text.split_inclusive('\n');

        let first = lines.next()?;
        if first.trim_end() != DELIMITER || !first.ends_with('\n') {
            return None;
        }
        let opening = 0..first.len();
        let mut offset = opening.end;
        let line_ending = if text[opening.clone()].ends_with("\r\n") {
            "\r\n"
        } else {
            "\n"
        };

        for line in lines {
            let start = offset;
            offset += line.len();
            let trimmed = line.trim_end();
            if trimmed == DELIMITER || trimmed == CLOSING_ALT {
                return Some(Self {
                    inner: opening.end..start,
                    opening,
                    closing: start..offset,
                    line_ending,
                });
            }
        }
        None
    }
}

/// Insert `lines` right after the opening delimiter. A document without a
/// block gets a new one holding just those lines.
pub fn insert_after_opening(text: &str, lines: &[String]) -> String {
    match MetadataBlock::locate(text) {
        Some(block) => {
            let mut out = String::with_capacity(text.len() + 64);
            out.push_str(&text[..block.opening.end]);
            for line in lines {
                out.push_str(line);
                out.push_str(block.line_ending);
            }
            out.push_str(&text[block.opening.end..]);
            out
        }
        None => {
            let mut out = String::with_capacity(text.len() + 64);
            out.push_str(DELIMITER);
            out.push('\n');
            for line in lines {
                out.push_str(line);
                out.push('\n');
            }
            out.push_str(DELIMITER);
            out.push('\n');
            out.push_str(text);
            out
        }
    }
}

/// Replace the first top-level `key:` line inside the block with
/// `key: value`. Returns `None` when there is no such line.
pub fn replace_key_line(text: &str, key: &str, value: &str) -> Result<Option<String>> {
    let pattern = Regex::new(&format!(r"(?m)^{}:[^\r\n]*", regex::escape(key)))?;
    let replacement = format!("{}: {}", key, value);

    Ok(edit_inner(text, |inner| {
        pattern
            .is_match(inner)
            .then(|| pattern.replacen(inner, 1, NoExpand(&replacement)).into_owned())
    }))
}

/// Insert `line` on its own line after the first top-level `key:` line
/// inside the block. Returns `None` when there is no such line.
pub fn insert_after_key(text: &str, key: &str, line: &str) -> Result<Option<String>> {
    let pattern = Regex::new(&format!(r"(?m)^{}:[^\r\n]*", regex::escape(key)))?;
    let line_ending = MetadataBlock::locate(text).map_or("\n", |b| b.line_ending);

    Ok(edit_inner(text, |inner| {
        let found = pattern.find(inner)?;
        let mut out = String::with_capacity(inner.len() + line.len() + 2);
        out.push_str(&inner[..found.end()]);
        out.push_str(line_ending);
        out.push_str(line);
        out.push_str(&inner[found.end()..]);
        Some(out)
    }))
}

/// Rewrite every `published: false` in the block to `published: true`.
pub fn normalize_published(text: &str) -> Result<String> {
    let pattern = Regex::new(r"(?m)^published:[ \t]*false\b")?;

    Ok(edit_inner(text, |inner| {
        pattern
            .is_match(inner)
            .then(|| pattern.replace_all(inner, "published: true").into_owned())
    })
    .unwrap_or_else(|| text.to_string()))
}

fn edit_inner(text: &str, edit: impl FnOnce(&str) -> Option<String>) -> Option<String> {
    let block = MetadataBlock::locate(text)?;
    let edited = edit(&text[block.inner.clone()])?;

    let mut out = String::with_capacity(text.len() + edited.len());
    out.push_str(&text[..block.inner.start]);
    out.push_str(&edited);
    out.push_str(&text[block.inner.end..]);
    Some(out)
}
