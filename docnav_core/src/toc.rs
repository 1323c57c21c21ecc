use serde::Deserialize;
use serde::Serialize;

use crate::slug::slugify;

/// The deepest heading level collected into a table of contents.
pub const MAX_HEADING_LEVEL: u8 = 3;

const HEADING_MARKER: char = '#';

/// A single entry in a document's table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocItem {
	/// Anchor id derived from [`TocItem::text`] with [`slugify`]. Not unique:
	/// headings with the same slug share an id.
	pub id: String,
	/// The heading text, trimmed.
	pub text: String,
	/// Heading depth, between 1 and [`MAX_HEADING_LEVEL`].
	pub level: u8,
}

/// Extract the `#`, `##` and `###` headings from raw document text.
///
/// Lines are matched without any awareness of the surrounding markdown, so
/// `#` lines inside fenced code blocks or front matter are picked up as well.
/// Headings with more than three markers are skipped rather than clamped.
///
/// ```
/// use docnav_core::extract_headings;
///
/// let items = extract_headings("# Hello World\n\ntext\n## Sub, Section!\n");
/// assert_eq!(items.len(), 2);
/// assert_eq!(items[1].id, "sub-section");
/// assert_eq!(items[1].level, 2);
/// ```
pub fn extract_headings(content: &str) -> Vec<TocItem> {
	content.lines().filter_map(parse_heading_line).collect()
}

/// Parse a single line as a heading, returning `None` when it isn't one.
pub(crate) fn parse_heading_line(line: &str) -> Option<TocItem> {
	let rest = line.trim_start_matches(HEADING_MARKER);
	let level = line.len() - rest.len();
	if level == 0 || level > usize::from(MAX_HEADING_LEVEL) {
		return None;
	}

	// At least one whitespace character must separate the markers from the
	// text, and at least one more character must follow it.
	let mut chars = rest.chars();
	if !chars.next().is_some_and(char::is_whitespace) {
		return None;
	}
	let remainder = chars.as_str();
	if remainder.is_empty() {
		return None;
	}

	let text = remainder.trim().to_string();
	let id = slugify(&text);

	Some(TocItem {
		id,
		text,
		level: level as u8,
	})
}
