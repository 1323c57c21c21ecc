use serde::Serialize;

use crate::scanner::DocItem;
use crate::slug::slugify;
use crate::toc::MAX_HEADING_LEVEL;

/// One row of a rendered sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarEntry {
	/// Nesting depth, `0` for top level entries.
	pub depth: usize,
	pub label: String,
	/// Link target for documents. Directories are plain labels.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub href: Option<String>,
}

/// Flatten a navigation tree into sidebar rows in display order.
///
/// Documents link to `<route_prefix>/<path>`; directories become unlinked
/// labels followed by their children one level deeper.
pub fn sidebar_entries(items: &[DocItem], route_prefix: &str) -> Vec<SidebarEntry> {
	let mut entries = Vec::new();
	push_entries(items, route_prefix.trim_end_matches('/'), 0, &mut entries);
	entries
}

fn push_entries(items: &[DocItem], prefix: &str, depth: usize, entries: &mut Vec<SidebarEntry>) {
	for item in items {
		match item.children() {
			Some(children) => {
				entries.push(SidebarEntry {
					depth,
					label: item.name.clone(),
					href: None,
				});
				push_entries(children, prefix, depth + 1, entries);
			}
			None => {
				entries.push(SidebarEntry {
					depth,
					label: item.name.clone(),
					href: Some(document_href(prefix, &item.path)),
				});
			}
		}
	}
}

/// The link to a document route.
pub fn document_href(route_prefix: &str, path: &str) -> String {
	format!("{}/{path}", route_prefix.trim_end_matches('/'))
}

/// The `id` a rendered heading receives so that table of contents links
/// resolve. Only levels covered by the table of contents get an anchor.
pub fn heading_anchor(level: u8, text: &str) -> Option<String> {
	(1..=MAX_HEADING_LEVEL)
		.contains(&level)
		.then(|| slugify(text))
}

/// How a link inside document content should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LinkTarget {
	/// A route within the site, e.g. `/docs/setup`.
	Internal,
	/// An anchor on the current page, e.g. `#installation`.
	Fragment,
	/// Anything else. Opened in a new tab with `rel="noopener noreferrer"`.
	External,
}

impl LinkTarget {
	pub fn classify(href: &str) -> Self {
		if href.starts_with('/') {
			Self::Internal
		} else if href.starts_with('#') {
			Self::Fragment
		} else {
			Self::External
		}
	}

	pub fn opens_new_tab(self) -> bool {
		matches!(self, Self::External)
	}
}
