use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use icu_collator::Collator;
use icu_collator::CollatorBorrowed;
use icu_collator::CollatorPreferences;
use icu_collator::options::CollatorOptions;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;

use crate::config::DocnavConfig;

/// Extension of the files listed in the navigation tree.
pub const DEFAULT_EXTENSION: &str = "mdx";

/// File stem of the per-directory default document. It is rendered by the
/// directory route itself, so it never appears as a sibling.
pub const DEFAULT_INDEX_NAME: &str = "page";

/// Options controlling which files the scanner treats as documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
	/// Document extension without the leading dot.
	pub extension: String,
	/// Reserved file stem excluded from sibling listings.
	pub index_name: String,
}

impl Default for ScanOptions {
	fn default() -> Self {
		Self {
			extension: DEFAULT_EXTENSION.to_string(),
			index_name: DEFAULT_INDEX_NAME.to_string(),
		}
	}
}

impl ScanOptions {
	/// Construct [`ScanOptions`] from an optional [`DocnavConfig`], falling back
	/// to the defaults for missing values.
	pub fn from_config(config: Option<&DocnavConfig>) -> Self {
		let defaults = Self::default();
		let Some(config) = config else {
			return defaults;
		};

		Self {
			extension: config
				.extension
				.as_deref()
				.map_or(defaults.extension, |ext| {
					ext.trim_start_matches('.').to_string()
				}),
			index_name: config.index_name.clone().unwrap_or(defaults.index_name),
		}
	}

	/// Return the document stem of `file_name` if it carries the document
	/// extension.
	pub fn document_stem<'a>(&self, file_name: &'a str) -> Option<&'a str> {
		file_name
			.strip_suffix(self.extension.as_str())
			.and_then(|rest| rest.strip_suffix('.'))
	}

	/// Return the document stem of `file_name` if it belongs in a sibling
	/// listing, i.e. it is a document other than the index file.
	pub fn listed_document_stem<'a>(&self, file_name: &'a str) -> Option<&'a str> {
		self.document_stem(file_name)
			.filter(|stem| *stem != self.index_name)
	}

	/// The file name of a document with the given stem.
	pub fn document_file_name(&self, stem: &str) -> String {
		format!("{stem}.{}", self.extension)
	}

	/// The file name of the reserved index document.
	pub fn index_file_name(&self) -> String {
		self.document_file_name(&self.index_name)
	}
}

/// Whether a navigation node is a directory or a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocKind {
	/// A directory. `children` may be empty.
	Directory { children: Vec<DocItem> },
	/// A document file.
	File,
}

/// A node in the navigation tree.
///
/// Serialises to the shape consumed by sidebar renderers: directories carry
/// a `children` array and documents omit the key entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocItem {
	/// Directory name, or file name without the document extension.
	pub slug: String,
	/// Display label. Currently always equal to `slug`.
	pub name: String,
	/// Route-relative path using `/` separators.
	pub path: String,
	pub kind: DocKind,
}

impl DocItem {
	pub fn directory(name: impl Into<String>, path: impl Into<String>, children: Vec<Self>) -> Self {
		let name = name.into();
		Self {
			slug: name.clone(),
			name,
			path: path.into(),
			kind: DocKind::Directory { children },
		}
	}

	pub fn file(slug: impl Into<String>, path: impl Into<String>) -> Self {
		let slug = slug.into();
		Self {
			name: slug.clone(),
			slug,
			path: path.into(),
			kind: DocKind::File,
		}
	}

	pub fn is_directory(&self) -> bool {
		matches!(self.kind, DocKind::Directory { .. })
	}

	/// The children of a directory node, or `None` for a document.
	pub fn children(&self) -> Option<&[DocItem]> {
		match &self.kind {
			DocKind::Directory { children } => Some(children),
			DocKind::File => None,
		}
	}
}

impl Serialize for DocItem {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let children = self.children();
		let len = if children.is_some() { 4 } else { 3 };
		let mut map = serializer.serialize_map(Some(len))?;
		map.serialize_entry("slug", &self.slug)?;
		map.serialize_entry("name", &self.name)?;
		map.serialize_entry("path", &self.path)?;
		if let Some(children) = children {
			map.serialize_entry("children", children)?;
		}
		map.end()
	}
}

/// The kind of problem encountered while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum ScanDiagnosticKind {
	/// A directory (or one of its entries) could not be read.
	Unreadable { reason: String },
	/// A directory resolves to one of its own ancestors through a symlink.
	SymlinkCycle,
	/// An entry name is not valid UTF-8 and cannot become a route.
	NonUtf8Name,
}

/// A non-fatal problem recorded while scanning. The affected subtree is left
/// empty and the rest of the tree is still built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanDiagnostic {
	pub path: PathBuf,
	pub kind: ScanDiagnosticKind,
}

impl ScanDiagnostic {
	/// Human-readable message for this diagnostic.
	pub fn message(&self) -> String {
		let path = self.path.display();
		match &self.kind {
			ScanDiagnosticKind::Unreadable { reason } => {
				format!("failed to read `{path}`: {reason}")
			}
			ScanDiagnosticKind::SymlinkCycle => {
				format!("symlink cycle detected at `{path}`")
			}
			ScanDiagnosticKind::NonUtf8Name => {
				format!("skipped `{path}`: name is not valid UTF-8")
			}
		}
	}
}

/// The navigation tree together with the diagnostics collected while
/// building it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
	pub items: Vec<DocItem>,
	pub diagnostics: Vec<ScanDiagnostic>,
}

impl ScanReport {
	pub fn is_clean(&self) -> bool {
		self.diagnostics.is_empty()
	}
}

/// Build the navigation tree for `root` with the default options.
///
/// Failures are never raised: unreadable directories (including a missing
/// `root`) produce an empty listing and a logged warning. Use
/// [`scan_with_options`] to inspect the diagnostics.
pub fn scan(root: &Path) -> Vec<DocItem> {
	scan_with_options(root, &ScanOptions::default()).items
}

/// Build the navigation tree for `root`.
pub fn scan_with_options(root: &Path, options: &ScanOptions) -> ScanReport {
	scan_directory(root, "", options)
}

/// Build the navigation tree for `dir`, prefixing every route path with
/// `relative_base`.
pub fn scan_directory(dir: &Path, relative_base: &str, options: &ScanOptions) -> ScanReport {
	let mut report = ScanReport::default();
	let mut ancestors = HashSet::new();
	report.items = walk_dir(
		dir,
		relative_base,
		options,
		&mut ancestors,
		&mut report.diagnostics,
	);
	report
}

fn walk_dir(
	dir: &Path,
	relative_base: &str,
	options: &ScanOptions,
	ancestors: &mut HashSet<PathBuf>,
	diagnostics: &mut Vec<ScanDiagnostic>,
) -> Vec<DocItem> {
	// Track canonical paths on the current branch so a symlink back to an
	// ancestor terminates instead of recursing forever.
	let canonical = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
	if !ancestors.insert(canonical.clone()) {
		tracing::warn!(path = %dir.display(), "symlink cycle detected, skipping directory");
		diagnostics.push(ScanDiagnostic {
			path: dir.to_path_buf(),
			kind: ScanDiagnosticKind::SymlinkCycle,
		});
		return Vec::new();
	}

	let items = read_entries(dir, relative_base, options, ancestors, diagnostics);
	ancestors.remove(&canonical);
	items
}

fn read_entries(
	dir: &Path,
	relative_base: &str,
	options: &ScanOptions,
	ancestors: &mut HashSet<PathBuf>,
	diagnostics: &mut Vec<ScanDiagnostic>,
) -> Vec<DocItem> {
	let entries = match std::fs::read_dir(dir) {
		Ok(entries) => entries,
		Err(error) => {
			record_unreadable(dir, &error, diagnostics);
			return Vec::new();
		}
	};

	let mut items = Vec::new();

	for entry in entries {
		let entry = match entry {
			Ok(entry) => entry,
			Err(error) => {
				record_unreadable(dir, &error, diagnostics);
				continue;
			}
		};
		let path = entry.path();
		let file_name = entry.file_name();
		let Some(name) = file_name.to_str() else {
			tracing::debug!(path = %path.display(), "skipping entry with non UTF-8 name");
			diagnostics.push(ScanDiagnostic {
				path,
				kind: ScanDiagnosticKind::NonUtf8Name,
			});
			continue;
		};

		if path.is_dir() {
			let relative_path = join_route(relative_base, name);
			let children = walk_dir(&path, &relative_path, options, ancestors, diagnostics);
			items.push(DocItem::directory(name, relative_path, children));
		} else if let Some(stem) = options.listed_document_stem(name) {
			items.push(DocItem::file(stem, join_route(relative_base, stem)));
		}
	}

	items.sort_by(compare_items);
	items
}

fn record_unreadable(dir: &Path, error: &std::io::Error, diagnostics: &mut Vec<ScanDiagnostic>) {
	tracing::warn!(path = %dir.display(), %error, "error scanning directory");
	diagnostics.push(ScanDiagnostic {
		path: dir.to_path_buf(),
		kind: ScanDiagnosticKind::Unreadable {
			reason: error.to_string(),
		},
	});
}

/// Join a route segment onto a route-relative base path.
pub(crate) fn join_route(base: &str, segment: &str) -> String {
	if base.is_empty() {
		segment.to_string()
	} else {
		format!("{}/{segment}", base.trim_end_matches('/'))
	}
}

/// Sibling order: directories first, then documents, each group collated by
/// name.
fn compare_items(a: &DocItem, b: &DocItem) -> Ordering {
	b.is_directory()
		.cmp(&a.is_directory())
		.then_with(|| collate(&a.name, &b.name))
}

thread_local! {
	static ROOT_COLLATOR: Option<CollatorBorrowed<'static>> =
		Collator::try_new(CollatorPreferences::default(), CollatorOptions::default())
			.inspect_err(|error| tracing::warn!(%error, "failed to load root collator"))
			.ok();
}

/// Compare two labels with the Unicode root collation at tertiary strength,
/// the order a locale-aware UI sort produces. Labels the collator considers
/// equal fall back to code point order.
pub fn collate(a: &str, b: &str) -> Ordering {
	ROOT_COLLATOR
		.with(|collator| {
			collator
				.as_ref()
				.map_or(Ordering::Equal, |collator| collator.compare(a, b))
		})
		.then_with(|| a.cmp(b))
}
