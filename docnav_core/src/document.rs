use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::DocnavError;
use crate::DocnavResult;
use crate::scanner::ScanOptions;
use crate::toc::TocItem;
use crate::toc::extract_headings;

const FRONT_MATTER_DELIMITER: &str = "---";

/// Metadata declared in a document's YAML front matter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Any other keys, kept as loosely typed values.
	#[serde(flatten)]
	pub extra: BTreeMap<String, serde_json::Value>,
}

/// A document resolved from a route and read from disk.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
	/// The route the document was resolved from, e.g. `guides/setup`.
	pub route: String,
	/// Absolute path of the file that was read.
	pub path: PathBuf,
	pub front_matter: FrontMatter,
	/// Document content after the front matter block.
	pub body: String,
	/// Table of contents extracted from the full document text.
	pub headings: Vec<TocItem>,
}

impl Document {
	/// Build a document from its source text.
	pub fn from_source(
		route: impl Into<String>,
		path: impl Into<PathBuf>,
		source: &str,
	) -> DocnavResult<Self> {
		let path = path.into();
		let (raw_front_matter, body) = split_front_matter(source);
		let front_matter = match raw_front_matter {
			Some(raw) => parse_front_matter(raw, &path)?,
			None => FrontMatter::default(),
		};

		Ok(Self {
			route: route.into(),
			path,
			front_matter,
			body: body.to_string(),
			headings: extract_headings(source),
		})
	}

	/// A display title: the front matter `title`, else the first level one
	/// heading, else the last route segment.
	pub fn title(&self) -> &str {
		if let Some(title) = self.front_matter.title.as_deref() {
			return title;
		}

		if let Some(heading) = self.headings.iter().find(|item| item.level == 1) {
			return &heading.text;
		}

		self.route.rsplit('/').next().unwrap_or_default()
	}
}

/// Split a leading `---` delimited front matter block from the document body.
///
/// Returns `(None, content)` when the document has no complete front matter
/// block.
pub fn split_front_matter(content: &str) -> (Option<&str>, &str) {
	let Some(after_open) = strip_delimiter_line(content) else {
		return (None, content);
	};

	let mut offset = 0;
	for line in after_open.split_inclusive('\n') {
		if line.trim_end_matches(['\r', '\n']) == FRONT_MATTER_DELIMITER {
			let front_matter = &after_open[..offset];
			let body = &after_open[offset + line.len()..];
			return (Some(front_matter), body);
		}
		offset += line.len();
	}

	(None, content)
}

fn strip_delimiter_line(content: &str) -> Option<&str> {
	let rest = content.strip_prefix(FRONT_MATTER_DELIMITER)?;
	rest.strip_prefix("\r\n")
		.or_else(|| rest.strip_prefix('\n'))
}

/// Parse the YAML between the front matter delimiters.
pub fn parse_front_matter(raw: &str, path: &Path) -> DocnavResult<FrontMatter> {
	if raw.trim().is_empty() {
		return Ok(FrontMatter::default());
	}

	serde_yaml_ng::from_str(raw).map_err(|e| {
		DocnavError::FrontMatter {
			path: path.display().to_string(),
			reason: e.to_string(),
		}
	})
}

/// Split a route like `guides/setup` into its non-empty segments.
pub fn route_segments(route: &str) -> Vec<&str> {
	route
		.split('/')
		.filter(|segment| !segment.is_empty())
		.collect()
}

fn is_valid_segment(segment: &str) -> bool {
	!segment.is_empty()
		&& segment != "."
		&& segment != ".."
		&& !segment.contains(['/', '\\'])
}

/// Find the file backing a route.
///
/// For the segments `a/b` this tries `a/b.mdx` and then `a/b/page.mdx`
/// (using the configured extension and index name). No segments resolves to
/// the index document of `content_root` itself.
pub fn resolve_document(
	content_root: &Path,
	segments: &[&str],
	options: &ScanOptions,
) -> DocnavResult<PathBuf> {
	let route = segments.join("/");
	if !segments.iter().all(|segment| is_valid_segment(segment)) {
		tracing::debug!(%route, "rejecting route with invalid segment");
		return Err(DocnavError::DocumentNotFound { route });
	}

	let mut candidates = Vec::with_capacity(2);
	if let Some((last, parents)) = segments.split_last() {
		let mut file = content_root.to_path_buf();
		file.extend(parents);
		file.push(options.document_file_name(last));
		candidates.push(file);
	}

	let mut index = content_root.to_path_buf();
	index.extend(segments);
	index.push(options.index_file_name());
	candidates.push(index);

	for candidate in candidates {
		tracing::debug!(path = %candidate.display(), "searching for document");
		if candidate.is_file() {
			return Ok(candidate);
		}
	}

	Err(DocnavError::DocumentNotFound { route })
}

/// Resolve a route, read the file and parse it into a [`Document`].
pub fn load_document(
	content_root: &Path,
	segments: &[&str],
	options: &ScanOptions,
) -> DocnavResult<Document> {
	let path = resolve_document(content_root, segments, options)?;
	let source = std::fs::read_to_string(&path)?;

	Document::from_source(segments.join("/"), path, &source)
}
