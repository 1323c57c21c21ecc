use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::DocnavError;
use crate::DocnavResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["docnav.toml", ".docnav.toml", ".config/docnav.toml"];

/// Content directory used when no config overrides it, relative to the
/// project root.
pub const DEFAULT_CONTENT_ROOT: &str = "app/docs/content";

/// Route prefix prepended to every sidebar link.
pub const DEFAULT_ROUTE_PREFIX: &str = "/docs";

/// Configuration loaded from a `docnav.toml` file.
///
/// ```toml
/// content_root = "app/docs/content"
/// extension = "mdx"
/// index_name = "page"
/// route_prefix = "/docs"
/// ```
///
/// Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DocnavConfig {
	/// Directory holding the documents, relative to the project root.
	#[serde(default)]
	pub content_root: Option<PathBuf>,
	/// Document extension, with or without the leading dot.
	#[serde(default)]
	pub extension: Option<String>,
	/// Stem of the per-directory default document.
	#[serde(default)]
	pub index_name: Option<String>,
	/// Prefix for generated sidebar links.
	#[serde(default)]
	pub route_prefix: Option<String>,
}

impl DocnavConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the first config file found under `root`. Returns `Ok(None)` when
	/// the project has no config file.
	pub fn load(root: &Path) -> DocnavResult<Option<DocnavConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		tracing::debug!(path = %config_path.display(), "loading config");
		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::parse(&content)?;

		Ok(Some(config))
	}

	/// Parse config file contents.
	pub fn parse(content: &str) -> DocnavResult<DocnavConfig> {
		toml::from_str(content).map_err(|e| DocnavError::ConfigParse(e.to_string()))
	}

	/// The absolute content directory for a project rooted at `root`.
	pub fn content_dir(&self, root: &Path) -> PathBuf {
		root.join(
			self.content_root
				.as_deref()
				.unwrap_or(Path::new(DEFAULT_CONTENT_ROOT)),
		)
	}

	/// The sidebar route prefix, without a trailing `/`.
	pub fn route_prefix(&self) -> &str {
		self.route_prefix
			.as_deref()
			.unwrap_or(DEFAULT_ROUTE_PREFIX)
			.trim_end_matches('/')
	}
}
