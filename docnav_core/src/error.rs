use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum DocnavError {
	#[error(transparent)]
	#[diagnostic(code(docnav::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(docnav::config_parse),
		help(
			"check that docnav.toml is valid TOML using the keys content_root, extension, \
			 index_name and route_prefix"
		)
	)]
	ConfigParse(String),

	#[error("no document found for route `{route}`")]
	#[diagnostic(
		code(docnav::document_not_found),
		help("run `docnav tree` to list the routes available in the content directory")
	)]
	DocumentNotFound { route: String },

	#[error("invalid front matter in `{path}`: {reason}")]
	#[diagnostic(
		code(docnav::front_matter),
		help("front matter must be a YAML mapping between two `---` lines")
	)]
	FrontMatter { path: String, reason: String },

	#[error("content directory not found: `{path}`")]
	#[diagnostic(
		code(docnav::missing_content_root),
		help("set `content_root` in docnav.toml or pass `--content`")
	)]
	MissingContentRoot { path: String },
}

pub type DocnavResult<T> = Result<T, DocnavError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
