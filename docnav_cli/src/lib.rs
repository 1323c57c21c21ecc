use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Inspect the navigation of an MDX documentation site.",
	long_about = "docnav builds the sidebar tree of an MDX documentation site from its content \
	              directory and extracts the table of contents of individual documents.\n\nQuick \
	              start:\n  docnav tree              Print the sidebar tree\n  docnav toc \
	              <file>        Print the headings of a document\n  docnav resolve <route>   \
	              Find the file behind a route\n  docnav page <route>      Show a document's \
	              metadata and headings"
)]
pub struct DocnavCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Content directory holding the documents. Overrides `content_root`
	/// from `docnav.toml`.
	#[arg(long, short, global = true)]
	pub content: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Print the sidebar navigation tree of the content directory.
	///
	/// Directories are listed before documents and every directory's index
	/// document (`page.mdx` by default) is omitted, exactly as the sidebar
	/// renders them. Unreadable directories are reported as warnings and
	/// left empty.
	Tree {
		/// Output format. Use `text` for an indented tree with links or
		/// `json` for the raw navigation items.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Print the table of contents of a document file.
	///
	/// Collects `#`, `##` and `###` headings in document order together with
	/// the anchor id each one receives when rendered.
	Toc {
		/// The document to read.
		file: PathBuf,

		/// Output format for the headings.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Print the file that serves a route.
	///
	/// A route `guides/setup` is served by `guides/setup.mdx`, or by
	/// `guides/setup/page.mdx` when no such file exists. Exits with status 1
	/// when neither exists.
	Resolve {
		/// Route relative to the content directory, e.g. `guides/setup`.
		route: String,
	},
	/// Show the front matter and table of contents of the document behind a
	/// route.
	Page {
		/// Route relative to the content directory, e.g. `guides/setup`.
		route: String,

		/// Output format for the page summary.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output with colors and formatting.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}
