//! `docnav_core` indexes the content of an MDX documentation site. It turns a
//! content directory into an ordered sidebar tree and a document's raw text
//! into a table of contents, using one shared slug function so that table of
//! contents links always match the anchors on rendered headings.
//!
//! ## Pipeline
//!
//! ```text
//! content directory
//!   → Scanner (walks directories, skips index files, sorts dirs before docs)
//!   → Navigation (flattens the tree into sidebar rows with `/docs/...` links)
//!
//! route
//!   → Resolver (`<route>.mdx`, then `<route>/page.mdx`)
//!   → Document (front matter + headings)
//!   → Table of contents (`#` to `###` headings with slug ids)
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Configuration loading from `docnav.toml`.
//! - [`scanner`] — Directory scanning into [`DocItem`] trees.
//! - [`toc`] — Heading extraction into [`TocItem`] lists.
//! - [`document`] — Route resolution, front matter, and document loading.
//! - [`navigation`] — Sidebar rows, heading anchors, and link classification.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use docnav_core::extract_headings;
//! use docnav_core::scan;
//!
//! let tree = scan(Path::new("app/docs/content"));
//! for item in &tree {
//! 	println!("{}", item.path);
//! }
//!
//! let toc = extract_headings("# Intro\n\n## Install\n");
//! assert_eq!(toc[1].id, "install");
//! ```

pub use config::*;
pub use document::*;
pub use error::*;
pub use navigation::*;
pub use scanner::*;
pub use slug::*;
pub use toc::*;

pub mod config;
pub mod document;
#[allow(unused_assignments)]
mod error;
pub mod navigation;
pub mod scanner;
mod slug;
pub mod toc;
