use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use docnav_cli::Commands;
use docnav_cli::DocnavCli;
use docnav_cli::OutputFormat;
use docnav_core::DocnavConfig;
use docnav_core::DocnavError;
use docnav_core::FrontMatter;
use docnav_core::ScanOptions;
use docnav_core::TocItem;
use docnav_core::extract_headings;
use docnav_core::load_document;
use docnav_core::resolve_document;
use docnav_core::route_segments;
use docnav_core::scan_with_options;
use docnav_core::sidebar_entries;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,dimmed) => {
		if color_enabled() {
			format!("{}", $text.dimmed())
		} else {
			format!("{}", $text)
		}
	};
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
	let args = DocnavCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Tree { format }) => run_tree(&args, *format),
		Some(Commands::Toc { file, format }) => run_toc(file, *format),
		Some(Commands::Resolve { route }) => run_resolve(&args, route),
		Some(Commands::Page { route, format }) => run_page(&args, route, *format),
		None => {
			eprintln!("No subcommand specified. Run `docnav --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<DocnavError>() {
			Ok(docnav_err) => {
				let not_found = matches!(*docnav_err, DocnavError::DocumentNotFound { .. });
				let report: miette::Report = (*docnav_err).into();
				eprintln!("{report:?}");
				process::exit(if not_found { 1 } else { 2 });
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
				process::exit(2);
			}
		}
	}
}

/// Log to stderr. `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
	let default_directive = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

fn resolve_root(args: &DocnavCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// The project settings every subcommand needs.
struct Site {
	content_dir: PathBuf,
	options: ScanOptions,
	route_prefix: String,
}

fn load_site(args: &DocnavCli) -> Result<Site, DocnavError> {
	let root = resolve_root(args);
	let config = DocnavConfig::load(&root)?.unwrap_or_default();
	let content_dir = args
		.content
		.clone()
		.unwrap_or_else(|| config.content_dir(&root));

	tracing::debug!(content_dir = %content_dir.display(), "using content directory");

	Ok(Site {
		content_dir,
		options: ScanOptions::from_config(Some(&config)),
		route_prefix: config.route_prefix().to_string(),
	})
}

fn ensure_content_dir(site: &Site) -> Result<(), DocnavError> {
	if site.content_dir.is_dir() {
		Ok(())
	} else {
		Err(DocnavError::MissingContentRoot {
			path: site.content_dir.display().to_string(),
		})
	}
}

fn print_json(value: &impl Serialize) -> CliResult {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}

fn run_tree(args: &DocnavCli, format: OutputFormat) -> CliResult {
	let site = load_site(args)?;
	ensure_content_dir(&site)?;

	// Scan diagnostics reach stderr through the core's `tracing` warnings.
	let report = scan_with_options(&site.content_dir, &site.options);

	if format == OutputFormat::Json {
		return print_json(&report.items);
	}

	if report.items.is_empty() {
		println!("No documents found in {}", site.content_dir.display());
		return Ok(());
	}

	for entry in sidebar_entries(&report.items, &site.route_prefix) {
		let indent = "  ".repeat(entry.depth);
		match entry.href {
			Some(href) => println!("{indent}{}  {}", entry.label, colored!(href, dimmed)),
			None => println!("{indent}{}", colored!(format!("{}/", entry.label), bold)),
		}
	}

	Ok(())
}

fn run_toc(file: &Path, format: OutputFormat) -> CliResult {
	let content = std::fs::read_to_string(file).map_err(DocnavError::from)?;
	let headings = extract_headings(&content);

	if format == OutputFormat::Json {
		return print_json(&headings);
	}

	print_headings(&headings);
	Ok(())
}

fn print_headings(headings: &[TocItem]) {
	if headings.is_empty() {
		println!("No headings found.");
		return;
	}

	for item in headings {
		let indent = "  ".repeat(usize::from(item.level.saturating_sub(1)));
		println!(
			"{indent}- {} {}",
			item.text,
			colored!(format!("#{}", item.id), dimmed)
		);
	}
}

fn run_resolve(args: &DocnavCli, route: &str) -> CliResult {
	let site = load_site(args)?;
	let path = resolve_document(&site.content_dir, &route_segments(route), &site.options)?;
	println!("{}", path.display());
	Ok(())
}

#[derive(Serialize)]
struct PageSummary<'a> {
	route: &'a str,
	path: &'a Path,
	title: &'a str,
	front_matter: &'a FrontMatter,
	headings: &'a [TocItem],
}

fn run_page(args: &DocnavCli, route: &str, format: OutputFormat) -> CliResult {
	let site = load_site(args)?;
	let document = load_document(&site.content_dir, &route_segments(route), &site.options)?;

	if format == OutputFormat::Json {
		return print_json(&PageSummary {
			route: &document.route,
			path: &document.path,
			title: document.title(),
			front_matter: &document.front_matter,
			headings: &document.headings,
		});
	}

	println!("{}", colored!(document.title(), bold));
	println!("{:<12} {}", "path:", document.path.display());
	if let Some(description) = &document.front_matter.description {
		println!("{:<12} {description}", "description:");
	}
	println!();
	println!("{}", colored!("On this page", bold));
	print_headings(&document.headings);

	Ok(())
}
