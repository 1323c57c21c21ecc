mod common;

use docnav_core::AnyEmptyResult;
use serde_json::Value;
use serde_json::json;
use similar_asserts::assert_eq;

use crate::common::write_file;

#[test]
fn toc_prints_nested_headings() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_file(
		tmp.path(),
		"doc.mdx",
		"# Hello World\n\ntext\n## Sub, Section!\n#### Too Deep\n",
	)?;

	common::docnav_cmd()
		.arg("toc")
		.arg(tmp.path().join("doc.mdx"))
		.assert()
		.success()
		.stdout("- Hello World #hello-world\n  - Sub, Section! #sub-section\n");

	Ok(())
}

#[test]
fn toc_prints_json_with_duplicate_ids() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_file(tmp.path(), "doc.mdx", "# Foo Bar\n# foo-bar\n")?;

	let output = common::docnav_cmd()
		.arg("toc")
		.arg(tmp.path().join("doc.mdx"))
		.arg("--format")
		.arg("json")
		.output()?;
	assert!(output.status.success());

	let value: Value = serde_json::from_slice(&output.stdout)?;
	assert_eq!(
		value,
		json!([
			{ "id": "foo-bar", "text": "Foo Bar", "level": 1 },
			{ "id": "foo-bar", "text": "foo-bar", "level": 1 }
		])
	);

	Ok(())
}

#[test]
fn toc_without_headings() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_file(tmp.path(), "doc.mdx", "plain text only\n")?;

	common::docnav_cmd()
		.arg("toc")
		.arg(tmp.path().join("doc.mdx"))
		.assert()
		.success()
		.stdout("No headings found.\n");

	Ok(())
}

#[test]
fn toc_fails_for_missing_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::docnav_cmd()
		.arg("toc")
		.arg(tmp.path().join("missing.mdx"))
		.assert()
		.code(2);

	Ok(())
}
