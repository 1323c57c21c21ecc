use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn docnav_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("docnav"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("RUST_LOG");
	cmd
}

/// Write `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> std::io::Result<()> {
	let path = root.join(relative);
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::write(path, content)
}
