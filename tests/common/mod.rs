use assert_cmd::Command;
use std::path::Path;

pub fn blogr_cmd() -> Command {
    let mut cmd = Command::cargo_bin("blogr").unwrap();
    cmd.env_remove("BLOGR_ROOT");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Create a post through the CLI and return its id as printed
#[allow(dead_code)]
pub fn create_post(dir: &Path, title: &str, content: &str, tags: &[&str]) -> String {
    let mut cmd = blogr_cmd();
    cmd.current_dir(dir)
        .arg("new")
        .arg(title)
        .arg("--content")
        .arg(content);
    for tag in tags {
        cmd.arg("--tag").arg(tag);
    }

    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "new failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .trim()
        .strip_prefix("Created post ")
        .expect("unexpected create output")
        .to_string()
}
