//! Integration tests for creating, editing, showing, and deleting posts

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{blogr_cmd, create_post};

fn init_blog() -> TempDir {
    let temp = TempDir::new().unwrap();
    blogr_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

#[test]
fn test_new_then_show() {
    let temp = init_blog();

    let id = create_post(temp.path(), "Hello", "first body", &["x", "y"]);

    blogr_cmd()
        .current_dir(temp.path())
        .arg("show")
        .arg(&id)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Hello"))
        .stdout(predicate::str::contains("first body"))
        .stdout(predicate::str::contains("Tags:    x, y"));
}

#[test]
fn test_new_writes_post_blob() {
    let temp = init_blog();

    create_post(temp.path(), "Hello", "body", &[]);

    let blob = std::fs::read_to_string(temp.path().join(".blogr/posts.json")).unwrap();
    assert!(blob.contains("\"title\": \"Hello\""));
    assert!(blob.contains("createdAt"));
    assert!(blob.contains("updatedAt"));
}

#[test]
fn test_new_rejects_empty_title() {
    let temp = init_blog();

    blogr_cmd()
        .current_dir(temp.path())
        .arg("new")
        .arg("   ")
        .arg("--content")
        .arg("body")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("title must not be empty"));
}

#[test]
fn test_new_rejects_empty_content() {
    let temp = init_blog();

    blogr_cmd()
        .current_dir(temp.path())
        .arg("new")
        .arg("Title")
        .arg("--content")
        .arg("  ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("content must not be empty"));
}

#[test]
fn test_new_splits_comma_separated_tags() {
    let temp = init_blog();

    let id = create_post(temp.path(), "Tagged", "body", &["a, b"]);

    blogr_cmd()
        .current_dir(temp.path())
        .arg("show")
        .arg(&id)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tags:    a, b"));
}

#[test]
fn test_edit_title_keeps_other_fields() {
    let temp = init_blog();
    let id = create_post(temp.path(), "Hello", "body", &["x"]);

    blogr_cmd()
        .current_dir(temp.path())
        .arg("edit")
        .arg(&id)
        .arg("--title")
        .arg("Hello2")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Updated post {}", id)));

    blogr_cmd()
        .current_dir(temp.path())
        .arg("show")
        .arg(&id)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Hello2"))
        .stdout(predicate::str::contains("body"))
        .stdout(predicate::str::contains("Tags:    x"));
}

#[test]
fn test_edit_replaces_tags() {
    let temp = init_blog();
    let id = create_post(temp.path(), "Hello", "body", &["x", "y"]);

    blogr_cmd()
        .current_dir(temp.path())
        .arg("edit")
        .arg(&id)
        .arg("--tag")
        .arg("z")
        .assert()
        .success();

    blogr_cmd()
        .current_dir(temp.path())
        .arg("show")
        .arg(&id)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tags:    z"))
        .stdout(predicate::str::contains("Tags:    x").not());
}

#[test]
fn test_edit_clear_tags() {
    let temp = init_blog();
    let id = create_post(temp.path(), "Hello", "body", &["x"]);

    blogr_cmd()
        .current_dir(temp.path())
        .arg("edit")
        .arg(&id)
        .arg("--clear-tags")
        .assert()
        .success();

    blogr_cmd()
        .current_dir(temp.path())
        .arg("show")
        .arg(&id)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tags:").not());
}

#[test]
fn test_edit_missing_post_exits_4() {
    let temp = init_blog();

    blogr_cmd()
        .current_dir(temp.path())
        .arg("edit")
        .arg("999")
        .arg("--title")
        .arg("x")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Post not found"));
}

#[test]
fn test_invalid_id_exits_3() {
    let temp = init_blog();

    blogr_cmd()
        .current_dir(temp.path())
        .arg("show")
        .arg("not-a-number")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Invalid post id"));
}

#[test]
fn test_show_missing_post_exits_4() {
    let temp = init_blog();

    blogr_cmd()
        .current_dir(temp.path())
        .arg("show")
        .arg("12345")
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_delete_with_force() {
    let temp = init_blog();
    let id = create_post(temp.path(), "Hello", "body", &[]);

    blogr_cmd()
        .current_dir(temp.path())
        .arg("delete")
        .arg(&id)
        .arg("--force")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Deleted post {}", id)));

    blogr_cmd()
        .current_dir(temp.path())
        .arg("show")
        .arg(&id)
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_delete_is_idempotent() {
    let temp = init_blog();
    let id = create_post(temp.path(), "Hello", "body", &[]);

    blogr_cmd()
        .current_dir(temp.path())
        .arg("delete")
        .arg(&id)
        .arg("--force")
        .assert()
        .success();

    // Deleting again succeeds and reports that nothing matched
    blogr_cmd()
        .current_dir(temp.path())
        .arg("delete")
        .arg(&id)
        .arg("--force")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("No post with id {}", id)));
}

#[test]
fn test_delete_prompts_and_accepts_yes() {
    let temp = init_blog();
    let id = create_post(temp.path(), "Hello", "body", &[]);

    blogr_cmd()
        .current_dir(temp.path())
        .arg("delete")
        .arg(&id)
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Deleted post {}", id)));
}

#[test]
fn test_delete_prompt_default_aborts() {
    let temp = init_blog();
    let id = create_post(temp.path(), "Hello", "body", &[]);

    blogr_cmd()
        .current_dir(temp.path())
        .arg("delete")
        .arg(&id)
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted"));

    // Post is still there
    blogr_cmd()
        .current_dir(temp.path())
        .arg("show")
        .arg(&id)
        .assert()
        .success();
}
