//! End-to-end tests for the postdeck CLI
//!
//! Each test runs the binary against its own temporary slot file via the
//! POSTDECK_SLOT / POSTDECK_CONFIG environment overrides, so tests are
//! isolated and safe to run in parallel.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command wired to a fresh temporary environment
fn postdeck(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("postdeck").unwrap();
    cmd.env("POSTDECK_SLOT", temp_dir.path().join("posts.json"))
        .env("POSTDECK_CONFIG", temp_dir.path().join("no-config.toml"));
    cmd
}

fn create_draft(temp_dir: &TempDir, title: &str) -> String {
    let output = postdeck(temp_dir)
        .args([
            "create",
            "--title",
            title,
            "--content",
            "Body text",
            "--network",
            "instagram",
            "--hashtag",
            "#x",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

#[test]
fn fresh_slot_is_seeded_with_fifteen_posts() {
    let temp_dir = TempDir::new().unwrap();

    let output = postdeck(&temp_dir)
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let posts: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(posts.as_array().unwrap().len(), 15);
}

#[test]
fn create_prints_a_uuid_and_post_appears_first_in_list() {
    let temp_dir = TempDir::new().unwrap();

    let id = create_draft(&temp_dir, "Fresh off the press");
    uuid::Uuid::parse_str(&id).expect("create should print a valid UUID");

    let output = postdeck(&temp_dir)
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    let posts: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let first = &posts.as_array().unwrap()[0];
    assert_eq!(first["id"], serde_json::Value::String(id));
    assert_eq!(first["title"], "Fresh off the press");
    assert_eq!(first["status"], "rascunho");
}

#[test]
fn create_without_networks_is_invalid_input() {
    let temp_dir = TempDir::new().unwrap();

    postdeck(&temp_dir)
        .args(["create", "--title", "T", "--content", "C"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("network"));
}

#[test]
fn status_filter_tracks_edits() {
    let temp_dir = TempDir::new().unwrap();
    let id = create_draft(&temp_dir, "Promote me");

    postdeck(&temp_dir)
        .args(["edit", id.as_str(), "--status", "published"])
        .assert()
        .success();

    postdeck(&temp_dir)
        .args(["list", "--status", "published"])
        .assert()
        .success()
        .stdout(predicate::str::contains(&id));

    postdeck(&temp_dir)
        .args(["list", "--status", "draft", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(&id).not());
}

#[test]
fn edit_nonexistent_id_exits_with_invalid_input() {
    let temp_dir = TempDir::new().unwrap();
    create_draft(&temp_dir, "Just to have a slot");

    postdeck(&temp_dir)
        .args(["edit", "not-a-real-id", "--title", "New"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("No such post"));
}

#[test]
fn delete_removes_and_second_delete_fails() {
    let temp_dir = TempDir::new().unwrap();
    let id = create_draft(&temp_dir, "Short lived");

    postdeck(&temp_dir).args(["delete", id.as_str()]).assert().success();

    postdeck(&temp_dir)
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(&id).not());

    postdeck(&temp_dir)
        .args(["delete", id.as_str()])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn dashboard_json_has_all_stat_fields_and_partitions() {
    let temp_dir = TempDir::new().unwrap();
    create_draft(&temp_dir, "One more");

    let output = postdeck(&temp_dir)
        .args(["dashboard", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let total = stats["totalPosts"].as_u64().unwrap();
    let published = stats["publishedPosts"].as_u64().unwrap();
    let scheduled = stats["scheduledPosts"].as_u64().unwrap();
    let drafts = stats["draftPosts"].as_u64().unwrap();
    assert!(stats["thisMonthPosts"].is_u64());

    assert_eq!(total, 16); // 15 seeded + 1 created
    assert_eq!(published + scheduled + drafts, total);
}

#[test]
fn invalid_format_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    postdeck(&temp_dir)
        .args(["dashboard", "--format", "xml"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Invalid format"));
}

#[test]
fn bad_schedule_date_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    postdeck(&temp_dir)
        .args([
            "create",
            "--title",
            "T",
            "--content",
            "C",
            "--network",
            "twitter",
            "--schedule",
            "next tuesday",
        ])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Could not parse date"));
}

#[test]
fn corrupt_slot_reports_exit_code_two() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("posts.json"), "not a collection").unwrap();

    postdeck(&temp_dir)
        .args(["list"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("not a valid post collection"));
}
