#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const EXPORT: &str = r#"{
  "result": [
    {
      "_id": "p-other",
      "slug": {"current": "side-project"},
      "projectName": "Side Project",
      "tags": null
    },
    {
      "_id": "p-jio",
      "slug": {"current": "jiopay"},
      "projectName": "Jiopay",
      "status": "Live",
      "tags": ["Payments"]
    },
    {
      "_id": "p-mito",
      "slug": {"current": "mito-health"},
      "projectName": "Mito Health",
      "projectSubtitle": "Health tracking app",
      "tags": ["iOS", "UX"],
      "overview": "Did research;Built prototype?Tested with 5 users?Iterated",
      "solutionImage": [{"asset": {"_ref": "image-abc123-800x600-png"}, "alt": "Home"}]
    }
  ]
}"#;

fn folio(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.current_dir(dir.path())
        .env("FOLIO_ROOT", dir.path())
        .env_remove("FOLIO_CONTENT_FILE")
        .env_remove("FOLIO_SANITY_PROJECT")
        .env_remove("FOLIO_SANITY_DATASET");
    cmd
}

fn site_with_export() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("projects.json"), EXPORT).unwrap();
    dir
}

// ---------------------------------------------------------------------------
// folio projects
// ---------------------------------------------------------------------------

#[test]
fn projects_table_is_in_display_order() {
    let dir = site_with_export();
    let output = folio(&dir)
        .args(["projects", "--content-file", "projects.json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let mito = stdout.find("mito-health").unwrap();
    let jio = stdout.find("jiopay").unwrap();
    let side = stdout.find("side-project").unwrap();
    assert!(mito < jio && jio < side);
    assert!(stdout.contains("NAME"));
}

#[test]
fn projects_json_lists_summaries() {
    let dir = site_with_export();
    let output = folio(&dir)
        .args(["projects", "--json", "--content-file", "projects.json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let slugs: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, ["mito-health", "jiopay", "side-project"]);
}

#[test]
fn projects_empty_export() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("empty.json"), "[]").unwrap();
    folio(&dir)
        .args(["projects", "--content-file", "empty.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found."));
}

#[test]
fn missing_content_file_fails() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["projects", "--content-file", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: failed to read"));
}

// ---------------------------------------------------------------------------
// folio project
// ---------------------------------------------------------------------------

#[test]
fn project_prints_narrative_and_images() {
    let dir = site_with_export();
    folio(&dir)
        .args(["project", "mito-health", "--content-file", "projects.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mito Health"))
        .stdout(predicate::str::contains("  - Did research"))
        .stdout(predicate::str::contains("    → Tested with 5 users"))
        .stdout(predicate::str::contains("Built prototype").not())
        .stdout(predicate::str::contains(
            "https://cdn.sanity.io/images/a8eevheq/production/abc123-800x600.png?q=95&fit=max",
        ));
}

#[test]
fn project_dataset_override_changes_image_urls() {
    let dir = site_with_export();
    folio(&dir)
        .args([
            "project",
            "mito-health",
            "--content-file",
            "projects.json",
            "--project-id",
            "zz99",
            "--dataset",
            "staging",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("/images/zz99/staging/"));
}

#[test]
fn project_json_is_full_record() {
    let dir = site_with_export();
    let output = folio(&dir)
        .args(["project", "jiopay", "-j", "--content-file", "projects.json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "Live");
    assert_eq!(json["tags"][0], "Payments");
}

#[test]
fn unknown_project_fails() {
    let dir = site_with_export();
    folio(&dir)
        .args(["project", "ghost", "--content-file", "projects.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("project not found: ghost"));
}

#[test]
fn invalid_slug_fails() {
    let dir = site_with_export();
    folio(&dir)
        .args(["project", "a/b", "--content-file", "projects.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid slug"));
}

// ---------------------------------------------------------------------------
// folio config
// ---------------------------------------------------------------------------

#[test]
fn config_show_uses_defaults_without_file() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("project_id: a8eevheq"))
        .stdout(predicate::str::contains("Mito Health"));
}

#[test]
fn config_init_writes_file_once() {
    let dir = TempDir::new().unwrap();
    folio(&dir).args(["config", "init"]).assert().success();
    assert!(dir.path().join("folio.yaml").exists());

    folio(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    folio(&dir)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_validate_default_is_clean() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config is valid"));
}

#[test]
fn config_validate_reports_errors() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("folio.yaml"),
        "images:\n  card_quality: 150\nwork:\n  page_size: 0\n",
    )
    .unwrap();
    folio(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[error] images.card_quality is 150"))
        .stdout(predicate::str::contains("[error] work.page_size"));
}

#[test]
fn config_override_via_env() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .env("FOLIO_SANITY_DATASET", "staging")
        .args(["config", "show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""dataset": "staging""#));
}
