use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

const ORG_DOC: &str = r#"
organization:
  name: acme
repositories:
  - name: infra
    visibility: private
    default_branch: main
    import_id: infra
  - name: docs
users:
  - name: alice
  - name: bob
    role: admin
teams:
  - name: Engineering
    members: [alice]
  - name: Backend
    parent: Engineering
    members:
      - alice
      - name: bob
        role: maintainer
    repositories:
      - name: infra
        permission: push
      - name: legacy
        permission: pull
"#;

fn write_doc(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("github.yaml");
    fs::write(&path, contents).expect("failed to write document");
    path
}

fn orgplan() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("orgplan"));
    cmd.env_remove("ORGPLAN_IMPORT")
        .env_remove("ORGPLAN_FILE")
        .env_remove("ORGPLAN_DATA_DIR")
        .env_remove("ORGPLAN_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn plan_reads_document_from_data_dir() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    write_doc(temp.path(), ORG_DOC);

    orgplan()
        .arg("plan")
        .arg("--data-dir")
        .arg(temp.path())
        .arg("--format")
        .arg("table")
        .assert()
        .success()
        .stdout(predicate::str::contains("infra-main"))
        .stdout(predicate::str::contains("acme-member-bob"))
        .stdout(predicate::str::contains("Backend-infra"));

    Ok(())
}

#[test]
fn plan_json_emits_resource_graph() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let path = write_doc(temp.path(), ORG_DOC);

    let assert = orgplan()
        .args(["plan", "--format", "json", "--file"])
        .arg(&path)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout)?;
    let resources = value["data"]["resources"].as_array().unwrap();

    // 2 repos, 1 branch default, 2 memberships, 2 teams, 3 team memberships, 1 grant
    assert_eq!(resources.len(), 11);
    assert_eq!(value["data"]["organization"], "acme");
    assert_eq!(value["meta"]["import_mode"], false);

    let grants: Vec<_> = resources
        .iter()
        .filter(|r| r["kind"] == "TeamRepository")
        .collect();
    assert_eq!(grants.len(), 1);
    assert_eq!(grants[0]["inputs"]["permission"], "push");

    Ok(())
}

#[test]
fn plan_warns_about_unmanaged_repository() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let path = write_doc(temp.path(), ORG_DOC);

    orgplan()
        .arg("plan")
        .arg("--file")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("legacy"));

    Ok(())
}

#[test]
fn import_env_attaches_import_ids() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let path = write_doc(temp.path(), ORG_DOC);

    let assert = orgplan()
        .args(["plan", "--format", "json", "--file"])
        .arg(&path)
        .env("ORGPLAN_IMPORT", "1")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(value["meta"]["import_mode"], true);

    let resources = value["data"]["resources"].as_array().unwrap();
    let repo = resources.iter().find(|r| r["name"] == "infra").unwrap();
    assert_eq!(repo["options"]["import_id"], "infra");
    let pointer = resources.iter().find(|r| r["name"] == "infra-main").unwrap();
    assert_eq!(pointer["options"]["import_id"], "main");

    Ok(())
}

#[test]
fn validate_prints_summary() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let path = write_doc(temp.path(), ORG_DOC);

    orgplan()
        .arg("validate")
        .arg("--file")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "2 repositories, 2 users, 2 teams, 1 team repository grants (1 skipped)",
        ));

    Ok(())
}

#[test]
fn duplicate_repository_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let path = write_doc(
        temp.path(),
        "organization:\n  name: acme\nrepositories:\n  - name: infra\n  - name: infra\n",
    );

    orgplan()
        .arg("validate")
        .arg("--file")
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Repository 'infra' is duplicated."));

    Ok(())
}

#[test]
fn forward_parent_reference_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let path = write_doc(
        temp.path(),
        "organization:\n  name: acme\nteams:\n  - name: Child\n    parent: Root\n    members: [alice]\n  - name: Root\n    members: [alice]\n",
    );

    orgplan()
        .arg("plan")
        .arg("--file")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Declare parents before children"));

    Ok(())
}

#[test]
fn missing_document_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    orgplan()
        .arg("plan")
        .arg("--data-dir")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("github.yaml"));

    Ok(())
}

#[test]
fn version_prints_package_version() {
    orgplan()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn import_env_false_keeps_import_mode_off() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let path = write_doc(temp.path(), ORG_DOC);

    let assert = orgplan()
        .args(["plan", "--format", "json", "--file"])
        .arg(&path)
        .env("ORGPLAN_IMPORT", "false")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(value["meta"]["import_mode"], false);

    Ok(())
}

#[test]
fn import_flag_enables_import_mode() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let path = write_doc(temp.path(), ORG_DOC);

    let assert = orgplan()
        .args(["plan", "--import", "--format", "json", "--file"])
        .arg(&path)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(value["meta"]["import_mode"], true);

    Ok(())
}

#[test]
fn plan_warns_when_document_declares_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let path = write_doc(temp.path(), "organization:\n  name: acme\n");

    orgplan()
        .arg("plan")
        .arg("--file")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("declares no resources"));

    Ok(())
}
