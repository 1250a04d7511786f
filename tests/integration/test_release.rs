//! Integration tests for release commands against a mock GitHub API

use crate::helpers::{TestDir, endpoint_args, run_grease, stderr, stdout};
use anyhow::Result;
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

fn args(server: &ServerGuard, rest: &[&str]) -> Vec<String> {
  let mut all = endpoint_args(server);
  all.extend(rest.iter().map(|s| s.to_string()));
  all
}

fn run(dir: &TestDir, args: &[String]) -> Result<std::process::Output> {
  let refs: Vec<&str> = args.iter().map(String::as_str).collect();
  run_grease(&dir.path, &refs)
}

/// Asset upload path; the asset name travels in the query string
fn assets_path(id: u64) -> Matcher {
  Matcher::Regex(format!("^/repos/acme/widgets/releases/{}/assets", id))
}

fn asset_name(name: &str) -> Matcher {
  Matcher::UrlEncoded("name".to_string(), name.to_string())
}

#[test]
fn test_create_draft_release() -> Result<()> {
  let dir = TestDir::new()?;
  let mut server = Server::new();

  let create = server
    .mock("POST", "/repos/acme/widgets/releases")
    .match_header("authorization", "Bearer token")
    .match_header("accept", "application/vnd.github.v3+json")
    .match_body(Matcher::Json(json!({
      "tag_name": "v1.0.0",
      "target_commitish": "main",
      "name": "v1.0.0",
      "draft": true,
      "prerelease": false,
    })))
    .with_status(201)
    .with_header("content-type", "application/json")
    .with_body(r#"{"id": 101, "tag_name": "v1.0.0"}"#)
    .expect(1)
    .create();

  let output = run(
    &dir,
    &args(
      &server,
      &[
        "create-release",
        "acme/widgets",
        "v1.0.0",
        "main",
        "--name",
        "v1.0.0",
        "--draft",
        "--github-token",
        "token",
      ],
    ),
  )?;

  assert!(output.status.success(), "stderr: {}", stderr(&output));
  assert!(stdout(&output).contains("Created release v1.0.0 (id: 101)"));
  create.assert();
  Ok(())
}

#[test]
fn test_upload_assets_lookup_failure_aborts() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write("dist/app-linux.tar.gz", b"linux")?;
  dir.write("dist/app-macos.tar.gz", b"macos")?;
  let mut server = Server::new();

  let lookup = server
    .mock("GET", "/repos/acme/widgets/releases/tags/v1.0.0")
    .with_status(404)
    .with_header("content-type", "application/json")
    .with_body(r#"{"message": "Not Found"}"#)
    .expect(1)
    .create();
  let uploads = server.mock("POST", Matcher::Any).expect(0).create();

  let output = run(
    &dir,
    &args(
      &server,
      &[
        "upload-assets",
        "acme/widgets",
        "v1.0.0",
        "dist/*.tar.gz",
        "--github-token",
        "token",
      ],
    ),
  )?;

  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("Not Found"));
  lookup.assert();
  uploads.assert();
  Ok(())
}

#[test]
fn test_update_release_upload_failure_is_not_fatal() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write("dist/a.zip", b"first")?;
  dir.write("dist/b.zip", b"second")?;
  let mut server = Server::new();

  let lookup = server
    .mock("GET", "/repos/acme/widgets/releases/tags/v1.0.0")
    .with_status(200)
    .with_body(r#"{"id": 7}"#)
    .expect(1)
    .create();
  let update = server
    .mock("PATCH", "/repos/acme/widgets/releases/7")
    .match_body(Matcher::Json(json!({
      "body": "Second pass",
      "draft": false,
      "prerelease": false,
    })))
    .with_status(200)
    .with_body(r#"{"id": 7}"#)
    .expect(1)
    .create();
  let rejected = server
    .mock("POST", assets_path(7))
    .match_query(asset_name("a.zip"))
    .match_body("first")
    .with_status(422)
    .with_body(r#"{"message": "Validation Failed"}"#)
    .expect(1)
    .create();
  let accepted = server
    .mock("POST", assets_path(7))
    .match_query(asset_name("b.zip"))
    .match_header("content-type", "application/octet-stream")
    .match_header("content-length", "6")
    .match_body("second")
    .with_status(201)
    .with_body(r#"{"id": 70}"#)
    .expect(1)
    .create();

  let output = run(
    &dir,
    &args(
      &server,
      &[
        "update-release",
        "acme/widgets",
        "v1.0.0",
        "--notes",
        "Second pass",
        "--assets",
        "dist/*.zip",
        "--github-token",
        "token",
      ],
    ),
  )?;
  let out = stdout(&output);

  assert!(output.status.success(), "stderr: {}", stderr(&output));
  assert!(out.contains("Error while uploading asset at a.zip"));
  assert!(out.contains("Validation Failed"));
  assert!(out.contains("Uploaded b.zip"));
  assert!(out.contains("Uploaded 1 of 2 assets"));

  lookup.assert();
  update.assert();
  rejected.assert();
  accepted.assert();
  Ok(())
}

/// Lines across stdout and stderr that mention `needle`
fn lines_naming(output: &std::process::Output, needle: &str) -> Vec<String> {
  stdout(output)
    .lines()
    .chain(stderr(output).lines())
    .filter(|l| l.contains(needle))
    .map(String::from)
    .collect()
}

#[test]
fn test_unopenable_asset_reported_once() -> Result<()> {
  let dir = TestDir::new()?;
  dir.mkdir("dist/a-directory")?;
  dir.write("dist/b-binary", b"bin")?;
  let mut server = Server::new();

  let create = server
    .mock("POST", "/repos/acme/widgets/releases")
    .with_status(201)
    .with_body(r#"{"id": 3}"#)
    .expect(1)
    .create();
  let upload = server
    .mock("POST", assets_path(3))
    .match_query(asset_name("b-binary"))
    .with_status(201)
    .with_body(r#"{"id": 30}"#)
    .expect(1)
    .create();

  let output = run(
    &dir,
    &args(
      &server,
      &[
        "create-release",
        "acme/widgets",
        "v1.0.0",
        "main",
        "--assets",
        "dist/*",
        "--github-token",
        "token",
      ],
    ),
  )?;

  assert!(output.status.success(), "stderr: {}", stderr(&output));
  assert_eq!(
    lines_naming(&output, "a-directory"),
    vec!["⚠️  Failed to open dist/a-directory. Skipping."]
  );
  create.assert();
  upload.assert();
  Ok(())
}

#[test]
fn test_unopenable_asset_reported_once_with_debug() -> Result<()> {
  let dir = TestDir::new()?;
  dir.mkdir("dist/a-directory")?;
  dir.write("dist/b-binary", b"bin")?;
  let mut server = Server::new();

  let _create = server
    .mock("POST", "/repos/acme/widgets/releases")
    .with_status(201)
    .with_body(r#"{"id": 3}"#)
    .create();
  let _upload = server
    .mock("POST", assets_path(3))
    .with_status(201)
    .with_body(r#"{"id": 30}"#)
    .create();

  let mut all = args(&server, &["-d"]);
  all.extend(
    [
      "create-release",
      "acme/widgets",
      "v1.0.0",
      "main",
      "--assets",
      "dist/*",
      "--github-token",
      "token",
    ]
    .iter()
    .map(|s| s.to_string()),
  );
  let output = run(&dir, &all)?;

  assert!(output.status.success(), "stderr: {}", stderr(&output));
  // The intent plan lists it; the skip is the only diagnostic
  assert_eq!(
    lines_naming(&output, "a-directory"),
    vec![
      "\tdist/a-directory as a-directory",
      "⚠️  Failed to open dist/a-directory. Skipping.",
    ]
  );
  Ok(())
}

#[test]
fn test_dry_run_never_contacts_github() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write("dist/app.tar.gz", b"app")?;
  let mut server = Server::new();

  let untouched: Vec<_> = ["GET", "POST", "PATCH"]
    .iter()
    .map(|method| server.mock(method, Matcher::Any).expect(0).create())
    .collect();

  for command in [
    vec!["create-release", "acme/widgets", "v1.0.0", "main", "--assets", "dist/*.tar.gz"],
    vec!["update-release", "acme/widgets", "v1.0.0", "--assets", "dist/*.tar.gz"],
    vec!["upload-assets", "acme/widgets", "v1.0.0", "dist/*.tar.gz"],
  ] {
    let mut all = args(&server, &["--dry-run"]);
    all.extend(command.iter().map(|s| s.to_string()));
    all.extend(["--github-token".to_string(), "token".to_string()]);

    let output = run(&dir, &all)?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Dry run specified. Exiting."));
  }

  for mock in &untouched {
    mock.assert();
  }
  Ok(())
}
