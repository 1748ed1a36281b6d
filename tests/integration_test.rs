use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

fn archstudio_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_archstudio"))
}

/// Initialize a workspace and log in, the precondition for every admin
/// command.
fn setup(dir: &Path) {
    let output = archstudio_cmd()
        .current_dir(dir)
        .args(["init"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = archstudio_cmd()
        .current_dir(dir)
        .args(["login", "admin"])
        .output()
        .unwrap();
    assert!(output.status.success());
}

/// Add a record with --json and return its generated id.
fn add_json(dir: &Path, args: &[&str]) -> String {
    let output = archstudio_cmd()
        .current_dir(dir)
        .args(args)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    parsed["id"].as_str().unwrap().to_string()
}

#[test]
fn test_init_creates_workspace_directory() {
    let tmp = TempDir::new().unwrap();

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["init"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(tmp.path().join(".archstudio").is_dir());
}

#[test]
fn test_init_twice_fails() {
    let tmp = TempDir::new().unwrap();

    archstudio_cmd()
        .current_dir(tmp.path())
        .args(["init"])
        .output()
        .unwrap();

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["init"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Already initialized"));
}

#[test]
fn test_list_without_init_fails() {
    let tmp = TempDir::new().unwrap();

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["list", "projects"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Not in an arch-studio workspace"));
}

#[test]
fn test_add_without_login_fails() {
    let tmp = TempDir::new().unwrap();

    archstudio_cmd()
        .current_dir(tmp.path())
        .args(["init"])
        .output()
        .unwrap();

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["add", "project", "Skyline Tower"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Not logged in"));
}

#[test]
fn test_logout_blocks_admin_commands() {
    let tmp = TempDir::new().unwrap();
    setup(tmp.path());

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["logout"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["dashboard"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Not logged in"));
}

#[test]
fn test_full_project_workflow() {
    let tmp = TempDir::new().unwrap();
    setup(tmp.path());

    // Add a project
    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args([
            "add",
            "project",
            "Skyline Tower",
            "--category=commercial",
            "--location=Riyadh",
            "--status=published",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Project saved successfully"));
    assert!(stdout.contains("Skyline Tower"));
    assert!(stdout.contains("Projects: 1"));

    // List projects
    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["list", "projects"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Manage Projects"));
    assert!(stdout.contains("Skyline Tower"));
    assert!(stdout.contains("Riyadh"));

    // Get by id prefix
    let id = add_json(tmp.path(), &["add", "project", "Desert Villa"]);
    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["get", "project", &id[..7]])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Desert Villa"));
    assert!(stdout.contains("residential"));

    // Update keeps the count at 2
    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args([
            "update",
            "project",
            &id[..7],
            "--title-en=Desert Villa II",
            "--status=draft",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Desert Villa II"));
    assert!(stdout.contains("Projects: 2"));

    // Delete drops it back to 1
    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["delete", "project", &id[..7], "--force"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Deleted successfully"));
    assert!(stdout.contains("Projects: 1"));
    assert!(!stdout.contains("Desert Villa"));
}

#[test]
fn test_update_preserves_id_and_position() {
    let tmp = TempDir::new().unwrap();
    setup(tmp.path());

    add_json(tmp.path(), &["add", "project", "First"]);
    let id = add_json(tmp.path(), &["add", "project", "Second"]);
    add_json(tmp.path(), &["add", "project", "Third"]);

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["update", "project", &id[..7], "--title-en=Second Updated", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(parsed["id"], id.as_str());

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["list", "projects", "--json"])
        .output()
        .unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    let titles: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["titleEn"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["First", "Second Updated", "Third"]);
}

#[test]
fn test_list_json_output() {
    let tmp = TempDir::new().unwrap();
    setup(tmp.path());

    add_json(
        tmp.path(),
        &["add", "service", "Architectural Design", "--icon=fas fa-pencil-ruler"],
    );

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["list", "services", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(parsed.is_array());
    assert_eq!(parsed.as_array().unwrap().len(), 1);
    assert_eq!(parsed[0]["titleEn"], "Architectural Design");
    assert_eq!(parsed[0]["icon"], "fas fa-pencil-ruler");
}

#[test]
fn test_dashboard_counts_all_collections() {
    let tmp = TempDir::new().unwrap();
    setup(tmp.path());

    add_json(tmp.path(), &["add", "project", "Tower"]);
    add_json(tmp.path(), &["add", "project", "Villa"]);
    add_json(tmp.path(), &["add", "article", "Topping out"]);
    add_json(tmp.path(), &["add", "testimonial", "Alice"]);

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["dashboard", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(parsed["projects"], 2);
    assert_eq!(parsed["articles"], 1);
    assert_eq!(parsed["services"], 0);
    assert_eq!(parsed["testimonials"], 1);
}

#[test]
fn test_article_content_from_stdin() {
    use std::io::Write;
    use std::process::Stdio;

    let tmp = TempDir::new().unwrap();
    setup(tmp.path());

    let mut child = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["add", "article", "Studio News", "--stdin", "--json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"<p>Ground broken on the new campus.</p>")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(parsed["contentEn"], "<p>Ground broken on the new campus.</p>");
    // Date defaults to creation date when omitted.
    assert!(parsed["date"].is_string());
}

#[test]
fn test_invalid_rating_rejected_before_write() {
    let tmp = TempDir::new().unwrap();
    setup(tmp.path());

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["add", "testimonial", "Alice", "--rating=6"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Validation failed"));
    assert!(stderr.contains("rating"));

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["dashboard", "--json"])
        .output()
        .unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(parsed["testimonials"], 0);
}

#[test]
fn test_unknown_category_rejected() {
    let tmp = TempDir::new().unwrap();
    setup(tmp.path());

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["add", "project", "Factory", "--category=industrial"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid category"));
}

#[test]
fn test_update_nonexistent_fails() {
    let tmp = TempDir::new().unwrap();
    setup(tmp.path());

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["update", "project", "ffffffff", "--title-en=Ghost"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No project found"));
}

#[test]
fn test_get_with_empty_id_fails() {
    let tmp = TempDir::new().unwrap();
    setup(tmp.path());

    add_json(tmp.path(), &["add", "project", "Tower"]);

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["get", "project", ""])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No project found"));
}

#[test]
fn test_delete_without_force_non_interactive_fails() {
    let tmp = TempDir::new().unwrap();
    setup(tmp.path());

    let id = add_json(tmp.path(), &["add", "project", "Keeper"]);

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["delete", "project", &id[..7]])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--force"));
    // No confirmation prompt is emitted when stdin is not a terminal.
    assert!(!stderr.contains("Are you sure"));

    // Still there
    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["list", "projects"])
        .output()
        .unwrap();
    assert!(String::from_utf8_lossy(&output.stdout).contains("Keeper"));
}

#[test]
fn test_corrupted_collection_reads_empty() {
    let tmp = TempDir::new().unwrap();
    setup(tmp.path());

    fs::write(tmp.path().join(".archstudio/archstudio_projects"), "{not json").unwrap();

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["list", "projects"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No projects found"));

    // A save recovers the key
    add_json(tmp.path(), &["add", "project", "Fresh start"]);
    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["list", "projects"])
        .output()
        .unwrap();
    assert!(String::from_utf8_lossy(&output.stdout).contains("Fresh start"));
}

#[test]
fn test_settings_set_is_full_overwrite() {
    let tmp = TempDir::new().unwrap();
    setup(tmp.path());

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["settings", "set", "--hero-title-en=X"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["settings", "set", "--contact-phone=123"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["settings", "show", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert!(parsed["hero"].is_null());
    assert_eq!(parsed["contact"]["phone"], "123");
}

#[test]
fn test_seo_set_and_show() {
    let tmp = TempDir::new().unwrap();
    setup(tmp.path());

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args([
            "seo",
            "set",
            "--title=Arch Studio",
            "--schema-type=ArchitectureFirm",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["seo", "show"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("title: Arch Studio"));
    assert!(stdout.contains("schemaType: ArchitectureFirm"));
}

#[test]
fn test_language_switch_changes_rendering() {
    let tmp = TempDir::new().unwrap();
    setup(tmp.path());

    add_json(
        tmp.path(),
        &["add", "project", "Skyline Tower", "--title-ar=برج الأفق"],
    );

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["lang"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("en"));

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["lang", "ar"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["list", "projects"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("إدارة المشاريع"));
    assert!(stdout.contains("برج الأفق"));
}

#[test]
fn test_arabic_rendering_falls_back_to_english() {
    let tmp = TempDir::new().unwrap();
    setup(tmp.path());

    add_json(tmp.path(), &["add", "testimonial", "Alice"]);

    archstudio_cmd()
        .current_dir(tmp.path())
        .args(["lang", "ar"])
        .output()
        .unwrap();

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["list", "testimonials"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    // No Arabic name stored, so the English one is shown instead of a blank row.
    assert!(stdout.contains("Alice"));
}

#[test]
fn test_add_and_list_all_record_kinds() {
    let tmp = TempDir::new().unwrap();
    setup(tmp.path());

    add_json(tmp.path(), &["add", "project", "Tower"]);
    add_json(tmp.path(), &["add", "article", "Award season"]);
    add_json(tmp.path(), &["add", "service", "Urban Planning"]);
    add_json(
        tmp.path(),
        &["add", "testimonial", "Bob", "--rating=4", "--position-en=Developer"],
    );

    for (kind, expected) in [
        ("projects", "Tower"),
        ("articles", "Award season"),
        ("services", "Urban Planning"),
        ("testimonials", "Bob"),
    ] {
        let output = archstudio_cmd()
            .current_dir(tmp.path())
            .args(["list", kind])
            .output()
            .unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains(expected), "{} listing missing {}", kind, expected);
    }

    let output = archstudio_cmd()
        .current_dir(tmp.path())
        .args(["list", "pages"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid record kind"));
}
