use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Creates an empty scratch home directory owned by one test, so a
/// user's own config file cannot change the output and tests that write
/// a config do not see each other's.
fn scratch_home(name: &str) -> PathBuf {
    let home = Path::new(env!("CARGO_TARGET_TMPDIR")).join("homes").join(name);
    let _ = fs::remove_dir_all(&home);
    fs::create_dir_all(&home).expect("failed to create scratch home");
    home
}

fn rectops_in(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rectops"));
    cmd.env("HOME", home);
    cmd
}

fn rectops(name: &str) -> Command {
    rectops_in(&scratch_home(name))
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = rectops("help_exits_successfully");
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute rectops");

    // Assert
    assert!(output.status.success());
    assert!(stdout(&output).contains("integer rectangles"));
}

#[test]
fn version_exits_successfully() {
    let output = rectops("version_exits_successfully")
        .arg("--version")
        .output()
        .expect("failed to execute rectops");

    assert!(output.status.success());
    assert!(stdout(&output).contains("rectops"));
}

#[test]
fn intersect_prints_crossing_points() {
    // Arrange
    let mut cmd = rectops("intersect_prints_crossing_points");
    cmd.args(["intersect", "6,15", "11,10", "9,18", "14,13"]);

    // Act
    let output = cmd.output().expect("failed to execute rectops");

    // Assert
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "point intersections: (9, 15), (11, 13)\n"
    );
}

#[test]
fn intersect_json_lists_kind_and_points() {
    let output = rectops("intersect_json_lists_kind_and_points")
        .args(["intersect", "6,15", "11,10", "9,18", "14,13", "--json"])
        .output()
        .expect("failed to execute rectops");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["kind"], "point_intersections");
    assert_eq!(value["points"][0], serde_json::json!({ "x": 9, "y": 15 }));
    assert_eq!(value["points"][1], serde_json::json!({ "x": 11, "y": 13 }));
}

#[test]
fn contains_reports_strict_containment() {
    let inside = rectops("contains_reports_strict_containment")
        .args(["contains", "5,9", "10,2", "3,11", "15,1"])
        .output()
        .expect("failed to execute rectops");
    let outside = rectops("contains_reports_strict_containment-2")
        .args(["contains", "3,11", "15,1", "5,9", "10,2"])
        .output()
        .expect("failed to execute rectops");

    assert_eq!(
        stdout(&inside),
        "First rectangle is fully contained within the second\n"
    );
    assert_eq!(
        stdout(&outside),
        "First rectangle is not fully contained within the second\n"
    );
}

#[test]
fn adjacency_json_lists_segments() {
    let output = rectops("adjacency_json_lists_segments")
        .args(["adjacency", "7,16", "13,12", "13,16", "17,12", "--json"])
        .output()
        .expect("failed to execute rectops");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "kind": "proper",
            "axis": "X",
            "start": { "x": 13, "y": 12 },
            "end": { "x": 13, "y": 16 },
        }])
    );
}

#[test]
fn adjacency_without_shared_border_says_so() {
    let output = rectops("adjacency_without_shared_border_says_so")
        .args(["adjacency", "6,15", "11,10", "1,21", "5,18"])
        .output()
        .expect("failed to execute rectops");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "No adjacencies found.\n");
}

#[test]
fn invalid_rectangle_exits_with_error() {
    let output = rectops("invalid_rectangle_exits_with_error")
        .args(["intersect", "20,0", "0,10", "9,18", "14,13"])
        .output()
        .expect("failed to execute rectops");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("first rectangle"));
    assert!(stderr.contains("invalid rectangle dimensions"));
}

#[test]
fn negative_coordinate_is_rejected() {
    let output = rectops("negative_coordinate_is_rejected")
        .args(["contains", "-1,5", "5,0", "3,11", "15,1"])
        .output()
        .expect("failed to execute rectops");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn malformed_point_is_a_usage_error() {
    let output = rectops("malformed_point_is_a_usage_error")
        .args(["intersect", "6;15", "11,10", "9,18", "14,13"])
        .output()
        .expect("failed to execute rectops");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid point"));
}

#[test]
fn menu_reads_choice_and_corners_from_stdin() {
    // Arrange
    let mut child = rectops("menu_reads_choice_and_corners_from_stdin")
        .arg("menu")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to execute rectops");

    // Act
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(b"3\n4\n13\n11\n6\n4\n13\n11\n6\n")
        .expect("failed to write stdin");
    let output = child.wait_with_output().expect("failed to wait on rectops");

    // Assert
    assert!(output.status.success());
    let out = stdout(&output);
    assert_eq!(out.matches("proper adjacency").count(), 4);
}

// ── Configuration ───────────────────────────────────────────────

#[test]
fn init_creates_config_once() {
    // Arrange
    let home = scratch_home("init_creates_config_once");
    let path = home.join(".config").join("rectops").join("config.toml");

    // Act
    let first = rectops_in(&home).arg("init").output().expect("failed to execute rectops");
    let written = fs::read_to_string(&path).expect("config file was not written");
    let second = rectops_in(&home).arg("init").output().expect("failed to execute rectops");

    // Assert
    assert!(first.status.success());
    assert!(stdout(&first).starts_with("Created "));
    assert!(second.status.success());
    assert!(stdout(&second).starts_with("Already exists: "));
    assert_eq!(fs::read_to_string(&path).unwrap(), written);
    assert!(written.contains("[output]"));
    assert!(written.contains("[logging]"));
}

#[test]
fn generated_config_loads_without_warnings() {
    // Arrange
    let home = scratch_home("generated_config_loads_without_warnings");
    let init = rectops_in(&home).arg("init").output().expect("failed to execute rectops");
    assert!(init.status.success());

    // Act
    let output = rectops_in(&home)
        .args(["contains", "5,9", "10,2", "3,11", "15,1"])
        .output()
        .expect("failed to execute rectops");

    // Assert
    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        stdout(&output),
        "First rectangle is fully contained within the second\n"
    );
}

#[test]
fn json_output_format_comes_from_config() {
    // Arrange
    let home = scratch_home("json_output_format_comes_from_config");
    let dir = home.join(".config").join("rectops");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[output]\nformat = \"json\"\n").unwrap();

    // Act
    let output = rectops_in(&home)
        .args(["contains", "5,9", "10,2", "3,11", "15,1"])
        .output()
        .expect("failed to execute rectops");

    // Assert
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value, serde_json::json!({ "contained": true }));
}

#[test]
fn malformed_config_warns_and_falls_back_to_text() {
    // Arrange
    let home = scratch_home("malformed_config_warns_and_falls_back_to_text");
    let dir = home.join(".config").join("rectops");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[output]\nformat = \"yaml\"\n").unwrap();

    // Act
    let output = rectops_in(&home)
        .args(["contains", "3,11", "15,1", "5,9", "10,2"])
        .output()
        .expect("failed to execute rectops");

    // Assert
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Warning: "));
    assert_eq!(
        stdout(&output),
        "First rectangle is not fully contained within the second\n"
    );
}
