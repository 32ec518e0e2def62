use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

fn export_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const EXPORT: &str = r#"{
  "myData": {
    "activityData": {
      "rounds": [
        { "id": "r1", "timestamp": 1718000000000, "clubId": { "id": "c1" }, "strokes": 88 }
      ]
    },
    "clubData": { "playedClubs": [ { "clubId": "c1", "name": "Pine Hills" } ] }
  }
}"#;

#[test]
fn wrapped_json_output_is_schema_versioned() {
    let file = export_file(EXPORT);
    let output = Command::cargo_bin("golfwrap")
        .unwrap()
        .args(["wrapped", "--format", "json", "--year", "2024"])
        .arg(file.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(summary["schemaVersion"], "1");
    assert_eq!(summary["rounds"]["totalIncluded"], 1);
    assert_eq!(summary["strokes"]["average"], 88.0);
    assert_eq!(summary["courses"]["mostPlayed"]["name"], "Pine Hills");
}

#[test]
fn timeline_emits_sorted_events() {
    let file = export_file(EXPORT);
    let output = Command::cargo_bin("golfwrap")
        .unwrap()
        .args(["timeline", "--all"])
        .arg(file.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let events: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(events[0]["clubId"], "c1");
    assert_eq!(events[0]["clubName"], "Pine Hills");
}

#[test]
fn unreadable_archive_fails_with_message() {
    let file = export_file("this is not json");
    Command::cargo_bin("golfwrap")
        .unwrap()
        .arg("wrapped")
        .arg(file.path())
        .assert()
        .failure();
}
