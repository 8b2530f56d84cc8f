use std::{
    fs,
    io::Write,
    path::PathBuf,
    process::{Command, Stdio},
};

use chrono::{DateTime, Utc};
use firedash::{
    cli::{actions, config::DashboardConfig},
    protocol::status::StatusCategory,
};

const INCIDENTS: &str = r#"[
    {
        "dispatch": {
            "id": 100,
            "type": "HOUSE FIRE",
            "address": "5 ELM ST",
            "unit_codes": ["E1", "A16"],
            "incident_type_code": "FHOU",
            "status_code": "open",
            "created_at": "2026-10-16T12:00:00Z"
        },
        "unit_dispatch": {
            "id": 100,
            "call_notes": "12:20:00: A16, ON SCENE\n12:10:00: E1, ENROUTE"
        }
    },
    {
        "dispatch": {
            "id": 200,
            "type": "FALL",
            "address": "9 OAK AVE",
            "unit_codes": ["M3"],
            "incident_type_code": "FALLS",
            "status_code": "closed",
            "created_at": "2026-10-16T12:50:00Z"
        }
    }
]"#;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("firedash-{name}-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-10-16T13:05:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn test_board_summaries() {
    let store = actions::load_incidents(INCIDENTS).unwrap();
    let config = DashboardConfig::default();
    let rules = config.load_rules().unwrap();
    let summaries = actions::summarize(&store, &config.roster, &rules, now());

    let ids: Vec<_> = summaries.iter().map(|s| s.incident_id).collect();
    assert_eq!(ids, vec![200, 100]);

    let fire = &summaries[1];
    assert!(fire.open);
    assert!(fire.involves_own_unit);
    assert_eq!(fire.elapsed.as_deref(), Some("1h 5m ago"));
    assert_eq!(fire.on_scene, vec!["A16".to_string()]);
    assert_eq!(
        fire.badges[0].status.as_ref().map(|s| s.status),
        Some(StatusCategory::Enroute)
    );

    let fall = &summaries[0];
    assert!(!fall.open);
    assert_eq!(fall.badges[0].status, None);

    let text = actions::render_board(&summaries, false).unwrap();
    assert!(text.contains("#100 [fire] HOUSE FIRE @ 5 ELM ST (1h 5m ago) *own*"));
    assert!(text.contains("A16*"));
    assert!(text.contains("#200 [medical] FALL @ 9 OAK AVE (15m ago) closed"));
}

#[test]
fn test_load_incidents_rejects_garbage() {
    assert!(actions::load_incidents("{not json").is_err());
}

#[test]
fn test_config_with_custom_rules_file() {
    let dir = scratch_dir("rules");
    fs::write(
        dir.join("rules.toml"),
        r#"
        version = 2
        fallback = "enroute"

        [[rules]]
        category = "clear"
        patterns = ["back in quarters"]
        "#,
    )
    .unwrap();
    let config_path = dir.join("firedash.toml");
    fs::write(
        &config_path,
        r#"
        [roster]
        agency = "Station 3"
        own_units = ["E3"]

        [classifier]
        rules_file = "rules.toml"
        "#,
    )
    .unwrap();

    let config = DashboardConfig::from_file(&config_path).unwrap();
    let rules = config.load_rules().unwrap();
    assert_eq!(rules.version(), 2);

    let result = actions::classify(
        &rules,
        &config.roster,
        "e3",
        "12:00:00: E3, BACK IN QUARTERS",
        None,
    );
    assert!(result.own);
    assert_eq!(result.status.unwrap().status, StatusCategory::Clear);

    let listing = actions::render_rules(&rules, false).unwrap();
    assert!(listing.starts_with("rule table v2"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_config_with_broken_rules_file() {
    let dir = scratch_dir("broken");
    fs::write(dir.join("rules.toml"), "[[rules]]\ncategory = \"nope\"\npatterns = [\"x\"]").unwrap();
    let config_path = dir.join("firedash.toml");
    fs::write(&config_path, "[classifier]\nrules_file = \"rules.toml\"").unwrap();

    let config = DashboardConfig::from_file(&config_path).unwrap();
    assert!(config.load_rules().is_err());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_firedash"))
        .arg("--help")
        .output()
        .expect("Failed to execute firedash binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: firedash"));
}

#[test]
fn test_cli_classify_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_firedash"))
        .args(["classify", "--unit", "E1", "--json"])
        .env_remove("FIREDASH_CONFIG")
        .env_remove("FIREDASH_LOG_FILE")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to execute firedash binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(b"12:35:00: E1, TRANSPORTING INDIVIDUAL\n12:34:00: E1, ON SCENE\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["unit"], "E1");
    assert_eq!(value["status"]["status"], "transporting");
    assert_eq!(value["status"]["label"], "Transport");
}

#[test]
fn test_cli_reports_missing_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_firedash"))
        .args(["classify", "--unit", "E1", "--file", "/nonexistent/notes.txt"])
        .env_remove("FIREDASH_CONFIG")
        .env_remove("FIREDASH_LOG_FILE")
        .output()
        .expect("Failed to execute firedash binary");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read"));
}
