//! Tests for the `voiceover-gen` binary.
//!
//! Most runs need no network access. The generation runs point
//! `VOICEOVER_ENDPOINT` at a wiremock server standing in for Google Translate.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENV_VARS: &[&str] = &[
    "VOICEOVER_LANG",
    "VOICEOVER_OUTPUT_DIR",
    "VOICEOVER_PROVIDER",
    "VOICEOVER_SLOW",
    "VOICEOVER_TLD",
    "VOICEOVER_ENDPOINT",
    "VOICEOVER_REQUEST_TIMEOUT_SECS",
    "VOICEOVER_MANIFEST",
    "OPENAI_API_KEY",
];

const BATCHEXECUTE_PATH: &str = "/_/TranslateWebserverUi/data/batchexecute";

/// batchexecute response whose audio payload decodes to `ID3`
const AUDIO_BODY: &str = r#")]}'

[["wrb.fr","jQ1olc","[\"SUQz\"]",null,null,null,"generic"]]
"#;

/// Binary invocation in `dir` with a clean voiceover environment.
fn command_in(dir: &Path, args: &[&str]) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_voiceover-gen"));
    command.current_dir(dir).args(args);
    for var in ENV_VARS {
        command.env_remove(var);
    }
    command
}

fn run_in(dir: &TempDir, args: &[&str]) -> Output {
    command_in(dir.path(), args).output().expect("binary runs")
}

/// Run the binary against `server` without blocking the test runtime.
async fn run_against(server: &MockServer, dir: &TempDir, args: &[&str]) -> Output {
    let mut command = command_in(dir.path(), args);
    command.env(
        "VOICEOVER_ENDPOINT",
        format!("{}{BATCHEXECUTE_PATH}", server.uri()),
    );
    tokio::task::spawn_blocking(move || command.output().expect("binary runs"))
        .await
        .unwrap()
}

fn files_in(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_dry_run_lists_default_scene_files() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(&temp_dir, &["--dry-run", "-o", "audio"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("living_room_voiceover.mp3"));
    assert!(lines[1].ends_with("kitchen_voiceover.mp3"));
    assert!(lines[2].ends_with("master_bedroom_voiceover.mp3"));

    // Nothing is written on a dry run
    assert!(!temp_dir.path().join("audio").exists());
}

#[test]
fn test_dry_run_uses_scenes_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("voiceover.yaml"),
        "scenes:\n  - id: garage\n    narration: \"A two-car garage.\"\n",
    )
    .unwrap();

    let output = run_in(&temp_dir, &["-c", "voiceover.yaml", "--dry-run"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("garage_voiceover.mp3"));
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("voiceover.yaml"),
        "scenes:\n  - id: \"../escape\"\n    narration: \"nope\"\n",
    )
    .unwrap();

    let output = run_in(&temp_dir, &["-c", "voiceover.yaml", "--dry-run"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("../escape"), "{stderr}");
}

#[test]
fn test_unknown_provider_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(&temp_dir, &["-p", "festival", "--dry-run"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("festival"));
}

#[test]
fn test_openai_without_key_fails_before_writing() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(&temp_dir, &["-p", "openai", "-o", "out"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    // Provider setup fails before the output directory is created
    assert!(!temp_dir.path().join("out").exists());
}

#[tokio::test]
async fn test_generation_writes_files_and_manifest() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(BATCHEXECUTE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(AUDIO_BODY))
        .mount(&server)
        .await;
    let temp_dir = TempDir::new().unwrap();

    let args = ["-o", "out", "--manifest", "voiceovers.json"];
    let output = run_against(&server, &temp_dir, &args).await;

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec![
            "Voiceover saved: living_room_voiceover.mp3",
            "Voiceover saved: kitchen_voiceover.mp3",
            "Voiceover saved: master_bedroom_voiceover.mp3",
        ]
    );

    let out_dir = temp_dir.path().join("out");
    let expected: BTreeSet<String> = [
        "living_room_voiceover.mp3",
        "kitchen_voiceover.mp3",
        "master_bedroom_voiceover.mp3",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    assert_eq!(files_in(&out_dir), expected);
    for file in &expected {
        assert_eq!(fs::read(out_dir.join(file)).unwrap(), b"ID3");
    }

    let manifest = fs::read_to_string(temp_dir.path().join("voiceovers.json")).unwrap();
    let manifest: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(
        manifest,
        serde_json::json!({
            "living_room": "living_room_voiceover.mp3",
            "kitchen": "kitchen_voiceover.mp3",
            "master_bedroom": "master_bedroom_voiceover.mp3",
        })
    );
}

#[tokio::test]
async fn test_generation_stops_at_failed_scene() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(BATCHEXECUTE_PATH))
        .and(body_string_contains("kitchen"))
        .respond_with(ResponseTemplate::new(500))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(BATCHEXECUTE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(AUDIO_BODY))
        .mount(&server)
        .await;
    let temp_dir = TempDir::new().unwrap();

    let args = ["-o", "out", "--manifest", "voiceovers.json"];
    let output = run_against(&server, &temp_dir, &args).await;

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec!["Voiceover saved: living_room_voiceover.mp3"]
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("kitchen"), "{stderr}");

    let out_dir = temp_dir.path().join("out");
    let expected: BTreeSet<String> = ["living_room_voiceover.mp3".to_string()].into();
    assert_eq!(files_in(&out_dir), expected);
    assert!(!temp_dir.path().join("voiceovers.json").exists());

    // master_bedroom is never requested
    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| {
        let body = String::from_utf8_lossy(&r.body);
        !body.contains("bedroom")
    }));
}

#[test]
fn test_providers_subcommand() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(&temp_dir, &["providers"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("google-translate\thttps://translate.google.com/"));
    assert!(stdout.contains("openai\thttps://api.openai.com/v1/audio/speech"));
}

#[test]
fn test_languages_subcommand() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(&temp_dir, &["languages"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.lines().any(|line| line == "en\tEnglish"));
}
