//! CLI integration tests using assert_cmd.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn trainer() -> Command {
  #[allow(deprecated)]
  let mut cmd = Command::cargo_bin("sentence-trainer").unwrap();
  cmd.env_remove("QUIZ_CONFIG_PATH").env_remove("LOG_FORMAT");
  cmd
}

/// Answer every prompt with `answer` and decline the restart.
fn run_input(answer: &str, prompts: usize) -> String {
  let mut s = String::new();
  for _ in 0..prompts {
    s.push_str(answer);
    s.push_str("\n\n");
  }
  s.push_str("n\n");
  s
}

#[test]
fn categories_lists_all_six() {
  trainer()
    .arg("categories")
    .assert()
    .success()
    .stdout(predicate::str::contains("Statement"))
    .stdout(predicate::str::contains("Connector Sentence"))
    .stdout(predicate::str::contains("Yes/No Question").and(predicate::str::contains("(du/Sie)")));
}

#[test]
fn categories_as_json() {
  let output = trainer().args(["--json", "categories"]).output().unwrap();
  assert!(output.status.success());
  let infos: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(infos.as_array().unwrap().len(), 6);
}

#[test]
fn check_exact_ignores_case() {
  trainer()
    .args([
      "check",
      "--category",
      "statement",
      "--prompt",
      "Translate: I am learning German.",
      "--answer",
      "ich lerne deutsch",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Perfect!"));
}

#[test]
fn check_mismatch_shows_closest_answer_and_extra_words() {
  trainer()
    .args([
      "check",
      "--category",
      "Statement",
      "--prompt",
      "Translate: I am learning German.",
      "--answer",
      "Ich lerne Deutsch gut",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Closest correct answer: Ich lerne Deutsch."))
    .stdout(predicate::str::contains("gut"));
}

#[test]
fn check_formal_question() {
  let output = trainer()
    .args([
      "--json",
      "check",
      "--category",
      "yes-no-question",
      "--formality",
      "formal",
      "--prompt",
      "Translate: Are you from Germany?",
      "--answer",
      "Kommen sie aus deutschland",
    ])
    .output()
    .unwrap();
  assert!(output.status.success());
  let fb: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(fb["type"], "feedback");
  assert_eq!(fb["verdict"], "exact");
  assert_eq!(fb["closest_answer"], "Kommen Sie aus Deutschland?");
}

#[test]
fn check_unknown_prompt_fails() {
  trainer()
    .args(["check", "--category", "statement", "--prompt", "Translate: Hello.", "--answer", "Hallo"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("no prompt"));
}

#[test]
fn unknown_category_is_rejected_by_the_parser() {
  trainer()
    .args(["practice", "--category", "poetry"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn practice_full_run_reports_score() {
  trainer()
    .args(["practice", "--category", "statement", "--seed", "7"])
    .write_stdin(run_input("Das ist falsch", 5))
    .assert()
    .success()
    .stdout(predicate::str::contains("Prompt 1 of 5"))
    .stdout(predicate::str::contains("Prompt 5 of 5"))
    .stdout(predicate::str::contains("Correct answers: 0 / 5"))
    .stdout(predicate::str::contains("Here are the ones you need to review:"));
}

#[test]
fn practice_reprompts_on_blank_answer() {
  let mut input = String::from("   \n");
  input.push_str(&run_input("Das ist falsch", 5));
  trainer()
    .args(["practice", "--category", "separable-verb", "--seed", "1"])
    .write_stdin(input)
    .assert()
    .success()
    .stdout(predicate::str::contains("please type a sentence before submitting"))
    .stdout(predicate::str::contains("Correct answers: 0 / 5"));
}

#[test]
fn practice_json_emits_events() {
  let output = trainer()
    .args(["--json", "practice", "--category", "w-question", "--formality", "informal", "--seed", "3"])
    .write_stdin(run_input("keine Ahnung", 5))
    .output()
    .unwrap();
  assert!(output.status.success());

  let events: Vec<serde_json::Value> = String::from_utf8(output.stdout)
    .unwrap()
    .lines()
    .map(|l| serde_json::from_str(l).unwrap())
    .collect();
  assert_eq!(events.iter().filter(|e| e["type"] == "prompt").count(), 5);
  assert_eq!(events.iter().filter(|e| e["type"] == "feedback").count(), 5);
  let report = events.last().unwrap();
  assert_eq!(report["type"], "report");
  assert_eq!(report["correct_count"], 0);
  assert_eq!(report["total"], 5);
  assert_eq!(report["wrong"].as_array().unwrap().len(), 5);
}

#[test]
fn config_file_sets_session_size() {
  let mut cfg = NamedTempFile::new().unwrap();
  writeln!(
    cfg,
    r#"
[settings]
session_size = 2

[[prompts]]
category = "statement"
prompt = "Translate: The sun is shining."
answers = ["Die Sonne scheint."]
"#
  )
  .unwrap();

  trainer()
    .arg("--config")
    .arg(cfg.path())
    .args(["practice", "--category", "statement", "--seed", "5"])
    .write_stdin(run_input("Das ist falsch", 2))
    .assert()
    .success()
    .stdout(predicate::str::contains("Prompt 2 of 2"))
    .stdout(predicate::str::contains("Correct answers: 0 / 2"));

  trainer()
    .arg("--config")
    .arg(cfg.path())
    .args(["check", "--category", "statement", "--prompt", "Translate: The sun is shining.", "--answer", "die sonne scheint"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Perfect!"));
}

#[test]
fn missing_config_file_is_an_error() {
  trainer()
    .args(["--config", "/no/such/quiz.toml", "categories"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed to read config"));
}

#[test]
fn out_of_range_threshold_is_rejected() {
  let mut cfg = NamedTempFile::new().unwrap();
  writeln!(cfg, "[settings]\nsimilarity_threshold = 1.5").unwrap();

  trainer()
    .arg("--config")
    .arg(cfg.path())
    .arg("categories")
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid similarity_threshold 1.5"));
}
