//! Loading trainer configuration (session settings + optional extra prompts) from TOML.
//!
//! Example:
//!
//! ```toml
//! [settings]
//! session_size = 5
//! similarity_threshold = 0.9
//!
//! [[prompts]]
//! category = "w_question"
//! prompt = "Translate: How old are you?"
//! answers = ["Wie alt bist du?", "Wie alt sind Sie?"]
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::Category;
use crate::error::QuizError;
use crate::matcher::DEFAULT_SIMILARITY_THRESHOLD;

pub const DEFAULT_SESSION_SIZE: usize = 5;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct QuizConfig {
  #[serde(default)]
  pub settings: Settings,
  #[serde(default)]
  pub prompts: Vec<PromptCfg>,
}

/// Prompt entry accepted in TOML. Replaces a built-in prompt with the same text.
#[derive(Clone, Debug, Deserialize)]
pub struct PromptCfg {
  pub category: Category,
  pub prompt: String,
  #[serde(default)]
  pub answers: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
  /// Upper bound on prompts drawn per practice run.
  pub session_size: usize,
  pub similarity_threshold: f64,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      session_size: DEFAULT_SESSION_SIZE,
      similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
    }
  }
}

impl QuizConfig {
  /// Parse a config document. `origin` names it in errors and logs.
  ///
  /// # Errors
  ///
  /// `QuizError::Toml` for malformed TOML, `QuizError::InvalidThreshold` when
  /// `similarity_threshold` is not a ratio in `0.0..=1.0`.
  pub fn from_toml_str(s: &str, origin: &str) -> Result<Self, QuizError> {
    let cfg = toml::from_str::<QuizConfig>(s).map_err(|source| QuizError::Toml { path: origin.to_string(), source })?;
    let threshold = cfg.settings.similarity_threshold;
    if !(0.0..=1.0).contains(&threshold) {
      error!(target: "sentence_trainer", path = %origin, threshold, "similarity_threshold must be within 0.0..=1.0");
      return Err(QuizError::InvalidThreshold { path: origin.to_string(), value: threshold });
    }
    Ok(cfg)
  }

  /// Read and parse a config file. Failures are returned to the caller.
  pub fn from_path(path: &Path) -> Result<Self, QuizError> {
    let shown = path.display().to_string();
    let s = std::fs::read_to_string(path).map_err(|source| QuizError::Io { path: shown.clone(), source })?;
    let cfg = Self::from_toml_str(&s, &shown)?;
    info!(target: "sentence_trainer", path = %shown, prompts = cfg.prompts.len(), "Loaded quiz config (TOML)");
    Ok(cfg)
  }
}

/// Attempt to load `QuizConfig` from QUIZ_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_quiz_config_from_env() -> Option<QuizConfig> {
  let path = std::env::var("QUIZ_CONFIG_PATH").ok()?;
  match QuizConfig::from_path(Path::new(&path)) {
    Ok(cfg) => Some(cfg),
    Err(e) => {
      error!(target: "sentence_trainer", %path, error = %e, "Ignoring unusable quiz config");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_file_uses_defaults() {
    let cfg = QuizConfig::from_toml_str("", "inline").unwrap();
    assert_eq!(cfg.settings, Settings::default());
    assert_eq!(cfg.settings.session_size, 5);
    assert!(cfg.prompts.is_empty());
  }

  #[test]
  fn parses_settings_and_prompts() {
    let cfg = QuizConfig::from_toml_str(
      r#"
        [settings]
        session_size = 3

        [[prompts]]
        category = "w_question"
        prompt = "Translate: How old are you?"
        answers = ["Wie alt bist du?", "Wie alt sind Sie?"]
      "#,
      "inline",
    )
    .unwrap();
    assert_eq!(cfg.settings.session_size, 3);
    assert_eq!(cfg.settings.similarity_threshold, DEFAULT_SIMILARITY_THRESHOLD);
    assert_eq!(cfg.prompts.len(), 1);
    assert_eq!(cfg.prompts[0].category, Category::WQuestion);
    assert_eq!(cfg.prompts[0].answers.len(), 2);
  }

  #[test]
  fn unknown_category_is_a_parse_error() {
    let err = QuizConfig::from_toml_str("[[prompts]]\ncategory = \"poetry\"\nprompt = \"x\"\n", "inline").unwrap_err();
    assert!(matches!(err, QuizError::Toml { .. }));
  }

  #[test]
  fn threshold_outside_unit_range_is_rejected() {
    for bad in ["1.5", "-0.1", "nan", "inf"] {
      let err = QuizConfig::from_toml_str(&format!("[settings]\nsimilarity_threshold = {bad}\n"), "inline").unwrap_err();
      assert!(matches!(err, QuizError::InvalidThreshold { .. }), "{bad} was accepted");
    }
    for ok in ["0.0", "0.75", "1.0"] {
      let cfg = QuizConfig::from_toml_str(&format!("[settings]\nsimilarity_threshold = {ok}\n"), "inline").unwrap();
      assert!((0.0..=1.0).contains(&cfg.settings.similarity_threshold));
    }
  }

  #[test]
  fn missing_file_is_an_io_error() {
    let err = QuizConfig::from_path(Path::new("/definitely/not/here.toml")).unwrap_err();
    assert!(matches!(err, QuizError::Io { .. }));
  }
}
