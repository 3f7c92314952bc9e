//! Error type shared by the quiz core and the terminal driver.

use thiserror::Error;

use crate::domain::Category;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
  /// Blank submission. The caller should re-prompt; nothing was recorded.
  #[error("please type a sentence before submitting")]
  EmptyInput,

  /// The formality filter left nothing to compare against. This is a phrase
  /// bank authoring error, not something the learner can fix.
  #[error("no accepted answers left for prompt '{prompt}' after formality filtering")]
  NoCandidates { prompt: String },

  #[error("the current prompt has already been answered; advance first")]
  AlreadyAnswered,

  #[error("session is complete; restart to practice again")]
  SessionComplete,

  #[error("session is still in progress ({progress}/{total})")]
  NotComplete { progress: usize, total: usize },

  #[error("unknown category: {0}")]
  UnknownCategory(String),

  #[error("unknown formality mode: {0}")]
  UnknownFormality(String),

  #[error("no prompt '{prompt}' in category '{category}'")]
  UnknownPrompt { category: Category, prompt: String },

  #[error("category '{0}' has no prompts")]
  EmptyCategory(Category),

  #[error("failed to read config {path}: {source}")]
  Io {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid similarity_threshold {value} in config {path}: expected a value from 0.0 to 1.0")]
  InvalidThreshold { path: String, value: f64 },

  #[error("failed to parse config {path}: {source}")]
  Toml {
    path: String,
    #[source]
    source: toml::de::Error,
  },
}

impl QuizError {
  /// True for errors the learner can correct by typing something else.
  pub fn is_user_correctable(&self) -> bool {
    matches!(self, QuizError::EmptyInput | QuizError::AlreadyAnswered)
  }
}
