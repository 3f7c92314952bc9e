//! Phrase bank: categories -> prompts -> accepted answers.
//!
//! Built once at startup from the seeds plus optional config entries and
//! read-only afterwards. Sessions share it through an `Arc`.

use std::collections::HashMap;

use tracing::{error, info, instrument};

use crate::config::QuizConfig;
use crate::domain::{Category, FormalityMode, PromptEntry};
use crate::error::QuizError;
use crate::formality::filter_answers;
use crate::matcher::{match_answer_with_threshold, MatchResult};
use crate::seeds::seed_phrase_bank;

#[derive(Clone, Debug, Default)]
pub struct PhraseBank {
  by_category: HashMap<Category, Vec<PromptEntry>>,
}

/// A prompt whose answers leave nothing for one of the register filters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormalityGap {
  pub category: Category,
  pub prompt: String,
  pub mode: FormalityMode,
}

impl PhraseBank {
  /// Only the built-in prompts.
  pub fn seeded() -> Self {
    Self::from_entries(seed_phrase_bank())
  }

  pub fn from_entries(entries: impl IntoIterator<Item = (Category, Vec<PromptEntry>)>) -> Self {
    let mut bank = Self::default();
    for (category, prompts) in entries {
      for p in prompts {
        bank.upsert(category, p);
      }
    }
    bank
  }

  /// Built-in prompts overlaid with the config bank, if any.
  #[instrument(level = "info", skip_all)]
  pub fn from_config(cfg: Option<&QuizConfig>) -> Self {
    let mut bank = Self::seeded();

    if let Some(cfg) = cfg {
      for pc in &cfg.prompts {
        if pc.answers.iter().all(|a| a.trim().is_empty()) {
          error!(target: "sentence_trainer", category = %pc.category, prompt = %pc.prompt, "Skipping bank item: no answers.");
          continue;
        }
        let answers = pc.answers.iter().filter(|a| !a.trim().is_empty()).cloned().collect();
        bank.upsert(pc.category, PromptEntry { prompt: pc.prompt.clone(), answers });
      }
    }

    for category in Category::ALL {
      info!(target: "sentence_trainer", %category, prompts = bank.prompts(category).len(), "Startup phrase bank inventory");
    }
    bank
  }

  /// Insert, or replace the answers of an existing prompt with the same text.
  fn upsert(&mut self, category: Category, entry: PromptEntry) {
    let prompts = self.by_category.entry(category).or_default();
    match prompts.iter_mut().find(|p| p.prompt == entry.prompt) {
      Some(existing) => existing.answers = entry.answers,
      None => prompts.push(entry),
    }
  }

  pub fn prompts(&self, category: Category) -> &[PromptEntry] {
    self.by_category.get(&category).map(Vec::as_slice).unwrap_or(&[])
  }

  pub fn entry(&self, category: Category, prompt: &str) -> Option<&PromptEntry> {
    self.prompts(category).iter().find(|p| p.prompt == prompt)
  }

  /// One-off grading of `answer` for a prompt, outside of any session.
  ///
  /// # Errors
  ///
  /// `UnknownPrompt` if the prompt is not in the category, `EmptyInput` for a
  /// blank answer, `NoCandidates` if the register filter leaves nothing.
  pub fn grade(
    &self,
    category: Category,
    prompt: &str,
    mode: FormalityMode,
    answer: &str,
    threshold: f64,
  ) -> Result<MatchResult, QuizError> {
    let entry = self
      .entry(category, prompt.trim())
      .ok_or_else(|| QuizError::UnknownPrompt { category, prompt: prompt.trim().to_string() })?;
    if answer.trim().is_empty() {
      return Err(QuizError::EmptyInput);
    }
    let mode = if category.has_formality() { mode } else { FormalityMode::Either };
    grade_entry(entry, mode, answer, threshold)
  }

  /// Prompts in formality-bearing categories where the Informal or Formal filter
  /// comes back empty. Checking those prompts in that mode fails with
  /// `QuizError::NoCandidates`.
  pub fn formality_gaps(&self) -> Vec<FormalityGap> {
    let mut gaps = Vec::new();
    for category in Category::ALL.into_iter().filter(|c| c.has_formality()) {
      for entry in self.prompts(category) {
        for mode in [FormalityMode::Informal, FormalityMode::Formal] {
          if filter_answers(&entry.answers, mode).is_empty() {
            gaps.push(FormalityGap { category, prompt: entry.prompt.clone(), mode });
          }
        }
      }
    }
    gaps
  }
}

/// Filter `entry`'s answers by `mode` and match `answer` against what is left.
/// `mode` is applied as given; callers decide whether the category uses it.
pub fn grade_entry(entry: &PromptEntry, mode: FormalityMode, answer: &str, threshold: f64) -> Result<MatchResult, QuizError> {
  let candidates = filter_answers(&entry.answers, mode);
  match_answer_with_threshold(answer, &candidates, threshold).map_err(|e| match e {
    QuizError::NoCandidates { .. } => {
      error!(target: "sentence_trainer", prompt = %entry.prompt, %mode, "No accepted answers after formality filter");
      QuizError::NoCandidates { prompt: entry.prompt.clone() }
    }
    other => other,
  })
}
