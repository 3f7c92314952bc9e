//! Quiz session controller.
//!
//! One `QuizSession` is one practice run over a random sample of prompts from a
//! single category. It is a small state machine:
//!
//! ```text
//!            submit (ok)             advance (last prompt)
//! InProgress ----------> answered -----------------------> Complete
//!     ^                     |                                  |
//!     +------ advance ------+                                  |
//!     +------------------------- restart ----------------------+
//! ```
//!
//! Changing the category resets the run from any state. All data lives in the
//! session value; nothing is global.

use std::fmt;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::bank::{grade_entry, PhraseBank};
use crate::config::Settings;
use crate::domain::{Category, FormalityMode, PromptEntry};
use crate::error::QuizError;
use crate::matcher::MatchResult;
use crate::protocol::{PromptView, SessionReport, WrongAnswer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
  InProgress,
  Complete,
}

pub struct QuizSession {
  id: Uuid,
  bank: Arc<PhraseBank>,
  settings: Settings,
  category: Category,
  formality: FormalityMode,
  prompts: Vec<PromptEntry>,
  progress: usize,
  input: String,
  correct: Vec<String>,
  wrong: Vec<WrongAnswer>,
  // Result for the current prompt; `Some` between submit and advance.
  answered: Option<MatchResult>,
  rng: StdRng,
}

impl QuizSession {
  /// Start a run with an entropy-seeded RNG.
  ///
  /// # Errors
  ///
  /// Returns `QuizError::EmptyCategory` if the bank has no prompts for `category`.
  pub fn new(bank: Arc<PhraseBank>, category: Category, settings: Settings) -> Result<Self, QuizError> {
    Self::with_rng(bank, category, settings, StdRng::from_entropy())
  }

  /// Start a run with a deterministic sample order.
  pub fn with_seed(
    bank: Arc<PhraseBank>,
    category: Category,
    settings: Settings,
    seed: u64,
  ) -> Result<Self, QuizError> {
    Self::with_rng(bank, category, settings, StdRng::seed_from_u64(seed))
  }

  pub fn with_rng(
    bank: Arc<PhraseBank>,
    category: Category,
    settings: Settings,
    rng: StdRng,
  ) -> Result<Self, QuizError> {
    if bank.prompts(category).is_empty() {
      return Err(QuizError::EmptyCategory(category));
    }
    let mut session = Self {
      id: Uuid::new_v4(),
      bank,
      settings,
      category,
      formality: FormalityMode::Either,
      prompts: Vec::new(),
      progress: 0,
      input: String::new(),
      correct: Vec::new(),
      wrong: Vec::new(),
      answered: None,
      rng,
    };
    session.reset();
    Ok(session)
  }

  pub fn id(&self) -> Uuid {
    self.id
  }

  pub fn category(&self) -> Category {
    self.category
  }

  /// Mode chosen by the learner, whether or not the category uses it.
  pub fn formality(&self) -> FormalityMode {
    self.formality
  }

  /// Mode actually applied to answers. Categories without a du/Sie
  /// distinction always grade against every accepted answer.
  pub fn effective_formality(&self) -> FormalityMode {
    if self.category.has_formality() {
      self.formality
    } else {
      FormalityMode::Either
    }
  }

  pub fn progress(&self) -> usize {
    self.progress
  }

  pub fn total(&self) -> usize {
    self.prompts.len()
  }

  #[must_use]
  pub fn status(&self) -> SessionStatus {
    if self.progress >= self.prompts.len() {
      SessionStatus::Complete
    } else {
      SessionStatus::InProgress
    }
  }

  pub fn is_complete(&self) -> bool {
    self.status() == SessionStatus::Complete
  }

  pub fn input(&self) -> &str {
    &self.input
  }

  pub fn sampled_prompts(&self) -> &[PromptEntry] {
    &self.prompts
  }

  #[must_use]
  pub fn current_prompt(&self) -> Option<&PromptEntry> {
    self.prompts.get(self.progress)
  }

  /// Result of the submission for the current prompt, if there was one.
  pub fn last_result(&self) -> Option<&MatchResult> {
    self.answered.as_ref()
  }

  /// True once the current prompt has been answered and `advance` will move on.
  #[must_use]
  pub fn can_advance(&self) -> bool {
    self.answered.is_some()
  }

  pub fn correct_log(&self) -> &[String] {
    &self.correct
  }

  pub fn wrong_log(&self) -> &[WrongAnswer] {
    &self.wrong
  }

  #[must_use]
  pub fn prompt_view(&self) -> Option<PromptView> {
    self.current_prompt().map(|entry| PromptView {
      category: self.category,
      index: self.progress + 1,
      total: self.total(),
      prompt: entry.prompt.clone(),
      formality: self.effective_formality(),
    })
  }

  #[must_use]
  pub fn report(&self) -> SessionReport {
    SessionReport {
      category: self.category,
      correct_count: self.correct.len(),
      total: self.total(),
      wrong: self.wrong.clone(),
    }
  }

  /// Switch category. A different category starts a fresh run; selecting the
  /// active one changes nothing. Returns whether the session was reset.
  ///
  /// # Errors
  ///
  /// Returns `QuizError::EmptyCategory` (leaving the session untouched) if the
  /// new category has no prompts.
  #[instrument(level = "info", target = "session", skip(self), fields(session_id = %self.id, from = %self.category))]
  pub fn select_category(&mut self, category: Category) -> Result<bool, QuizError> {
    if category == self.category {
      return Ok(false);
    }
    if self.bank.prompts(category).is_empty() {
      return Err(QuizError::EmptyCategory(category));
    }
    self.category = category;
    self.reset();
    Ok(true)
  }

  /// Record the register filter. Does not reset the run.
  pub fn select_formality(&mut self, mode: FormalityMode) {
    debug!(target: "session", session_id = %self.id, %mode, "formality selected");
    self.formality = mode;
  }

  /// Replace the free-text input buffer.
  pub fn set_input(&mut self, text: impl Into<String>) {
    self.input = text.into();
  }

  /// Set the input buffer and submit it.
  pub fn submit_text(&mut self, raw: &str) -> Result<MatchResult, QuizError> {
    self.set_input(raw);
    self.submit()
  }

  /// Check the input buffer against the current prompt and log the outcome.
  ///
  /// # Errors
  ///
  /// - `QuizError::SessionComplete` when every prompt has been answered.
  /// - `QuizError::AlreadyAnswered` when this prompt was already submitted.
  /// - `QuizError::EmptyInput` when the trimmed input is empty.
  /// - `QuizError::NoCandidates` when the formality filter removed every answer.
  ///
  /// None of these change progress or the logs.
  #[instrument(level = "info", target = "session", skip(self), fields(session_id = %self.id, progress = self.progress, input_len = self.input.len()))]
  pub fn submit(&mut self) -> Result<MatchResult, QuizError> {
    let Some(entry) = self.prompts.get(self.progress) else {
      return Err(QuizError::SessionComplete);
    };
    if self.answered.is_some() {
      return Err(QuizError::AlreadyAnswered);
    }
    let text = self.input.trim();
    if text.is_empty() {
      return Err(QuizError::EmptyInput);
    }

    let result = grade_entry(entry, self.effective_formality(), text, self.settings.similarity_threshold)?;

    if result.is_correct() {
      self.correct.push(entry.prompt.clone());
    } else {
      self.wrong.push(WrongAnswer { prompt: entry.prompt.clone(), answer: result.closest_candidate.clone() });
    }
    info!(target: "session", verdict = ?result.verdict, score = result.score, "answer checked");

    self.answered = Some(result.clone());
    Ok(result)
  }

  /// Move to the next prompt. Only acts after a successful submit for the
  /// current prompt; otherwise (including repeated calls) it is a no-op that
  /// returns `false`.
  pub fn advance(&mut self) -> bool {
    if self.answered.take().is_none() {
      debug!(target: "session", session_id = %self.id, progress = self.progress, "advance ignored: nothing submitted");
      return false;
    }
    self.progress += 1;
    self.input.clear();
    if self.is_complete() {
      info!(
        target: "session",
        session_id = %self.id,
        correct = self.correct.len(),
        total = self.total(),
        "session complete"
      );
    }
    true
  }

  /// Draw a new sample for the same category and start over.
  ///
  /// # Errors
  ///
  /// Returns `QuizError::NotComplete` while prompts remain.
  pub fn restart(&mut self) -> Result<(), QuizError> {
    if !self.is_complete() {
      return Err(QuizError::NotComplete { progress: self.progress, total: self.total() });
    }
    self.reset();
    Ok(())
  }

  fn reset(&mut self) {
    let pool = self.bank.prompts(self.category);
    let n = self.settings.session_size.max(1).min(pool.len());
    self.prompts = pool.choose_multiple(&mut self.rng, n).cloned().collect();
    self.id = Uuid::new_v4();
    self.progress = 0;
    self.input.clear();
    self.correct.clear();
    self.wrong.clear();
    self.answered = None;
    info!(target: "session", session_id = %self.id, category = %self.category, total = n, "session started");
  }
}

impl fmt::Debug for QuizSession {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("QuizSession")
      .field("id", &self.id)
      .field("category", &self.category)
      .field("formality", &self.formality)
      .field("progress", &self.progress)
      .field("total", &self.prompts.len())
      .field("correct", &self.correct.len())
      .field("wrong", &self.wrong.len())
      .field("answered", &self.answered.is_some())
      .finish_non_exhaustive()
  }
}
