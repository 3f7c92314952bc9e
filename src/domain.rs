//! Domain models: sentence categories, formality modes, prompts and verdicts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// Kind of sentence the learner practices. The set is fixed.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Category {
  Statement,
  ModalVerbStatement,
  SeparableVerb,
  YesNoQuestion,
  WQuestion,
  ConnectorSentence,
}

impl Category {
  pub const ALL: [Category; 6] = [
    Category::Statement,
    Category::ModalVerbStatement,
    Category::SeparableVerb,
    Category::YesNoQuestion,
    Category::WQuestion,
    Category::ConnectorSentence,
  ];

  /// Label shown to the learner.
  pub fn label(self) -> &'static str {
    match self {
      Category::Statement => "Statement",
      Category::ModalVerbStatement => "Modal Verb Statement",
      Category::SeparableVerb => "Separable Verb",
      Category::YesNoQuestion => "Yes/No Question",
      Category::WQuestion => "W-Question",
      Category::ConnectorSentence => "Connector Sentence",
    }
  }

  /// Whether answers in this category encode du/Sie register.
  pub fn has_formality(self) -> bool {
    matches!(self, Category::YesNoQuestion | Category::WQuestion)
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// Accepts the display label ("Yes/No Question") or a slug ("yes-no-question",
/// "yes_no_question"), case-insensitively.
impl FromStr for Category {
  type Err = QuizError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = slug(s);
    Category::ALL
      .into_iter()
      .find(|c| slug(c.label()) == wanted)
      .ok_or_else(|| QuizError::UnknownCategory(s.trim().to_string()))
  }
}

fn slug(s: &str) -> String {
  s.trim()
    .chars()
    .filter(|c| c.is_alphanumeric())
    .flat_map(char::to_lowercase)
    .collect()
}

/// Which register of answer the learner wants to be graded against.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FormalityMode {
  /// du / ihr
  Informal,
  /// Sie
  Formal,
  #[default]
  Either,
}

impl fmt::Display for FormalityMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      FormalityMode::Informal => "Informal (du)",
      FormalityMode::Formal => "Formal (Sie)",
      FormalityMode::Either => "Either",
    })
  }
}

impl FromStr for FormalityMode {
  type Err = QuizError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "informal" | "du" | "informal (du)" => Ok(FormalityMode::Informal),
      "formal" | "sie" | "formal (sie)" => Ok(FormalityMode::Formal),
      "either" | "any" => Ok(FormalityMode::Either),
      _ => Err(QuizError::UnknownFormality(s.trim().to_string())),
    }
  }
}

/// A prompt shown to the learner and the translations accepted for it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptEntry {
  pub prompt: String,
  /// Synonymous correct translations, never empty.
  pub answers: Vec<String>,
}

impl PromptEntry {
  pub fn new(prompt: impl Into<String>, answers: &[&str]) -> Self {
    Self {
      prompt: prompt.into(),
      answers: answers.iter().map(|a| a.to_string()).collect(),
    }
  }
}

/// Outcome class of a single answer check.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
  /// Equal to an accepted answer after normalization.
  Exact,
  /// Close enough to count as correct.
  Similar,
  Mismatch,
}

impl Verdict {
  pub fn is_correct(self) -> bool {
    !matches!(self, Verdict::Mismatch)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn category_parses_labels_and_slugs() {
    assert_eq!("Yes/No Question".parse::<Category>().unwrap(), Category::YesNoQuestion);
    assert_eq!("yes-no-question".parse::<Category>().unwrap(), Category::YesNoQuestion);
    assert_eq!("w_question".parse::<Category>().unwrap(), Category::WQuestion);
    assert_eq!(" statement ".parse::<Category>().unwrap(), Category::Statement);
    assert!(matches!("Poem".parse::<Category>(), Err(QuizError::UnknownCategory(_))));
  }

  #[test]
  fn only_question_categories_have_formality() {
    let with: Vec<_> = Category::ALL.into_iter().filter(|c| c.has_formality()).collect();
    assert_eq!(with, vec![Category::YesNoQuestion, Category::WQuestion]);
  }

  #[test]
  fn formality_parses_ui_labels() {
    assert_eq!("Informal (du)".parse::<FormalityMode>().unwrap(), FormalityMode::Informal);
    assert_eq!("Sie".parse::<FormalityMode>().unwrap(), FormalityMode::Formal);
    assert_eq!("either".parse::<FormalityMode>().unwrap(), FormalityMode::Either);
    assert!("casual".parse::<FormalityMode>().is_err());
  }

  #[test]
  fn similar_counts_as_correct() {
    assert!(Verdict::Exact.is_correct());
    assert!(Verdict::Similar.is_correct());
    assert!(!Verdict::Mismatch.is_correct());
  }
}
