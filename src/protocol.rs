//! Output structs handed to the presentation layer (serde ready).
//! Keep this small and stable so the terminal and JSON renderers agree.

use serde::Serialize;

use crate::bank::PhraseBank;
use crate::domain::{Category, FormalityMode, Verdict};
use crate::matcher::MatchResult;

/// Prompt currently awaiting an answer.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PromptView {
  pub category: Category,
  /// 1-based position within the run.
  pub index: usize,
  pub total: usize,
  pub prompt: String,
  pub formality: FormalityMode,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct WrongAnswer {
  pub prompt: String,
  /// Closest accepted answer at the time of the mistake.
  pub answer: String,
}

/// End-of-run summary.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SessionReport {
  pub category: Category,
  pub correct_count: usize,
  pub total: usize,
  pub wrong: Vec<WrongAnswer>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AnswerFeedback {
  pub verdict: Verdict,
  pub correct: bool,
  pub score: f64,
  pub percent: u32,
  pub closest_answer: String,
  pub extra_words: Vec<String>,
  pub message: String,
  /// Word-difference hint; only set for mismatches.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub hint: Option<String>,
}

impl From<&MatchResult> for AnswerFeedback {
  fn from(m: &MatchResult) -> Self {
    let (message, hint) = match m.verdict {
      Verdict::Exact => ("Perfect! Your sentence exactly matches one of the correct answers.".to_string(), None),
      Verdict::Similar => (
        format!("Good! Your sentence is very close or correct. It matched {}%.", m.percent()),
        None,
      ),
      Verdict::Mismatch => {
        let hint = if m.extra_words.is_empty() {
          "No major word differences detected.".to_string()
        } else {
          format!("Words that seem different or extra: {}", m.extra_words.join(", "))
        };
        (
          format!("Your sentence has differences. Closest correct answer: {}", m.closest_candidate),
          Some(hint),
        )
      }
    };
    AnswerFeedback {
      verdict: m.verdict,
      correct: m.is_correct(),
      score: m.score,
      percent: m.percent(),
      closest_answer: m.closest_candidate.clone(),
      extra_words: m.extra_words.clone(),
      message,
      hint,
    }
  }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct CategoryInfo {
  pub category: Category,
  pub label: &'static str,
  pub prompts: usize,
  pub formality: bool,
}

pub fn category_infos(bank: &PhraseBank) -> Vec<CategoryInfo> {
  Category::ALL
    .into_iter()
    .map(|category| CategoryInfo {
      category,
      label: category.label(),
      prompts: bank.prompts(category).len(),
      formality: category.has_formality(),
    })
    .collect()
}

/// Events emitted by the terminal driver in JSON mode, one per line.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuizEvent {
  Prompt {
    #[serde(flatten)]
    view: PromptView,
  },
  Feedback {
    #[serde(flatten)]
    feedback: AnswerFeedback,
  },
  Report {
    #[serde(flatten)]
    report: SessionReport,
  },
  Error {
    message: String,
  },
}
