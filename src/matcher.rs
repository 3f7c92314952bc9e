//! Answer checking: exact match first, then fuzzy similarity with a threshold.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::domain::Verdict;
use crate::error::QuizError;
use crate::similarity::ratio;
use crate::util::{exact_key, normalize};

/// Ratio at or above which a non-exact answer still counts as correct.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.90;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchResult {
  pub verdict: Verdict,
  /// 1.0 for exact matches, otherwise the best similarity ratio.
  pub score: f64,
  /// Accepted answer closest to the submission, with its original casing.
  pub closest_candidate: String,
  /// Submitted words (lowercased) that do not occur in `closest_candidate`.
  pub extra_words: Vec<String>,
}

impl MatchResult {
  pub fn is_correct(&self) -> bool {
    self.verdict.is_correct()
  }

  /// Score as a whole percentage; halves round to even.
  pub fn percent(&self) -> u32 {
    (self.score * 100.0).round_ties_even() as u32
  }
}

/// Check `submitted` against the accepted answers using the default threshold.
pub fn match_answer<S: AsRef<str>>(submitted: &str, candidates: &[S]) -> Result<MatchResult, QuizError> {
  match_answer_with_threshold(submitted, candidates, DEFAULT_SIMILARITY_THRESHOLD)
}

/// Ties on the best ratio keep the earliest candidate.
#[instrument(level = "debug", target = "matcher", skip_all, fields(submitted_len = submitted.len(), candidates = candidates.len()))]
pub fn match_answer_with_threshold<S: AsRef<str>>(
  submitted: &str,
  candidates: &[S],
  threshold: f64,
) -> Result<MatchResult, QuizError> {
  let candidates: Vec<&str> = candidates.iter().map(|c| c.as_ref()).collect();
  let Some(&first) = candidates.first() else {
    return Err(QuizError::NoCandidates { prompt: String::new() });
  };

  let key = exact_key(submitted);
  if let Some(hit) = candidates.iter().find(|c| exact_key(c) == key) {
    debug!(target: "matcher", "exact match");
    return Ok(MatchResult {
      verdict: Verdict::Exact,
      score: 1.0,
      closest_candidate: hit.to_string(),
      extra_words: Vec::new(),
    });
  }

  let submitted_norm = normalize(submitted);
  let mut best = 0.0_f64;
  let mut closest = first;
  for &c in &candidates {
    let r = ratio(&submitted_norm, &normalize(c));
    if r > best {
      best = r;
      closest = c;
    }
  }

  let verdict = if best >= threshold { Verdict::Similar } else { Verdict::Mismatch };
  debug!(target: "matcher", score = best, ?verdict, "similarity pass");

  Ok(MatchResult {
    verdict,
    score: best,
    closest_candidate: closest.to_string(),
    extra_words: extra_words(submitted, closest),
  })
}

/// Lowercased whitespace tokens of `submitted` missing from `reference`, in
/// submission order. Duplicates are kept and punctuation stays attached.
pub fn extra_words(submitted: &str, reference: &str) -> Vec<String> {
  let reference = reference.to_lowercase();
  let known: Vec<&str> = reference.split_whitespace().collect();
  submitted
    .to_lowercase()
    .split_whitespace()
    .filter(|w| !known.contains(w))
    .map(str::to_string)
    .collect()
}
