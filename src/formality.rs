//! du/Sie register filtering of accepted answers.

use crate::domain::FormalityMode;

/// Marks an answer as formal. Matched case-sensitively as authored, so the
/// lowercase "sie" (she/they) inside a sentence does not count.
pub const FORMAL_TOKEN: &str = "Sie";

pub fn is_formal(answer: &str) -> bool {
  answer.contains(FORMAL_TOKEN)
}

/// Keep the answers that fit `mode`, preserving their order.
pub fn filter_answers<S: AsRef<str>>(answers: &[S], mode: FormalityMode) -> Vec<&str> {
  answers
    .iter()
    .map(AsRef::as_ref)
    .filter(|a| match mode {
      FormalityMode::Informal => !is_formal(a),
      FormalityMode::Formal => is_formal(a),
      FormalityMode::Either => true,
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  const ANSWERS: [&str; 3] = ["Wo wohnst du?", "Wo wohnen Sie?", "Wo wohnt ihr?"];

  #[test]
  fn informal_drops_sie() {
    let kept = filter_answers(&ANSWERS, FormalityMode::Informal);
    assert_eq!(kept, vec!["Wo wohnst du?", "Wo wohnt ihr?"]);
    assert!(kept.iter().all(|a| !a.contains("Sie")));
  }

  #[test]
  fn formal_keeps_only_sie() {
    let kept = filter_answers(&ANSWERS, FormalityMode::Formal);
    assert_eq!(kept, vec!["Wo wohnen Sie?"]);
  }

  #[test]
  fn either_is_identity() {
    assert_eq!(filter_answers(&ANSWERS, FormalityMode::Either), ANSWERS.to_vec());
  }

  #[test]
  fn token_is_case_sensitive() {
    assert!(!is_formal("kommen sie aus deutschland"));
    assert!(is_formal("Kommen Sie aus Deutschland?"));
  }

  #[test]
  fn formal_filter_can_come_back_empty() {
    assert!(filter_answers(&["Wann beginnt der Kurs?"], FormalityMode::Formal).is_empty());
  }
}
