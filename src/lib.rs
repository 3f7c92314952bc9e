//! German Sentence Trainer
//!
//! Presents English prompts, accepts German translations and grades them by
//! exact match or Ratcliff/Obershelp similarity against a small set of accepted
//! answers, optionally filtered by du/Sie register.
//!
//! - `session`: practice-run state machine (sampling, submit, advance, restart)
//! - `matcher` / `similarity`: answer grading
//! - `formality`: du/Sie answer filtering
//! - `bank` / `seeds` / `config`: phrase bank and TOML overrides

pub mod bank;
pub mod config;
pub mod domain;
pub mod error;
pub mod formality;
pub mod matcher;
pub mod protocol;
pub mod seeds;
pub mod session;
pub mod similarity;
pub mod telemetry;
pub mod util;

pub use bank::PhraseBank;
pub use config::{QuizConfig, Settings};
pub use domain::{Category, FormalityMode, PromptEntry, Verdict};
pub use error::QuizError;
pub use matcher::{match_answer, MatchResult};
pub use session::{QuizSession, SessionStatus};
