//! German Sentence Trainer · terminal driver
//!
//! - `categories`: list what can be practiced
//! - `practice`: interactive run over stdin/stdout (prose or JSON lines)
//! - `check`: grade a single answer for a known prompt
//!
//! Important env variables:
//!   QUIZ_CONFIG_PATH : path to TOML config (settings + extra prompts), overridden by --config
//!   LOG_LEVEL        : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT       : "pretty" (default) or "json"

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use sentence_trainer::config::{load_quiz_config_from_env, QuizConfig};
use sentence_trainer::protocol::{category_infos, AnswerFeedback, PromptView, QuizEvent, SessionReport};
use sentence_trainer::{telemetry, Category, FormalityMode, PhraseBank, QuizError, QuizSession};

#[derive(Parser)]
#[command(name = "sentence-trainer", version, about = "Practice building correct German sentences")]
struct Cli {
  /// Config file path (defaults to QUIZ_CONFIG_PATH)
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  /// Emit JSON lines instead of prose
  #[arg(long, global = true)]
  json: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// List sentence categories
  Categories,

  /// Practice one category interactively
  Practice {
    /// Category label or slug, e.g. "Statement" or "yes-no-question"
    #[arg(long)]
    category: Category,

    /// informal | formal | either (question categories only)
    #[arg(long, default_value = "either")]
    formality: FormalityMode,

    /// Seed for a reproducible prompt order
    #[arg(long)]
    seed: Option<u64>,
  },

  /// Grade one answer for a prompt
  Check {
    #[arg(long)]
    category: Category,

    /// Prompt text exactly as listed in the phrase bank
    #[arg(long)]
    prompt: String,

    #[arg(long)]
    answer: String,

    #[arg(long, default_value = "either")]
    formality: FormalityMode,
  },
}

fn main() {
  telemetry::init_tracing();
  let cli = Cli::parse();

  if let Err(e) = run(cli) {
    eprintln!("Error: {e}");
    process::exit(1);
  }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
  let cfg = match &cli.config {
    Some(path) => Some(QuizConfig::from_path(path)?),
    None => load_quiz_config_from_env(),
  };
  let settings = cfg.as_ref().map(|c| c.settings.clone()).unwrap_or_default();
  let bank = Arc::new(PhraseBank::from_config(cfg.as_ref()));
  for gap in bank.formality_gaps() {
    warn!(target: "sentence_trainer", category = %gap.category, prompt = %gap.prompt, mode = %gap.mode, "Prompt has no answers for this formality");
  }

  let stdout = io::stdout();
  let mut out = stdout.lock();
  let ui = Ui { json: cli.json };

  match cli.command {
    Commands::Categories => {
      let infos = category_infos(&bank);
      if ui.json {
        writeln!(out, "{}", serde_json::to_string(&infos)?)?;
      } else {
        for i in infos {
          let note = if i.formality { "  (du/Sie)" } else { "" };
          writeln!(out, "{:<22} {:>2} prompts{}", i.label, i.prompts, note)?;
        }
      }
    }
    Commands::Practice { category, formality, seed } => {
      let mut session = match seed {
        Some(seed) => QuizSession::with_seed(bank, category, settings, seed)?,
        None => QuizSession::new(bank, category, settings)?,
      };
      session.select_formality(formality);
      info!(target: "sentence_trainer", session_id = %session.id(), %category, %formality, "Practice started");
      let stdin = io::stdin();
      practice(&mut session, &mut stdin.lock(), &mut out, ui)?;
    }
    Commands::Check { category, prompt, answer, formality } => {
      let m = bank.grade(category, &prompt, formality, &answer, settings.similarity_threshold)?;
      ui.feedback(&mut out, &AnswerFeedback::from(&m))?;
    }
  }
  Ok(())
}

/// Drive one session until the learner declines a restart or input ends.
fn practice(
  session: &mut QuizSession,
  input: &mut impl BufRead,
  out: &mut impl Write,
  ui: Ui,
) -> Result<(), Box<dyn std::error::Error>> {
  loop {
    let Some(view) = session.prompt_view() else {
      ui.report(out, &session.report())?;
      ui.ask(out, "Start again? [y/N]")?;
      match read_line(input)? {
        Some(line) if line.trim().eq_ignore_ascii_case("y") => {
          session.restart()?;
          continue;
        }
        _ => return Ok(()),
      }
    };

    ui.prompt(out, &view)?;
    loop {
      let Some(line) = read_line(input)? else { return Ok(()) };
      match session.submit_text(&line) {
        Ok(m) => {
          ui.feedback(out, &AnswerFeedback::from(&m))?;
          break;
        }
        Err(e) if e.is_user_correctable() => ui.error(out, &e)?,
        Err(e) => return Err(e.into()),
      }
    }

    ui.ask(out, "Press Enter for the next prompt")?;
    // End of input still moves on so the final report is printed.
    let _ = read_line(input)?;
    session.advance();
  }
}

fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
  let mut line = String::new();
  if input.read_line(&mut line)? == 0 {
    return Ok(None);
  }
  Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[derive(Clone, Copy)]
struct Ui {
  json: bool,
}

impl Ui {
  fn event(self, out: &mut impl Write, event: &QuizEvent) -> io::Result<()> {
    let line = serde_json::to_string(event).map_err(io::Error::other)?;
    writeln!(out, "{line}")
  }

  fn prompt(self, out: &mut impl Write, view: &PromptView) -> io::Result<()> {
    if self.json {
      return self.event(out, &QuizEvent::Prompt { view: view.clone() });
    }
    writeln!(out, "\nPrompt {} of {} ({})", view.index, view.total, view.category)?;
    writeln!(out, "{}", view.prompt)?;
    if view.category.has_formality() {
      writeln!(out, "Formality: {}", view.formality)?;
    }
    write!(out, "> ")?;
    out.flush()
  }

  fn feedback(self, out: &mut impl Write, fb: &AnswerFeedback) -> io::Result<()> {
    if self.json {
      return self.event(out, &QuizEvent::Feedback { feedback: fb.clone() });
    }
    writeln!(out, "{}", fb.message)?;
    if let Some(hint) = &fb.hint {
      writeln!(out, "{hint}")?;
    }
    Ok(())
  }

  fn report(self, out: &mut impl Write, report: &SessionReport) -> io::Result<()> {
    if self.json {
      return self.event(out, &QuizEvent::Report { report: report.clone() });
    }
    writeln!(out, "\nYou have completed all prompts for this section!")?;
    writeln!(out, "Correct answers: {} / {}", report.correct_count, report.total)?;
    if !report.wrong.is_empty() {
      writeln!(out, "Here are the ones you need to review:")?;
      for w in &report.wrong {
        writeln!(out, "- {} -> Correct answer: {}", w.prompt, w.answer)?;
      }
    }
    Ok(())
  }

  fn error(self, out: &mut impl Write, e: &QuizError) -> io::Result<()> {
    if self.json {
      return self.event(out, &QuizEvent::Error { message: e.to_string() });
    }
    write!(out, "{e}\n> ")?;
    out.flush()
  }

  fn ask(self, out: &mut impl Write, question: &str) -> io::Result<()> {
    if self.json {
      return Ok(());
    }
    write!(out, "{question} ")?;
    out.flush()
  }
}
