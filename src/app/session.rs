//! The interactive command loop.
//!
//! A [`Session`] owns the deck, the transcript and the terminal streams.
//! Every line it prints and every line it reads is recorded in the
//! transcript, which the `log` command flushes to a file.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use super::action::Action;
use crate::adapter::outbound::file::FileLineStore;
use crate::domain::{Deck, DomainError, Term, Transcript};
use crate::error::Result;
use crate::port::LineStore;

const FILE_NAME_PROMPT: &str = "File name:";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `exit`.
    Exit,
    /// Standard input was closed.
    InputClosed,
}

enum Flow {
    Continue,
    Stop(SessionEnd),
}

/// Outcome of a card file import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The file could not be opened.
    NotFound,
    /// Lines applied and lines skipped as malformed.
    Loaded { loaded: usize, skipped: usize },
}

/// One user's training session.
pub struct Session<R, W, S = FileLineStore> {
    deck: Deck,
    transcript: Transcript,
    reader: R,
    writer: W,
    store: S,
    rng: StdRng,
    default_export: Option<PathBuf>,
    max_add_attempts: Option<u32>,
}

impl<R: BufRead, W: Write> Session<R, W, FileLineStore> {
    /// Create a session backed by the filesystem.
    pub fn new(reader: R, writer: W) -> Self {
        Self::with_store(reader, writer, FileLineStore::new())
    }
}

impl<R: BufRead, W: Write, S: LineStore> Session<R, W, S> {
    /// Create a session with an explicit line store.
    pub fn with_store(reader: R, writer: W, store: S) -> Self {
        Self {
            deck: Deck::new(),
            transcript: Transcript::new(),
            reader,
            writer,
            store,
            rng: StdRng::from_entropy(),
            default_export: None,
            max_add_attempts: None,
        }
    }

    /// Seed card selection, for reproducible quizzes.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Card file written when the session ends.
    #[must_use]
    pub fn with_default_export(mut self, path: Option<PathBuf>) -> Self {
        self.default_export = path;
        self
    }

    /// Cap re-prompts on duplicate input during `add`.
    #[must_use]
    pub fn with_max_add_attempts(mut self, attempts: Option<u32>) -> Self {
        self.max_add_attempts = attempts;
        self
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Run the command loop until `exit` or end of input.
    ///
    /// I/O failures while writing files or the terminal are returned and
    /// end the session without the exit-time export.
    pub fn run(&mut self) -> Result<SessionEnd> {
        loop {
            let Some(input) = self.prompt(Action::prompt())? else {
                return self.finish(SessionEnd::InputClosed);
            };

            let action = match input.parse::<Action>() {
                Ok(action) => action,
                Err(unknown) => {
                    debug!(input = %unknown.0, "ignoring unknown action");
                    continue;
                }
            };

            debug!(%action, "dispatching action");
            if let Flow::Stop(end) = self.dispatch(action)? {
                return self.finish(end);
            }
        }
    }

    fn dispatch(&mut self, action: Action) -> Result<Flow> {
        match action {
            Action::Add => self.add(),
            Action::Remove => self.remove(),
            Action::Ask => self.ask(),
            Action::Export => self.export(),
            Action::Import => self.import(),
            Action::Log => self.log(),
            Action::HardestCard => {
                let report = self.deck.hardest().to_string();
                self.say(report)?;
                Ok(Flow::Continue)
            }
            Action::ResetStats => {
                self.deck.reset_stats();
                self.say("Card statistics have been reset.")?;
                Ok(Flow::Continue)
            }
            Action::Exit => Ok(Flow::Stop(SessionEnd::Exit)),
        }
    }

    fn finish(&mut self, end: SessionEnd) -> Result<SessionEnd> {
        self.say("Bye bye!")?;
        if let Some(path) = self.default_export.clone() {
            self.export_to(&path)?;
        }
        info!(?end, "session finished");
        Ok(end)
    }

    fn add(&mut self) -> Result<Flow> {
        let mut retries = 0;

        let Some(input) = self.prompt("The card:")? else {
            return Ok(Flow::Stop(SessionEnd::InputClosed));
        };
        let mut term = Term::quoted(&input);
        while let Err(err) = self.deck.check_term(&term) {
            if self.retries_exhausted(&mut retries)? {
                return Ok(Flow::Continue);
            }
            let Some(input) = self.prompt(format!("{err} Try again:"))? else {
                return Ok(Flow::Stop(SessionEnd::InputClosed));
            };
            term = Term::quoted(&input);
        }

        let Some(input) = self.prompt("The definition of the card:")? else {
            return Ok(Flow::Stop(SessionEnd::InputClosed));
        };
        let mut definition = input;
        while let Err(err) = self.deck.check_definition(&definition) {
            if self.retries_exhausted(&mut retries)? {
                return Ok(Flow::Continue);
            }
            let Some(input) = self.prompt(format!("{err} Try again:"))? else {
                return Ok(Flow::Stop(SessionEnd::InputClosed));
            };
            definition = input;
        }

        let message = format!("The pair ({term}:\"{definition}\") has been added.");
        self.deck.insert(term, definition);
        self.say(message)?;
        Ok(Flow::Continue)
    }

    fn retries_exhausted(&mut self, retries: &mut u32) -> Result<bool> {
        if self.max_add_attempts.is_some_and(|max| *retries >= max) {
            self.say("Too many attempts. The card was not added.")?;
            return Ok(true);
        }
        *retries += 1;
        Ok(false)
    }

    fn remove(&mut self) -> Result<Flow> {
        let Some(input) = self.prompt("Which card?")? else {
            return Ok(Flow::Stop(SessionEnd::InputClosed));
        };
        let term = Term::quoted(&input);

        if self.deck.remove(&term) {
            self.say("The card has been removed.")?;
        } else {
            self.say(format!("Can't remove {term}: there is no such card."))?;
        }
        Ok(Flow::Continue)
    }

    fn ask(&mut self) -> Result<Flow> {
        let Some(input) = self.prompt("How many times to ask?")? else {
            return Ok(Flow::Stop(SessionEnd::InputClosed));
        };
        let rounds = input.parse::<usize>().unwrap_or_else(|e| {
            warn!(input = %input, error = %e, "invalid round count, asking nothing");
            0
        });

        let terms = self.deck.snapshot_terms();
        for _ in 0..rounds {
            let Some(term) = terms.choose(&mut self.rng).cloned() else {
                self.say("There are no cards available in memory.")?;
                return Ok(Flow::Continue);
            };

            let Some(answer) = self.prompt(format!("Print the definition of {term}:"))? else {
                return Ok(Flow::Stop(SessionEnd::InputClosed));
            };

            let verdict = self.deck.grade(&term, &answer);
            self.say(verdict.to_string())?;
        }
        Ok(Flow::Continue)
    }

    fn export(&mut self) -> Result<Flow> {
        let Some(input) = self.prompt(FILE_NAME_PROMPT)? else {
            return Ok(Flow::Stop(SessionEnd::InputClosed));
        };
        self.export_to(Path::new(&input))?;
        Ok(Flow::Continue)
    }

    /// Append every card to `path` and report how many were written.
    pub fn export_to(&mut self, path: &Path) -> Result<usize> {
        let lines = self.deck.export_lines();
        let written = self.store.append_lines(path, &lines)?;
        self.say(format!("{written} cards have been saved."))?;
        Ok(written)
    }

    fn import(&mut self) -> Result<Flow> {
        let Some(input) = self.prompt(FILE_NAME_PROMPT)? else {
            return Ok(Flow::Stop(SessionEnd::InputClosed));
        };
        self.import_from(Path::new(&input))?;
        Ok(Flow::Continue)
    }

    /// Load cards from `path`, skipping lines without a separator.
    pub fn import_from(&mut self, path: &Path) -> Result<ImportOutcome> {
        let Some(lines) = self.store.read_lines(path)? else {
            self.say("File not found.")?;
            return Ok(ImportOutcome::NotFound);
        };

        let mut loaded = 0;
        let mut skipped = 0;
        for (index, line) in lines.iter().enumerate() {
            match self.deck.import_line(line) {
                Ok(()) => loaded += 1,
                Err(DomainError::MalformedLine { .. }) => {
                    skipped += 1;
                    let number = index + 1;
                    warn!(path = %path.display(), line = number, "skipping malformed card line");
                    self.say(format!(
                        "Skipped malformed line {number}: missing \": \" separator."
                    ))?;
                }
                Err(e) => return Err(e.into()),
            }
        }

        self.say(format!("{loaded} cards have been loaded."))?;
        Ok(ImportOutcome::Loaded { loaded, skipped })
    }

    fn log(&mut self) -> Result<Flow> {
        let Some(input) = self.prompt(FILE_NAME_PROMPT)? else {
            return Ok(Flow::Stop(SessionEnd::InputClosed));
        };
        self.say("The log has been saved.")?;
        let lines = self.transcript.take();
        self.store.append_lines(Path::new(&input), &lines)?;
        Ok(Flow::Continue)
    }

    /// Print a line and record it.
    fn say(&mut self, message: impl Into<String>) -> Result<()> {
        let message = message.into();
        writeln!(self.writer, "{message}")?;
        self.transcript.record(message);
        Ok(())
    }

    /// Print a prompt, then read and record one trimmed line.
    ///
    /// Invalid UTF-8 is replaced rather than rejected. Returns `Ok(None)` at
    /// end of input.
    fn prompt(&mut self, message: impl Into<String>) -> Result<Option<String>> {
        self.say(message)?;
        self.writer.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf).trim().to_string();
        self.transcript.record(line.clone());
        Ok(Some(line))
    }
}
