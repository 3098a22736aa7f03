//! Scripted session tests: stdin is a cursor, stdout a byte buffer.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use flashcards::app::{ImportOutcome, Session, SessionEnd};
use flashcards::domain::{Deck, Hardest, Term};

type ScriptedSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

fn scripted(lines: &[&str]) -> ScriptedSession {
    let mut input = lines.join("\n");
    input.push('\n');
    Session::new(Cursor::new(input.into_bytes()), Vec::new()).with_seed(42)
}

fn stdout(session: &ScriptedSession) -> String {
    String::from_utf8(session.writer().clone()).expect("utf8 output")
}

#[test]
fn add_quiz_and_hardest_scenario() {
    let mut session = scripted(&[
        "add",
        "cat",
        "feline",
        "ask",
        "1",
        "feline",
        "ask",
        "1",
        "dog",
        "hardest card",
        "exit",
    ]);

    assert_eq!(session.run().unwrap(), SessionEnd::Exit);

    let out = stdout(&session);
    assert!(out.contains("The pair (\"cat\":\"feline\") has been added."));
    assert!(out.contains("Print the definition of \"cat\":"));
    assert!(out.contains("Correct!"));
    assert!(out.contains("Wrong. The answer is \"feline\"."));
    assert!(out.contains("The hardest card is \"cat\". You have 1 errors answering it."));
    assert_eq!(session.deck().failures(&Term::quoted("cat")), 1);
}

#[test]
fn duplicate_definition_is_rejected_for_a_new_term() {
    let mut session = scripted(&["add", "a", "d1", "add", "b", "d1", "d2", "exit"]);
    session.run().unwrap();

    let out = stdout(&session);
    assert!(out.contains("The definition \"d1\" already exists. Try again:"));
    assert!(out.contains("The pair (\"b\":\"d2\") has been added."));
    assert_eq!(session.deck().definition(&Term::quoted("b")), Some("d2"));
}

#[test]
fn remove_twice_reports_missing_card() {
    let mut session = scripted(&["add", "cat", "feline", "remove", "cat", "remove", "cat", "exit"]);
    session.run().unwrap();

    let out = stdout(&session);
    assert!(out.contains("The card has been removed."));
    assert!(out.contains("Can't remove \"cat\": there is no such card."));
    assert!(session.deck().is_empty());
}

#[test]
fn invalid_utf8_input_does_not_end_the_session() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("autosave.txt");

    let input = b"add\ncat\nfeline\nadd\ncaf\xE9\ncoffee\nexit\n".to_vec();
    let mut session =
        Session::new(Cursor::new(input), Vec::new()).with_default_export(Some(path.clone()));

    assert_eq!(session.run().unwrap(), SessionEnd::Exit);
    assert_eq!(session.deck().len(), 2);
    assert_eq!(
        session.deck().definition(&Term::quoted("caf\u{FFFD}")),
        Some("coffee")
    );

    let saved = fs::read_to_string(&path).unwrap();
    assert!(saved.contains("\"cat\": feline"));
    assert!(saved.contains("\"caf\u{FFFD}\": coffee"));
}

#[test]
fn wrong_answer_records_failure_for_asked_card() {
    let mut session = scripted(&["ask", "2", "dog", "feline", "exit"]);
    session.deck_mut().insert(Term::quoted("cat"), "feline");
    session.run().unwrap();

    let out = stdout(&session);
    assert!(out.contains("Wrong. The answer is \"feline\"."));
    assert!(out.contains("Correct!"));
    assert_eq!(session.deck().failures(&Term::quoted("cat")), 1);
}

#[test]
fn export_then_import_into_fresh_session_round_trips() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("deck.txt");
    let file = path.to_str().expect("utf8 path");

    let mut first = scripted(&["add", "cat", "feline", "add", "dog", "canine", "export", file, "exit"]);
    first.run().unwrap();
    assert!(stdout(&first).contains("2 cards have been saved."));

    let mut second = scripted(&["import", file, "exit"]);
    second.run().unwrap();
    assert!(stdout(&second).contains("2 cards have been loaded."));
    assert_eq!(second.deck().definition(&Term::quoted("cat")), Some("feline"));
    assert_eq!(second.deck().definition(&Term::quoted("dog")), Some("canine"));
}

#[test]
fn export_appends_instead_of_overwriting() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("deck.txt");
    fs::write(&path, "\"old\": card\n").unwrap();

    let mut session = scripted(&[]);
    session.deck_mut().insert(Term::quoted("cat"), "feline");
    assert_eq!(session.export_to(&path).unwrap(), 1);

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "\"old\": card\n\"cat\": feline\n");
}

#[test]
fn export_to_unwritable_path_is_an_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let mut session = scripted(&[]);
    assert!(session.export_to(dir.path()).is_err());
}

#[test]
fn import_missing_file_reports_not_found() {
    let mut session = scripted(&[]);
    let outcome = session
        .import_from(Path::new("definitely/not/here.txt"))
        .unwrap();
    assert_eq!(outcome, ImportOutcome::NotFound);
    assert!(stdout(&session).contains("File not found."));
}

#[test]
fn import_skips_malformed_lines() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("deck.txt");
    fs::write(&path, "\"cat\": feline\nno separator\n\"dog\": canine\n").unwrap();

    let mut session = scripted(&[]);
    let outcome = session.import_from(&path).unwrap();

    assert_eq!(
        outcome,
        ImportOutcome::Loaded {
            loaded: 2,
            skipped: 1
        }
    );
    let out = stdout(&session);
    assert!(out.contains("Skipped malformed line 2: missing \": \" separator."));
    assert!(out.contains("2 cards have been loaded."));
}

#[test]
fn exit_exports_to_default_path() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("autosave.txt");

    let mut session =
        scripted(&["add", "cat", "feline", "exit"]).with_default_export(Some(path.clone()));
    session.run().unwrap();

    let out = stdout(&session);
    assert!(out.contains("Bye bye!\n1 cards have been saved."));
    assert_eq!(fs::read_to_string(&path).unwrap(), "\"cat\": feline\n");
}

#[test]
fn log_writes_transcript_and_clears_it() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("session.log");
    let file = path.to_str().expect("utf8 path");

    let mut session = scripted(&["hardest card", "log", file, "exit"]);
    session.run().unwrap();

    let logged = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = logged.lines().collect();
    assert_eq!(lines[1], "hardest card");
    assert_eq!(lines[2], "There are no cards with errors.");
    assert_eq!(lines.last(), Some(&"The log has been saved."));

    let remaining = session.transcript().lines();
    assert!(!remaining.iter().any(|line| line == "hardest card"));
    assert_eq!(remaining.last().map(String::as_str), Some("Bye bye!"));
}

#[test]
fn reset_stats_then_hardest_reports_no_errors() {
    let mut session = scripted(&["ask", "1", "wrong", "reset stats", "hardest card", "exit"]);
    session.deck_mut().insert(Term::quoted("cat"), "feline");
    session.run().unwrap();

    let out = stdout(&session);
    assert!(out.contains("Card statistics have been reset."));
    assert!(out.contains("There are no cards with errors."));
}

#[test]
fn tied_failures_report_every_card() {
    let mut deck = Deck::new();
    let a = Term::raw("a");
    let b = Term::raw("b");
    deck.insert(a.clone(), "1");
    deck.insert(b.clone(), "2");
    for _ in 0..3 {
        deck.grade(&a, "x");
        deck.grade(&b, "x");
    }

    assert_eq!(
        deck.hardest(),
        Hardest::Tied {
            terms: vec![a, b],
            count: 3
        }
    );
    assert_eq!(
        deck.hardest().to_string(),
        "The hardest cards are a, b. You have 3 errors answering them."
    );
}
