// Tests for bounded stream copying
// Focus: terminator matching, exhaustion, argument validation

use std::io::{Cursor, Read};

use super::{CopyOutcome, copy_until};
use crate::error::ToolboxError;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_stops_after_terminator() {
    init_logs();
    let mut source = Cursor::new(b"hello##world".to_vec());
    let mut sink = Vec::new();
    let outcome = copy_until(&mut source, &mut sink, "##").unwrap();
    assert_eq!(outcome, CopyOutcome::TerminatorFound);
    assert_eq!(sink, b"hello##");

    let mut rest = String::new();
    source.read_to_string(&mut rest).unwrap();
    assert_eq!(rest, "world", "bytes after the terminator must stay unread");
}

#[test]
fn test_exhausted_source_copies_everything() {
    let mut source = Cursor::new(b"hello".to_vec());
    let mut sink = Vec::new();
    let outcome = copy_until(&mut source, &mut sink, "##").unwrap();
    assert_eq!(outcome, CopyOutcome::SourceExhausted);
    assert_eq!(sink, b"hello");
}

#[test]
fn test_empty_terminator_rejected_before_reading() {
    let mut source = Cursor::new(b"hello".to_vec());
    let mut sink = Vec::new();
    let err = copy_until(&mut source, &mut sink, "").unwrap_err();
    assert!(matches!(err, ToolboxError::EmptyTerminator));
    assert!(err.is_invalid_argument());
    assert_eq!(source.position(), 0, "no byte may be read on a rejected call");
    assert!(sink.is_empty());
}

#[test]
fn test_matching_is_case_sensitive() {
    let mut source = Cursor::new(b"abcENDdef".to_vec());
    let mut sink = Vec::new();
    let outcome = copy_until(&mut source, &mut sink, "end").unwrap();
    assert_eq!(outcome, CopyOutcome::SourceExhausted);
    assert_eq!(sink, b"abcENDdef");
}

#[test]
fn test_mismatch_resets_to_terminator_start() {
    // In "aab" the middle byte breaks the first partial match and is not
    // retried as a fresh start, so the "ab" at offset 1 goes unseen.
    let mut source = Cursor::new(b"aab".to_vec());
    let mut sink = Vec::new();
    let outcome = copy_until(&mut source, &mut sink, "ab").unwrap();
    assert_eq!(outcome, CopyOutcome::SourceExhausted);
    assert_eq!(sink, b"aab");
}

#[test]
fn test_single_byte_terminator() {
    let mut source = Cursor::new(b"line one\nline two".to_vec());
    let mut sink = Vec::new();
    let outcome = copy_until(&mut source, &mut sink, "\n").unwrap();
    assert_eq!(outcome, CopyOutcome::TerminatorFound);
    assert_eq!(sink, b"line one\n");
}

#[test]
fn test_terminator_at_stream_start() {
    let mut source = Cursor::new(b"##tail".to_vec());
    let mut sink = Vec::new();
    let outcome = copy_until(&mut source, &mut sink, "##").unwrap();
    assert_eq!(outcome, CopyOutcome::TerminatorFound);
    assert_eq!(sink, b"##");
}

#[test]
fn test_empty_source_is_exhausted_immediately() {
    let mut source = Cursor::new(Vec::new());
    let mut sink = Vec::new();
    let outcome = copy_until(&mut source, &mut sink, "##").unwrap();
    assert_eq!(outcome, CopyOutcome::SourceExhausted);
    assert!(sink.is_empty());
}
