// ABOUTME: Tests for buffer line extraction and the modified flag

use editbox::models::{Buffer, BufferError};

#[test]
fn test_line_extraction() {
    let buffer = Buffer::new("line1\nline2".to_string(), String::new());

    assert_eq!(buffer.line(0).unwrap(), "line1");
    assert_eq!(buffer.line(1).unwrap(), "line2");
    assert_eq!(buffer.line(2).unwrap_err(), BufferError::LineOutOfRange(2));
    assert_eq!(buffer.line_count(), 2);
}

#[test]
fn test_empty_content_has_one_empty_line() {
    let buffer = Buffer::new(String::new(), String::new());

    assert_eq!(buffer.line(0).unwrap(), "");
    assert_eq!(buffer.line_count(), 1);
    assert!(buffer.line(1).is_err());
}

#[test]
fn test_trailing_newline_yields_trailing_empty_line() {
    let buffer = Buffer::new("alpha\n".to_string(), String::new());

    assert_eq!(buffer.line(0).unwrap(), "alpha");
    assert_eq!(buffer.line(1).unwrap(), "");
    assert_eq!(buffer.line_count(), 2);
}

#[test]
fn test_new_buffer_is_unassigned_and_unmodified() {
    let buffer = Buffer::new("content".to_string(), "notes.txt".to_string());

    assert_eq!(buffer.id, 0);
    assert!(!buffer.modified);
    assert_eq!(buffer.file_path, "notes.txt");
}

#[test]
fn test_set_content_marks_modified_until_saved() {
    let mut buffer = Buffer::new("before".to_string(), String::new());

    buffer.set_content("after".to_string());
    assert!(buffer.modified);
    assert_eq!(buffer.content, "after");

    buffer.mark_saved();
    assert!(!buffer.modified);
}
