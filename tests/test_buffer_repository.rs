// ABOUTME: Integration tests for the in-memory buffer repository
// Covers id assignment, lookup, whole-entity update, and deletion

use editbox::models::Buffer;
use editbox::repository::{BufferRepository, MemoryBufferRepository, RepositoryError};

#[test]
fn test_save_assigns_id_and_find_returns_saved_content() {
    let repo = MemoryBufferRepository::new();
    let mut buffer = Buffer::new("Test content".to_string(), String::new());

    repo.save(&mut buffer).unwrap();
    assert_ne!(buffer.id, 0, "save should assign an id to the buffer");

    let found = repo.find_by_id(buffer.id).unwrap();
    assert_eq!(found, buffer);
}

#[test]
fn test_save_with_existing_id_upserts() {
    let repo = MemoryBufferRepository::new();
    let mut buffer = Buffer::new("first".to_string(), String::new());
    repo.save(&mut buffer).unwrap();

    let id = buffer.id;
    buffer.set_content("second".to_string());
    repo.save(&mut buffer).unwrap();

    assert_eq!(buffer.id, id, "save must not reassign an already assigned id");
    assert_eq!(repo.find_by_id(id).unwrap().content, "second");
    assert_eq!(repo.list().len(), 1);
}

#[test]
fn test_ids_are_monotonically_increasing() {
    let repo = MemoryBufferRepository::new();
    let mut previous = 0;
    for i in 0..5 {
        let mut buffer = Buffer::new(format!("buffer {}", i), String::new());
        repo.save(&mut buffer).unwrap();
        assert!(buffer.id > previous);
        previous = buffer.id;
    }
}

#[test]
fn test_deleted_ids_are_never_reused() {
    let repo = MemoryBufferRepository::new();
    let mut first = Buffer::new("first".to_string(), String::new());
    repo.save(&mut first).unwrap();
    repo.delete(first.id).unwrap();

    let mut second = Buffer::new("second".to_string(), String::new());
    repo.save(&mut second).unwrap();
    assert!(second.id > first.id);
}

#[test]
fn test_update_replaces_stored_value() {
    let repo = MemoryBufferRepository::new();
    let mut buffer = Buffer::new("Original content".to_string(), String::new());
    repo.save(&mut buffer).unwrap();

    buffer.set_content("Updated content".to_string());
    repo.update(&buffer).unwrap();

    let updated = repo.find_by_id(buffer.id).unwrap();
    assert_eq!(updated.content, "Updated content");
    assert!(updated.modified);
}

#[test]
fn test_update_nonexistent_fails_and_leaves_table_unchanged() {
    let repo = MemoryBufferRepository::new();
    let mut stored = Buffer::new("stored".to_string(), String::new());
    repo.save(&mut stored).unwrap();

    let mut ghost = Buffer::new("ghost".to_string(), String::new());
    ghost.id = 99;
    let err = repo.update(&ghost).unwrap_err();
    assert_eq!(
        err,
        RepositoryError::NotFound {
            entity: "buffer",
            id: 99
        }
    );
    assert_eq!(repo.list().len(), 1);
}

#[test]
fn test_delete_removes_entry() {
    let repo = MemoryBufferRepository::new();
    let mut buffer = Buffer::new("To be deleted".to_string(), String::new());
    repo.save(&mut buffer).unwrap();

    repo.delete(buffer.id).unwrap();
    assert!(matches!(
        repo.find_by_id(buffer.id),
        Err(RepositoryError::NotFound { .. })
    ));
}

#[test]
fn test_delete_nonexistent_fails() {
    let repo = MemoryBufferRepository::new();
    assert!(matches!(
        repo.delete(7),
        Err(RepositoryError::NotFound { entity: "buffer", id: 7 })
    ));
}

#[test]
fn test_list_returns_all_buffers() {
    let repo = MemoryBufferRepository::new();
    let mut first = Buffer::new("Buffer1".to_string(), String::new());
    let mut second = Buffer::new("Buffer 2".to_string(), String::new());
    repo.save(&mut first).unwrap();
    repo.save(&mut second).unwrap();

    let buffers = repo.list();
    assert_eq!(buffers.len(), 2);
    assert!(buffers.contains(&first));
    assert!(buffers.contains(&second));
}
