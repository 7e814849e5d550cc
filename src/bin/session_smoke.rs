// ABOUTME: Manual end-to-end smoke run for the session state store
// Creates entities, persists a session, and reconstructs it through a fresh repository

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use editbox::models::{Buffer, Editor, Tab, Window};
use editbox::repository::{
    BufferRepository, MemoryBufferRepository, MemoryTabRepository, MemoryWindowRepository,
    TabRepository, WindowRepository,
};
use editbox::session::{default_state_path, FileStateStore, SessionRepository};

#[derive(Parser)]
#[command(about = "Exercise the session state store end to end")]
struct Args {
    /// Session state file; defaults to ~/.editbox/session.json
    #[arg(long)]
    state_path: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let state_path = match args.state_path {
        Some(path) => path,
        None => default_state_path()?,
    };
    println!("Using state file: {}", state_path.display());

    let buffer_repo = Arc::new(MemoryBufferRepository::new());
    let window_repo = Arc::new(MemoryWindowRepository::new());
    let tab_repo = Arc::new(MemoryTabRepository::new());

    let mut buffer = Buffer::new(
        "fn main() {\n    println!(\"hello\");\n}\n".to_string(),
        "src/main.rs".to_string(),
    );
    buffer_repo.save(&mut buffer)?;
    println!("✓ Saved buffer {} ({} lines)", buffer.id, buffer.line_count());

    let mut window = Window::new(buffer.id);
    window.set_cursor(1, 4);
    window_repo.save(&mut window)?;
    println!("✓ Saved window {} onto buffer {}", window.id, window.buffer_id);

    let mut tab = Tab::new();
    tab.add_window(window.clone());
    tab_repo.save(&mut tab)?;
    println!("✓ Saved tab {} (active window {:?})", tab.id, tab.active_window);

    let mut editor = Editor::new();
    editor.buffers.push(buffer);
    editor.windows.push(window);
    editor.tabs.push(tab);

    let sessions = SessionRepository::new(
        Box::new(FileStateStore::new(&state_path)),
        tab_repo.clone(),
        window_repo.clone(),
        buffer_repo.clone(),
    )?;
    sessions.save(&editor)?;
    println!("✓ Persisted session");

    // A second repository over the same file plays the part of a restarted process.
    let restored = SessionRepository::new(
        Box::new(FileStateStore::new(&state_path)),
        tab_repo,
        window_repo,
        buffer_repo,
    )?;
    let reloaded = restored.get()?;
    println!(
        "✓ Restored session: {} tabs, {} windows, {} buffers, theme {:?}",
        reloaded.tabs.len(),
        reloaded.windows.len(),
        reloaded.buffers.len(),
        reloaded.settings.theme
    );

    if reloaded == editor {
        println!("\nRound trip matched");
        Ok(())
    } else {
        Err(anyhow::anyhow!("round trip diverged from saved session"))
    }
}
