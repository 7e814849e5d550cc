// ABOUTME: Library crate for Editbox, the in-process session state store for a text editor

pub mod models;
pub mod repository;
pub mod session;
