// note-presigner/src/api/mod.rs
pub mod handler;
