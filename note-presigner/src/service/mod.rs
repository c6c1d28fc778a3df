// note-presigner/src/service/mod.rs
pub mod presigner_service;
pub mod storage_service;
