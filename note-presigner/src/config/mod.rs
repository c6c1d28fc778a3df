// note-presigner/src/config/mod.rs
pub mod app;

pub use app::{
    PresignerConfig, StorageProvider, DEFAULT_REGION, DOWNLOAD_URL_EXPIRATION,
    UPLOAD_URL_EXPIRATION,
};
