// note-presigner/src/domain/mod.rs
pub mod access_request;
pub mod attachment_key;
pub mod content_type;
pub mod signed_url;

pub use access_request::{AccessRequest, InvocationRequest, Operation};
pub use attachment_key::{sanitize_filename, AttachmentKey, DEFAULT_FILE_NAME};
pub use content_type::content_type_for;
pub use signed_url::SignedUrlResult;
