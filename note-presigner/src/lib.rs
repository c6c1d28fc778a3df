// note-presigner/src/lib.rs
pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod service;
pub mod utils;

// Re-export commonly used types
pub use api::handler::{handle_invocation, InvocationResponse};
pub use domain::SignedUrlResult;
pub use error::{AppError, AppResult, ErrorResponse};
pub use service::presigner_service::PresignerService;
