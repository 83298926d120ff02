//! REST API module.
//!
//! Record bodies are returned bare; failures use the error envelope from [`crate::errors`].

mod members;

pub use members::*;

use axum::extract::FromRequest;

use crate::errors::AppError;

/// JSON body extractor whose rejections use the error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Result type shared by all handlers.
pub type ApiResult<T> = Result<T, AppError>;
