use rocket::http::Status;
use rocket::response::Responder;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Idea not found")]
    NotFound,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFound,
            StoreError::LockFailed => AppError::Internal(err.to_string()),
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for AppError {
    fn respond_to(self, _req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = match self {
            AppError::NotFound => Status::NotFound,
            AppError::Internal(ref msg) => {
                error!("request failed: {msg}");
                Status::InternalServerError
            }
        };

        // Hand the status to the registered catcher, which renders the
        // matching error page.
        Err(status)
    }
}
