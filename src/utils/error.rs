use crate::prelude::*;

/// Semantic app error.
/// For HTML responses, gets templated into a nice error page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("page not found")]
    NotFound,
    #[error("invalid request")]
    BadRequest,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn message(&self) -> &'static str {
        match self {
            AppError::NotFound => "Page not found.",
            AppError::BadRequest => "Invalid request.",
            AppError::Internal(_) => "We encountered an unexpected error.",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
struct ErrorHtml {
    title: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(e) = &self {
            tracing::error!("internal error: {e:#}");
        }

        let status = self.status();
        let html = ErrorHtml {
            title: format!("Error {}", status.as_u16()),
            message: self.message().into(),
        };
        (status, html).into_response()
    }
}
