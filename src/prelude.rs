pub use std::sync::Arc;

pub use anyhow::{Context as _, Result};
pub use askama::Template;
pub use askama_web::WebTemplate;
pub use axum::extract::State;
pub use axum::http::StatusCode;
pub use axum::response::{IntoResponse, Redirect, Response};
pub use axum::routing::{get, post};
pub use axum::Form;
pub use chrono::Utc;

pub use crate::store::{validate, ContactMessage, ContactStore, FieldError, NewContactMessage};
pub use crate::utils::config::Config;
pub use crate::utils::error::{AppError, AppResult};
pub use crate::utils::routing::{AppRouter, AxumRouter};
pub use crate::utils::types::SharedAppState;
