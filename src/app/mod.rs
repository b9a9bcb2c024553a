use axum::extract::DefaultBodyLimit;

use crate::prelude::*;

mod contact;
mod home;

pub struct AppState {
    pub config: Config,
    pub store: ContactStore,
}

pub fn build(config: Config) -> axum::Router<()> {
    let state = Arc::new(AppState { config, store: ContactStore::new() });

    // Register business logic routes
    let r = AppRouter::new(&state);
    let r = home::add_routes(r);
    let r = contact::add_routes(r);
    let (r, state) = r.finish();

    // Register app-wide routes
    let r = r.nest_service("/static", tower_http::services::ServeDir::new("frontend/static"));
    // For non-HTML pages without a <link rel="icon">, this is where the browser looks
    let r = r.route("/favicon.ico", get(|| async { Redirect::to("/static/favicon.ico") }));
    let r = r.fallback(|| async { AppError::NotFound });

    // Register middleware
    let r = crate::utils::tracing::add_middleware(r);
    let r = r.layer(DefaultBodyLimit::max(64 * 1024)); // forms only, keep it small
    r.with_state(state)
}
