use crate::prelude::*;

/// Add all `home` routes to the router.
pub fn add_routes(router: AppRouter) -> AppRouter {
    router.public_routes(|r| r.route("/", get(home_page)).route("/privacy", get(privacy_page)))
}

#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
struct HomeHtml {
    url: String,
}

/// Display the front page.
async fn home_page(State(state): State<SharedAppState>) -> AppResult<impl IntoResponse> {
    Ok(HomeHtml { url: state.config.app.url.clone() })
}

#[derive(Template, WebTemplate)]
#[template(path = "privacy.html")]
struct PrivacyHtml;

async fn privacy_page() -> AppResult<impl IntoResponse> {
    Ok(PrivacyHtml)
}
