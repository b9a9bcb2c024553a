use crate::prelude::*;

pub fn add_routes(router: AppRouter) -> AppRouter {
    router.public_routes(|r| r.route("/contact", get(contact_page).post(contact_form)))
}

#[derive(Template, WebTemplate)]
#[template(path = "contact/send.html")]
struct ContactHtml {
    form: NewContactMessage,
    errors: Vec<FieldError>,
}

async fn contact_page() -> AppResult<impl IntoResponse> {
    Ok(ContactHtml { form: NewContactMessage::default(), errors: Vec::new() })
}

async fn contact_form(
    State(state): State<SharedAppState>,
    Form(form): Form<NewContactMessage>,
) -> AppResult<Response> {
    let errors = validate(&form);
    if !errors.is_empty() {
        // Re-display the form with what they typed and what went wrong
        let html = ContactHtml { form, errors };
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, html).into_response());
    }

    let message = state.store.add(form);
    tracing::info!(
        "contact message {} received from {} ({})",
        message.id,
        message.name,
        message.email
    );

    #[derive(Template, WebTemplate)]
    #[template(path = "contact/sent.html")]
    struct SentHtml;
    Ok(SentHtml.into_response())
}
