use chrono::{DateTime, Utc};

/// A stored contact form submission.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,

    pub created_at: DateTime<Utc>,
}

/// An unvalidated contact submission, as it comes off the form.
///
/// Missing fields default to the empty string so they fail validation
/// instead of the form decoder. Id and timestamp are assigned by
/// [`ContactStore::add`](crate::store::ContactStore::add), never here.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct NewContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}
