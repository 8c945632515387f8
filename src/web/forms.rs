use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(default)]
    pub password: String,
}

/// Query state shared by every list page: `new`/`edit` open the form
/// modal, `notice`/`error` carry one-shot banner messages across the
/// redirect after a mutation.
#[derive(Deserialize)]
pub struct PageQuery {
    pub new: Option<String>,
    pub edit: Option<String>,
    pub notice: Option<String>,
    pub error: Option<String>,
}

#[derive(Deserialize)]
pub struct TestimonialForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rating: String,
}

#[derive(Deserialize)]
pub struct JobForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Deserialize)]
pub struct ThemeForm {
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub mode: String,
    /// Page slug to return to after saving.
    #[serde(default)]
    pub next: String,
}
