use serde::Deserialize;

/// Error bodies are `{"error": "..."}`; anything else in the body is
/// ignored.
#[derive(Debug, Deserialize, Default)]
pub struct ApiError {
    pub error: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Created {
    pub message: Option<String>,
    pub redirect: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Published {
    pub share_url: Option<String>,
}
