use thiserror::Error;

/// Failures while binding a rotator to a pointer source.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element matches `{0}`")]
    ElementNotFound(String),
    #[error("element `{0}` is not an HtmlElement")]
    NotAnHtmlElement(String),
    #[error("invalid rotator config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
    #[error("failed to listen for `{event}`: {reason}")]
    Listen { event: &'static str, reason: String },
}
