#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("aborting export; {found} elements found (limit: {limit})")]
  ElementLimitExceeded { found: usize, limit: usize },
  #[error("invalid base url: {source}")]
  InvalidBaseUrl {
    #[from]
    source: url::ParseError,
  },
  #[error("failed to serialize component: {source}")]
  Json {
    #[from]
    source: serde_json::Error,
  },
  #[error("article title must not be empty")]
  MissingTitle,
}
