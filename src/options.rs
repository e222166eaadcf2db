use super::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
  pub base_url: Option<String>,
  pub language: String,
  pub max_elems_to_parse: Option<usize>,
  pub use_remote_images: bool,
}

impl Default for ExportOptions {
  fn default() -> Self {
    Self {
      base_url: None,
      language: "en".to_string(),
      max_elems_to_parse: None,
      use_remote_images: true,
    }
  }
}

impl ExportOptions {
  #[must_use]
  pub fn builder() -> ExportOptionsBuilder {
    ExportOptionsBuilder::default()
  }
}

#[derive(Default)]
pub struct ExportOptionsBuilder {
  inner: ExportOptions,
}

impl ExportOptionsBuilder {
  #[must_use]
  pub fn base_url(self, base_url: impl Into<String>) -> Self {
    Self {
      inner: ExportOptions {
        base_url: Some(base_url.into()),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn build(self) -> ExportOptions {
    self.inner
  }

  #[must_use]
  pub fn language(self, language: impl Into<String>) -> Self {
    Self {
      inner: ExportOptions {
        language: language.into(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn max_elems_to_parse(self, max_elems_to_parse: Option<usize>) -> Self {
    Self {
      inner: ExportOptions {
        max_elems_to_parse,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn use_remote_images(self, use_remote_images: bool) -> Self {
    Self {
      inner: ExportOptions {
        use_remote_images,
        ..self.inner
      },
    }
  }
}
