use super::*;

/// A post as handed over by the CMS, with every URL already resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
  pub id: u64,
  pub title: String,
  pub body: String,
  #[serde(default)]
  pub intro: Option<String>,
  #[serde(default)]
  pub cover: Option<CoverImage>,
  #[serde(default)]
  pub author: String,
  #[serde(default)]
  pub slug: Option<String>,
  #[serde(default)]
  pub date: Option<String>,
}

impl Content {
  pub fn new(
    id: u64,
    title: impl Into<String>,
    body: impl Into<String>,
    intro: Option<String>,
    cover: Option<CoverImage>,
    author: impl Into<String>,
  ) -> Self {
    Self {
      id,
      title: title.into(),
      body: body.into(),
      intro,
      cover,
      author: author.into(),
      slug: None,
      date: None,
    }
  }

  #[must_use]
  pub fn with_date(self, date: impl Into<String>) -> Self {
    Self {
      date: Some(date.into()),
      ..self
    }
  }

  #[must_use]
  pub fn with_slug(self, slug: impl Into<String>) -> Self {
    Self {
      slug: Some(slug.into()),
      ..self
    }
  }
}

/// The featured image configured for a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoverImage {
  Url(String),
  Record {
    #[serde(default)]
    url: String,
    #[serde(default)]
    caption: Option<String>,
  },
}

impl CoverImage {
  pub(crate) fn caption(&self) -> Option<&str> {
    match self {
      Self::Url(_) => None,
      Self::Record { caption, .. } => caption
        .as_deref()
        .map(str::trim)
        .filter(|caption| !caption.is_empty()),
    }
  }

  pub(crate) fn url(&self) -> Option<&str> {
    let url = match self {
      Self::Url(url) | Self::Record { url, .. } => url.trim(),
    };

    (!url.is_empty()).then_some(url)
  }
}

impl From<&str> for CoverImage {
  fn from(url: &str) -> Self {
    Self::Url(url.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_every_cover_shape() {
    let content: Content = serde_json::from_str(
      r#"{"id": 1, "title": "T", "body": "", "cover": null}"#,
    )
    .unwrap();

    assert_eq!(content.cover, None);

    let content: Content = serde_json::from_str(
      r#"{"id": 1, "title": "T", "body": "", "cover": "http://a/b.jpg"}"#,
    )
    .unwrap();

    assert_eq!(content.cover, Some(CoverImage::from("http://a/b.jpg")));

    let content: Content = serde_json::from_str(
      r#"{"id": 1, "title": "T", "body": "", "cover": {"caption": "Hi", "url": ""}}"#,
    )
    .unwrap();

    assert_eq!(
      content.cover,
      Some(CoverImage::Record {
        url: String::new(),
        caption: Some("Hi".into()),
      })
    );
  }

  #[test]
  fn blank_record_fields_read_as_absent() {
    let cover = CoverImage::Record {
      url: "  ".into(),
      caption: Some(" ".into()),
    };

    assert_eq!(cover.url(), None);
    assert_eq!(cover.caption(), None);
  }
}
