use {super::*, serde::Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
  Html,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Text {
  pub text: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub format: Option<Format>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub layout: Option<String>,
}

impl Text {
  pub(crate) fn html(text: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      format: Some(Format::Html),
      layout: None,
    }
  }

  pub(crate) fn plain(text: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      format: None,
      layout: None,
    }
  }

  #[must_use]
  pub(crate) fn with_layout(self, layout: &str) -> Self {
    Self {
      layout: Some(layout.to_string()),
      ..self
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
  #[serde(skip)]
  pub level: u8,
  #[serde(flatten)]
  pub text: Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptionDescriptor {
  pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
  #[serde(rename = "URL")]
  pub url: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub accessibility_caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<CaptionDescriptor>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub layout: Option<String>,
}

impl Photo {
  pub(crate) fn caption_text(&self) -> Option<&str> {
    self.caption.as_ref().map(|caption| caption.text.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gallery {
  pub items: Vec<GalleryItem>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub layout: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
  #[serde(rename = "URL")]
  pub url: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub accessibility_caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<CaptionDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Video {
  #[serde(rename = "URL")]
  pub url: String,
  #[serde(rename = "stillURL", skip_serializing_if = "Option::is_none")]
  pub still_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub layout: Option<String>,
}

/// A component identified entirely by the URL of the embedded resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
  #[serde(rename = "URL")]
  pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Container {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub layout: Option<String>,
  pub components: Vec<Component>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Divider {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub layout: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
  Body(Text),
  Byline(Text),
  Caption(Text),
  Container(Container),
  Divider(Divider),
  EmbedWebVideo(Embed),
  FacebookPost(Embed),
  Gallery(Gallery),
  Header(Container),
  Heading(Heading),
  Instagram(Embed),
  Intro(Text),
  Photo(Photo),
  Pullquote(Text),
  Quote(Text),
  Slug(Text),
  Title(Text),
  Tweet(Embed),
  Video(Video),
}

impl Component {
  pub(crate) fn children(&self) -> &[Component] {
    match self {
      Self::Container(container) | Self::Header(container) => {
        &container.components
      }
      _ => &[],
    }
  }

  /// Image URL slots that may be swapped for bundled copies.
  pub(crate) fn image_urls_mut(&mut self) -> Vec<&mut String> {
    match self {
      Self::Container(container) | Self::Header(container) => container
        .components
        .iter_mut()
        .flat_map(Component::image_urls_mut)
        .collect(),
      Self::Gallery(gallery) => {
        gallery.items.iter_mut().map(|item| &mut item.url).collect()
      }
      Self::Photo(photo) => vec![&mut photo.url],
      Self::Video(video) => video.still_url.iter_mut().collect(),
      _ => Vec::new(),
    }
  }

  /// The photo this component presents, either directly or as the leading
  /// member of a captioned container.
  pub(crate) fn photo(&self) -> Option<&Photo> {
    match self {
      Self::Photo(photo) => Some(photo),
      Self::Container(container) => match container.components.first() {
        Some(Self::Photo(photo)) => Some(photo),
        _ => None,
      },
      _ => None,
    }
  }

  #[must_use]
  pub fn role(&self) -> Cow<'static, str> {
    Cow::Borrowed(match self {
      Self::Body(_) => "body",
      Self::Byline(_) => "byline",
      Self::Caption(_) => "caption",
      Self::Container(_) => "container",
      Self::Divider(_) => "divider",
      Self::EmbedWebVideo(_) => "embedwebvideo",
      Self::FacebookPost(_) => "facebook_post",
      Self::Gallery(_) => "gallery",
      Self::Header(_) => "header",
      Self::Heading(heading) => {
        return Cow::Owned(format!("heading{}", heading.level));
      }
      Self::Instagram(_) => "instagram",
      Self::Intro(_) => "intro",
      Self::Photo(_) => "photo",
      Self::Pullquote(_) => "pullquote",
      Self::Quote(_) => "quote",
      Self::Slug(_) => "heading",
      Self::Title(_) => "title",
      Self::Tweet(_) => "tweet",
      Self::Video(_) => "video",
    })
  }
}

#[derive(Serialize)]
struct Tagged<'a, T> {
  role: Cow<'static, str>,
  #[serde(flatten)]
  payload: &'a T,
}

impl Serialize for Component {
  fn serialize<S: Serializer>(
    &self,
    serializer: S,
  ) -> Result<S::Ok, S::Error> {
    let role = self.role();

    match self {
      Self::Body(text)
      | Self::Byline(text)
      | Self::Caption(text)
      | Self::Intro(text)
      | Self::Pullquote(text)
      | Self::Quote(text)
      | Self::Slug(text)
      | Self::Title(text) => Tagged {
        role,
        payload: text,
      }
      .serialize(serializer),
      Self::Container(container) | Self::Header(container) => Tagged {
        role,
        payload: container,
      }
      .serialize(serializer),
      Self::Divider(divider) => Tagged {
        role,
        payload: divider,
      }
      .serialize(serializer),
      Self::EmbedWebVideo(embed)
      | Self::FacebookPost(embed)
      | Self::Instagram(embed)
      | Self::Tweet(embed) => Tagged {
        role,
        payload: embed,
      }
      .serialize(serializer),
      Self::Gallery(gallery) => Tagged {
        role,
        payload: gallery,
      }
      .serialize(serializer),
      Self::Heading(heading) => Tagged {
        role,
        payload: heading,
      }
      .serialize(serializer),
      Self::Photo(photo) => Tagged {
        role,
        payload: photo,
      }
      .serialize(serializer),
      Self::Video(video) => Tagged {
        role,
        payload: video,
      }
      .serialize(serializer),
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq, serde_json::json};

  #[test]
  fn serializes_role_alongside_payload() {
    let component = Component::FacebookPost(Embed {
      url: "https://www.facebook.com/page/posts/1".into(),
    });

    assert_eq!(
      serde_json::to_value(&component).unwrap(),
      json!({
        "role": "facebook_post",
        "URL": "https://www.facebook.com/page/posts/1",
      })
    );
  }

  #[test]
  fn heading_role_carries_level() {
    let component = Component::Heading(Heading {
      level: 3,
      text: Text::html("Section"),
    });

    assert_eq!(
      serde_json::to_value(&component).unwrap(),
      json!({ "role": "heading3", "text": "Section", "format": "html" })
    );
  }

  #[test]
  fn nested_containers_serialize_recursively() {
    let component = Component::Container(Container {
      layout: None,
      components: vec![
        Component::Video(Video {
          url: "https://www.example.org/test.mp4".into(),
          still_url: None,
          layout: None,
        }),
        Component::Caption(Text::html("caption")),
      ],
    });

    assert_eq!(
      serde_json::to_value(&component).unwrap(),
      json!({
        "role": "container",
        "components": [
          { "role": "video", "URL": "https://www.example.org/test.mp4" },
          { "role": "caption", "text": "caption", "format": "html" },
        ],
      })
    );
  }

  #[test]
  fn photo_is_found_inside_captioned_container() {
    let photo = Photo {
      url: "a.jpg".into(),
      ..Photo::default()
    };

    let component = Component::Container(Container {
      layout: None,
      components: vec![
        Component::Photo(photo.clone()),
        Component::Caption(Text::html("A")),
      ],
    });

    assert_eq!(component.photo(), Some(&photo));
    assert_eq!(Component::Caption(Text::html("A")).photo(), None);
  }
}
