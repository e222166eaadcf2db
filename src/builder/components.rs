use {
  super::*,
  html_escape::{decode_html_entities, encode_text},
};

const HEADER_CAPTION_LAYOUT: &str = "headerCaptionLayout";
const HEADER_PHOTO_LAYOUT: &str = "headerPhotoLayout";
const HEADER_PHOTO_LAYOUT_WITH_CAPTION: &str = "headerPhotoLayoutWithCaption";

#[derive(Debug, PartialEq)]
struct Cover {
  accessibility_caption: Option<String>,
  caption: Option<String>,
  url: String,
}

/// Arranges the body components around the cover and the meta components.
pub(crate) struct Components<'a> {
  body: Vec<Component>,
  content: &'a Content,
  theme: &'a Theme,
}

impl<'a> Components<'a> {
  /// Top-level components in output order. Meta components ordered before
  /// the cover stay at the top level; everything after the header, body
  /// included, goes into a single container.
  pub(crate) fn build(mut self) -> Vec<Component> {
    let roles = self.theme.meta_components();

    let mut cover = if roles.contains(&MetaRole::Cover) {
      self.cover()
    } else {
      None
    };

    let (mut leading, mut trailing) = (Vec::new(), Vec::new());

    let mut header = None;

    for role in roles {
      if role == MetaRole::Cover {
        header = cover.take().map(|cover| self.header(cover));
        continue;
      }

      let Some(component) = self.meta(role) else {
        continue;
      };

      if header.is_some() {
        trailing.push(component);
      } else {
        leading.push(component);
      }
    }

    let Some(header) = header else {
      leading.append(&mut self.body);
      return leading;
    };

    trailing.append(&mut self.body);

    leading.push(header);

    if !trailing.is_empty() {
      leading.push(Component::Container(Container {
        layout: None,
        components: trailing,
      }));
    }

    leading
  }

  fn byline(&self) -> Option<String> {
    let author = self.content.author.trim();

    if author.is_empty() {
      return None;
    }

    let date = self.content.date.as_deref().map(str::trim).unwrap_or_default();

    let byline = self
      .theme
      .byline_format
      .replace("#author#", author)
      .replace("#date#", date);

    let byline = byline.trim();

    (!byline.is_empty()).then(|| byline.to_string())
  }

  /// Resolves the cover against the first body image, removing that image
  /// from the body when it becomes the cover.
  fn cover(&mut self) -> Option<Cover> {
    let content = self.content;

    let supplied = content.cover.as_ref();
    let supplied_url = supplied.and_then(CoverImage::url);
    let metadata_caption = supplied.and_then(CoverImage::caption);

    let first = self
      .body
      .iter()
      .position(|component| component.photo().is_some());

    let promoted = match (supplied_url, first) {
      (None, Some(index)) => {
        debug!("promoting first body image to cover");
        Some(index)
      }
      (Some(url), Some(index))
        if self.body[index]
          .photo()
          .is_some_and(|photo| same_image(url, &photo.url)) =>
      {
        debug!(url, "cover duplicates first body image");
        Some(index)
      }
      _ => None,
    };

    if let Some(index) = promoted {
      let component = self.body.remove(index);

      if let Some(photo) = component.photo() {
        return Some(Cover {
          accessibility_caption: photo.accessibility_caption.clone(),
          caption: metadata_caption
            .or(photo.caption_text())
            .map(str::to_string),
          url: photo.url.clone(),
        });
      }
    }

    supplied_url.map(|url| Cover {
      accessibility_caption: None,
      caption: metadata_caption.map(str::to_string),
      url: url.to_string(),
    })
  }

  fn header(&self, cover: Cover) -> Component {
    let show_caption = self.theme.cover_caption && cover.caption.is_some();

    let layout = if show_caption {
      HEADER_PHOTO_LAYOUT_WITH_CAPTION
    } else {
      HEADER_PHOTO_LAYOUT
    };

    let mut components = vec![Component::Photo(Photo {
      url: cover.url,
      accessibility_caption: cover.accessibility_caption,
      caption: cover
        .caption
        .clone()
        .map(|text| CaptionDescriptor { text }),
      layout: Some(layout.to_string()),
    })];

    if let Some(caption) = cover.caption.filter(|_| show_caption) {
      components.push(Component::Caption(
        Text::html(encode_text(&caption)).with_layout(HEADER_CAPTION_LAYOUT),
      ));
    }

    Component::Header(Container {
      layout: Some(HEADER_PHOTO_LAYOUT.to_string()),
      components,
    })
  }

  fn meta(&self, role: MetaRole) -> Option<Component> {
    let content = self.content;

    match role {
      MetaRole::Byline => self.byline().map(|byline| {
        Component::Byline(Text::plain(byline).with_layout("bylineLayout"))
      }),
      MetaRole::Cover => None,
      MetaRole::Intro => content
        .intro
        .as_deref()
        .map(|intro| {
          decode_html_entities(&re::TAG.replace_all(intro, ""))
            .trim()
            .to_string()
        })
        .filter(|intro| !intro.is_empty())
        .map(|intro| Component::Intro(Text::plain(intro))),
      MetaRole::Slug => content
        .slug
        .as_deref()
        .map(str::trim)
        .filter(|slug| !slug.is_empty())
        .map(|slug| Component::Slug(Text::plain(slug).with_layout("slugLayout"))),
      MetaRole::Title => Some(content.title.trim())
        .filter(|title| !title.is_empty())
        .map(|title| {
          Component::Title(Text::plain(title).with_layout("titleLayout"))
        }),
    }
  }

  pub(crate) fn new(
    content: &'a Content,
    theme: &'a Theme,
    body: Vec<Component>,
  ) -> Self {
    Self {
      body,
      content,
      theme,
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq, serde_json::json};

  fn photo(url: &str, caption: Option<&str>) -> Component {
    Component::Photo(Photo {
      url: url.to_string(),
      accessibility_caption: None,
      caption: caption.map(|text| CaptionDescriptor {
        text: text.to_string(),
      }),
      layout: Some("photoLayout".to_string()),
    })
  }

  fn paragraph() -> Component {
    Component::Body(Text::html("<p>Hello, World!</p>").with_layout("bodyLayout"))
  }

  fn content(cover: Option<CoverImage>) -> Content {
    Content::new(1, "My Title", "", None, cover, "Author Name")
  }

  fn roles(components: &[Component]) -> Vec<String> {
    components
      .iter()
      .map(|component| component.role().into_owned())
      .collect()
  }

  #[test]
  fn matching_cover_is_taken_from_body() {
    let content = content(Some("http://example.org/uploads/image.jpg".into()));

    let theme = Theme::default();

    let components = Components::new(
      &content,
      &theme,
      vec![
        paragraph(),
        photo("http://example.org/uploads/image-150x150.jpg", Some("Body")),
        photo("http://example.org/uploads/other.jpg", None),
      ],
    )
    .build();

    assert_eq!(
      serde_json::to_value(&components[0]).unwrap(),
      json!({
        "role": "header",
        "layout": "headerPhotoLayout",
        "components": [{
          "role": "photo",
          "URL": "http://example.org/uploads/image-150x150.jpg",
          "caption": { "text": "Body" },
          "layout": "headerPhotoLayout",
        }],
      })
    );

    assert_eq!(
      roles(components[1].children()),
      vec!["title", "byline", "body", "photo"]
    );
  }

  #[test]
  fn leading_gallery_is_skipped_when_finding_first_image() {
    let content = content(Some("http://example.org/uploads/image.jpg".into()));

    let theme = Theme::default();

    let gallery = Component::Gallery(Gallery {
      items: vec![GalleryItem {
        url: "http://example.org/uploads/image-300x200.jpg".into(),
        accessibility_caption: None,
        caption: None,
      }],
      layout: Some("galleryLayout".into()),
    });

    let components = Components::new(
      &content,
      &theme,
      vec![
        gallery,
        photo("http://example.org/uploads/image-150x150.jpg", None),
      ],
    )
    .build();

    assert_eq!(
      components[0].children()[0].photo().map(|photo| photo.url.as_str()),
      Some("http://example.org/uploads/image-150x150.jpg")
    );

    assert_eq!(
      roles(components[1].children()),
      vec!["title", "byline", "gallery"]
    );
  }

  #[test]
  fn unrelated_cover_leaves_body_untouched() {
    let content = content(Some("http://example.org/uploads/cover.jpg".into()));

    let theme = Theme::default();

    let components = Components::new(
      &content,
      &theme,
      vec![paragraph(), photo("http://example.org/uploads/image.jpg", None)],
    )
    .build();

    assert_eq!(
      components[0].children()[0].photo().map(|photo| photo.url.as_str()),
      Some("http://example.org/uploads/cover.jpg")
    );

    assert_eq!(components[1].children().len(), 4);
  }

  #[test]
  fn metadata_caption_wins_and_is_shown() {
    let content = content(Some(CoverImage::Record {
      url: String::new(),
      caption: Some("From metadata".into()),
    }));

    let theme = Theme::builder().cover_caption(true).build();

    let components = Components::new(
      &content,
      &theme,
      vec![photo("http://example.org/a.jpg", Some("From body"))],
    )
    .build();

    assert_eq!(
      serde_json::to_value(&components[0]).unwrap()["components"],
      json!([
        {
          "role": "photo",
          "URL": "http://example.org/a.jpg",
          "caption": { "text": "From metadata" },
          "layout": "headerPhotoLayoutWithCaption",
        },
        {
          "role": "caption",
          "text": "From metadata",
          "format": "html",
          "layout": "headerCaptionLayout",
        },
      ])
    );
  }

  #[test]
  fn meta_before_cover_stays_top_level() {
    let content = content(Some("http://example.org/cover.jpg".into()));

    let theme = Theme::builder()
      .meta_component_order(["byline", "cover", "title"])
      .build();

    let components =
      Components::new(&content, &theme, vec![paragraph()]).build();

    assert_eq!(roles(&components), vec!["byline", "header", "container"]);
    assert_eq!(roles(components[2].children()), vec!["title", "body"]);
  }

  #[test]
  fn disabled_cover_keeps_body_image() {
    let content = content(None);

    let theme = Theme::builder()
      .meta_component_enabled(MetaRole::Cover, false)
      .build();

    let components = Components::new(
      &content,
      &theme,
      vec![photo("http://example.org/a.jpg", None)],
    )
    .build();

    assert_eq!(roles(&components), vec!["title", "byline", "photo"]);
  }

  #[test]
  fn optional_meta_components_render_when_present() {
    let content = Content::new(
      1,
      "My Title",
      "",
      Some("<p>Test <em>intro</em> &amp; more.</p>".into()),
      None,
      "Author Name",
    )
    .with_slug("Breaking")
    .with_date("July 4, 2020");

    let theme = Theme::builder()
      .byline_format("by #author# | #date#")
      .build();

    let components = Components::new(&content, &theme, Vec::new()).build();

    assert_eq!(
      serde_json::to_value(&components).unwrap(),
      json!([
        { "role": "heading", "text": "Breaking", "layout": "slugLayout" },
        { "role": "title", "text": "My Title", "layout": "titleLayout" },
        {
          "role": "byline",
          "text": "by Author Name | July 4, 2020",
          "layout": "bylineLayout",
        },
        { "role": "intro", "text": "Test intro & more." },
      ])
    );
  }

  #[test]
  fn blank_author_drops_byline() {
    let content = Content::new(1, "My Title", "", None, None, "  ");

    let theme = Theme::default();

    assert_eq!(
      roles(&Components::new(&content, &theme, Vec::new()).build()),
      vec!["title"]
    );
  }
}
