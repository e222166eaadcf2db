use super::*;

const CAPTION_SELECTOR: &str = "figcaption, .wp-caption-text";

const IMAGE_WRAPPERS: &[&str] = &["a", "div", "p", "picture", "span"];

pub(crate) struct ImageMatcher;

impl Matcher for ImageMatcher {
  fn build(&self, markup: &str) -> Option<Component> {
    let document = dom_query::Document::from(markup);

    let image = document.select("img").nodes().first().cloned()?;

    let url = non_empty_attr(&image, "src")
      .or_else(|| non_empty_attr(&image, "data-src"))?;

    let caption = document.select(CAPTION_SELECTOR);

    let caption_text = caption.text();
    let caption_text = caption_text.trim();

    let photo = Photo {
      url,
      accessibility_caption: non_empty_attr(&image, "alt"),
      caption: (!caption_text.is_empty()).then(|| CaptionDescriptor {
        text: caption_text.to_string(),
      }),
      layout: Some("photoLayout".to_string()),
    };

    if photo.caption.is_none() {
      return Some(Component::Photo(photo));
    }

    Some(Component::Container(Container {
      layout: None,
      components: vec![
        Component::Photo(photo),
        Component::Caption(
          Text::html(caption.inner_html().trim()).with_layout("captionLayout"),
        ),
      ],
    }))
  }

  fn matches(&self, node: &NodeRef<'_>) -> bool {
    let name = tag_name(node);

    if name == "img" {
      return true;
    }

    let scope = Selection::from(node.clone());

    if scope.select("img").length() != 1 {
      return false;
    }

    if name == "figure" || node.has_class("wp-caption") {
      return true;
    }

    IMAGE_WRAPPERS.contains(&name.as_str()) && node.text().trim().is_empty()
  }

  fn name(&self) -> &'static str {
    "image"
  }
}
