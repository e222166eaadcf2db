use super::*;

const GALLERY_CLASSES: &[&str] = &[
  "blocks-gallery-grid",
  "gallery",
  "tiled-gallery",
  "wp-block-gallery",
  "wp-block-jetpack-slideshow",
];

const ITEM_CAPTION_SELECTOR: &str =
  "figcaption, .gallery-caption, .wp-caption-text";

/// Claims block editor galleries, slideshows, and rendered classic
/// galleries.
pub(crate) struct GalleryMatcher;

impl GalleryMatcher {
  /// Caption closest to `image`, searched in ancestors below `root` that
  /// hold no other image.
  fn item_caption(image: &NodeRef<'_>, root: &NodeRef<'_>) -> Option<String> {
    let mut current = image.parent();

    while let Some(ancestor) = current {
      if ancestor.id == root.id {
        break;
      }

      let scope = Selection::from(ancestor.clone());

      if scope.select("img").length() > 1 {
        break;
      }

      let captions = scope.select(ITEM_CAPTION_SELECTOR);

      if captions.length() > 0 {
        let text = captions.text();
        let text = text.trim();
        return (!text.is_empty()).then(|| text.to_string());
      }

      current = ancestor.parent();
    }

    None
  }
}

impl Matcher for GalleryMatcher {
  fn build(&self, markup: &str) -> Option<Component> {
    let document = dom_query::Document::from(markup);

    let root = root(&document)?;

    let items = Selection::from(root.clone())
      .select("img")
      .nodes()
      .iter()
      .filter_map(|image| {
        let url = non_empty_attr(image, "src")
          .or_else(|| non_empty_attr(image, "data-src"))?;

        Some(GalleryItem {
          url,
          accessibility_caption: non_empty_attr(image, "alt"),
          caption: Self::item_caption(image, &root)
            .map(|text| CaptionDescriptor { text }),
        })
      })
      .collect::<Vec<GalleryItem>>();

    if items.is_empty() {
      return None;
    }

    Some(Component::Gallery(Gallery {
      items,
      layout: Some("galleryLayout".to_string()),
    }))
  }

  fn matches(&self, node: &NodeRef<'_>) -> bool {
    has_any_class(node, GALLERY_CLASSES)
  }

  fn name(&self) -> &'static str {
    "gallery"
  }
}
