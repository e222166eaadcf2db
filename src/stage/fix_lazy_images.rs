use super::*;

const LAZY_SOURCE_ATTRIBUTES: &[&str] =
  &["data-src", "data-lazy-src", "data-orig-file", "data-original"];

const LAZY_SRCSET_ATTRIBUTES: &[&str] = &["data-srcset", "data-lazy-srcset"];

/// Copies lazy-loading image sources into `src`/`srcset` so the exported
/// photo points at the real file instead of a placeholder.
pub(crate) struct FixLazyImagesStage;

impl Stage for FixLazyImagesStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let document = context.document();

    for image in document.select_nodes("img") {
      if Self::is_placeholder(image.attr("src").as_deref())
        && let Some(source) = Self::first_attribute(&image, LAZY_SOURCE_ATTRIBUTES)
      {
        image.set_attr("src", &source);
      }

      if image.attr("srcset").is_none()
        && let Some(srcset) = Self::first_attribute(&image, LAZY_SRCSET_ATTRIBUTES)
      {
        image.set_attr("srcset", &srcset);
      }
    }

    Ok(())
  }
}

impl FixLazyImagesStage {
  fn first_attribute(node: &NodeRef<'_>, names: &[&str]) -> Option<String> {
    names
      .iter()
      .filter_map(|name| node.attr(name))
      .map(|value| value.trim().to_string())
      .find(|value| !value.is_empty())
  }

  fn is_placeholder(src: Option<&str>) -> bool {
    src.is_none_or(|src| {
      let src = src.trim();
      src.is_empty() || src.to_ascii_lowercase().starts_with("data:")
    })
  }
}
