use super::*;

const EMBED_CLASSES: &[&str] = &[
  "instagram-media",
  "is-provider-instagram",
  "wp-block-embed-instagram",
];

pub(crate) struct InstagramMatcher;

impl Matcher for InstagramMatcher {
  fn build(&self, markup: &str) -> Option<Component> {
    embedded_url(markup, &re::INSTAGRAM_URL)
      .map(|url| Component::Instagram(Embed { url }))
  }

  fn matches(&self, node: &NodeRef<'_>) -> bool {
    has_any_class(node, EMBED_CLASSES)
      || wraps_only(node, |descendant| {
        tag_name(descendant) == "blockquote"
          && descendant.has_class("instagram-media")
      })
      || bare_url(node).is_some_and(|url| re::INSTAGRAM_URL.is_match(&url))
  }

  fn name(&self) -> &'static str {
    "instagram"
  }
}
