use super::*;

const EMBED_CLASSES: &[&str] =
  &["is-provider-facebook", "wp-block-embed-facebook"];

pub(crate) struct FacebookMatcher;

impl FacebookMatcher {
  /// SDK markup, either the `.fb-post` div or the XFBML `fb:post` element.
  fn is_post(node: &NodeRef<'_>) -> bool {
    (node.has_class("fb-post") && node.attr("data-href").is_some())
      || tag_name(node) == "fb:post"
  }
}

impl Matcher for FacebookMatcher {
  fn build(&self, markup: &str) -> Option<Component> {
    embedded_url(markup, &re::FACEBOOK_URL)
      .map(|url| Component::FacebookPost(Embed { url }))
  }

  fn matches(&self, node: &NodeRef<'_>) -> bool {
    has_any_class(node, EMBED_CLASSES)
      || Self::is_post(node)
      || wraps_only(node, Self::is_post)
      || bare_url(node).is_some_and(|url| re::FACEBOOK_URL.is_match(&url))
  }

  fn name(&self) -> &'static str {
    "facebook"
  }
}
