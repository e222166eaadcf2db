use super::*;

const EMBED_CLASSES: &[&str] = &[
  "is-provider-vimeo",
  "is-provider-youtube",
  "wp-block-embed-vimeo",
  "wp-block-embed-youtube",
];

const IFRAME_WRAPPERS: &[&str] = &["div", "figure", "p", "span"];

pub(crate) struct EmbedWebVideoMatcher;

impl EmbedWebVideoMatcher {
  /// The embeddable player address for a YouTube or Vimeo link.
  fn player_url(candidate: &str) -> Option<String> {
    if let Some(captures) = re::YOUTUBE_URL.captures(candidate) {
      return Some(format!("https://www.youtube.com/embed/{}", &captures["id"]));
    }

    re::VIMEO_URL
      .captures(candidate)
      .map(|captures| format!("https://player.vimeo.com/video/{}", &captures["id"]))
  }

  fn plays(node: &NodeRef<'_>) -> bool {
    node
      .attr("src")
      .is_some_and(|src| Self::player_url(src.trim()).is_some())
  }
}

impl Matcher for EmbedWebVideoMatcher {
  fn build(&self, markup: &str) -> Option<Component> {
    let markup = markup.trim();

    let url = Self::player_url(markup).or_else(|| {
      candidate_urls(&dom_query::Document::from(markup))
        .iter()
        .find_map(|candidate| Self::player_url(candidate))
    })?;

    Some(Component::EmbedWebVideo(Embed { url }))
  }

  fn matches(&self, node: &NodeRef<'_>) -> bool {
    let name = tag_name(node);

    if name == "iframe" {
      return Self::plays(node);
    }

    if has_any_class(node, EMBED_CLASSES) {
      return true;
    }

    if IFRAME_WRAPPERS.contains(&name.as_str())
      && wraps_only(node, |descendant| {
        tag_name(descendant) == "iframe" && Self::plays(descendant)
      })
    {
      return true;
    }

    bare_url(node).is_some_and(|url| Self::player_url(&url).is_some())
  }

  fn name(&self) -> &'static str {
    "embed-web-video"
  }
}
