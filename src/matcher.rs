use {super::*, html_escape::encode_text};

mod body;
mod divider;
mod embed_web_video;
mod facebook;
mod gallery;
mod heading;
mod image;
mod instagram;
mod quote;
mod tweet;
mod video;

pub(crate) use {
  body::BodyMatcher, divider::DividerMatcher,
  embed_web_video::EmbedWebVideoMatcher, facebook::FacebookMatcher,
  gallery::GalleryMatcher, heading::HeadingMatcher, image::ImageMatcher,
  instagram::InstagramMatcher, quote::QuoteMatcher, tweet::TweetMatcher,
  video::VideoMatcher,
};

pub(crate) const BODY_LAYOUT: &str = "bodyLayout";

/// Elements that only group other blocks and are descended into when no
/// matcher claims them.
const BLOCK_CONTAINERS: &[&str] = &[
  "article", "aside", "div", "figure", "footer", "header", "main", "section",
];

/// Elements that carry content of their own even without text.
const MEDIA: &[&str] = &["audio", "blockquote", "iframe", "img", "video"];

/// Claims one markup shape and turns it into a component.
pub(crate) trait Matcher {
  /// Builds the component from the claimed node's markup. Returns `None`
  /// when the markup turns out not to hold what the matcher needs.
  fn build(&self, markup: &str) -> Option<Component>;

  fn matches(&self, node: &NodeRef<'_>) -> bool;

  fn name(&self) -> &'static str;
}

pub(crate) struct ComponentFactory {
  matchers: Vec<Box<dyn Matcher>>,
}

impl Default for ComponentFactory {
  fn default() -> Self {
    Self {
      matchers: vec![
        Box::new(GalleryMatcher),
        Box::new(VideoMatcher),
        Box::new(EmbedWebVideoMatcher),
        Box::new(FacebookMatcher),
        Box::new(InstagramMatcher),
        Box::new(TweetMatcher),
        Box::new(ImageMatcher),
        Box::new(HeadingMatcher),
        Box::new(QuoteMatcher),
        Box::new(DividerMatcher),
        Box::new(BodyMatcher),
      ],
    }
  }
}

impl ComponentFactory {
  fn claimant(&self, node: &NodeRef<'_>) -> Option<&dyn Matcher> {
    self
      .matchers
      .iter()
      .map(Box::as_ref)
      .find(|matcher| matcher.matches(node))
  }

  fn collect(&self, node: &NodeRef<'_>, components: &mut Vec<Component>) {
    if node.is_text() {
      let text = node.text();

      if !text.trim().is_empty() {
        components.push(Self::paragraph(&encode_text(text.trim())));
      }

      return;
    }

    if !node.is_element() {
      return;
    }

    if let Some(matcher) = self.claimant(node) {
      match matcher.build(&node.html()) {
        Some(component) => {
          debug!(matcher = matcher.name(), role = %component.role(), "claimed node");
          components.push(component);
        }
        None => {
          debug!(matcher = matcher.name(), "claimed node produced no component");
        }
      }

      return;
    }

    let children = node.children();

    if children
      .iter()
      .any(|child| child.is_element() && self.is_block(child))
    {
      for child in &children {
        self.collect(child, components);
      }

      return;
    }

    let inner = node.inner_html();

    if !node.text().trim().is_empty() {
      components.push(Self::paragraph(inner.trim()));
    }
  }

  /// Splits body nodes into components, in document order.
  pub(crate) fn components(&self, nodes: &[NodeRef<'_>]) -> Vec<Component> {
    let mut components = Vec::new();

    for node in nodes {
      self.collect(node, &mut components);
    }

    components
  }

  fn is_block(&self, node: &NodeRef<'_>) -> bool {
    BLOCK_CONTAINERS.contains(&tag_name(node).as_str())
      || self.claimant(node).is_some()
  }

  fn paragraph(html: &str) -> Component {
    Component::Body(Text::html(format!("<p>{html}</p>")).with_layout(BODY_LAYOUT))
  }
}

/// The URL a node consists of, when its whole text is a single link.
pub(crate) fn bare_url(node: &NodeRef<'_>) -> Option<String> {
  let text = node.text();
  let text = text.trim();

  if !text.starts_with("http") || text.contains(char::is_whitespace) {
    return None;
  }

  node
    .descendants()
    .iter()
    .filter(|descendant| descendant.is_element())
    .all(|descendant| matches!(tag_name(descendant).as_str(), "a" | "br"))
    .then(|| text.to_string())
}

/// Attribute values and wrapper texts which may hold an embedded resource's
/// URL, in document order.
pub(crate) fn candidate_urls(document: &dom_query::Document) -> Vec<String> {
  let mut candidates = Vec::new();

  for node in document
    .select("[href], [data-href], [data-instgrm-permalink], [cite]")
    .nodes()
  {
    for attribute in ["data-instgrm-permalink", "data-href", "href", "cite"] {
      if let Some(value) = node.attr(attribute) {
        candidates.push(value.trim().to_string());
      }
    }
  }

  for frame in document.select("iframe[src]").nodes() {
    if let Some(src) = frame.attr("src") {
      candidates.push(src.trim().to_string());
    }
  }

  for wrapper in document.select(".wp-block-embed__wrapper").nodes() {
    candidates.push(wrapper.text().trim().to_string());
  }

  candidates.push(document.select("body").text().trim().to_string());

  candidates
}

/// Finds the first URL in `markup` matching `pattern`. Markup consisting of
/// just a URL is checked directly. A `url` capture group, when the pattern
/// has one, narrows the result.
pub(crate) fn embedded_url(markup: &str, pattern: &Regex) -> Option<String> {
  let markup = markup.trim();

  let extract = |candidate: &str| {
    pattern.captures(candidate).and_then(|captures| {
      captures
        .name("url")
        .or_else(|| captures.get(0))
        .map(|url| url.as_str().to_string())
    })
  };

  if let Some(url) = extract(markup) {
    return Some(url);
  }

  let document = dom_query::Document::from(markup);

  candidate_urls(&document)
    .iter()
    .find_map(|candidate| extract(candidate))
}

pub(crate) fn has_any_class(node: &NodeRef<'_>, classes: &[&str]) -> bool {
  classes.iter().any(|class| node.has_class(class))
}

/// Non-empty, trimmed attribute value.
pub(crate) fn non_empty_attr(node: &NodeRef<'_>, name: &str) -> Option<String> {
  node
    .attr(name)
    .map(|value| value.trim().to_string())
    .filter(|value| !value.is_empty())
}

/// The first element of a parsed fragment.
pub(crate) fn root(document: &dom_query::Document) -> Option<NodeRef<'_>> {
  document.select("body > *").nodes().first().cloned()
}

pub(crate) fn tag_name(node: &NodeRef<'_>) -> String {
  node
    .node_name()
    .map(|name| name.to_ascii_lowercase())
    .unwrap_or_default()
}

/// Whether `node` wraps exactly one descendant satisfying `is_embed`, with no
/// text or media beside it. Figure captions don't count.
pub(crate) fn wraps_only(
  node: &NodeRef<'_>,
  is_embed: impl Fn(&NodeRef<'_>) -> bool,
) -> bool {
  let descendants = node.descendants();

  let embeds = descendants
    .iter()
    .filter(|descendant| descendant.is_element() && is_embed(*descendant))
    .collect::<Vec<&NodeRef<'_>>>();

  let [embed] = embeds.as_slice() else {
    return false;
  };

  let beside = |descendant: &NodeRef| {
    let mut current = Some(descendant.clone());

    while let Some(ancestor) = current {
      if ancestor.id == node.id {
        return true;
      }

      if ancestor.id == embed.id || tag_name(&ancestor) == "figcaption" {
        return false;
      }

      current = ancestor.parent();
    }

    true
  };

  descendants
    .iter()
    .filter(|descendant| beside(*descendant))
    .all(|descendant| {
      if descendant.is_text() {
        descendant.text().trim().is_empty()
      } else {
        !MEDIA.contains(&tag_name(descendant).as_str())
      }
    })
}
