use super::*;

const VIDEO_WRAPPERS: &[&str] = &["div", "figure", "p"];

pub(crate) struct VideoMatcher;

impl Matcher for VideoMatcher {
  fn build(&self, markup: &str) -> Option<Component> {
    let document = dom_query::Document::from(markup);

    let video = document.select("video").nodes().first().cloned()?;

    let url = non_empty_attr(&video, "src").or_else(|| {
      Selection::from(video.clone())
        .select("source[src]")
        .nodes()
        .iter()
        .find_map(|source| non_empty_attr(source, "src"))
    })?;

    let video = Component::Video(Video {
      url,
      still_url: non_empty_attr(&video, "poster"),
      layout: None,
    });

    let caption = document.select("figcaption").inner_html();

    if caption.trim().is_empty() {
      return Some(video);
    }

    Some(Component::Container(Container {
      layout: None,
      components: vec![video, Component::Caption(Text::html(caption.trim()))],
    }))
  }

  fn matches(&self, node: &NodeRef<'_>) -> bool {
    let name = tag_name(node);

    name == "video"
      || (VIDEO_WRAPPERS.contains(&name.as_str())
        && wraps_only(node, |descendant| tag_name(descendant) == "video"))
  }

  fn name(&self) -> &'static str {
    "video"
  }
}
