use super::*;

const TEXT_BLOCKS: &[&str] =
  &["address", "dl", "ol", "p", "pre", "table", "ul"];

pub(crate) struct BodyMatcher;

impl Matcher for BodyMatcher {
  fn build(&self, markup: &str) -> Option<Component> {
    let document = dom_query::Document::from(markup);

    let node = root(&document)?;

    if node.text().trim().is_empty() {
      return None;
    }

    Some(Component::Body(
      Text::html(node.html().trim()).with_layout(BODY_LAYOUT),
    ))
  }

  fn matches(&self, node: &NodeRef<'_>) -> bool {
    TEXT_BLOCKS.contains(&tag_name(node).as_str())
  }

  fn name(&self) -> &'static str {
    "body"
  }
}
