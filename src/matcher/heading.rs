use super::*;

pub(crate) struct HeadingMatcher;

impl HeadingMatcher {
  fn level(node: &NodeRef<'_>) -> Option<u8> {
    match tag_name(node).as_str() {
      "h1" => Some(1),
      "h2" => Some(2),
      "h3" => Some(3),
      "h4" => Some(4),
      "h5" => Some(5),
      "h6" => Some(6),
      _ => None,
    }
  }
}

impl Matcher for HeadingMatcher {
  fn build(&self, markup: &str) -> Option<Component> {
    let document = dom_query::Document::from(markup);

    let node = root(&document)?;

    let level = Self::level(&node)?;

    if node.text().trim().is_empty() {
      return None;
    }

    Some(Component::Heading(Heading {
      level,
      text: Text::html(node.inner_html().trim()).with_layout("headingLayout"),
    }))
  }

  fn matches(&self, node: &NodeRef<'_>) -> bool {
    Self::level(node).is_some()
  }

  fn name(&self) -> &'static str {
    "heading"
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq, serde_json::json};

  #[test]
  fn keeps_inline_markup_and_level() {
    let component = HeadingMatcher
      .build("<h4>Breaking <em>news</em></h4>")
      .unwrap();

    assert_eq!(
      serde_json::to_value(&component).unwrap(),
      json!({
        "role": "heading4",
        "text": "Breaking <em>news</em>",
        "format": "html",
        "layout": "headingLayout",
      })
    );
  }

  #[test]
  fn empty_heading_builds_nothing() {
    assert_eq!(HeadingMatcher.build("<h2> </h2>"), None);
  }
}
