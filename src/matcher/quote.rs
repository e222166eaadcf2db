use super::*;

const PULLQUOTE_CLASSES: &[&str] = &["wp-block-pullquote", "pullquote"];

pub(crate) struct QuoteMatcher;

impl Matcher for QuoteMatcher {
  fn build(&self, markup: &str) -> Option<Component> {
    let document = dom_query::Document::from(markup);

    let node = root(&document)?;

    let is_pullquote = has_any_class(&node, PULLQUOTE_CLASSES)
      || document.select("blockquote.wp-block-pullquote").length() > 0;

    let quote = document.select("blockquote");

    let (html, text) = if quote.length() > 0 {
      (quote.inner_html(), quote.text())
    } else {
      (node.inner_html(), node.text())
    };

    if text.trim().is_empty() {
      return None;
    }

    let text = Text::html(html.trim());

    Some(if is_pullquote {
      Component::Pullquote(text.with_layout("pullquoteLayout"))
    } else {
      Component::Quote(text.with_layout("quoteLayout"))
    })
  }

  fn matches(&self, node: &NodeRef<'_>) -> bool {
    tag_name(node) == "blockquote" || has_any_class(node, PULLQUOTE_CLASSES)
  }

  fn name(&self) -> &'static str {
    "quote"
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  #[test]
  fn plain_blockquote_is_a_quote() {
    assert_eq!(
      QuoteMatcher.build("<blockquote><p>Quoted</p></blockquote>"),
      Some(Component::Quote(
        Text::html("<p>Quoted</p>").with_layout("quoteLayout")
      ))
    );
  }

  #[test]
  fn pullquote_block_is_a_pullquote() {
    assert_eq!(
      QuoteMatcher.build(
        r#"<figure class="wp-block-pullquote"><blockquote><p>Pulled</p><cite>Someone</cite></blockquote></figure>"#
      ),
      Some(Component::Pullquote(
        Text::html("<p>Pulled</p><cite>Someone</cite>")
          .with_layout("pullquoteLayout")
      ))
    );
  }

  #[test]
  fn empty_quote_builds_nothing() {
    assert_eq!(QuoteMatcher.build("<blockquote> </blockquote>"), None);
  }
}
