use super::*;

pub(crate) struct RemoveDisallowedNodesStage;

impl Stage for RemoveDisallowedNodesStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    context
      .document()
      .remove_elements("script, style, noscript");

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  test! {
    name: removes_embed_scripts,
    stage: RemoveDisallowedNodesStage,
    content: r#"<blockquote class="twitter-tweet"><p>Hi</p></blockquote><script async src="https://platform.twitter.com/widgets.js"></script>"#,
    expected: r#"<html><head></head><body><blockquote class="twitter-tweet"><p>Hi</p></blockquote></body></html>"#,
  }

  test! {
    name: removes_inline_styles_and_noscript,
    stage: RemoveDisallowedNodesStage,
    content: "<style>.a { color: red; }</style><p>Content</p><noscript>Enable JS</noscript>",
    expected: "<html><head></head><body><p>Content</p></body></html>",
  }

  test! {
    name: leaves_content_untouched,
    stage: RemoveDisallowedNodesStage,
    content: "<p>Actual content</p>",
    expected: "<html><head></head><body><p>Actual content</p></body></html>",
  }
}
