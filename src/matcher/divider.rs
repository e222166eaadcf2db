use super::*;

pub(crate) struct DividerMatcher;

impl Matcher for DividerMatcher {
  fn build(&self, _markup: &str) -> Option<Component> {
    Some(Component::Divider(Divider {
      layout: Some("dividerLayout".to_string()),
    }))
  }

  fn matches(&self, node: &NodeRef<'_>) -> bool {
    tag_name(node) == "hr"
  }

  fn name(&self) -> &'static str {
    "divider"
  }
}
