use super::*;

#[cfg(test)]
macro_rules! test {
  (
    name: $name:ident,
    stage: $stage:expr,
    content: $content:expr,
    expected: $expected:expr $(,)?
  ) => {
    #[test]
    fn $name() {
      let mut document = dom_query::Document::from($content);

      let options = ExportOptions::default();

      let mut context = Context::new(&mut document, &options);

      $stage.run(&mut context).unwrap();

      assert_eq!(document.html().to_string(), $expected);
    }
  };
}

mod element_limit;
mod fix_lazy_images;
mod fix_relative_uris;
mod remove_disallowed_nodes;

pub(crate) use {
  element_limit::ElementLimitStage, fix_lazy_images::FixLazyImagesStage,
  fix_relative_uris::FixRelativeUrisStage,
  remove_disallowed_nodes::RemoveDisallowedNodesStage,
};

pub(crate) trait Stage {
  fn run(&mut self, context: &mut Context<'_>) -> Result;
}
