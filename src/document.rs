use super::*;

pub(crate) struct Document<'a> {
  document: &'a mut dom_query::Document,
}

impl<'a> Document<'a> {
  /// Children of `<body>`, in document order.
  pub(crate) fn body_nodes(&self) -> Vec<NodeRef<'_>> {
    self
      .document
      .select("body")
      .nodes()
      .first()
      .map(NodeRef::children)
      .unwrap_or_default()
  }

  pub(crate) fn element_count(&self) -> usize {
    self
      .document
      .root()
      .descendants()
      .into_iter()
      .filter(NodeRef::is_element)
      .count()
  }

  pub(crate) fn new(document: &'a mut dom_query::Document) -> Self {
    Document { document }
  }

  pub(crate) fn remove_elements(&mut self, selector: &str) {
    self.document.select(selector).remove();
  }

  pub(crate) fn select_nodes(&self, selector: &str) -> Vec<NodeRef<'_>> {
    self.document.select(selector).nodes().to_vec()
  }
}
