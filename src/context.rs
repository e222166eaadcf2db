use super::*;

pub(crate) struct Context<'a> {
  html: &'a mut dom_query::Document,
  options: &'a ExportOptions,
}

impl<'a> Context<'a> {
  pub(crate) fn document(&mut self) -> Document<'_> {
    Document::new(&mut *self.html)
  }

  pub(crate) fn new(
    html: &'a mut dom_query::Document,
    options: &'a ExportOptions,
  ) -> Self {
    Self { html, options }
  }

  pub(crate) fn options(&self) -> &ExportOptions {
    self.options
  }
}
