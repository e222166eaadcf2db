use {super::*, std::collections::BTreeSet};

pub(crate) fn document_layout(theme: &Theme) -> Layout {
  Layout {
    columns: theme.layout_columns(),
    width: theme.layout_width,
    margin: theme.layout_margin,
    gutter: theme.layout_gutter,
  }
}

/// Component layout definitions derived from a theme.
pub(crate) struct ComponentLayouts<'a> {
  theme: &'a Theme,
}

impl<'a> ComponentLayouts<'a> {
  fn body_width(&self, margin: Margin) -> ComponentLayout {
    ComponentLayout {
      column_start: self.theme.body_column_start(),
      column_span: self.theme.body_column_span(),
      margin: Some(margin),
      ..ComponentLayout::default()
    }
  }

  fn collect_names(components: &[Value], names: &mut BTreeSet<String>) {
    for component in components {
      if let Some(layout) = component["layout"].as_str() {
        names.insert(layout.to_string());
      }

      if let Some(children) = component["components"].as_array() {
        Self::collect_names(children, names);
      }
    }
  }

  fn definition(&self, name: &str) -> Option<ComponentLayout> {
    Some(match name {
      "bodyLayout" | "photoLayout" | "quoteLayout" => {
        self.body_width(Margin::new(12, 12))
      }
      "bylineLayout" => self.body_width(Margin::new(10, 10)),
      "captionLayout" => self.body_width(Margin {
        top: None,
        bottom: Some(12),
      }),
      "dividerLayout" => self.body_width(Margin::new(15, 15)),
      "galleryLayout" => self.body_width(Margin::new(25, 25)),
      "headerCaptionLayout" => self.body_width(Margin::new(5, 20)),
      "headerPhotoLayout" => self.full_width(None),
      "headerPhotoLayoutWithCaption" => self.full_width(Some(Margin {
        top: None,
        bottom: Some(5),
      })),
      "headingLayout" => self.body_width(Margin::new(25, 10)),
      "pullquoteLayout" => self.body_width(Margin::new(25, 25)),
      "slugLayout" => self.body_width(Margin::new(30, 5)),
      "titleLayout" => self.body_width(Margin::new(30, 0)),
      _ => return None,
    })
  }

  /// Definitions for every layout name referenced by the serialized
  /// `components`, nested components included.
  pub(crate) fn for_components(
    &self,
    components: &[Value],
  ) -> BTreeMap<String, ComponentLayout> {
    let mut names = BTreeSet::new();

    Self::collect_names(components, &mut names);

    names
      .into_iter()
      .filter_map(|name| match self.definition(&name) {
        Some(layout) => Some((name, layout)),
        None => {
          warn!(layout = %name, "no definition for component layout");
          None
        }
      })
      .collect()
  }

  fn full_width(&self, margin: Option<Margin>) -> ComponentLayout {
    ComponentLayout {
      column_start: 0,
      column_span: self.theme.layout_columns(),
      ignore_document_margin: Some(true),
      margin,
      minimum_height: Some("40vh".to_string()),
    }
  }

  pub(crate) fn new(theme: &'a Theme) -> Self {
    Self { theme }
  }
}
