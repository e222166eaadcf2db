use super::*;

pub const FORMAT_VERSION: &str = "1.7";

/// The finished article, ready to be serialized as the platform's
/// `article.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDocument {
  pub version: String,
  pub identifier: String,
  pub language: String,
  pub title: String,
  pub layout: Layout,
  pub components: Vec<Value>,
  pub component_text_styles: BTreeMap<String, TextStyle>,
  pub component_layouts: BTreeMap<String, ComponentLayout>,
  pub document_style: DocumentStyle,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub advertising_settings: Option<AdvertisingSettings>,
}

/// An exported article along with the images it expects to find bundled
/// next to it, keyed by file name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Export {
  pub document: ArticleDocument,
  pub bundles: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
  pub columns: u32,
  pub width: u32,
  pub margin: u32,
  pub gutter: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub top: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub bottom: Option<u32>,
}

impl Margin {
  pub(crate) fn new(top: u32, bottom: u32) -> Self {
    Self {
      top: Some(top),
      bottom: Some(bottom),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentLayout {
  pub column_start: u32,
  pub column_span: u32,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub ignore_document_margin: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub margin: Option<Margin>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub minimum_height: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
  pub font_name: String,
  pub font_size: u32,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub line_height: Option<u32>,
  pub text_color: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub text_alignment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStyle {
  pub background_color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvertisingSettings {
  pub frequency: u32,
  pub layout: AdvertisingLayout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvertisingLayout {
  pub margin: Margin,
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq, serde_json::json};

  #[test]
  fn optional_fields_are_omitted() {
    let layout = ComponentLayout {
      column_start: 0,
      column_span: 7,
      margin: Some(Margin {
        top: None,
        bottom: Some(10),
      }),
      ..ComponentLayout::default()
    };

    assert_eq!(
      serde_json::to_value(layout).unwrap(),
      json!({ "columnStart": 0, "columnSpan": 7, "margin": { "bottom": 10 } })
    );
  }

  #[test]
  fn advertising_settings_nest_margin_under_layout() {
    let settings = AdvertisingSettings {
      frequency: 2,
      layout: AdvertisingLayout {
        margin: Margin::new(15, 15),
      },
    };

    assert_eq!(
      serde_json::to_value(settings).unwrap(),
      json!({ "frequency": 2, "layout": { "margin": { "top": 15, "bottom": 15 } } })
    );
  }
}
