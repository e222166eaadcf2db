use super::*;

/// Horizontal placement of body text within the layout grid.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BodyOrientation {
  Center,
  #[default]
  Left,
  Right,
}

/// The structural components whose presence and order a theme controls.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MetaRole {
  Byline,
  Cover,
  Intro,
  Slug,
  Title,
}

impl MetaRole {
  #[must_use]
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Byline => "byline",
      Self::Cover => "cover",
      Self::Intro => "intro",
      Self::Slug => "slug",
      Self::Title => "title",
    }
  }
}

impl Display for MetaRole {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for MetaRole {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "byline" => Ok(Self::Byline),
      "cover" => Ok(Self::Cover),
      "intro" => Ok(Self::Intro),
      "slug" => Ok(Self::Slug),
      "title" => Ok(Self::Title),
      other => Err(format!("unknown meta component `{other}`")),
    }
  }
}

/// Presentation settings for exported articles.
///
/// Every field has a default, so a theme file only needs to name the values
/// it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
  pub ad_frequency: u32,
  pub ad_margin: u32,
  pub body_background_color: String,
  pub body_color: String,
  pub body_font: String,
  pub body_line_height: u32,
  pub body_orientation: BodyOrientation,
  pub body_size: u32,
  pub byline_color: String,
  pub byline_font: String,
  pub byline_format: String,
  pub byline_size: u32,
  pub caption_color: String,
  pub caption_font: String,
  pub caption_size: u32,
  pub cover_caption: bool,
  pub enable_advertisement: bool,
  pub header_color: String,
  pub header_font: String,
  pub header_sizes: [u32; 6],
  pub intro_color: String,
  pub intro_font: String,
  pub intro_size: u32,
  pub layout_columns: u32,
  pub layout_columns_override: bool,
  pub layout_gutter: u32,
  pub layout_margin: u32,
  pub layout_width: u32,
  pub meta_component_order: Vec<String>,
  pub meta_component_toggles: BTreeMap<String, bool>,
  pub pullquote_color: String,
  pub pullquote_font: String,
  pub pullquote_size: u32,
  pub title_color: String,
  pub title_font: String,
  pub title_size: u32,
}

impl Default for Theme {
  fn default() -> Self {
    Self {
      ad_frequency: 1,
      ad_margin: 15,
      body_background_color: "#FFFFFF".to_string(),
      body_color: "#4F4F4F".to_string(),
      body_font: "AvenirNext-Regular".to_string(),
      body_line_height: 24,
      body_orientation: BodyOrientation::default(),
      body_size: 18,
      byline_color: "#7C7C7C".to_string(),
      byline_font: "AvenirNext-Medium".to_string(),
      byline_format: "by #author#".to_string(),
      byline_size: 13,
      caption_color: "#4F4F4F".to_string(),
      caption_font: "AvenirNext-Italic".to_string(),
      caption_size: 16,
      cover_caption: false,
      enable_advertisement: true,
      header_color: "#333333".to_string(),
      header_font: "AvenirNext-Bold".to_string(),
      header_sizes: [48, 32, 24, 21, 18, 17],
      intro_color: "#333333".to_string(),
      intro_font: "AvenirNext-Medium".to_string(),
      intro_size: 18,
      layout_columns: 7,
      layout_columns_override: false,
      layout_gutter: 20,
      layout_margin: 100,
      layout_width: 1024,
      meta_component_order: ["cover", "slug", "title", "byline", "intro"]
        .into_iter()
        .map(String::from)
        .collect(),
      meta_component_toggles: BTreeMap::new(),
      pullquote_color: "#53585F".to_string(),
      pullquote_font: "AvenirNext-Bold".to_string(),
      pullquote_size: 48,
      title_color: "#333333".to_string(),
      title_font: "AvenirNext-Bold".to_string(),
      title_size: 48,
    }
  }
}

impl Theme {
  /// Width in columns of body text.
  #[must_use]
  pub fn body_column_span(&self) -> u32 {
    let columns = self.layout_columns();

    match self.body_orientation {
      BodyOrientation::Center => columns.saturating_sub(2).max(1),
      BodyOrientation::Left | BodyOrientation::Right => {
        columns.saturating_sub(1).max(1)
      }
    }
  }

  #[must_use]
  pub fn body_column_start(&self) -> u32 {
    let columns = self.layout_columns();
    let span = self.body_column_span().min(columns);

    match self.body_orientation {
      BodyOrientation::Center => (columns - span) / 2,
      BodyOrientation::Left => 0,
      BodyOrientation::Right => columns - span,
    }
  }

  #[must_use]
  pub fn builder() -> ThemeBuilder {
    ThemeBuilder::default()
  }

  /// Number of layout columns, either overridden or derived from the body
  /// orientation.
  #[must_use]
  pub fn layout_columns(&self) -> u32 {
    if self.layout_columns_override {
      return self.layout_columns.max(1);
    }

    match self.body_orientation {
      BodyOrientation::Center => 9,
      BodyOrientation::Left | BodyOrientation::Right => 7,
    }
  }

  /// Roles default to enabled. Toggle keys naming no known role are ignored.
  #[must_use]
  pub fn meta_component_enabled(&self, role: MetaRole) -> bool {
    self
      .meta_component_toggles
      .iter()
      .find(|(name, _)| {
        name.parse::<MetaRole>().is_ok_and(|parsed| parsed == role)
      })
      .is_none_or(|(_, enabled)| *enabled)
  }

  /// The configured meta component order with unknown, repeated, and
  /// disabled roles removed.
  #[must_use]
  pub fn meta_components(&self) -> Vec<MetaRole> {
    let mut roles = Vec::new();

    for name in &self.meta_component_order {
      let role = match name.parse::<MetaRole>() {
        Ok(role) => role,
        Err(error) => {
          warn!("ignoring meta component: {error}");
          continue;
        }
      };

      if roles.contains(&role) || !self.meta_component_enabled(role) {
        continue;
      }

      roles.push(role);
    }

    roles
  }
}

#[derive(Default)]
pub struct ThemeBuilder {
  inner: Theme,
}

impl ThemeBuilder {
  #[must_use]
  pub fn ad_frequency(self, ad_frequency: u32) -> Self {
    Self {
      inner: Theme {
        ad_frequency,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn ad_margin(self, ad_margin: u32) -> Self {
    Self {
      inner: Theme {
        ad_margin,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn body_orientation(self, body_orientation: BodyOrientation) -> Self {
    Self {
      inner: Theme {
        body_orientation,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn build(self) -> Theme {
    self.inner
  }

  #[must_use]
  pub fn byline_format(self, byline_format: impl Into<String>) -> Self {
    Self {
      inner: Theme {
        byline_format: byline_format.into(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn cover_caption(self, cover_caption: bool) -> Self {
    Self {
      inner: Theme {
        cover_caption,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn enable_advertisement(self, enable_advertisement: bool) -> Self {
    Self {
      inner: Theme {
        enable_advertisement,
        ..self.inner
      },
    }
  }

  /// Pins the column count instead of deriving it from the orientation.
  #[must_use]
  pub fn layout_columns(self, layout_columns: u32) -> Self {
    Self {
      inner: Theme {
        layout_columns,
        layout_columns_override: true,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn layout_gutter(self, layout_gutter: u32) -> Self {
    Self {
      inner: Theme {
        layout_gutter,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn layout_margin(self, layout_margin: u32) -> Self {
    Self {
      inner: Theme {
        layout_margin,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn layout_width(self, layout_width: u32) -> Self {
    Self {
      inner: Theme {
        layout_width,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn meta_component_enabled(self, role: MetaRole, enabled: bool) -> Self {
    let mut inner = self.inner;
    inner
      .meta_component_toggles
      .insert(role.as_str().to_string(), enabled);
    Self { inner }
  }

  #[must_use]
  pub fn meta_component_order<I, S>(self, order: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      inner: Theme {
        meta_component_order: order.into_iter().map(Into::into).collect(),
        ..self.inner
      },
    }
  }
}
