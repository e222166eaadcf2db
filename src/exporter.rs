use super::*;

/// Converts one post into an article document.
pub struct Exporter<'a> {
  base_url: Option<Url>,
  content: Content,
  filters: Filters,
  media: Option<&'a dyn MediaLibrary>,
  options: ExportOptions,
  theme: Theme,
}

impl<'a> Exporter<'a> {
  fn advertising_settings(&self) -> Option<AdvertisingSettings> {
    self
      .theme
      .enable_advertisement
      .then(|| AdvertisingSettings {
        frequency: self.theme.ad_frequency,
        layout: AdvertisingLayout {
          margin: Margin::new(self.theme.ad_margin, self.theme.ad_margin),
        },
      })
  }

  /// Body components in document order, before the cover is resolved.
  fn body_components(&self) -> Result<Vec<Component>> {
    let body = shortcode::expand(&self.content.body, self.media);

    let mut html = dom_query::Document::from(body.as_str());

    let mut context = Pipeline::with_default_stages(
      Context::new(&mut html, &self.options),
      self.base_url.as_ref(),
    )
    .run()?;

    let document = context.document();

    let nodes = document.body_nodes();

    Ok(ComponentFactory::default().components(&nodes))
  }

  pub fn export(&self) -> Result<Export> {
    let title = self.content.title.trim();

    if title.is_empty() {
      return Err(Error::MissingTitle);
    }

    let mut components =
      Components::new(&self.content, &self.theme, self.body_components()?)
        .build();

    let mut workspace = Workspace::default();

    if !self.options.use_remote_images {
      workspace.bundle_components(&mut components);
    }

    let components = components
      .iter()
      .map(|component| {
        Ok(self.filters.apply(serde_json::to_value(component)?))
      })
      .collect::<Result<Vec<Value>>>()?;

    let component_layouts =
      ComponentLayouts::new(&self.theme).for_components(&components);

    debug!(
      id = self.content.id,
      components = components.len(),
      "exported article"
    );

    Ok(Export {
      document: ArticleDocument {
        version: FORMAT_VERSION.to_string(),
        identifier: self.content.id.to_string(),
        language: self.options.language.clone(),
        title: title.to_string(),
        layout: document_layout(&self.theme),
        components,
        component_text_styles: text_styles(&self.theme),
        component_layouts,
        document_style: DocumentStyle {
          background_color: self.theme.body_background_color.clone(),
        },
        advertising_settings: self.advertising_settings(),
      },
      bundles: workspace.into_bundles(),
    })
  }

  #[must_use]
  pub fn filters(self, filters: Filters) -> Self {
    Self { filters, ..self }
  }

  #[must_use]
  pub fn media(self, media: &'a dyn MediaLibrary) -> Self {
    Self {
      media: Some(media),
      ..self
    }
  }

  /// Fails when the options carry a base URL that does not parse.
  pub fn new(
    content: Content,
    theme: Theme,
    options: ExportOptions,
  ) -> Result<Self> {
    let base_url = options.base_url.as_deref().map(Url::parse).transpose()?;

    Ok(Self {
      base_url,
      content,
      filters: Filters::default(),
      media: None,
      options,
      theme,
    })
  }
}
