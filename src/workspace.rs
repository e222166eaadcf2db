use super::*;

const BUNDLE_SCHEME: &str = "bundle://";

/// Images shipped alongside the article, keyed by bundle file name.
#[derive(Debug, Default)]
pub(crate) struct Workspace {
  bundles: BTreeMap<String, String>,
}

impl Workspace {
  /// Registers `url` for bundling and returns the address the article
  /// should use instead. A URL bundled twice keeps its first name.
  pub(crate) fn bundle(&mut self, url: &str) -> String {
    if url.starts_with(BUNDLE_SCHEME) {
      return url.to_string();
    }

    if let Some(name) = self
      .bundles
      .iter()
      .find_map(|(name, source)| (source == url).then_some(name))
    {
      return format!("{BUNDLE_SCHEME}{name}");
    }

    let file_name = Self::file_name(url);

    let mut name = file_name.clone();

    for prefix in 1.. {
      if !self.bundles.contains_key(&name) {
        break;
      }

      name = format!("{prefix}-{file_name}");
    }

    debug!(url, %name, "bundling image");

    self.bundles.insert(name.clone(), url.to_string());

    format!("{BUNDLE_SCHEME}{name}")
  }

  /// Rewrites every image URL in `components` to its bundled address.
  pub(crate) fn bundle_components(&mut self, components: &mut [Component]) {
    for component in components {
      for url in component.image_urls_mut() {
        *url = self.bundle(url);
      }
    }
  }

  fn file_name(url: &str) -> String {
    let name = match Url::parse(url) {
      Ok(parsed) => parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .map(str::to_string)
        .unwrap_or_default(),
      Err(_) => url
        .split(['?', '#'])
        .next()
        .and_then(|path| path.rsplit('/').next())
        .unwrap_or_default()
        .to_string(),
    };

    if name.is_empty() {
      "image".to_string()
    } else {
      name
    }
  }

  pub(crate) fn into_bundles(self) -> BTreeMap<String, String> {
    self.bundles
  }
}
