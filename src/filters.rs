use super::*;

type Filter = Box<dyn Fn(Value) -> Value + Send + Sync>;

/// Per-role hooks run over each serialized component before it is placed
/// in the article.
///
/// ```
/// use anf_exporter::Filters;
///
/// let filters = Filters::new().add("video", |mut video| {
///   video["URL"] = "https://cdn.example.org/movie.mp4".into();
///   video
/// });
/// ```
#[derive(Default)]
pub struct Filters {
  filters: HashMap<String, Vec<Filter>>,
}

impl fmt::Debug for Filters {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("Filters")
      .field("roles", &self.filters.keys().collect::<Vec<&String>>())
      .finish()
  }
}

impl Filters {
  /// Registers `filter` for components with the given role. Filters for the
  /// same role run in registration order.
  #[must_use]
  pub fn add(
    mut self,
    role: impl Into<String>,
    filter: impl Fn(Value) -> Value + Send + Sync + 'static,
  ) -> Self {
    self
      .filters
      .entry(role.into())
      .or_default()
      .push(Box::new(filter));

    self
  }

  /// Filters nested components before their container.
  pub(crate) fn apply(&self, mut component: Value) -> Value {
    if self.filters.is_empty() {
      return component;
    }

    if let Some(children) = component
      .get_mut("components")
      .and_then(Value::as_array_mut)
    {
      for child in children.iter_mut() {
        *child = self.apply(child.take());
      }
    }

    let role = component
      .get("role")
      .and_then(Value::as_str)
      .map(str::to_string);

    let Some(filters) = role.and_then(|role| self.filters.get(&role)) else {
      return component;
    };

    filters
      .iter()
      .fold(component, |component, filter| filter(component))
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.filters.is_empty()
  }

  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq, serde_json::json};

  #[test]
  fn applies_filters_for_matching_role_only() {
    let filters = Filters::new().add("video", |mut video| {
      video["URL"] = json!("https://cdn.example.org/movie.mp4");
      video
    });

    assert_eq!(
      filters.apply(json!({ "role": "video", "URL": "https://example.org/movie.mp4" })),
      json!({ "role": "video", "URL": "https://cdn.example.org/movie.mp4" })
    );

    assert_eq!(
      filters.apply(json!({ "role": "photo", "URL": "a.jpg" })),
      json!({ "role": "photo", "URL": "a.jpg" })
    );
  }

  #[test]
  fn children_are_filtered_before_parents() {
    let filters = Filters::new()
      .add("caption", |mut caption| {
        caption["text"] = json!("filtered");
        caption
      })
      .add("container", |mut container| {
        container["seen"] = container["components"][0]["text"].clone();
        container
      });

    assert_eq!(
      filters.apply(json!({
        "role": "container",
        "components": [{ "role": "caption", "text": "raw" }],
      })),
      json!({
        "role": "container",
        "components": [{ "role": "caption", "text": "filtered" }],
        "seen": "filtered",
      })
    );
  }

  #[test]
  fn filters_for_one_role_run_in_order() {
    let filters = Filters::new()
      .add("body", |mut body| {
        body["text"] = json!(format!("{}a", body["text"].as_str().unwrap()));
        body
      })
      .add("body", |mut body| {
        body["text"] = json!(format!("{}b", body["text"].as_str().unwrap()));
        body
      });

    assert_eq!(
      filters.apply(json!({ "role": "body", "text": "" }))["text"],
      json!("ab")
    );
  }
}
