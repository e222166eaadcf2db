use super::*;

const URI_ATTRIBUTES: &[&str] = &["href", "src", "poster", "data-href"];

pub(crate) struct FixRelativeUrisStage<'a> {
  base_url: Option<&'a Url>,
}

impl Stage for FixRelativeUrisStage<'_> {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let Some(base_url) = self.base_url else {
      return Ok(());
    };

    let document = context.document();

    for node in document.select_nodes("[href], [src], [poster], [data-href], [srcset]") {
      for attribute in URI_ATTRIBUTES {
        let Some(value) = node.attr(attribute) else {
          continue;
        };

        if value.starts_with('#') || Self::is_javascript_uri(&value) {
          continue;
        }

        node.set_attr(attribute, &Self::resolve_uri(base_url, &value));
      }

      if let Some(srcset) = node.attr("srcset") {
        node.set_attr("srcset", &Self::rewrite_srcset(&srcset, base_url));
      }
    }

    Ok(())
  }
}

impl<'a> FixRelativeUrisStage<'a> {
  fn is_javascript_uri(value: &str) -> bool {
    value
      .trim_start()
      .to_ascii_lowercase()
      .starts_with("javascript:")
  }

  pub(crate) fn new(base_url: Option<&'a Url>) -> Self {
    Self { base_url }
  }

  fn resolve_uri(base_url: &Url, value: &str) -> String {
    if value.is_empty() {
      return value.to_string();
    }

    match Url::parse(value) {
      Ok(_) => value.to_string(),
      Err(_) => base_url
        .join(value)
        .map_or_else(|_| value.to_string(), |url| url.to_string()),
    }
  }

  fn rewrite_srcset(srcset: &str, base_url: &Url) -> String {
    srcset
      .split(',')
      .map(|candidate| {
        let candidate = candidate.trim();

        let mut parts = candidate.split_whitespace();

        let Some(url_part) = parts.next() else {
          return String::new();
        };

        let descriptor = parts.collect::<Vec<_>>().join(" ");
        let resolved = Self::resolve_uri(base_url, url_part);

        if descriptor.is_empty() {
          resolved
        } else {
          format!("{resolved} {descriptor}")
        }
      })
      .filter(|candidate| !candidate.is_empty())
      .collect::<Vec<_>>()
      .join(", ")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn run(content: &str, base_url: &str) -> String {
    let mut document = dom_query::Document::from(content);
    let options = ExportOptions::default();
    let base_url = Url::parse(base_url).unwrap();

    let mut context = Context::new(&mut document, &options);

    FixRelativeUrisStage::new(Some(&base_url))
      .run(&mut context)
      .unwrap();

    document.select("body").inner_html().to_string()
  }

  #[test]
  fn resolves_image_and_link_targets() {
    assert_eq!(
      run(
        r#"<a href="/about"><img src="uploads/a.jpg"></a>"#,
        "https://example.org/2020/07/post/"
      ),
      r#"<a href="https://example.org/about"><img src="https://example.org/2020/07/post/uploads/a.jpg"></a>"#
    );
  }

  #[test]
  fn leaves_absolute_fragment_and_javascript_links() {
    let content = r##"<a href="#top">Top</a><a href="javascript:void(0)">x</a><a href="https://other.org/x">y</a>"##;

    assert_eq!(run(content, "https://example.org/"), content);
  }

  #[test]
  fn resolves_video_poster_and_srcset() {
    assert_eq!(
      run(
        r#"<video poster="still.jpg"></video><img src="/a.jpg" srcset="/a-300x200.jpg 300w, /a-600x400.jpg 600w">"#,
        "https://example.org/"
      ),
      r#"<video poster="https://example.org/still.jpg"></video><img src="https://example.org/a.jpg" srcset="https://example.org/a-300x200.jpg 300w, https://example.org/a-600x400.jpg 600w">"#
    );
  }

  #[test]
  fn does_nothing_without_base_url() {
    let mut document = dom_query::Document::from(r#"<img src="a.jpg">"#);
    let options = ExportOptions::default();

    let mut context = Context::new(&mut document, &options);

    FixRelativeUrisStage::new(None).run(&mut context).unwrap();

    assert_eq!(document.select("img").attr("src").unwrap().to_string(), "a.jpg");
  }
}
