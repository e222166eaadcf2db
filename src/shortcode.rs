use {
  super::*,
  html_escape::{encode_double_quoted_attribute, encode_text},
  regex::Captures,
};

/// Rewrites CMS shortcodes in post markup into plain HTML the matchers
/// understand.
pub(crate) fn expand(body: &str, media: Option<&dyn MediaLibrary>) -> String {
  let body = re::EMBED_SHORTCODE.replace_all(body, |captures: &Captures| {
    format!("<p>{}</p>", captures["url"].trim())
  });

  let body = re::CAPTION_SHORTCODE.replace_all(&body, |captures: &Captures| {
    caption(&captures["attrs"], &captures["inner"])
  });

  let body = re::GALLERY_SHORTCODE.replace_all(&body, |captures: &Captures| {
    gallery(&captures["attrs"], media)
  });

  body.into_owned()
}

fn attributes(raw: &str) -> HashMap<String, String> {
  re::SHORTCODE_ATTRIBUTE
    .captures_iter(raw)
    .map(|captures| {
      let value = ["double", "single", "bare"]
        .iter()
        .find_map(|group| captures.name(group))
        .map(|value| value.as_str().to_string())
        .unwrap_or_default();

      (captures["name"].to_ascii_lowercase(), value)
    })
    .collect()
}

fn caption(raw_attributes: &str, inner: &str) -> String {
  let attributes = attributes(raw_attributes);

  let Some(captures) = re::CAPTIONED_IMAGE.captures(inner) else {
    return inner.to_string();
  };

  let image = &captures["image"];

  let text = match captures["text"].trim() {
    "" => attributes
      .get("caption")
      .map(|caption| encode_text(caption.trim()).into_owned())
      .unwrap_or_default(),
    text => text.to_string(),
  };

  let class = match attributes.get("align") {
    Some(align) => format!("wp-caption {}", encode_double_quoted_attribute(align)),
    None => "wp-caption".to_string(),
  };

  let id = attributes
    .get("id")
    .map(|id| format!(" id=\"{}\"", encode_double_quoted_attribute(id)))
    .unwrap_or_default();

  if text.is_empty() {
    return format!("<figure class=\"{class}\"{id}>{image}</figure>");
  }

  format!(
    "<figure class=\"{class}\"{id}>{image}<figcaption class=\"wp-caption-text\">{text}</figcaption></figure>"
  )
}

fn gallery(raw_attributes: &str, media: Option<&dyn MediaLibrary>) -> String {
  let attributes = attributes(raw_attributes);

  let Some(media) = media else {
    warn!("dropping gallery shortcode; no media library available");
    return String::new();
  };

  let items = attributes
    .get("ids")
    .map(String::as_str)
    .unwrap_or_default()
    .split(',')
    .filter_map(|id| id.trim().parse::<u64>().ok())
    .filter_map(|id| {
      let attachment = media.attachment(id);

      if attachment.is_none() {
        warn!(id, "gallery attachment not found");
      }

      attachment
    })
    .map(|attachment| gallery_item(&attachment))
    .collect::<Vec<String>>();

  if items.is_empty() {
    return String::new();
  }

  format!("<figure class=\"wp-block-gallery\">{}</figure>", items.concat())
}

fn gallery_item(attachment: &Attachment) -> String {
  let caption = attachment
    .caption
    .as_deref()
    .map(str::trim)
    .filter(|caption| !caption.is_empty())
    .map(|caption| format!("<figcaption>{}</figcaption>", encode_text(caption)))
    .unwrap_or_default();

  format!(
    "<figure class=\"wp-block-image\"><img src=\"{}\" alt=\"{}\">{caption}</figure>",
    encode_double_quoted_attribute(&attachment.url),
    encode_double_quoted_attribute(attachment.alt.as_deref().unwrap_or_default()),
  )
}
