use super::*;

fn style(font: &str, size: u32, color: &str) -> TextStyle {
  TextStyle {
    font_name: font.to_string(),
    font_size: size,
    text_color: color.to_string(),
    ..TextStyle::default()
  }
}

/// `default-<role>` text styles, applied by the platform to every component
/// of that role.
pub(crate) fn text_styles(theme: &Theme) -> BTreeMap<String, TextStyle> {
  let mut styles = BTreeMap::new();

  styles.insert(
    "default-body".to_string(),
    TextStyle {
      line_height: Some(theme.body_line_height),
      ..style(&theme.body_font, theme.body_size, &theme.body_color)
    },
  );

  styles.insert(
    "default-byline".to_string(),
    style(&theme.byline_font, theme.byline_size, &theme.byline_color),
  );

  styles.insert(
    "default-caption".to_string(),
    style(&theme.caption_font, theme.caption_size, &theme.caption_color),
  );

  styles.insert(
    "default-heading".to_string(),
    style(&theme.header_font, theme.header_sizes[5], &theme.header_color),
  );

  for (level, size) in (1..).zip(theme.header_sizes) {
    styles.insert(
      format!("default-heading{level}"),
      style(&theme.header_font, size, &theme.header_color),
    );
  }

  styles.insert(
    "default-intro".to_string(),
    style(&theme.intro_font, theme.intro_size, &theme.intro_color),
  );

  styles.insert(
    "default-pullquote".to_string(),
    style(&theme.pullquote_font, theme.pullquote_size, &theme.pullquote_color),
  );

  styles.insert(
    "default-quote".to_string(),
    TextStyle {
      line_height: Some(theme.body_line_height),
      ..style(&theme.body_font, theme.body_size, &theme.body_color)
    },
  );

  styles.insert(
    "default-title".to_string(),
    style(&theme.title_font, theme.title_size, &theme.title_color),
  );

  styles
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  #[test]
  fn heading_styles_follow_size_scale() {
    let styles = text_styles(&Theme::default());

    assert_eq!(styles["default-heading1"].font_size, 48);
    assert_eq!(styles["default-heading6"].font_size, 17);
    assert_eq!(styles["default-heading"].font_size, 17);
  }

  #[test]
  fn body_style_carries_line_height() {
    let style = &text_styles(&Theme::default())["default-body"];

    assert_eq!(style.font_name, "AvenirNext-Regular");
    assert_eq!(style.line_height, Some(24));
  }
}
