use super::*;

/// Returns the canonical, full-size form of an image URL.
///
/// CMS crops (`-150x150`), `-scaled` and `-rotated` copies, and CDN resize
/// query strings all point back at a single original upload. Normalizing an
/// already canonical URL returns it unchanged.
#[must_use]
pub fn full_size_url(url: &str) -> String {
  let url = url.trim();

  let base = url.split(['?', '#']).next().unwrap_or(url);

  let (directory, file_name) = match base.rfind('/') {
    Some(index) => base.split_at(index + 1),
    None => ("", base),
  };

  let mut file_name = file_name.to_string();

  loop {
    let stripped = re::IMAGE_SIZE_SUFFIX
      .replace(&file_name, "${ext}")
      .into_owned();

    if stripped == file_name {
      break;
    }

    file_name = stripped;
  }

  format!("{directory}{file_name}")
}

/// Whether two image URLs refer to the same original upload.
#[must_use]
pub fn same_image(a: &str, b: &str) -> bool {
  !a.trim().is_empty() && full_size_url(a) == full_size_url(b)
}
