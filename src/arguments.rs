use super::*;

#[derive(Parser)]
#[command(name = "anf-export")]
#[command(about = "Convert a CMS post into an article document", long_about = None)]
pub(crate) struct Arguments {
  #[arg(long, value_name = "URL", help = "Resolve relative links against URL")]
  base_url: Option<String>,
  #[arg(
    long,
    help = "Reference images as bundle:// files instead of remote URLs"
  )]
  bundle_images: bool,
  #[arg(value_name = "FILE", help = "Path to the post content JSON")]
  content: PathBuf,
  #[arg(long, default_value = "en", help = "Article language code")]
  language: String,
  #[arg(
    long,
    value_name = "FILE",
    help = "Write the bundled image manifest to FILE"
  )]
  manifest: Option<PathBuf>,
  #[arg(long, value_name = "COUNT", help = "Abort on bodies with more elements")]
  max_elements: Option<usize>,
  #[arg(
    long,
    value_name = "FILE",
    help = "Media library JSON keyed by attachment id"
  )]
  media: Option<PathBuf>,
  #[arg(
    long,
    short,
    value_name = "FILE",
    help = "Write the article to FILE instead of stdout"
  )]
  output: Option<PathBuf>,
  #[arg(long, value_name = "FILE", help = "Theme JSON")]
  theme: Option<PathBuf>,
}

impl Arguments {
  fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json = fs::read_to_string(path)
      .with_context(|| format!("failed to read file from `{}`", path.display()))?;

    serde_json::from_str(&json)
      .with_context(|| format!("failed to parse JSON in `{}`", path.display()))
  }

  pub(crate) fn run(self) -> Result {
    let content = Self::read_json::<Content>(&self.content)?;

    let theme = self
      .theme
      .as_deref()
      .map(Self::read_json::<Theme>)
      .transpose()?
      .unwrap_or_default();

    let media = self
      .media
      .as_deref()
      .map(Self::read_json::<InMemoryMediaLibrary>)
      .transpose()?;

    let mut options = ExportOptions::builder()
      .language(self.language)
      .max_elems_to_parse(self.max_elements)
      .use_remote_images(!self.bundle_images);

    if let Some(base_url) = self.base_url {
      options = options.base_url(base_url);
    }

    let mut exporter = Exporter::new(content, theme, options.build())
      .context("failed to configure exporter")?;

    if let Some(media) = &media {
      exporter = exporter.media(media);
    }

    let export = exporter.export().context("failed to export article")?;

    let document = serde_json::to_string_pretty(&export.document)?;

    match &self.output {
      Some(path) => fs::write(path, document).with_context(|| {
        format!("failed to write article to `{}`", path.display())
      })?,
      None => println!("{document}"),
    }

    if let Some(path) = &self.manifest {
      fs::write(path, serde_json::to_string_pretty(&export.bundles)?)
        .with_context(|| {
          format!("failed to write manifest to `{}`", path.display())
        })?;
    }

    Ok(())
  }
}
