use {
  anf_exporter::{
    Content, ExportOptions, Exporter, InMemoryMediaLibrary, Theme,
  },
  anyhow::Context,
  arguments::Arguments,
  clap::Parser,
  serde::de::DeserializeOwned,
  std::{
    fs,
    path::{Path, PathBuf},
    process,
  },
  tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
  },
};

mod arguments;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  tracing_subscriber::registry()
    .with(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "anf_exporter=warn".into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error:#}");
    process::exit(1);
  }
}
