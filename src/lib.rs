//! Converts CMS post markup into a structured article document.
//!
//! Post HTML is parsed, cleaned by a short pipeline of stages, and split into
//! typed [`Component`]s by a list of node matchers. The cover image is
//! resolved against the body's first image, meta components are ordered per
//! the [`Theme`], and layout metadata is derived from the same theme.
//!
//! ```no_run
//! use anf_exporter::{Content, ExportOptions, Exporter, Theme};
//!
//! let content = Content::new(
//!   1,
//!   "My Title",
//!   "<p>Hello, World!</p>",
//!   None,
//!   None,
//!   "Author Name",
//! );
//!
//! let export = Exporter::new(content, Theme::default(), ExportOptions::default())?
//!   .export()?;
//!
//! println!("{}", serde_json::to_string_pretty(&export.document)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use {
  builder::{ComponentLayouts, Components, document_layout, text_styles},
  context::Context,
  document::Document,
  dom_query::{NodeRef, Selection},
  matcher::ComponentFactory,
  pipeline::Pipeline,
  regex::Regex,
  serde::{Deserialize, Serialize},
  serde_json::Value,
  stage::{
    ElementLimitStage, FixLazyImagesStage, FixRelativeUrisStage,
    RemoveDisallowedNodesStage, Stage,
  },
  std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
    fmt::{self, Display, Formatter},
    str::FromStr,
    sync::LazyLock,
  },
  tracing::{debug, warn},
  url::Url,
  workspace::Workspace,
};

pub use crate::{
  article::{
    AdvertisingLayout, AdvertisingSettings, ArticleDocument, ComponentLayout,
    DocumentStyle, Export, FORMAT_VERSION, Layout, Margin, TextStyle,
  },
  component::{
    CaptionDescriptor, Component, Container, Divider, Embed, Format, Gallery,
    GalleryItem, Heading, Photo, Text, Video,
  },
  content::{Content, CoverImage},
  error::Error,
  exporter::Exporter,
  filters::Filters,
  image_url::{full_size_url, same_image},
  media::{Attachment, InMemoryMediaLibrary, MediaLibrary},
  options::{ExportOptions, ExportOptionsBuilder},
  theme::{BodyOrientation, MetaRole, Theme, ThemeBuilder},
};

mod article;
mod builder;
mod component;
mod content;
mod context;
mod document;
mod error;
mod exporter;
mod filters;
mod image_url;
mod matcher;
mod media;
mod options;
mod pipeline;
mod re;
mod shortcode;
mod stage;
mod theme;
mod workspace;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
