use super::*;

/// An uploaded media item resolved by the CMS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
  pub url: String,
  #[serde(default)]
  pub alt: Option<String>,
  #[serde(default)]
  pub caption: Option<String>,
}

/// Lookup of attachments by id, used to expand `[gallery ids="..."]`.
pub trait MediaLibrary {
  fn attachment(&self, id: u64) -> Option<Attachment>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryMediaLibrary {
  attachments: BTreeMap<u64, Attachment>,
}

impl InMemoryMediaLibrary {
  pub fn insert(&mut self, id: u64, attachment: Attachment) {
    self.attachments.insert(id, attachment);
  }

  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }
}

impl MediaLibrary for InMemoryMediaLibrary {
  fn attachment(&self, id: u64) -> Option<Attachment> {
    self.attachments.get(&id).cloned()
  }
}
