use super::*;

mod components;
mod layouts;
mod styles;

pub(crate) use {
  components::Components,
  layouts::{ComponentLayouts, document_layout},
  styles::text_styles,
};
