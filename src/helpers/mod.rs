//! HTML helper functions used by the section templates

mod html;

pub use html::*;
