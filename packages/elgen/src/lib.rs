//! # elgen
//!
//! Build configured DOM elements from tagged text with attached properties.
//!
//! Pick a tag, optionally attach a [`PropertyMap`], then hand over a [`TaggedText`]: the result is a
//! freshly allocated element from whatever [`Document`] you are targeting. The [`text!`] macro turns
//! a format string into tagged text, the way a template literal would.
//!
//! ```rust
//! use elgen::prelude::*;
//!
//! let document = VirtualDocument::new();
//! let name = "World";
//!
//! let greeting = tags::div(&document).as_tag(text!("Hello, {name}!")).unwrap();
//! assert_eq!(greeting.text_content(), "Hello, World!");
//!
//! let score = tags::span(&document)
//!     .with_props(props! { "className" => "big" })
//!     .build(text!("Score: {}", 42))
//!     .unwrap();
//! assert_eq!(score.property("className"), Some(&Value::from("big")));
//! ```
//!
//! Nothing is escaped: values are spliced into the text content as-is, and the element is never
//! attached to a tree.

#![warn(missing_docs)]

mod config;
mod document;
mod error;
mod factory;
mod generator;
mod props;
mod tagged;
mod value;
mod virtual_dom;

#[cfg(feature = "web")]
pub mod web;

pub mod tags;

mod flattened_exports {
    pub use crate::config::*;
    pub use crate::document::*;
    pub use crate::error::*;
    pub use crate::factory::*;
    pub use crate::generator::*;
    pub use crate::props::*;
    pub use crate::tagged::*;
    pub use crate::value::*;
    pub use crate::virtual_dom::*;

    pub use elgen_macro::text;
}

pub use flattened_exports::*;

/// Everything needed to build elements, in one import.
pub mod prelude {
    pub use crate::flattened_exports::*;
    pub use crate::props;
    pub use crate::tags;
}

// So the `text!` macro can refer to `::elgen` from inside this crate too.
extern crate self as elgen;
