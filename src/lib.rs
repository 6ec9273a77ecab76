//! SharkblockX — HTML markup generation helpers and a build-once page
//! assembler.
//!
//! Everything here is direct string building: free wrapper functions
//! return finished element markup, and a [`PageBuilder`] accumulates
//! head fragments (stylesheets, scripts, meta tags, a favicon) before
//! concatenating them into one HTML document. Markup is assembled once
//! per request and discarded after output; there is no DOM, no template
//! cache, no diffing.
//!
//! # Example
//!
//! ```
//! use sharkblockx::PageBuilder;
//!
//! let mut page = PageBuilder::new("Home", "en-gb", "UTF-8");
//! page.add_stylesheet("main.css", false);
//! page.add_meta("description", "A small site");
//! let html = page.build();
//! assert!(html.starts_with("<!DOCTYPE HTML>"));
//! ```

pub mod assets;
pub mod attrs;
pub mod block;
pub mod config;
pub mod error;
pub mod page;
pub mod wraps;

pub use attrs::AttrMap;
pub use block::{Block, BlockType};
pub use config::{ConfigError, SiteConfig};
pub use error::BlockError;
pub use page::PageBuilder;
pub use wraps::page::{DocType, OpenGraph, TwitterCard};
