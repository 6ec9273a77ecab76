//! Markup wrapper functions.
//!
//! Every wrapper is a pure function from content/attributes to the
//! finished tag string. [`basic`] covers inline and content elements,
//! [`page`] covers document scaffolding and head tags.

pub mod basic;
pub mod page;
