//! Service implementations
//!
//! Real implementations of the collaborator traits that do not depend on the page.

pub mod locale_catalog;

pub use locale_catalog::LocaleCatalog;

#[cfg(test)]
mod tests;
