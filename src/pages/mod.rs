//! Pages
//!
//! Top-level page components for each route.

pub mod categories;
pub mod entries;

pub use categories::{CategoryFormPage, CategoryListPage};
pub use entries::{EntryFormPage, EntryListPage};
