//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod confirm;
pub mod loading;
pub mod nav;
pub mod toast;

pub use confirm::ConfirmDialog;
pub use loading::ListSkeleton;
pub use nav::Nav;
pub use toast::Toast;
