//! State Management
//!
//! Global toast state plus the pure list/form controllers behind the pages.

pub mod form;
pub mod global;
pub mod list;

pub use form::FormAction;
pub use global::{provide_global_state, GlobalState};
pub use list::ListState;
