//! Core of the quiz admin pages: typed table sorting, expiry highlighting
//! and the shapes of the backend admin actions.

pub mod constants;
pub mod messages;
pub mod presets;
pub mod table;

pub use table::*;
