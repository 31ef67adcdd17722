//! # Reusable UI Widgets
//!
//! Common widgets used across screens. Every widget renders to a `String`;
//! the input loop decides when to print it.

pub mod header;
pub mod nav_bar;
pub mod notifications;
pub mod qr;
pub mod result_panel;

pub use header::render_header;
pub use nav_bar::render_tab_bar;
pub use notifications::{render_notice, render_status};
pub use qr::render_qr;
pub use result_panel::render_result_panel;
