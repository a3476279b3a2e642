//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form chrome and navigation shared by every page while
//! reading the session store from Leptos context.

pub mod form_field;
pub mod nav_bar;
pub mod status_line;
