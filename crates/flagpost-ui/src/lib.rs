pub mod badge;
pub mod dialog;
pub mod icon;
pub mod template;

pub use badge::{create_badge, refresh_badge_tooltips};
