//! Binds the actions menu button controller to the browser DOM.
pub mod action;
pub mod config;
pub mod demo;
pub mod error;
pub mod listener;
pub mod menu_button;
pub mod page;
pub mod surface;

pub use action::CopyToOutput;
pub use error::{Error, Result};
pub use menu_button::AttachedMenuButton;
pub use page::{attach_all, detach_all, on_page_load};
