//! Keyboard and pointer behaviour for an accessible menu button, independent
//! of any particular DOM binding.
pub mod controller;
pub mod key;
pub mod pending;
pub mod state;
pub mod surface;

#[cfg(test)]
mod fake;

pub use controller::{DefaultAction, MenuButtonActions};
pub use key::Key;
pub use pending::PendingSelection;
pub use state::{Popup, SelectionTarget, TabIndex};
pub use surface::{MenuActions, UiSurface};
