use std::str::FromStr;

use strum::EnumString;

/// The keys the menu button reacts to, decoded from `KeyboardEvent.key`.
#[derive(Clone, Debug, PartialEq, Eq, EnumString)]
pub enum Key {
    #[strum(serialize = "ArrowDown", serialize = "Down")]
    ArrowDown,
    #[strum(serialize = "ArrowUp", serialize = "Up")]
    ArrowUp,
    Enter,
    #[strum(serialize = " ", serialize = "Spacebar")]
    Space,
    #[strum(serialize = "Escape", serialize = "Esc")]
    Escape,
    #[strum(default)]
    Other(String),
}

impl Key {
    pub fn from_key(key: &str) -> Self {
        Self::from_str(key).unwrap_or_else(|_| Self::Other(key.to_owned()))
    }

    /// Keys that open the popup when pressed on the trigger.
    pub fn opens_popup(&self) -> bool {
        matches!(self, Self::ArrowDown | Self::Enter | Self::Space)
    }
}
