//! The fixed set of role buttons. Adding a button requires a redeploy.

use serde::{Deserialize, Serialize};

use std::fmt::Write;

/// The visual style category of a button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Success,
    Danger,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Button {
    /// The stable identifier, used as the component custom id and as the key in the
    /// role map.
    pub id: &'static str,
    pub label: &'static str,
    pub style: ButtonStyle,
}

/// All buttons, in the order they are rendered on a panel.
pub const BUTTONS: &[Button] = &[
    Button {
        id: "rr_raider",
        label: "Raider",
        style: ButtonStyle::Primary,
    },
    Button {
        id: "rr_trader",
        label: "Trader",
        style: ButtonStyle::Success,
    },
    Button {
        id: "rr_explorer",
        label: "Explorer",
        style: ButtonStyle::Secondary,
    },
];

impl From<ButtonStyle> for serenity::model::application::ButtonStyle {
    fn from(src: ButtonStyle) -> Self {
        match src {
            ButtonStyle::Primary => Self::Primary,
            ButtonStyle::Secondary => Self::Secondary,
            ButtonStyle::Success => Self::Success,
            ButtonStyle::Danger => Self::Danger,
        }
    }
}

/// Returns the button with the given `id`.
pub fn find(id: &str) -> Option<&'static Button> {
    BUTTONS.iter().find(|button| button.id == id)
}

/// Returns all valid button ids as a comma separated, code formatted list.
pub fn valid_ids() -> String {
    let mut string = String::new();

    for (i, button) in BUTTONS.iter().enumerate() {
        if i != 0 {
            string.push_str(", ");
        }
        let _ = write!(string, "`{}`", button.id);
    }

    string
}
