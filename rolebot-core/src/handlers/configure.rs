use super::GUILD_ONLY;
use crate::state::State;

use rolebot::button::{self, Button};
use rolebot::model::id::{GuildId, RoleId};
use rolebot::model::permissions::Permissions;
use rolebot::Reply;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigureOutcome {
    GuildOnly,
    /// The invoker lacks the manage roles permission.
    MissingPermission,
    UnknownButton(String),
    Mapped { button: Button, role_id: RoleId },
}

impl ConfigureOutcome {
    pub fn reply(&self) -> Reply {
        match self {
            Self::GuildOnly => Reply::private(GUILD_ONLY),
            Self::MissingPermission => {
                Reply::private("You need the Manage Roles permission to use this command.")
            }
            Self::UnknownButton(button_id) => Reply::private(format!(
                "Unknown button id `{}`. Valid ids are: {}.",
                button_id,
                button::valid_ids()
            )),
            Self::Mapped { button, role_id } => Reply::private(format!(
                "The **{}** button (`{}`) now toggles {}.",
                button.label,
                button.id,
                role_id.mention()
            )),
        }
    }
}

/// Maps `button_id` to `role_id` in the invoking guild. Nothing is mutated unless every
/// check passes. An existing mapping for the button is overwritten.
pub async fn configure(
    state: &State,
    guild_id: Option<GuildId>,
    permissions: Permissions,
    button_id: &str,
    role_id: RoleId,
) -> ConfigureOutcome {
    let guild_id = match guild_id {
        Some(guild_id) => guild_id,
        None => return ConfigureOutcome::GuildOnly,
    };

    if !permissions.manage_roles() {
        return ConfigureOutcome::MissingPermission;
    }

    let button = match button::find(button_id) {
        Some(button) => *button,
        None => return ConfigureOutcome::UnknownButton(button_id.to_owned()),
    };

    let previous = state.set_mapping(guild_id, button.id, role_id).await;

    log::info!(
        "[CORE] Guild {} mapped button {} to role {} (previously {:?})",
        guild_id,
        button.id,
        role_id,
        previous
    );

    ConfigureOutcome::Mapped { button, role_id }
}
