//! Interaction events, reduced to what the bot dispatches on.

use crate::model::id::{GuildId, RoleId, UserId};
use crate::model::permissions::Permissions;

/// Name of the remote `configure` command.
pub const CONFIGURE: &str = "configure";
/// Name of the remote command posting the button panel.
pub const POST_PANEL: &str = "postpanel";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Interaction {
    /// An application command was invoked.
    Command(CommandInteraction),
    /// A message component (a button) was activated.
    Component(ComponentInteraction),
    /// Any other interaction kind. These are ignored.
    Unsupported,
}

impl Interaction {
    /// A short description used in log messages.
    pub fn kind(&self) -> &str {
        match self {
            Self::Command(cmd) => match &cmd.command {
                Command::Configure { .. } => CONFIGURE,
                Command::PostPanel => POST_PANEL,
                Command::Other(name) => name,
            },
            Self::Component(component) => &component.custom_id,
            Self::Unsupported => "unsupported",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandInteraction {
    pub guild_id: Option<GuildId>,
    pub user_id: UserId,
    /// The resolved guild permissions of the invoker. Empty outside of guilds.
    pub permissions: Permissions,
    pub command: Command,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Configure { button_id: String, role_id: RoleId },
    PostPanel,
    /// A command this bot does not know about, e.g. a stale registration.
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentInteraction {
    pub guild_id: Option<GuildId>,
    pub user_id: UserId,
    pub custom_id: String,
}
