use crate::state::State;
use crate::{Error, Result};

use rolebot::model::id::{GuildId, RoleId, UserId};
use rolebot::{Context, Reply};

/// The result of a button activation. Every variant except [`Added`] and [`Removed`]
/// means no role was touched.
///
/// [`Added`]: ToggleOutcome::Added
/// [`Removed`]: ToggleOutcome::Removed
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// No role is mapped to the button in this guild.
    NotConfigured,
    /// The mapped role was deleted from the guild. The mapping stays until reconfigured.
    RoleMissing(RoleId),
    /// The bot's own membership in the guild could not be resolved.
    MemberUnresolved,
    /// The bot lacks the manage roles permission.
    MissingPermission,
    /// The bot's highest role is not above the mapped role.
    RoleTooHigh(RoleId),
    Added(RoleId),
    Removed(RoleId),
}

impl ToggleOutcome {
    pub fn reply(&self) -> Reply {
        Reply::private(match self {
            Self::NotConfigured => String::from(
                "This button is not configured yet. An administrator can set it up with `/configure`.",
            ),
            Self::RoleMissing(_) => String::from(
                "The role mapped to this button no longer exists. An administrator needs to run `/configure` again.",
            ),
            Self::MemberUnresolved => {
                String::from("Something is off: I could not find myself in this server. Please try again later.")
            }
            Self::MissingPermission => String::from(
                "I need the **Manage Roles** permission to do that. Please ask an administrator to grant it.",
            ),
            Self::RoleTooHigh(role_id) => format!(
                "My highest role must be above {} in the role list. Please ask an administrator to move my role up.",
                role_id.mention()
            ),
            Self::Added(role_id) => format!("Role added: {}", role_id.mention()),
            Self::Removed(role_id) => format!("Role removed: {}", role_id.mention()),
        })
    }
}

/// Adds the role mapped to `button_id` to the user, or removes it if the user already
/// holds it. Every precondition is checked before the user's roles are touched.
pub async fn toggle<C>(
    state: &State,
    ctx: &C,
    guild_id: GuildId,
    user_id: UserId,
    button_id: &str,
) -> Result<ToggleOutcome>
where
    C: Context + Sync,
{
    let role_id = match state.registry().get(guild_id, button_id) {
        Some(role_id) => role_id,
        None => return Ok(ToggleOutcome::NotConfigured),
    };

    let roles = ctx.roles(guild_id).await.map_err(Error::platform)?;
    let target = match roles.iter().find(|role| role.id == role_id) {
        Some(role) => role,
        None => {
            log::debug!(
                "[CORE] Button {} in guild {} maps to deleted role {}",
                button_id,
                guild_id,
                role_id
            );
            return Ok(ToggleOutcome::RoleMissing(role_id));
        }
    };

    let me = match ctx.current_member(guild_id).await.map_err(Error::platform)? {
        Some(member) => member,
        None => {
            log::warn!("[CORE] Cannot resolve own member in guild {}", guild_id);
            return Ok(ToggleOutcome::MemberUnresolved);
        }
    };

    if !me.permissions(guild_id, &roles).manage_roles() {
        return Ok(ToggleOutcome::MissingPermission);
    }

    // Equal positions are not enough to manage a role.
    if me.highest_position(&roles) <= target.position {
        return Ok(ToggleOutcome::RoleTooHigh(target.id));
    }

    let member = ctx.member(guild_id, user_id).await.map_err(Error::platform)?;

    if member.has_role(target.id) {
        ctx.remove_role(guild_id, user_id, target.id)
            .await
            .map_err(Error::platform)?;

        Ok(ToggleOutcome::Removed(target.id))
    } else {
        ctx.add_role(guild_id, user_id, target.id)
            .await
            .map_err(Error::platform)?;

        Ok(ToggleOutcome::Added(target.id))
    }
}
