use super::id::{GuildId, RoleId, UserId};
use super::permissions::Permissions;

use serde::{Deserialize, Serialize};

/// A role as it currently exists in a guild.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    /// Position in the role hierarchy. Higher values rank higher.
    pub position: u16,
    pub permissions: Permissions,
}

/// The membership record of a user in a single guild.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub user_id: UserId,
    pub roles: Vec<RoleId>,
}

impl Member {
    pub fn new(user_id: UserId, roles: Vec<RoleId>) -> Self {
        Self { user_id, roles }
    }

    pub fn has_role(&self, role_id: RoleId) -> bool {
        self.roles.contains(&role_id)
    }

    /// Returns the effective guild-level permissions of the member given the live
    /// `roles` of the guild. The `@everyone` role applies to every member.
    pub fn permissions(&self, guild_id: GuildId, roles: &[Role]) -> Permissions {
        let everyone = guild_id.everyone_role();

        let mut permissions = Permissions::empty();
        for role in roles {
            if role.id == everyone || self.has_role(role.id) {
                permissions |= role.permissions;
            }
        }

        permissions
    }

    /// Returns the position of the highest role the member holds. Members without
    /// any roles rank at the bottom, next to `@everyone`.
    pub fn highest_position(&self, roles: &[Role]) -> u16 {
        roles
            .iter()
            .filter(|role| self.has_role(role.id))
            .map(|role| role.position)
            .max()
            .unwrap_or(0)
    }
}
