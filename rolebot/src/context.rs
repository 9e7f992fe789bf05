use crate::model::guild::{Member, Role};
use crate::model::id::{GuildId, RoleId, UserId};

use async_trait::async_trait;

use std::error;

/// The guild operations the bot needs from the platform. The serenity client implements
/// this for production, tests provide an in-memory implementation.
#[async_trait]
pub trait Context {
    type Error: error::Error + Send + Sync + 'static;

    /// Returns the live set of roles in a guild.
    async fn roles(&self, guild_id: GuildId) -> Result<Vec<Role>, Self::Error>;

    /// Returns the membership record of the bot itself in a guild, or `None` if it
    /// cannot be resolved.
    async fn current_member(&self, guild_id: GuildId) -> Result<Option<Member>, Self::Error>;

    /// Fetches the membership record of a user. Implementations must not serve this
    /// from a cache.
    async fn member(&self, guild_id: GuildId, user_id: UserId) -> Result<Member, Self::Error>;

    async fn add_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), Self::Error>;

    async fn remove_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), Self::Error>;
}
