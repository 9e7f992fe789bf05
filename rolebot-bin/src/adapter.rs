//! Binds the platform ports to serenity.
use async_trait::async_trait;
use rolebot::model::guild::{Member, Role};
use rolebot::model::id::{GuildId, RoleId, UserId};
use rolebot::{Context, Reply, Responder};
use serenity::builder::{
    CreateActionRow, CreateButton, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::client::Context as RawContext;
use serenity::http::Http;
use serenity::model::application::Interaction;
use serenity::model::ModelError;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Reason shown in the guild audit log for role changes.
const AUDIT_REASON: &str = "Role button";

/// Guild operations backed by the serenity client.
#[derive(Clone)]
pub struct SerenityContext {
    pub raw_ctx: RawContext,
}

impl SerenityContext {
    pub fn new(raw_ctx: RawContext) -> Self {
        Self { raw_ctx }
    }
}

#[async_trait]
impl Context for SerenityContext {
    type Error = serenity::Error;

    async fn roles(&self, guild_id: GuildId) -> Result<Vec<Role>, Self::Error> {
        let roles = serenity::model::id::GuildId::from(guild_id)
            .roles(&self.raw_ctx.http)
            .await?;

        Ok(roles.values().map(Role::from).collect())
    }

    async fn current_member(&self, guild_id: GuildId) -> Result<Option<Member>, Self::Error> {
        let user_id = self.raw_ctx.cache.current_user().id;

        // Served from the cache if possible.
        match serenity::model::id::GuildId::from(guild_id)
            .member(&self.raw_ctx, user_id)
            .await
        {
            Ok(member) => Ok(Some(member.into())),
            Err(err) if is_member_not_found(&err) => {
                log::warn!(
                    "[BOT] Failed to resolve own member in guild {}: {}",
                    guild_id,
                    err
                );
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    async fn member(&self, guild_id: GuildId, user_id: UserId) -> Result<Member, Self::Error> {
        let member = self
            .raw_ctx
            .http
            .get_member(guild_id.into(), user_id.into())
            .await?;

        Ok(member.into())
    }

    async fn add_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), Self::Error> {
        self.raw_ctx
            .http
            .add_member_role(
                guild_id.into(),
                user_id.into(),
                role_id.into(),
                Some(AUDIT_REASON),
            )
            .await
    }

    async fn remove_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), Self::Error> {
        self.raw_ctx
            .http
            .remove_member_role(
                guild_id.into(),
                user_id.into(),
                role_id.into(),
                Some(AUDIT_REASON),
            )
            .await
    }
}

/// Returns `true` if `err` means the member does not exist, as opposed to a
/// transient failure.
fn is_member_not_found(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Model(ModelError::MemberNotFound) => true,
        serenity::Error::Http(err) => err
            .status_code()
            .map_or(false, |status| status.as_u16() == 404),
        _ => false,
    }
}

/// Answers a single serenity interaction.
pub struct InteractionResponder<'a> {
    http: Arc<Http>,
    interaction: &'a Interaction,
    replied: AtomicBool,
}

impl<'a> InteractionResponder<'a> {
    pub fn new(http: Arc<Http>, interaction: &'a Interaction) -> Self {
        Self {
            http,
            interaction,
            replied: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl<'a> Responder for InteractionResponder<'a> {
    type Error = serenity::Error;

    async fn reply(&self, reply: Reply) -> Result<(), Self::Error> {
        let builder = CreateInteractionResponse::Message(create_message(reply));

        match self.interaction {
            Interaction::Command(cmd) => cmd.create_response(&self.http, builder).await?,
            Interaction::Component(component) => {
                component.create_response(&self.http, builder).await?
            }
            _ => {
                return Err(serenity::Error::Other(
                    "interaction kind cannot be answered with a message",
                ))
            }
        }

        self.replied.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_replied(&self) -> bool {
        self.replied.load(Ordering::SeqCst)
    }
}

fn create_message(reply: Reply) -> CreateInteractionResponseMessage {
    let mut message = CreateInteractionResponseMessage::new()
        .content(reply.content)
        .ephemeral(reply.ephemeral);

    if !reply.buttons.is_empty() {
        let buttons = reply
            .buttons
            .iter()
            .map(|button| {
                CreateButton::new(button.id)
                    .label(button.label)
                    .style(button.style.into())
            })
            .collect();

        message = message.components(vec![CreateActionRow::Buttons(buttons)]);
    }

    message
}
