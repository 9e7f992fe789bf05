use crate::adapter::{InteractionResponder, SerenityContext};
use crate::commands;

use async_trait::async_trait;
use rolebot::Interaction;
use rolebot_core::router;
use rolebot_core::state::State;
use serenity::client::{Context, EventHandler};
use serenity::model::application::{Command, Interaction as RawInteraction};
use serenity::model::gateway::Ready;

use std::sync::Arc;

pub struct Handler {
    pub state: Arc<State>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        log::info!(
            "[BOT] Connected as {} to {} guilds",
            ready.user.name,
            ready.guilds.len()
        );

        match Command::set_global_commands(&ctx.http, commands::all()).await {
            Ok(cmds) => log::info!("[BOT] Registered {} commands", cmds.len()),
            Err(err) => log::error!("[BOT] Failed to register commands: {}", err),
        }
    }

    async fn interaction_create(&self, raw_ctx: Context, raw_interaction: RawInteraction) {
        let responder = InteractionResponder::new(raw_ctx.http.clone(), &raw_interaction);

        let interaction = match Interaction::try_from(&raw_interaction) {
            Ok(interaction) => interaction,
            Err(err) => {
                log::error!("[BOT] Failed to read interaction: {}", err);
                router::fail(&responder).await;
                return;
            }
        };

        let ctx = SerenityContext::new(raw_ctx);

        router::dispatch(&self.state, &ctx, &responder, interaction).await;
    }
}
