//! Routes interactions to their handlers. [`dispatch`] is the failure boundary: nothing
//! that goes wrong while producing a response escapes it.
use crate::handlers::{self, GUILD_ONLY};
use crate::state::State;
use crate::Result;

use futures::FutureExt;
use rolebot::interaction::{Command, CommandInteraction, ComponentInteraction};
use rolebot::{Context, Interaction, Reply, Responder};

use std::any::Any;
use std::panic::AssertUnwindSafe;

/// Sent when handling an interaction failed unexpectedly.
pub const GENERIC_FAILURE: &str = "Something went wrong while handling this. Please try again later.";

/// Handles a single interaction and sends its response through `responder`.
pub async fn dispatch<C, R>(state: &State, ctx: &C, responder: &R, interaction: Interaction)
where
    C: Context + Sync,
    R: Responder + Sync,
{
    let kind = interaction.kind().to_owned();

    let res = AssertUnwindSafe(route(state, ctx, interaction))
        .catch_unwind()
        .await;

    match res {
        Ok(Ok(Some(reply))) => {
            if let Err(err) = responder.reply(reply).await {
                log::error!("[ROUTER] Failed to respond to '{}': {}", kind, err);
                fail(responder).await;
            }
        }
        // No branch for this interaction.
        Ok(Ok(None)) => (),
        Ok(Err(err)) => {
            log::error!("[ROUTER] Handling '{}' returned an error: {:?}", kind, err);
            fail(responder).await;
        }
        Err(payload) => {
            log::error!(
                "[ROUTER] Handling '{}' panicked: {}",
                kind,
                panic_message(&*payload)
            );
            fail(responder).await;
        }
    }
}

/// Answers with [`GENERIC_FAILURE`] if the interaction has not been answered yet.
pub async fn fail<R>(responder: &R)
where
    R: Responder + Sync,
{
    if responder.is_replied() {
        return;
    }

    if let Err(err) = responder.reply(Reply::private(GENERIC_FAILURE)).await {
        log::error!("[ROUTER] Failed to send failure response: {}", err);
    }
}

async fn route<C>(state: &State, ctx: &C, interaction: Interaction) -> Result<Option<Reply>>
where
    C: Context + Sync,
{
    match interaction {
        Interaction::Command(cmd) => Ok(command(state, cmd).await),
        Interaction::Component(component) => self::component(state, ctx, component)
            .await
            .map(Some),
        Interaction::Unsupported => Ok(None),
    }
}

async fn command(state: &State, cmd: CommandInteraction) -> Option<Reply> {
    match cmd.command {
        Command::Configure { button_id, role_id } => {
            let outcome = handlers::configure(
                state,
                cmd.guild_id,
                cmd.permissions,
                &button_id,
                role_id,
            )
            .await;

            Some(outcome.reply())
        }
        Command::PostPanel => match cmd.guild_id {
            Some(_) => Some(handlers::panel()),
            None => Some(Reply::private(GUILD_ONLY)),
        },
        Command::Other(name) => {
            log::debug!("[ROUTER] Ignoring unknown command '{}'", name);
            None
        }
    }
}

async fn component<C>(state: &State, ctx: &C, component: ComponentInteraction) -> Result<Reply>
where
    C: Context + Sync,
{
    let guild_id = match component.guild_id {
        Some(guild_id) => guild_id,
        None => return Ok(Reply::private(GUILD_ONLY)),
    };

    let outcome = handlers::toggle(
        state,
        ctx,
        guild_id,
        component.user_id,
        &component.custom_id,
    )
    .await?;

    log::debug!(
        "[ROUTER] Toggle '{}' for user {} in guild {}: {:?}",
        component.custom_id,
        component.user_id,
        guild_id,
        outcome
    );

    Ok(outcome.reply())
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        *msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "<unknown panic payload>"
    }
}

#[cfg(test)]
mod tests {
    use super::{dispatch, GENERIC_FAILURE};
    use crate::handlers::GUILD_ONLY;
    use crate::mock::{self, MockContext, MockResponder, GUILD};
    use rolebot::button::BUTTONS;
    use rolebot::interaction::{Command, CommandInteraction, ComponentInteraction};
    use rolebot::model::id::{RoleId, UserId};
    use rolebot::model::permissions::Permissions;
    use rolebot::{Interaction, Reply};

    const USER: UserId = UserId(500);
    const RAIDER: RoleId = RoleId(10);

    fn command(command: Command) -> Interaction {
        Interaction::Command(CommandInteraction {
            guild_id: Some(GUILD),
            user_id: USER,
            permissions: Permissions::MANAGE_ROLES,
            command,
        })
    }

    fn click(custom_id: &str) -> Interaction {
        Interaction::Component(ComponentInteraction {
            guild_id: Some(GUILD),
            user_id: USER,
            custom_id: custom_id.to_owned(),
        })
    }

    #[tokio::test]
    async fn test_dispatch_raider_example() {
        let (state, _) = mock::state();
        let ctx = MockContext::new();
        ctx.add_user(USER, vec![]);

        let responder = MockResponder::new();
        let configure = command(Command::Configure {
            button_id: String::from("rr_raider"),
            role_id: RAIDER,
        });
        dispatch(&state, &ctx, &responder, configure).await;
        assert!(responder.replies()[0].ephemeral);

        let responder = MockResponder::new();
        dispatch(&state, &ctx, &responder, click("rr_raider")).await;
        assert!(responder.replies()[0].content.starts_with("Role added"));
        assert!(responder.replies()[0].ephemeral);
        assert_eq!(ctx.user_roles(USER), vec![RAIDER]);

        let responder = MockResponder::new();
        dispatch(&state, &ctx, &responder, click("rr_raider")).await;
        assert!(responder.replies()[0].content.starts_with("Role removed"));
        assert!(ctx.user_roles(USER).is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_post_panel() {
        let (state, _) = mock::state();
        let ctx = MockContext::new();
        let responder = MockResponder::new();

        dispatch(&state, &ctx, &responder, command(Command::PostPanel)).await;

        let replies = responder.replies();
        assert_eq!(replies.len(), 1);
        assert!(!replies[0].ephemeral);
        assert_eq!(replies[0].buttons, BUTTONS.to_vec());
        assert!(state.registry().snapshot().map.is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_ignores_unknown() {
        let (state, _) = mock::state();
        let ctx = MockContext::new();

        let responder = MockResponder::new();
        dispatch(&state, &ctx, &responder, Interaction::Unsupported).await;
        assert!(responder.replies().is_empty());

        let responder = MockResponder::new();
        let other = command(Command::Other(String::from("ping")));
        dispatch(&state, &ctx, &responder, other).await;
        assert!(responder.replies().is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_component_outside_guild() {
        let (state, _) = mock::state();
        let ctx = MockContext::new();
        let responder = MockResponder::new();

        let interaction = Interaction::Component(ComponentInteraction {
            guild_id: None,
            user_id: USER,
            custom_id: String::from("rr_raider"),
        });
        dispatch(&state, &ctx, &responder, interaction).await;

        assert_eq!(responder.replies(), vec![Reply::private(GUILD_ONLY)]);
    }

    #[tokio::test]
    async fn test_dispatch_platform_error() {
        let (state, _) = mock::state();
        state.set_mapping(GUILD, "rr_raider", RAIDER).await;
        let ctx = MockContext::new();
        ctx.add_user(USER, vec![]);
        ctx.set_failing(true);
        let responder = MockResponder::new();

        dispatch(&state, &ctx, &responder, click("rr_raider")).await;

        assert_eq!(responder.replies(), vec![Reply::private(GENERIC_FAILURE)]);
        assert_eq!(ctx.mutations(), 0);
    }

    #[tokio::test]
    async fn test_dispatch_catches_panic() {
        let (state, _) = mock::state();
        state.set_mapping(GUILD, "rr_raider", RAIDER).await;
        let ctx = MockContext::new();
        ctx.set_panicking(true);
        let responder = MockResponder::new();

        dispatch(&state, &ctx, &responder, click("rr_raider")).await;

        assert_eq!(responder.replies(), vec![Reply::private(GENERIC_FAILURE)]);
    }

    #[tokio::test]
    async fn test_dispatch_respond_failure_falls_back() {
        let (state, _) = mock::state();
        let ctx = MockContext::new();
        let responder = MockResponder::new();
        responder.fail_next();

        dispatch(&state, &ctx, &responder, command(Command::PostPanel)).await;

        assert_eq!(responder.attempts(), 2);
        assert_eq!(responder.replies(), vec![Reply::private(GENERIC_FAILURE)]);
    }

    #[tokio::test]
    async fn test_dispatch_respond_failure_is_swallowed() {
        let (state, _) = mock::state();
        let ctx = MockContext::new();
        let responder = MockResponder::new();
        responder.set_failing(true);

        dispatch(&state, &ctx, &responder, command(Command::PostPanel)).await;

        // The panel and the failure notice were both attempted.
        assert_eq!(responder.attempts(), 2);
        assert!(responder.replies().is_empty());
    }
}
