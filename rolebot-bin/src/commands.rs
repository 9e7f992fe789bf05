//! Definitions of the remote commands.
use rolebot::button::BUTTONS;
use rolebot::interaction::{CONFIGURE, POST_PANEL};
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::CommandOptionType;
use serenity::model::Permissions;

/// Returns all commands, registered globally on every connect.
pub fn all() -> Vec<CreateCommand> {
    vec![configure(), post_panel()]
}

fn configure() -> CreateCommand {
    let mut button_id = CreateCommandOption::new(
        CommandOptionType::String,
        "button_id",
        "The button to configure",
    )
    .required(true);

    for button in BUTTONS {
        button_id = button_id.add_string_choice(button.label, button.id);
    }

    CreateCommand::new(CONFIGURE)
        .description("Set the role a button toggles.")
        .default_member_permissions(Permissions::MANAGE_ROLES)
        .dm_permission(false)
        .add_option(button_id)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Role,
                "role",
                "The role the button toggles",
            )
            .required(true),
        )
}

fn post_panel() -> CreateCommand {
    CreateCommand::new(POST_PANEL)
        .description("Post the role button panel in this channel.")
        .dm_permission(false)
}
