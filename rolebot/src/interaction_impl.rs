use crate::interaction::{
    Command, CommandInteraction, ComponentInteraction, Interaction, CONFIGURE, POST_PANEL,
};
use crate::model::permissions::Permissions;
use crate::model::InvalidModelData;

use serenity::model::application::{self, CommandDataOption, CommandDataOptionValue};

impl TryFrom<&application::Interaction> for Interaction {
    type Error = InvalidModelData;

    fn try_from(src: &application::Interaction) -> Result<Self, Self::Error> {
        match src {
            application::Interaction::Command(cmd) => {
                let command = match cmd.data.name.as_str() {
                    CONFIGURE => Command::Configure {
                        button_id: string_option(&cmd.data.options, "button_id")?,
                        role_id: role_option(&cmd.data.options, "role")?,
                    },
                    POST_PANEL => Command::PostPanel,
                    name => Command::Other(name.to_owned()),
                };

                let permissions = cmd
                    .member
                    .as_ref()
                    .and_then(|member| member.permissions)
                    .map(Permissions::from)
                    .unwrap_or_default();

                Ok(Self::Command(CommandInteraction {
                    guild_id: cmd.guild_id.map(|id| id.into()),
                    user_id: cmd.user.id.into(),
                    permissions,
                    command,
                }))
            }
            application::Interaction::Component(component) => {
                Ok(Self::Component(ComponentInteraction {
                    guild_id: component.guild_id.map(|id| id.into()),
                    user_id: component.user.id.into(),
                    custom_id: component.data.custom_id.clone(),
                }))
            }
            _ => Ok(Self::Unsupported),
        }
    }
}

fn string_option(options: &[CommandDataOption], name: &str) -> Result<String, InvalidModelData> {
    match options.iter().find(|opt| opt.name == name).map(|opt| &opt.value) {
        Some(CommandDataOptionValue::String(value)) => Ok(value.clone()),
        _ => Err(InvalidModelData),
    }
}

fn role_option(
    options: &[CommandDataOption],
    name: &str,
) -> Result<crate::model::id::RoleId, InvalidModelData> {
    match options.iter().find(|opt| opt.name == name).map(|opt| &opt.value) {
        Some(CommandDataOptionValue::Role(role_id)) => Ok((*role_id).into()),
        _ => Err(InvalidModelData),
    }
}
