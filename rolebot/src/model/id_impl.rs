use super::id::{GuildId, RoleId, UserId};

macro_rules! impl_from {
    ($($name:ident),* $(,)?) => {
        $(
            impl From<serenity::model::id::$name> for $name {
                fn from(src: serenity::model::id::$name) -> Self {
                    Self(src.get())
                }
            }

            impl From<$name> for serenity::model::id::$name {
                fn from(src: $name) -> Self {
                    Self::new(src.0)
                }
            }
        )*
    };
}

impl_from!(GuildId, RoleId, UserId);
