use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;
use std::str::FromStr;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid format")]
    InvalidFormat,
    #[error(transparent)]
    ParseIntError(#[from] ParseIntError),
}

macro_rules! snowflake {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(
                Copy,
                Clone,
                Debug,
                Default,
                PartialEq,
                Eq,
                PartialOrd,
                Ord,
                Hash,
                Serialize,
                Deserialize,
            )]
            pub struct $name(pub u64);

            impl FromStr for $name {
                type Err = ParseError;

                /// Parses a plain decimal snowflake. Snowflakes are never zero.
                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    let id = s.trim().parse()?;
                    if id == 0 {
                        return Err(ParseError::InvalidFormat);
                    }

                    Ok(Self(id))
                }
            }

            impl From<u64> for $name {
                fn from(id: u64) -> Self {
                    Self(id)
                }
            }

            impl Display for $name {
                fn fmt(&self, f: &mut Formatter) -> fmt::Result {
                    Display::fmt(&self.0, f)
                }
            }
        )*
    };
}

snowflake! {
    /// The id of a community (a discord guild).
    GuildId,
    RoleId,
    UserId,
}

impl RoleId {
    /// Returns the string that renders as a mention of this role.
    pub fn mention(&self) -> String {
        format!("<@&{}>", self.0)
    }
}

impl GuildId {
    /// Returns the id of the `@everyone` role of this guild. The platform reuses the
    /// guild id for it.
    pub fn everyone_role(&self) -> RoleId {
        RoleId(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{GuildId, ParseError, RoleId, UserId};

    #[test]
    fn test_parse_guild_id() {
        let guild_id: GuildId = "904569845".parse().unwrap();
        assert_eq!(guild_id, GuildId(904569845));

        let guild_id: GuildId = " 12 ".parse().unwrap();
        assert_eq!(guild_id, GuildId(12));

        let left_err = "<#1ad32424>".parse::<GuildId>().unwrap_err();
        let right_err = "<#1ad32424>".parse::<u64>().unwrap_err();
        assert_eq!(left_err, ParseError::ParseIntError(right_err));
    }

    #[test]
    fn test_parse_zero_id() {
        assert_eq!("0".parse::<RoleId>().unwrap_err(), ParseError::InvalidFormat);
        assert_eq!("0".parse::<UserId>().unwrap_err(), ParseError::InvalidFormat);
    }

    #[test]
    fn test_role_mention() {
        assert_eq!(RoleId(42).mention(), "<@&42>");
        assert_eq!(RoleId(42).to_string(), "42");
        assert_eq!(GuildId(7).everyone_role(), RoleId(7));
    }
}
