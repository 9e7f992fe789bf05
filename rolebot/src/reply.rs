use crate::button::Button;

use async_trait::async_trait;

use std::error;

/// A response to an interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    /// Only visible to the invoking user.
    pub ephemeral: bool,
    /// Buttons rendered as a single row below the content.
    pub buttons: Vec<Button>,
}

impl Reply {
    /// Creates a new reply only visible to the invoking user.
    pub fn private<T>(content: T) -> Self
    where
        T: ToString,
    {
        Self {
            content: content.to_string(),
            ephemeral: true,
            buttons: Vec::new(),
        }
    }

    /// Creates a new reply visible to the whole channel.
    pub fn public<T>(content: T) -> Self
    where
        T: ToString,
    {
        Self {
            content: content.to_string(),
            ephemeral: false,
            buttons: Vec::new(),
        }
    }

    pub fn buttons<I>(mut self, buttons: I) -> Self
    where
        I: IntoIterator<Item = Button>,
    {
        self.buttons.extend(buttons);
        self
    }
}

/// Answers a single interaction.
#[async_trait]
pub trait Responder {
    type Error: error::Error + Send + Sync + 'static;

    /// Sends the initial response to the interaction.
    async fn reply(&self, reply: Reply) -> Result<(), Self::Error>;

    /// Returns `true` once the interaction received its initial response and cannot
    /// take another one.
    fn is_replied(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::Reply;
    use crate::button::BUTTONS;

    #[test]
    fn test_reply_visibility() {
        assert!(Reply::private("a").ephemeral);
        assert!(!Reply::public("a").ephemeral);
    }

    #[test]
    fn test_reply_buttons_keep_order() {
        let reply = Reply::public("panel").buttons(BUTTONS.iter().copied());
        let ids: Vec<_> = reply.buttons.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["rr_raider", "rr_trader", "rr_explorer"]);
    }
}
