use rolebot::button::BUTTONS;
use rolebot::Reply;

/// Builds the public panel message with one button per known button, in order.
pub fn panel() -> Reply {
    Reply::public("**Pick your roles**\nClick a button to get the role, click it again to drop it.")
        .buttons(BUTTONS.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::panel;
    use rolebot::button::BUTTONS;

    #[test]
    fn test_panel() {
        let reply = panel();

        assert!(!reply.ephemeral);
        assert_eq!(reply.buttons, BUTTONS.to_vec());
    }
}
