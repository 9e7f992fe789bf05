use super::guild;

use serenity::model::guild::{Member, Role};

impl From<&Role> for guild::Role {
    fn from(src: &Role) -> Self {
        Self {
            id: src.id.into(),
            position: src.position,
            permissions: src.permissions.into(),
        }
    }
}

impl From<Member> for guild::Member {
    fn from(src: Member) -> Self {
        Self {
            user_id: src.user.id.into(),
            roles: src.roles.into_iter().map(|r| r.into()).collect(),
        }
    }
}
