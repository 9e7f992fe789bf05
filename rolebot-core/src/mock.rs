//! An in-memory platform for tests.
use crate::config::Config;
use crate::state::State;
use crate::store::{MainStore, MemStore};

use async_trait::async_trait;
use parking_lot::Mutex;
use rolebot::model::guild::{Member, Role};
use rolebot::model::id::{GuildId, RoleId, UserId};
use rolebot::model::permissions::Permissions;
use rolebot::{Context, Reply, Responder};
use thiserror::Error;

use std::collections::HashMap;

pub const GUILD: GuildId = GuildId(1);
pub const BOT: UserId = UserId(900);
/// The bot's own role, with the manage roles permission.
pub const BOT_ROLE: RoleId = RoleId(90);
pub const ABOVE_BOT: RoleId = RoleId(99);

#[derive(Debug, Error)]
pub enum MockError {
    #[error("mock platform failure")]
    Failing,
    #[error("unknown member {0}")]
    UnknownMember(UserId),
    #[error("already replied")]
    AlreadyReplied,
}

/// Returns a new `State` backed by a [`MemStore`].
pub fn state() -> (State, MemStore) {
    let store = MemStore::new();
    let state = State::new(Config::default(), MainStore::new(store.clone()));

    (state, store)
}

#[derive(Debug, Default)]
pub struct MockContext {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    roles: Vec<Role>,
    members: HashMap<UserId, Member>,
    bot: Option<UserId>,
    failing: bool,
    panicking: bool,
    mutations: usize,
}

impl MockContext {
    /// A guild with `@everyone`, roles 10 and 11 below the bot, the bot role and one role
    /// above it. The bot is a member holding the bot role.
    pub fn new() -> Self {
        let role = |id, position, permissions| Role {
            id: RoleId(id),
            position,
            permissions,
        };

        let mut members = HashMap::new();
        members.insert(BOT, Member::new(BOT, vec![BOT_ROLE]));

        Self {
            inner: Mutex::new(Inner {
                roles: vec![
                    role(GUILD.0, 0, Permissions::from_bits(1 << 10)),
                    role(10, 1, Permissions::empty()),
                    role(11, 2, Permissions::empty()),
                    role(BOT_ROLE.0, 5, Permissions::MANAGE_ROLES),
                    role(ABOVE_BOT.0, 8, Permissions::empty()),
                ],
                members,
                bot: Some(BOT),
                ..Default::default()
            }),
        }
    }

    /// Adds a member, replacing the existing record.
    pub fn add_user(&self, user_id: UserId, roles: Vec<RoleId>) {
        self.inner
            .lock()
            .members
            .insert(user_id, Member::new(user_id, roles));
    }

    pub fn user_roles(&self, user_id: UserId) -> Vec<RoleId> {
        self.inner
            .lock()
            .members
            .get(&user_id)
            .map(|member| member.roles.clone())
            .unwrap_or_default()
    }

    pub fn set_bot(&self, bot: Option<UserId>) {
        self.inner.lock().bot = bot;
    }

    pub fn set_role_permissions(&self, role_id: RoleId, permissions: Permissions) {
        let mut inner = self.inner.lock();
        if let Some(role) = inner.roles.iter_mut().find(|role| role.id == role_id) {
            role.permissions = permissions;
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.inner.lock().failing = failing;
    }

    pub fn set_panicking(&self, panicking: bool) {
        self.inner.lock().panicking = panicking;
    }

    /// Returns the number of role changes applied to members.
    pub fn mutations(&self) -> usize {
        self.inner.lock().mutations
    }

    fn check(&self) -> Result<(), MockError> {
        let inner = self.inner.lock();
        if inner.panicking {
            drop(inner);
            panic!("mock platform panicked");
        }
        if inner.failing {
            return Err(MockError::Failing);
        }

        Ok(())
    }
}

#[async_trait]
impl Context for MockContext {
    type Error = MockError;

    async fn roles(&self, _guild_id: GuildId) -> Result<Vec<Role>, Self::Error> {
        self.check()?;
        Ok(self.inner.lock().roles.clone())
    }

    async fn current_member(&self, _guild_id: GuildId) -> Result<Option<Member>, Self::Error> {
        self.check()?;
        let inner = self.inner.lock();

        Ok(inner.bot.and_then(|bot| inner.members.get(&bot).cloned()))
    }

    async fn member(&self, _guild_id: GuildId, user_id: UserId) -> Result<Member, Self::Error> {
        self.check()?;
        self.inner
            .lock()
            .members
            .get(&user_id)
            .cloned()
            .ok_or(MockError::UnknownMember(user_id))
    }

    async fn add_role(
        &self,
        _guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), Self::Error> {
        self.check()?;
        let mut inner = self.inner.lock();
        let member = inner
            .members
            .get_mut(&user_id)
            .ok_or(MockError::UnknownMember(user_id))?;

        if !member.has_role(role_id) {
            member.roles.push(role_id);
        }
        inner.mutations += 1;
        Ok(())
    }

    async fn remove_role(
        &self,
        _guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), Self::Error> {
        self.check()?;
        let mut inner = self.inner.lock();
        let member = inner
            .members
            .get_mut(&user_id)
            .ok_or(MockError::UnknownMember(user_id))?;

        member.roles.retain(|id| *id != role_id);
        inner.mutations += 1;
        Ok(())
    }
}

/// Records replies instead of sending them.
#[derive(Debug, Default)]
pub struct MockResponder {
    replies: Mutex<Vec<Reply>>,
    failing: Mutex<bool>,
    fail_next: Mutex<bool>,
    attempts: Mutex<usize>,
}

impl MockResponder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock() = failing;
    }

    /// Makes only the next reply fail.
    pub fn fail_next(&self) {
        *self.fail_next.lock() = true;
    }

    /// Returns the number of replies attempted, including failed ones.
    pub fn attempts(&self) -> usize {
        *self.attempts.lock()
    }

    pub fn replies(&self) -> Vec<Reply> {
        self.replies.lock().clone()
    }
}

#[async_trait]
impl Responder for MockResponder {
    type Error = MockError;

    async fn reply(&self, reply: Reply) -> Result<(), Self::Error> {
        *self.attempts.lock() += 1;

        let fail_next = std::mem::take(&mut *self.fail_next.lock());
        if fail_next || *self.failing.lock() {
            return Err(MockError::Failing);
        }

        let mut replies = self.replies.lock();
        if !replies.is_empty() {
            return Err(MockError::AlreadyReplied);
        }

        replies.push(reply);
        Ok(())
    }

    fn is_replied(&self) -> bool {
        !self.replies.lock().is_empty()
    }
}
