//! Explicit session context.
//!
//! The session is created on login, cleared on logout or when the backend
//! rejects the token. Authenticated requests take the token from here; the
//! localStorage copy is only read once, to restore the session on reload.

use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Option<Session>>,
    restoring: RwSignal<bool>,
}

impl SessionContext {
    fn new() -> Self {
        Self {
            session: RwSignal::new(None),
            restoring: RwSignal::new(false),
        }
    }

    /// Store a fresh session after a successful login
    pub fn start(&self, token: String, user: UserInfo) {
        storage::save_token(&token);
        self.session.set(Some(Session { token, user }));
    }

    pub fn clear(&self) {
        storage::clear_token();
        self.session.set(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    /// True while a stored token is being validated
    pub fn is_restoring(&self) -> bool {
        self.restoring.get()
    }

    /// Token without subscribing the caller to session changes
    pub fn token_untracked(&self) -> Option<String> {
        self.session
            .with_untracked(|s| s.as_ref().map(|s| s.token.clone()))
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.session.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    fn restore(&self) {
        let Some(token) = storage::get_token() else {
            return;
        };

        let ctx = *self;
        ctx.restoring.set(true);
        spawn_local(async move {
            match api::get_current_user(&token).await {
                Ok(user) => {
                    ctx.session.set(Some(Session { token, user }));
                }
                Err(e) => {
                    log::warn!("Stored session rejected: {}", e);
                    storage::clear_token();
                }
            }
            ctx.restoring.set(false);
        });
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = SessionContext::new();
    ctx.restore();
    provide_context(ctx);

    children()
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
