use contracts::auth::{AdminInfo, UserInfo};
use leptos::prelude::*;

use super::storage;

/// Shopper session: present after login/register, restored from
/// localStorage on startup.
#[derive(Clone, Debug, Default)]
pub struct UserSession {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

impl UserSession {
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }
}

/// Admin session gating the admin panel.
#[derive(Clone, Debug, Default)]
pub struct AdminSession {
    pub token: Option<String>,
    pub user: Option<AdminInfo>,
}

impl AdminSession {
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }
}

/// Provide both sessions at the app root, restored from localStorage.
pub fn provide_sessions() {
    let user_session = RwSignal::new(UserSession {
        token: storage::get_user_token(),
        user: storage::get_user(),
    });
    let admin_session = RwSignal::new(AdminSession {
        token: storage::get_admin_token(),
        user: storage::get_admin_user(),
    });
    provide_context(user_session);
    provide_context(admin_session);
}

pub fn use_user_session() -> RwSignal<UserSession> {
    use_context::<RwSignal<UserSession>>().expect("UserSession not provided")
}

pub fn use_admin_session() -> RwSignal<AdminSession> {
    use_context::<RwSignal<AdminSession>>().expect("AdminSession not provided")
}

/// Store a fresh shopper login in both the signal and localStorage.
pub fn set_user_session(session: RwSignal<UserSession>, token: String, user: UserInfo) {
    storage::save_user_session(&token, &user);
    session.set(UserSession {
        token: Some(token),
        user: Some(user),
    });
}

pub fn clear_user_session(session: RwSignal<UserSession>) {
    storage::clear_user_session();
    session.set(UserSession::default());
}

pub fn set_admin_session(session: RwSignal<AdminSession>, token: String, user: AdminInfo) {
    storage::save_admin_session(&token, &user);
    session.set(AdminSession {
        token: Some(token),
        user: Some(user),
    });
}

pub fn clear_admin_session(session: RwSignal<AdminSession>) {
    storage::clear_admin_session();
    session.set(AdminSession::default());
}
