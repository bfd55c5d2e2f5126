use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

/// Identity of the current visitor
///
/// Passed explicitly into API calls; the booking core never looks it up on
/// its own.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl Session {
    /// `Authorization` header value
    pub fn bearer(&self) -> Option<String> {
        self.access_token
            .as_ref()
            .map(|token| format!("Bearer {}", token))
    }

    pub fn customer_id(&self) -> Option<String> {
        self.user_info.as_ref().map(|user| user.id.clone())
    }
}

/// Re-read the stored token and validate it against the identity provider
fn refresh_session(session: RwSignal<Session>) {
    let Some(access_token) = storage::get_access_token() else {
        session.set(Session::default());
        return;
    };

    spawn_local(async move {
        match api::get_current_user(&access_token).await {
            Ok(user_info) => {
                log::debug!("session restored for user {}", user_info.id);
                session.set(Session {
                    access_token: Some(access_token),
                    user_info: Some(user_info),
                });
            }
            Err(e) => {
                log::warn!("stored session rejected: {}", e);
                storage::clear_access_token();
                session.set(Session::default());
            }
        }
    });
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(Session::default());

    // Restore on mount
    refresh_session(session);

    // Sign-in / sign-out in another tab rewrites the token key
    let _ = window_event_listener(leptos::ev::storage, move |event: web_sys::StorageEvent| {
        if event.key().as_deref() == Some(storage::ACCESS_TOKEN_KEY) {
            refresh_session(session);
        }
    });

    provide_context(session);

    children()
}

/// Hook to access the session
pub fn use_session() -> RwSignal<Session> {
    use_context::<RwSignal<Session>>().expect("SessionProvider not found in component tree")
}
