//! # Authentication Handlers
//!
//! Onboarding completion, login, social login and logout. There is no backend:
//! "logging in" means validating the form and persisting the `isLoggedIn` flag.
//! Flag writes are best-effort; a storage failure is logged and navigation proceeds.

use std::sync::Arc;

use parking_lot::RwLock;

use super::navigation::transition;
use crate::app::state::{AppState, Screen};
use crate::core::error::Result;
use crate::core::service::FlagStore;
use crate::screens::auth::{AuthForm, SocialProvider};
use crate::services::flags;

fn log_storage_failure(action: &str, result: Result<()>) {
    if let Err(e) = result {
        tracing::warn!(action, error = %e, "Failed to persist flag, continuing");
    }
}

/// Handle "Get Started" / "Skip" on the last onboarding page
///
/// Internal handler function - use [`crate::app::App::complete_onboarding`] instead.
pub(crate) fn handle_onboarding_complete(state: Arc<RwLock<AppState>>, store: &dyn FlagStore) {
    log_storage_failure("onboarding", flags::mark_onboarding_seen(store));
    let mut state = state.write();
    state.is_first_visit = false;
    transition(&mut state, Screen::Auth);
}

/// Handle sign-in / create-account submission
///
/// Internal handler function - use [`crate::app::App::login`] instead.
pub(crate) fn handle_login(
    state: Arc<RwLock<AppState>>,
    store: &dyn FlagStore,
    form: &AuthForm,
) -> Result<()> {
    let credentials = match form.validate() {
        Ok(credentials) => credentials,
        Err(e) => {
            tracing::info!(mode = ?form.mode, error = %e, "Auth form rejected");
            return Err(e);
        }
    };
    tracing::info!(mode = ?form.mode, email = %credentials.email, "User signed in");
    complete_login(state, store);
    Ok(())
}

/// Handle Google / Apple buttons, which skip form validation
///
/// Internal handler function - use [`crate::app::App::social_login`] instead.
pub(crate) fn handle_social_login(
    state: Arc<RwLock<AppState>>,
    store: &dyn FlagStore,
    provider: SocialProvider,
) {
    tracing::info!(provider = ?provider, "User signed in with social provider");
    complete_login(state, store);
}

fn complete_login(state: Arc<RwLock<AppState>>, store: &dyn FlagStore) {
    log_storage_failure("login", flags::mark_logged_in(store));
    let mut state = state.write();
    state.is_logged_in = true;
    transition(&mut state, Screen::Home);
}

/// Handle logout from the profile screen
///
/// Internal handler function - use [`crate::app::App::logout`] instead.
pub(crate) fn handle_logout(state: Arc<RwLock<AppState>>, store: &dyn FlagStore) {
    log_storage_failure("logout", flags::clear_login(store));
    let mut state = state.write();
    state.is_logged_in = false;
    transition(&mut state, Screen::Auth);
    tracing::info!("User signed out");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::services::flags::{MemoryFlagStore, PersistedFlags};

    fn on_auth() -> Arc<RwLock<AppState>> {
        let mut state = AppState::new(false, false, 25);
        state.current_screen = Screen::Auth;
        Arc::new(RwLock::new(state))
    }

    #[test]
    fn test_invalid_form_stays_on_auth() {
        let state = on_auth();
        let store = MemoryFlagStore::new();
        let err = handle_login(state.clone(), &store, &AuthForm::login("", "pw")).unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(state.read().current_screen, Screen::Auth);
        assert!(!PersistedFlags::load(&store).is_logged_in);
    }

    #[test]
    fn test_login_persists_and_goes_home() {
        let state = on_auth();
        let store = MemoryFlagStore::new();
        handle_login(state.clone(), &store, &AuthForm::login("a@b.com", "pw")).unwrap();

        assert_eq!(state.read().current_screen, Screen::Home);
        assert!(state.read().is_logged_in);
        assert!(PersistedFlags::load(&store).is_logged_in);
    }

    #[test]
    fn test_logout_clears_flag() {
        let state = on_auth();
        let store = MemoryFlagStore::new();
        handle_social_login(state.clone(), &store, SocialProvider::Apple);
        handle_logout(state.clone(), &store);

        assert_eq!(state.read().current_screen, Screen::Auth);
        assert!(!PersistedFlags::load(&store).is_logged_in);
    }

    #[test]
    fn test_onboarding_marks_flag() {
        let state = Arc::new(RwLock::new(AppState::new(true, false, 25)));
        let store = MemoryFlagStore::new();
        handle_onboarding_complete(state.clone(), &store);

        assert_eq!(state.read().current_screen, Screen::Auth);
        assert!(!state.read().is_first_visit);
        assert!(PersistedFlags::load(&store).has_seen_onboarding);
    }
}
