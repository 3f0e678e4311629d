//! Navigation visibility and link handlers.
//!
//! [`NavController`] holds all page behavior behind three small ports so it
//! can run without a browser. The `browser` module supplies web-sys
//! implementations; [`crate::lifecycle`] decides when each operation fires.

use crate::consts::{
    DISPLAY_HIDDEN, DISPLAY_VISIBLE, LOGOUT_TARGET, NAV_LOGIN_ID, NAV_LOGOUT_ID, NAV_PROFILE_ID,
    NAV_REGISTER_ID, PROFILE_TARGET,
};
use crate::error::NavError;
use crate::session::{self, SessionState, SessionStore};

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// One of the four navigation links the page may contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Login,
    Register,
    Profile,
    Logout,
}

impl NavItem {
    pub const ALL: [Self; 4] = [Self::Login, Self::Register, Self::Profile, Self::Logout];

    pub fn element_id(self) -> &'static str {
        match self {
            Self::Login => NAV_LOGIN_ID,
            Self::Register => NAV_REGISTER_ID,
            Self::Profile => NAV_PROFILE_ID,
            Self::Logout => NAV_LOGOUT_ID,
        }
    }

    /// Guest links show only when logged out, member links only when logged in.
    pub fn visibility_for(self, state: SessionState) -> Visibility {
        let member_link = matches!(self, Self::Profile | Self::Logout);
        if member_link == state.is_logged_in() { Visibility::Visible } else { Visibility::Hidden }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    /// Value for the element's inline `display` style.
    pub fn css_display(self) -> &'static str {
        match self {
            Self::Visible => DISPLAY_VISIBLE,
            Self::Hidden => DISPLAY_HIDDEN,
        }
    }
}

/// Element lookup and styling on the current page.
pub trait NavDocument {
    /// Apply `visibility` to the element with `id`.
    ///
    /// Returns `Ok(false)` when no such element exists.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Style`] if the element exists but cannot be styled.
    fn set_visibility(&self, id: &str, visibility: Visibility) -> Result<bool, NavError>;
}

/// Top-level page navigation.
pub trait Navigator {
    /// Send the browser to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Navigation`] if the location change is rejected.
    fn navigate(&self, target: &str) -> Result<(), NavError>;
}

/// A DOM event whose default action can be suppressed.
pub trait Cancelable {
    fn prevent_default(&self);
}

pub struct NavController<S, D, N> {
    store: S,
    document: D,
    navigator: N,
}

impl<S, D, N> NavController<S, D, N>
where
    S: SessionStore,
    D: NavDocument,
    N: Navigator,
{
    pub fn new(store: S, document: D, navigator: N) -> Self {
        Self { store, document, navigator }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    #[cfg(test)]
    pub(crate) fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Show guest or member links depending on token presence.
    ///
    /// Missing elements are skipped. Failures are logged and the remaining
    /// elements are still updated.
    pub fn refresh_visibility(&self) -> SessionState {
        let state = SessionState::detect(&self.store).unwrap_or_else(|e| {
            log::warn!("{e}; treating session as logged out");
            SessionState::LoggedOut
        });

        for item in NavItem::ALL {
            let id = item.element_id();
            match self.document.set_visibility(id, item.visibility_for(state)) {
                Ok(true) => {}
                Ok(false) => log::debug!("#{id} not on page"),
                Err(e) => log::warn!("{e}"),
            }
        }
        log::debug!("navigation shown for {state:?}");
        state
    }

    /// Drop the stored session and return to the landing page.
    pub fn handle_logout_click<E: Cancelable + ?Sized>(&self, event: &E) {
        event.prevent_default();
        for e in session::clear(&self.store) {
            log::warn!("{e}");
        }
        log::info!("logged out, redirecting to {LOGOUT_TARGET}");
        self.go(LOGOUT_TARGET);
    }

    /// Open the profile page. No session check happens here.
    pub fn handle_profile_click<E: Cancelable + ?Sized>(&self, event: &E) {
        event.prevent_default();
        log::info!("redirecting to {PROFILE_TARGET}");
        self.go(PROFILE_TARGET);
    }

    fn go(&self, target: &str) {
        if let Err(e) = self.navigator.navigate(target) {
            log::warn!("{e}");
        }
    }
}
