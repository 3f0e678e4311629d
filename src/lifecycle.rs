//! Page wiring decisions, kept free of web-sys.
//!
//! `browser::install` supplies the DOM side through [`PageHooks`]; this
//! module decides when links get bound and when the one visibility refresh
//! happens. Links are bound at most once each, whether found at install time
//! or after parsing. The refresh fires exactly once, at install if the
//! document is already parsed, otherwise on `DOMContentLoaded`.

use std::cell::Cell;

use crate::error::NavError;
use crate::nav::NavItem;

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

/// Links that carry a click handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkAction {
    Logout,
    Profile,
}

impl LinkAction {
    pub const ALL: [Self; 2] = [Self::Logout, Self::Profile];

    pub fn element_id(self) -> &'static str {
        match self {
            Self::Logout => NavItem::Logout.element_id(),
            Self::Profile => NavItem::Profile.element_id(),
        }
    }
}

/// When the initial visibility refresh runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshPlan {
    Now,
    OnContentLoaded,
}

impl RefreshPlan {
    /// Choose from `document.readyState`.
    pub fn for_ready_state(ready_state: &str) -> Self {
        if ready_state == "loading" { Self::OnContentLoaded } else { Self::Now }
    }
}

/// DOM side effects the wiring drives.
pub trait PageHooks {
    /// Attach the click handler for `action`.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Listener`] if the listener cannot be attached.
    /// A missing element is `Ok(false)`, not an error.
    fn bind_click(&self, action: LinkAction) -> Result<bool, NavError>;

    fn refresh(&self);
}

#[derive(Debug, Default)]
pub struct PageWiring {
    logout_bound: Cell<bool>,
    profile_bound: Cell<bool>,
    refreshed: Cell<bool>,
}

impl PageWiring {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, action: LinkAction) -> &Cell<bool> {
        match action {
            LinkAction::Logout => &self.logout_bound,
            LinkAction::Profile => &self.profile_bound,
        }
    }

    pub fn is_bound(&self, action: LinkAction) -> bool {
        self.slot(action).get()
    }

    pub fn has_refreshed(&self) -> bool {
        self.refreshed.get()
    }

    /// Bind every link not yet bound. Returns how many were bound this pass.
    pub fn bind_pending<H: PageHooks + ?Sized>(&self, hooks: &H) -> usize {
        let mut bound = 0;
        for action in LinkAction::ALL {
            if self.is_bound(action) {
                continue;
            }
            match hooks.bind_click(action) {
                Ok(true) => {
                    self.slot(action).set(true);
                    log::debug!("bound click on #{}", action.element_id());
                    bound += 1;
                }
                Ok(false) => {}
                Err(e) => log::warn!("{e}"),
            }
        }
        bound
    }

    /// Run at install: bind what exists, refresh now if already parsed.
    ///
    /// On [`RefreshPlan::OnContentLoaded`] the caller must route the
    /// `DOMContentLoaded` event to [`PageWiring::document_parsed`].
    pub fn start<H: PageHooks + ?Sized>(&self, hooks: &H, ready_state: &str) -> RefreshPlan {
        self.bind_pending(hooks);
        let plan = RefreshPlan::for_ready_state(ready_state);
        if plan == RefreshPlan::Now {
            self.document_parsed(hooks);
        }
        plan
    }

    /// Bind late links, then refresh if that has not happened yet.
    pub fn document_parsed<H: PageHooks + ?Sized>(&self, hooks: &H) {
        self.bind_pending(hooks);
        if !self.refreshed.replace(true) {
            hooks.refresh();
        }
    }
}
