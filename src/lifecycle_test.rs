use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;

use super::*;

// =============================================================
// Helpers
// =============================================================

/// Page whose links can appear over time; records every hook call.
#[derive(Default)]
struct FakeHooks {
    present: RefCell<BTreeSet<&'static str>>,
    broken: BTreeSet<&'static str>,
    bind_calls: RefCell<Vec<LinkAction>>,
    refreshes: Cell<usize>,
}

impl FakeHooks {
    fn with(ids: &[&'static str]) -> Self {
        let hooks = Self::default();
        hooks.present.borrow_mut().extend(ids.iter().copied());
        hooks
    }

    fn add(&self, id: &'static str) {
        self.present.borrow_mut().insert(id);
    }

    fn binds(&self, action: LinkAction) -> usize {
        self.bind_calls.borrow().iter().filter(|a| **a == action).count()
    }
}

impl PageHooks for FakeHooks {
    fn bind_click(&self, action: LinkAction) -> Result<bool, NavError> {
        let id = action.element_id();
        if self.broken.contains(id) {
            return Err(NavError::listener(id, "detached"));
        }
        if !self.present.borrow().contains(id) {
            return Ok(false);
        }
        self.bind_calls.borrow_mut().push(action);
        Ok(true)
    }

    fn refresh(&self) {
        self.refreshes.set(self.refreshes.get() + 1);
    }
}

const BOTH: [&str; 2] = ["navLogout", "navProfile"];

// =============================================================
// RefreshPlan
// =============================================================

#[test]
fn loading_document_waits_for_content_loaded() {
    assert_eq!(RefreshPlan::for_ready_state("loading"), RefreshPlan::OnContentLoaded);
}

#[test]
fn parsed_document_refreshes_now() {
    assert_eq!(RefreshPlan::for_ready_state("interactive"), RefreshPlan::Now);
    assert_eq!(RefreshPlan::for_ready_state("complete"), RefreshPlan::Now);
}

#[test]
fn link_actions_target_member_links() {
    assert_eq!(LinkAction::Logout.element_id(), "navLogout");
    assert_eq!(LinkAction::Profile.element_id(), "navProfile");
}

// =============================================================
// bind_pending
// =============================================================

#[test]
fn second_pass_binds_nothing_new() {
    let hooks = FakeHooks::with(&BOTH);
    let wiring = PageWiring::new();
    assert_eq!(wiring.bind_pending(&hooks), 2);
    assert_eq!(wiring.bind_pending(&hooks), 0);
    assert_eq!(hooks.binds(LinkAction::Logout), 1);
    assert_eq!(hooks.binds(LinkAction::Profile), 1);
}

#[test]
fn late_link_is_bound_on_next_pass() {
    let hooks = FakeHooks::with(&["navLogout"]);
    let wiring = PageWiring::new();
    assert_eq!(wiring.bind_pending(&hooks), 1);
    assert!(!wiring.is_bound(LinkAction::Profile));

    hooks.add("navProfile");
    assert_eq!(wiring.bind_pending(&hooks), 1);
    assert!(wiring.is_bound(LinkAction::Profile));
    assert_eq!(hooks.binds(LinkAction::Logout), 1);
}

#[test]
fn failed_bind_is_retried_later() {
    let mut hooks = FakeHooks::with(&BOTH);
    hooks.broken.insert("navProfile");
    let wiring = PageWiring::new();
    assert_eq!(wiring.bind_pending(&hooks), 1);
    assert!(!wiring.is_bound(LinkAction::Profile));

    hooks.broken.clear();
    assert_eq!(wiring.bind_pending(&hooks), 1);
    assert_eq!(hooks.binds(LinkAction::Profile), 1);
}

// =============================================================
// start / document_parsed
// =============================================================

#[test]
fn parsed_page_refreshes_once_at_start() {
    let hooks = FakeHooks::with(&BOTH);
    let wiring = PageWiring::new();
    assert_eq!(wiring.start(&hooks, "complete"), RefreshPlan::Now);
    assert_eq!(hooks.refreshes.get(), 1);
    assert!(wiring.has_refreshed());
    assert_eq!(hooks.binds(LinkAction::Logout), 1);
    assert_eq!(hooks.binds(LinkAction::Profile), 1);
}

#[test]
fn loading_page_defers_refresh_to_content_loaded() {
    let hooks = FakeHooks::with(&["navLogout"]);
    let wiring = PageWiring::new();
    assert_eq!(wiring.start(&hooks, "loading"), RefreshPlan::OnContentLoaded);
    assert_eq!(hooks.refreshes.get(), 0);

    hooks.add("navProfile");
    wiring.document_parsed(&hooks);
    assert_eq!(hooks.refreshes.get(), 1);
    assert_eq!(hooks.binds(LinkAction::Logout), 1);
    assert_eq!(hooks.binds(LinkAction::Profile), 1);
}

#[test]
fn repeated_content_loaded_refreshes_once() {
    let hooks = FakeHooks::with(&BOTH);
    let wiring = PageWiring::new();
    wiring.start(&hooks, "loading");
    wiring.document_parsed(&hooks);
    wiring.document_parsed(&hooks);
    assert_eq!(hooks.refreshes.get(), 1);
    assert_eq!(hooks.bind_calls.borrow().len(), 2);
}

#[test]
fn page_without_links_still_refreshes() {
    let hooks = FakeHooks::default();
    let wiring = PageWiring::new();
    wiring.start(&hooks, "interactive");
    assert_eq!(hooks.refreshes.get(), 1);
    assert!(hooks.bind_calls.borrow().is_empty());
}
