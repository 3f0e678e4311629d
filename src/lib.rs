//! # session-nav
//!
//! WASM glue that toggles the site navigation between its guest links
//! (`navLogin`, `navRegister`) and member links (`navProfile`, `navLogout`)
//! based on whether an access token sits in `localStorage`. It also owns the
//! logout and profile link clicks.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`consts`] | Storage keys, element ids, redirect targets |
//! | [`error`] | [`error::NavError`] for failed browser calls |
//! | [`session`] | Session store port and logged-in detection |
//! | [`nav`] | Navigation items and the testable [`nav::NavController`] |
//! | [`lifecycle`] | When links are bound and when the refresh runs |
//! | `browser` | web-sys adapters and DOM lifecycle wiring (`hydrate` only) |

pub mod consts;
pub mod error;
pub mod lifecycle;
pub mod nav;
pub mod session;

#[cfg(feature = "hydrate")]
pub mod browser;

/// WASM entry point: set up console logging, then wire the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console_log init failed: {e}").into());
    }
    if let Err(e) = browser::install() {
        log::warn!("session-nav install failed: {e}");
    }
}
