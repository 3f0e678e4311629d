//! Fixed names shared between the page markup, the login flow, and this crate.

// ── Storage keys ────────────────────────────────────────────────

/// Presence of this key is the only logged-in signal.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

pub const USER_KEY: &str = "user";

/// Every key written by the login flow; logout removes exactly these.
pub const SESSION_KEYS: [&str; 3] = [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY];

// ── Element ids ─────────────────────────────────────────────────

pub const NAV_LOGIN_ID: &str = "navLogin";
pub const NAV_REGISTER_ID: &str = "navRegister";
pub const NAV_PROFILE_ID: &str = "navProfile";
pub const NAV_LOGOUT_ID: &str = "navLogout";

// ── Redirect targets ────────────────────────────────────────────

/// Landing page after logout. Relative to the current page.
pub const LOGOUT_TARGET: &str = "index.html";

pub const PROFILE_TARGET: &str = "profile.html";

// ── CSS ─────────────────────────────────────────────────────────

pub const DISPLAY_VISIBLE: &str = "block";
pub const DISPLAY_HIDDEN: &str = "none";
