//! Failures from browser API calls.
//!
//! None of these reach the user. The controller logs them and keeps going,
//! so a broken storage backend or a throwing style setter degrades to the
//! same silent no-op the page would see with a missing element.

use thiserror::Error;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("localStorage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("storage access for {key:?} failed: {message}")]
    Storage { key: String, message: String },
    #[error("setting display on #{id} failed: {message}")]
    Style { id: String, message: String },
    #[error("navigation to {target:?} failed: {message}")]
    Navigation { target: String, message: String },
    #[error("binding click on #{id} failed: {message}")]
    Listener { id: String, message: String },
}

impl NavError {
    pub fn storage(key: &str, message: impl Into<String>) -> Self {
        Self::Storage { key: key.to_owned(), message: message.into() }
    }

    pub fn style(id: &str, message: impl Into<String>) -> Self {
        Self::Style { id: id.to_owned(), message: message.into() }
    }

    pub fn navigation(target: &str, message: impl Into<String>) -> Self {
        Self::Navigation { target: target.to_owned(), message: message.into() }
    }

    pub fn listener(id: &str, message: impl Into<String>) -> Self {
        Self::Listener { id: id.to_owned(), message: message.into() }
    }
}

/// Best-effort text for a thrown JS value.
#[cfg(feature = "hydrate")]
pub fn js_message(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
