//! web-sys adapters for the controller ports, and page lifecycle wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wasm module may start before or after the document finishes parsing.
//! [`PageWiring`] decides when to bind and refresh; this module only performs
//! the DOM side through [`PageHooks`] and routes `DOMContentLoaded` back in.

use std::rc::Rc;

use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Event, HtmlElement, Storage, Window};

use crate::error::{NavError, js_message};
use crate::lifecycle::{LinkAction, PageHooks, PageWiring, RefreshPlan};
use crate::nav::{Cancelable, NavController, NavDocument, Navigator, Visibility};
use crate::session::SessionStore;

/// `localStorage`, or the reason it could not be opened.
pub struct LocalStorage {
    storage: Result<Storage, NavError>,
}

impl LocalStorage {
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(NavError::StorageUnavailable("not provided".to_owned())),
            Err(e) => Err(NavError::StorageUnavailable(js_message(&e))),
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, NavError> {
        self.storage.as_ref().map_err(Clone::clone)
    }
}

impl SessionStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, NavError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| NavError::storage(key, js_message(&e)))
    }

    fn remove(&self, key: &str) -> Result<(), NavError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| NavError::storage(key, js_message(&e)))
    }
}

pub struct DomDocument(pub Document);

impl NavDocument for DomDocument {
    fn set_visibility(&self, id: &str, visibility: Visibility) -> Result<bool, NavError> {
        let Some(element) = self.0.get_element_by_id(id) else {
            return Ok(false);
        };
        let Ok(element) = element.dyn_into::<HtmlElement>() else {
            return Err(NavError::style(id, "not an HTML element"));
        };
        element
            .style()
            .set_property("display", visibility.css_display())
            .map_err(|e| NavError::style(id, js_message(&e)))?;
        Ok(true)
    }
}

pub struct WindowNavigator(pub Window);

impl Navigator for WindowNavigator {
    fn navigate(&self, target: &str) -> Result<(), NavError> {
        self.0
            .location()
            .set_href(target)
            .map_err(|e| NavError::navigation(target, js_message(&e)))
    }
}

impl Cancelable for Event {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}

pub type PageController = NavController<LocalStorage, DomDocument, WindowNavigator>;

struct Page {
    controller: PageController,
    wiring: PageWiring,
}

impl PageHooks for Rc<Page> {
    fn bind_click(&self, action: LinkAction) -> Result<bool, NavError> {
        let id = action.element_id();
        let Some(element) = self.controller.document().0.get_element_by_id(id) else {
            return Ok(false);
        };

        let page_for_cb = Rc::clone(self);
        let cb = Closure::wrap(Box::new(move |event: Event| match action {
            LinkAction::Logout => page_for_cb.controller.handle_logout_click(&event),
            LinkAction::Profile => page_for_cb.controller.handle_profile_click(&event),
        }) as Box<dyn FnMut(Event)>);

        element
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .map_err(|e| NavError::listener(id, js_message(&e)))?;
        cb.forget();
        Ok(true)
    }

    fn refresh(&self) {
        self.controller.refresh_visibility();
    }
}

/// Wire click handlers and schedule the initial visibility pass.
///
/// # Errors
///
/// Returns [`NavError::NoWindow`] or [`NavError::NoDocument`] outside a
/// browser page, and [`NavError::Listener`] if the `DOMContentLoaded`
/// listener cannot be attached.
pub fn install() -> Result<(), NavError> {
    let window = web_sys::window().ok_or(NavError::NoWindow)?;
    let document = window.document().ok_or(NavError::NoDocument)?;
    let store = LocalStorage::open(&window);

    let page = Rc::new(Page {
        controller: NavController::new(store, DomDocument(document.clone()), WindowNavigator(window)),
        wiring: PageWiring::new(),
    });

    if page.wiring.start(&page, &document.ready_state()) == RefreshPlan::OnContentLoaded {
        let page_for_cb = Rc::clone(&page);
        let cb = Closure::wrap(Box::new(move || {
            page_for_cb.wiring.document_parsed(&page_for_cb);
        }) as Box<dyn FnMut()>);
        document
            .add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())
            .map_err(|e| NavError::listener("document", js_message(&e)))?;
        cb.forget();
    }
    Ok(())
}
