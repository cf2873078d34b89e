use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::Reducible;

use crate::error::SiteError;

/// Browser-level navigation the header needs. Kept behind a trait so the
/// menu logic can run against a recorder in tests.
pub trait ViewNavigator {
    fn set_fragment(&self, anchor: &str);

    /// Returns false when no element carries `anchor` as its id.
    fn scroll_into_view(&self, anchor: &str) -> bool;
}

pub struct BrowserNavigator;

impl BrowserNavigator {
    fn push_fragment(anchor: &str) -> Result<(), SiteError> {
        let window = web_sys::window().ok_or_else(|| SiteError::Dom("no window".into()))?;
        let history = window.history()?;
        history.push_state_with_url(&JsValue::NULL, "", Some(&format!("#{}", anchor)))?;
        Ok(())
    }
}

impl ViewNavigator for BrowserNavigator {
    fn set_fragment(&self, anchor: &str) {
        if let Err(err) = Self::push_fragment(anchor) {
            gloo_console::error!("Failed to update address fragment:", err.to_string());
        }
    }

    fn scroll_into_view(&self, anchor: &str) -> bool {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(anchor))
        else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Prop-friendly handle; two handles are equal when they share a navigator.
#[derive(Clone)]
pub struct NavigatorHandle(pub Rc<dyn ViewNavigator>);

impl PartialEq for NavigatorHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for NavigatorHandle {
    fn default() -> Self {
        NavigatorHandle(Rc::new(BrowserNavigator))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

pub enum MenuAction {
    /// Mobile trigger. Opens a closed menu; on an open one it is the
    /// dropdown's dismiss signal.
    Toggle,
    Close,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::Close => false,
        };
        if open == self.open {
            self
        } else {
            Rc::new(MenuState { open })
        }
    }
}

/// Moves the page to `anchor` and returns the menu update to dispatch.
/// A missing target only skips the scroll.
pub fn activate_link(navigator: &dyn ViewNavigator, anchor: &str) -> MenuAction {
    navigator.set_fragment(anchor);
    if !navigator.scroll_into_view(anchor) {
        debug!("No element with id '{}', skipping scroll", anchor);
    }
    MenuAction::Close
}
