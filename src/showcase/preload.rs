use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;
use yew::Callback;

use crate::error::SiteError;
use crate::showcase::state::LoadOutcome;

struct Slot {
    image: HtmlImageElement,
    on_load: Closure<dyn FnMut()>,
    on_error: Closure<dyn FnMut()>,
}

/// Off-DOM image loads for a fixed list of sources.
///
/// All requests are issued in one pass, so they race each other. Every
/// `load`/`error` event is reported through `on_settled` as it happens.
/// Dropping the preloader detaches all listeners; nothing is reported after
/// that, even if the browser finishes the request later.
pub struct Preloader {
    slots: Vec<Slot>,
}

impl Preloader {
    pub fn start(
        sources: &[String],
        on_settled: Callback<(usize, LoadOutcome)>,
    ) -> Result<Self, SiteError> {
        let mut slots = Vec::with_capacity(sources.len());
        for index in 0..sources.len() {
            let image = HtmlImageElement::new()?;

            let on_load = {
                let on_settled = on_settled.clone();
                Closure::wrap(Box::new(move || {
                    on_settled.emit((index, LoadOutcome::Loaded));
                }) as Box<dyn FnMut()>)
            };
            let on_error = {
                let on_settled = on_settled.clone();
                Closure::wrap(Box::new(move || {
                    on_settled.emit((index, LoadOutcome::Failed));
                }) as Box<dyn FnMut()>)
            };

            image.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
            image.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())?;
            slots.push(Slot { image, on_load, on_error });
        }

        // Listeners go on first so a cached image cannot settle unobserved.
        for (slot, src) in slots.iter().zip(sources) {
            slot.image.set_src(src);
        }

        Ok(Self { slots })
    }
}

impl Drop for Preloader {
    fn drop(&mut self) {
        for slot in &self.slots {
            let detached = slot
                .image
                .remove_event_listener_with_callback("load", slot.on_load.as_ref().unchecked_ref())
                .and_then(|_| {
                    slot.image.remove_event_listener_with_callback(
                        "error",
                        slot.on_error.as_ref().unchecked_ref(),
                    )
                });
            if let Err(err) = detached {
                gloo_console::error!(
                    "Failed to detach image listeners:",
                    SiteError::from(err).to_string()
                );
            }
        }
    }
}
