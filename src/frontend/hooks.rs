//! Subscription plumbing shared by the sections: the one-shot reveal watch,
//! the passive scroll tracker, and a cancellable animation-frame loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

use crate::logic::RevealLatch;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Scoped intersection watch over one element.
///
/// Fires `on_reveal` the first time the element intersects at the configured
/// threshold, then disconnects the underlying observer on the spot. Dropping
/// the handle before the trigger disconnects as well, so tearing a section
/// down mid-watch leaks nothing.
pub struct RevealWatch {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl RevealWatch {
    pub fn observe(
        target: &Element,
        threshold: f64,
        on_reveal: impl FnOnce() + 'static,
    ) -> Result<Self, JsValue> {
        let mut latch = RevealLatch::new();
        let mut on_reveal = Some(on_reveal);

        let callback: ObserverCallback =
            Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if latch.observe(entry.is_intersecting()) {
                        observer.disconnect();
                        if let Some(notify) = on_reveal.take() {
                            notify();
                        }
                        break;
                    }
                }
            });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealWatch {
    fn drop(&mut self) {
        // Already-disconnected observers tolerate a second disconnect.
        self.observer.disconnect();
    }
}

/// Reveal state for the element behind `node`: false until it first becomes
/// visible at `threshold`, true forever after.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with(node, move |node| {
            let watch = node.cast::<Element>().and_then(|element| {
                RevealWatch::observe(&element, threshold, move || revealed.set(true)).ok()
            });
            move || drop(watch)
        });
    }

    *revealed
}

/// Current vertical scroll offset, fed by a single passive window listener.
/// The listener lives as long as the calling component.
#[hook]
pub fn use_scroll_offset() -> f64 {
    let offset = use_state(|| 0.0f64);

    {
        let offset = offset.clone();
        use_effect_with((), move |_| {
            // gloo's EventListener registers as passive by default, which
            // keeps the browser free to scroll without waiting on us.
            let listener = window().map(|win| {
                EventListener::new(&win, "scroll", move |_| {
                    if let Some(y) = window().and_then(|win| win.scroll_y().ok()) {
                        offset.set(y);
                    }
                })
            });
            move || drop(listener)
        });
    }

    *offset
}

/// Cancellable `requestAnimationFrame` loop.
///
/// `tick` receives the frame timestamp and returns whether another frame
/// should be scheduled. Dropping (or cancelling) the handle stops the loop;
/// no tick runs after cancellation.
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl FrameLoop {
    pub fn start(mut tick: impl FnMut(f64) -> bool + 'static) -> Self {
        let raf_id = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

        {
            // The closure reaches its own slot through a weak handle so the
            // handle returned to the caller is the only thing keeping the
            // loop alive.
            let raf_id = raf_id.clone();
            let slot = Rc::downgrade(&callback);
            *callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
                raf_id.set(None);
                if !tick(timestamp) {
                    return;
                }
                let Some(slot) = slot.upgrade() else {
                    return;
                };
                if let (Some(win), Some(cb)) = (window(), slot.borrow().as_ref()) {
                    if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        raf_id.set(Some(id));
                    }
                }
            }));
        }

        if let (Some(win), Some(cb)) = (window(), callback.borrow().as_ref()) {
            if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                raf_id.set(Some(id));
            }
        }

        Self { raf_id, callback }
    }

    pub fn cancel(&self) {
        if let (Some(win), Some(id)) = (window(), self.raf_id.take()) {
            let _ = win.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
