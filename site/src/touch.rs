//! Scoped touch-listener subscription for swipe navigation.
//!
//! [`TouchSubscription::attach`] registers `touchstart`, `touchmove`,
//! `touchend` and `touchcancel` on an element. Dropping the subscription
//! removes all of them, so the owner releases them simply by letting go of
//! the value: on unmount, when the target element changes, or when `attach`
//! itself bails out half way.

use std::cell::RefCell;
use std::rc::Rc;

use leafcurl_core::{Direction, SwipeTracker};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Element, TouchEvent};

type TouchClosure = Closure<dyn FnMut(TouchEvent)>;

pub struct TouchSubscription {
    target: Element,
    listeners: Vec<(&'static str, TouchClosure)>,
    tracker: Rc<RefCell<SwipeTracker>>,
}

impl TouchSubscription {
    /// Start tracking swipes on `target`; `on_swipe` runs once per recognized gesture.
    pub fn attach(
        target: &Element,
        threshold: f64,
        on_swipe: impl Fn(Direction) + 'static,
    ) -> Result<Self, JsValue> {
        let tracker = Rc::new(RefCell::new(SwipeTracker::new(threshold)));
        let mut subscription = Self {
            target: target.clone(),
            listeners: Vec::with_capacity(4),
            tracker: Rc::clone(&tracker),
        };

        let start_tracker = Rc::clone(&tracker);
        subscription.listen(
            "touchstart",
            Closure::wrap(Box::new(move |event: TouchEvent| {
                if let Some(x) = primary_x(&event) {
                    start_tracker.borrow_mut().touch_start(x);
                }
            }) as Box<dyn FnMut(TouchEvent)>),
        )?;

        let move_tracker = Rc::clone(&tracker);
        subscription.listen(
            "touchmove",
            Closure::wrap(Box::new(move |event: TouchEvent| {
                let Some(x) = primary_x(&event) else {
                    return;
                };
                // Release the borrow before re-entering the UI.
                let fired = move_tracker.borrow_mut().touch_move(x);
                if let Some(direction) = fired {
                    on_swipe(direction);
                }
            }) as Box<dyn FnMut(TouchEvent)>),
        )?;

        // A cancelled touch (browser took over, e.g. scrolling) ends the gesture too.
        for event in ["touchend", "touchcancel"] {
            let end_tracker = Rc::clone(&tracker);
            subscription.listen(
                event,
                Closure::wrap(Box::new(move |_event: TouchEvent| {
                    end_tracker.borrow_mut().touch_end();
                }) as Box<dyn FnMut(TouchEvent)>),
            )?;
        }

        Ok(subscription)
    }

    /// Number of DOM listeners currently registered.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn listen(&mut self, event: &'static str, closure: TouchClosure) -> Result<(), JsValue> {
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        self.target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &options,
            )?;
        self.listeners.push((event, closure));
        Ok(())
    }
}

impl Drop for TouchSubscription {
    fn drop(&mut self) {
        for (event, closure) in self.listeners.drain(..) {
            let _ = self
                .target
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
        if let Ok(mut tracker) = self.tracker.try_borrow_mut() {
            tracker.reset();
        }
    }
}

/// Horizontal position of the first active touch point.
fn primary_x(event: &TouchEvent) -> Option<f64> {
    event
        .touches()
        .get(0)
        .map(|touch| f64::from(touch.client_x()))
}
