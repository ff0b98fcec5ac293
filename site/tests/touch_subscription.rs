//! Touch listener lifecycle, exercised against a real DOM element.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use leafcurl_core::Direction;
use leafcurl_site::touch::TouchSubscription;
use wasm_bindgen_test::*;
use web_sys::{Element, Touch, TouchEvent, TouchEventInit, TouchInit};

wasm_bindgen_test_configure!(run_in_browser);

const THRESHOLD: f64 = 50.0;

fn target() -> Element {
    web_sys::window()
        .and_then(|window| window.document())
        .expect("document")
        .create_element("div")
        .expect("create div")
}

/// Dispatch a touch event on `target`; `x` is the position of the single
/// active touch point, `None` for an event with no touches (touchend).
fn dispatch(target: &Element, kind: &str, x: Option<f64>) {
    let touches = js_sys::Array::new();
    if let Some(x) = x {
        let init = TouchInit::new(0, target);
        init.set_client_x(x);
        touches.push(&Touch::new(&init).expect("touch"));
    }
    let init = TouchEventInit::new();
    init.set_touches(&touches);
    let event = TouchEvent::new_with_event_init_dict(kind, &init).expect("touch event");
    target.dispatch_event(&event).expect("dispatch");
}

fn swipe_left(target: &Element) {
    dispatch(target, "touchstart", Some(200.0));
    dispatch(target, "touchmove", Some(100.0));
    dispatch(target, "touchmove", Some(50.0));
    dispatch(target, "touchend", None);
}

fn counting(
    target: &Element,
) -> (TouchSubscription, Rc<Cell<usize>>, Rc<Cell<Option<Direction>>>) {
    let count = Rc::new(Cell::new(0));
    let last = Rc::new(Cell::new(None));
    let (count_in, last_in) = (Rc::clone(&count), Rc::clone(&last));
    let subscription = TouchSubscription::attach(target, THRESHOLD, move |direction| {
        count_in.set(count_in.get() + 1);
        last_in.set(Some(direction));
    })
    .expect("attach");
    (subscription, count, last)
}

#[wasm_bindgen_test]
fn registers_all_touch_listeners() {
    let target = target();
    let (subscription, _, _) = counting(&target);
    assert_eq!(subscription.listener_count(), 4);
}

#[wasm_bindgen_test]
fn swipe_fires_once_per_gesture() {
    let target = target();
    let (_subscription, count, last) = counting(&target);

    swipe_left(&target);
    assert_eq!(count.get(), 1);
    assert_eq!(last.get(), Some(Direction::Next));

    dispatch(&target, "touchstart", Some(100.0));
    dispatch(&target, "touchmove", Some(151.0));
    assert_eq!(count.get(), 2);
    assert_eq!(last.get(), Some(Direction::Prev));
}

#[wasm_bindgen_test]
fn short_drag_does_not_fire() {
    let target = target();
    let (_subscription, count, _) = counting(&target);

    dispatch(&target, "touchstart", Some(200.0));
    dispatch(&target, "touchmove", Some(150.0));
    dispatch(&target, "touchend", None);
    assert_eq!(count.get(), 0);
}

#[wasm_bindgen_test]
fn dropped_subscription_stops_listening() {
    let target = target();
    let (subscription, count, _) = counting(&target);

    swipe_left(&target);
    assert_eq!(count.get(), 1);

    drop(subscription);
    swipe_left(&target);
    assert_eq!(count.get(), 1);
}

#[wasm_bindgen_test]
fn reattaching_replaces_the_handler() {
    let target = target();
    let (first, first_count, _) = counting(&target);
    drop(first);
    let (_second, second_count, _) = counting(&target);

    swipe_left(&target);
    assert_eq!(first_count.get(), 0);
    assert_eq!(second_count.get(), 1);
}

#[wasm_bindgen_test]
fn touchcancel_ends_the_gesture() {
    let target = target();
    let (_subscription, count, _) = counting(&target);

    dispatch(&target, "touchstart", Some(200.0));
    dispatch(&target, "touchcancel", None);
    dispatch(&target, "touchmove", Some(0.0));
    assert_eq!(count.get(), 0);
}
