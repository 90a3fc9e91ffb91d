//! One-shot page behaviors: sticky CTA visibility, section reveal, keyboard
//! activation feedback, outside-click dismissal and mobile detection. Each
//! initializer guards its own required elements and no-ops when missing.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use gloo_timers::callback::Timeout;
use yew::Callback;

use crate::config;

pub(crate) fn has_intersection_observer(window: &web_sys::Window) -> bool {
    js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false)
}

pub(crate) fn prefers_reduced_motion(window: &web_sys::Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn ua_is_mobile(user_agent: &str) -> bool {
    let user_agent = user_agent.to_lowercase();
    config::MOBILE_UA_MARKERS
        .iter()
        .any(|marker| user_agent.contains(marker))
}

/// Whether the current user agent looks like a mobile platform.
pub fn is_mobile() -> bool {
    web_sys::window()
        .and_then(|window| window.navigator().user_agent().ok())
        .map(|ua| ua_is_mobile(&ua))
        .unwrap_or(false)
}

/// Show the sticky CTA bar once less than half of the hero remains visible.
/// Without IntersectionObserver support the bar is simply always shown.
pub fn init_sticky_cta() {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(hero) = document.query_selector(".hero").ok().flatten() else {
        warn!("sticky CTA: hero section not found, skipping");
        return;
    };
    let Some(sticky) = document.get_element_by_id("sticky-cta") else {
        warn!("sticky CTA: bar not found, skipping");
        return;
    };

    if !has_intersection_observer(&window) {
        let _ = sticky.set_attribute("aria-hidden", "false");
        return;
    }

    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let hidden = entry.intersection_ratio() >= config::STICKY_HERO_RATIO;
            let _ = sticky.set_attribute("aria-hidden", if hidden { "true" } else { "false" });
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&js_sys::Array::of1(&JsValue::from_f64(
        config::STICKY_HERO_RATIO,
    )));
    if let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    {
        observer.observe(&hero);
        callback.forget();
    }
}

/// Reveal `.reveal-section` elements as they approach the viewport, each one
/// once. Reduced motion or a missing observer reveals everything up front.
pub fn init_section_reveal() {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Ok(sections) = document.query_selector_all(".reveal-section") else {
        return;
    };
    if sections.length() == 0 {
        return;
    }

    if !has_intersection_observer(&window) || prefers_reduced_motion(&window) {
        for index in 0..sections.length() {
            if let Some(section) = sections
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                let _ = section.class_list().add_1("reveal-in");
            }
        }
        return;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("reveal-in");
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);
    if let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    {
        for index in 0..sections.length() {
            if let Some(section) = sections
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                observer.observe(&section);
            }
        }
        callback.forget();
    }
}

/// Press feedback for keyboard activation: Enter or Space on an interactive
/// element briefly scales it down. Delegated from the document so
/// late-rendered elements are covered too.
pub fn init_keyboard_feedback() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    let callback = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
        let key = event.key();
        if key != "Enter" && key != " " {
            return;
        }
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(interactive)) =
            target.closest("button, a, summary, [tabindex]:not([tabindex=\"-1\"])")
        else {
            return;
        };
        let Ok(element) = interactive.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let _ = element.style().set_property("transform", "scale(0.98)");
        Timeout::new(config::KEY_FEEDBACK_MS, move || {
            let _ = element.style().remove_property("transform");
        })
        .forget();
    }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

    let _ = document.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref());
    callback.forget();
}

/// Fire `on_close` on the first click outside `panel`, then remove the
/// listener. Registration happens on the next turn of the event loop so the
/// click that opened the panel cannot immediately close it again.
pub fn close_on_outside_click(panel: Element, on_close: Callback<()>) {
    Timeout::new(0, move || {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };

        let slot: Rc<RefCell<Option<Closure<dyn FnMut(web_sys::MouseEvent)>>>> =
            Rc::new(RefCell::new(None));
        let callback = Closure::wrap(Box::new({
            let slot = slot.clone();
            let document = document.clone();
            move |event: web_sys::MouseEvent| {
                let inside = event
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                    .map(|node| panel.contains(Some(&node)))
                    .unwrap_or(false);
                if inside {
                    return;
                }
                on_close.emit(());
                if let Some(callback) = slot.borrow_mut().take() {
                    let _ = document.remove_event_listener_with_callback(
                        "click",
                        callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);

        let _ =
            document.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::ua_is_mobile;

    #[test]
    fn phone_user_agents_classify_as_mobile() {
        assert!(ua_is_mobile(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"
        ));
        assert!(ua_is_mobile("Mozilla/5.0 (Linux; Android 14; Pixel 8)"));
        assert!(ua_is_mobile("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"));
    }

    #[test]
    fn desktop_user_agents_do_not() {
        assert!(!ua_is_mobile(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36"
        ));
        assert!(!ua_is_mobile("Mozilla/5.0 (X11; Linux x86_64; rv:126.0)"));
    }
}
