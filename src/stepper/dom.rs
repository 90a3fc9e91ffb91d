//! DOM binding for the stepper engine: element discovery, the reduced-motion
//! short-circuit, the intersection-gated listener lifecycle and
//! frame-coalesced recomputation. Listener lifetimes are tied to the page,
//! there is no teardown entry point.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::behaviors::{has_intersection_observer, prefers_reduced_motion};
use crate::config;
use crate::stepper::engine::{
    FrameGate, ListenChange, SectionGeometry, StepperEngine, StepperView,
};

/// Engine writes applied to the live rail and step elements; a missing
/// element skips just that write.
struct DomStepperView {
    rail: Option<HtmlElement>,
    steps: Vec<Element>,
}

impl StepperView for DomStepperView {
    fn set_rail_width(&mut self, value: &str) {
        if let Some(rail) = &self.rail {
            let _ = rail.style().set_property("width", value);
        }
    }

    fn set_step_active(&mut self, index: usize, active: bool) {
        if let Some(step) = self.steps.get(index) {
            let classes = step.class_list();
            let _ = if active {
                classes.add_1("active")
            } else {
                classes.remove_1("active")
            };
        }
    }
}

fn read_geometry(window: &Window, section: &Element) -> SectionGeometry {
    let rect = section.get_bounding_client_rect();
    SectionGeometry {
        top: rect.top(),
        height: rect.height(),
        viewport: window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0),
    }
}

fn collect_steps(section: &Element) -> Vec<Element> {
    let mut steps = Vec::new();
    if let Ok(list) = section.query_selector_all(".progress-step") {
        for index in 0..list.length() {
            if let Some(step) = list
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                steps.push(step);
            }
        }
    }
    steps
}

fn attach_listeners(window: &Window, listener: &Closure<dyn FnMut()>) {
    let function = listener.as_ref().unchecked_ref();
    let _ = window.add_event_listener_with_callback("scroll", function);
    let _ = window.add_event_listener_with_callback("resize", function);
}

fn detach_listeners(window: &Window, listener: &Closure<dyn FnMut()>) {
    let function = listener.as_ref().unchecked_ref();
    let _ = window.remove_event_listener_with_callback("scroll", function);
    let _ = window.remove_event_listener_with_callback("resize", function);
}

/// Wire the stepper to the section with the given id, containing one
/// `.progress-rail-fill` and an ordered set of `.progress-step` elements.
/// A missing section aborts the whole component; a missing rail or missing
/// steps only disables that part.
pub fn init(section_id: &str) {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(section) = document.get_element_by_id(section_id) else {
        warn!("stepper: section #{section_id} not found, skipping");
        return;
    };

    let rail = section
        .query_selector(".progress-rail-fill")
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());
    if rail.is_none() {
        warn!("stepper: progress rail not found, rail updates disabled");
    }
    let steps = collect_steps(&section);
    if steps.is_empty() {
        warn!("stepper: no step elements found, step updates disabled");
    }

    let step_count = steps.len();
    let mut engine = StepperEngine::new(DomStepperView { rail, steps }, step_count);

    // One-time decision, never re-evaluated for the rest of the session.
    if prefers_reduced_motion(&window) {
        engine.complete();
        return;
    }

    let engine = Rc::new(RefCell::new(engine));
    let gate = Rc::new(FrameGate::new());

    // One recomputation per rendered frame, reading geometry fresh.
    let frame = Rc::new(Closure::wrap(Box::new({
        let engine = engine.clone();
        let gate = gate.clone();
        let window = window.clone();
        let section = section.clone();
        move || {
            gate.release();
            // A frame queued by the last in-view signal may land after the
            // section has already left; the engine skips those.
            engine
                .borrow_mut()
                .update_if_listening(&read_geometry(&window, &section));
        }
    }) as Box<dyn FnMut()>));

    // Scroll and resize signals funnel into at most one queued frame.
    let on_signal = Rc::new(Closure::wrap(Box::new({
        let gate = gate.clone();
        let window = window.clone();
        let frame = frame.clone();
        move || {
            if gate.try_arm() {
                let _ = window.request_animation_frame((*frame).as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));

    let mut observing = false;
    if has_intersection_observer(&window) {
        let callback = Closure::wrap(Box::new({
            let engine = engine.clone();
            let window = window.clone();
            let section = section.clone();
            let on_signal = on_signal.clone();
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let change = engine.borrow_mut().set_intersecting(true);
                        engine.borrow_mut().update(&read_geometry(&window, &section));
                        if change == ListenChange::Start {
                            attach_listeners(&window, &on_signal);
                        }
                    } else if engine.borrow_mut().set_intersecting(false) == ListenChange::Stop {
                        detach_listeners(&window, &on_signal);
                    }
                }
            }
        })
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let breakpoints = js_sys::Array::new();
        for threshold in config::STEPPER_BREAKPOINTS {
            breakpoints.push(&JsValue::from_f64(threshold));
        }
        let options = IntersectionObserverInit::new();
        options.set_threshold(&breakpoints);
        if let Ok(observer) =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        {
            observer.observe(&section);
            // The observer callback holds the listener closures alive.
            callback.forget();
            observing = true;
        }
    }

    if !observing {
        // No intersection tracking: degrade to always-on listeners.
        let _ = engine.borrow_mut().set_intersecting(true);
        engine.borrow_mut().update(&read_geometry(&window, &section));
        attach_listeners(&window, &on_signal);
        // Listener closures live for the page.
        std::mem::forget(on_signal);
        std::mem::forget(frame);
    }
}
