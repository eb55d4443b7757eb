use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, MouseEvent};
use yew::prelude::*;

const DOT_SIZE: f64 = 8.0;
const RING_SIZE: f64 = 40.0;

fn is_coarse_pointer() -> bool {
    window()
        .and_then(|w| w.match_media("(pointer: coarse)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn targets_link(event: &MouseEvent) -> bool {
    let Some(element) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
    else {
        return false;
    };
    matches!(element.tag_name().as_str(), "A" | "BUTTON")
        || element.closest("a").ok().flatten().is_some()
}

/// Dot-and-ring cursor that trails the pointer; the ring swells over links
/// and buttons. Renders nothing on touch devices.
#[function_component(SmartCursor)]
pub fn smart_cursor() -> Html {
    let position = use_state(|| (0.0f64, 0.0f64));
    let hovering = use_state(|| false);
    let enabled = use_state(|| false);

    {
        let position = position.clone();
        let hovering = hovering.clone();
        let enabled = enabled.clone();
        use_effect_with((), move |_| {
            let mut listeners = Vec::new();

            if let Some(win) = window() {
                if !is_coarse_pointer() {
                    enabled.set(true);

                    let target: web_sys::EventTarget = win.into();
                    listeners.push(EventListener::new(&target, "mousemove", move |event| {
                        if let Some(event) = event.dyn_ref::<MouseEvent>() {
                            position.set((event.client_x() as f64, event.client_y() as f64));
                        }
                    }));
                    listeners.push(EventListener::new(&target, "mouseover", move |event| {
                        if let Some(event) = event.dyn_ref::<MouseEvent>() {
                            hovering.set(targets_link(event));
                        }
                    }));
                }
            }

            move || drop(listeners)
        });
    }

    if !*enabled {
        return Html::default();
    }

    let (x, y) = *position;
    let dot_style = format!(
        "transform: translate({:.0}px, {:.0}px);",
        x - DOT_SIZE / 2.0,
        y - DOT_SIZE / 2.0
    );
    let ring_style = format!(
        "transform: translate({:.0}px, {:.0}px) scale({});",
        x - RING_SIZE / 2.0,
        y - RING_SIZE / 2.0,
        if *hovering { 2.0 } else { 1.0 }
    );

    html! {
        <>
            <div class="cursor-dot" style={dot_style} />
            <div
                class={classes!("cursor-ring", hovering.then_some("is-hovering"))}
                style={ring_style}
            />
        </>
    }
}
