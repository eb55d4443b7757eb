use gloo_console::log;
use gloo_events::EventListener;
use web_sys::{window, MouseEvent};
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::cursor::SmartCursor;
use crate::components::loader::Loader;
use crate::components::navbar::Navbar;
use crate::components::sections::{
    AboutSection, ContactSection, FaqSection, HeroSection, ProcessSection, WorkSection,
};
use crate::components::widgets::ScrollToTop;
use crate::prefs::{self, Theme};
use crate::state::scroll::progress_ratio;

fn document_scroll_height() -> f64 {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0)
}

/// Fixed top progress bar scaled by how far down the page the reader is.
#[function_component(ProgressBar)]
fn progress_bar() -> Html {
    let ratio = use_state(|| 0.0f64);

    {
        let ratio = ratio.clone();
        use_effect_with((), move |_| {
            let mut listener = None;
            if let Some(win) = window() {
                let target: web_sys::EventTarget = win.clone().into();
                listener = Some(EventListener::new(&target, "scroll", move |_| {
                    let scroll_y = win.scroll_y().unwrap_or(0.0);
                    let viewport = win
                        .inner_height()
                        .ok()
                        .and_then(|value| value.as_f64())
                        .unwrap_or(0.0);
                    ratio.set(progress_ratio(scroll_y, document_scroll_height(), viewport));
                }));
            }
            move || drop(listener)
        });
    }

    html! {
        <div class="progress-bar" style={format!("transform: scaleX({:.4});", *ratio)} />
    }
}

fn spotlight_style(theme: Theme, x: f64, y: f64) -> String {
    let glow = match theme {
        Theme::Light => "rgba(255, 255, 255, 0.5)",
        Theme::Dark => "rgba(255, 255, 255, 0.03)",
    };
    format!(
        "background: radial-gradient(600px circle at {x:.0}px {y:.0}px, {glow}, transparent 40%);"
    )
}

#[derive(Properties, PartialEq)]
struct MouseSpotlightProps {
    theme: Theme,
}

/// Radial glow trailing the pointer. Owns its own mousemove listener so
/// pointer churn re-renders only this div.
#[function_component(MouseSpotlight)]
fn mouse_spotlight(props: &MouseSpotlightProps) -> Html {
    let mouse = use_state(|| (0.0f64, 0.0f64));

    {
        let mouse = mouse.clone();
        use_effect_with((), move |_| {
            let mut listener = None;
            if let Some(win) = window() {
                let target: web_sys::EventTarget = win.into();
                listener = Some(EventListener::new(&target, "mousemove", move |event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        mouse.set((event.client_x() as f64, event.client_y() as f64));
                    }
                }));
            }
            move || drop(listener)
        });
    }

    let (x, y) = *mouse;
    html! {
        <div class="mouse-spotlight" style={spotlight_style(props.theme, x, y)} />
    }
}

#[function_component(App)]
fn app() -> Html {
    let loading = use_state(|| true);
    let theme = use_state(prefs::load_theme);
    let language = use_state(prefs::load_language);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            prefs::apply_theme(current);
            log!("portfolio ready, theme:", current.as_str());
            || ()
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = (*theme).toggled();
            prefs::persist_theme(next);
            prefs::apply_theme(next);
            theme.set(next);
        })
    };

    let on_toggle_language = {
        let language = language.clone();
        Callback::from(move |_| {
            let next = (*language).toggled();
            prefs::persist_language(next);
            language.set(next);
        })
    };

    let on_loaded = {
        let loading = loading.clone();
        Callback::from(move |_| loading.set(false))
    };

    html! {
        <>
            <div class="desktop-cursor"><SmartCursor /></div>
            if *loading {
                <Loader on_done={on_loaded} />
            } else {
                <div class="main-content-wrapper">
                    <div class="terrain-backdrop" aria-hidden="true" />
                    <MouseSpotlight theme={*theme} />
                    <ProgressBar />
                    <Navbar
                        theme={*theme}
                        language={*language}
                        on_toggle_theme={on_toggle_theme}
                        on_toggle_language={on_toggle_language}
                    />
                    <main>
                        <HeroSection language={*language} />
                        <AboutSection language={*language} />
                        <WorkSection language={*language} />
                        <ProcessSection language={*language} />
                        <FaqSection language={*language} />
                        <ContactSection language={*language} />
                        <ScrollToTop />
                    </main>
                </div>
            }
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
