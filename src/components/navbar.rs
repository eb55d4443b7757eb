use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::window;
use yew::prelude::*;

use crate::content;
use crate::prefs::{Language, Theme};
use crate::state::scroll::{active_section, navbar_hidden, SectionId, NAVBAR_WATCHDOG_MS};
use crate::state::timers::PendingSlot;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub theme: Theme,
    pub language: Language,
    pub on_toggle_theme: Callback<()>,
    pub on_toggle_language: Callback<()>,
}

fn measure_section_tops() -> Vec<(SectionId, f64)> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    SectionId::ALL
        .iter()
        .filter_map(|&section| {
            document
                .get_element_by_id(section.as_str())
                .map(|element| (section, element.get_bounding_client_rect().top()))
        })
        .collect()
}

fn viewport_midpoint() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0)
        / 2.0
}

/// Capsule navbar: hides while scrolling down past 150px, reappears on any
/// upward scroll, and a 600ms watchdog forces it visible once scrolling
/// stops. The active pill follows whichever section top last crossed the
/// viewport midpoint.
#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let active = use_state(|| SectionId::Hero);
    let hidden = use_state(|| false);
    let mobile_open = use_state(|| false);
    let last_y = use_mut_ref(|| 0.0f64);
    let watchdog = use_mut_ref(PendingSlot::<Timeout>::new);

    {
        let active = active.clone();
        let hidden = hidden.clone();
        let last_y = last_y.clone();
        let watchdog = watchdog.clone();
        use_effect_with((), move |_| {
            let Some(win) = window() else {
                return Box::new(|| ()) as Box<dyn FnOnce()>;
            };

            let target: web_sys::EventTarget = win.clone().into();
            let listener = EventListener::new(&target, "scroll", move |_| {
                let latest = win.scroll_y().unwrap_or(0.0);
                let previous = *last_y.borrow();
                *last_y.borrow_mut() = latest;

                hidden.set(navbar_hidden(latest, previous));

                // Each scroll event supersedes the pending force-visible.
                let hidden_reset = hidden.clone();
                watchdog.borrow_mut().arm(Timeout::new(NAVBAR_WATCHDOG_MS, move || {
                    hidden_reset.set(false);
                }));

                active.set(active_section(&measure_section_tops(), viewport_midpoint()));
            });

            Box::new(move || drop(listener)) as Box<dyn FnOnce()>
        });
    }

    let nav = &content::for_language(props.language).nav;
    let nav_links = [
        (SectionId::About, nav.about),
        (SectionId::Services, nav.services),
        (SectionId::Work, nav.work),
        (SectionId::Faq, nav.faq),
    ];

    let on_theme_click = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_| on_toggle_theme.emit(()))
    };

    let on_language_click = {
        let on_toggle_language = props.on_toggle_language.clone();
        Callback::from(move |_| on_toggle_language.emit(()))
    };

    let on_mobile_toggle = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |_| mobile_open.set(!*mobile_open))
    };

    let close_mobile = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |_| mobile_open.set(false))
    };

    let on_logo_click = {
        let active = active.clone();
        Callback::from(move |_| active.set(SectionId::Hero))
    };

    let weight = |lang: Language| {
        if props.language == lang {
            "font-weight: 700;"
        } else {
            "font-weight: 400;"
        }
    };

    html! {
        <header class={classes!("navbar-fixed-wrapper", hidden.then_some("is-hidden"))}>
            <nav class="navbar-capsule">
                <a href="#hero" class="nav-logo-compact" onclick={on_logo_click}>
                    <div class="logo-dot" />
                    <span class="logo-text">{"Thales"}</span>
                </a>
                <div class="nav-links-desktop">
                    { for nav_links.iter().map(|&(section, label)| {
                        let is_active = *active == section;
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_| active.set(section))
                        };
                        html! {
                            <a
                                key={section.as_str()}
                                href={section.anchor()}
                                class={classes!("nav-link-item", is_active.then_some("active"))}
                                {onclick}
                            >
                                { is_active.then(|| html! { <div class="active-pill-bg" /> }) }
                                <span class="nav-link-text">{label}</span>
                            </a>
                        }
                    }) }
                </div>

                <div class="nav-controls">
                    <button onclick={on_language_click} class="lang-toggle-btn" aria-label="Toggle Language">
                        <span style={weight(Language::En)}>{"EN"}</span>
                        <span class="lang-separator">{"/"}</span>
                        <span style={weight(Language::Pt)}>{"PT"}</span>
                    </button>
                    <button onclick={on_theme_click} class="theme-toggle-btn" aria-label="Toggle Theme">
                        { if props.theme == Theme::Dark { "☀" } else { "☾" } }
                    </button>
                    <div class="nav-cta-wrapper">
                        <a href="#contact" class="nav-cta-btn">
                            <span>{nav.cta}</span>
                            <div class="glow-effect" />
                        </a>
                    </div>
                </div>

                <button class="mobile-toggle-btn" onclick={on_mobile_toggle}>
                    { if *mobile_open { "✕" } else { "☰" } }
                </button>
                { mobile_open.then(|| html! {
                    <div class="mobile-menu-container">
                        <div class="mobile-menu-inner">
                            { for nav_links.iter().map(|&(section, label)| html! {
                                <a
                                    key={section.as_str()}
                                    href={section.anchor()}
                                    class="mobile-link"
                                    onclick={close_mobile.clone()}
                                >
                                    {label}{" ↗"}
                                </a>
                            }) }
                            <a href="#contact" class="mobile-link mobile-link-cta" onclick={close_mobile.clone()}>
                                {nav.cta}{" ↗"}
                            </a>
                        </div>
                    </div>
                }) }
            </nav>
        </header>
    }
}
