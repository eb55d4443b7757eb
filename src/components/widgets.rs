use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{window, Element, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::components::reveal::FadeUp;
use crate::content::{self, EMAIL, TOOLS};
use crate::prefs::Language;
use crate::state::scroll::{progress_ratio, SCROLL_TOP_VISIBLE_RATIO};
use crate::state::timers::PendingSlot;
use crate::state::widgets::{magnetic_offset, CopyFeedback, FaqState, COPY_RESET_MS};

const MARQUEE_REPEATS: usize = 4;

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

/// Anchor that drifts toward the pointer while hovered and springs back on
/// leave. The transform is presentational only; hit-testing is unaffected.
#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let offset = use_state(|| (0.0f64, 0.0f64));

    let onmousemove = {
        let offset = offset.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(element) = event
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
            else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            offset.set(magnetic_offset(
                event.client_x() as f64,
                event.client_y() as f64,
                rect.left(),
                rect.top(),
                rect.width(),
                rect.height(),
            ));
        })
    };

    let onmouseleave = {
        let offset = offset.clone();
        Callback::from(move |_| offset.set((0.0, 0.0)))
    };

    let (x, y) = *offset;
    let style = format!("transform: translate({x:.1}px, {y:.1}px);");

    html! {
        <a
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            class="magnetic-btn"
            {style}
            {onmousemove}
            {onmouseleave}
        >
            {props.children.clone()}
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmailCopyButtonProps {
    pub language: Language,
}

/// Copies the contact email to the clipboard. Success and failure show
/// distinct labels; either resets to idle after 2s, with repeated clicks
/// replacing the pending reset (last click wins).
#[function_component(EmailCopyButton)]
pub fn email_copy_button(props: &EmailCopyButtonProps) -> Html {
    let feedback = use_state(CopyFeedback::default);
    let reset = use_mut_ref(PendingSlot::<Timeout>::new);

    let onclick = {
        let feedback = feedback.clone();
        let reset = reset.clone();
        Callback::from(move |_| {
            // Cancel the previous click's reset before the clipboard
            // promise resolves, so it cannot flash the label back to idle
            // mid-window.
            reset.borrow_mut().clear();

            let Some(clipboard) = window().map(|w| w.navigator().clipboard()) else {
                feedback.set(CopyFeedback::Failed);
                return;
            };
            let feedback = feedback.clone();
            let reset = reset.clone();
            spawn_local(async move {
                let outcome = JsFuture::from(clipboard.write_text(EMAIL)).await;
                feedback.set(match outcome {
                    Ok(_) => CopyFeedback::Copied,
                    Err(_) => CopyFeedback::Failed,
                });

                let feedback_reset = feedback.clone();
                reset.borrow_mut().arm(Timeout::new(COPY_RESET_MS, move || {
                    feedback_reset.set(CopyFeedback::Idle);
                }));
            });
        })
    };

    let contact = &content::for_language(props.language).contact;
    let label = match *feedback {
        CopyFeedback::Idle => contact.copy,
        CopyFeedback::Copied => contact.copied,
        CopyFeedback::Failed => contact.copy_failed,
    };

    html! {
        <div class="email-container" {onclick}>
            { feedback.is_active().then(|| html! {
                <div class={classes!(
                    "copy-feedback",
                    (*feedback == CopyFeedback::Failed).then_some("copy-feedback-failed"),
                )}>
                    {label}{ if *feedback == CopyFeedback::Copied { " ✓" } else { "" } }
                </div>
            }) }
            <div class="email-display">{EMAIL}</div>
            <div class="email-hint">{label}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub language: Language,
}

/// Single-open accordion; each row reveals on scroll with a stagger.
#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let faq = use_state(FaqState::default);
    let items = content::for_language(props.language).faq.items;

    html! {
        <div class="faq-premium-wrapper">
            { for items.iter().enumerate().map(|(i, item)| {
                let is_open = faq.is_open(i);
                let onclick = {
                    let faq = faq.clone();
                    Callback::from(move |_| faq.set(faq.toggle(i)))
                };
                html! {
                    <FadeUp key={i} delay_ms={(i as u32) * 100}>
                        <div class={classes!("faq-premium-item", is_open.then_some("active"))} {onclick}>
                            <div class="faq-header">
                                <div class="faq-index">{format!("0{}", i + 1)}</div>
                                <h3 class="faq-question">{item.q}</h3>
                                <div class="faq-icon-wrapper">
                                    { if is_open { "−" } else { "+" } }
                                </div>
                            </div>
                            { is_open.then(|| html! {
                                <div class="faq-body">
                                    <div class="faq-answer-text">{item.a}</div>
                                </div>
                            }) }
                        </div>
                    </FadeUp>
                }
            }) }
        </div>
    }
}

#[function_component(ToolsCarousel)]
pub fn tools_carousel() -> Html {
    html! {
        <div class="marquee-container">
            <div class="marquee-track">
                { for (0..MARQUEE_REPEATS).flat_map(|rep| TOOLS.iter().enumerate().map(move |(i, tool)| html! {
                    <span key={rep * TOOLS.len() + i} class="tool-item">
                        {*tool}<span class="separator">{" · "}</span>
                    </span>
                })) }
            </div>
        </div>
    }
}

fn document_scroll_height() -> f64 {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0)
}

/// Appears once the reader is 15% down the page; smooth-scrolls back to top.
#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
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
                    let ratio = progress_ratio(scroll_y, document_scroll_height(), viewport);
                    visible.set(ratio > SCROLL_TOP_VISIBLE_RATIO);
                }));
            }
            move || drop(listener)
        });
    }

    let onclick = Callback::from(|_| {
        if let Some(win) = window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);
        }
    });

    if !*visible {
        return Html::default();
    }

    html! {
        <div class="scroll-top-wrapper">
            <button class="scroll-top-btn" {onclick}>{"↑"}</button>
        </div>
    }
}
