use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::state::reveal::RevealLatch;

// Entries start animating slightly before they are fully on-screen.
const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Observes the referenced element and latches to `true` the first time it
/// intersects the viewport. The observer disconnects itself on the first
/// hit, so repeated enter/leave cycles never re-fire.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state(|| false);
    let latch = use_mut_ref(RevealLatch::new);

    {
        let revealed = revealed.clone();
        use_effect_with((), move |_| {
            let mut handle = None;

            if let Some(element) = node.cast::<Element>() {
                let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                    move |entries: Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let entry: IntersectionObserverEntry = entry.unchecked_into();
                            if entry.is_intersecting() && latch.borrow_mut().fire() {
                                revealed.set(true);
                                observer.unobserve(&entry.target());
                                observer.disconnect();
                            }
                        }
                    },
                );

                let options = IntersectionObserverInit::new();
                options.set_root_margin(REVEAL_ROOT_MARGIN);

                if let Ok(observer) = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                ) {
                    observer.observe(&element);
                    handle = Some((observer, callback));
                }
            }

            move || {
                if let Some((observer, _callback)) = handle.take() {
                    observer.disconnect();
                }
            }
        });
    }

    *revealed
}

fn delay_style(delay_ms: u32) -> Option<String> {
    (delay_ms > 0).then(|| format!("transition-delay: {delay_ms}ms;"))
}

#[derive(Properties, PartialEq)]
pub struct FadeUpProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Fades in while rising 50px, once, on first viewport entry.
#[function_component(FadeUp)]
pub fn fade_up(props: &FadeUpProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <div
            ref={node}
            class={classes!("reveal-fade", revealed.then_some("is-revealed"), props.class.clone())}
            style={delay_style(props.delay_ms)}
        >
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MaskTextProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub children: Html,
}

/// Text slides up out of an overflow-hidden mask. The wrapper is observed
/// rather than the sliding element, which starts fully clipped and would
/// otherwise never intersect.
#[function_component(MaskText)]
pub fn mask_text(props: &MaskTextProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <div ref={node} class="mask-wrapper">
            <div
                class={classes!("reveal-mask", revealed.then_some("is-revealed"))}
                style={delay_style(props.delay_ms)}
            >
                {props.children.clone()}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ImageRevealProps {
    pub src: AttrValue,
    pub alt: AttrValue,
}

/// Image settles from an oversized scale to its natural size.
#[function_component(ImageReveal)]
pub fn image_reveal(props: &ImageRevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <div class="img-reveal-container">
            <img
                ref={node}
                class={classes!("reveal-scale", revealed.then_some("is-revealed"))}
                src={props.src.clone()}
                alt={props.alt.clone()}
            />
        </div>
    }
}
