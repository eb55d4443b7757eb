use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::state::loader::{LoadingState, Tick, SETTLE_MS, TICK_MS};
use crate::state::timers::PendingSlot;

const LOADER_COLUMNS: usize = 5;

#[derive(Properties, PartialEq)]
pub struct LoaderProps {
    pub on_done: Callback<()>,
}

/// Full-screen loading overlay. Owns the tick interval and the settle
/// timeout; both are cancelled by drop if the loader unmounts early.
#[function_component(Loader)]
pub fn loader(props: &LoaderProps) -> Html {
    let state = use_state(LoadingState::new);
    let interval = use_mut_ref(PendingSlot::<Interval>::new);
    let settle = use_mut_ref(PendingSlot::<Timeout>::new);

    {
        let state = state.clone();
        let on_done = props.on_done.clone();
        let interval = interval.clone();
        let settle = settle.clone();
        use_effect_with((), move |_| {
            let interval_slot = interval.clone();
            let settle_slot = settle.clone();

            // The closure owns the only machine; `state` is its render view.
            let mut machine = LoadingState::new();
            let handle = Interval::new(TICK_MS, move || {
                let outcome = machine.tick();
                state.set(machine);

                if outcome == Tick::Finished {
                    interval_slot.borrow_mut().clear();
                    let on_done = on_done.clone();
                    settle_slot
                        .borrow_mut()
                        .arm(Timeout::new(SETTLE_MS, move || on_done.emit(())));
                }
            });
            interval.borrow_mut().arm(handle);

            move || {
                interval.borrow_mut().clear();
                settle.borrow_mut().clear();
            }
        });
    }

    let fill_style = format!("width: {}%;", state.counter());

    html! {
        <div class="loader-container">
            <div class="loader-columns">
                { for (0..LOADER_COLUMNS).map(|i| html! {
                    <div key={i} class="loader-column" />
                }) }
            </div>
            <div class="loader-content">
                <div class="loader-top-row">
                    <span>{"Thales Sossella"}</span>
                    <span>{"Portfolio ©2026"}</span>
                </div>
                <div class="loader-center">
                    <h1 class="loader-counter-big">{state.counter()}</h1>
                    <div class="loader-phrase">{state.phrase()}</div>
                </div>
                <div class="loader-bottom-row">
                    <div class="loader-progress-track">
                        <div class="loader-progress-fill" style={fill_style} />
                    </div>
                </div>
            </div>
        </div>
    }
}
