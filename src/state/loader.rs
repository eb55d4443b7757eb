//! Loading-screen counter. The component owns the interval; this machine
//! only answers "what happens on the next tick".

use crate::content::LOADING_PHRASES;

pub const TICK_MS: u32 = 25;
pub const SETTLE_MS: u32 = 800;
pub const COUNTER_MAX: u32 = 100;

const PHRASE_STEP: u32 = 20;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tick {
    Running,
    /// Counter just reached 100; stop the interval and start the settle
    /// delay. Returned exactly once.
    Finished,
}

#[derive(Clone, Copy, Debug)]
pub struct LoadingState {
    counter: u32,
    phrase_index: usize,
}

impl LoadingState {
    pub fn new() -> Self {
        Self {
            counter: 0,
            phrase_index: 0,
        }
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn phrase(&self) -> &'static str {
        LOADING_PHRASES[self.phrase_index]
    }

    pub fn is_complete(&self) -> bool {
        self.counter >= COUNTER_MAX
    }

    pub fn tick(&mut self) -> Tick {
        if self.is_complete() {
            return Tick::Running;
        }
        self.counter += 1;
        if self.counter % PHRASE_STEP == 0 && self.counter < COUNTER_MAX {
            self.phrase_index = (self.phrase_index + 1).min(LOADING_PHRASES.len() - 1);
        }
        if self.is_complete() {
            Tick::Finished
        } else {
            Tick::Running
        }
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hundred_ticks_reach_exactly_one_hundred() {
        let mut state = LoadingState::new();
        let mut finishes = 0;
        for i in 1..=100 {
            if state.tick() == Tick::Finished {
                finishes += 1;
                assert_eq!(i, 100);
            }
        }
        assert_eq!(state.counter(), 100);
        assert_eq!(finishes, 1);
        assert!(state.is_complete());
    }

    #[test]
    fn ticks_after_completion_change_nothing() {
        let mut state = LoadingState::new();
        while state.tick() == Tick::Running {}
        for _ in 0..10 {
            assert_eq!(state.tick(), Tick::Running);
            assert_eq!(state.counter(), 100);
        }
    }

    #[test]
    fn phrase_advances_at_each_twenty_below_hundred() {
        let mut state = LoadingState::new();
        let mut seen = vec![state.phrase()];
        for _ in 0..100 {
            state.tick();
            if seen.last() != Some(&state.phrase()) {
                seen.push(state.phrase());
            }
        }
        // Advances at 20/40/60/80; the crossing at 100 ends the run instead.
        assert_eq!(seen, LOADING_PHRASES[..5].to_vec());
    }

    #[test]
    fn counter_is_monotone() {
        let mut state = LoadingState::new();
        let mut last = state.counter();
        for _ in 0..120 {
            state.tick();
            assert!(state.counter() >= last);
            assert!(state.counter() <= COUNTER_MAX);
            last = state.counter();
        }
    }
}
