//! At-most-one pending timer slot. gloo timer handles cancel on drop, so
//! arming a slot that already holds a handle cancels the old one, and
//! dropping the slot cancels whatever is left.

#[derive(Debug)]
pub struct PendingSlot<T> {
    inner: Option<T>,
}

impl<T> PendingSlot<T> {
    pub fn new() -> Self {
        Self { inner: None }
    }

    /// Replaces the pending handle, cancelling any previous one.
    pub fn arm(&mut self, handle: T) {
        self.inner = Some(handle);
    }

    /// Cancels the pending handle, if any. Safe to call at any time, in
    /// particular before the replacement handle even exists.
    pub fn clear(&mut self) {
        self.inner = None;
    }

    pub fn is_armed(&self) -> bool {
        self.inner.is_some()
    }
}

impl<T> Default for PendingSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Stand-in for a cancel-on-drop timer handle.
    struct FakeTimer {
        cancelled: Rc<Cell<bool>>,
    }

    impl FakeTimer {
        fn new() -> (Self, Rc<Cell<bool>>) {
            let cancelled = Rc::new(Cell::new(false));
            (
                Self {
                    cancelled: cancelled.clone(),
                },
                cancelled,
            )
        }
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    #[test]
    fn arming_cancels_the_previous_handle() {
        let mut slot = PendingSlot::new();
        let (first, first_cancelled) = FakeTimer::new();
        let (second, second_cancelled) = FakeTimer::new();

        slot.arm(first);
        slot.arm(second);

        assert!(first_cancelled.get());
        assert!(!second_cancelled.get());
        assert!(slot.is_armed());
    }

    #[test]
    fn second_copy_click_cancels_reset_before_rescheduling() {
        // Click 1 schedules a reset; click 2 clears it up front, so the
        // stale reset can never fire in the gap before click 2's own
        // reset is armed.
        let mut slot = PendingSlot::new();
        let (first_reset, first_cancelled) = FakeTimer::new();
        slot.arm(first_reset);

        slot.clear();
        assert!(first_cancelled.get());
        assert!(!slot.is_armed());

        let (second_reset, second_cancelled) = FakeTimer::new();
        slot.arm(second_reset);
        assert!(slot.is_armed());
        assert!(!second_cancelled.get());
    }

    #[test]
    fn repeated_arms_leave_exactly_one_pending() {
        let mut slot = PendingSlot::new();
        let flags: Vec<_> = (0..5)
            .map(|_| {
                let (timer, cancelled) = FakeTimer::new();
                slot.arm(timer);
                cancelled
            })
            .collect();

        let live = flags.iter().filter(|c| !c.get()).count();
        assert_eq!(live, 1);
        assert!(!flags[4].get());
    }

    #[test]
    fn dropping_the_slot_cancels_the_pending_handle() {
        let (timer, cancelled) = FakeTimer::new();
        {
            let mut slot = PendingSlot::new();
            slot.arm(timer);
        }
        assert!(cancelled.get());
    }
}
