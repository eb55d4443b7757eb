/// One-shot latch behind each revealed element: `fire` reports true exactly
/// once, no matter how many intersect/unintersect cycles follow.
#[derive(Clone, Copy, Debug, Default)]
pub struct RevealLatch {
    fired: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_exactly_once() {
        let mut latch = RevealLatch::new();
        assert!(!latch.has_fired());
        assert!(latch.fire());
        for _ in 0..5 {
            assert!(!latch.fire());
        }
        assert!(latch.has_fired());
    }

    #[test]
    fn latches_are_independent() {
        let mut a = RevealLatch::new();
        let b = RevealLatch::new();
        assert!(a.fire());
        assert!(!b.has_fired());
    }
}
