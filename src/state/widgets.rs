//! State behind the small interaction widgets: FAQ accordion, magnetic
//! buttons, tilt cards, and the copy-email feedback.

/// Pointer offsets are damped by this factor before being applied as the
/// magnetic translation.
pub const MAGNETIC_DAMPING: f64 = 0.3;

/// Maximum tilt of a project card, degrees per axis.
pub const TILT_MAX_DEG: f64 = 5.0;

pub const COPY_RESET_MS: u32 = 2000;

/// At most one item open at a time; toggling the open item collapses it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct FaqState {
    open: Option<usize>,
}

impl FaqState {
    pub fn toggle(self, index: usize) -> Self {
        let open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        Self { open }
    }

    pub fn is_open(self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(self) -> Option<usize> {
        self.open
    }
}

/// Offset of the pointer from the element centre, damped. The element
/// springs toward this point via its CSS transition.
pub fn magnetic_offset(
    client_x: f64,
    client_y: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> (f64, f64) {
    let middle_x = client_x - (left + width / 2.0);
    let middle_y = client_y - (top + height / 2.0);
    (middle_x * MAGNETIC_DAMPING, middle_y * MAGNETIC_DAMPING)
}

/// Maps the pointer position within a card to (rotate_x, rotate_y) degrees.
/// Centre is flat; the edges reach ±[`TILT_MAX_DEG`]. Vertical movement
/// tilts around X in the opposite direction so the card leans toward the
/// pointer.
pub fn card_tilt(mouse_x: f64, mouse_y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let x_pct = (mouse_x / width - 0.5).clamp(-0.5, 0.5);
    let y_pct = (mouse_y / height - 0.5).clamp(-0.5, 0.5);
    (
        -y_pct * 2.0 * TILT_MAX_DEG,
        x_pct * 2.0 * TILT_MAX_DEG,
    )
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CopyFeedback {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyFeedback {
    pub fn is_active(self) -> bool {
        self != Self::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faq_opening_another_index_closes_the_first() {
        let state = FaqState::default().toggle(2).toggle(0);
        assert!(state.is_open(0));
        assert!(!state.is_open(2));
        assert_eq!(state.open_index(), Some(0));
    }

    #[test]
    fn faq_toggle_twice_closes() {
        let state = FaqState::default().toggle(2).toggle(2);
        assert_eq!(state.open_index(), None);
    }

    #[test]
    fn faq_never_holds_two_open() {
        let mut state = FaqState::default();
        for i in [0, 3, 1, 1, 2, 0] {
            state = state.toggle(i);
            assert!(state.open_index().is_none() || (0..4).contains(&state.open_index().unwrap()));
            let open_count = (0..4).filter(|&j| state.is_open(j)).count();
            assert!(open_count <= 1);
        }
    }

    #[test]
    fn magnetic_offset_is_zero_at_centre_and_damped_elsewhere() {
        assert_eq!(magnetic_offset(50.0, 25.0, 0.0, 0.0, 100.0, 50.0), (0.0, 0.0));
        let (x, y) = magnetic_offset(100.0, 50.0, 0.0, 0.0, 100.0, 50.0);
        assert_eq!(x, 50.0 * MAGNETIC_DAMPING);
        assert_eq!(y, 25.0 * MAGNETIC_DAMPING);
    }

    #[test]
    fn card_tilt_is_bounded_and_flat_at_centre() {
        assert_eq!(card_tilt(200.0, 100.0, 400.0, 200.0), (0.0, 0.0));
        let (rx, ry) = card_tilt(400.0, 0.0, 400.0, 200.0);
        assert_eq!(rx, TILT_MAX_DEG);
        assert_eq!(ry, TILT_MAX_DEG);
        let (rx, ry) = card_tilt(-50.0, 500.0, 400.0, 200.0);
        assert!(rx.abs() <= TILT_MAX_DEG && ry.abs() <= TILT_MAX_DEG);
        assert_eq!(card_tilt(10.0, 10.0, 0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn copy_feedback_active_states() {
        assert!(!CopyFeedback::Idle.is_active());
        assert!(CopyFeedback::Copied.is_active());
        assert!(CopyFeedback::Failed.is_active());
    }
}
