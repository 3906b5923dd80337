//! Conventional scroll phase codes.
//!
//! Bindings forward whatever integer the widget reports. These constants
//! and [`ScrollState`] only name the codes most scrollable widgets use.

/// The view is not currently scrolling.
pub const SCROLL_STATE_IDLE: i32 = 0;
/// The view is being dragged by outside input such as a touch or pointer.
pub const SCROLL_STATE_DRAGGING: i32 = 1;
/// The view is animating to a final position without outside control.
pub const SCROLL_STATE_SETTLING: i32 = 2;

/// Scroll phase of a scrollable container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollState {
    #[default]
    Idle,
    Dragging,
    /// Inertial motion after a fling, or a programmatic smooth scroll
    Settling,
}

impl ScrollState {
    /// Map a widget code to a known phase. Unknown codes return `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            SCROLL_STATE_IDLE => Some(ScrollState::Idle),
            SCROLL_STATE_DRAGGING => Some(ScrollState::Dragging),
            SCROLL_STATE_SETTLING => Some(ScrollState::Settling),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            ScrollState::Idle => SCROLL_STATE_IDLE,
            ScrollState::Dragging => SCROLL_STATE_DRAGGING,
            ScrollState::Settling => SCROLL_STATE_SETTLING,
        }
    }

    /// Returns true while the content is moving
    pub fn is_scrolling(self) -> bool {
        !matches!(self, ScrollState::Idle)
    }
}

impl From<ScrollState> for i32 {
    fn from(state: ScrollState) -> Self {
        state.code()
    }
}
