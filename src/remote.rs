//! Four-button remote navigation
//!
//! Pin polling and debouncing happen elsewhere; this module only turns press
//! events into mode requests.

use crate::mode::Mode;
use crate::request::ModeRequest;

/// Buttons on the remote, in the order their presses are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum RemoteButton {
    SolidUp = 0,
    SolidDown = 1,
    AnimatedUp = 2,
    AnimatedDown = 3,
}

impl RemoteButton {
    pub const ALL: [Self; 4] = [
        Self::SolidUp,
        Self::SolidDown,
        Self::AnimatedUp,
        Self::AnimatedDown,
    ];

    pub const fn from_index(index: u8) -> Option<Self> {
        Some(match index {
            0 => Self::SolidUp,
            1 => Self::SolidDown,
            2 => Self::AnimatedUp,
            3 => Self::AnimatedDown,
            _ => return None,
        })
    }

    pub const fn mask(self) -> u8 {
        1 << self as u8
    }

    /// Request produced by pressing this button while `current` is shown
    ///
    /// Stepping down to Idle always restarts it, so a press re-blanks the
    /// ring even when it is already idle.
    pub const fn request(self, current: Mode) -> ModeRequest {
        match self {
            Self::SolidUp => ModeRequest::new(current.step_up_solid()),
            Self::SolidDown => {
                let next = current.step_down_solid();
                ModeRequest {
                    mode: next,
                    force_restart: matches!(next, Mode::Idle),
                }
            }
            Self::AnimatedUp => ModeRequest::new(current.step_up_animated()),
            Self::AnimatedDown => match current {
                Mode::Idle => ModeRequest::restart(Mode::Idle),
                _ => ModeRequest::new(current.step_down_animated()),
            },
        }
    }
}

/// Set of buttons pressed since the last poll, one bit per button index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RemoteEvents(u8);

impl RemoteEvents {
    pub const NONE: Self = Self(0);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0x0F)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, button: RemoteButton) -> bool {
        self.0 & button.mask() != 0
    }

    /// Record a press
    #[must_use]
    pub const fn with(self, button: RemoteButton) -> Self {
        Self(self.0 | button.mask())
    }

    /// Pressed buttons in handling order
    pub fn pressed(self) -> impl Iterator<Item = RemoteButton> {
        RemoteButton::ALL
            .into_iter()
            .filter(move |button| self.contains(*button))
    }
}

impl From<RemoteButton> for RemoteEvents {
    fn from(button: RemoteButton) -> Self {
        Self::NONE.with(button)
    }
}
