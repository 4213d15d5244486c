//! Status modes and how to step between them

const MODE_NAME_IDLE: &str = "idle";
const MODE_NAME_PEACE: &str = "peace";
const MODE_NAME_WARNING: &str = "warning";
const MODE_NAME_DANGER: &str = "danger";
const MODE_NAME_SOLID_GREEN: &str = "solid_green";
const MODE_NAME_SOLID_YELLOW: &str = "solid_yellow";
const MODE_NAME_SOLID_RED: &str = "solid_red";

const MODE_ID_IDLE: u8 = 1;
const MODE_ID_PEACE: u8 = 2;
const MODE_ID_WARNING: u8 = 3;
const MODE_ID_DANGER: u8 = 4;
const MODE_ID_SOLID_GREEN: u8 = 5;
const MODE_ID_SOLID_YELLOW: u8 = 6;
const MODE_ID_SOLID_RED: u8 = 7;

/// Status shown on the ring
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// Ring off
    #[default]
    Idle = MODE_ID_IDLE,
    /// Calm green animation
    Peace = MODE_ID_PEACE,
    /// Yellow hazard chase and strobe
    Warning = MODE_ID_WARNING,
    /// Red chase, flashes and cop lights, never sleeps
    Danger = MODE_ID_DANGER,
    SolidGreen = MODE_ID_SOLID_GREEN,
    SolidYellow = MODE_ID_SOLID_YELLOW,
    SolidRed = MODE_ID_SOLID_RED,
}

impl Mode {
    /// All modes in id order
    pub const ALL: [Self; 7] = [
        Self::Idle,
        Self::Peace,
        Self::Warning,
        Self::Danger,
        Self::SolidGreen,
        Self::SolidYellow,
        Self::SolidRed,
    ];

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_IDLE => Self::Idle,
            MODE_ID_PEACE => Self::Peace,
            MODE_ID_WARNING => Self::Warning,
            MODE_ID_DANGER => Self::Danger,
            MODE_ID_SOLID_GREEN => Self::SolidGreen,
            MODE_ID_SOLID_YELLOW => Self::SolidYellow,
            MODE_ID_SOLID_RED => Self::SolidRed,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => MODE_NAME_IDLE,
            Self::Peace => MODE_NAME_PEACE,
            Self::Warning => MODE_NAME_WARNING,
            Self::Danger => MODE_NAME_DANGER,
            Self::SolidGreen => MODE_NAME_SOLID_GREEN,
            Self::SolidYellow => MODE_NAME_SOLID_YELLOW,
            Self::SolidRed => MODE_NAME_SOLID_RED,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_IDLE => Some(Self::Idle),
            MODE_NAME_PEACE => Some(Self::Peace),
            MODE_NAME_WARNING => Some(Self::Warning),
            MODE_NAME_DANGER => Some(Self::Danger),
            MODE_NAME_SOLID_GREEN => Some(Self::SolidGreen),
            MODE_NAME_SOLID_YELLOW => Some(Self::SolidYellow),
            MODE_NAME_SOLID_RED => Some(Self::SolidRed),
            _ => None,
        }
    }

    /// Whether the mode runs the fade/sleep loop
    ///
    /// Idle is already dark and Danger must stay visible.
    pub const fn is_power_saving(self) -> bool {
        !matches!(self, Self::Idle | Self::Danger)
    }

    /// Solid color modes
    pub const fn is_solid(self) -> bool {
        matches!(self, Self::SolidGreen | Self::SolidYellow | Self::SolidRed)
    }

    /// Next mode on the animated axis: Idle, Peace, Warning, Danger
    ///
    /// Clamps at Danger. Solid modes are not on this axis and jump straight
    /// to Danger.
    pub const fn step_up_animated(self) -> Self {
        match self {
            Self::Idle => Self::Peace,
            Self::Peace => Self::Warning,
            Self::Warning
            | Self::Danger
            | Self::SolidGreen
            | Self::SolidYellow
            | Self::SolidRed => Self::Danger,
        }
    }

    /// Previous mode on the animated axis, clamping at Idle
    ///
    /// Solid modes drop to Idle.
    pub const fn step_down_animated(self) -> Self {
        match self {
            Self::Danger => Self::Warning,
            Self::Warning => Self::Peace,
            Self::Peace
            | Self::Idle
            | Self::SolidGreen
            | Self::SolidYellow
            | Self::SolidRed => Self::Idle,
        }
    }

    /// Next mode on the solid axis: Idle, green, yellow, red
    ///
    /// Clamps at red. Animated modes restart the axis at green.
    pub const fn step_up_solid(self) -> Self {
        match self {
            Self::SolidGreen => Self::SolidYellow,
            Self::SolidYellow | Self::SolidRed => Self::SolidRed,
            Self::Idle | Self::Peace | Self::Warning | Self::Danger => Self::SolidGreen,
        }
    }

    /// Previous mode on the solid axis, clamping at Idle
    ///
    /// Animated modes drop to Idle.
    pub const fn step_down_solid(self) -> Self {
        match self {
            Self::SolidRed => Self::SolidYellow,
            Self::SolidYellow => Self::SolidGreen,
            Self::SolidGreen | Self::Idle | Self::Peace | Self::Warning | Self::Danger => {
                Self::Idle
            }
        }
    }
}
