//! Host-supplied frame state: battery charge and display fidelity.
//!
//! Both values are produced outside the engine (battery broadcasts, ambient
//! mode callbacks) and read by value once per frame. The engine never
//! mutates them mid-frame.

// =============================================================================
// Charging Status
// =============================================================================

/// Battery charge as supplied by the host.
///
/// The default (0%, not charging) is the safe value before the first real
/// battery reading arrives: it draws all sixty ticks inactive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChargingStatus {
    /// Charge percentage, 0.0-100.0.
    pub percent: f32,
    /// Whether the device is currently on power.
    pub is_charging: bool,
}

impl Default for ChargingStatus {
    fn default() -> Self {
        Self {
            percent: 0.0,
            is_charging: false,
        }
    }
}

// =============================================================================
// Display Mode
// =============================================================================

/// Rendering fidelity tier, ordered `Black < Gray < Full`.
///
/// The ordering decides whether hands and ticks get a black inset overlay:
/// any mode below [`DisplayMode::Full`] does.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum DisplayMode {
    /// Minimal: pure black background, no seconds hand, hollow hands.
    Black,
    /// Low-power greyscale, no seconds hand.
    Gray,
    /// Interactive: full color and a live seconds hand.
    Full,
}

impl DisplayMode {
    /// Derive the mode from the host's ambient capability flags.
    ///
    /// Ambient with low-bit-ambient or burn-in-protection hardware drops all
    /// the way to black; plain ambient renders greyscale.
    pub const fn from_ambient_flags(ambient: bool, low_bit_ambient: bool, burn_in_protection: bool) -> Self {
        if ambient && (low_bit_ambient || burn_in_protection) {
            Self::Black
        } else if ambient {
            Self::Gray
        } else {
            Self::Full
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
