//! Typed values for the Configuration and Status registers
//!
//! Each enum mirrors one field of the Configuration register; its discriminant
//! is the raw field code from [`crate::layout::configuration`]. [`Config`]
//! packs all of them into a register byte and back.
//!
//! # Example
//!
//! ```
//! use adt7410::{Config, OperationMode, Resolution};
//!
//! let config = Config {
//!     resolution: Resolution::Bits16,
//!     operation_mode: OperationMode::OneSps,
//!     ..Config::default()
//! };
//! assert_eq!(config.to_bits(), 0xC0);
//! assert_eq!(Config::from_bits(0xC0), config);
//! ```

use crate::layout::{configuration as cfg, status};

/// Number of consecutive out-of-limit conversions before INT and CT assert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultQueue {
    /// 1 fault (power-on)
    #[default]
    One = cfg::fault_queue::FAULTS_1 as isize,
    /// 2 faults
    Two = cfg::fault_queue::FAULTS_2 as isize,
    /// 3 faults
    Three = cfg::fault_queue::FAULTS_3 as isize,
    /// 4 faults
    Four = cfg::fault_queue::FAULTS_4 as isize,
}

impl FaultQueue {
    /// Raw field code
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a field code; bits above the field width are ignored
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            cfg::fault_queue::FAULTS_1 => Self::One,
            cfg::fault_queue::FAULTS_2 => Self::Two,
            cfg::fault_queue::FAULTS_3 => Self::Three,
            _ => Self::Four,
        }
    }

    /// Number of faults this setting waits for
    #[must_use]
    pub const fn count(self) -> u8 {
        self as u8 + 1
    }
}

/// Output pin polarity (CT and INT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinPolarity {
    /// Active low (power-on)
    #[default]
    ActiveLow = cfg::ct_pin_polarity::ACTIVE_LOW as isize,
    /// Active high
    ActiveHigh = cfg::ct_pin_polarity::ACTIVE_HIGH as isize,
}

impl PinPolarity {
    /// Raw field code
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a field code; bits above the field width are ignored
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        if bits & 1 == cfg::ct_pin_polarity::ACTIVE_HIGH {
            Self::ActiveHigh
        } else {
            Self::ActiveLow
        }
    }
}

/// INT/CT output behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptMode {
    /// Interrupt mode (power-on): outputs latch until the status register is read
    #[default]
    Interrupt = cfg::int_ct_mode::INTERRUPT_MODE as isize,
    /// Comparator mode: outputs follow the temperature against the limits
    Comparator = cfg::int_ct_mode::COMPARATOR_MODE as isize,
}

impl InterruptMode {
    /// Raw field code
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a field code; bits above the field width are ignored
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        if bits & 1 == cfg::int_ct_mode::COMPARATOR_MODE {
            Self::Comparator
        } else {
            Self::Interrupt
        }
    }
}

/// Conversion mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperationMode {
    /// Back-to-back conversions (power-on)
    #[default]
    Continuous = cfg::opmode::CONTINUOUS as isize,
    /// Single conversion, typically 240 ms, then shutdown
    OneShot = cfg::opmode::ONE_SHOT as isize,
    /// One 60 ms conversion per second
    OneSps = cfg::opmode::ONE_SPS as isize,
    /// Conversion circuitry powered down
    Shutdown = cfg::opmode::SHUTDOWN as isize,
}

impl OperationMode {
    /// Raw field code
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a field code; bits above the field width are ignored
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            cfg::opmode::CONTINUOUS => Self::Continuous,
            cfg::opmode::ONE_SHOT => Self::OneShot,
            cfg::opmode::ONE_SPS => Self::OneSps,
            _ => Self::Shutdown,
        }
    }

    /// Typical conversion time in milliseconds, if the mode converts at all
    #[must_use]
    pub const fn conversion_time_ms(self) -> Option<u32> {
        match self {
            Self::Continuous | Self::OneShot => Some(240),
            Self::OneSps => Some(60),
            Self::Shutdown => None,
        }
    }
}

/// ADC resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    /// Sign + 12 bits (power-on); low three temperature bits are event flags
    #[default]
    Bits13 = cfg::resolution::RES_13_BIT as isize,
    /// Sign + 15 bits
    Bits16 = cfg::resolution::RES_16_BIT as isize,
}

impl Resolution {
    /// Raw field code
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a field code; bits above the field width are ignored
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        if bits & 1 == cfg::resolution::RES_16_BIT {
            Self::Bits16
        } else {
            Self::Bits13
        }
    }
}

/// Place a field code at the position given by its mask
const fn place(code: u8, mask: u8) -> u8 {
    (code << mask.trailing_zeros()) & mask
}

/// Read a field code from a register value
const fn extract(raw: u8, mask: u8) -> u8 {
    (raw & mask) >> mask.trailing_zeros()
}

/// Complete contents of the Configuration register
///
/// `Config::default()` is the power-on configuration (0x00).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Fault queue depth
    pub fault_queue: FaultQueue,
    /// CT pin polarity
    pub ct_polarity: PinPolarity,
    /// INT pin polarity
    pub int_polarity: PinPolarity,
    /// INT/CT mode
    pub interrupt_mode: InterruptMode,
    /// Operation mode
    pub operation_mode: OperationMode,
    /// ADC resolution
    pub resolution: Resolution,
}

impl Config {
    /// Pack into a Configuration register value
    #[must_use]
    pub const fn to_bits(&self) -> u8 {
        place(self.fault_queue.bits(), cfg::fault_queue::MASK)
            | place(self.ct_polarity.bits(), cfg::ct_pin_polarity::MASK)
            | place(self.int_polarity.bits(), cfg::int_pin_polarity::MASK)
            | place(self.interrupt_mode.bits(), cfg::int_ct_mode::MASK)
            | place(self.operation_mode.bits(), cfg::opmode::MASK)
            | place(self.resolution.bits(), cfg::resolution::MASK)
    }

    /// Unpack a Configuration register value
    #[must_use]
    pub const fn from_bits(raw: u8) -> Self {
        Self {
            fault_queue: FaultQueue::from_bits(extract(raw, cfg::fault_queue::MASK)),
            ct_polarity: PinPolarity::from_bits(extract(raw, cfg::ct_pin_polarity::MASK)),
            int_polarity: PinPolarity::from_bits(extract(raw, cfg::int_pin_polarity::MASK)),
            interrupt_mode: InterruptMode::from_bits(extract(raw, cfg::int_ct_mode::MASK)),
            operation_mode: OperationMode::from_bits(extract(raw, cfg::opmode::MASK)),
            resolution: Resolution::from_bits(extract(raw, cfg::resolution::MASK)),
        }
    }
}

/// Decoded Status register
///
/// Bit 4 (THIGH in the register map) flags the undertemperature event and bit
/// 5 (TLOW) the overtemperature event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusFlags {
    /// Temperature fell below TLOW
    pub under_temperature: bool,
    /// Temperature rose above THIGH
    pub over_temperature: bool,
    /// Temperature rose above TCRIT
    pub critical: bool,
    /// A conversion result is waiting in the temperature register (nRDY low)
    pub ready: bool,
}

impl StatusFlags {
    /// Decode a raw Status register value
    #[must_use]
    pub const fn from_bits(raw: u8) -> Self {
        Self {
            under_temperature: raw & status::thigh::MASK != 0,
            over_temperature: raw & status::tlow::MASK != 0,
            critical: raw & status::tcrit::MASK != 0,
            ready: raw & status::n_rdy::MASK == 0,
        }
    }

    /// Whether any limit event is flagged
    #[must_use]
    pub const fn any_event(&self) -> bool {
        self.under_temperature || self.over_temperature || self.critical
    }
}
