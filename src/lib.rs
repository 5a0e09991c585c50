#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod device;
pub mod interface;
pub mod layout;
pub mod registers;

// Re-export main types
pub use config::{
    Config, FaultQueue, InterruptMode, OperationMode, PinPolarity, Resolution, StatusFlags,
};
pub use device::Adt7410Driver;
pub use interface::I2cInterface;

/// ADT7410 I2C address with A1 and A0 both tied low (default: 0x48)
///
/// Use [`I2cInterface::default()`] for this configuration.
pub const I2C_ADDRESS_BASE: u8 = 0x48;

/// Manufacturer code held in bits [7:3] of the ID register
pub const MANUFACTURER_ID: u8 = layout::id::manufacturer_id::DEFAULT;

/// Time the device ignores the bus after a software reset, in microseconds
pub const RESET_DURATION_US: u32 = 200;

/// Driver errors
///
/// Raw register accessors return the interface error unchanged; this type is
/// used by the typed helpers built on top of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Unexpected manufacturer code in the ID register (contains the raw ID)
    InvalidDevice(u8),
    /// Invalid configuration parameter
    InvalidConfig,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
