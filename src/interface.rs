//! I2C bus interface for the ADT7410
//!
//! This module implements the `device-driver` register interface traits on
//! top of an `embedded-hal` I2C bus. Any other type implementing those traits
//! can be handed to [`crate::Adt7410Driver`] instead.
//!
//! Every transfer starts by writing the register address to the device's
//! address pointer. 16-bit registers are sent and received most significant
//! byte first. A transfer with `size_bits == 0` carries the address pointer
//! only; that is how the software reset command is issued.

use crate::I2C_ADDRESS_BASE;

use device_driver::RegisterInterface;

/// Largest payload of a single register transfer
const MAX_PAYLOAD: usize = 2;

/// I2C interface for the ADT7410
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface with the default address (0x48, A1 and A0 LOW)
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut sensor = Adt7410Driver::new(interface);
    /// ```
    pub const fn default(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_BASE,
        }
    }

    /// Create a new I2C interface from the levels of the A1 and A0 pins
    ///
    /// The four combinations select addresses 0x48 to 0x4B.
    pub const fn with_address_pins(i2c: I2C, a1: bool, a0: bool) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_BASE | ((a1 as u8) << 1) | (a0 as u8),
        }
    }

    /// Create a new I2C interface with a custom device address
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// I2C address used for this device
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

/// Build the write frame: register address followed by the payload
fn write_frame(address: u8, write_data: &[u8]) -> ([u8; MAX_PAYLOAD + 1], usize) {
    let mut buffer = [0u8; MAX_PAYLOAD + 1];
    buffer[0] = address;
    let len = write_data.len().min(MAX_PAYLOAD);
    buffer[1..=len].copy_from_slice(&write_data[..len]);
    (buffer, len + 1)
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len() for I2C
        if read_data.is_empty() {
            // Nothing to clock in; only set the address pointer
            return self.i2c.write(self.address, &[address]);
        }
        self.i2c.write_read(self.address, &[address], read_data)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in write_data.len() for I2C
        let (buffer, len) = write_frame(address, write_data);
        self.i2c.write(self.address, &buffer[..len])
    }
}

#[cfg(feature = "async")]
impl<I2C, E> device_driver::AsyncRegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal_async::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    async fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len() for I2C
        if read_data.is_empty() {
            return self.i2c.write(self.address, &[address]).await;
        }
        self.i2c
            .write_read(self.address, &[address], read_data)
            .await
    }

    async fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in write_data.len() for I2C
        let (buffer, len) = write_frame(address, write_data);
        self.i2c.write(self.address, &buffer[..len]).await
    }
}
