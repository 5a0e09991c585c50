//! Driver API for the ADT7410
//!
//! [`Adt7410Driver`] owns the bus interface and offers:
//!
//! - one raw `get_*`/`set_*` pair per register, each exactly one bus
//!   transaction at the register's natural width, with no masking or
//!   validation and the interface error returned unchanged;
//! - typed helpers built on the raw accessors and on the field views in
//!   [`crate::registers`], reporting failures as [`Error`].
//!
//! Raw values are never interpreted. In particular the temperature register is
//! returned as its 16-bit pattern; turning it into degrees needs the current
//! resolution and is left to the caller.

use crate::config::{Config, OperationMode, Resolution, StatusFlags};
use crate::layout;
use crate::registers::RegisterDevice;
use crate::{Error, MANUFACTURER_ID, RESET_DURATION_US};

#[cfg(not(feature = "async"))]
use device_driver::RegisterInterface;

#[cfg(feature = "async")]
use device_driver::AsyncRegisterInterface;

/// Largest value the hysteresis field holds, in °C
const MAX_HYSTERESIS: u8 = layout::thyst::hysteresis::MASK;

/// Main driver for the ADT7410
pub struct Adt7410Driver<I> {
    device: RegisterDevice<I>,
}

impl<I> Adt7410Driver<I> {
    /// Create a new driver on top of a bus interface
    ///
    /// No bus traffic happens here; call [`verify`](Self::verify) to check the
    /// part is present.
    pub fn new(interface: I) -> Self {
        Self {
            device: RegisterDevice::new(interface),
        }
    }

    /// Field-level access to the Status, Configuration, THYST and ID registers
    ///
    /// # Example
    /// ```ignore
    /// sensor.registers().configuration().modify(|w| w.set_resolution(true))?;
    /// ```
    pub fn registers(&mut self) -> &mut RegisterDevice<I> {
        &mut self.device
    }

    /// Consume the driver and return the bus interface
    pub fn release(self) -> I {
        self.device.interface
    }
}

/// Decode the manufacturer code from a raw ID value
const fn manufacturer_of(id: u8) -> u8 {
    (id & layout::id::manufacturer_id::MASK) >> layout::id::manufacturer_id::MASK.trailing_zeros()
}

#[cfg(not(feature = "async"))]
impl<I> Adt7410Driver<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    fn read_u8(&mut self, address: u8) -> Result<u8, I::Error> {
        let mut buffer = [0u8; 1];
        self.device.interface.read_register(address, 8, &mut buffer)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("ADT7410 read: reg=0x{:02X} value=0x{:02X}", address, buffer[0]);

        Ok(buffer[0])
    }

    fn write_u8(&mut self, address: u8, value: u8) -> Result<(), I::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("ADT7410 write: reg=0x{:02X} value=0x{:02X}", address, value);

        self.device.interface.write_register(address, 8, &[value])
    }

    fn read_u16(&mut self, address: u8) -> Result<u16, I::Error> {
        // MSB at `address`, LSB at `address + 1`, read in one transfer
        let mut buffer = [0u8; 2];
        self.device
            .interface
            .read_register(address, 16, &mut buffer)?;
        let value = u16::from_be_bytes(buffer);

        #[cfg(feature = "defmt")]
        defmt::trace!("ADT7410 read: reg=0x{:02X} value=0x{:04X}", address, value);

        Ok(value)
    }

    fn write_u16(&mut self, address: u8, value: u16) -> Result<(), I::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("ADT7410 write: reg=0x{:02X} value=0x{:04X}", address, value);

        self.device
            .interface
            .write_register(address, 16, &value.to_be_bytes())
    }

    /// Write the temperature register (0x00)
    ///
    /// The register is read-only on the device; the write is still issued.
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub fn set_temperature(&mut self, value: u16) -> Result<(), I::Error> {
        self.write_u16(layout::temperature::ADDRESS, value)
    }

    /// Read the raw temperature register (0x00)
    ///
    /// The value is the two's complement pattern as sent by the device. With
    /// 13-bit resolution bits [2:0] are the TLOW/THIGH/TCRIT flags, with
    /// 16-bit resolution they are the low bits of the temperature.
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub fn get_temperature(&mut self) -> Result<u16, I::Error> {
        self.read_u16(layout::temperature::ADDRESS)
    }

    /// Write the status register (0x02)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub fn set_status(&mut self, value: u8) -> Result<(), I::Error> {
        self.write_u8(layout::status::ADDRESS, value)
    }

    /// Read the raw status register (0x02)
    ///
    /// Reading clears the latched event flags on the device.
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub fn get_status(&mut self) -> Result<u8, I::Error> {
        self.read_u8(layout::status::ADDRESS)
    }

    /// Write the configuration register (0x03)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub fn set_configuration(&mut self, value: u8) -> Result<(), I::Error> {
        self.write_u8(layout::configuration::ADDRESS, value)
    }

    /// Read the raw configuration register (0x03)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub fn get_configuration(&mut self) -> Result<u8, I::Error> {
        self.read_u8(layout::configuration::ADDRESS)
    }

    /// Write the THIGH setpoint (0x04)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub fn set_thigh(&mut self, value: u16) -> Result<(), I::Error> {
        self.write_u16(layout::thigh::ADDRESS, value)
    }

    /// Read the THIGH setpoint (0x04)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub fn get_thigh(&mut self) -> Result<u16, I::Error> {
        self.read_u16(layout::thigh::ADDRESS)
    }

    /// Write the TLOW setpoint (0x06)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub fn set_tlow(&mut self, value: u16) -> Result<(), I::Error> {
        self.write_u16(layout::tlow::ADDRESS, value)
    }

    /// Read the TLOW setpoint (0x06)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub fn get_tlow(&mut self) -> Result<u16, I::Error> {
        self.read_u16(layout::tlow::ADDRESS)
    }

    /// Write the TCRIT setpoint (0x08)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub fn set_tcrit(&mut self, value: u16) -> Result<(), I::Error> {
        self.write_u16(layout::tcrit::ADDRESS, value)
    }

    /// Read the TCRIT setpoint (0x08)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub fn get_tcrit(&mut self) -> Result<u16, I::Error> {
        self.read_u16(layout::tcrit::ADDRESS)
    }

    /// Write the THYST setpoint (0x0A)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub fn set_thyst(&mut self, value: u8) -> Result<(), I::Error> {
        self.write_u8(layout::thyst::ADDRESS, value)
    }

    /// Read the THYST setpoint (0x0A)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub fn get_thyst(&mut self) -> Result<u8, I::Error> {
        self.read_u8(layout::thyst::ADDRESS)
    }

    /// Write the ID register (0x0B)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub fn set_id(&mut self, value: u8) -> Result<(), I::Error> {
        self.write_u8(layout::id::ADDRESS, value)
    }

    /// Read the raw ID register (0x0B)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub fn get_id(&mut self) -> Result<u8, I::Error> {
        self.read_u8(layout::id::ADDRESS)
    }

    /// Send the software reset command (0x2F)
    ///
    /// This is a zero-width write: only the command address goes on the bus.
    /// The device then reloads its power-on values and ignores the bus for
    /// about [`RESET_DURATION_US`] microseconds; see
    /// [`software_reset`](Self::software_reset) for a version that waits.
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub fn set_reset(&mut self) -> Result<(), I::Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!("ADT7410 software reset");

        self.device
            .interface
            .write_register(layout::reset::ADDRESS, layout::reset::SIZE_BITS, &[])
    }

    /// Zero-width read of the reset command address (0x2F)
    ///
    /// No payload is transferred, so the value is always 0.
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub fn get_reset(&mut self) -> Result<u8, I::Error> {
        self.device
            .interface
            .read_register(layout::reset::ADDRESS, layout::reset::SIZE_BITS, &mut [])?;
        Ok(0)
    }

    /// Check that the ID register carries the Analog Devices manufacturer code
    ///
    /// Returns the silicon revision on success.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - The manufacturer field is not 0b11001 ([`Error::InvalidDevice`])
    pub fn verify(&mut self) -> Result<u8, Error<I::Error>> {
        let id = self.get_id()?;
        if manufacturer_of(id) != MANUFACTURER_ID {
            #[cfg(feature = "defmt")]
            defmt::warn!("ADT7410 not found: ID register reads 0x{:02X}", id);

            return Err(Error::InvalidDevice(id));
        }
        Ok(id & layout::id::revision_id::MASK)
    }

    /// Read the manufacturer field of the ID register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn manufacturer_id(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.id().read()?.manufacturer_id())
    }

    /// Read the silicon revision field of the ID register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn revision_id(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.id().read()?.revision_id())
    }

    /// Read and decode the configuration register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_config(&mut self) -> Result<Config, Error<I::Error>> {
        Ok(Config::from_bits(self.get_configuration()?))
    }

    /// Write a complete configuration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure(&mut self, config: &Config) -> Result<(), Error<I::Error>> {
        self.set_configuration(config.to_bits())?;
        Ok(())
    }

    /// Change the operation mode, keeping the other configuration fields
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_operation_mode(&mut self, mode: OperationMode) -> Result<(), Error<I::Error>> {
        self.device.configuration().modify(|w| {
            w.set_opmode(mode.bits());
        })?;
        Ok(())
    }

    /// Change the ADC resolution, keeping the other configuration fields
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_resolution(&mut self, resolution: Resolution) -> Result<(), Error<I::Error>> {
        self.device.configuration().modify(|w| {
            w.set_resolution(resolution == Resolution::Bits16);
        })?;
        Ok(())
    }

    /// Read and decode the status register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn status(&mut self) -> Result<StatusFlags, Error<I::Error>> {
        Ok(StatusFlags::from_bits(self.get_status()?))
    }

    /// Read the hysteresis in °C
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn hysteresis(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.thyst().read()?.hysteresis())
    }

    /// Set the hysteresis in °C (0 to 15)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `degrees` is above 15 ([`Error::InvalidConfig`])
    /// - Communication with the device fails
    pub fn set_hysteresis(&mut self, degrees: u8) -> Result<(), Error<I::Error>> {
        if degrees > MAX_HYSTERESIS {
            return Err(Error::InvalidConfig);
        }
        self.device.thyst().write(|w| {
            w.set_hysteresis(degrees);
        })?;
        Ok(())
    }

    /// Reset the device and wait until it accepts bus traffic again
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay provider implementing `embedded_hal::delay::DelayNs`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn software_reset<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.set_reset()?;
        delay.delay_us(RESET_DURATION_US);
        Ok(())
    }
}

#[cfg(feature = "async")]
impl<I> Adt7410Driver<I>
where
    I: AsyncRegisterInterface<AddressType = u8>,
{
    async fn read_u8(&mut self, address: u8) -> Result<u8, I::Error> {
        let mut buffer = [0u8; 1];
        self.device
            .interface
            .read_register(address, 8, &mut buffer)
            .await?;

        #[cfg(feature = "defmt")]
        defmt::trace!("ADT7410 read: reg=0x{:02X} value=0x{:02X}", address, buffer[0]);

        Ok(buffer[0])
    }

    async fn write_u8(&mut self, address: u8, value: u8) -> Result<(), I::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("ADT7410 write: reg=0x{:02X} value=0x{:02X}", address, value);

        self.device
            .interface
            .write_register(address, 8, &[value])
            .await
    }

    async fn read_u16(&mut self, address: u8) -> Result<u16, I::Error> {
        let mut buffer = [0u8; 2];
        self.device
            .interface
            .read_register(address, 16, &mut buffer)
            .await?;
        let value = u16::from_be_bytes(buffer);

        #[cfg(feature = "defmt")]
        defmt::trace!("ADT7410 read: reg=0x{:02X} value=0x{:04X}", address, value);

        Ok(value)
    }

    async fn write_u16(&mut self, address: u8, value: u16) -> Result<(), I::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("ADT7410 write: reg=0x{:02X} value=0x{:04X}", address, value);

        self.device
            .interface
            .write_register(address, 16, &value.to_be_bytes())
            .await
    }

    /// Write the temperature register (0x00)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub async fn set_temperature(&mut self, value: u16) -> Result<(), I::Error> {
        self.write_u16(layout::temperature::ADDRESS, value).await
    }

    /// Read the raw temperature register (0x00)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub async fn get_temperature(&mut self) -> Result<u16, I::Error> {
        self.read_u16(layout::temperature::ADDRESS).await
    }

    /// Write the status register (0x02)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub async fn set_status(&mut self, value: u8) -> Result<(), I::Error> {
        self.write_u8(layout::status::ADDRESS, value).await
    }

    /// Read the raw status register (0x02)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub async fn get_status(&mut self) -> Result<u8, I::Error> {
        self.read_u8(layout::status::ADDRESS).await
    }

    /// Write the configuration register (0x03)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub async fn set_configuration(&mut self, value: u8) -> Result<(), I::Error> {
        self.write_u8(layout::configuration::ADDRESS, value).await
    }

    /// Read the raw configuration register (0x03)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub async fn get_configuration(&mut self) -> Result<u8, I::Error> {
        self.read_u8(layout::configuration::ADDRESS).await
    }

    /// Write the THIGH setpoint (0x04)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub async fn set_thigh(&mut self, value: u16) -> Result<(), I::Error> {
        self.write_u16(layout::thigh::ADDRESS, value).await
    }

    /// Read the THIGH setpoint (0x04)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub async fn get_thigh(&mut self) -> Result<u16, I::Error> {
        self.read_u16(layout::thigh::ADDRESS).await
    }

    /// Write the TLOW setpoint (0x06)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub async fn set_tlow(&mut self, value: u16) -> Result<(), I::Error> {
        self.write_u16(layout::tlow::ADDRESS, value).await
    }

    /// Read the TLOW setpoint (0x06)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub async fn get_tlow(&mut self) -> Result<u16, I::Error> {
        self.read_u16(layout::tlow::ADDRESS).await
    }

    /// Write the TCRIT setpoint (0x08)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub async fn set_tcrit(&mut self, value: u16) -> Result<(), I::Error> {
        self.write_u16(layout::tcrit::ADDRESS, value).await
    }

    /// Read the TCRIT setpoint (0x08)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub async fn get_tcrit(&mut self) -> Result<u16, I::Error> {
        self.read_u16(layout::tcrit::ADDRESS).await
    }

    /// Write the THYST setpoint (0x0A)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub async fn set_thyst(&mut self, value: u8) -> Result<(), I::Error> {
        self.write_u8(layout::thyst::ADDRESS, value).await
    }

    /// Read the THYST setpoint (0x0A)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub async fn get_thyst(&mut self) -> Result<u8, I::Error> {
        self.read_u8(layout::thyst::ADDRESS).await
    }

    /// Write the ID register (0x0B)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub async fn set_id(&mut self, value: u8) -> Result<(), I::Error> {
        self.write_u8(layout::id::ADDRESS, value).await
    }

    /// Read the raw ID register (0x0B)
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub async fn get_id(&mut self) -> Result<u8, I::Error> {
        self.read_u8(layout::id::ADDRESS).await
    }

    /// Send the software reset command (0x2F) as a zero-width write
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub async fn set_reset(&mut self) -> Result<(), I::Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!("ADT7410 software reset");

        self.device
            .interface
            .write_register(layout::reset::ADDRESS, layout::reset::SIZE_BITS, &[])
            .await
    }

    /// Zero-width read of the reset command address (0x2F); always 0
    ///
    /// # Errors
    ///
    /// Returns the interface error if the transfer fails.
    pub async fn get_reset(&mut self) -> Result<u8, I::Error> {
        self.device
            .interface
            .read_register(layout::reset::ADDRESS, layout::reset::SIZE_BITS, &mut [])
            .await?;
        Ok(0)
    }

    /// Check that the ID register carries the Analog Devices manufacturer code
    ///
    /// Returns the silicon revision on success.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - The manufacturer field is not 0b11001 ([`Error::InvalidDevice`])
    pub async fn verify(&mut self) -> Result<u8, Error<I::Error>> {
        let id = self.get_id().await?;
        if manufacturer_of(id) != MANUFACTURER_ID {
            #[cfg(feature = "defmt")]
            defmt::warn!("ADT7410 not found: ID register reads 0x{:02X}", id);

            return Err(Error::InvalidDevice(id));
        }
        Ok(id & layout::id::revision_id::MASK)
    }

    /// Read the manufacturer field of the ID register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn manufacturer_id(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.id().read_async().await?.manufacturer_id())
    }

    /// Read the silicon revision field of the ID register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn revision_id(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.id().read_async().await?.revision_id())
    }

    /// Read and decode the configuration register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_config(&mut self) -> Result<Config, Error<I::Error>> {
        Ok(Config::from_bits(self.get_configuration().await?))
    }

    /// Write a complete configuration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn configure(&mut self, config: &Config) -> Result<(), Error<I::Error>> {
        self.set_configuration(config.to_bits()).await?;
        Ok(())
    }

    /// Change the operation mode, keeping the other configuration fields
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_operation_mode(&mut self, mode: OperationMode) -> Result<(), Error<I::Error>> {
        self.device
            .configuration()
            .modify_async(|w| {
                w.set_opmode(mode.bits());
            })
            .await?;
        Ok(())
    }

    /// Change the ADC resolution, keeping the other configuration fields
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_resolution(&mut self, resolution: Resolution) -> Result<(), Error<I::Error>> {
        self.device
            .configuration()
            .modify_async(|w| {
                w.set_resolution(resolution == Resolution::Bits16);
            })
            .await?;
        Ok(())
    }

    /// Read and decode the status register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn status(&mut self) -> Result<StatusFlags, Error<I::Error>> {
        Ok(StatusFlags::from_bits(self.get_status().await?))
    }

    /// Read the hysteresis in °C
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn hysteresis(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.thyst().read_async().await?.hysteresis())
    }

    /// Set the hysteresis in °C (0 to 15)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `degrees` is above 15 ([`Error::InvalidConfig`])
    /// - Communication with the device fails
    pub async fn set_hysteresis(&mut self, degrees: u8) -> Result<(), Error<I::Error>> {
        if degrees > MAX_HYSTERESIS {
            return Err(Error::InvalidConfig);
        }
        self.device
            .thyst()
            .write_async(|w| {
                w.set_hysteresis(degrees);
            })
            .await?;
        Ok(())
    }

    /// Reset the device and wait until it accepts bus traffic again
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay provider implementing `embedded_hal_async::delay::DelayNs`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn software_reset<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        self.set_reset().await?;
        delay.delay_us(RESET_DURATION_US).await;
        Ok(())
    }
}
