//! Mock interface implementation for testing the ADT7410 driver

#[cfg(feature = "async")]
use device_driver::AsyncRegisterInterface;
use device_driver::RegisterInterface;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Address of the software reset command
pub const RESET_ADDRESS: u8 = 0x2F;

/// Power-on register contents, one entry per byte address
///
/// The ID register includes revision 3, as on production silicon (0xCB).
pub const POWER_ON_BYTES: [(u8, u8); 12] = [
    (0x00, 0x00), // TEMPERATURE MSB
    (0x01, 0x00), // TEMPERATURE LSB
    (0x02, 0x80), // Status
    (0x03, 0x00), // Configuration
    (0x04, 0x20), // THIGH MSB
    (0x05, 0x00), // THIGH LSB
    (0x06, 0x05), // TLOW MSB
    (0x07, 0x00), // TLOW LSB
    (0x08, 0x49), // TCRIT MSB
    (0x09, 0x80), // TCRIT LSB
    (0x0A, 0x05), // THYST
    (0x0B, 0xCB), // ID
];

/// Records operations performed on the mock interface
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Read register operation
    ReadRegister {
        /// Register address
        address: u8,
        /// Width requested by the driver
        size_bits: u32,
        /// Bytes returned, in bus order
        data: Vec<u8>,
    },
    /// Write register operation
    WriteRegister {
        /// Register address
        address: u8,
        /// Width requested by the driver
        size_bits: u32,
        /// Bytes written, in bus order
        data: Vec<u8>,
    },
}

/// Shared state for mock interface (uses interior mutability)
#[derive(Debug)]
struct MockState {
    /// Simulated register file, byte address -> value
    registers: HashMap<u8, u8>,

    /// Operations log for verification
    operations: Vec<Operation>,

    /// Failure injection flags
    fail_next_read: bool,
    fail_next_write: bool,

    /// Number of reset commands received
    reset_count: usize,
}

impl MockState {
    fn new() -> Self {
        let mut state = Self {
            registers: HashMap::new(),
            operations: Vec::new(),
            fail_next_read: false,
            fail_next_write: false,
            reset_count: 0,
        };
        state.power_on();
        state
    }

    /// Load the power-on register contents
    fn power_on(&mut self) {
        self.registers.clear();
        self.registers.extend(POWER_ON_BYTES);
    }
}

/// Mock interface for testing
#[derive(Clone)]
pub struct MockInterface {
    state: Rc<RefCell<MockState>>,
}

#[allow(dead_code)]
impl MockInterface {
    /// Create a new mock interface with power-on register values
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState::new())),
        }
    }

    /// Set a register byte
    pub fn set_register(&self, address: u8, value: u8) {
        self.state.borrow_mut().registers.insert(address, value);
    }

    /// Get a register byte
    pub fn get_register(&self, address: u8) -> u8 {
        self.state
            .borrow()
            .registers
            .get(&address)
            .copied()
            .unwrap_or(0)
    }

    /// Set a 16-bit register (MSB at `address`, LSB at `address + 1`)
    pub fn set_register_u16(&self, address: u8, value: u16) {
        let [msb, lsb] = value.to_be_bytes();
        self.set_register(address, msb);
        self.set_register(address.wrapping_add(1), lsb);
    }

    /// Get a 16-bit register
    pub fn get_register_u16(&self, address: u8) -> u16 {
        u16::from_be_bytes([
            self.get_register(address),
            self.get_register(address.wrapping_add(1)),
        ])
    }

    /// Simulate a new temperature conversion result
    pub fn set_temperature_data(&self, raw: u16) {
        self.set_register_u16(0x00, raw);
    }

    /// Inject a read failure on the next read operation
    pub fn fail_next_read(&self) {
        self.state.borrow_mut().fail_next_read = true;
    }

    /// Inject a write failure on the next write operation
    pub fn fail_next_write(&self) {
        self.state.borrow_mut().fail_next_write = true;
    }

    /// Get the operations log
    pub fn operations(&self) -> Vec<Operation> {
        self.state.borrow().operations.clone()
    }

    /// Clear the operations log
    pub fn clear_operations(&self) {
        self.state.borrow_mut().operations.clear();
    }

    /// Number of reset commands the device has seen
    pub fn reset_count(&self) -> usize {
        self.state.borrow().reset_count
    }
}

/// Mock error type
#[derive(Debug, Clone, PartialEq)]
pub enum MockError {
    /// Simulated communication error
    Communication,
}

impl RegisterInterface for MockInterface {
    type Error = MockError;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_read {
            state.fail_next_read = false;
            return Err(MockError::Communication);
        }

        // Auto-increment from the addressed byte
        for (i, byte) in read_data.iter_mut().enumerate() {
            let reg_addr = address.wrapping_add(i as u8);
            *byte = state.registers.get(&reg_addr).copied().unwrap_or(0);
        }

        state.operations.push(Operation::ReadRegister {
            address,
            size_bits,
            data: read_data.to_vec(),
        });

        Ok(())
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_write {
            state.fail_next_write = false;
            return Err(MockError::Communication);
        }

        state.operations.push(Operation::WriteRegister {
            address,
            size_bits,
            data: write_data.to_vec(),
        });

        // A bare reset address reloads the power-on values
        if address == RESET_ADDRESS && write_data.is_empty() {
            state.reset_count += 1;
            state.power_on();
            return Ok(());
        }

        for (i, &byte) in write_data.iter().enumerate() {
            let reg_addr = address.wrapping_add(i as u8);
            state.registers.insert(reg_addr, byte);
        }

        Ok(())
    }
}

#[cfg(feature = "async")]
impl AsyncRegisterInterface for MockInterface {
    type Error = MockError;
    type AddressType = u8;

    async fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        // Delegate to synchronous implementation
        RegisterInterface::read_register(self, address, size_bits, read_data)
    }

    async fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        // Delegate to synchronous implementation
        RegisterInterface::write_register(self, address, size_bits, write_data)
    }
}

impl Default for MockInterface {
    fn default() -> Self {
        Self::new()
    }
}
