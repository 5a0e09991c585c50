//! Register map of the ADT7410
//!
//! Every register has its own module holding its bus address, transfer width
//! and power-on value, plus one sub-module per bit field with the field's
//! `MASK`, its `DEFAULT` (where the datasheet defines one) and any named
//! values the field accepts.
//!
//! Named values are raw field codes, i.e. the value as it reads with the field
//! shifted down to bit 0. To build a register value, shift the code into the
//! field position (see [`FieldDescriptor::shift`]) and OR the fields together:
//!
//! ```
//! use adt7410::layout::configuration::{opmode, resolution};
//!
//! let value = (resolution::RES_16_BIT << 7) | (opmode::ONE_SPS << 5);
//! assert_eq!(value, 0b1100_0000);
//! assert_eq!(value & opmode::MASK, opmode::ONE_SPS << 5);
//! ```
//!
//! The same information is available as data in [`REGISTERS`], one
//! [`RegisterDescriptor`] per register.
//!
//! Nothing in this module validates register values. Masks of the fields of
//! one register never overlap; the table is checked for that in the tests.

/// A named raw code accepted by a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Enumerant {
    /// Symbolic name as used in the datasheet
    pub name: &'static str,
    /// Field code, not shifted into the field position
    pub value: u16,
}

/// Bit field of a register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FieldDescriptor {
    /// Field name
    pub name: &'static str,
    /// Bits of the register occupied by the field
    pub mask: u16,
    /// Power-on code of the field, not shifted
    pub default: Option<u16>,
    /// Named codes the field accepts
    pub enumerants: &'static [Enumerant],
}

impl FieldDescriptor {
    /// Position of the lowest bit of the field (0 for an empty mask)
    #[must_use]
    pub const fn shift(&self) -> u32 {
        if self.mask == 0 {
            0
        } else {
            self.mask.trailing_zeros()
        }
    }

    /// Extract the field code from a raw register value
    #[must_use]
    pub const fn extract(&self, raw: u16) -> u16 {
        (raw & self.mask) >> self.shift()
    }

    /// Move a field code into position, dropping bits outside the field
    #[must_use]
    pub const fn place(&self, code: u16) -> u16 {
        (code << self.shift()) & self.mask
    }

    /// Look up an enumerant by name
    #[must_use]
    pub fn enumerant(&self, name: &str) -> Option<&'static Enumerant> {
        self.enumerants.iter().find(|e| e.name == name)
    }
}

/// One register of the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterDescriptor {
    /// Register name
    pub name: &'static str,
    /// Register address on the bus
    pub address: u8,
    /// Transfer width in bits; 0 for a command that carries no payload
    pub size_bits: u32,
    /// Power-on value; `None` for commands
    pub default: Option<u16>,
    /// Bit fields, in ascending bit order
    pub fields: &'static [FieldDescriptor],
}

impl RegisterDescriptor {
    /// Bits a value of this register can use
    #[must_use]
    pub const fn width_mask(&self) -> u16 {
        match self.size_bits {
            0 => 0,
            16 => u16::MAX,
            bits => (1 << bits) - 1,
        }
    }

    /// Look up a field by name
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Power-on value rebuilt from the field defaults
    ///
    /// Fields without a default contribute nothing.
    #[must_use]
    pub fn default_from_fields(&self) -> u16 {
        self.fields
            .iter()
            .filter_map(|f| f.default.map(|code| f.place(code)))
            .fold(0, |acc, bits| acc | bits)
    }
}

/// Temperature value (0x00, 16 bit)
///
/// Two's complement temperature in the upper 13 or 16 bits. With 13-bit
/// resolution the three low bits are event flags, with 16-bit resolution they
/// are extra precision bits.
#[allow(clippy::module_inception)]
pub mod temperature {
    /// Register address
    pub const ADDRESS: u8 = 0x00;
    /// Transfer width
    pub const SIZE_BITS: u32 = 16;
    /// Power-on value
    pub const DEFAULT: u16 = 0x0000;

    /// TLOW event flag (13-bit mode) or LSB 0 (16-bit mode)
    pub mod tlowflag_lsb0 {
        /// Field mask
        pub const MASK: u16 = 0b0000_0000_0000_0001;
        /// Power-on code
        pub const DEFAULT: u16 = 0b0;
    }

    /// THIGH event flag (13-bit mode) or LSB 1 (16-bit mode)
    pub mod thighflag_lsb1 {
        /// Field mask
        pub const MASK: u16 = 0b0000_0000_0000_0010;
        /// Power-on code
        pub const DEFAULT: u16 = 0b0;
    }

    /// TCRIT event flag (13-bit mode) or LSB 2 (16-bit mode)
    pub mod tcritflag_lsb2 {
        /// Field mask
        pub const MASK: u16 = 0b0000_0000_0000_0100;
        /// Power-on code
        pub const DEFAULT: u16 = 0b0;
    }

    /// Temperature magnitude in two's complement
    pub mod temperature {
        /// Field mask
        pub const MASK: u16 = 0b0111_1111_1111_1000;
        /// Power-on code
        pub const DEFAULT: u16 = 0b0000_0000_0000;
    }

    /// Sign bit of the temperature value
    pub mod sign {
        /// Field mask
        pub const MASK: u16 = 0b1000_0000_0000_0000;
        /// Power-on code
        pub const DEFAULT: u16 = 0b0;
    }
}

/// Status (0x02, 8 bit)
///
/// Event flags clear on read of this register or when the temperature is back
/// within limits, hysteresis included. nRDY is set again by a read of the
/// temperature register.
pub mod status {
    /// Register address
    pub const ADDRESS: u8 = 0x02;
    /// Transfer width
    pub const SIZE_BITS: u32 = 8;
    /// Power-on value (nRDY set)
    pub const DEFAULT: u8 = 0x80;

    /// Unused low nibble
    pub mod unused_0 {
        /// Field mask
        pub const MASK: u8 = 0b0000_1111;
        /// Power-on code
        pub const DEFAULT: u8 = 0b0000;
    }

    /// Set on an undertemperature event (temperature below TLOW)
    pub mod thigh {
        /// Field mask
        pub const MASK: u8 = 0b0001_0000;
        /// Power-on code
        pub const DEFAULT: u8 = 0b0;
    }

    /// Set on an overtemperature event (temperature above THIGH)
    pub mod tlow {
        /// Field mask
        pub const MASK: u8 = 0b0010_0000;
        /// Power-on code
        pub const DEFAULT: u8 = 0b0;
    }

    /// Set on a critical overtemperature event (temperature above TCRIT)
    pub mod tcrit {
        /// Field mask
        pub const MASK: u8 = 0b0100_0000;
        /// Power-on code
        pub const DEFAULT: u8 = 0b0;
    }

    /// Low when a conversion result has been written to the temperature register
    pub mod n_rdy {
        /// Field mask
        pub const MASK: u8 = 0b1000_0000;
        /// Power-on code
        pub const DEFAULT: u8 = 0b1;
    }
}

/// Configuration (0x03, 8 bit)
pub mod configuration {
    /// Register address
    pub const ADDRESS: u8 = 0x03;
    /// Transfer width
    pub const SIZE_BITS: u32 = 8;
    /// Power-on value
    pub const DEFAULT: u8 = 0x00;

    /// Number of out-of-limit conversions before INT and CT assert
    pub mod fault_queue {
        /// Field mask
        pub const MASK: u8 = 0b0000_0011;
        /// Power-on code
        pub const DEFAULT: u8 = 0b00;
        /// 1 fault
        pub const FAULTS_1: u8 = 0b00;
        /// 2 faults
        pub const FAULTS_2: u8 = 0b01;
        /// 3 faults
        pub const FAULTS_3: u8 = 0b10;
        /// 4 faults
        pub const FAULTS_4: u8 = 0b11;
    }

    /// Output polarity of the CT pin
    pub mod ct_pin_polarity {
        /// Field mask
        pub const MASK: u8 = 0b0000_0100;
        /// Power-on code
        pub const DEFAULT: u8 = 0b0;
        /// Active low
        pub const ACTIVE_LOW: u8 = 0b0;
        /// Active high
        pub const ACTIVE_HIGH: u8 = 0b1;
    }

    /// Output polarity of the INT pin
    pub mod int_pin_polarity {
        /// Field mask
        pub const MASK: u8 = 0b0000_1000;
        /// Power-on code
        pub const DEFAULT: u8 = 0b0;
        /// Active low
        pub const ACTIVE_LOW: u8 = 0b0;
        /// Active high
        pub const ACTIVE_HIGH: u8 = 0b1;
    }

    /// Interrupt or comparator behaviour of INT and CT
    pub mod int_ct_mode {
        /// Field mask
        pub const MASK: u8 = 0b0001_0000;
        /// Power-on code
        pub const DEFAULT: u8 = 0b0;
        /// Interrupt mode
        pub const INTERRUPT_MODE: u8 = 0b0;
        /// Comparator mode
        pub const COMPARATOR_MODE: u8 = 0b1;
    }

    /// Operation mode
    pub mod opmode {
        /// Field mask
        pub const MASK: u8 = 0b0110_0000;
        /// Power-on code
        pub const DEFAULT: u8 = 0b00;
        /// Continuous conversion; a new conversion starts when one finishes
        pub const CONTINUOUS: u8 = 0b00;
        /// One conversion, typically 240 ms, then shutdown
        pub const ONE_SHOT: u8 = 0b01;
        /// One conversion per second, typically 60 ms each
        pub const ONE_SPS: u8 = 0b10;
        /// Everything but the serial interface powered down
        pub const SHUTDOWN: u8 = 0b11;
    }

    /// ADC resolution
    pub mod resolution {
        /// Field mask
        pub const MASK: u8 = 0b1000_0000;
        /// Power-on code
        pub const DEFAULT: u8 = 0b0;
        /// Sign + 12 bits, 0.0625 °C per LSB
        pub const RES_13_BIT: u8 = 0b0;
        /// Sign + 15 bits, 0.0078 °C per LSB
        pub const RES_16_BIT: u8 = 0b1;
    }
}

/// THIGH setpoint (0x04, 16 bit), 64 °C after power-on
#[allow(clippy::module_inception)]
pub mod thigh {
    /// Register address
    pub const ADDRESS: u8 = 0x04;
    /// Transfer width
    pub const SIZE_BITS: u32 = 16;
    /// Power-on value
    pub const DEFAULT: u16 = 0x2000;

    /// Overtemperature limit in two's complement
    pub mod thigh {
        /// Field mask
        pub const MASK: u16 = 0xFFFF;
        /// Power-on code
        pub const DEFAULT: u16 = 0x2000;
    }
}

/// TLOW setpoint (0x06, 16 bit), 10 °C after power-on
#[allow(clippy::module_inception)]
pub mod tlow {
    /// Register address
    pub const ADDRESS: u8 = 0x06;
    /// Transfer width
    pub const SIZE_BITS: u32 = 16;
    /// Power-on value
    pub const DEFAULT: u16 = 0x0500;

    /// Undertemperature limit in two's complement
    pub mod tlow {
        /// Field mask
        pub const MASK: u16 = 0xFFFF;
        /// Power-on code
        pub const DEFAULT: u16 = 0x0500;
    }
}

/// TCRIT setpoint (0x08, 16 bit), 147 °C after power-on
#[allow(clippy::module_inception)]
pub mod tcrit {
    /// Register address
    pub const ADDRESS: u8 = 0x08;
    /// Transfer width
    pub const SIZE_BITS: u32 = 16;
    /// Power-on value
    pub const DEFAULT: u16 = 0x4980;

    /// Critical overtemperature limit in two's complement
    pub mod tcrit {
        /// Field mask
        pub const MASK: u16 = 0xFFFF;
        /// Power-on code
        pub const DEFAULT: u16 = 0x4980;
    }
}

/// THYST setpoint (0x0A, 8 bit)
///
/// Subtracted from THIGH and TCRIT and added to TLOW.
pub mod thyst {
    /// Register address
    pub const ADDRESS: u8 = 0x0A;
    /// Transfer width
    pub const SIZE_BITS: u32 = 8;
    /// Power-on value
    pub const DEFAULT: u8 = 0x05;

    /// Hysteresis in whole degrees, 0 to 15 °C
    pub mod hysteresis {
        /// Field mask
        pub const MASK: u8 = 0b0000_1111;
        /// Power-on code
        pub const DEFAULT: u8 = 0b0101;
    }

    /// Unused high nibble
    pub mod unused_0 {
        /// Field mask
        pub const MASK: u8 = 0b1111_0000;
        /// Power-on code
        pub const DEFAULT: u8 = 0b0000;
    }
}

/// ID (0x0B, 8 bit)
pub mod id {
    /// Register address
    pub const ADDRESS: u8 = 0x0B;
    /// Transfer width
    pub const SIZE_BITS: u32 = 8;
    /// Power-on value of the defined bits (revision bits read as 0 here)
    pub const DEFAULT: u8 = manufacturer_id::DEFAULT << 3;

    /// Silicon revision
    pub mod revision_id {
        /// Field mask
        pub const MASK: u8 = 0b0000_0111;
    }

    /// Manufacturer identification
    pub mod manufacturer_id {
        /// Field mask
        pub const MASK: u8 = 0b1111_1000;
        /// Power-on code
        pub const DEFAULT: u8 = 0b11001;
    }
}

/// Software reset command (0x2F)
///
/// Sending the address alone resets the part and reloads the power-on values.
/// The device does not acknowledge bus traffic for about 200 µs afterwards.
#[allow(clippy::module_inception)]
pub mod reset {
    /// Command address
    pub const ADDRESS: u8 = 0x2F;
    /// No payload
    pub const SIZE_BITS: u32 = 0;

    /// The command has no bits
    pub mod reset {
        /// Field mask
        pub const MASK: u8 = 0b0;
    }
}

macro_rules! enumerants {
    ($($name:literal => $value:expr),* $(,)?) => {
        &[$(Enumerant { name: $name, value: $value as u16 }),*]
    };
}

/// Temperature register descriptor
pub const TEMPERATURE: RegisterDescriptor = RegisterDescriptor {
    name: "TEMPERATURE",
    address: temperature::ADDRESS,
    size_bits: temperature::SIZE_BITS,
    default: Some(temperature::DEFAULT),
    fields: &[
        FieldDescriptor {
            name: "TLOWFLAG_LSB0",
            mask: temperature::tlowflag_lsb0::MASK,
            default: Some(temperature::tlowflag_lsb0::DEFAULT),
            enumerants: &[],
        },
        FieldDescriptor {
            name: "THIGHFLAG_LSB1",
            mask: temperature::thighflag_lsb1::MASK,
            default: Some(temperature::thighflag_lsb1::DEFAULT),
            enumerants: &[],
        },
        FieldDescriptor {
            name: "TCRITFLAG_LSB2",
            mask: temperature::tcritflag_lsb2::MASK,
            default: Some(temperature::tcritflag_lsb2::DEFAULT),
            enumerants: &[],
        },
        FieldDescriptor {
            name: "TEMPERATURE",
            mask: temperature::temperature::MASK,
            default: Some(temperature::temperature::DEFAULT),
            enumerants: &[],
        },
        FieldDescriptor {
            name: "SIGN",
            mask: temperature::sign::MASK,
            default: Some(temperature::sign::DEFAULT),
            enumerants: &[],
        },
    ],
};

/// Status register descriptor
pub const STATUS: RegisterDescriptor = RegisterDescriptor {
    name: "Status",
    address: status::ADDRESS,
    size_bits: status::SIZE_BITS,
    default: Some(status::DEFAULT as u16),
    fields: &[
        FieldDescriptor {
            name: "unused_0",
            mask: status::unused_0::MASK as u16,
            default: Some(status::unused_0::DEFAULT as u16),
            enumerants: &[],
        },
        FieldDescriptor {
            name: "THIGH",
            mask: status::thigh::MASK as u16,
            default: Some(status::thigh::DEFAULT as u16),
            enumerants: &[],
        },
        FieldDescriptor {
            name: "TLOW",
            mask: status::tlow::MASK as u16,
            default: Some(status::tlow::DEFAULT as u16),
            enumerants: &[],
        },
        FieldDescriptor {
            name: "TCRIT",
            mask: status::tcrit::MASK as u16,
            default: Some(status::tcrit::DEFAULT as u16),
            enumerants: &[],
        },
        FieldDescriptor {
            name: "nRDY",
            mask: status::n_rdy::MASK as u16,
            default: Some(status::n_rdy::DEFAULT as u16),
            enumerants: &[],
        },
    ],
};

/// Configuration register descriptor
pub const CONFIGURATION: RegisterDescriptor = {
    use configuration::{
        ct_pin_polarity, fault_queue, int_ct_mode, int_pin_polarity, opmode, resolution,
    };

    RegisterDescriptor {
        name: "Configuration",
        address: configuration::ADDRESS,
        size_bits: configuration::SIZE_BITS,
        default: Some(configuration::DEFAULT as u16),
        fields: &[
            FieldDescriptor {
                name: "FAULT_QUEUE",
                mask: fault_queue::MASK as u16,
                default: Some(fault_queue::DEFAULT as u16),
                enumerants: enumerants![
                    "FAULTS_1" => fault_queue::FAULTS_1,
                    "FAULTS_2" => fault_queue::FAULTS_2,
                    "FAULTS_3" => fault_queue::FAULTS_3,
                    "FAULTS_4" => fault_queue::FAULTS_4,
                ],
            },
            FieldDescriptor {
                name: "CT_PIN_POLARITY",
                mask: ct_pin_polarity::MASK as u16,
                default: Some(ct_pin_polarity::DEFAULT as u16),
                enumerants: enumerants![
                    "ACTIVE_LOW" => ct_pin_polarity::ACTIVE_LOW,
                    "ACTIVE_HIGH" => ct_pin_polarity::ACTIVE_HIGH,
                ],
            },
            FieldDescriptor {
                name: "INT_PIN_POLARITY",
                mask: int_pin_polarity::MASK as u16,
                default: Some(int_pin_polarity::DEFAULT as u16),
                enumerants: enumerants![
                    "ACTIVE_LOW" => int_pin_polarity::ACTIVE_LOW,
                    "ACTIVE_HIGH" => int_pin_polarity::ACTIVE_HIGH,
                ],
            },
            FieldDescriptor {
                name: "INT_CT_MODE",
                mask: int_ct_mode::MASK as u16,
                default: Some(int_ct_mode::DEFAULT as u16),
                enumerants: enumerants![
                    "INTERRUPT_MODE" => int_ct_mode::INTERRUPT_MODE,
                    "COMPARATOR_MODE" => int_ct_mode::COMPARATOR_MODE,
                ],
            },
            FieldDescriptor {
                name: "OPMODE",
                mask: opmode::MASK as u16,
                default: Some(opmode::DEFAULT as u16),
                enumerants: enumerants![
                    "CONTINUOUS" => opmode::CONTINUOUS,
                    "ONE_SHOT" => opmode::ONE_SHOT,
                    "ONE_SPS" => opmode::ONE_SPS,
                    "SHUTDOWN" => opmode::SHUTDOWN,
                ],
            },
            FieldDescriptor {
                name: "RESOLUTION",
                mask: resolution::MASK as u16,
                default: Some(resolution::DEFAULT as u16),
                enumerants: enumerants![
                    "RES_13_BIT" => resolution::RES_13_BIT,
                    "RES_16_BIT" => resolution::RES_16_BIT,
                ],
            },
        ],
    }
};

/// THIGH register descriptor
pub const THIGH: RegisterDescriptor = RegisterDescriptor {
    name: "THIGH",
    address: thigh::ADDRESS,
    size_bits: thigh::SIZE_BITS,
    default: Some(thigh::DEFAULT),
    fields: &[FieldDescriptor {
        name: "THIGH",
        mask: thigh::thigh::MASK,
        default: Some(thigh::thigh::DEFAULT),
        enumerants: &[],
    }],
};

/// TLOW register descriptor
pub const TLOW: RegisterDescriptor = RegisterDescriptor {
    name: "TLOW",
    address: tlow::ADDRESS,
    size_bits: tlow::SIZE_BITS,
    default: Some(tlow::DEFAULT),
    fields: &[FieldDescriptor {
        name: "TLOW",
        mask: tlow::tlow::MASK,
        default: Some(tlow::tlow::DEFAULT),
        enumerants: &[],
    }],
};

/// TCRIT register descriptor
pub const TCRIT: RegisterDescriptor = RegisterDescriptor {
    name: "TCRIT",
    address: tcrit::ADDRESS,
    size_bits: tcrit::SIZE_BITS,
    default: Some(tcrit::DEFAULT),
    fields: &[FieldDescriptor {
        name: "TCRIT",
        mask: tcrit::tcrit::MASK,
        default: Some(tcrit::tcrit::DEFAULT),
        enumerants: &[],
    }],
};

/// THYST register descriptor
pub const THYST: RegisterDescriptor = RegisterDescriptor {
    name: "THYST",
    address: thyst::ADDRESS,
    size_bits: thyst::SIZE_BITS,
    default: Some(thyst::DEFAULT as u16),
    fields: &[
        FieldDescriptor {
            name: "HYSTERESIS",
            mask: thyst::hysteresis::MASK as u16,
            default: Some(thyst::hysteresis::DEFAULT as u16),
            enumerants: &[],
        },
        FieldDescriptor {
            name: "unused_0",
            mask: thyst::unused_0::MASK as u16,
            default: Some(thyst::unused_0::DEFAULT as u16),
            enumerants: &[],
        },
    ],
};

/// ID register descriptor
pub const ID: RegisterDescriptor = RegisterDescriptor {
    name: "ID",
    address: id::ADDRESS,
    size_bits: id::SIZE_BITS,
    default: Some(id::DEFAULT as u16),
    fields: &[
        FieldDescriptor {
            name: "REVISION_ID",
            mask: id::revision_id::MASK as u16,
            default: None,
            enumerants: &[],
        },
        FieldDescriptor {
            name: "MANUFACTURER_ID",
            mask: id::manufacturer_id::MASK as u16,
            default: Some(id::manufacturer_id::DEFAULT as u16),
            enumerants: &[],
        },
    ],
};

/// Software reset command descriptor
pub const RESET: RegisterDescriptor = RegisterDescriptor {
    name: "RESET",
    address: reset::ADDRESS,
    size_bits: reset::SIZE_BITS,
    default: None,
    fields: &[FieldDescriptor {
        name: "RESET",
        mask: reset::reset::MASK as u16,
        default: None,
        enumerants: &[],
    }],
};

/// Every register of the device, in address order
pub static REGISTERS: [RegisterDescriptor; 9] = [
    TEMPERATURE,
    STATUS,
    CONFIGURATION,
    THIGH,
    TLOW,
    TCRIT,
    THYST,
    ID,
    RESET,
];

/// Look up a register by name
#[must_use]
pub fn register(name: &str) -> Option<&'static RegisterDescriptor> {
    REGISTERS.iter().find(|r| r.name == name)
}

/// Look up a register by bus address
#[must_use]
pub fn register_at(address: u8) -> Option<&'static RegisterDescriptor> {
    REGISTERS.iter().find(|r| r.address == address)
}
