//! Field-level register views for the ADT7410
//!
//! The 8-bit registers that carry more than one field are described here with
//! the `device-driver` DSL, so single fields can be read, written and modified
//! without hand-written mask arithmetic. Field positions mirror the masks in
//! [`crate::layout`] and reset values are the power-on values.
//!
//! The 16-bit temperature and setpoint registers are plain values and are only
//! reached through the raw accessors on [`crate::Adt7410Driver`].

device_driver::create_device!(
    device_name: Adt7410,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = BE;
        }

        /// Status (0x02)
        register Status {
            type Access = RO;
            const ADDRESS = 0x02;
            const SIZE_BITS = 8;
            const RESET_VALUE = 0x80;

            reserved_3_0: uint = 0..4,
            /// Undertemperature event (named THIGH in the register map)
            thigh: bool = 4,
            /// Overtemperature event (named TLOW in the register map)
            tlow: bool = 5,
            /// Critical overtemperature event
            tcrit: bool = 6,
            /// Conversion result not ready
            n_rdy: bool = 7,
        },

        /// Configuration (0x03)
        register Configuration {
            type Access = RW;
            const ADDRESS = 0x03;
            const SIZE_BITS = 8;
            const RESET_VALUE = 0x00;

            /// Fault queue (0 = 1 fault .. 3 = 4 faults)
            fault_queue: uint = 0..2,
            /// CT pin active high
            ct_pin_polarity: bool = 2,
            /// INT pin active high
            int_pin_polarity: bool = 3,
            /// Comparator mode (interrupt mode when clear)
            int_ct_mode: bool = 4,
            /// Operation mode (0 = continuous, 1 = one-shot, 2 = 1 SPS, 3 = shutdown)
            opmode: uint = 5..7,
            /// 16-bit resolution (13-bit when clear)
            resolution: bool = 7,
        },

        /// THYST setpoint (0x0A)
        register Thyst {
            type Access = RW;
            const ADDRESS = 0x0A;
            const SIZE_BITS = 8;
            const RESET_VALUE = 0x05;

            /// Hysteresis in °C
            hysteresis: uint = 0..4,
            reserved_7_4: uint = 4..8,
        },

        /// ID (0x0B)
        register Id {
            type Access = RO;
            const ADDRESS = 0x0B;
            const SIZE_BITS = 8;
            const RESET_VALUE = 0xC8;

            /// Silicon revision
            revision_id: uint = 0..3,
            /// Manufacturer ID (0b11001)
            manufacturer_id: uint = 3..8,
        }
    }
);

pub use Adt7410 as RegisterDevice;
