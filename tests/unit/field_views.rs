//! Unit tests for the typed field helpers and register views

use crate::common::{Operation, create_mock_driver};
use adt7410::layout::{configuration, status, thyst};
use adt7410::{
    Config, Error, FaultQueue, InterruptMode, OperationMode, PinPolarity, Resolution,
};

#[test]
fn test_view_fields_match_layout_masks() {
    let (mut driver, interface) = create_mock_driver();

    driver
        .registers()
        .configuration()
        .write(|w| {
            w.set_opmode(configuration::opmode::ONE_SPS);
            w.set_fault_queue(configuration::fault_queue::FAULTS_3);
        })
        .unwrap();

    let expected = (configuration::opmode::ONE_SPS << configuration::opmode::MASK.trailing_zeros())
        | (configuration::fault_queue::FAULTS_3
            << configuration::fault_queue::MASK.trailing_zeros());
    assert_eq!(interface.get_register(configuration::ADDRESS), expected);

    interface.set_register(configuration::ADDRESS, configuration::resolution::MASK);
    let view = driver.registers().configuration().read().unwrap();
    assert!(view.resolution());
    assert_eq!(view.opmode(), configuration::opmode::CONTINUOUS);
}

#[test]
fn test_status_view_bits() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(status::ADDRESS, status::thigh::MASK | status::tcrit::MASK);
    let view = driver.registers().status().read().unwrap();
    assert!(view.thigh());
    assert!(!view.tlow());
    assert!(view.tcrit());
    assert!(!view.n_rdy());
}

#[test]
fn test_set_operation_mode_keeps_other_fields() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_configuration(0b1001_1101).unwrap();
    driver.set_operation_mode(OperationMode::Shutdown).unwrap();

    assert_eq!(
        interface.get_register(configuration::ADDRESS),
        0b1001_1101 | configuration::opmode::MASK
    );

    driver.set_operation_mode(OperationMode::OneShot).unwrap();
    assert_eq!(driver.read_config().unwrap().operation_mode, OperationMode::OneShot);
    assert_eq!(interface.get_register(configuration::ADDRESS), 0b1011_1101);
}

#[test]
fn test_set_resolution_is_read_modify_write() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_configuration(0x03).unwrap();
    interface.clear_operations();

    driver.set_resolution(Resolution::Bits16).unwrap();

    assert_eq!(
        interface.operations(),
        vec![
            Operation::ReadRegister {
                address: configuration::ADDRESS,
                size_bits: 8,
                data: vec![0x03],
            },
            Operation::WriteRegister {
                address: configuration::ADDRESS,
                size_bits: 8,
                data: vec![0x83],
            },
        ]
    );

    driver.set_resolution(Resolution::Bits13).unwrap();
    assert_eq!(driver.get_configuration().unwrap(), 0x03);
}

#[test]
fn test_configure_writes_packed_value() {
    let (mut driver, _interface) = create_mock_driver();

    let config = Config {
        fault_queue: FaultQueue::Four,
        ct_polarity: PinPolarity::ActiveHigh,
        int_polarity: PinPolarity::ActiveLow,
        interrupt_mode: InterruptMode::Comparator,
        operation_mode: OperationMode::OneSps,
        resolution: Resolution::Bits16,
    };
    driver.configure(&config).unwrap();

    assert_eq!(driver.get_configuration().unwrap(), 0b1101_0111);
    assert_eq!(driver.read_config().unwrap(), config);
}

#[test]
fn test_status_flags_from_device() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(status::ADDRESS, status::tlow::MASK);
    let flags = driver.status().unwrap();
    assert!(flags.ready);
    assert!(flags.over_temperature);
    assert!(!flags.under_temperature);
    assert!(!flags.critical);
}

#[test]
fn test_hysteresis_range() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_hysteresis(15).unwrap();
    assert_eq!(driver.hysteresis().unwrap(), 15);
    assert_eq!(interface.get_register(thyst::ADDRESS), 0x0F);

    driver.set_hysteresis(0).unwrap();
    assert_eq!(driver.get_thyst().unwrap(), 0x00);

    interface.clear_operations();
    assert_eq!(driver.set_hysteresis(16), Err(Error::InvalidConfig));
    assert!(interface.operations().is_empty(), "nothing written on bad input");
}

#[test]
fn test_hysteresis_ignores_unused_bits() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(thyst::ADDRESS, 0xA7);
    assert_eq!(driver.hysteresis().unwrap(), 0x07);
}

#[test]
fn test_verify_accepts_analog_devices_id() {
    let (mut driver, _interface) = create_mock_driver();

    assert_eq!(driver.verify().unwrap(), 0b011);
    assert_eq!(driver.revision_id().unwrap(), 0b011);
}

#[test]
fn test_verify_rejects_other_parts() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(0x0B, 0x51);
    assert_eq!(driver.verify(), Err(Error::InvalidDevice(0x51)));
}
