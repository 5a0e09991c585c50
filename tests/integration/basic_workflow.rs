//! Integration tests for basic workflow scenarios

use crate::common::{create_mock_driver, test_utils::MockDelay};
use adt7410::layout::{configuration, temperature};
use adt7410::{OperationMode, Resolution};

#[test]
fn test_select_16bit_resolution() {
    let (mut driver, _interface) = create_mock_driver();

    assert_eq!(driver.get_configuration().unwrap(), 0x00);

    driver.set_configuration(0x80).unwrap();
    assert_eq!(driver.get_configuration().unwrap(), 0x80);

    assert_ne!(configuration::resolution::MASK & 0x80, 0);
    assert_eq!(
        driver.read_config().unwrap().resolution,
        Resolution::Bits16
    );
}

#[test]
fn test_complete_setup_workflow() {
    let (mut driver, interface) = create_mock_driver();
    let mut delay = MockDelay::default();

    driver.software_reset(&mut delay).unwrap();
    driver.verify().unwrap();

    // Limits: 30 °C, 20 °C, 50 °C (13-bit codes, 0.0625 °C per LSB, << 3)
    driver.set_thigh(((30 * 16) as u16) << 3).unwrap();
    driver.set_tlow(((20 * 16) as u16) << 3).unwrap();
    driver.set_tcrit(((50 * 16) as u16) << 3).unwrap();
    driver.set_hysteresis(2).unwrap();
    driver.set_operation_mode(OperationMode::OneSps).unwrap();

    assert_eq!(driver.get_thigh().unwrap(), 0x0F00);
    assert_eq!(driver.get_tlow().unwrap(), 0x0A00);
    assert_eq!(driver.get_tcrit().unwrap(), 0x1900);
    assert_eq!(driver.get_thyst().unwrap(), 0x02);
    assert_eq!(
        driver.get_configuration().unwrap(),
        configuration::opmode::ONE_SPS << 5
    );

    // New conversion with the THIGH flag bit set
    interface.set_temperature_data(0x0F80 | temperature::thighflag_lsb1::MASK);
    interface.set_register(0x02, 0x20);

    let raw = driver.get_temperature().unwrap();
    assert_eq!(raw & temperature::temperature::MASK, 0x0F80);
    assert_ne!(raw & temperature::thighflag_lsb1::MASK, 0);

    let flags = driver.status().unwrap();
    assert!(flags.ready);
    assert!(flags.over_temperature);
}

#[test]
fn test_shutdown_and_resume() {
    let (mut driver, _interface) = create_mock_driver();

    driver.set_resolution(Resolution::Bits16).unwrap();
    driver.set_operation_mode(OperationMode::Shutdown).unwrap();
    assert_eq!(driver.get_configuration().unwrap(), 0xE0);

    driver.set_operation_mode(OperationMode::Continuous).unwrap();
    let config = driver.read_config().unwrap();
    assert_eq!(config.operation_mode, OperationMode::Continuous);
    assert_eq!(config.resolution, Resolution::Bits16);
}
