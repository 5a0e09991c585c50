//! Unit tests for reading a freshly powered device

use crate::common::create_mock_driver;
use adt7410::{Config, MANUFACTURER_ID, StatusFlags, layout};

#[test]
fn test_registers_read_power_on_values() {
    let (mut driver, _interface) = create_mock_driver();

    assert_eq!(driver.get_temperature().unwrap(), layout::temperature::DEFAULT);
    assert_eq!(driver.get_status().unwrap(), 0x80);
    assert_eq!(driver.get_configuration().unwrap(), layout::configuration::DEFAULT);
    assert_eq!(driver.get_thigh().unwrap(), 0x2000);
    assert_eq!(driver.get_tlow().unwrap(), 0x0500);
    assert_eq!(driver.get_tcrit().unwrap(), 0x4980);
    assert_eq!(driver.get_thyst().unwrap(), 0x05);
}

#[test]
fn test_defaults_match_descriptor_table() {
    let (mut driver, _interface) = create_mock_driver();

    let read_back = [
        driver.get_temperature().unwrap(),
        u16::from(driver.get_status().unwrap()),
        u16::from(driver.get_configuration().unwrap()),
        driver.get_thigh().unwrap(),
        driver.get_tlow().unwrap(),
        driver.get_tcrit().unwrap(),
        u16::from(driver.get_thyst().unwrap()),
    ];

    for (reg, value) in layout::REGISTERS.iter().zip(read_back) {
        assert_eq!(reg.default, Some(value), "{}", reg.name);
    }
}

#[test]
fn test_id_manufacturer_field() {
    let (mut driver, _interface) = create_mock_driver();

    let id = driver.get_id().unwrap();
    assert_eq!(
        id & layout::id::manufacturer_id::MASK,
        layout::id::DEFAULT & layout::id::manufacturer_id::MASK
    );
    assert_eq!(driver.manufacturer_id().unwrap(), MANUFACTURER_ID);
}

#[test]
fn test_typed_views_of_power_on_state() {
    let (mut driver, _interface) = create_mock_driver();

    assert_eq!(driver.read_config().unwrap(), Config::default());
    assert_eq!(driver.status().unwrap(), StatusFlags::default());
    assert_eq!(driver.hysteresis().unwrap(), 5);
}
