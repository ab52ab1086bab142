mod common;

use common::{destroy, new_mcp7940m, read, write, BitFlags, Register};
use mcp7940::{Error, MfpMode, SqWFreq};

#[test]
fn can_enable_and_disable_square_wave() {
    let mut dev = new_mcp7940m(&[
        read(Register::CONTROL, 0b0000_0011),
        write(Register::CONTROL, BitFlags::SQWEN | 0b0000_0011),
        read(Register::CONTROL, BitFlags::SQWEN | 0b0000_0011),
        read(Register::CONTROL, BitFlags::SQWEN | 0b0000_0011),
        write(Register::CONTROL, 0b0000_0011),
    ]);
    dev.enable_square_wave().unwrap();
    assert!(dev.is_square_wave_enabled().unwrap());
    dev.disable_square_wave().unwrap();
    destroy(dev);
}

#[test]
fn selecting_frequency_leaves_coarse_trim() {
    let mut dev = new_mcp7940m(&[
        read(Register::CONTROL, BitFlags::SQWEN | BitFlags::CRSTRIM | 0b11),
        write(Register::CONTROL, BitFlags::SQWEN | 0b01),
    ]);
    dev.set_square_wave_frequency(SqWFreq::_4_096kHz).unwrap();
    destroy(dev);
}

#[test]
fn selecting_64hz_enters_coarse_trim() {
    let mut dev = new_mcp7940m(&[
        read(Register::CONTROL, BitFlags::SQWEN),
        write(Register::CONTROL, BitFlags::SQWEN | BitFlags::CRSTRIM),
    ]);
    dev.set_square_wave_frequency(SqWFreq::_64Hz).unwrap();
    destroy(dev);
}

#[test]
fn can_read_square_wave_frequency() {
    let mut dev = new_mcp7940m(&[
        read(Register::CONTROL, 0b11),
        read(Register::CONTROL, BitFlags::SQWEN | BitFlags::CRSTRIM | 0b10),
        read(Register::CONTROL, BitFlags::SQWEN | 0b10),
        read(Register::CONTROL, BitFlags::SQWEN),
    ]);
    assert_eq!(dev.square_wave_frequency().unwrap(), None);
    assert_eq!(dev.square_wave_frequency().unwrap(), Some(SqWFreq::_64Hz));
    assert_eq!(
        dev.square_wave_frequency().unwrap(),
        Some(SqWFreq::_8_192kHz)
    );
    assert_eq!(dev.square_wave_frequency().unwrap(), Some(SqWFreq::_1Hz));
    destroy(dev);
}

#[test]
fn can_drive_mfp() {
    let mut dev = new_mcp7940m(&[
        read(Register::CONTROL, 0b11),
        write(Register::CONTROL, 0b1000_0011),
        read(Register::CONTROL, 0b1000_0011),
        write(Register::CONTROL, 0b11),
    ]);
    dev.set_mfp_level(true).unwrap();
    dev.set_mfp_level(false).unwrap();
    destroy(dev);
}

#[test]
fn mfp_owned_by_other_function_is_not_driven() {
    let mut dev = new_mcp7940m(&[
        read(Register::CONTROL, BitFlags::SQWEN),
        read(Register::CONTROL, BitFlags::ALM0EN),
        read(Register::CONTROL, BitFlags::ALM1EN),
    ]);
    assert_eq!(dev.set_mfp_level(true), Err(Error::InvalidDeviceState));
    assert_eq!(dev.set_mfp_level(true), Err(Error::InvalidDeviceState));
    assert_eq!(dev.set_mfp_level(false), Err(Error::InvalidDeviceState));
    destroy(dev);
}

#[test]
fn can_read_mfp_mode() {
    let mut dev = new_mcp7940m(&[
        read(Register::CONTROL, 0b1000_0000 | BitFlags::SQWEN | BitFlags::ALM0EN),
        read(Register::CONTROL, 0b1000_0000 | BitFlags::ALM1EN),
        read(Register::CONTROL, 0b1000_0000),
        read(Register::CONTROL, 0b0000_0011),
    ]);
    assert_eq!(dev.mfp_mode().unwrap(), MfpMode::SquareWave);
    assert_eq!(dev.mfp_mode().unwrap(), MfpMode::Alarm);
    assert_eq!(dev.mfp_mode().unwrap(), MfpMode::High);
    assert_eq!(dev.mfp_mode().unwrap(), MfpMode::Low);
    destroy(dev);
}
