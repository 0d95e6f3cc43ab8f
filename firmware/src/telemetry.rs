use crate::{Delay, I2c, Serial};
use atmega_hal::prelude::*;
use microcat_baro::Barometer;
use ufmt::uwriteln;

pub type Baro = Barometer<I2c, Delay>;

#[cfg_attr(
    not(feature = "logging"),
    expect(unused_variables, reason = "Serial is only used for logging here")
)]
pub fn init_barometer(i2c: Option<I2c>, serial: &mut Serial) -> Baro {
    let baro = Barometer::initialize(i2c, Delay::new());
    #[cfg(feature = "logging")]
    match baro.unavailable_reason() {
        Some(reason) => uwriteln!(serial, "Baro disabled: {}\r", reason).unwrap_infallible(),
        None => uwriteln!(serial, "Baro up\r").unwrap_infallible(),
    }
    baro
}

/// Take one sample and write it out. A disabled barometer reports zeros.
pub fn report(baro: &mut Baro, serial: &mut Serial) {
    match baro.sample() {
        Ok(reading) => {
            uwriteln!(serial, "BARO {}\r", reading).unwrap_infallible();
        }
        Err(_e) => {
            #[cfg(feature = "logging")]
            uwriteln!(serial, "Baro error {}\r", _e).unwrap_infallible();
        }
    }
}
