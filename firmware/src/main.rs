#![no_std]
#![no_main]

use atmega_hal::prelude::*;
use atmega_hal::usart::{Baudrate, Usart0};
use embedded_hal::delay::DelayNs as _;
use microcat_baro::{Barometer, BUS_FREQUENCY_HZ};
use panic_halt as _;
#[cfg(feature = "logging")]
use ufmt::uwriteln;

type CoreClock = atmega_hal::clock::MHz16;
type I2c = atmega_hal::i2c::I2c<CoreClock>;
type Delay = atmega_hal::delay::Delay<CoreClock>;
type Serial = Usart0<CoreClock>;

mod telemetry;

#[avr_device::entry]
fn main() -> ! {
    let dp = atmega_hal::Peripherals::take().unwrap();
    let pins = atmega_hal::pins!(dp);
    let mut serial: Serial = atmega_hal::Usart::new(
        dp.USART0,
        pins.pd0,
        pins.pd1.into_output(),
        Baudrate::<CoreClock>::new(115_200),
    );

    let i2c = I2c::new(
        dp.TWI,
        pins.pc4.into_pull_up_input(),
        pins.pc5.into_pull_up_input(),
        BUS_FREQUENCY_HZ,
    );

    let mut led = pins.pb5.into_output();

    let mut baro = telemetry::init_barometer(Some(i2c), &mut serial);

    #[cfg(feature = "logging")]
    uwriteln!(&mut serial, "Starting...\r").unwrap_infallible();

    let mut delay = Delay::new();
    let mut loop_counter: u8 = 0;
    loop {
        if loop_counter == 0 {
            led.toggle();
        }
        loop_counter = loop_counter.wrapping_add(1);

        telemetry::report(&mut baro, &mut serial);

        delay.delay_ms(90);
    }
}
