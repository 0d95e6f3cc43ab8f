//! Driver for the MPL3115A2-class barometric pressure sensor sitting at
//! address `0x60` on an I2C bus.
//!
//! The driver triggers a one-shot conversion, waits a fixed 10 ms and reads
//! the 3-byte pressure field back. Pressure is reported in Pascals and
//! altitude in metres using the standard atmosphere approximation.
//!
//! A sensor that cannot be reached does not bring the application down:
//! [`Barometer::initialize`] always hands back a value, and a
//! [`Barometer::Unavailable`] driver answers every read with zero without
//! touching the bus.
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod log;

pub mod atmosphere;
pub mod error;
pub mod pressure_sensor;

pub use error::{Error, UnavailableReason};
pub use log::NoLog;
pub use pressure_sensor::{Barometer, Mpl3115, Reading, Unavailable};

/// 7-bit bus address of the sensor.
pub const ADDRESS: u8 = 0x60;

/// Fast-mode clock the board should configure the bus controller with.
pub const BUS_FREQUENCY_HZ: u32 = 400_000;
