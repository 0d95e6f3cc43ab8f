mod registers;

pub use registers::{one_shot, Reg};

use crate::atmosphere::{altitude_m, decode_raw, pressure_pa};
use crate::error::{Error, UnavailableReason};
use crate::log::NoLog;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{Error as _, I2c};
use registers::{read_pressure_bytes, Control1};
use ufmt::{uDisplay, uWrite, Formatter};
use ufmt_float::uFmt_f32;

/// Time given to a one-shot conversion before the result is read back.
///
/// The data ready flag is not polled.
pub const SETTLE_MS: u32 = 10;

/// Pressure and the altitude derived from the same sample.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Reading {
    pub pressure: f32, // Pa
    pub altitude: f32, // m above the sea level reference
}

impl uDisplay for Reading {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        ufmt::uwrite!(
            f,
            "{} Pa, {} m",
            uFmt_f32::Two(self.pressure),
            uFmt_f32::One(self.altitude)
        )
    }
}

fn trigger<I2C: I2c>(i2c: &mut I2C) -> Result<(), I2C::Error> {
    let mut ctrl = Control1::new(i2c)?;
    ctrl.trigger_one_shot();
    ctrl.write(i2c)
}

/// A sensor that answered the probe.
pub struct Mpl3115<I2C, D, L = NoLog> {
    i2c: I2C,
    delay: D,
    #[cfg_attr(
        not(feature = "logging"),
        expect(dead_code, reason = "Only written to by log statements")
    )]
    log: L,
}

impl<I2C, D, L> Mpl3115<I2C, D, L>
where
    I2C: I2c,
    D: DelayNs,
    L: uWrite,
{
    /// Run one conversion and return the 3 pressure bytes as a single value.
    pub fn read_raw_pressure(&mut self) -> Result<u32, Error<I2C::Error>> {
        match self.convert() {
            Ok(raw) => Ok(raw),
            Err(e) => {
                log!(&mut self.log, "Baro read failed: {}\r", e);
                Err(e)
            }
        }
    }

    fn convert(&mut self) -> Result<u32, Error<I2C::Error>> {
        trigger(&mut self.i2c)?;
        self.delay.delay_ms(SETTLE_MS);
        let bytes = read_pressure_bytes(&mut self.i2c)?;
        Ok(decode_raw(bytes))
    }

    /// Pressure in Pa, quarter Pascal resolution.
    pub fn pressure(&mut self) -> Result<f32, Error<I2C::Error>> {
        Ok(pressure_pa(self.read_raw_pressure()?))
    }

    /// Altitude in m. Takes a fresh sample.
    pub fn altitude(&mut self) -> Result<f32, Error<I2C::Error>> {
        Ok(altitude_m(self.pressure()?))
    }

    /// Pressure and altitude from one conversion.
    pub fn sample(&mut self) -> Result<Reading, Error<I2C::Error>> {
        let pressure = self.pressure()?;
        Ok(Reading {
            pressure,
            altitude: altitude_m(pressure),
        })
    }

    /// Give the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

/// A sensor that could not be brought up.
///
/// Holds on to the bus, if there was one, so it can be handed back.
pub struct Unavailable<I2C> {
    reason: UnavailableReason,
    i2c: Option<I2C>,
}

impl<I2C> Unavailable<I2C> {
    /// Why the probe did not succeed.
    pub const fn reason(&self) -> UnavailableReason {
        self.reason
    }

    /// Give the bus back, `None` if there never was one.
    pub fn release(self) -> Option<I2C> {
        self.i2c
    }
}

/// Barometer that may or may not have come up.
///
/// Every read on [`Barometer::Unavailable`] returns zero and issues no bus
/// traffic. Bus errors on a [`Barometer::Ready`] sensor are returned to the
/// caller. Calls need `&mut self`, so sharing one barometer between contexts
/// requires the caller to wrap it in a lock.
pub enum Barometer<I2C, D, L = NoLog> {
    Ready(Mpl3115<I2C, D, L>),
    Unavailable(Unavailable<I2C>),
}

impl<I2C, D> Barometer<I2C, D, NoLog>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Probe the sensor without logging.
    ///
    /// `None` means the board has no bus controller for the sensor.
    pub fn initialize(i2c: Option<I2C>, delay: D) -> Self {
        Self::initialize_with_log(i2c, delay, NoLog)
    }
}

impl<I2C, D, L> Barometer<I2C, D, L>
where
    I2C: I2c,
    D: DelayNs,
    L: uWrite,
{
    /// Probe the sensor, reporting progress to `log`.
    ///
    /// The probe reads control register 1, clears standby, sets the one-shot
    /// trigger and writes it back. Failure never escapes, it only leaves the
    /// driver [`Barometer::Unavailable`].
    #[cfg_attr(
        not(feature = "logging"),
        allow(unused_mut, reason = "The sink is only written by log statements")
    )]
    pub fn initialize_with_log(i2c: Option<I2C>, delay: D, mut log: L) -> Self {
        let Some(mut i2c) = i2c else {
            log!(&mut log, "Baro unavailable: no bus controller\r");
            return Self::Unavailable(Unavailable {
                reason: UnavailableReason::NoBusController,
                i2c: None,
            });
        };

        log!(&mut log, "Probing baro...\r");
        if let Err(e) = trigger(&mut i2c) {
            let reason = UnavailableReason::from_probe(e.kind());
            log!(&mut log, "Baro unavailable: {}\r", reason);
            return Self::Unavailable(Unavailable {
                reason,
                i2c: Some(i2c),
            });
        }

        log!(&mut log, "Baro ready\r");
        Self::Ready(Mpl3115 { i2c, delay, log })
    }

    /// `true` once the probe succeeded.
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Why the sensor is disabled, `None` when it is ready.
    pub const fn unavailable_reason(&self) -> Option<UnavailableReason> {
        match self {
            Self::Ready(_) => None,
            Self::Unavailable(unavailable) => Some(unavailable.reason),
        }
    }

    /// Raw pressure sample, 0 if the sensor is unavailable.
    pub fn raw_pressure(&mut self) -> Result<u32, Error<I2C::Error>> {
        match self {
            Self::Ready(sensor) => sensor.read_raw_pressure(),
            Self::Unavailable(_) => Ok(0),
        }
    }

    /// Pressure in Pa, 0.0 if the sensor is unavailable.
    pub fn pressure(&mut self) -> Result<f32, Error<I2C::Error>> {
        match self {
            Self::Ready(sensor) => sensor.pressure(),
            Self::Unavailable(_) => Ok(0.0),
        }
    }

    /// Altitude in m, 0.0 if the sensor is unavailable.
    pub fn altitude(&mut self) -> Result<f32, Error<I2C::Error>> {
        match self {
            Self::Ready(sensor) => sensor.altitude(),
            Self::Unavailable(_) => Ok(0.0),
        }
    }

    /// Pressure and altitude from a single conversion.
    pub fn sample(&mut self) -> Result<Reading, Error<I2C::Error>> {
        match self {
            Self::Ready(sensor) => sensor.sample(),
            Self::Unavailable(_) => Ok(Reading::default()),
        }
    }

    /// Tear the driver down and hand the bus back.
    pub fn release(self) -> Option<I2C> {
        match self {
            Self::Ready(sensor) => Some(sensor.release()),
            Self::Unavailable(unavailable) => unavailable.release(),
        }
    }
}
