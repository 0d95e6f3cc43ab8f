use core::convert::Infallible;

/// Log sink that drops everything written to it.
///
/// Used when the driver is created without a serial port to report on.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLog;

impl ufmt::uWrite for NoLog {
    type Error = Infallible;

    fn write_str(&mut self, _s: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Writes a line to the driver's log sink when the `logging` feature is on.
///
/// Write errors are dropped, a broken serial link must not stop a measurement.
macro_rules! log {
    ($sink:expr, $($arg:tt)*) => {
        #[cfg(feature = "logging")]
        {
            let _ = ufmt::uwriteln!($sink, $($arg)*);
        }
    };
}
