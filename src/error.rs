use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};
use ufmt::{uDebug, uDisplay, uWrite, Formatter};

/// Failure of a live read on an enabled sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The bus transaction failed.
    I2c(E),
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Self::I2c(e)
    }
}

impl<E: embedded_hal::i2c::Error> Error<E> {
    /// Bus error kind, as reported by the HAL.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::I2c(e) => e.kind(),
        }
    }
}

/// Why [`Barometer::initialize`](crate::Barometer::initialize) left the
/// driver disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    /// The platform has no bus controller to talk through.
    NoBusController,
    /// Nothing acknowledged the sensor's address.
    DeviceNotFound,
    /// The probe transaction failed for another reason.
    ProbeFailed(ErrorKind),
}

impl UnavailableReason {
    pub(crate) fn from_probe(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address) => Self::DeviceNotFound,
            kind => Self::ProbeFailed(kind),
        }
    }
}

pub(crate) const fn kind_name(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Bus => "Bus",
        ErrorKind::ArbitrationLoss => "ArbitrationLoss",
        ErrorKind::NoAcknowledge(source) => match source {
            NoAcknowledgeSource::Address => "No ACK Address",
            NoAcknowledgeSource::Data => "No ACK Data",
            NoAcknowledgeSource::Unknown => "No ACK Unknown",
        },
        ErrorKind::Overrun => "Overrun",
        ErrorKind::Other => "Other",
        _ => "Unknown",
    }
}

impl uDisplay for UnavailableReason {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        match self {
            Self::NoBusController => f.write_str("no bus controller"),
            Self::DeviceNotFound => f.write_str("device not found"),
            Self::ProbeFailed(kind) => {
                f.write_str("probe failed: ")?;
                f.write_str(kind_name(*kind))
            }
        }
    }
}

impl uDebug for UnavailableReason {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        uDisplay::fmt(self, f)
    }
}

impl<E: embedded_hal::i2c::Error> uDisplay for Error<E> {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str("I2C ")?;
        f.write_str(kind_name(self.kind()))
    }
}

impl<E: embedded_hal::i2c::Error> uDebug for Error<E> {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        uDisplay::fmt(self, f)
    }
}
