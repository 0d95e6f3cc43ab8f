use crate::ADDRESS;
use embedded_hal::i2c::I2c;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Reg {
    /// Pressure MSB, CSB and LSB follow from here.
    OutP = 0x01,
    CtrlReg1 = 0x26,
}

const SBYB: u8 = 0b0000_0001;
const OST: u8 = 0b0000_0010;

/// Put the part in standby and request a single conversion.
pub const fn one_shot(ctrl: u8) -> u8 {
    (ctrl & !SBYB) | OST
}

/// Control register 1, kept as read so unrelated bits survive the write back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Control1 {
    bits: u8,
}

impl Control1 {
    pub fn new<I2C: I2c>(i2c: &mut I2C) -> Result<Self, I2C::Error> {
        let mut buf = [0u8; 1];
        i2c.write_read(ADDRESS, &[Reg::CtrlReg1 as u8], &mut buf)?;
        Ok(Self { bits: buf[0] })
    }

    pub fn trigger_one_shot(&mut self) {
        self.bits = one_shot(self.bits);
    }

    pub fn write<I2C: I2c>(self, i2c: &mut I2C) -> Result<(), I2C::Error> {
        i2c.write(ADDRESS, &[Reg::CtrlReg1 as u8, self.bits])
    }
}

pub fn read_pressure_bytes<I2C: I2c>(i2c: &mut I2C) -> Result<[u8; 3], I2C::Error> {
    let mut buf = [0u8; 3];
    i2c.write_read(ADDRESS, &[Reg::OutP as u8], &mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_clears_standby_and_sets_trigger() {
        assert_eq!(one_shot(0x00), 0x02);
        assert_eq!(one_shot(0x01), 0x02);
        assert_eq!(one_shot(0xFF), 0xFE);
        assert_eq!(one_shot(0xB9), 0xBA);
    }

    #[test]
    fn one_shot_is_idempotent() {
        for ctrl in 0..=u8::MAX {
            assert_eq!(one_shot(one_shot(ctrl)), one_shot(ctrl));
        }
    }
}
