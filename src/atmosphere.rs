//! Raw sample decoding and the pressure to altitude mapping.
//!
//! https://en.wikipedia.org/wiki/U.S._Standard_Atmosphere

/// Sea level reference pressure of the altitude model, in Pa.
pub const SEA_LEVEL_PA: f64 = 101_326.;

// 1976 standard atmosphere, troposphere fit.
const ALTITUDE_SCALE_M: f64 = 44_330.77;
const ALTITUDE_EXP: f64 = 0.190_263_2;

/// Reassemble the big-endian MSB, CSB, LSB pressure bytes.
pub const fn decode_raw(bytes: [u8; 3]) -> u32 {
    u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]])
}

/// Pressure in Pa for a raw sample.
///
/// The whole Pascals sit above bit 6, bits 4 and 5 hold quarter Pascals.
/// Bits 0..=3 are ignored.
#[expect(
    clippy::cast_possible_truncation,
    reason = "The sensor resolution is well inside f32 precision"
)]
pub fn pressure_pa(raw: u32) -> f32 {
    let integer = f64::from(raw >> 6);
    let fraction = f64::from((raw >> 4) & 0x3) / 4.;
    (integer + fraction) as f32
}

/// Altitude in m above the sea level reference for a pressure in Pa.
///
/// No temperature or local QNH correction is applied, so the result drifts
/// with the weather.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Metre level output does not need f64"
)]
pub fn altitude_m(pressure: f32) -> f32 {
    let ratio = f64::from(pressure) / SEA_LEVEL_PA;
    (ALTITUDE_SCALE_M * (1. - libm::pow(ratio, ALTITUDE_EXP))) as f32
}
