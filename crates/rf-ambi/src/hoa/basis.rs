//! Spherical harmonic basis - direction to ambisonic channel coefficients

use super::{channels_from_order, MAX_AMBI_CHANNELS, MAX_AMBI_ORDER};
use crate::position::Direction;

/// Per-channel ambisonic coefficients, indexed by ACN channel
pub type ChannelCoefficients = [f32; MAX_AMBI_CHANNELS];

/// Compute spherical harmonic coefficients for a direction
///
/// Real spherical harmonics up to `MAX_AMBI_ORDER`, ACN ordering, N3D
/// normalization. Every encoder in the crate goes through this function, so
/// the reference decoders and the re-encode side always agree on scaling.
/// Evaluation is single precision.
#[allow(clippy::excessive_precision)]
pub fn calc_ambi_coeffs(dir: Direction) -> ChannelCoefficients {
    let Direction { x, y, z } = dir;
    let xx = x * x;
    let yy = y * y;
    let zz = z * z;
    let xy = x * y;
    let yz = y * z;
    let xz = x * z;

    [
        // Order 0
        1.0, // ACN 0 = 1
        // Order 1
        1.732050808 * y, // ACN 1 = sqrt(3) * Y
        1.732050808 * z, // ACN 2 = sqrt(3) * Z
        1.732050808 * x, // ACN 3 = sqrt(3) * X
        // Order 2
        3.872983346 * xy,              // ACN 4 = sqrt(15) * X * Y
        3.872983346 * yz,              // ACN 5 = sqrt(15) * Y * Z
        1.118033989 * (3.0 * zz - 1.0), // ACN 6 = sqrt(5)/2 * (3*Z*Z - 1)
        3.872983346 * xz,              // ACN 7 = sqrt(15) * X * Z
        1.936491673 * (xx - yy),       // ACN 8 = sqrt(15)/2 * (X*X - Y*Y)
        // Order 3
        2.091650066 * (y * (3.0 * xx - yy)),  // ACN 9 = sqrt(35/8) * Y * (3*X*X - Y*Y)
        10.24695076 * (z * xy),               // ACN 10 = sqrt(105) * Z * X * Y
        1.620185175 * (y * (5.0 * zz - 1.0)), // ACN 11 = sqrt(21/8) * Y * (5*Z*Z - 1)
        1.322875656 * (z * (5.0 * zz - 3.0)), // ACN 12 = sqrt(7)/2 * Z * (5*Z*Z - 3)
        1.620185175 * (x * (5.0 * zz - 1.0)), // ACN 13 = sqrt(21/8) * X * (5*Z*Z - 1)
        5.123475383 * (z * (xx - yy)),        // ACN 14 = sqrt(105)/2 * Z * (X*X - Y*Y)
        2.091650066 * (x * (xx - 3.0 * yy)),  // ACN 15 = sqrt(35/8) * X * (X*X - 3*Y*Y)
    ]
}

/// Compute coefficients with every channel above `order` zeroed
///
/// Orders above `MAX_AMBI_ORDER` are clamped.
pub fn calc_ambi_coeffs_for_order(dir: Direction, order: usize) -> ChannelCoefficients {
    let mut coeffs = calc_ambi_coeffs(dir);
    let used = channels_from_order(order.min(MAX_AMBI_ORDER));
    coeffs[used..].fill(0.0);
    coeffs
}
