//! Reference speaker arrays for the order upsamplers
//!
//! Each array is a regular layout with a matched pair of tables: a decoder
//! (per-speaker gains reproducing each ambisonic channel) and the speaker
//! directions the encoder side is evaluated at. Row `k` of the decoder and
//! direction `k` describe the same speaker. Both tables share the `K`
//! parameter, so a row-count mismatch does not compile.

use super::basis::{calc_ambi_coeffs, ChannelCoefficients};
use super::Dimensionality;
use crate::position::Direction;

const INV_SQRT2: f32 = std::f32::consts::FRAC_1_SQRT_2;
#[allow(clippy::excessive_precision)]
const INV_SQRT3: f32 = 0.577350269189625765;

/// Regular speaker array with `K` speakers and a `C`-channel decoder
#[derive(Debug, Clone, Copy)]
pub struct ReferenceArray<const K: usize, const C: usize> {
    /// Ambisonic order the decoder is built for
    order: usize,
    /// Full 3D or horizontal ring
    dimensionality: Dimensionality,
    /// Decoding matrix [speakers x ambisonic_channels]
    decoder: [[f32; C]; K],
    /// Speaker directions, one per decoder row
    directions: [Direction; K],
}

impl<const K: usize, const C: usize> ReferenceArray<K, C> {
    /// Create array from literal tables
    pub const fn new(
        order: usize,
        dimensionality: Dimensionality,
        decoder: [[f32; C]; K],
        directions: [Direction; K],
    ) -> Self {
        Self {
            order,
            dimensionality,
            decoder,
            directions,
        }
    }

    /// Ambisonic order
    pub fn order(&self) -> usize {
        self.order
    }

    /// Array dimensionality
    pub fn dimensionality(&self) -> Dimensionality {
        self.dimensionality
    }

    /// Number of speakers (rows in both tables)
    pub fn speaker_count(&self) -> usize {
        K
    }

    /// Number of ambisonic channels the decoder takes
    pub fn channel_count(&self) -> usize {
        C
    }

    /// Decoding matrix [speakers x ambisonic_channels]
    pub fn decoder(&self) -> &[[f32; C]; K] {
        &self.decoder
    }

    /// Speaker directions
    pub fn directions(&self) -> &[Direction; K] {
        &self.directions
    }

    /// Encoding matrix [speakers x MAX_AMBI_CHANNELS]
    ///
    /// The basis evaluated at each speaker direction.
    pub fn encoder(&self) -> [ChannelCoefficients; K] {
        self.directions.map(calc_ambi_coeffs)
    }
}

/// First order, 3D: the 8 vertices of a cube
#[rustfmt::skip]
pub static FIRST_ORDER_ARRAY: ReferenceArray<8, 4> = ReferenceArray::new(
    1,
    Dimensionality::Full3D,
    [
        [ 1.250000000e-01,  1.250000000e-01,  1.250000000e-01,  1.250000000e-01],
        [ 1.250000000e-01,  1.250000000e-01,  1.250000000e-01, -1.250000000e-01],
        [ 1.250000000e-01, -1.250000000e-01,  1.250000000e-01,  1.250000000e-01],
        [ 1.250000000e-01, -1.250000000e-01,  1.250000000e-01, -1.250000000e-01],
        [ 1.250000000e-01,  1.250000000e-01, -1.250000000e-01,  1.250000000e-01],
        [ 1.250000000e-01,  1.250000000e-01, -1.250000000e-01, -1.250000000e-01],
        [ 1.250000000e-01, -1.250000000e-01, -1.250000000e-01,  1.250000000e-01],
        [ 1.250000000e-01, -1.250000000e-01, -1.250000000e-01, -1.250000000e-01],
    ],
    [
        Direction::new(INV_SQRT3, INV_SQRT3, INV_SQRT3),
        Direction::new(-INV_SQRT3, INV_SQRT3, INV_SQRT3),
        Direction::new(INV_SQRT3, -INV_SQRT3, INV_SQRT3),
        Direction::new(-INV_SQRT3, -INV_SQRT3, INV_SQRT3),
        Direction::new(INV_SQRT3, INV_SQRT3, -INV_SQRT3),
        Direction::new(-INV_SQRT3, INV_SQRT3, -INV_SQRT3),
        Direction::new(INV_SQRT3, -INV_SQRT3, -INV_SQRT3),
        Direction::new(-INV_SQRT3, -INV_SQRT3, -INV_SQRT3),
    ],
);

/// First order, horizontal: 4 speakers on a square ring at +/-45 and +/-135 degrees
#[rustfmt::skip]
pub static FIRST_ORDER_2D_ARRAY: ReferenceArray<4, 4> = ReferenceArray::new(
    1,
    Dimensionality::Horizontal,
    [
        [ 2.500000000e-01,  2.041241452e-01,  0.0,  2.041241452e-01],
        [ 2.500000000e-01,  2.041241452e-01,  0.0, -2.041241452e-01],
        [ 2.500000000e-01, -2.041241452e-01,  0.0,  2.041241452e-01],
        [ 2.500000000e-01, -2.041241452e-01,  0.0, -2.041241452e-01],
    ],
    [
        Direction::new(INV_SQRT2, INV_SQRT2, 0.0),
        Direction::new(-INV_SQRT2, INV_SQRT2, 0.0),
        Direction::new(INV_SQRT2, -INV_SQRT2, 0.0),
        Direction::new(-INV_SQRT2, -INV_SQRT2, 0.0),
    ],
);

/// Second order, 3D: the 12 vertices of an icosahedron
#[rustfmt::skip]
pub static SECOND_ORDER_ARRAY: ReferenceArray<12, 9> = ReferenceArray::new(
    2,
    Dimensionality::Full3D,
    [
        [ 8.333333333e-02,  0.000000000e+00, -7.588274978e-02,  1.227808683e-01,  0.000000000e+00,  0.000000000e+00, -1.591525047e-02, -1.443375673e-01,  1.167715449e-01],
        [ 8.333333333e-02, -1.227808683e-01,  0.000000000e+00,  7.588274978e-02, -1.443375673e-01,  0.000000000e+00, -9.316949906e-02,  0.000000000e+00, -7.216878365e-02],
        [ 8.333333333e-02, -7.588274978e-02,  1.227808683e-01,  0.000000000e+00,  0.000000000e+00, -1.443375673e-01,  1.090847495e-01,  0.000000000e+00, -4.460276122e-02],
        [ 8.333333333e-02,  0.000000000e+00,  7.588274978e-02,  1.227808683e-01,  0.000000000e+00,  0.000000000e+00, -1.591525047e-02,  1.443375673e-01,  1.167715449e-01],
        [ 8.333333333e-02, -1.227808683e-01,  0.000000000e+00, -7.588274978e-02,  1.443375673e-01,  0.000000000e+00, -9.316949906e-02,  0.000000000e+00, -7.216878365e-02],
        [ 8.333333333e-02,  7.588274978e-02, -1.227808683e-01,  0.000000000e+00,  0.000000000e+00, -1.443375673e-01,  1.090847495e-01,  0.000000000e+00, -4.460276122e-02],
        [ 8.333333333e-02,  0.000000000e+00, -7.588274978e-02, -1.227808683e-01,  0.000000000e+00,  0.000000000e+00, -1.591525047e-02,  1.443375673e-01,  1.167715449e-01],
        [ 8.333333333e-02,  1.227808683e-01,  0.000000000e+00, -7.588274978e-02, -1.443375673e-01,  0.000000000e+00, -9.316949906e-02,  0.000000000e+00, -7.216878365e-02],
        [ 8.333333333e-02,  7.588274978e-02,  1.227808683e-01,  0.000000000e+00,  0.000000000e+00,  1.443375673e-01,  1.090847495e-01,  0.000000000e+00, -4.460276122e-02],
        [ 8.333333333e-02,  0.000000000e+00,  7.588274978e-02, -1.227808683e-01,  0.000000000e+00,  0.000000000e+00, -1.591525047e-02, -1.443375673e-01,  1.167715449e-01],
        [ 8.333333333e-02,  1.227808683e-01,  0.000000000e+00,  7.588274978e-02,  1.443375673e-01,  0.000000000e+00, -9.316949906e-02,  0.000000000e+00, -7.216878365e-02],
        [ 8.333333333e-02, -7.588274978e-02, -1.227808683e-01,  0.000000000e+00,  0.000000000e+00,  1.443375673e-01,  1.090847495e-01,  0.000000000e+00, -4.460276122e-02],
    ],
    [
        Direction::new(8.506508084e-01, 0.000000000e+00, -5.257311121e-01),
        Direction::new(5.257311121e-01, -8.506508084e-01, 0.000000000e+00),
        Direction::new(0.000000000e+00, -5.257311121e-01, 8.506508084e-01),
        Direction::new(8.506508084e-01, 0.000000000e+00, 5.257311121e-01),
        Direction::new(-5.257311121e-01, -8.506508084e-01, 0.000000000e+00),
        Direction::new(0.000000000e+00, 5.257311121e-01, -8.506508084e-01),
        Direction::new(-8.506508084e-01, 0.000000000e+00, -5.257311121e-01),
        Direction::new(-5.257311121e-01, 8.506508084e-01, 0.000000000e+00),
        Direction::new(0.000000000e+00, 5.257311121e-01, 8.506508084e-01),
        Direction::new(-8.506508084e-01, 0.000000000e+00, 5.257311121e-01),
        Direction::new(5.257311121e-01, 8.506508084e-01, 0.000000000e+00),
        Direction::new(0.000000000e+00, -5.257311121e-01, -8.506508084e-01),
    ],
);

/// Second order, horizontal: 6 speakers on a hexagonal ring
#[rustfmt::skip]
pub static SECOND_ORDER_2D_ARRAY: ReferenceArray<6, 9> = ReferenceArray::new(
    2,
    Dimensionality::Horizontal,
    [
        [ 1.666666667e-01, -9.622504486e-02,  0.0,  1.666666667e-01, -1.490711985e-01,  0.0,  0.0,  0.0,  8.606629658e-02],
        [ 1.666666667e-01, -1.924500897e-01,  0.0,  0.000000000e+00,  0.000000000e+00,  0.0,  0.0,  0.0, -1.721325932e-01],
        [ 1.666666667e-01, -9.622504486e-02,  0.0, -1.666666667e-01,  1.490711985e-01,  0.0,  0.0,  0.0,  8.606629658e-02],
        [ 1.666666667e-01,  9.622504486e-02,  0.0, -1.666666667e-01, -1.490711985e-01,  0.0,  0.0,  0.0,  8.606629658e-02],
        [ 1.666666667e-01,  1.924500897e-01,  0.0,  0.000000000e+00,  0.000000000e+00,  0.0,  0.0,  0.0, -1.721325932e-01],
        [ 1.666666667e-01,  9.622504486e-02,  0.0,  1.666666667e-01,  1.490711985e-01,  0.0,  0.0,  0.0,  8.606629658e-02],
    ],
    [
        Direction::new(0.86602540379, -0.50000000000, 0.0),
        Direction::new(0.00000000000, -1.00000000000, 0.0),
        Direction::new(-0.86602540379, -0.50000000000, 0.0),
        Direction::new(-0.86602540379, 0.50000000000, 0.0),
        Direction::new(0.00000000000, 1.00000000000, 0.0),
        Direction::new(0.86602540379, 0.50000000000, 0.0),
    ],
);

/// Third order, 3D: the 20 vertices of a dodecahedron
///
/// The decoder is the pseudo-inverse of the encoder rather than a scaled
/// transpose, since the dodecahedron does not sample sixth-degree products
/// exactly.
#[rustfmt::skip]
pub static THIRD_ORDER_ARRAY: ReferenceArray<20, 16> = ReferenceArray::new(
    3,
    Dimensionality::Full3D,
    [
        [ 5.000000000e-02,  3.090169944e-02,  8.090169944e-02,  0.000000000e+00,  0.000000000e+00,  6.454972244e-02,  9.045084972e-02,  0.000000000e+00, -1.232790000e-02, -1.256118221e-01,  0.000000000e+00,  1.126112056e-01,  7.944389175e-02,  0.000000000e+00,  2.421151497e-02,  0.000000000e+00],
        [ 5.000000000e-02, -3.090169944e-02,  8.090169944e-02,  0.000000000e+00,  0.000000000e+00, -6.454972244e-02,  9.045084972e-02,  0.000000000e+00, -1.232790000e-02,  1.256118221e-01,  0.000000000e+00, -1.126112056e-01,  7.944389175e-02,  0.000000000e+00,  2.421151497e-02,  0.000000000e+00],
        [ 5.000000000e-02,  3.090169944e-02, -8.090169944e-02,  0.000000000e+00,  0.000000000e+00, -6.454972244e-02,  9.045084972e-02,  0.000000000e+00, -1.232790000e-02, -1.256118221e-01,  0.000000000e+00,  1.126112056e-01, -7.944389175e-02,  0.000000000e+00, -2.421151497e-02,  0.000000000e+00],
        [ 5.000000000e-02, -3.090169944e-02, -8.090169944e-02,  0.000000000e+00,  0.000000000e+00,  6.454972244e-02,  9.045084972e-02,  0.000000000e+00, -1.232790000e-02,  1.256118221e-01,  0.000000000e+00, -1.126112056e-01, -7.944389175e-02,  0.000000000e+00, -2.421151497e-02,  0.000000000e+00],
        [ 5.000000000e-02,  8.090169944e-02,  0.000000000e+00,  3.090169944e-02,  6.454972244e-02,  0.000000000e+00, -5.590169944e-02,  0.000000000e+00, -7.216878365e-02, -7.763237543e-02,  0.000000000e+00, -2.950836627e-02,  0.000000000e+00, -1.497759251e-01,  0.000000000e+00, -7.763237543e-02],
        [ 5.000000000e-02,  8.090169944e-02,  0.000000000e+00, -3.090169944e-02, -6.454972244e-02,  0.000000000e+00, -5.590169944e-02,  0.000000000e+00, -7.216878365e-02, -7.763237543e-02,  0.000000000e+00, -2.950836627e-02,  0.000000000e+00,  1.497759251e-01,  0.000000000e+00,  7.763237543e-02],
        [ 5.000000000e-02, -8.090169944e-02,  0.000000000e+00,  3.090169944e-02, -6.454972244e-02,  0.000000000e+00, -5.590169944e-02,  0.000000000e+00, -7.216878365e-02,  7.763237543e-02,  0.000000000e+00,  2.950836627e-02,  0.000000000e+00, -1.497759251e-01,  0.000000000e+00, -7.763237543e-02],
        [ 5.000000000e-02, -8.090169944e-02,  0.000000000e+00, -3.090169944e-02,  6.454972244e-02,  0.000000000e+00, -5.590169944e-02,  0.000000000e+00, -7.216878365e-02,  7.763237543e-02,  0.000000000e+00,  2.950836627e-02,  0.000000000e+00,  1.497759251e-01,  0.000000000e+00,  7.763237543e-02],
        [ 5.000000000e-02,  0.000000000e+00,  3.090169944e-02,  8.090169944e-02,  0.000000000e+00,  0.000000000e+00, -3.454915028e-02,  6.454972244e-02,  8.449668365e-02,  0.000000000e+00,  0.000000000e+00,  0.000000000e+00,  3.034486645e-02, -6.779013272e-02,  1.659481923e-01,  4.797944664e-02],
        [ 5.000000000e-02,  0.000000000e+00,  3.090169944e-02, -8.090169944e-02,  0.000000000e+00,  0.000000000e+00, -3.454915028e-02, -6.454972244e-02,  8.449668365e-02,  0.000000000e+00,  0.000000000e+00,  0.000000000e+00,  3.034486645e-02,  6.779013272e-02,  1.659481923e-01, -4.797944664e-02],
        [ 5.000000000e-02,  0.000000000e+00, -3.090169944e-02,  8.090169944e-02,  0.000000000e+00,  0.000000000e+00, -3.454915028e-02, -6.454972244e-02,  8.449668365e-02,  0.000000000e+00,  0.000000000e+00,  0.000000000e+00, -3.034486645e-02, -6.779013272e-02, -1.659481923e-01,  4.797944664e-02],
        [ 5.000000000e-02,  0.000000000e+00, -3.090169944e-02, -8.090169944e-02,  0.000000000e+00,  0.000000000e+00, -3.454915028e-02,  6.454972244e-02,  8.449668365e-02,  0.000000000e+00,  0.000000000e+00,  0.000000000e+00, -3.034486645e-02,  6.779013272e-02, -1.659481923e-01, -4.797944664e-02],
        [ 5.000000000e-02,  5.000000000e-02,  5.000000000e-02,  5.000000000e-02,  6.454972244e-02,  6.454972244e-02,  0.000000000e+00,  6.454972244e-02,  0.000000000e+00,  1.016220987e-01,  6.338656910e-02, -1.092600649e-02, -7.364853795e-02,  1.011266756e-01, -7.086833869e-02, -1.482646439e-02],
        [ 5.000000000e-02,  5.000000000e-02,  5.000000000e-02, -5.000000000e-02, -6.454972244e-02,  6.454972244e-02,  0.000000000e+00, -6.454972244e-02,  0.000000000e+00,  1.016220987e-01, -6.338656910e-02, -1.092600649e-02, -7.364853795e-02, -1.011266756e-01, -7.086833869e-02,  1.482646439e-02],
        [ 5.000000000e-02, -5.000000000e-02,  5.000000000e-02,  5.000000000e-02, -6.454972244e-02, -6.454972244e-02,  0.000000000e+00,  6.454972244e-02,  0.000000000e+00, -1.016220987e-01, -6.338656910e-02,  1.092600649e-02, -7.364853795e-02,  1.011266756e-01, -7.086833869e-02, -1.482646439e-02],
        [ 5.000000000e-02, -5.000000000e-02,  5.000000000e-02, -5.000000000e-02,  6.454972244e-02, -6.454972244e-02,  0.000000000e+00, -6.454972244e-02,  0.000000000e+00, -1.016220987e-01,  6.338656910e-02,  1.092600649e-02, -7.364853795e-02, -1.011266756e-01, -7.086833869e-02,  1.482646439e-02],
        [ 5.000000000e-02,  5.000000000e-02, -5.000000000e-02,  5.000000000e-02,  6.454972244e-02, -6.454972244e-02,  0.000000000e+00, -6.454972244e-02,  0.000000000e+00,  1.016220987e-01, -6.338656910e-02, -1.092600649e-02,  7.364853795e-02,  1.011266756e-01,  7.086833869e-02, -1.482646439e-02],
        [ 5.000000000e-02,  5.000000000e-02, -5.000000000e-02, -5.000000000e-02, -6.454972244e-02, -6.454972244e-02,  0.000000000e+00,  6.454972244e-02,  0.000000000e+00,  1.016220987e-01,  6.338656910e-02, -1.092600649e-02,  7.364853795e-02, -1.011266756e-01,  7.086833869e-02,  1.482646439e-02],
        [ 5.000000000e-02, -5.000000000e-02, -5.000000000e-02,  5.000000000e-02, -6.454972244e-02,  6.454972244e-02,  0.000000000e+00, -6.454972244e-02,  0.000000000e+00, -1.016220987e-01,  6.338656910e-02,  1.092600649e-02,  7.364853795e-02,  1.011266756e-01,  7.086833869e-02, -1.482646439e-02],
        [ 5.000000000e-02, -5.000000000e-02, -5.000000000e-02, -5.000000000e-02,  6.454972244e-02,  6.454972244e-02,  0.000000000e+00,  6.454972244e-02,  0.000000000e+00, -1.016220987e-01, -6.338656910e-02,  1.092600649e-02,  7.364853795e-02, -1.011266756e-01,  7.086833869e-02,  1.482646439e-02],
    ],
    [
        Direction::new(0.00000000000, 0.35682208976, 0.93417235897),
        Direction::new(0.00000000000, -0.35682208976, 0.93417235897),
        Direction::new(0.00000000000, 0.35682208976, -0.93417235897),
        Direction::new(0.00000000000, -0.35682208976, -0.93417235897),
        Direction::new(0.35682208976, 0.93417235897, 0.00000000000),
        Direction::new(-0.35682208976, 0.93417235897, 0.00000000000),
        Direction::new(0.35682208976, -0.93417235897, 0.00000000000),
        Direction::new(-0.35682208976, -0.93417235897, 0.00000000000),
        Direction::new(0.93417235897, 0.00000000000, 0.35682208976),
        Direction::new(-0.93417235897, 0.00000000000, 0.35682208976),
        Direction::new(0.93417235897, 0.00000000000, -0.35682208976),
        Direction::new(-0.93417235897, 0.00000000000, -0.35682208976),
        Direction::new(INV_SQRT3, INV_SQRT3, INV_SQRT3),
        Direction::new(-INV_SQRT3, INV_SQRT3, INV_SQRT3),
        Direction::new(INV_SQRT3, -INV_SQRT3, INV_SQRT3),
        Direction::new(-INV_SQRT3, -INV_SQRT3, INV_SQRT3),
        Direction::new(INV_SQRT3, INV_SQRT3, -INV_SQRT3),
        Direction::new(-INV_SQRT3, INV_SQRT3, -INV_SQRT3),
        Direction::new(INV_SQRT3, -INV_SQRT3, -INV_SQRT3),
        Direction::new(-INV_SQRT3, -INV_SQRT3, -INV_SQRT3),
    ],
);

/// Third order, horizontal: 8 speakers on an octagonal ring
#[rustfmt::skip]
pub static THIRD_ORDER_2D_ARRAY: ReferenceArray<8, 16> = ReferenceArray::new(
    3,
    Dimensionality::Horizontal,
    [
        [ 1.250000000e-01, -5.523559567e-02,  0.0,  1.333505242e-01, -9.128709292e-02,  0.0,  0.0,  0.0,  9.128709292e-02, -1.104247249e-01,  0.0,  0.0,  0.0,  0.0,  0.0,  4.573941867e-02],
        [ 1.250000000e-01, -1.333505242e-01,  0.0,  5.523559567e-02, -9.128709292e-02,  0.0,  0.0,  0.0, -9.128709292e-02,  4.573941867e-02,  0.0,  0.0,  0.0,  0.0,  0.0, -1.104247249e-01],
        [ 1.250000000e-01, -1.333505242e-01,  0.0, -5.523559567e-02,  9.128709292e-02,  0.0,  0.0,  0.0, -9.128709292e-02,  4.573941867e-02,  0.0,  0.0,  0.0,  0.0,  0.0,  1.104247249e-01],
        [ 1.250000000e-01, -5.523559567e-02,  0.0, -1.333505242e-01,  9.128709292e-02,  0.0,  0.0,  0.0,  9.128709292e-02, -1.104247249e-01,  0.0,  0.0,  0.0,  0.0,  0.0, -4.573941867e-02],
        [ 1.250000000e-01,  5.523559567e-02,  0.0, -1.333505242e-01, -9.128709292e-02,  0.0,  0.0,  0.0,  9.128709292e-02,  1.104247249e-01,  0.0,  0.0,  0.0,  0.0,  0.0, -4.573941867e-02],
        [ 1.250000000e-01,  1.333505242e-01,  0.0, -5.523559567e-02, -9.128709292e-02,  0.0,  0.0,  0.0, -9.128709292e-02, -4.573941867e-02,  0.0,  0.0,  0.0,  0.0,  0.0,  1.104247249e-01],
        [ 1.250000000e-01,  1.333505242e-01,  0.0,  5.523559567e-02,  9.128709292e-02,  0.0,  0.0,  0.0, -9.128709292e-02, -4.573941867e-02,  0.0,  0.0,  0.0,  0.0,  0.0, -1.104247249e-01],
        [ 1.250000000e-01,  5.523559567e-02,  0.0,  1.333505242e-01,  9.128709292e-02,  0.0,  0.0,  0.0,  9.128709292e-02,  1.104247249e-01,  0.0,  0.0,  0.0,  0.0,  0.0,  4.573941867e-02],
    ],
    [
        Direction::new(0.92387953251, -0.38268343237, 0.0),
        Direction::new(0.38268343237, -0.92387953251, 0.0),
        Direction::new(-0.38268343237, -0.92387953251, 0.0),
        Direction::new(-0.92387953251, -0.38268343237, 0.0),
        Direction::new(-0.92387953251, 0.38268343237, 0.0),
        Direction::new(-0.38268343237, 0.92387953251, 0.0),
        Direction::new(0.38268343237, 0.92387953251, 0.0),
        Direction::new(0.92387953251, 0.38268343237, 0.0),
    ],
);

/// Fourth order, horizontal: 10 speakers on a decagonal ring
///
/// Only used to bring horizontal-only fourth-order content into the 3D mix,
/// so the decoder takes 25 ACN channels and there is no 3D counterpart.
#[rustfmt::skip]
pub static FOURTH_ORDER_2D_ARRAY: ReferenceArray<10, 25> = ReferenceArray::new(
    4,
    Dimensionality::Horizontal,
    [
        [ 1.000000000e-01,  3.568220898e-02,  0.0,  1.098185471e-01,  6.070619982e-02,  0.0,  0.0,  0.0,  8.355491589e-02,  7.735682057e-02,  0.0,  0.0,  0.0,  0.0,  0.0,  5.620301997e-02,  8.573754253e-02,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  2.785781628e-02],
        [ 1.000000000e-01,  9.341723590e-02,  0.0,  6.787159473e-02,  9.822469464e-02,  0.0,  0.0,  0.0, -3.191513794e-02,  2.954767620e-02,  0.0,  0.0,  0.0,  0.0,  0.0, -9.093839659e-02, -5.298871540e-02,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -7.293270986e-02],
        [ 1.000000000e-01,  1.154700538e-01,  0.0,  0.000000000e+00,  0.000000000e+00,  0.0,  0.0,  0.0, -1.032795559e-01, -9.561828875e-02,  0.0,  0.0,  0.0,  0.0,  0.0,  0.000000000e+00,  0.000000000e+00,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  9.014978717e-02],
        [ 1.000000000e-01,  9.341723590e-02,  0.0, -6.787159473e-02, -9.822469464e-02,  0.0,  0.0,  0.0, -3.191513794e-02,  2.954767620e-02,  0.0,  0.0,  0.0,  0.0,  0.0,  9.093839659e-02,  5.298871540e-02,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -7.293270986e-02],
        [ 1.000000000e-01,  3.568220898e-02,  0.0, -1.098185471e-01, -6.070619982e-02,  0.0,  0.0,  0.0,  8.355491589e-02,  7.735682057e-02,  0.0,  0.0,  0.0,  0.0,  0.0, -5.620301997e-02, -8.573754253e-02,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  2.785781628e-02],
        [ 1.000000000e-01, -3.568220898e-02,  0.0, -1.098185471e-01,  6.070619982e-02,  0.0,  0.0,  0.0,  8.355491589e-02, -7.735682057e-02,  0.0,  0.0,  0.0,  0.0,  0.0, -5.620301997e-02,  8.573754253e-02,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  2.785781628e-02],
        [ 1.000000000e-01, -9.341723590e-02,  0.0, -6.787159473e-02,  9.822469464e-02,  0.0,  0.0,  0.0, -3.191513794e-02, -2.954767620e-02,  0.0,  0.0,  0.0,  0.0,  0.0,  9.093839659e-02, -5.298871540e-02,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -7.293270986e-02],
        [ 1.000000000e-01, -1.154700538e-01,  0.0,  0.000000000e+00,  0.000000000e+00,  0.0,  0.0,  0.0, -1.032795559e-01,  9.561828875e-02,  0.0,  0.0,  0.0,  0.0,  0.0,  0.000000000e+00,  0.000000000e+00,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  9.014978717e-02],
        [ 1.000000000e-01, -9.341723590e-02,  0.0,  6.787159473e-02, -9.822469464e-02,  0.0,  0.0,  0.0, -3.191513794e-02, -2.954767620e-02,  0.0,  0.0,  0.0,  0.0,  0.0, -9.093839659e-02,  5.298871540e-02,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -7.293270986e-02],
        [ 1.000000000e-01, -3.568220898e-02,  0.0,  1.098185471e-01, -6.070619982e-02,  0.0,  0.0,  0.0,  8.355491589e-02, -7.735682057e-02,  0.0,  0.0,  0.0,  0.0,  0.0,  5.620301997e-02, -8.573754253e-02,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  2.785781628e-02],
    ],
    [
        Direction::new(9.510565163e-01, 3.090169944e-01, 0.000000000e+00),
        Direction::new(5.877852523e-01, 8.090169944e-01, 0.000000000e+00),
        Direction::new(0.000000000e+00, 1.000000000e+00, 0.000000000e+00),
        Direction::new(-5.877852523e-01, 8.090169944e-01, 0.000000000e+00),
        Direction::new(-9.510565163e-01, 3.090169944e-01, 0.000000000e+00),
        Direction::new(-9.510565163e-01, -3.090169944e-01, 0.000000000e+00),
        Direction::new(-5.877852523e-01, -8.090169944e-01, 0.000000000e+00),
        Direction::new(0.000000000e+00, -1.000000000e+00, 0.000000000e+00),
        Direction::new(5.877852523e-01, -8.090169944e-01, 0.000000000e+00),
        Direction::new(9.510565163e-01, -3.090169944e-01, 0.000000000e+00),
    ],
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hoa::{channels_from_order, FROM_ACN_2D};

    fn check_layout<const K: usize, const C: usize>(array: &ReferenceArray<K, C>) {
        assert_eq!(array.decoder().len(), array.encoder().len());
        assert_eq!(array.decoder().len(), array.speaker_count());
        assert_eq!(array.channel_count(), channels_from_order(array.order()));

        for dir in array.directions() {
            assert!((dir.magnitude() - 1.0).abs() < 1e-6, "{dir:?} is not a unit vector");
            if array.dimensionality().is_horizontal() {
                assert!(dir.is_horizontal());
            }
        }

        // Every speaker reproduces the omni channel equally
        let w = array.decoder()[0][0];
        assert!(array.decoder().iter().all(|row| row[0] == w));
        assert!((w * K as f32 - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_3d_arrays() {
        check_layout(&FIRST_ORDER_ARRAY);
        check_layout(&SECOND_ORDER_ARRAY);
        check_layout(&THIRD_ORDER_ARRAY);

        assert_eq!(FIRST_ORDER_ARRAY.speaker_count(), 8);
        assert_eq!(SECOND_ORDER_ARRAY.speaker_count(), 12);
        assert_eq!(THIRD_ORDER_ARRAY.speaker_count(), 20);
    }

    #[test]
    fn test_2d_rings() {
        check_layout(&FIRST_ORDER_2D_ARRAY);
        check_layout(&SECOND_ORDER_2D_ARRAY);
        check_layout(&THIRD_ORDER_2D_ARRAY);
        check_layout(&FOURTH_ORDER_2D_ARRAY);

        // 2 * order + 2 speakers per ring
        assert_eq!(FIRST_ORDER_2D_ARRAY.speaker_count(), 4);
        assert_eq!(SECOND_ORDER_2D_ARRAY.speaker_count(), 6);
        assert_eq!(THIRD_ORDER_2D_ARRAY.speaker_count(), 8);
        assert_eq!(FOURTH_ORDER_2D_ARRAY.speaker_count(), 10);
    }

    #[test]
    fn test_2d_decoders_ignore_height_channels() {
        let horizontal = |ch: usize| FROM_ACN_2D.contains(&ch) || ch == 24 || ch == 16;
        for row in THIRD_ORDER_2D_ARRAY.decoder() {
            for (ch, &g) in row.iter().enumerate() {
                if !horizontal(ch) {
                    assert_eq!(g, 0.0);
                }
            }
        }
        for row in FOURTH_ORDER_2D_ARRAY.decoder() {
            for (ch, &g) in row.iter().enumerate() {
                if !horizontal(ch) {
                    assert_eq!(g, 0.0);
                }
            }
        }
    }

    #[test]
    fn test_sampling_decoders_are_scaled_encoders() {
        // Regular arrays that sample the order exactly decode with D = E / K
        fn check<const K: usize, const C: usize>(array: &ReferenceArray<K, C>) {
            let encoder = array.encoder();
            for (row, enc) in array.decoder().iter().zip(encoder.iter()) {
                for ch in 0..C {
                    let expected = enc[ch] / K as f32;
                    assert!((row[ch] - expected).abs() < 1e-6, "{} vs {}", row[ch], expected);
                }
            }
        }

        check(&FIRST_ORDER_ARRAY);
        check(&SECOND_ORDER_ARRAY);
    }
}
