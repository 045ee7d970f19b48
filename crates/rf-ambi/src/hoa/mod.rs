//! Higher-Order Ambisonics (HOA) definitions
//!
//! Fixed tables shared by the ambisonic mixer:
//! - Basis: real spherical harmonics (ACN ordering, N3D normalization)
//! - Reference arrays: regular speaker layouts with matched decoders
//! - Upsampling: decode/re-encode matrices between orders
//! - HF scales: per-order high-frequency gain correction
//! - Format tables: normalization and channel ordering conversion
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rf_ambi::hoa::{UpsamplingMatrix, FIRST_ORDER_ARRAY};
//!
//! // First-order content re-encoded at second order (9 x 4)
//! let up = UpsamplingMatrix::<4, 9>::from_reference(&FIRST_ORDER_ARRAY);
//! let second = up.apply(&[1.0, 0.0, 0.0, 0.0]);
//! ```

mod arrays;
mod basis;
mod format;
mod hf_scale;
mod upsampler;

pub use arrays::{
    ReferenceArray, FIRST_ORDER_2D_ARRAY, FIRST_ORDER_ARRAY, FOURTH_ORDER_2D_ARRAY,
    SECOND_ORDER_2D_ARRAY, SECOND_ORDER_ARRAY, THIRD_ORDER_2D_ARRAY, THIRD_ORDER_ARRAY,
};
pub use basis::{calc_ambi_coeffs, calc_ambi_coeffs_for_order, ChannelCoefficients};
pub use format::{
    ChannelOrdering, Normalization, FROM_ACN, FROM_ACN_2D, FROM_FUMA, FROM_FUMA_2D, FROM_FUMA_SCALE,
    FROM_N3D, FROM_SN3D,
};
pub use hf_scale::{
    hf_order_scales, hf_scale_table, try_hf_order_scales, HfScaleTable, HF_SCALES, HF_SCALES_2D,
};
pub use upsampler::UpsamplingMatrix;

use serde::{Deserialize, Serialize};

use crate::error::{AmbiError, AmbiResult};

/// Highest ambisonic order mixed in full 3D
pub const MAX_AMBI_ORDER: usize = 3;

/// Channel count at the maximum order
pub const MAX_AMBI_CHANNELS: usize = channels_from_order(MAX_AMBI_ORDER);

/// Horizontal-only channel count at the maximum order
pub const MAX_AMBI_2D_CHANNELS: usize = channels_2d_from_order(MAX_AMBI_ORDER);

/// Full 3D channel count for an order
pub const fn channels_from_order(order: usize) -> usize {
    (order + 1) * (order + 1)
}

/// Horizontal-only channel count for an order
pub const fn channels_2d_from_order(order: usize) -> usize {
    order * 2 + 1
}

/// Ambisonic order (determines spatial resolution)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AmbisonicOrder {
    /// Zeroth order (1 channel) - omni only
    Zeroth = 0,
    /// First order (4 channels) - basic 3D
    First = 1,
    /// Second order (9 channels) - good localization
    Second = 2,
    /// Third order (16 channels) - high quality
    Third = 3,
}

impl AmbisonicOrder {
    /// Get channel count for this order
    pub fn channel_count(&self) -> usize {
        channels_from_order(self.as_usize())
    }

    /// Get horizontal-only channel count for this order
    pub fn channel_count_2d(&self) -> usize {
        channels_2d_from_order(self.as_usize())
    }

    /// Create from order number
    pub fn from_order(order: usize) -> AmbiResult<Self> {
        match order {
            0 => Ok(AmbisonicOrder::Zeroth),
            1 => Ok(AmbisonicOrder::First),
            2 => Ok(AmbisonicOrder::Second),
            3 => Ok(AmbisonicOrder::Third),
            _ => Err(AmbiError::OrderOutOfRange {
                order,
                max: MAX_AMBI_ORDER,
            }),
        }
    }

    /// Get order number
    pub fn as_usize(&self) -> usize {
        *self as usize
    }
}

/// Speaker array dimensionality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dimensionality {
    /// Full periphonic (3D) array
    #[default]
    Full3D,
    /// Horizontal-only (2D) ring
    Horizontal,
}

impl Dimensionality {
    /// Map the mixer's horizontal-only flag
    pub fn from_horizontal_only(horizontal_only: bool) -> Self {
        if horizontal_only {
            Dimensionality::Horizontal
        } else {
            Dimensionality::Full3D
        }
    }

    /// Is this a horizontal-only layout
    pub fn is_horizontal(&self) -> bool {
        *self == Dimensionality::Horizontal
    }
}

/// ACN channel index from (order, degree)
pub const fn acn_index(order: i32, degree: i32) -> usize {
    (order * order + order + degree) as usize
}

/// Get (order, degree) from ACN index
pub fn acn_to_order_degree(acn: usize) -> (i32, i32) {
    let order = (acn as f64).sqrt().floor() as i32;
    let degree = acn as i32 - order * order - order;
    (order, degree)
}

/// Order of an ACN channel
pub fn order_from_channel(acn: usize) -> usize {
    acn_to_order_degree(acn).0 as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_count() {
        assert_eq!(AmbisonicOrder::Zeroth.channel_count(), 1);
        assert_eq!(AmbisonicOrder::First.channel_count(), 4);
        assert_eq!(AmbisonicOrder::Second.channel_count(), 9);
        assert_eq!(AmbisonicOrder::Third.channel_count(), 16);
        assert_eq!(AmbisonicOrder::Third.channel_count_2d(), 7);

        assert_eq!(MAX_AMBI_CHANNELS, 16);
        assert_eq!(MAX_AMBI_2D_CHANNELS, 7);
        assert_eq!(channels_from_order(4), 25);
    }

    #[test]
    fn test_from_order() {
        assert_eq!(AmbisonicOrder::from_order(2).unwrap(), AmbisonicOrder::Second);
        assert!(matches!(
            AmbisonicOrder::from_order(4),
            Err(AmbiError::OrderOutOfRange { order: 4, max: 3 })
        ));
    }

    #[test]
    fn test_acn_index() {
        assert_eq!(acn_index(0, 0), 0); // W
        assert_eq!(acn_index(1, -1), 1); // Y
        assert_eq!(acn_index(1, 0), 2); // Z
        assert_eq!(acn_index(1, 1), 3); // X
        assert_eq!(acn_index(3, 3), 15);
    }

    #[test]
    fn test_order_from_channel() {
        let orders: Vec<usize> = (0..MAX_AMBI_CHANNELS).map(order_from_channel).collect();
        assert_eq!(orders, vec![0, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3]);
        assert_eq!(acn_to_order_degree(8), (2, 2));
    }

    #[test]
    fn test_dimensionality_flag() {
        assert_eq!(Dimensionality::from_horizontal_only(true), Dimensionality::Horizontal);
        assert_eq!(Dimensionality::from_horizontal_only(false), Dimensionality::Full3D);
        assert!(Dimensionality::Horizontal.is_horizontal());
    }
}
