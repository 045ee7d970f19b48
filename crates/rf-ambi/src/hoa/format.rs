//! Ambisonic format tables - normalization scales and channel ordering maps

use serde::{Deserialize, Serialize};

use super::{Dimensionality, MAX_AMBI_2D_CHANNELS, MAX_AMBI_CHANNELS};

/// Normalization scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Normalization {
    /// N3D (fully normalized) - internal mixing format
    #[default]
    N3D,
    /// SN3D (Schmidt semi-normalized) - AmbiX standard
    SN3D,
    /// FuMa (Furse-Malham) - legacy, up to third order
    FuMa,
}

impl Normalization {
    /// Per-ACN-channel multipliers converting this normalization to N3D
    pub fn scales(&self) -> &'static [f32; MAX_AMBI_CHANNELS] {
        match self {
            Normalization::N3D => &FROM_N3D,
            Normalization::SN3D => &FROM_SN3D,
            Normalization::FuMa => &FROM_FUMA_SCALE,
        }
    }
}

/// Channel ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChannelOrdering {
    /// ACN (Ambisonic Channel Number) - AmbiX standard
    #[default]
    ACN,
    /// FuMa ordering - legacy
    FuMa,
}

impl ChannelOrdering {
    /// Map from this ordering's channel index to the mixer's channel index
    ///
    /// For 3D content the target is the ACN channel. For horizontal-only
    /// content the target is the position in the 2D channel list, which
    /// `FROM_ACN_2D` then maps to ACN.
    pub fn index_map(&self, dimensionality: Dimensionality) -> &'static [usize] {
        match (self, dimensionality) {
            (ChannelOrdering::ACN, Dimensionality::Full3D) => &FROM_ACN,
            (ChannelOrdering::ACN, Dimensionality::Horizontal) => &FROM_ACN_2D_IDENTITY,
            (ChannelOrdering::FuMa, Dimensionality::Full3D) => &FROM_FUMA,
            (ChannelOrdering::FuMa, Dimensionality::Horizontal) => &FROM_FUMA_2D,
        }
    }
}

/// N3D to N3D (identity)
pub const FROM_N3D: [f32; MAX_AMBI_CHANNELS] = [1.0; MAX_AMBI_CHANNELS];

/// SN3D to N3D: sqrt(2l + 1) per channel
#[allow(clippy::excessive_precision)]
pub const FROM_SN3D: [f32; MAX_AMBI_CHANNELS] = [
    1.000000000, // ACN 0, sqrt(1)
    1.732050808, // ACN 1, sqrt(3)
    1.732050808, // ACN 2, sqrt(3)
    1.732050808, // ACN 3, sqrt(3)
    2.236067978, // ACN 4, sqrt(5)
    2.236067978, // ACN 5, sqrt(5)
    2.236067978, // ACN 6, sqrt(5)
    2.236067978, // ACN 7, sqrt(5)
    2.236067978, // ACN 8, sqrt(5)
    2.645751311, // ACN 9, sqrt(7)
    2.645751311, // ACN 10, sqrt(7)
    2.645751311, // ACN 11, sqrt(7)
    2.645751311, // ACN 12, sqrt(7)
    2.645751311, // ACN 13, sqrt(7)
    2.645751311, // ACN 14, sqrt(7)
    2.645751311, // ACN 15, sqrt(7)
];

/// FuMa to N3D, indexed by ACN channel
#[allow(clippy::excessive_precision)]
pub const FROM_FUMA_SCALE: [f32; MAX_AMBI_CHANNELS] = [
    1.414213562, // ACN 0 (W), sqrt(2)
    1.732050808, // ACN 1 (Y), sqrt(3)
    1.732050808, // ACN 2 (Z), sqrt(3)
    1.732050808, // ACN 3 (X), sqrt(3)
    1.936491673, // ACN 4 (V), sqrt(15)/2
    1.936491673, // ACN 5 (T), sqrt(15)/2
    2.236067978, // ACN 6 (R), sqrt(5)
    1.936491673, // ACN 7 (S), sqrt(15)/2
    1.936491673, // ACN 8 (U), sqrt(15)/2
    2.091650066, // ACN 9 (Q), sqrt(35/8)
    1.972026594, // ACN 10 (O), sqrt(35)/3
    2.231093404, // ACN 11 (M), sqrt(224/45)
    2.645751311, // ACN 12 (K), sqrt(7)
    2.231093404, // ACN 13 (L), sqrt(224/45)
    1.972026594, // ACN 14 (N), sqrt(35)/3
    2.091650066, // ACN 15 (P), sqrt(35/8)
];

/// ACN to ACN (identity)
pub const FROM_ACN: [usize; MAX_AMBI_CHANNELS] =
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];

/// FuMa channel (W X Y Z R S T U V K L M N O P Q) to ACN
pub const FROM_FUMA: [usize; MAX_AMBI_CHANNELS] =
    [0, 3, 1, 2, 6, 7, 5, 8, 4, 12, 13, 11, 14, 10, 15, 9];

/// 2D channel list position to ACN (W Y X V U Q P)
pub const FROM_ACN_2D: [usize; MAX_AMBI_2D_CHANNELS] = [0, 1, 3, 4, 8, 9, 15];

/// 2D ACN to 2D channel list position (identity)
const FROM_ACN_2D_IDENTITY: [usize; MAX_AMBI_2D_CHANNELS] = [0, 1, 2, 3, 4, 5, 6];

/// FuMa horizontal channel (W X Y U V P Q) to 2D channel list position
pub const FROM_FUMA_2D: [usize; MAX_AMBI_2D_CHANNELS] = [0, 2, 1, 4, 3, 6, 5];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hoa::{acn_to_order_degree, order_from_channel};
    use approx::assert_abs_diff_eq;

    fn is_permutation(map: &[usize]) -> bool {
        let mut seen = vec![false; map.len()];
        for &idx in map {
            if idx >= map.len() || seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
        true
    }

    #[test]
    fn test_index_maps_are_permutations() {
        for ordering in [ChannelOrdering::ACN, ChannelOrdering::FuMa] {
            for dims in [Dimensionality::Full3D, Dimensionality::Horizontal] {
                assert!(is_permutation(ordering.index_map(dims)), "{ordering:?} {dims:?}");
            }
        }
    }

    #[test]
    fn test_2d_channels_are_sectoral() {
        // Horizontal-only channels are exactly the |m| == l harmonics
        for &acn in &FROM_ACN_2D {
            let (order, degree) = acn_to_order_degree(acn);
            assert_eq!(order, degree.abs());
        }
    }

    #[test]
    fn test_fuma_2d_matches_3d_map() {
        // FuMa horizontal channels taken from the 3D FuMa sequence
        let fuma_3d_positions = [0usize, 1, 2, 7, 8, 14, 15];
        for (fuma_2d, &fuma_3d) in fuma_3d_positions.iter().enumerate() {
            let acn = FROM_FUMA[fuma_3d];
            assert_eq!(FROM_ACN_2D[FROM_FUMA_2D[fuma_2d]], acn);
        }
    }

    #[test]
    fn test_sn3d_scales() {
        for (acn, &scale) in FROM_SN3D.iter().enumerate() {
            let order = order_from_channel(acn);
            assert_abs_diff_eq!(scale, ((2 * order + 1) as f32).sqrt(), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_scales_positive() {
        for norm in [Normalization::N3D, Normalization::SN3D, Normalization::FuMa] {
            assert!(norm.scales().iter().all(|&s| s >= 1.0));
        }
        // FuMa W carries the -3dB legacy gain
        assert_abs_diff_eq!(Normalization::FuMa.scales()[0], 2.0f32.sqrt(), epsilon = 1e-6);
    }
}
