//! High-frequency order scales
//!
//! A signal mixed for one decode order but decoded at another needs its
//! per-order HF gains corrected so the perceived high-frequency energy holds.

use super::{AmbisonicOrder, Dimensionality, MAX_AMBI_ORDER};
use crate::error::AmbiResult;

/// HF gains indexed [order][order band]
pub type HfScaleTable = [[f32; MAX_AMBI_ORDER + 1]; MAX_AMBI_ORDER + 1];

/// HF gains derived from a 32-point speaker array
///
/// The ratio between two rows is the same for any regular array decoder:
/// scaling channel 0 of first-order content by `HF_SCALES[1][0] /
/// HF_SCALES[2][0]` makes a second-order decode of it behave like a
/// first-order decode on that same array.
#[allow(clippy::excessive_precision)]
pub const HF_SCALES: HfScaleTable = [
    [4.000000000e+00, 2.309401077e+00, 1.192569588e+00, 7.189495850e-01],
    [4.000000000e+00, 2.309401077e+00, 1.192569588e+00, 7.189495850e-01],
    [2.981423970e+00, 2.309401077e+00, 1.192569588e+00, 7.189495850e-01],
    [2.359168820e+00, 2.031565936e+00, 1.444598386e+00, 7.189495850e-01],
];

/// HF gains derived from a 10-point horizontal ring
///
/// Only for devices mixing horizontal-only B-Format.
#[allow(clippy::excessive_precision)]
pub const HF_SCALES_2D: HfScaleTable = [
    [2.236067977e+00, 1.581138830e+00, 9.128709292e-01, 6.050756345e-01],
    [2.236067977e+00, 1.581138830e+00, 9.128709292e-01, 6.050756345e-01],
    [1.825741858e+00, 1.581138830e+00, 9.128709292e-01, 6.050756345e-01],
    [1.581138830e+00, 1.460781803e+00, 1.118033989e+00, 6.050756345e-01],
];

/// Table for a dimensionality
pub fn hf_scale_table(dimensionality: Dimensionality) -> &'static HfScaleTable {
    match dimensionality {
        Dimensionality::Full3D => &HF_SCALES,
        Dimensionality::Horizontal => &HF_SCALES_2D,
    }
}

/// Per-band HF ratios for `src_order` content decoded at `dev_order`
///
/// Both orders must be in `0..=MAX_AMBI_ORDER`; anything else is a caller
/// bug and panics on the table index. Use [`try_hf_order_scales`] for
/// orders that come from outside the mixer.
pub fn hf_order_scales(
    src_order: usize,
    dev_order: usize,
    horizontal_only: bool,
) -> [f32; MAX_AMBI_ORDER + 1] {
    let table = hf_scale_table(Dimensionality::from_horizontal_only(horizontal_only));
    let src = &table[src_order];
    let dev = &table[dev_order];

    let mut res = [0.0f32; MAX_AMBI_ORDER + 1];
    for (i, r) in res.iter_mut().enumerate() {
        *r = src[i] / dev[i];
    }
    res
}

/// Checked variant of [`hf_order_scales`]
pub fn try_hf_order_scales(
    src_order: usize,
    dev_order: usize,
    horizontal_only: bool,
) -> AmbiResult<[f32; MAX_AMBI_ORDER + 1]> {
    let src = AmbisonicOrder::from_order(src_order)?;
    let dev = AmbisonicOrder::from_order(dev_order)?;
    Ok(hf_order_scales(src.as_usize(), dev.as_usize(), horizontal_only))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AmbiError;
    use approx::assert_relative_eq;

    #[test]
    fn test_same_order_is_unity() {
        for horizontal_only in [false, true] {
            for order in 0..=MAX_AMBI_ORDER {
                let scales = hf_order_scales(order, order, horizontal_only);
                assert_eq!(scales, [1.0; MAX_AMBI_ORDER + 1]);
            }
        }
    }

    #[test]
    fn test_swapped_orders_are_reciprocal() {
        for horizontal_only in [false, true] {
            for a in 0..=MAX_AMBI_ORDER {
                for b in 0..=MAX_AMBI_ORDER {
                    let ab = hf_order_scales(a, b, horizontal_only);
                    let ba = hf_order_scales(b, a, horizontal_only);
                    for i in 0..=MAX_AMBI_ORDER {
                        assert_relative_eq!(ab[i], 1.0 / ba[i], max_relative = 1e-6);
                    }
                }
            }
        }
    }

    #[test]
    fn test_zeroth_and_first_share_scales() {
        assert_eq!(hf_order_scales(1, 0, false)[0], 1.0);
        assert_eq!(hf_order_scales(1, 0, true), [1.0; MAX_AMBI_ORDER + 1]);
    }

    #[test]
    fn test_first_order_source_on_third_order_device() {
        let scales = hf_order_scales(1, 3, false);
        assert_relative_eq!(scales[0], 4.0 / 2.359168820, max_relative = 1e-6);
        assert_relative_eq!(scales[1], 2.309401077 / 2.031565936, max_relative = 1e-6);
        assert_relative_eq!(scales[2], 1.192569588 / 1.444598386, max_relative = 1e-6);
        assert_eq!(scales[3], 1.0);
    }

    #[test]
    fn test_tables_positive() {
        for table in [&HF_SCALES, &HF_SCALES_2D] {
            assert!(table.iter().flatten().all(|&g| g > 0.0));
        }
        assert_eq!(hf_scale_table(Dimensionality::Horizontal), &HF_SCALES_2D);
    }

    #[test]
    fn test_checked_rejects_out_of_range() {
        assert!(try_hf_order_scales(3, 0, true).is_ok());
        assert!(matches!(
            try_hf_order_scales(4, 0, false),
            Err(AmbiError::OrderOutOfRange { order: 4, max: 3 })
        ));
        assert!(try_hf_order_scales(0, 7, false).is_err());

        // Same range as AmbisonicOrder
        for order in 0..=MAX_AMBI_ORDER + 1 {
            assert_eq!(
                try_hf_order_scales(order, order, false).is_ok(),
                AmbisonicOrder::from_order(order).is_ok()
            );
        }
    }

    #[test]
    #[should_panic]
    fn test_unchecked_out_of_range_panics() {
        let _ = hf_order_scales(0, MAX_AMBI_ORDER + 1, false);
    }
}
