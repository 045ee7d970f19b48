//! AmbiScale - built upsamplers and HF order scales for the mixer
//!
//! Every matrix is built once from its reference array on first access and
//! is read-only afterwards, so any number of mixing threads can share them.
//! Call [`AmbiScale::init`] before the audio pipeline starts to keep the
//! build off the audio threads.

use std::sync::{LazyLock, Once};

use crate::error::{AmbiError, AmbiResult};
use crate::hoa::{
    hf_order_scales, ChannelCoefficients, Dimensionality, Normalization, UpsamplingMatrix,
    FIRST_ORDER_2D_ARRAY, FIRST_ORDER_ARRAY, FOURTH_ORDER_2D_ARRAY, MAX_AMBI_CHANNELS,
    MAX_AMBI_ORDER, SECOND_ORDER_2D_ARRAY, SECOND_ORDER_ARRAY, THIRD_ORDER_2D_ARRAY,
    THIRD_ORDER_ARRAY,
};

/// First-order content to the full 3D mix (cube array)
pub static FIRST_ORDER_UP: LazyLock<UpsamplingMatrix<4>> =
    LazyLock::new(|| UpsamplingMatrix::from_reference(&FIRST_ORDER_ARRAY));

/// First-order content to the full mix (square ring)
pub static FIRST_ORDER_2D_UP: LazyLock<UpsamplingMatrix<4>> =
    LazyLock::new(|| UpsamplingMatrix::from_reference(&FIRST_ORDER_2D_ARRAY));

/// Second-order content to the full 3D mix (icosahedron array)
pub static SECOND_ORDER_UP: LazyLock<UpsamplingMatrix<9>> =
    LazyLock::new(|| UpsamplingMatrix::from_reference(&SECOND_ORDER_ARRAY));

/// Second-order content to the full mix (hexagon ring)
pub static SECOND_ORDER_2D_UP: LazyLock<UpsamplingMatrix<9>> =
    LazyLock::new(|| UpsamplingMatrix::from_reference(&SECOND_ORDER_2D_ARRAY));

/// Third-order content to the full 3D mix (dodecahedron array)
pub static THIRD_ORDER_UP: LazyLock<UpsamplingMatrix<16>> =
    LazyLock::new(|| UpsamplingMatrix::from_reference(&THIRD_ORDER_ARRAY));

/// Third-order content to the full mix (octagon ring)
pub static THIRD_ORDER_2D_UP: LazyLock<UpsamplingMatrix<16>> =
    LazyLock::new(|| UpsamplingMatrix::from_reference(&THIRD_ORDER_2D_ARRAY));

/// Horizontal-only fourth-order content to the 3D mix (decagon ring)
pub static FOURTH_ORDER_2D_UP: LazyLock<UpsamplingMatrix<25>> =
    LazyLock::new(|| UpsamplingMatrix::from_reference(&FOURTH_ORDER_2D_ARRAY));

/// Entry point for the fixed ambisonic scaling tables
pub struct AmbiScale;

impl AmbiScale {
    /// Build every upsampler now
    ///
    /// Idempotent. Readers never need this for correctness, only to keep
    /// the first build out of the real-time path.
    pub fn init() {
        static INIT: Once = Once::new();

        INIT.call_once(|| {
            LazyLock::force(&FIRST_ORDER_UP);
            LazyLock::force(&FIRST_ORDER_2D_UP);
            LazyLock::force(&SECOND_ORDER_UP);
            LazyLock::force(&SECOND_ORDER_2D_UP);
            LazyLock::force(&THIRD_ORDER_UP);
            LazyLock::force(&THIRD_ORDER_2D_UP);
            LazyLock::force(&FOURTH_ORDER_2D_UP);

            log::debug!(
                "Ambisonic upsamplers built (max order {}, {} channels)",
                MAX_AMBI_ORDER,
                MAX_AMBI_CHANNELS
            );
        });
    }

    /// Upsampler rows [in][out] for content of `order`
    ///
    /// Row `i` holds the mix gains of input channel `i` across all
    /// `MAX_AMBI_CHANNELS` outputs.
    pub fn upsampler(
        order: usize,
        dimensionality: Dimensionality,
    ) -> AmbiResult<&'static [ChannelCoefficients]> {
        let rows: &'static [ChannelCoefficients] = match (order, dimensionality) {
            (1, Dimensionality::Full3D) => &FIRST_ORDER_UP.rows()[..],
            (1, Dimensionality::Horizontal) => &FIRST_ORDER_2D_UP.rows()[..],
            (2, Dimensionality::Full3D) => &SECOND_ORDER_UP.rows()[..],
            (2, Dimensionality::Horizontal) => &SECOND_ORDER_2D_UP.rows()[..],
            (3, Dimensionality::Full3D) => &THIRD_ORDER_UP.rows()[..],
            (3, Dimensionality::Horizontal) => &THIRD_ORDER_2D_UP.rows()[..],
            (4, Dimensionality::Horizontal) => &FOURTH_ORDER_2D_UP.rows()[..],
            _ => {
                return Err(AmbiError::NoUpsampler {
                    order,
                    dimensionality,
                });
            }
        };
        Ok(rows)
    }

    /// Per-band HF ratios for `src_order` content decoded at `dev_order`
    ///
    /// Orders must be in `0..=MAX_AMBI_ORDER`.
    pub fn hf_order_scales(
        src_order: usize,
        dev_order: usize,
        horizontal_only: bool,
    ) -> [f32; MAX_AMBI_ORDER + 1] {
        hf_order_scales(src_order, dev_order, horizontal_only)
    }

    /// N3D input scales (identity)
    pub fn from_n3d() -> &'static [f32; MAX_AMBI_CHANNELS] {
        Normalization::N3D.scales()
    }

    /// SN3D to N3D input scales
    pub fn from_sn3d() -> &'static [f32; MAX_AMBI_CHANNELS] {
        Normalization::SN3D.scales()
    }

    /// FuMa to N3D input scales
    pub fn from_fuma() -> &'static [f32; MAX_AMBI_CHANNELS] {
        Normalization::FuMa.scales()
    }
}
