//! Ambisonic Table Integration Tests
//!
//! Exercises the public tables the way the mixer consumes them.
//! Verifies:
//! - First → second order upsampling through the cube array
//! - Deterministic (bit-identical) matrix builds
//! - HF order scale properties across both tables
//! - Decoder/encoder row agreement for every reference array
//! - Config-driven table selection

use approx::assert_abs_diff_eq;
use ndarray::Array2;
use rf_ambi::hoa::{
    calc_ambi_coeffs_for_order, hf_order_scales, Dimensionality, ReferenceArray,
    UpsamplingMatrix, FIRST_ORDER_2D_ARRAY, FIRST_ORDER_ARRAY, FOURTH_ORDER_2D_ARRAY,
    MAX_AMBI_CHANNELS, MAX_AMBI_ORDER, SECOND_ORDER_2D_ARRAY, SECOND_ORDER_ARRAY,
    THIRD_ORDER_2D_ARRAY, THIRD_ORDER_ARRAY,
};
use rf_ambi::{AmbiError, AmbiMixConfig, AmbiScale, Direction, FIRST_ORDER_UP, THIRD_ORDER_UP};

const BLOCK_SIZE: usize = 256;

/// Directions spread over the sphere
fn test_directions() -> Vec<Direction> {
    let mut dirs = Vec::new();
    for el in [-60.0f32, -20.0, 0.0, 35.0, 80.0] {
        for az in (0..360).step_by(45) {
            dirs.push(Direction::from_spherical(az as f32, el));
        }
    }
    dirs
}

/// First-order encoding of a direction as a 4-channel frame
fn first_order_frame(dir: Direction) -> [f32; 4] {
    let coeffs = calc_ambi_coeffs_for_order(dir, 1);
    [coeffs[0], coeffs[1], coeffs[2], coeffs[3]]
}

fn check_rows<const K: usize, const C: usize>(array: &ReferenceArray<K, C>) {
    assert_eq!(array.decoder().len(), array.encoder().len());
    assert_eq!(array.directions().len(), array.speaker_count());
}

// ═══════════════════════════════════════════════════════════════════════════════
// UPSAMPLING
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_first_to_second_order_omni() {
    // Decoder and encoder must share a speaker set, so this is the cube re-encoded at 9 channels
    let up = UpsamplingMatrix::<4, 9>::from_reference(&FIRST_ORDER_ARRAY);
    assert_eq!(up.shape(), (9, 4));

    let out = up.apply(&[1.0, 0.0, 0.0, 0.0]);
    assert_abs_diff_eq!(out[0], 1.0, epsilon = 1e-6);
    for &c in &out[1..] {
        assert_abs_diff_eq!(c, 0.0, epsilon = 1e-6);
    }
}

#[test]
fn test_upsampling_preserves_lower_order_channels() {
    for dir in test_directions() {
        let frame = first_order_frame(dir);
        let out = FIRST_ORDER_UP.apply(&frame);

        for ch in 0..4 {
            assert_abs_diff_eq!(out[ch], frame[ch], epsilon = 1e-5);
        }
        assert!(out.iter().all(|c| c.is_finite()));
    }
}

#[test]
fn test_block_upsampling_through_static() {
    let mut input = Array2::<f32>::zeros((4, BLOCK_SIZE));
    for s in 0..BLOCK_SIZE {
        let dir = Direction::from_spherical(s as f32 * 1.4, 10.0);
        let frame = first_order_frame(dir);
        for ch in 0..4 {
            input[[ch, s]] = frame[ch];
        }
    }

    let output = FIRST_ORDER_UP.upsample_block(input.view()).unwrap();
    assert_eq!(output.dim(), (MAX_AMBI_CHANNELS, BLOCK_SIZE));

    let matrix = FIRST_ORDER_UP.to_array2();
    let expected = matrix.dot(&input);
    for (a, b) in output.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-5);
    }
}

#[test]
fn test_rebuild_is_bit_identical() {
    AmbiScale::init();
    let rebuilt = UpsamplingMatrix::<16>::from_reference(&THIRD_ORDER_ARRAY);

    for (a, b) in THIRD_ORDER_UP.rows().iter().zip(rebuilt.rows().iter()) {
        for (&x, &y) in a.iter().zip(b.iter()) {
            assert_eq!(x.to_bits(), y.to_bits());
        }
    }
}

#[test]
fn test_reference_array_rows_agree() {
    check_rows(&FIRST_ORDER_ARRAY);
    check_rows(&FIRST_ORDER_2D_ARRAY);
    check_rows(&SECOND_ORDER_ARRAY);
    check_rows(&SECOND_ORDER_2D_ARRAY);
    check_rows(&THIRD_ORDER_ARRAY);
    check_rows(&THIRD_ORDER_2D_ARRAY);
    check_rows(&FOURTH_ORDER_2D_ARRAY);
}

// ═══════════════════════════════════════════════════════════════════════════════
// HF SCALES
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_hf_scale_properties() {
    for horizontal_only in [false, true] {
        for a in 0..=MAX_AMBI_ORDER {
            assert_eq!(
                hf_order_scales(a, a, horizontal_only),
                [1.0; MAX_AMBI_ORDER + 1]
            );
            for b in 0..=MAX_AMBI_ORDER {
                let ab = AmbiScale::hf_order_scales(a, b, horizontal_only);
                let ba = AmbiScale::hf_order_scales(b, a, horizontal_only);
                for i in 0..=MAX_AMBI_ORDER {
                    assert_abs_diff_eq!(ab[i] * ba[i], 1.0, epsilon = 1e-6);
                }
            }
        }
    }
    assert_eq!(hf_order_scales(1, 0, false)[0], 1.0);
}

// ═══════════════════════════════════════════════════════════════════════════════
// CONFIG
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_config_selects_tables() {
    let config = AmbiMixConfig::from_json(
        r#"{ "device_order": 3, "dimensionality": "Horizontal" }"#,
    )
    .unwrap();

    assert_eq!(config.channel_count(), 7);
    assert_eq!(
        config.hf_scales_for(2).unwrap(),
        hf_order_scales(2, 3, true)
    );

    let rows = config.upsampler_for(2).unwrap();
    assert_eq!(
        rows,
        AmbiScale::upsampler(2, Dimensionality::Horizontal).unwrap()
    );
    assert!(matches!(
        config.upsampler_for(5),
        Err(AmbiError::NoUpsampler { order: 5, .. })
    ));
}

#[test]
fn test_config_rejects_unsupported_device() {
    let err = AmbiMixConfig::from_json(r#"{ "device_order": 4 }"#).unwrap_err();
    assert!(matches!(err, AmbiError::OrderOutOfRange { order: 4, max: 3 }));
    assert!(err.to_string().contains('4'));
}
