//! Order upsampler - decode to a reference array, re-encode at a higher order

use ndarray::{Array2, ArrayView2, ArrayViewMut2};

use super::arrays::ReferenceArray;
use super::MAX_AMBI_CHANNELS;
use crate::error::{AmbiError, AmbiResult};

/// Matrix converting `IN` lower-order channels to `OUT` higher-order channels
///
/// Logically `OUT x IN`. Stored as one row of output gains per input channel,
/// which is the order the mixer walks it in.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsamplingMatrix<const IN: usize, const OUT: usize = MAX_AMBI_CHANNELS> {
    /// Output gains per input channel [in][out]
    rows: [[f32; OUT]; IN],
}

impl<const IN: usize, const OUT: usize> UpsamplingMatrix<IN, OUT> {
    /// Build from a reference array's decoder and encoder
    ///
    /// Behaves as if the input is decoded to the array's speakers at its
    /// own order, then the speaker feeds are encoded at `OUT` channels:
    ///
    /// `U[out][in] = sum_k D[k][in] * E[k][out]`
    ///
    /// Each sum is accumulated in double precision, in speaker order, and
    /// rounded to single precision once. Outputs are bit-stable only as long
    /// as that order and rounding stay put.
    pub fn from_reference<const K: usize>(array: &ReferenceArray<K, IN>) -> Self {
        const {
            assert!(OUT <= MAX_AMBI_CHANNELS, "upsampler output exceeds the basis order");
        }

        let decoder = array.decoder();
        let encoder = array.encoder();
        let mut rows = [[0.0f32; OUT]; IN];

        for (i, row) in rows.iter_mut().enumerate() {
            for (j, gain) in row.iter_mut().enumerate() {
                let mut sum = 0.0f64;
                for k in 0..K {
                    sum += f64::from(decoder[k][i]) * f64::from(encoder[k][j]);
                }
                *gain = sum as f32;
            }
        }

        Self { rows }
    }

    /// Matrix shape as (output channels, input channels)
    pub fn shape(&self) -> (usize, usize) {
        (OUT, IN)
    }

    /// Gain from `in_channel` to `out_channel`
    pub fn get(&self, out_channel: usize, in_channel: usize) -> f32 {
        self.rows[in_channel][out_channel]
    }

    /// Output gains for one input channel
    pub fn input_gains(&self, in_channel: usize) -> &[f32; OUT] {
        &self.rows[in_channel]
    }

    /// All rows [in][out]
    pub fn rows(&self) -> &[[f32; OUT]; IN] {
        &self.rows
    }

    /// Upsample one channel vector
    pub fn apply(&self, input: &[f32; IN]) -> [f32; OUT] {
        let mut output = [0.0f32; OUT];
        for (row, &sample) in self.rows.iter().zip(input.iter()) {
            for (out, &gain) in output.iter_mut().zip(row.iter()) {
                *out += sample * gain;
            }
        }
        output
    }

    /// Upsample a block [channels x samples] into a preallocated output
    ///
    /// The output is overwritten. Allocation-free.
    pub fn upsample_into(
        &self,
        input: ArrayView2<'_, f32>,
        mut output: ArrayViewMut2<'_, f32>,
    ) -> AmbiResult<()> {
        if input.nrows() != IN {
            return Err(AmbiError::ChannelCountMismatch {
                expected: IN,
                got: input.nrows(),
            });
        }
        if output.nrows() != OUT {
            return Err(AmbiError::ChannelCountMismatch {
                expected: OUT,
                got: output.nrows(),
            });
        }
        if output.ncols() != input.ncols() {
            return Err(AmbiError::ChannelCountMismatch {
                expected: input.ncols(),
                got: output.ncols(),
            });
        }

        output.fill(0.0);
        for (row, in_samples) in self.rows.iter().zip(input.rows()) {
            for (&gain, mut out_samples) in row.iter().zip(output.rows_mut()) {
                if gain == 0.0 {
                    continue;
                }
                out_samples.scaled_add(gain, &in_samples);
            }
        }

        Ok(())
    }

    /// Upsample a block [channels x samples]
    pub fn upsample_block(&self, input: ArrayView2<'_, f32>) -> AmbiResult<Array2<f32>> {
        let mut output = Array2::<f32>::zeros((OUT, input.ncols()));
        self.upsample_into(input, output.view_mut())?;
        Ok(output)
    }

    /// Copy into an ndarray matrix [out x in]
    pub fn to_array2(&self) -> Array2<f32> {
        Array2::from_shape_fn((OUT, IN), |(out, inp)| self.rows[inp][out])
    }
}
