//! Ambisonic mixer configuration
//!
//! Selects which fixed tables a device mix uses. Loaded from the engine's
//! JSON settings.

use serde::{Deserialize, Serialize};

use crate::error::{AmbiError, AmbiResult};
use crate::hoa::{
    channels_2d_from_order, channels_from_order, try_hf_order_scales, AmbisonicOrder,
    ChannelCoefficients, ChannelOrdering, Dimensionality, Normalization, MAX_AMBI_ORDER,
};
use crate::scale::AmbiScale;

/// Device-side ambisonic mix settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbiMixConfig {
    /// Order the device decodes at
    pub device_order: usize,
    /// Full 3D or horizontal-only mix
    pub dimensionality: Dimensionality,
    /// Normalization of B-Format input
    pub normalization: Normalization,
    /// Channel ordering of B-Format input
    pub ordering: ChannelOrdering,
}

impl Default for AmbiMixConfig {
    fn default() -> Self {
        Self {
            device_order: MAX_AMBI_ORDER,
            dimensionality: Dimensionality::Full3D,
            normalization: Normalization::N3D,
            ordering: ChannelOrdering::ACN,
        }
    }
}

impl AmbiMixConfig {
    /// Parse and validate from JSON
    pub fn from_json(json: &str) -> AmbiResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> AmbiResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the settings against the supported tables
    pub fn validate(&self) -> AmbiResult<()> {
        if self.device_order == 0 {
            log::warn!("Ambisonic device order 0 rejected");
            return Err(AmbiError::InvalidConfig(
                "device order must be at least 1".into(),
            ));
        }
        self.order().inspect_err(|_| {
            log::warn!(
                "Ambisonic device order {} exceeds max {}",
                self.device_order,
                MAX_AMBI_ORDER
            );
        })?;
        Ok(())
    }

    /// Device order as a supported ambisonic order
    pub fn order(&self) -> AmbiResult<AmbisonicOrder> {
        AmbisonicOrder::from_order(self.device_order)
    }

    /// Mixing the horizontal plane only
    pub fn horizontal_only(&self) -> bool {
        self.dimensionality.is_horizontal()
    }

    /// Number of channels the device mix carries
    pub fn channel_count(&self) -> usize {
        match self.dimensionality {
            Dimensionality::Full3D => channels_from_order(self.device_order),
            Dimensionality::Horizontal => channels_2d_from_order(self.device_order),
        }
    }

    /// HF ratios for content mixed at `source_order`
    pub fn hf_scales_for(&self, source_order: usize) -> AmbiResult<[f32; MAX_AMBI_ORDER + 1]> {
        try_hf_order_scales(source_order, self.device_order, self.horizontal_only())
    }

    /// Upsampler rows for content of `source_order`
    pub fn upsampler_for(&self, source_order: usize) -> AmbiResult<&'static [ChannelCoefficients]> {
        AmbiScale::upsampler(source_order, self.dimensionality)
    }

    /// Input scales converting the configured normalization to N3D
    pub fn input_scales(&self) -> &'static [f32] {
        self.normalization.scales()
    }

    /// Input channel index map for the configured ordering
    pub fn input_index_map(&self) -> &'static [usize] {
        self.ordering.index_map(self.dimensionality)
    }
}
