//! FluxForge Ambisonic Definitions
//!
//! Fixed tables the ambisonic mixer needs to combine content of different
//! orders:
//!
//! ## Order Upsampling
//! - Seven reference arrays (cube, icosahedron, dodecahedron, 4/6/8/10 rings)
//! - Decode/re-encode matrices into the third-order 3D mix
//! - Built once, shared read-only across mixing threads
//!
//! ## HF Order Scales
//! - Per-band high-frequency correction between source and device order
//! - Full 3D and horizontal-only tables
//!
//! ## Input Formats
//! - N3D/SN3D/FuMa normalization to N3D
//! - ACN/FuMa channel ordering to ACN
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rf_ambi::{AmbiMixConfig, AmbiScale};
//!
//! AmbiScale::init();
//!
//! let config = AmbiMixConfig::default();
//! let rows = config.upsampler_for(1)?;
//! let hf = config.hf_scales_for(1)?;
//! ```

#![allow(missing_docs)]

pub mod config;
pub mod hoa;

mod error;
mod position;
mod scale;

pub use config::AmbiMixConfig;
pub use error::{AmbiError, AmbiResult};
pub use position::Direction;
pub use scale::{
    AmbiScale, FIRST_ORDER_2D_UP, FIRST_ORDER_UP, FOURTH_ORDER_2D_UP, SECOND_ORDER_2D_UP,
    SECOND_ORDER_UP, THIRD_ORDER_2D_UP, THIRD_ORDER_UP,
};
