//! Direction type for the ambisonic coordinate convention

use serde::{Deserialize, Serialize};

/// Unit direction in ambisonic space
///
/// Axes follow the ambisonic convention rather than the listener-space
/// convention used elsewhere in the engine: +X front, +Y left, +Z up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Direction {
    /// X coordinate (front/back, positive = front)
    pub x: f32,
    /// Y coordinate (left/right, positive = left)
    pub y: f32,
    /// Z coordinate (up/down, positive = up)
    pub z: f32,
}

impl Direction {
    /// Create new direction from components
    ///
    /// The components are taken as given; callers building reference tables
    /// pass unit vectors directly.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Straight ahead
    pub const fn front() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Create from spherical coordinates
    ///
    /// # Arguments
    /// * `azimuth` - Horizontal angle in degrees (0 = front, positive = left)
    /// * `elevation` - Vertical angle in degrees (-90 to 90, positive = up)
    pub fn from_spherical(azimuth: f32, elevation: f32) -> Self {
        let az_rad = azimuth.to_radians();
        let el_rad = elevation.to_radians();

        let cos_el = el_rad.cos();

        Self {
            x: az_rad.cos() * cos_el,
            y: az_rad.sin() * cos_el,
            z: el_rad.sin(),
        }
    }

    /// Get magnitude
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Normalize to unit vector
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag < 1e-10 {
            return Self::front();
        }
        Self::new(self.x / mag, self.y / mag, self.z / mag)
    }

    /// True when the direction lies in the horizontal plane
    pub fn is_horizontal(&self) -> bool {
        self.z.abs() < 1e-6
    }
}
