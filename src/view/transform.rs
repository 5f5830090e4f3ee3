//! Physical → screen coordinate mapping
//!
//! Screen space follows the usual raster convention: origin at the top-left
//! corner of the viewport, `y` growing downward. The physical origin lands at
//! the viewport center.

use crate::error::{SimError, SimResult};
use crate::simulation::states::NVec2;

/// Process-wide display toggles, owned by the scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub zoomed: bool,
    pub labeled: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoomed: false,
            labeled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    pub width: u32,
    pub height: u32,
    pub scale: f64, // wide view, screen px per meter
    pub zoom_scale: f64, // zoomed view
}

impl ViewTransform {
    pub fn new(width: u32, height: u32, scale: f64, zoom_scale: f64) -> SimResult<Self> {
        if width == 0 || height == 0 {
            return Err(SimError::InvalidView(format!("viewport {width}x{height}")));
        }
        if !(scale > 0.0) || !(zoom_scale > 0.0) {
            return Err(SimError::InvalidView(format!("scales {scale} / {zoom_scale}")));
        }
        Ok(Self {
            width,
            height,
            scale,
            zoom_scale,
        })
    }

    pub fn scale_for(&self, zoomed: bool) -> f64 {
        if zoomed {
            self.zoom_scale
        } else {
            self.scale
        }
    }

    /// Half the viewport, halved as integers
    pub fn center(&self) -> (f64, f64) {
        ((self.width / 2) as f64, (self.height / 2) as f64)
    }

    /// Screen position of a body center
    pub fn project(&self, pos: &NVec2, zoomed: bool) -> (f64, f64) {
        let s = self.scale_for(zoomed);
        let (cx, cy) = self.center();
        (pos.x * s + cx, pos.y * s + cy)
    }

    /// Screen position truncated toward zero, as stored in trails
    pub fn trail_point(&self, pos: &NVec2, zoomed: bool) -> (i32, i32) {
        let (sx, sy) = self.project(pos, zoomed);
        (sx as i32, sy as i32)
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            scale: 0.4e-9,
            zoom_scale: 1e-9,
        }
    }
}
