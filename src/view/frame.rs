//! Per-tick drawing data handed to the renderer
//!
//! Everything here is in screen space (top-left origin, `y` down). The
//! renderer draws trails first, then body discs, then labels, then the timer.

use crate::simulation::states::{Rgb, System};
use crate::view::transform::{ViewState, ViewTransform};

pub const BACKGROUND: Rgb = Rgb(0, 0, 0);
pub const TRAIL_COLOR: Rgb = Rgb(50, 50, 50);
pub const LABEL_COLOR: Rgb = Rgb(255, 255, 255);

/// Vertical gap between a body's edge and its label center
pub const LABEL_GAP: f64 = 12.0;

/// Label text size for the current zoom
pub fn label_font_size(zoomed: bool) -> f32 {
    if zoomed { 15.0 } else { 10.0 }
}

/// `"Time: MM:SS"`, minutes may run past two digits
pub fn timer_readout(elapsed: i64) -> String {
    let total = elapsed.max(0);
    format!("Time: {:02}:{:02}", total / 60, total % 60)
}

/// Sound the runtime should load and play once
#[derive(Debug, Clone, PartialEq)]
pub struct AudioCue {
    pub asset: String,
    pub volume: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyFrame {
    pub position: (f64, f64),
    pub radius: f64,
    pub color: Rgb,
    pub trail: Vec<(i32, i32)>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameDescriptor {
    pub width: u32,
    pub height: u32,
    pub bodies: Vec<BodyFrame>,
    pub label_font_size: f32,
    pub timer: String,
    pub audio: Option<AudioCue>,
    pub running: bool,
}

impl FrameDescriptor {
    pub fn build(
        sys: &System,
        view: &ViewTransform,
        state: &ViewState,
        elapsed: i64,
        audio: Option<AudioCue>,
        running: bool,
    ) -> Self {
        let bodies = sys
            .bodies
            .iter()
            .map(|b| BodyFrame {
                position: view.project(&b.x, state.zoomed),
                radius: b.radius,
                color: b.color,
                trail: b.trail.polyline(),
                label: state.labeled.then(|| b.name.clone()),
            })
            .collect();

        Self {
            width: view.width,
            height: view.height,
            bodies,
            label_font_size: label_font_size(state.zoomed),
            timer: timer_readout(elapsed),
            audio,
            running,
        }
    }
}
