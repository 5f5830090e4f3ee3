//! Discrete input commands delivered by the runtime

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Window close or escape
    Quit,
    /// Switch between wide and zoomed scale; clears trails
    ToggleZoom,
    /// Show or hide body names
    ToggleLabels,
    /// Move elapsed time forward one scrub step; clears trails
    ScrubForward,
    /// Move elapsed time back one scrub step; clears trails
    ScrubBackward,
}
