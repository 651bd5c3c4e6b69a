use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of the current view for on-screen display.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewSummary {
    pub center: (f64, f64),
    pub zoom: i32,
    /// Last cursor position reported by the controller, in plane coordinates.
    pub cursor: (f64, f64),
    #[serde(default)]
    pub precision_exhausted: bool,
}

impl fmt::Display for ViewSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Center: ({}, {}) | Zoom: {} | Mouse: ({}, {})",
            self.center.0, self.center.1, self.zoom, self.cursor.0, self.cursor.1
        )?;
        if self.precision_exhausted {
            write!(f, " | Precision exhausted")?;
        }
        Ok(())
    }
}
