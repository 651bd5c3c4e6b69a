pub mod bindings;
pub mod colorizers;
pub mod engine;
pub mod escape_time;
pub mod pixel_compute;
pub mod view_summary;

pub use bindings::WasmPlaneEngine;
pub use colorizers::{iterations_to_color, ColorizerKind, Palette};
pub use engine::{EngineState, PlaneEngine};
pub use escape_time::count_iterations;
pub use pixel_compute::{compute_pixel, compute_row, PixelContext};
pub use view_summary::ViewSummary;

// Re-export core types for convenience
pub use mandelplane_core::*;
