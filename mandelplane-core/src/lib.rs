pub mod config;
pub mod error;
pub mod pixel_buffer;
pub mod plane_window;
pub mod precision;
pub mod transforms;
pub mod viewport;

pub use config::{EngineConfig, DEFAULT_CONFIG};
pub use error::PlaneError;
pub use pixel_buffer::{PixelBuffer, PixelEntry, PixelPosition, Rgb};
pub use plane_window::{size_at_zoom, PlaneWindow};
pub use precision::{is_precision_exhausted, max_supported_zoom, required_mantissa_bits};
pub use transforms::pixel_to_plane;
pub use viewport::Viewport;
