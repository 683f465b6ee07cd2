pub mod config;
pub mod model;
pub mod raster;
pub mod surface;

pub use config::PadConfig;
pub use model::*;
pub use raster::Bitmap;
pub use surface::{Surface, SurfaceSize};
