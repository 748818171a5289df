pub mod config;
pub mod error;
pub mod field;
pub mod grid;
pub mod logging;
pub mod map;
pub mod render;
pub mod rng;

pub use config::{MapConfig, MapConfigLoader};
pub use error::MapError;
pub use field::OrientedGaussianField;
pub use grid::{GridPos, MapDims, PayoutGrid};
pub use map::{MapDescriptor, MapGenerator, MapGeneratorBuilder, SpawnPair};
pub use rng::RngManager;
