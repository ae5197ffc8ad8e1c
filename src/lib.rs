pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::fonts::DiskFontProvider;
pub use config::MatrixConfig;
pub use core::{date::DateParser, engine::NumerologyEngine};
pub use domain::model::{
    AdditionalNumbers, CalendarDate, CountingMode, DerivedIndicators, Indicator, MatrixProfile,
    RenderedImage, SectorCounts, TripleTable,
};
pub use domain::ports::FontProvider;
pub use render::{LayoutModel, MatrixRenderer};
pub use utils::error::{MatrixError, Result};
