//! Simulation utilities around the engine.
//!
//! Provides the RAM image text format used to load and save programs, and the
//! frame driver that paces `update` calls the way a front panel does.

/// Frame pacing, output collection, and run-to-halt.
pub mod driver;

/// RAM image import and export.
pub mod image;

pub use driver::{FrameDriver, FrameReport, RunOutcome, RunReport, Speed};
pub use image::{ImportStatus, export_ram, import_ram};
