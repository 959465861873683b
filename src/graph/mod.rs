pub mod builder;
pub mod cache;
pub mod chart;
pub mod colors;
pub mod legend;
pub mod options;
pub mod wrapper;

use thiserror::Error;

use crate::data::network::NetworkId;
use crate::graph::chart::SeriesId;

/// Lowest signal level shown on any graph (dBm).
pub const MIN_Y: i32 = -100;
/// Highest signal level shown on any graph (dBm).
pub const MAX_Y: i32 = 0;
pub const MIN_Y_HALF: i32 = MIN_Y / 2;
/// Y-axis ceiling used when a requested maximum is out of range.
pub const MAX_Y_DEFAULT: i32 = -20;

/// Line width for the series of the currently connected network.
pub const THICKNESS_CONNECTED: f32 = 6.0;
/// Line width for every other series.
pub const THICKNESS_REGULAR: f32 = 2.0;

/// Legend text size in points.
pub const TEXT_SIZE: f32 = 12.0;

/// Maximum number of scan cycles kept in a time-graph series.
pub const MAX_SCAN_COUNT: usize = 400;

pub const TYPE1: i32 = 1;
pub const TYPE2: i32 = 2;
pub const TYPE3: i32 = 3;
pub const TYPE4: i32 = 4;

pub const SIZE_MIN: i32 = 1024;
pub const SIZE_MAX: i32 = 4096;

/// Failures inside the graph subsystem. All of these are recovered at the
/// boundary of the operation that can tolerate a default; none reach the user.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("no series registered for {0}")]
    IdentityNotFound(NetworkId),

    #[error("series {0:?} is not in the cache")]
    SeriesNotFound(SeriesId),

    #[error("graph type fingerprint unavailable")]
    Fingerprint,

    #[error("detail popup failed: {0}")]
    Popup(String),
}
