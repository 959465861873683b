use serde::{Deserialize, Serialize};

use crate::data::network::Band;
use crate::graph::legend::GraphLegend;
use crate::state::theme::Theme;

/// User-tunable application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub theme: Theme,
    pub graph_legend: GraphLegend,
    pub band: Band,
    /// Milliseconds between scan cycles.
    pub scan_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            graph_legend: GraphLegend::default(),
            band: Band::default(),
            scan_interval_ms: 1000,
        }
    }
}
