use egui_plot::Corner;
use serde::{Deserialize, Serialize};

use crate::graph::chart::LegendConfig;

/// Where the chart legend is shown, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphLegend {
    Left,
    Right,
    Hide,
}

impl GraphLegend {
    /// Applies this placement to a chart's legend configuration.
    pub fn display(&self, legend: &mut LegendConfig) {
        match self {
            GraphLegend::Left => {
                legend.enabled = true;
                legend.position = Corner::LeftTop;
            }
            GraphLegend::Right => {
                legend.enabled = true;
                legend.position = Corner::RightTop;
            }
            GraphLegend::Hide => legend.enabled = false,
        }
    }

    /// Next placement in the cycle the legend button steps through.
    pub fn toggle(&self) -> Self {
        match self {
            GraphLegend::Left => GraphLegend::Right,
            GraphLegend::Right => GraphLegend::Hide,
            GraphLegend::Hide => GraphLegend::Left,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GraphLegend::Left => "Legend: left",
            GraphLegend::Right => "Legend: right",
            GraphLegend::Hide => "Legend: hidden",
        }
    }
}

impl Default for GraphLegend {
    fn default() -> Self {
        GraphLegend::Left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_and_right_enable_the_legend() {
        let mut config = LegendConfig::default();

        GraphLegend::Left.display(&mut config);
        assert!(config.enabled);
        assert_eq!(config.position, Corner::LeftTop);

        GraphLegend::Right.display(&mut config);
        assert!(config.enabled);
        assert_eq!(config.position, Corner::RightTop);
    }

    #[test]
    fn hide_disables_without_touching_position() {
        let mut config = LegendConfig::default();
        GraphLegend::Right.display(&mut config);
        GraphLegend::Hide.display(&mut config);
        assert!(!config.enabled);
        assert_eq!(config.position, Corner::RightTop);
    }

    #[test]
    fn toggle_cycles_all_placements() {
        let start = GraphLegend::Left;
        assert_eq!(start.toggle().toggle().toggle(), start);
    }
}
