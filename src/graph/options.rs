use crate::graph::chart::LineDataSet;
use crate::graph::colors::GraphColorPool;
use crate::graph::{THICKNESS_CONNECTED, THICKNESS_REGULAR};

/// Applies per-series styling: thickness, palette colors, background fill.
pub struct SeriesOptions {
    graph_colors: GraphColorPool,
}

impl SeriesOptions {
    pub fn new() -> Self {
        Self {
            graph_colors: GraphColorPool::new(),
        }
    }

    /// Thick line for the connected network, regular for everything else.
    pub fn highlight_connected(&self, series: &mut LineDataSet, connected: bool) {
        series.line_width = if connected {
            THICKNESS_CONNECTED
        } else {
            THICKNESS_REGULAR
        };
    }

    /// Assigns the next free palette pair to the series.
    pub fn set_series_color(&mut self, series: &mut LineDataSet) {
        let graph_color = self.graph_colors.graph_color();
        series.color = graph_color.primary;
        series.fill_color = graph_color.background;
    }

    /// Returns the series' color to the pool for reuse.
    pub fn release_series_color(&mut self, series: &LineDataSet) {
        self.graph_colors.add_color(series.color);
    }

    pub fn draw_background(&self, series: &mut LineDataSet, draw_background: bool) {
        series.draw_filled = draw_background;
    }
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::colors::GRAPH_COLORS;

    #[test]
    fn connected_thickness_exceeds_regular() {
        assert!(THICKNESS_CONNECTED > THICKNESS_REGULAR);
        assert!(THICKNESS_REGULAR > 0.0);
    }

    #[test]
    fn highlight_connected_sets_thickness() {
        let options = SeriesOptions::new();
        let mut series = LineDataSet::new();

        options.highlight_connected(&mut series, true);
        assert_eq!(series.line_width, THICKNESS_CONNECTED);

        options.highlight_connected(&mut series, false);
        assert_eq!(series.line_width, THICKNESS_REGULAR);
    }

    #[test]
    fn set_series_color_uses_palette_pair() {
        let mut options = SeriesOptions::new();
        let mut series = LineDataSet::new();
        options.set_series_color(&mut series);
        assert_eq!(series.color, GRAPH_COLORS[0].primary);
        assert_eq!(series.fill_color, GRAPH_COLORS[0].background);
    }

    #[test]
    fn released_color_comes_back_on_next_allocation() {
        let mut options = SeriesOptions::new();
        let mut first = LineDataSet::new();
        let mut second = LineDataSet::new();
        options.set_series_color(&mut first);
        options.set_series_color(&mut second);

        options.release_series_color(&first);
        let mut third = LineDataSet::new();
        options.set_series_color(&mut third);
        assert_eq!(third.color, first.color);
    }

    #[test]
    fn draw_background_toggles_fill() {
        let options = SeriesOptions::new();
        let mut series = LineDataSet::new();
        options.draw_background(&mut series, true);
        assert!(series.draw_filled);
        options.draw_background(&mut series, false);
        assert!(!series.draw_filled);
    }
}
