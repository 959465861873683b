use std::sync::Arc;

use egui::Color32;
use egui_plot::Corner;

use crate::graph::{MIN_Y, TEXT_SIZE, THICKNESS_REGULAR};

static NEXT_SERIES_ID: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

fn next_series_id() -> SeriesId {
    SeriesId(NEXT_SERIES_ID.fetch_add(1, std::sync::atomic::Ordering::Relaxed))
}

/// Stable handle for one dataset inside a chart. The series cache stores these
/// instead of references so the chart keeps exclusive ownership of the points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesId(pub u64);

/// One (x, y) sample on a chart.
pub type GraphDataPoint = [f64; 2];

/// Formatter for axis tick labels.
pub type AxisValueFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// One network's line on the chart: label, styling, and the ordered points.
pub struct LineDataSet {
    id: SeriesId,
    pub label: String,
    pub color: Color32,
    pub fill_color: Color32,
    pub draw_filled: bool,
    pub line_width: f32,
    entries: Vec<GraphDataPoint>,
}

impl LineDataSet {
    pub fn new() -> Self {
        Self::with_entries(Vec::new())
    }

    pub fn with_entries(entries: Vec<GraphDataPoint>) -> Self {
        Self {
            id: next_series_id(),
            label: String::new(),
            color: Color32::GRAY,
            fill_color: Color32::TRANSPARENT,
            draw_filled: false,
            line_width: THICKNESS_REGULAR,
            entries,
        }
    }

    pub fn id(&self) -> SeriesId {
        self.id
    }

    pub fn add_entry(&mut self, entry: GraphDataPoint) {
        self.entries.push(entry);
    }

    /// Drops the oldest entry. No-op on an empty set.
    pub fn remove_first(&mut self) {
        if !self.entries.is_empty() {
            self.entries.remove(0);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[GraphDataPoint] {
        &self.entries
    }
}

impl Default for LineDataSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered collection of datasets registered with a chart.
#[derive(Default)]
pub struct LineData {
    data_sets: Vec<LineDataSet>,
}

impl LineData {
    pub fn add_data_set(&mut self, data_set: LineDataSet) -> SeriesId {
        let id = data_set.id();
        self.data_sets.push(data_set);
        id
    }

    pub fn remove_data_set(&mut self, id: SeriesId) -> Option<LineDataSet> {
        let pos = self.data_sets.iter().position(|ds| ds.id() == id)?;
        Some(self.data_sets.remove(pos))
    }

    pub fn data_set(&self, id: SeriesId) -> Option<&LineDataSet> {
        self.data_sets.iter().find(|ds| ds.id() == id)
    }

    pub fn data_set_mut(&mut self, id: SeriesId) -> Option<&mut LineDataSet> {
        self.data_sets.iter_mut().find(|ds| ds.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineDataSet> {
        self.data_sets.iter()
    }

    pub fn len(&self) -> usize {
        self.data_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_sets.is_empty()
    }
}

/// Axis configuration applied by the render pass.
#[derive(Clone)]
pub struct Axis {
    pub minimum: f64,
    pub maximum: f64,
    pub label_count: usize,
    pub title: String,
    pub draw_labels: bool,
    pub formatter: Option<AxisValueFormatter>,
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: 1.0,
            label_count: 2,
            title: String::new(),
            draw_labels: true,
            formatter: None,
        }
    }
}

/// Legend placement and text styling.
#[derive(Clone)]
pub struct LegendConfig {
    pub enabled: bool,
    pub position: Corner,
    pub text_size: f32,
    pub text_color: Color32,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            position: Corner::LeftTop,
            text_size: TEXT_SIZE,
            text_color: Color32::GRAY,
        }
    }
}

/// Retained chart model consumed by `ui::graph_panel` each frame.
///
/// Mutations never render anything themselves; they bump the redraw
/// generation, which stands in for the widget invalidate call of a retained
/// charting toolkit. Batch operations are expected to bump it exactly once.
pub struct LineChart {
    plot_id: String,
    pub data: LineData,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: LegendConfig,
    pub scalable: bool,
    visible: bool,
    visible_x_range: Option<f64>,
    x_offset: f64,
    redraw_generation: u64,
}

impl LineChart {
    pub fn new(plot_id: impl Into<String>) -> Self {
        Self {
            plot_id: plot_id.into(),
            data: LineData::default(),
            x_axis: Axis::default(),
            y_axis: Axis {
                minimum: MIN_Y as f64,
                ..Axis::default()
            },
            legend: LegendConfig::default(),
            scalable: false,
            visible: true,
            visible_x_range: None,
            x_offset: 0.0,
            redraw_generation: 0,
        }
    }

    pub fn plot_id(&self) -> &str {
        &self.plot_id
    }

    /// Requests a repaint of the chart surface.
    pub fn invalidate(&mut self) {
        self.redraw_generation += 1;
    }

    pub fn redraw_generation(&self) -> u64 {
        self.redraw_generation
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Caps the visible x span; the render pass frames `[offset, offset + range]`.
    pub fn set_visible_x_range_maximum(&mut self, range: f64) {
        self.visible_x_range = Some(range);
    }

    pub fn move_view_to_x(&mut self, offset: f64) {
        self.x_offset = offset;
    }

    /// Horizontal window to frame: the capped viewport when one is set,
    /// otherwise the full x-axis bounds.
    pub fn x_bounds(&self) -> (f64, f64) {
        match self.visible_x_range {
            Some(range) => (self.x_offset, self.x_offset + range),
            None => (self.x_axis.minimum, self.x_axis.maximum),
        }
    }

    pub fn y_bounds(&self) -> (f64, f64) {
        (self.y_axis.minimum, self.y_axis.maximum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_set_ids_are_unique() {
        let a = LineDataSet::new();
        let b = LineDataSet::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn remove_first_evicts_oldest() {
        let mut set = LineDataSet::with_entries(vec![[0.0, -50.0], [1.0, -60.0]]);
        set.remove_first();
        assert_eq!(set.entries(), &[[1.0, -60.0]]);
    }

    #[test]
    fn remove_first_on_empty_is_noop() {
        let mut set = LineDataSet::new();
        set.remove_first();
        assert_eq!(set.entry_count(), 0);
    }

    #[test]
    fn line_data_removes_by_id() {
        let mut data = LineData::default();
        let keep = data.add_data_set(LineDataSet::new());
        let gone = data.add_data_set(LineDataSet::new());
        assert!(data.remove_data_set(gone).is_some());
        assert!(data.remove_data_set(gone).is_none());
        assert!(data.data_set(keep).is_some());
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn invalidate_bumps_generation() {
        let mut chart = LineChart::new("test");
        let before = chart.redraw_generation();
        chart.invalidate();
        assert_eq!(chart.redraw_generation(), before + 1);
    }

    #[test]
    fn viewport_overrides_axis_bounds() {
        let mut chart = LineChart::new("test");
        chart.x_axis.minimum = 0.0;
        chart.x_axis.maximum = 100.0;
        assert_eq!(chart.x_bounds(), (0.0, 100.0));

        chart.set_visible_x_range_maximum(20.0);
        chart.move_view_to_x(5.0);
        assert_eq!(chart.x_bounds(), (5.0, 25.0));
    }
}
