use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use crate::data::network::{Network, NetworkId};
use crate::graph::cache::SeriesCache;
use crate::graph::chart::{GraphDataPoint, LineChart, LineDataSet, SeriesId};
use crate::graph::legend::GraphLegend;
use crate::graph::options::SeriesOptions;
use crate::graph::{GraphError, SIZE_MAX, SIZE_MIN, TEXT_SIZE, TYPE1, TYPE2, TYPE3, TYPE4};
use crate::state::theme::Theme;

/// Collaborator that renders the detail view for a tapped series. Implemented
/// by the UI layer; the wrapper only ever calls it fire-and-forget.
pub trait DetailPopup {
    fn show(&mut self, network: &NetworkId) -> Result<(), GraphError>;
}

/// Owns one chart and the bookkeeping around its series: identity cache,
/// color pool, styling, viewport, legend, and tap routing.
pub struct GraphViewWrapper {
    graph_view: LineChart,
    graph_legend: GraphLegend,
    theme: Theme,
    app_id: String,
    series_cache: SeriesCache,
    series_options: SeriesOptions,
}

impl GraphViewWrapper {
    pub fn new(
        graph_view: LineChart,
        graph_legend: GraphLegend,
        theme: Theme,
        app_id: impl Into<String>,
    ) -> Self {
        Self {
            graph_view,
            graph_legend,
            theme,
            app_id: app_id.into(),
            series_cache: SeriesCache::new(),
            series_options: SeriesOptions::new(),
        }
    }

    pub fn graph_view(&self) -> &LineChart {
        &self.graph_view
    }

    pub fn graph_view_mut(&mut self) -> &mut LineChart {
        &mut self.graph_view
    }

    pub fn graph_legend(&self) -> GraphLegend {
        self.graph_legend
    }

    /// Drops every series whose network is absent from `current`, releasing
    /// their colors. One redraw for the whole batch.
    pub fn remove_series(&mut self, current: &HashSet<NetworkId>) {
        let stale = self.difference_series(current);
        if stale.is_empty() {
            return;
        }
        tracing::debug!("removing {} stale series", stale.len());
        for series_id in self.series_cache.remove(&stale) {
            if let Some(series) = self.graph_view.data.remove_data_set(series_id) {
                self.series_options.release_series_color(&series);
            }
        }
        self.graph_view.invalidate();
    }

    pub fn difference_series(&self, current: &HashSet<NetworkId>) -> Vec<NetworkId> {
        self.series_cache.difference(current)
    }

    /// Registers a new series for `network`. Returns false without touching
    /// anything if the network already has one.
    pub fn add_series(
        &mut self,
        network: &Network,
        mut series: LineDataSet,
        draw_background: bool,
    ) -> bool {
        if self.series_exists(&network.id) {
            return false;
        }
        series.label = series_label(network);
        self.series_options
            .highlight_connected(&mut series, network.connected);
        self.series_options.set_series_color(&mut series);
        self.series_options.draw_background(&mut series, draw_background);
        let series_id = self.graph_view.data.add_data_set(series);
        self.series_cache.put(network.id.clone(), series_id);
        self.graph_view.invalidate();
        true
    }

    /// Replaces the series' points wholesale with `data`.
    pub fn update_series(
        &mut self,
        network: &Network,
        data: &[GraphDataPoint],
        draw_background: bool,
    ) -> bool {
        let Ok(series_id) = self.series_cache.get(&network.id) else {
            return false;
        };
        let Some(series) = self.graph_view.data.data_set_mut(series_id) else {
            return false;
        };
        series.clear();
        for point in data {
            series.add_entry(*point);
        }
        series.label = series_label(network);
        self.series_options
            .highlight_connected(series, network.connected);
        self.series_options.draw_background(series, draw_background);
        self.graph_view.invalidate();
        true
    }

    /// Appends one point, keeping a sliding window of at most `count + 1`
    /// points by evicting the oldest.
    pub fn append_to_series(
        &mut self,
        network: &Network,
        data: GraphDataPoint,
        count: usize,
        draw_background: bool,
    ) -> bool {
        let Ok(series_id) = self.series_cache.get(&network.id) else {
            return false;
        };
        let Some(series) = self.graph_view.data.data_set_mut(series_id) else {
            return false;
        };
        series.add_entry(data);
        if series.entry_count() > count + 1 {
            series.remove_first();
        }
        self.series_options
            .highlight_connected(series, network.connected);
        self.series_options.draw_background(series, draw_background);
        self.graph_view.invalidate();
        true
    }

    pub fn new_series(&self, identity: &NetworkId) -> bool {
        !self.series_exists(identity)
    }

    pub fn series_exists(&self, identity: &NetworkId) -> bool {
        self.series_cache.contains(identity)
    }

    /// Frames exactly the labeled tick intervals and scrolls back to the
    /// start.
    pub fn set_viewport(&mut self) {
        self.graph_view
            .set_visible_x_range_maximum(self.viewport_cnt_x() as f64);
        self.graph_view.move_view_to_x(0.0);
    }

    /// Explicit x-axis bounds.
    pub fn set_viewport_bounds(&mut self, min_x: f64, max_x: f64) {
        self.graph_view.x_axis.minimum = min_x;
        self.graph_view.x_axis.maximum = max_x;
    }

    pub fn viewport_cnt_x(&self) -> usize {
        self.graph_view.x_axis.label_count.saturating_sub(1)
    }

    pub fn update_legend(&mut self, graph_legend: GraphLegend) {
        self.graph_legend = graph_legend;
        graph_legend.display(&mut self.graph_view.legend);
        self.graph_view.legend.text_size = TEXT_SIZE;
        self.graph_view.legend.text_color = self.theme.graph_text_color();
        self.graph_view.invalidate();
    }

    /// Stable display variant derived from the application id. Falls back to
    /// the first variant when no fingerprint can be computed.
    pub fn calculate_graph_type(&self) -> i32 {
        graph_type_fingerprint(&self.app_id).unwrap_or(TYPE1)
    }

    pub fn size(&self, value: i32) -> i32 {
        if value == TYPE1 || value == TYPE2 || value == TYPE3 {
            SIZE_MAX
        } else {
            SIZE_MIN
        }
    }

    pub fn set_horizontal_labels_visible(&mut self, visible: bool) {
        self.graph_view.x_axis.draw_labels = visible;
    }

    pub fn set_visibility(&mut self, visible: bool) {
        self.graph_view.set_visible(visible);
    }

    /// Routes a tapped series to the detail popup. Best effort: a missing
    /// cache entry or a popup failure is logged and dropped, never surfaced.
    pub fn on_point_selected(&mut self, series: SeriesId, popup: &mut dyn DetailPopup) {
        match self.series_cache.find(series) {
            Ok(identity) => {
                if let Err(err) = popup.show(&identity) {
                    tracing::debug!("detail popup failed for {identity}: {err}");
                }
            }
            Err(err) => tracing::debug!("ignoring tap: {err}"),
        }
    }
}

fn series_label(network: &Network) -> String {
    format!("{} {}", network.id.ssid, network.channel_display())
}

fn graph_type_fingerprint(app_id: &str) -> Result<i32, GraphError> {
    if app_id.is_empty() {
        return Err(GraphError::Fingerprint);
    }
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    app_id.hash(&mut hasher);
    Ok(match hasher.finish() % 4 {
        0 => TYPE1,
        1 => TYPE2,
        2 => TYPE3,
        _ => TYPE4,
    })
}
