use std::collections::HashSet;

use crate::data::network::{Band, NetworkId, ScanCycle};
use crate::graph::builder::GraphViewBuilder;
use crate::graph::chart::LineDataSet;
use crate::graph::legend::GraphLegend;
use crate::graph::wrapper::GraphViewWrapper;
use crate::graph::{MAX_SCAN_COUNT, MAX_Y_DEFAULT};
use crate::state::theme::Theme;

/// Labeled ticks on the time axis; the default viewport frames one less.
const NUM_X_TIME: usize = 21;

/// Signal-over-time graph: one point per network per scan cycle, bounded to
/// the last `MAX_SCAN_COUNT` cycles.
pub struct TimeGraphView {
    wrapper: GraphViewWrapper,
}

impl TimeGraphView {
    pub fn new(theme: Theme, graph_legend: GraphLegend, app_id: &str) -> Self {
        let chart = GraphViewBuilder::new("time-graph", NUM_X_TIME, MAX_Y_DEFAULT, theme)
            .set_horizontal_title("Scan")
            .set_vertical_title("Signal (dBm)")
            .build(true);
        let mut wrapper = GraphViewWrapper::new(chart, graph_legend, theme, app_id);
        wrapper.update_legend(graph_legend);
        // raw cycle indices mean nothing to the user
        wrapper.set_horizontal_labels_visible(false);
        wrapper.set_viewport();
        Self { wrapper }
    }

    pub fn wrapper(&self) -> &GraphViewWrapper {
        &self.wrapper
    }

    pub fn wrapper_mut(&mut self) -> &mut GraphViewWrapper {
        &mut self.wrapper
    }

    /// Feeds one scan cycle into the graph for the given band.
    pub fn update(&mut self, cycle: &ScanCycle, band: Band) {
        let mut current = HashSet::new();
        for network in cycle.networks_in_band(band) {
            let point = [cycle.index as f64, network.signal_dbm as f64];
            if self.wrapper.new_series(&network.id) {
                self.wrapper.add_series(
                    network,
                    LineDataSet::with_entries(vec![point]),
                    network.connected,
                );
            } else {
                self.wrapper
                    .append_to_series(network, point, MAX_SCAN_COUNT, network.connected);
            }
            current.insert(network.id.clone());
        }
        self.wrapper.remove_series(&current);
        self.follow_latest(cycle.index);
    }

    /// Keeps the newest cycles inside the fixed-width viewport.
    fn follow_latest(&mut self, cycle_index: usize) {
        let span = self.wrapper.viewport_cnt_x();
        if cycle_index > span {
            self.wrapper
                .graph_view_mut()
                .move_view_to_x((cycle_index - span) as f64);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::network::Network;
    use chrono::Utc;

    fn network(ssid: &str, dbm: i32) -> Network {
        Network {
            id: NetworkId::new(ssid, 6, Band::Ghz2),
            center_channel: 6,
            signal_dbm: dbm,
            connected: false,
            last_seen: Utc::now(),
        }
    }

    fn cycle(index: usize, networks: Vec<Network>) -> ScanCycle {
        ScanCycle { index, networks }
    }

    #[test]
    fn first_observation_adds_then_appends() {
        let mut view = TimeGraphView::new(Theme::Dark, GraphLegend::Hide, "test-app");
        let net = network("Net1", -60);

        view.update(&cycle(0, vec![net.clone()]), Band::Ghz2);
        view.update(&cycle(1, vec![net.clone()]), Band::Ghz2);

        let chart = view.wrapper().graph_view();
        assert_eq!(chart.data.len(), 1);
        let series = chart.data.iter().next().unwrap();
        assert_eq!(series.entry_count(), 2);
        assert_eq!(series.entries()[1], [1.0, -60.0]);
    }

    #[test]
    fn vanished_network_is_removed() {
        let mut view = TimeGraphView::new(Theme::Dark, GraphLegend::Hide, "test-app");
        view.update(
            &cycle(0, vec![network("Net1", -60), network("Net2", -70)]),
            Band::Ghz2,
        );
        view.update(&cycle(1, vec![network("Net1", -61)]), Band::Ghz2);

        let chart = view.wrapper().graph_view();
        assert_eq!(chart.data.len(), 1);
        assert!(view
            .wrapper()
            .series_exists(&NetworkId::new("Net1", 6, Band::Ghz2)));
    }

    #[test]
    fn other_band_networks_are_ignored() {
        let mut view = TimeGraphView::new(Theme::Dark, GraphLegend::Hide, "test-app");
        let mut other = network("Net5", -50);
        other.id = NetworkId::new("Net5", 44, Band::Ghz5);
        other.center_channel = 44;

        view.update(&cycle(0, vec![network("Net1", -60), other]), Band::Ghz2);
        assert_eq!(view.wrapper().graph_view().data.len(), 1);
    }

    #[test]
    fn viewport_follows_latest_cycles() {
        let mut view = TimeGraphView::new(Theme::Dark, GraphLegend::Hide, "test-app");
        let net = network("Net1", -60);
        for index in 0..=NUM_X_TIME + 4 {
            view.update(&cycle(index, vec![net.clone()]), Band::Ghz2);
        }
        let (x_min, x_max) = view.wrapper().graph_view().x_bounds();
        assert_eq!(x_max, (NUM_X_TIME + 4) as f64);
        assert_eq!(x_max - x_min, (NUM_X_TIME - 1) as f64);
    }
}
