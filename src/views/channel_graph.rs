use std::collections::HashSet;
use std::sync::Arc;

use crate::data::network::{Band, Network, ScanCycle};
use crate::graph::builder::GraphViewBuilder;
use crate::graph::chart::{GraphDataPoint, LineDataSet};
use crate::graph::legend::GraphLegend;
use crate::graph::wrapper::GraphViewWrapper;
use crate::graph::{MAX_Y_DEFAULT, MIN_Y, SIZE_MAX};
use crate::state::theme::Theme;

const NUM_X_CHANNEL: usize = 15;

/// Signal-per-channel graph: every network drawn as an arch centered on its
/// channel, rebuilt wholesale each scan cycle.
pub struct ChannelGraphView {
    wrapper: GraphViewWrapper,
    band: Band,
}

impl ChannelGraphView {
    pub fn new(theme: Theme, graph_legend: GraphLegend, band: Band, app_id: &str) -> Self {
        let chart = GraphViewBuilder::new("channel-graph", NUM_X_CHANNEL, MAX_Y_DEFAULT, theme)
            .set_horizontal_title("Channel")
            .set_vertical_title("Signal (dBm)")
            .set_label_formatter(Arc::new(|value| {
                if value >= 1.0 && value.fract() == 0.0 {
                    format!("{value:.0}")
                } else {
                    String::new()
                }
            }))
            .build(false);
        let mut wrapper = GraphViewWrapper::new(chart, graph_legend, theme, app_id);
        wrapper.update_legend(graph_legend);
        let mut view = Self { wrapper, band };
        view.frame_band();
        view
    }

    pub fn wrapper(&self) -> &GraphViewWrapper {
        &self.wrapper
    }

    pub fn wrapper_mut(&mut self) -> &mut GraphViewWrapper {
        &mut self.wrapper
    }

    pub fn set_band(&mut self, band: Band) {
        self.band = band;
        self.frame_band();
    }

    fn frame_band(&mut self) {
        let (first, last) = self.band.channel_range();
        self.wrapper
            .set_viewport_bounds(first as f64 - 1.0, last as f64 + 1.0);
    }

    /// Rebuilds every network's arch from the latest scan cycle.
    pub fn update(&mut self, cycle: &ScanCycle) {
        let half_width = self.arch_half_width();
        let mut current = HashSet::new();
        for network in cycle.networks_in_band(self.band) {
            if !self.band.contains_channel(network.id.channel) {
                continue;
            }
            let points = arch_points(network, half_width);
            if self.wrapper.new_series(&network.id) {
                self.wrapper.add_series(
                    network,
                    LineDataSet::with_entries(points),
                    network.connected,
                );
            } else {
                self.wrapper
                    .update_series(network, &points, network.connected);
            }
            current.insert(network.id.clone());
        }
        self.wrapper.remove_series(&current);
    }

    fn arch_half_width(&self) -> f64 {
        let graph_type = self.wrapper.calculate_graph_type();
        if self.wrapper.size(graph_type) == SIZE_MAX {
            2.0
        } else {
            1.0
        }
    }
}

/// Trapezoid outline for one network: shoulders on the graph floor, flat top
/// at the signal level.
fn arch_points(network: &Network, half_width: f64) -> Vec<GraphDataPoint> {
    let channel = network.id.channel as f64;
    let level = network.signal_dbm as f64;
    let floor = MIN_Y as f64;
    vec![
        [channel - half_width, floor],
        [channel - half_width / 2.0, level],
        [channel + half_width / 2.0, level],
        [channel + half_width, floor],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::network::NetworkId;
    use chrono::Utc;

    fn network(ssid: &str, channel: u32, dbm: i32) -> Network {
        Network {
            id: NetworkId::new(ssid, channel, Band::Ghz2),
            center_channel: channel,
            signal_dbm: dbm,
            connected: false,
            last_seen: Utc::now(),
        }
    }

    #[test]
    fn arch_is_symmetric_around_the_channel() {
        let points = arch_points(&network("Net1", 6, -55), 2.0);
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], [4.0, MIN_Y as f64]);
        assert_eq!(points[1], [5.0, -55.0]);
        assert_eq!(points[2], [7.0, -55.0]);
        assert_eq!(points[3], [8.0, MIN_Y as f64]);
    }

    #[test]
    fn update_replaces_arches_each_cycle() {
        let mut view =
            ChannelGraphView::new(Theme::Dark, GraphLegend::Hide, Band::Ghz2, "test-app");
        let mut cycle = ScanCycle {
            index: 0,
            networks: vec![network("Net1", 6, -70)],
        };
        view.update(&cycle);

        cycle.index = 1;
        cycle.networks[0].signal_dbm = -60;
        view.update(&cycle);

        let chart = view.wrapper().graph_view();
        assert_eq!(chart.data.len(), 1);
        let series = chart.data.iter().next().unwrap();
        assert_eq!(series.entry_count(), 4);
        assert_eq!(series.entries()[1][1], -60.0);
    }

    #[test]
    fn band_change_reframes_the_viewport() {
        let mut view =
            ChannelGraphView::new(Theme::Dark, GraphLegend::Hide, Band::Ghz2, "test-app");
        assert_eq!(view.wrapper().graph_view().x_bounds(), (0.0, 15.0));

        view.set_band(Band::Ghz5);
        assert_eq!(view.wrapper().graph_view().x_bounds(), (35.0, 166.0));
    }

    #[test]
    fn stale_arches_are_removed() {
        let mut view =
            ChannelGraphView::new(Theme::Dark, GraphLegend::Hide, Band::Ghz2, "test-app");
        view.update(&ScanCycle {
            index: 0,
            networks: vec![network("Net1", 6, -70), network("Net2", 11, -75)],
        });
        view.update(&ScanCycle {
            index: 1,
            networks: vec![network("Net2", 11, -74)],
        });
        assert_eq!(view.wrapper().graph_view().data.len(), 1);
    }
}
