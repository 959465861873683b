use std::time::{Duration, Instant};

use eframe::egui;

use crate::data::feed::ScanFeed;
use crate::data::network::Band;
use crate::state::settings::Settings;
use crate::ui::detail_popup::NetworkDetailPopup;
use crate::ui::graph_panel;
use crate::views::channel_graph::ChannelGraphView;
use crate::views::time_graph::TimeGraphView;

/// Application-identifying string the graph-type fingerprint is derived from.
const APP_ID: &str = "dev.signalscope.desktop";

const FEED_SEED: u64 = 0xC0FFEE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GraphTab {
    Time,
    Channel,
}

/// The main SignalScope application.
pub struct SignalScopeApp {
    settings: Settings,
    feed: ScanFeed,
    time_graph: TimeGraphView,
    channel_graph: ChannelGraphView,
    popup: NetworkDetailPopup,
    active_tab: GraphTab,
    last_cycle: Instant,
    cycles_started: bool,
}

impl SignalScopeApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = Settings::default();

        let ctx = &cc.egui_ctx;
        let mut style = (*ctx.style()).clone();
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::proportional(15.0),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::proportional(14.5),
        );
        style.spacing.button_padding = egui::vec2(10.0, 5.0);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        ctx.set_style(style);
        ctx.set_visuals(settings.theme.visuals());

        tracing::info!("starting scan feed at {} ms", settings.scan_interval_ms);

        Self {
            time_graph: TimeGraphView::new(settings.theme, settings.graph_legend, APP_ID),
            channel_graph: ChannelGraphView::new(
                settings.theme,
                settings.graph_legend,
                settings.band,
                APP_ID,
            ),
            settings,
            feed: ScanFeed::new(FEED_SEED),
            popup: NetworkDetailPopup::new(),
            active_tab: GraphTab::Time,
            last_cycle: Instant::now(),
            cycles_started: false,
        }
    }

    /// Advances one scan cycle when the configured interval has elapsed.
    fn scan_if_due(&mut self) {
        let interval = Duration::from_millis(self.settings.scan_interval_ms);
        if self.cycles_started && self.last_cycle.elapsed() < interval {
            return;
        }
        self.cycles_started = true;
        self.last_cycle = Instant::now();

        let cycle = self.feed.next_cycle();
        tracing::debug!(
            "scan cycle {}: {} networks",
            cycle.index,
            cycle.networks.len()
        );
        self.popup.update_roster(&cycle);
        self.time_graph.update(&cycle, self.settings.band);
        self.channel_graph.update(&cycle);
    }

    /// Theme switches rebuild the charts, like the rest of the UI.
    fn apply_theme(&mut self, ctx: &egui::Context) {
        ctx.set_visuals(self.settings.theme.visuals());
        self.time_graph =
            TimeGraphView::new(self.settings.theme, self.settings.graph_legend, APP_ID);
        self.channel_graph = ChannelGraphView::new(
            self.settings.theme,
            self.settings.graph_legend,
            self.settings.band,
            APP_ID,
        );
    }
}

impl eframe::App for SignalScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.scan_if_due();
        ctx.request_repaint_after(Duration::from_millis(
            self.settings.scan_interval_ms.min(250),
        ));

        let mut theme_changed = false;
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("SignalScope");
                ui.separator();

                ui.selectable_value(&mut self.active_tab, GraphTab::Time, "Time");
                ui.selectable_value(&mut self.active_tab, GraphTab::Channel, "Channels");
                ui.separator();

                for band in [Band::Ghz2, Band::Ghz5] {
                    if ui
                        .selectable_label(self.settings.band == band, band.label())
                        .clicked()
                    {
                        self.settings.band = band;
                        self.channel_graph.set_band(band);
                    }
                }
                ui.separator();

                if ui.button(self.settings.graph_legend.label()).clicked() {
                    let next = self.settings.graph_legend.toggle();
                    self.settings.graph_legend = next;
                    self.time_graph.wrapper_mut().update_legend(next);
                    self.channel_graph.wrapper_mut().update_legend(next);
                }
                if ui.button(self.settings.theme.label()).clicked() {
                    self.settings.theme = self.settings.theme.toggle();
                    theme_changed = true;
                }
            });
        });
        if theme_changed {
            self.apply_theme(ctx);
        }

        self.time_graph
            .wrapper_mut()
            .set_visibility(self.active_tab == GraphTab::Time);
        self.channel_graph
            .wrapper_mut()
            .set_visibility(self.active_tab == GraphTab::Channel);

        egui::CentralPanel::default().show(ctx, |ui| {
            let wrapper = match self.active_tab {
                GraphTab::Time => self.time_graph.wrapper_mut(),
                GraphTab::Channel => self.channel_graph.wrapper_mut(),
            };
            if let Some(series) = graph_panel::show(ui, wrapper.graph_view()) {
                wrapper.on_point_selected(series, &mut self.popup);
            }
        });

        self.popup.ui(ctx);
    }
}
