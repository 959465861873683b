use std::collections::HashMap;

use eframe::egui;

use crate::data::network::{Network, NetworkId, ScanCycle};
use crate::graph::wrapper::DetailPopup;
use crate::graph::GraphError;

/// Popup window with the details of a tapped network.
///
/// Keeps a snapshot of the latest scan so a tap can be resolved to full
/// network data; a tap on a network that has since gone out of range is the
/// popup's failure case.
pub struct NetworkDetailPopup {
    roster: HashMap<NetworkId, Network>,
    selected: Option<Network>,
}

impl NetworkDetailPopup {
    pub fn new() -> Self {
        Self {
            roster: HashMap::new(),
            selected: None,
        }
    }

    /// Refreshes the snapshot from the latest scan cycle.
    pub fn update_roster(&mut self, cycle: &ScanCycle) {
        self.roster = cycle
            .networks
            .iter()
            .map(|n| (n.id.clone(), n.clone()))
            .collect();
        // keep an open popup current
        if let Some(selected) = &self.selected {
            if let Some(updated) = self.roster.get(&selected.id) {
                self.selected = Some(updated.clone());
            }
        }
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        let Some(network) = self.selected.clone() else {
            return;
        };
        let mut open = true;
        egui::Window::new(&network.id.ssid)
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                egui::Grid::new("network_detail")
                    .num_columns(2)
                    .spacing([16.0, 4.0])
                    .show(ui, |ui| {
                        ui.label("Channel");
                        ui.label(network.channel_display());
                        ui.end_row();

                        ui.label("Band");
                        ui.label(network.id.band.label());
                        ui.end_row();

                        ui.label("Signal");
                        ui.label(format!("{} dBm", network.signal_dbm));
                        ui.end_row();

                        ui.label("Connected");
                        ui.label(if network.connected { "yes" } else { "no" });
                        ui.end_row();

                        ui.label("Last seen");
                        ui.label(network.last_seen.format("%H:%M:%S UTC").to_string());
                        ui.end_row();
                    });
            });
        if !open {
            self.selected = None;
        }
    }
}

impl Default for NetworkDetailPopup {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailPopup for NetworkDetailPopup {
    fn show(&mut self, network: &NetworkId) -> Result<(), GraphError> {
        match self.roster.get(network) {
            Some(found) => {
                self.selected = Some(found.clone());
                Ok(())
            }
            None => Err(GraphError::Popup(format!("{network} is no longer in range"))),
        }
    }
}
