use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Frequency band a network broadcasts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Band {
    Ghz2,
    Ghz5,
}

impl Band {
    pub fn label(&self) -> &'static str {
        match self {
            Band::Ghz2 => "2.4 GHz",
            Band::Ghz5 => "5 GHz",
        }
    }

    /// First and last usable channel of the band.
    pub fn channel_range(&self) -> (u32, u32) {
        match self {
            Band::Ghz2 => (1, 14),
            Band::Ghz5 => (36, 165),
        }
    }

    pub fn contains_channel(&self, channel: u32) -> bool {
        let (first, last) = self.channel_range();
        (first..=last).contains(&channel)
    }
}

impl Default for Band {
    fn default() -> Self {
        Band::Ghz2
    }
}

/// Stable key distinguishing one network's series from another across scan
/// cycles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkId {
    pub ssid: String,
    pub channel: u32,
    pub band: Band,
}

impl NetworkId {
    pub fn new(ssid: impl Into<String>, channel: u32, band: Band) -> Self {
        Self {
            ssid: ssid.into(),
            channel,
            band,
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ch {})", self.ssid, self.channel)
    }
}

/// One access point as seen in a scan cycle.
#[derive(Debug, Clone)]
pub struct Network {
    pub id: NetworkId,
    /// Center channel; differs from the primary channel for bonded widths.
    pub center_channel: u32,
    pub signal_dbm: i32,
    pub connected: bool,
    pub last_seen: DateTime<Utc>,
}

impl Network {
    /// Channel text shown in series labels: the primary channel, with the
    /// center channel in parentheses when they differ.
    pub fn channel_display(&self) -> String {
        if self.id.channel == self.center_channel {
            format!("{}", self.id.channel)
        } else {
            format!("{}({})", self.id.channel, self.center_channel)
        }
    }
}

/// One round of scan results.
#[derive(Debug, Clone, Default)]
pub struct ScanCycle {
    /// Monotonic cycle index; the x coordinate on time graphs.
    pub index: usize,
    pub networks: Vec<Network>,
}

impl ScanCycle {
    pub fn networks_in_band(&self, band: Band) -> impl Iterator<Item = &Network> {
        self.networks.iter().filter(move |n| n.id.band == band)
    }
}
