use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::network::{Band, Network, NetworkId, ScanCycle};
use crate::graph::MIN_Y;

/// Strongest signal the feed will produce (dBm).
const CEILING_DBM: i32 = -25;
/// Weakest signal before a network is considered out of range.
const FLOOR_DBM: i32 = MIN_Y + 10;
/// Per-cycle chance that a network flips between visible and gone.
const PRESENCE_FLIP: f64 = 0.04;

struct Roster {
    id: NetworkId,
    center_channel: u32,
    connected: bool,
    signal_dbm: i32,
    present: bool,
}

/// Synthetic stand-in for a platform scanner: a fixed roster of access
/// points whose signal levels random-walk between cycles and which
/// occasionally drop out of range. Deterministic for a given seed.
pub struct ScanFeed {
    rng: StdRng,
    roster: Vec<Roster>,
    cycle: usize,
}

impl ScanFeed {
    pub fn new(seed: u64) -> Self {
        let seeds: [(&str, u32, u32, Band, i32, bool); 7] = [
            ("HomeBase", 6, 6, Band::Ghz2, -42, true),
            ("HomeBase-5G", 44, 46, Band::Ghz5, -48, false),
            ("CoffeeShack", 1, 1, Band::Ghz2, -68, false),
            ("Apt-4B", 11, 11, Band::Ghz2, -74, false),
            ("Office-Guest", 36, 36, Band::Ghz5, -60, false),
            ("PrinterDirect", 6, 6, Band::Ghz2, -82, false),
            ("Backhaul", 149, 151, Band::Ghz5, -55, false),
        ];
        let roster = seeds
            .into_iter()
            .map(|(ssid, channel, center, band, dbm, connected)| Roster {
                id: NetworkId::new(ssid, channel, band),
                center_channel: center,
                connected,
                signal_dbm: dbm,
                present: true,
            })
            .collect();
        Self {
            rng: StdRng::seed_from_u64(seed),
            roster,
            cycle: 0,
        }
    }

    /// Produces the next scan cycle.
    pub fn next_cycle(&mut self) -> ScanCycle {
        let index = self.cycle;
        self.cycle += 1;

        let mut networks = Vec::new();
        for entry in &mut self.roster {
            // the connected network never disappears
            if !entry.connected && self.rng.gen_bool(PRESENCE_FLIP) {
                entry.present = !entry.present;
            }
            if !entry.present {
                continue;
            }
            entry.signal_dbm =
                (entry.signal_dbm + self.rng.gen_range(-3..=3)).clamp(FLOOR_DBM, CEILING_DBM);
            networks.push(Network {
                id: entry.id.clone(),
                center_channel: entry.center_channel,
                signal_dbm: entry.signal_dbm,
                connected: entry.connected,
                last_seen: Utc::now(),
            });
        }
        ScanCycle { index, networks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_are_numbered_monotonically() {
        let mut feed = ScanFeed::new(7);
        assert_eq!(feed.next_cycle().index, 0);
        assert_eq!(feed.next_cycle().index, 1);
    }

    #[test]
    fn signals_stay_in_display_range() {
        let mut feed = ScanFeed::new(7);
        for _ in 0..200 {
            for network in feed.next_cycle().networks {
                assert!(network.signal_dbm >= FLOOR_DBM);
                assert!(network.signal_dbm <= CEILING_DBM);
            }
        }
    }

    #[test]
    fn connected_network_is_always_present() {
        let mut feed = ScanFeed::new(7);
        for _ in 0..200 {
            let cycle = feed.next_cycle();
            assert!(cycle.networks.iter().any(|n| n.connected));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = ScanFeed::new(42);
        let mut b = ScanFeed::new(42);
        for _ in 0..20 {
            let (ca, cb) = (a.next_cycle(), b.next_cycle());
            let sa: Vec<_> = ca.networks.iter().map(|n| (n.id.clone(), n.signal_dbm)).collect();
            let sb: Vec<_> = cb.networks.iter().map(|n| (n.id.clone(), n.signal_dbm)).collect();
            assert_eq!(sa, sb);
        }
    }
}
