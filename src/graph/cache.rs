use std::collections::HashSet;

use crate::data::network::NetworkId;
use crate::graph::chart::SeriesId;
use crate::graph::GraphError;

/// Maps each displayed network to its chart series, in insertion order.
///
/// A plain vector keeps `difference` deterministic and is plenty for the
/// handful of networks a scan shows at once.
#[derive(Default)]
pub struct SeriesCache {
    cache: Vec<(NetworkId, SeriesId)>,
}

impl SeriesCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identities held here but absent from `current`: the stale series that
    /// should be removed. Store order.
    pub fn difference(&self, current: &HashSet<NetworkId>) -> Vec<NetworkId> {
        self.cache
            .iter()
            .filter(|(id, _)| !current.contains(id))
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Removes the given identities, returning the series of those that were
    /// present. Unknown identities are skipped.
    pub fn remove(&mut self, identities: &[NetworkId]) -> Vec<SeriesId> {
        identities
            .iter()
            .filter_map(|id| {
                let pos = self.cache.iter().position(|(key, _)| key == id)?;
                Some(self.cache.remove(pos).1)
            })
            .collect()
    }

    /// Reverse lookup from a chart series to the network it belongs to.
    pub fn find(&self, series: SeriesId) -> Result<NetworkId, GraphError> {
        self.cache
            .iter()
            .find(|(_, sid)| *sid == series)
            .map(|(id, _)| id.clone())
            .ok_or(GraphError::SeriesNotFound(series))
    }

    pub fn contains(&self, identity: &NetworkId) -> bool {
        self.cache.iter().any(|(id, _)| id == identity)
    }

    pub fn get(&self, identity: &NetworkId) -> Result<SeriesId, GraphError> {
        self.cache
            .iter()
            .find(|(id, _)| id == identity)
            .map(|(_, sid)| *sid)
            .ok_or_else(|| GraphError::IdentityNotFound(identity.clone()))
    }

    /// Registers a series for an identity, replacing any previous entry.
    pub fn put(&mut self, identity: NetworkId, series: SeriesId) {
        if let Some(entry) = self.cache.iter_mut().find(|(id, _)| *id == identity) {
            entry.1 = series;
        } else {
            self.cache.push((identity, series));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::network::Band;

    fn id(ssid: &str) -> NetworkId {
        NetworkId::new(ssid, 6, Band::Ghz2)
    }

    #[test]
    fn difference_returns_stale_identities_in_store_order() {
        let mut cache = SeriesCache::new();
        cache.put(id("A"), SeriesId(1));
        cache.put(id("B"), SeriesId(2));
        cache.put(id("C"), SeriesId(3));

        let current: HashSet<NetworkId> = [id("B")].into_iter().collect();
        assert_eq!(cache.difference(&current), vec![id("A"), id("C")]);
    }

    #[test]
    fn remove_skips_unknown_identities() {
        let mut cache = SeriesCache::new();
        cache.put(id("A"), SeriesId(1));

        let removed = cache.remove(&[id("A"), id("missing")]);
        assert_eq!(removed, vec![SeriesId(1)]);
        assert!(!cache.contains(&id("A")));
    }

    #[test]
    fn find_resolves_series_to_identity() {
        let mut cache = SeriesCache::new();
        cache.put(id("A"), SeriesId(7));
        assert_eq!(cache.find(SeriesId(7)).unwrap(), id("A"));
        assert!(cache.find(SeriesId(8)).is_err());
    }

    #[test]
    fn get_fails_for_absent_identity() {
        let cache = SeriesCache::new();
        assert!(cache.get(&id("A")).is_err());
    }

    #[test]
    fn put_overwrites_silently() {
        let mut cache = SeriesCache::new();
        cache.put(id("A"), SeriesId(1));
        cache.put(id("A"), SeriesId(2));
        assert_eq!(cache.get(&id("A")).unwrap(), SeriesId(2));
        assert_eq!(cache.difference(&HashSet::new()).len(), 1);
    }
}
