//! Live preview of the rendered view regions.
//!
//! Surfaces publish every fragment they receive into a [`PreviewHub`]; the
//! preview server serves the latest fragment of each region and streams
//! updates to browsers over a websocket.

mod html;
mod server;

pub use server::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

/// Default capacity of the update channel.
pub const UPDATE_CAPACITY: usize = 64;

/// Latest content of one named region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSnapshot {
    pub region: String,
    pub html: String,
    /// Number of times the region was published, starting at 1.
    pub revision: u64,
    pub updated_at: DateTime<Utc>,
}

/// Shared store of region snapshots plus an update channel.
///
/// Cloning is cheap; every clone sees the same regions.
#[derive(Debug, Clone)]
pub struct PreviewHub {
    regions: Arc<RwLock<BTreeMap<String, RegionSnapshot>>>,
    updates: broadcast::Sender<RegionSnapshot>,
}

impl PreviewHub {
    pub fn new() -> Self {
        Self::with_capacity(UPDATE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (updates, _) = broadcast::channel(capacity);
        Self {
            regions: Arc::new(RwLock::new(BTreeMap::new())),
            updates,
        }
    }

    /// Store `html` as the content of `region` and notify subscribers.
    pub fn publish(&self, region: &str, html: &str) -> RegionSnapshot {
        let snapshot = {
            let mut regions = self
                .regions
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            let revision = regions.get(region).map(|s| s.revision).unwrap_or(0) + 1;
            let snapshot = RegionSnapshot {
                region: region.to_string(),
                html: html.to_string(),
                revision,
                updated_at: Utc::now(),
            };
            regions.insert(region.to_string(), snapshot.clone());
            snapshot
        };
        // Nobody watching is the common case.
        let _ = self.updates.send(snapshot.clone());
        snapshot
    }

    pub fn snapshot(&self, region: &str) -> Option<RegionSnapshot> {
        self.regions
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(region)
            .cloned()
    }

    /// Every region, ordered by name.
    pub fn snapshots(&self) -> Vec<RegionSnapshot> {
        self.regions
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .values()
            .cloned()
            .collect()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RegionSnapshot> {
        self.updates.subscribe()
    }
}

impl Default for PreviewHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_bumps_revision() {
        let hub = PreviewHub::new();
        assert_eq!(hub.publish("admin-audio", "<p>a</p>").revision, 1);
        assert_eq!(hub.publish("admin-audio", "<p>b</p>").revision, 2);
        assert_eq!(hub.publish("audio", "<p>c</p>").revision, 1);

        assert_eq!(hub.snapshot("admin-audio").unwrap().html, "<p>b</p>");
        assert!(hub.snapshot("video").is_none());
    }

    #[test]
    fn test_snapshots_sorted_by_region() {
        let hub = PreviewHub::new();
        hub.publish("picture", "p");
        hub.publish("admin-audio", "a");
        let names: Vec<String> = hub.snapshots().into_iter().map(|s| s.region).collect();
        assert_eq!(names, vec!["admin-audio", "picture"]);
    }

    #[test]
    fn test_subscribers_receive_updates() {
        let hub = PreviewHub::new();
        let mut rx = hub.subscribe();
        let clone = hub.clone();
        clone.publish("audio", "<table></table>");

        let update = rx.try_recv().unwrap();
        assert_eq!(update.region, "audio");
        assert_eq!(update.html, "<table></table>");
    }

    #[test]
    fn test_snapshot_serialization() {
        let hub = PreviewHub::new();
        let snapshot = hub.publish("audio", "<b>x</b>");
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"region\":\"audio\""));
        assert!(json.contains("\"revision\":1"));
        assert!(json.contains("\"updated_at\""));
    }
}
