//! Swipe preference classifier.
//!
//! While the swipe menu is open the dragged label snaps to whichever zone's
//! vertical centre is closest to the pointer. The result only drives visual
//! feedback; nothing is persisted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneId {
    Less,
    More,
    Exit,
}

/// A drop zone's vertical extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneBounds {
    pub id: ZoneId,
    pub top: f64,
    pub height: f64,
}

impl ZoneBounds {
    pub fn new(id: ZoneId, top: f64, height: f64) -> Self {
        Self { id, top, height }
    }

    pub fn centroid(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Which side control opened the swipe menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeIntent {
    /// Left control, "less of ts".
    Reduce,
    /// Right control, "more of ts".
    Increase,
}

/// Advisory output for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceSignal {
    pub intent: SwipeIntent,
    pub zone: ZoneId,
}

/// Returns the zone whose centroid is nearest `pointer_y`.
///
/// Ties go to the earlier zone. `None` only when `zones` is empty.
pub fn classify(pointer_y: f64, zones: &[ZoneBounds]) -> Option<ZoneId> {
    zones
        .iter()
        .fold(None::<(f64, ZoneId)>, |nearest, zone| {
            let distance = (pointer_y - zone.centroid()).abs();
            match nearest {
                Some((best, _)) if best <= distance => nearest,
                _ => Some((distance, zone.id)),
            }
        })
        .map(|(_, id)| id)
}

/// Classifies and pairs the zone with the opening intent.
pub fn signal(intent: SwipeIntent, pointer_y: f64, zones: &[ZoneBounds]) -> Option<PreferenceSignal> {
    classify(pointer_y, zones).map(|zone| PreferenceSignal { intent, zone })
}
