//! Curve change notifications.

/// Something about a curve changed.
///
/// Every event carries the curve revision after the change, so consumers can
/// tell whether data they derived from the curve is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveEvent {
    /// An anchor was inserted at `index`.
    AnchorAdded { index: usize, revision: u64 },
    /// The anchor at `index` was removed.
    AnchorRemoved { index: usize, revision: u64 },
    /// An anchor moved from one index to another.
    AnchorReordered { from: usize, to: usize, revision: u64 },
    /// Position, handles or type of the anchor at `index` changed.
    AnchorChanged { index: usize, revision: u64 },
    /// All anchors were removed.
    AnchorsCleared { revision: u64 },
    /// Closed flag, sample rate or tool sizes changed.
    SettingsChanged { revision: u64 },
    /// The curve origin moved.
    OriginChanged { revision: u64 },
}

impl CurveEvent {
    pub fn revision(&self) -> u64 {
        match self {
            CurveEvent::AnchorAdded { revision, .. }
            | CurveEvent::AnchorRemoved { revision, .. }
            | CurveEvent::AnchorReordered { revision, .. }
            | CurveEvent::AnchorChanged { revision, .. }
            | CurveEvent::AnchorsCleared { revision }
            | CurveEvent::SettingsChanged { revision }
            | CurveEvent::OriginChanged { revision } => *revision,
        }
    }

    /// Check if the anchor sequence itself (not just anchor data) changed.
    pub fn is_topology_change(&self) -> bool {
        matches!(
            self,
            CurveEvent::AnchorAdded { .. }
                | CurveEvent::AnchorRemoved { .. }
                | CurveEvent::AnchorReordered { .. }
                | CurveEvent::AnchorsCleared { .. }
        )
    }
}

/// A buffer of curve events that can be drained each frame.
#[derive(Debug, Default)]
pub struct CurveEventBuffer {
    events: Vec<CurveEvent>,
}

impl CurveEventBuffer {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: CurveEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = CurveEvent> + '_ {
        self.events.drain(..)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CurveEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Revision of the most recent event, if any.
    pub fn latest_revision(&self) -> Option<u64> {
        self.events.last().map(CurveEvent::revision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_drain() {
        let mut buffer = CurveEventBuffer::new();
        buffer.push(CurveEvent::AnchorAdded { index: 0, revision: 1 });
        buffer.push(CurveEvent::SettingsChanged { revision: 2 });

        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.latest_revision(), Some(2));

        let drained: Vec<_> = buffer.drain().collect();
        assert_eq!(drained.len(), 2);
        assert!(drained[0].is_topology_change());
        assert!(!drained[1].is_topology_change());
        assert!(buffer.is_empty());
    }
}
