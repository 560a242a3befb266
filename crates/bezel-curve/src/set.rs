//! Handle-based registry of curves.

use bezel_core::alloc::{HashMap, IndexSlot, SparseSet};

use crate::anchor::AnchorPoint;
use crate::curve::{Curve, CurveId};
use crate::error::{CurveError, CurveResult};
use crate::event::CurveEvent;

/// Non-owning key for a curve stored in a [`CurveSet`].
///
/// Handles stay cheap to copy and go stale once their curve is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurveHandle(IndexSlot);

/// Owns the curves of a scene and hands out [`CurveHandle`]s to tools and
/// mesh builders.
#[derive(Default)]
pub struct CurveSet {
    curves: SparseSet<Curve>,
    by_id: HashMap<CurveId, CurveHandle>,
}

impl CurveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn insert(&mut self, curve: Curve) -> CurveHandle {
        let id = curve.id();
        let handle = CurveHandle(self.curves.push(curve));
        self.by_id.insert(id, handle);
        tracing::debug!(?handle, ?id, "Curve registered");
        handle
    }

    pub fn contains(&self, handle: CurveHandle) -> bool {
        self.curves.contains(handle.0)
    }

    pub fn get(&self, handle: CurveHandle) -> CurveResult<&Curve> {
        self.curves
            .try_get(handle.0)
            .ok_or(CurveError::StaleHandle(handle))
    }

    pub fn get_mut(&mut self, handle: CurveHandle) -> CurveResult<&mut Curve> {
        self.curves
            .try_get_mut(handle.0)
            .ok_or(CurveError::StaleHandle(handle))
    }

    pub fn remove(&mut self, handle: CurveHandle) -> CurveResult<Curve> {
        let curve = self
            .curves
            .try_remove(handle.0)
            .ok_or(CurveError::StaleHandle(handle))?;
        self.by_id.remove(&curve.id());
        tracing::debug!(?handle, "Curve unregistered");
        Ok(curve)
    }

    pub fn handle_of(&self, id: CurveId) -> Option<CurveHandle> {
        self.by_id.get(&id).copied()
    }

    /// Resolve the curve an anchor belongs to.
    pub fn owner_of(&self, anchor: &AnchorPoint) -> Option<&Curve> {
        let handle = self.handle_of(anchor.owner()?)?;
        self.curves.try_get(handle.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CurveHandle, &Curve)> {
        self.curves
            .iter_with_slots()
            .map(|(slot, curve)| (CurveHandle(slot), curve))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (CurveHandle, &mut Curve)> {
        self.curves
            .iter_with_slots_mut()
            .map(|(slot, curve)| (CurveHandle(slot), curve))
    }

    /// Take the pending change events of every curve, tagged with its handle.
    pub fn drain_events(&mut self) -> Vec<(CurveHandle, CurveEvent)> {
        let mut out = Vec::new();
        for (handle, curve) in self.iter_mut() {
            out.extend(curve.drain_events().into_iter().map(|event| (handle, event)));
        }
        out
    }
}
