use std::cmp::Ordering;

use slotmap::SlotMap;
use tracing::{debug, trace};

use crate::error::{Result, StoreError};
use crate::geometry::{Circle, Curve, CurveKind, Ellipse, Helix, ParametricCurve};
use crate::math::Number;

slotmap::new_key_type! {
    /// Unique identifier for a curve in the curve store.
    pub struct CurveId;
}

/// Arena that owns curves of mixed kinds.
///
/// Curves are addressed via typed IDs (generational indices), so a removed
/// curve's ID never aliases a later insertion.
#[derive(Debug)]
pub struct CurveStore<T> {
    curves: SlotMap<CurveId, Curve<T>>,
}

impl<T> Default for CurveStore<T> {
    fn default() -> Self {
        Self {
            curves: SlotMap::with_key(),
        }
    }
}

impl<T: Number> CurveStore<T> {
    /// Creates a new, empty curve store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a curve and returns its ID.
    pub fn insert(&mut self, curve: impl Into<Curve<T>>) -> CurveId {
        let curve = curve.into();
        let kind = curve.kind();
        let id = self.curves.insert(curve);
        debug!(?id, %kind, "inserted curve");
        id
    }

    /// Removes a curve, returning it.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is not in the store.
    pub fn remove(&mut self, id: CurveId) -> Result<Curve<T>> {
        let curve = self.curves.remove(id).ok_or(StoreError::CurveNotFound)?;
        debug!(?id, kind = %curve.kind(), "removed curve");
        Ok(curve)
    }

    /// Returns a reference to the curve, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is not in the store.
    pub fn get(&self, id: CurveId) -> Result<&Curve<T>> {
        Ok(self.curves.get(id).ok_or(StoreError::CurveNotFound)?)
    }

    /// Returns the circle stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is not found or is not a circle.
    pub fn circle(&self, id: CurveId) -> Result<&Circle<T>> {
        let curve = self.get(id)?;
        Ok(curve
            .as_circle()
            .ok_or_else(|| mismatch(CurveKind::Circle, curve))?)
    }

    /// Returns the ellipse stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is not found or is not an ellipse.
    pub fn ellipse(&self, id: CurveId) -> Result<&Ellipse<T>> {
        let curve = self.get(id)?;
        Ok(curve
            .as_ellipse()
            .ok_or_else(|| mismatch(CurveKind::Ellipse, curve))?)
    }

    /// Returns the helix stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is not found or is not a helix.
    pub fn helix(&self, id: CurveId) -> Result<&Helix<T>> {
        let curve = self.get(id)?;
        Ok(curve
            .as_helix()
            .ok_or_else(|| mismatch(CurveKind::Helix, curve))?)
    }

    /// Returns the number of stored curves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Returns `true` if the store holds no curves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Iterates over all curves with their IDs.
    pub fn iter(&self) -> impl Iterator<Item = (CurveId, &Curve<T>)> {
        self.curves.iter()
    }

    /// Returns the IDs of all curves of the given kind.
    #[must_use]
    pub fn ids_of_kind(&self, kind: CurveKind) -> Vec<CurveId> {
        self.curves
            .iter()
            .filter(|(_, c)| c.kind() == kind)
            .map(|(id, _)| id)
            .collect()
    }

    /// Sums [`ParametricCurve::radii_sum`] over every stored curve.
    #[must_use]
    pub fn total_radii_sum(&self) -> T {
        let total = self
            .curves
            .values()
            .fold(T::zero(), |acc, c| acc + c.radii_sum());
        trace!(count = self.curves.len(), "summed radii");
        total
    }

    /// Returns all IDs ordered by ascending radii-sum.
    ///
    /// NaN sums come last. Ties, including among NaNs, fall back to key
    /// order, so the result is deterministic.
    #[must_use]
    pub fn sorted_by_radii_sum(&self) -> Vec<CurveId> {
        let mut entries: Vec<_> = self
            .curves
            .iter()
            .map(|(id, c)| (id, c.radii_sum()))
            .collect();
        entries.sort_by(|(ia, a), (ib, b)| {
            let by_value = match (a.is_nan(), b.is_nan()) {
                (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
                (a_nan, b_nan) => a_nan.cmp(&b_nan),
            };
            by_value.then_with(|| ia.cmp(ib))
        });
        entries.into_iter().map(|(id, _)| id).collect()
    }
}

fn mismatch<T: Number>(expected: CurveKind, found: &Curve<T>) -> StoreError {
    StoreError::KindMismatch {
        expected,
        found: found.kind(),
    }
}
