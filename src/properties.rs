//! Directional decimal edge properties.
//!
//! A weighting never talks to the graph storage directly; it reads one
//! decimal-valued property (speed, in the shipped strategies) through the
//! narrow [`DecimalProperty`] interface. Forward and reverse readings are
//! independent, and the accessor declares the largest value it can ever
//! store so that admissibility bounds can be derived structurally instead
//! of from observed data.

use std::sync::Arc;

use crate::edge::EdgeId;

/// Read-only access to a directional decimal property of edges.
///
/// Values are non-negative; `0.0` means "no traversal capability in this
/// direction" for speed-like properties. Passing an edge id the backing
/// storage does not know is a caller bug and may panic in the
/// implementation.
pub trait DecimalProperty: Send + Sync {
    /// Property value for traversing the edge in storage direction.
    fn get(&self, edge: EdgeId) -> f64;

    /// Property value for traversing the edge against storage direction.
    fn get_reverse(&self, edge: EdgeId) -> f64;

    /// Largest value the backing encoding can represent.
    ///
    /// This is a property of the storage schema, not of the data currently
    /// in it: it must hold for edges that are added or rewritten later.
    fn max_storable(&self) -> f64;
}

impl<P: DecimalProperty + ?Sized> DecimalProperty for &P {
    fn get(&self, edge: EdgeId) -> f64 {
        (**self).get(edge)
    }

    fn get_reverse(&self, edge: EdgeId) -> f64 {
        (**self).get_reverse(edge)
    }

    fn max_storable(&self) -> f64 {
        (**self).max_storable()
    }
}

impl<P: DecimalProperty + ?Sized> DecimalProperty for Arc<P> {
    fn get(&self, edge: EdgeId) -> f64 {
        (**self).get(edge)
    }

    fn get_reverse(&self, edge: EdgeId) -> f64 {
        (**self).get_reverse(edge)
    }

    fn max_storable(&self) -> f64 {
        (**self).max_storable()
    }
}

/// Dense in-memory property table with independent forward/reverse values
/// per edge.
///
/// Stored values are clamped to `max_storable`, matching what a capped
/// fixed-width encoding would persist. Suitable for small graphs and as a
/// stand-in for the storage layer in tests.
#[derive(Debug, Clone)]
pub struct DecimalTable {
    forward: Vec<f64>,
    reverse: Vec<f64>,
    max_storable: f64,
}

impl DecimalTable {
    /// `max_storable` must be positive; enforced by the weighting
    /// constructors rather than here, since the table itself is also valid
    /// as a plain value store.
    pub fn new(max_storable: f64) -> Self {
        Self {
            forward: Vec::new(),
            reverse: Vec::new(),
            max_storable,
        }
    }

    /// Append an edge and return its id. Values clamp to `max_storable`.
    pub fn push(&mut self, forward: f64, reverse: f64) -> EdgeId {
        let id = self.forward.len() as EdgeId;
        self.forward.push(forward.min(self.max_storable));
        self.reverse.push(reverse.min(self.max_storable));
        id
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

impl DecimalProperty for DecimalTable {
    fn get(&self, edge: EdgeId) -> f64 {
        self.forward[edge as usize]
    }

    fn get_reverse(&self, edge: EdgeId) -> f64 {
        self.reverse[edge as usize]
    }

    fn max_storable(&self) -> f64 {
        self.max_storable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directional_values_are_independent() {
        let mut table = DecimalTable::new(100.0);
        let e = table.push(50.0, 30.0);

        assert_eq!(table.get(e), 50.0);
        assert_eq!(table.get_reverse(e), 30.0);
    }

    #[test]
    fn test_values_clamp_to_max_storable() {
        let mut table = DecimalTable::new(120.0);
        let e = table.push(250.0, 120.0);

        assert_eq!(table.get(e), 120.0, "forward value must clamp");
        assert_eq!(table.get_reverse(e), 120.0);
    }

    #[test]
    fn test_zero_means_closed() {
        let mut table = DecimalTable::new(100.0);
        let e = table.push(50.0, 0.0);

        assert_eq!(table.get_reverse(e), 0.0);
    }

    #[test]
    fn test_access_through_ref_and_arc() {
        let mut table = DecimalTable::new(100.0);
        let e = table.push(42.0, 42.0);

        let by_ref: &DecimalTable = &table;
        assert_eq!(by_ref.get(e), 42.0);
        assert_eq!(by_ref.max_storable(), 100.0);

        let shared = std::sync::Arc::new(table);
        assert_eq!(shared.get_reverse(e), 42.0);
    }
}
