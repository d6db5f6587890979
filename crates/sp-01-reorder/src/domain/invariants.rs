//! Domain invariants for the Reorder Subsystem
//!
//! Checks run against what a store reports after a reorder. Used by the
//! strategy tests and the integration suite.

use super::entities::{ItemId, OrderValue};
use std::collections::{HashMap, HashSet};

/// Index of the last occurrence of every identifier.
fn last_positions(order: &[ItemId]) -> HashMap<&ItemId, usize> {
    order.iter().enumerate().map(|(i, id)| (id, i)).collect()
}

/// Dense sequence.
/// Every identifier holds `start + index`, using the index of its last occurrence.
pub fn invariant_dense_sequence<F>(order: &[ItemId], start: u32, lookup: F) -> bool
where
    F: Fn(&ItemId) -> Option<OrderValue>,
{
    last_positions(order).into_iter().all(|(id, index)| {
        lookup(id) == Some(OrderValue::from(start) + index as OrderValue)
    })
}

/// Position.
/// Every identifier holds its 1-based position, using its last occurrence.
pub fn invariant_position<F>(order: &[ItemId], lookup: F) -> bool
where
    F: Fn(&ItemId) -> Option<OrderValue>,
{
    last_positions(order)
        .into_iter()
        .all(|(id, index)| lookup(id) == Some(index as OrderValue + 1))
}

/// Scope.
/// Nothing outside the submitted order was written.
pub fn invariant_scope(order: &[ItemId], written: &[ItemId]) -> bool {
    let allowed: HashSet<&ItemId> = order.iter().collect();
    written.iter().all(|id| allowed.contains(id))
}
