//! Order value assignment
//!
//! Both strategies compute their writes here so duplicate handling is the same
//! everywhere: the last occurrence of an identifier wins.

use super::entities::{ItemId, OrderValue};
use std::collections::HashMap;

/// Final order value for one identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub id: ItemId,
    pub value: OrderValue,
}

impl Assignment {
    pub fn new(id: ItemId, value: OrderValue) -> Self {
        Self { id, value }
    }
}

/// Dense values `start, start+1, ...` in input order.
pub fn sequential_assignments(order: &[ItemId], start: u32) -> Vec<Assignment> {
    let base = OrderValue::from(start);
    resolve_last_write_wins(
        order
            .iter()
            .enumerate()
            .map(|(i, id)| (id, base + i as OrderValue)),
    )
}

/// 1-based positions in input order.
pub fn positional_assignments(order: &[ItemId]) -> Vec<Assignment> {
    resolve_last_write_wins(
        order
            .iter()
            .enumerate()
            .map(|(i, id)| (id, i as OrderValue + 1)),
    )
}

/// Collapse duplicate identifiers, keeping the value of the last occurrence.
///
/// Output is sorted by value, so it is stable for a given input.
fn resolve_last_write_wins<'a>(
    raw: impl Iterator<Item = (&'a ItemId, OrderValue)>,
) -> Vec<Assignment> {
    let mut latest: HashMap<&ItemId, OrderValue> = HashMap::new();
    for (id, value) in raw {
        latest.insert(id, value);
    }

    let mut assignments: Vec<Assignment> = latest
        .into_iter()
        .map(|(id, value)| Assignment::new(id.clone(), value))
        .collect();
    assignments.sort_by_key(|a| a.value);
    assignments
}
