//! Merging a freshly supplied child collection into the stored one.
//!
//! Stored items that match an incoming item are patched in place so they keep
//! their persisted identity; unmatched incoming items are appended as copies
//! and stored items with no incoming counterpart are dropped. The result
//! follows the incoming order.

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::AddAssign;

/// A child row that merges field by field into its stored counterpart.
pub trait ChildPatch {
    fn patch(&self, target: &mut Self);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    pub updated: usize,
    pub added: usize,
    pub removed: usize,
}

impl AddAssign for ReconcileStats {
    fn add_assign(&mut self, other: Self) {
        self.updated += other.updated;
        self.added += other.added;
        self.removed += other.removed;
    }
}

/// Reconciles by business key. `None` source means "no data supplied" and
/// leaves `target` alone. When several items share a key, incoming items
/// claim stored ones in order; extra incoming duplicates become new items.
pub fn reconcile_by_key<T, K, F, P>(
    source: Option<&[T]>,
    target: &mut Vec<T>,
    key_of: F,
    mut patch_item: P,
) -> ReconcileStats
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
    P: FnMut(&T, &mut T),
{
    let Some(source) = source else {
        return ReconcileStats::default();
    };

    let existing = std::mem::take(target);
    let existing_len = existing.len();
    let mut by_key: HashMap<K, Vec<T>> = HashMap::new();
    for item in existing.into_iter().rev() {
        by_key.entry(key_of(&item)).or_default().push(item);
    }

    let mut stats = ReconcileStats::default();
    let mut merged = Vec::with_capacity(source.len());
    for incoming in source {
        match by_key.get_mut(&key_of(incoming)).and_then(Vec::pop) {
            Some(mut stored) => {
                patch_item(incoming, &mut stored);
                stats.updated += 1;
                merged.push(stored);
            }
            None => {
                stats.added += 1;
                merged.push(incoming.clone());
            }
        }
    }

    stats.removed = existing_len - stats.updated;
    *target = merged;
    stats
}

/// Reconciles collections without a business key by pairing items at the
/// same position.
pub fn reconcile_by_position<T, P>(
    source: Option<&[T]>,
    target: &mut Vec<T>,
    mut patch_item: P,
) -> ReconcileStats
where
    T: Clone,
    P: FnMut(&T, &mut T),
{
    let Some(source) = source else {
        return ReconcileStats::default();
    };

    let mut stats = ReconcileStats::default();
    if target.len() > source.len() {
        stats.removed = target.len() - source.len();
        target.truncate(source.len());
    }
    for (incoming, stored) in source.iter().zip(target.iter_mut()) {
        patch_item(incoming, stored);
        stats.updated += 1;
    }
    for incoming in &source[target.len()..] {
        target.push(incoming.clone());
        stats.added += 1;
    }
    stats
}
