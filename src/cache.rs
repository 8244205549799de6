use crate::map::NOT_FOUND;
use std::collections::HashMap;

/// Sum and number of scores recorded under one id.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Aggregate {
    pub sum: i64,
    pub count: u64,
}

impl Aggregate {
    pub fn record(&mut self, score: i32) {
        self.sum += score as i64;
        self.count += 1;
    }

    pub fn average(&self) -> f64 {
        if self.count == 0 {
            return NOT_FOUND;
        }

        self.sum as f64 / self.count as f64
    }
}

/// id -> (sum, count) index derived from one full traversal of a structure.
///
/// Invalid: the structure changed since the last traversal, rebuild before use.
/// Valid: the snapshot exactly reflects the current structure.
#[derive(Debug)]
pub enum AggregateCache {
    Invalid,
    Valid(HashMap<i32, Aggregate>),
}

impl Default for AggregateCache {
    fn default() -> Self {
        AggregateCache::Invalid
    }
}

impl AggregateCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, AggregateCache::Valid(_))
    }

    /// Valid -> Invalid. Called on every mutation of the owner.
    pub fn invalidate(&mut self) {
        *self = AggregateCache::Invalid;
    }

    /// Serve the average for the id, rebuilding from `records` first if invalid.
    ///
    /// `records` is only called on the Invalid -> Valid transition.
    pub fn average<I, F>(&mut self, id: i32, records: F) -> f64
    where
        I: Iterator<Item = (i32, i32)>,
        F: FnOnce() -> I,
    {
        if let AggregateCache::Invalid = self {
            let mut snapshot: HashMap<i32, Aggregate> = HashMap::new();

            for (id, score) in records() {
                snapshot.entry(id).or_default().record(score);
            }

            *self = AggregateCache::Valid(snapshot);
        }

        match self {
            AggregateCache::Valid(snapshot) => snapshot
                .get(&id)
                .map(Aggregate::average)
                .unwrap_or(NOT_FOUND),
            AggregateCache::Invalid => unreachable!(),
        }
    }
}
