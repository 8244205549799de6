/// Returned by `search_avg` when no record carries the queried id.
pub const NOT_FOUND: f64 = -1.0;

/// What `insert` did with the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inserted {
    /// A new node was created for the record.
    New,
    /// An existing node with the same id was found and its score overwritten.
    Replaced { previous: i32 },
}

pub trait ScoreMap {
    /// Insert (id, score) into the map.
    ///
    /// Every insert invalidates the aggregation cache.
    fn insert(&mut self, id: i32, score: i32) -> Inserted;

    /// Average score over every record stored under the id.
    ///
    /// If there is no such record, return `NOT_FOUND`.
    fn search_avg(&mut self, id: i32) -> f64;

    /// The number of stored records (nodes).
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Release every node at once and reset to the empty state.
    fn clear(&mut self);
}

pub trait ScoreTree: ScoreMap {
    /// Height of the structure, 0 when empty.
    fn height(&self) -> usize;
}
