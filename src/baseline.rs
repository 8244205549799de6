//! Library maps used as the reference point for the hand-made structures.
//!
//! Both keep every score of an id, so duplicates are always aggregated.

use crate::map::{Inserted, ScoreMap, NOT_FOUND};
use std::collections::{BTreeMap, HashMap};

fn average(scores: Option<&Vec<i32>>) -> f64 {
    match scores {
        Some(scores) if !scores.is_empty() => {
            let sum: i64 = scores.iter().map(|&score| score as i64).sum();
            sum as f64 / scores.len() as f64
        }
        _ => NOT_FOUND,
    }
}

/// id -> scores on `std::collections::BTreeMap`
#[derive(Debug, Default)]
pub struct OrderedIndex {
    map: BTreeMap<i32, Vec<i32>>,
    len: usize,
}

impl OrderedIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreMap for OrderedIndex {
    fn insert(&mut self, id: i32, score: i32) -> Inserted {
        self.map.entry(id).or_insert_with(Vec::new).push(score);
        self.len += 1;

        Inserted::New
    }

    fn search_avg(&mut self, id: i32) -> f64 {
        average(self.map.get(&id))
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.map.clear();
        self.len = 0;
    }
}

/// id -> scores on `std::collections::HashMap`
#[derive(Debug, Default)]
pub struct HashIndex {
    map: HashMap<i32, Vec<i32>>,
    len: usize,
}

impl HashIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreMap for HashIndex {
    fn insert(&mut self, id: i32, score: i32) -> Inserted {
        self.map.entry(id).or_insert_with(Vec::new).push(score);
        self.len += 1;

        Inserted::New
    }

    fn search_avg(&mut self, id: i32) -> f64 {
        average(self.map.get(&id))
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.map.clear();
        self.len = 0;
    }
}
