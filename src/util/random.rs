use rand::Rng;

/// ids are drawn uniformly from [1, MAX_ID]
pub const MAX_ID: i32 = 1 << 20;
/// scores are drawn uniformly from [0, MAX_SCORE]
pub const MAX_SCORE: i32 = 100;

pub trait Random {
    fn gen<R: Rng>(rng: &mut R) -> Self;
}

/// one (id, score) pair of a workload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub id: i32,
    pub score: i32,
}

impl Random for Record {
    fn gen<R: Rng>(rng: &mut R) -> Self {
        Record {
            id: rng.gen_range(1..=MAX_ID),
            score: rng.gen_range(0..=MAX_SCORE),
        }
    }
}

/// n records with uniform ids and scores
pub fn workload<R: Rng>(rng: &mut R, n: usize) -> Vec<Record> {
    (0..n).map(|_| Record::gen(rng)).collect()
}

/// n query ids drawn from the same range as the workload ids
pub fn queries<R: Rng>(rng: &mut R, n: usize) -> Vec<i32> {
    (0..n).map(|_| rng.gen_range(1..=MAX_ID)).collect()
}

/// Source of the random structural choices (treap priorities, skip list coin flips).
pub trait Entropy {
    /// uniform draw from [0, 1)
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng> Entropy for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed sequence of draws, starting over when it is exhausted.
///
/// An empty sequence always draws 0.0.
#[derive(Debug, Clone)]
pub struct Replay {
    values: Vec<f64>,
    cursor: usize,
}

impl Replay {
    pub fn new(values: Vec<f64>) -> Self {
        Replay { values, cursor: 0 }
    }
}

impl Entropy for Replay {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }

        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();

        value
    }
}
