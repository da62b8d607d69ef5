use crate::types::{Count, Label};
use rand::Rng;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// The label memory of one vertex.
///
/// The memory is an ordered histogram mapping a label to the number of times
/// the vertex has recorded it, together with the running total of all counts.
/// It is seeded with one occurrence of the owner's own label, and the seed
/// label never leaves the memory, so the total is always positive.
#[derive(Debug, PartialEq)]
pub struct Memory {
    owner: Label,
    counts: BTreeMap<Label, Count>,
    total: Count,
}

impl Memory {
    pub fn new(owner: Label) -> Memory {
        let mut counts = BTreeMap::new();
        counts.insert(owner, 1);
        Memory {
            owner,
            counts,
            total: 1,
        }
    }

    pub fn owner(&self) -> Label {
        self.owner
    }

    /// Returns the sum of all occurrence counts.
    pub fn total(&self) -> Count {
        self.total
    }

    /// Returns the occurrence count of `label`.
    pub fn count(&self, label: Label) -> Count {
        self.counts.get(&label).map_or(0, |&count| count)
    }

    /// Returns the number of distinct labels in the memory.
    pub fn num_labels(&self) -> usize {
        self.counts.len()
    }

    /// Returns an iterator visiting the `(label, count)` entries in ascending
    /// label order.
    pub fn entries(&self) -> btree_map::Iter<Label, Count> {
        self.counts.iter()
    }

    /// Returns the fraction of the memory occupied by `label`.
    pub fn density(&self, label: Label) -> f64 {
        self.count(label) as f64 / self.total as f64
    }

    /// Draws one label with probability proportional to its occurrence count.
    ///
    /// The entries are walked in ascending label order accumulating
    /// `count / total`, and the first label whose cumulative mass reaches the
    /// drawn value is returned. The walk accumulates to one, so it cannot
    /// fall through for a draw in `[0, 1)`; the trailing return of the
    /// owner's label guards against floating-point rounding only.
    pub fn speak<R: Rng + ?Sized>(&self, rng: &mut R) -> Label {
        let draw = rng.random::<f64>();
        let mut mass = 0.0;
        for (&label, &count) in &self.counts {
            mass += count as f64 / self.total as f64;
            if mass >= draw {
                return label;
            }
        }
        debug_assert!(false, "cumulative mass {} never reached {}", mass, draw);
        self.owner
    }

    /// Records one more occurrence of `label`, inserting it if new.
    pub fn record(&mut self, label: Label) {
        *self.counts.entry(label).or_insert(0) += 1;
        self.total += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new() {
        let memory = Memory::new(7);
        assert_eq!(memory.owner(), 7);
        assert_eq!(memory.total(), 1);
        assert_eq!(memory.count(7), 1);
        assert_eq!(memory.count(0), 0);
        assert_eq!(memory.num_labels(), 1);
    }

    #[test]
    fn test_record() {
        let mut memory = Memory::new(1);
        memory.record(1);
        memory.record(1);
        memory.record(2);
        assert_eq!(memory.count(1), 3);
        assert_eq!(memory.count(2), 1);
        assert_eq!(memory.total(), 4);
        assert_eq!(
            memory.entries().map(|(_, &count)| count).sum::<u64>(),
            memory.total()
        );
    }

    #[test]
    fn test_entries_ascending() {
        let mut memory = Memory::new(5);
        memory.record(9);
        memory.record(2);
        memory.record(9);
        assert_eq!(
            memory.entries().map(|(&label, _)| label).collect::<Vec<_>>(),
            [2, 5, 9]
        );
    }

    #[test]
    fn test_density() {
        let mut memory = Memory::new(1);
        memory.record(1);
        memory.record(1);
        memory.record(2);
        assert_eq!(memory.density(1), 0.75);
        assert_eq!(memory.density(2), 0.25);
        assert_eq!(memory.density(3), 0.0);
    }

    #[test]
    fn test_speak_single_label() {
        let mut rng = StdRng::seed_from_u64(0);
        let memory = Memory::new(3);
        for _ in 0..100 {
            assert_eq!(memory.speak(&mut rng), 3);
        }
    }

    #[test]
    fn test_speak_frequency() {
        let mut rng = StdRng::seed_from_u64(0x51a9);
        let mut memory = Memory::new(1);
        memory.record(1);
        memory.record(1);
        memory.record(2);
        let trials = 10000;
        let ones = (0..trials)
            .filter(|_| memory.speak(&mut rng) == 1)
            .count();
        // Label 1 occupies 3/4 of the memory; 7500 +- 500 is over ten
        // standard deviations.
        assert!(7000 < ones && ones < 8000, "ones = {}", ones);
    }
}
