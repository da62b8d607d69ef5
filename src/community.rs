//! The overlapping communities.

use crate::types::{Label, VId};
use itertools::Itertools;
use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

/// The mapping from a label to the community it identifies.
///
/// A vertex may appear under zero, one, or several labels: the overlap is
/// the point of the algorithm. The containers are ordered so that the
/// serialized form is a deterministic function of the propagated memories.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Communities {
    communities: BTreeMap<Label, BTreeSet<VId>>,
}

impl Communities {
    pub fn new() -> Communities {
        Communities {
            communities: BTreeMap::new(),
        }
    }

    /// Adds `vid` to the community identified by `label`, creating the
    /// community if absent.
    pub fn add(&mut self, label: Label, vid: VId) {
        self.communities.entry(label).or_default().insert(vid);
    }

    pub fn len(&self) -> usize {
        self.communities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.communities.is_empty()
    }

    pub fn get(&self, label: Label) -> Option<&BTreeSet<VId>> {
        self.communities.get(&label)
    }

    /// Returns an iterator visiting the communities in ascending label order.
    pub fn iter(&self) -> btree_map::Iter<Label, BTreeSet<VId>> {
        self.communities.iter()
    }

    /// Writes one line per community: the member vertex ids separated by
    /// spaces, newline terminated.
    pub fn write_into<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for members in self.communities.values() {
            writeln!(writer, "{}", members.iter().join(" "))?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Communities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for members in self.communities.values() {
            writeln!(f, "{}", members.iter().join(" "))?;
        }
        Ok(())
    }
}
