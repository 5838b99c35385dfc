// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Working groups: splitting on separators, merging, and joining back.
//!
//! Groups hold indices into the caller's slice. Nothing is cloned until
//! [`join`] builds the final sequence.

use alloc::vec::Vec;

use crate::types::MenuEntry;

/// A contiguous run of non-separator entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Group {
    /// Member indices in current order. Never empty.
    pub(crate) members: Vec<usize>,
    /// First separator of the run that preceded this group in the input, if any.
    pub(crate) separator: Option<usize>,
}

/// Split `entries` into groups on separator runs. Empty runs produce no group.
pub(crate) fn split<E: MenuEntry>(entries: &[E]) -> Vec<Group> {
    let mut groups = Vec::new();
    let mut current = Group::default();
    for (i, e) in entries.iter().enumerate() {
        if e.is_separator() {
            if !current.members.is_empty() {
                groups.push(core::mem::take(&mut current));
            }
            if current.separator.is_none() {
                current.separator = Some(i);
            }
        } else {
            current.members.push(i);
        }
    }
    if !current.members.is_empty() {
        groups.push(current);
    }
    groups
}

/// Merge the group at `source` into the group at `target`.
///
/// Members of `target` come first, followed by those of `source`. The merged
/// group takes the slot (and separator) of whichever of the two was earlier.
pub(crate) fn merge(groups: &mut Vec<Group>, source: usize, target: usize) {
    debug_assert_ne!(source, target, "a group cannot merge with itself");
    let (lo, hi) = if source < target {
        (source, target)
    } else {
        (target, source)
    };
    let later = groups.remove(hi);
    let earlier = &mut groups[lo];
    if lo == target {
        earlier.members.extend(later.members);
    } else {
        let mut members = later.members;
        members.append(&mut earlier.members);
        earlier.members = members;
    }
}

/// Flatten groups back into entries with exactly one separator between groups.
pub(crate) fn join<E: MenuEntry + Clone>(entries: &[E], groups: &[Group]) -> Vec<E> {
    let len = groups.iter().map(|g| g.members.len() + 1).sum();
    let mut out = Vec::with_capacity(len);
    for (n, group) in groups.iter().enumerate() {
        if n > 0 {
            out.push(match group.separator {
                Some(s) => entries[s].clone(),
                None => E::separator(),
            });
        }
        out.extend(group.members.iter().map(|&i| entries[i].clone()));
    }
    out
}
