// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sorter.
//!
//! ## Phases
//!
//! 1. Split the input into groups on separators.
//! 2. Merging: while some entry's `before` / `after` names an entry in another
//!    group, the two groups are merged. Then each group's members are ordered
//!    so that every `before` / `after` reference is honored.
//! 3. Group placement: each group follows at most one `beforeGroupContaining` /
//!    `afterGroupContaining` rule (the first one, scanning its members in order,
//!    that points into another group). Groups are then arranged depth-first in
//!    their current order. Rules are resolved against the merged groups, so a
//!    sorted sequence sorts to itself.
//! 4. Join the groups back with one separator between neighbors.
//!
//! ## Conflicts
//!
//! References to ids that do not exist are skipped. Cycles are broken in favor
//! of whatever the traversal placed first, which is decided by input order alone.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::groups::{self, Group};
use crate::order::{Edges, topological_order};
use crate::types::MenuEntry;

/// Sort `entries` by their placement constraints and normalize separators.
///
/// The input is left untouched; the returned entries are clones. Every
/// non-separator entry appears exactly once in the output. Separators appear
/// only between groups, never at either end and never twice in a row.
///
/// ```
/// use understory_menu_sort::{Descriptor, sort_entries};
///
/// let entries = [
///     Descriptor::item("two").with_after_group(["one"]),
///     Descriptor::separator(),
///     Descriptor::item("one"),
/// ];
/// let sorted = sort_entries(&entries);
/// assert_eq!(sorted[0], Descriptor::item("one"));
/// assert!(sorted[1].id.is_none());
/// assert_eq!(sorted[2].id.as_deref(), Some("two"));
/// ```
pub fn sort_entries<E: MenuEntry + Clone>(entries: &[E]) -> Vec<E> {
    let ids = IdTable::new(entries);
    let groups = groups::split(entries);
    let groups = merge_groups(entries, &ids, groups);
    let groups = place_groups(entries, &ids, groups);
    groups::join(entries, &groups)
}

/// Id → entry index for non-separator entries. The first entry with a given id wins.
struct IdTable<'a> {
    map: BTreeMap<&'a str, usize>,
}

impl<'a> IdTable<'a> {
    fn new<E: MenuEntry>(entries: &'a [E]) -> Self {
        let mut map = BTreeMap::new();
        for (i, e) in entries.iter().enumerate() {
            if e.is_separator() {
                continue;
            }
            if let Some(id) = e.id() {
                map.entry(id).or_insert(i);
            }
        }
        Self { map }
    }

    fn resolve(&self, id: &str) -> Option<usize> {
        let found = self.map.get(id).copied();
        #[cfg(feature = "tracing")]
        if found.is_none() {
            tracing::trace!(id, "skipping reference to unknown id");
        }
        found
    }
}

/// Entry index → position of the group that currently holds it.
fn owners(len: usize, groups: &[Group]) -> Vec<Option<usize>> {
    let mut owner = vec![None; len];
    for (g, group) in groups.iter().enumerate() {
        for &m in &group.members {
            owner[m] = Some(g);
        }
    }
    owner
}

/// First id in `list` that resolves to an entry held by a group other than `own`.
fn other_group(
    list: &[String],
    ids: &IdTable<'_>,
    owner: &[Option<usize>],
    own: usize,
) -> Option<usize> {
    list.iter()
        .filter_map(|id| ids.resolve(id))
        .filter_map(|entry| owner[entry])
        .find(|&g| g != own)
}

fn place_groups<E: MenuEntry>(
    entries: &[E],
    ids: &IdTable<'_>,
    groups: Vec<Group>,
) -> Vec<Group> {
    let owner = owners(entries.len(), &groups);
    let mut edges = Edges::new(groups.len());
    for (g, group) in groups.iter().enumerate() {
        for &m in &group.members {
            let e = &entries[m];
            if let Some(target) = other_group(e.before_group_ids(), ids, &owner, g) {
                edges.require(g, target);
                break;
            }
            if let Some(target) = other_group(e.after_group_ids(), ids, &owner, g) {
                edges.require(target, g);
                break;
            }
        }
    }
    let mut slots: Vec<Option<Group>> = groups.into_iter().map(Some).collect();
    topological_order(&edges)
        .into_iter()
        .filter_map(|g| slots[g].take())
        .collect()
}

/// Find one pair of groups linked by a `before` / `after` reference and merge it.
fn merge_one<E: MenuEntry>(entries: &[E], ids: &IdTable<'_>, groups: &mut Vec<Group>) -> bool {
    let owner = owners(entries.len(), groups);
    let link = groups.iter().enumerate().find_map(|(g, group)| {
        group.members.iter().find_map(|&m| {
            let e = &entries[m];
            other_group(e.before_ids(), ids, &owner, g)
                .or_else(|| other_group(e.after_ids(), ids, &owner, g))
                .map(|target| (g, target))
        })
    });
    match link {
        Some((source, target)) => {
            groups::merge(groups, source, target);
            true
        }
        None => false,
    }
}

fn merge_groups<E: MenuEntry>(
    entries: &[E],
    ids: &IdTable<'_>,
    mut groups: Vec<Group>,
) -> Vec<Group> {
    while merge_one(entries, ids, &mut groups) {}
    for group in &mut groups {
        order_members(entries, ids, group);
    }
    groups
}

/// Reorder a group's members so `before` / `after` references inside it hold.
fn order_members<E: MenuEntry>(entries: &[E], ids: &IdTable<'_>, group: &mut Group) {
    let local: BTreeMap<usize, usize> = group
        .members
        .iter()
        .enumerate()
        .map(|(pos, &m)| (m, pos))
        .collect();
    let mut edges = Edges::new(group.members.len());
    let mut constrained = false;
    for (pos, &m) in group.members.iter().enumerate() {
        let e = &entries[m];
        for id in e.before_ids() {
            if let Some(&to) = ids.resolve(id).and_then(|t| local.get(&t)) {
                edges.require(pos, to);
                constrained = true;
            }
        }
        for id in e.after_ids() {
            if let Some(&to) = ids.resolve(id).and_then(|t| local.get(&t)) {
                edges.require(to, pos);
                constrained = true;
            }
        }
    }
    if constrained {
        group.members = topological_order(&edges)
            .into_iter()
            .map(|pos| group.members[pos])
            .collect();
    }
}
