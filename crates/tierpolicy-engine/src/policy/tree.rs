//! Whole-tree queries: governing policy lookup, storage enumeration, and
//! rendering.

use std::fmt::Write;

use chrono::{Local, NaiveDateTime};
use tracing::debug;

use tierpolicy_core::Result;

use super::node::PolicyNode;

const INDENT: &str = "    ";

impl PolicyNode {
    /// Most specific policy governing the file, or `None`.
    pub fn find_storage_policy(
        &self,
        path: &str,
        size: Option<u64>,
        mod_time: Option<NaiveDateTime>,
    ) -> Result<Option<&PolicyNode>> {
        self.find_storage_policy_at(path, size, mod_time, Local::now().naive_local())
    }

    /// [`find_storage_policy`](Self::find_storage_policy) with thresholds
    /// resolved against `now`.
    ///
    /// Overrides are tried in document order and only the first matching one
    /// is descended into. When none of its own overrides match, that child is
    /// returned itself.
    pub fn find_storage_policy_at(
        &self,
        path: &str,
        size: Option<u64>,
        mod_time: Option<NaiveDateTime>,
        now: NaiveDateTime,
    ) -> Result<Option<&PolicyNode>> {
        let found = self.lookup(path, size, mod_time, now)?;
        match found {
            Some(policy) => debug!(path, %policy, "storage policy found"),
            None => debug!(path, "no storage policy found"),
        }
        Ok(found)
    }

    fn lookup(
        &self,
        path: &str,
        size: Option<u64>,
        mod_time: Option<NaiveDateTime>,
        now: NaiveDateTime,
    ) -> Result<Option<&PolicyNode>> {
        for child in self.overridden_by() {
            if child.matches_at(path, size, mod_time, now)? {
                return child.lookup(path, size, mod_time, now);
            }
        }
        if self.matches_at(path, size, mod_time, now)? {
            Ok(Some(self))
        } else {
            Ok(None)
        }
    }

    /// Every policy in the tree (pre-order) whose storage holds all of
    /// `includes` and none of `excludes`.
    pub fn find_policy_by_storage<I, E>(&self, includes: &[I], excludes: &[E]) -> Vec<&PolicyNode>
    where
        I: AsRef<str>,
        E: AsRef<str>,
    {
        self.iter()
            .map(|(_, node)| node)
            .filter(|node| node.stores_on(includes, excludes))
            .collect()
    }

    /// One line per policy, pre-order, indented four spaces per level.
    pub fn render_tree(&self) -> String {
        let mut out = String::new();
        for (depth, node) in self.iter() {
            let _ = writeln!(out, "{}{}", INDENT.repeat(depth), node);
        }
        out
    }

    /// Pre-order walk yielding `(depth, policy)`; the root has depth 0.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: vec![(0, self)],
        }
    }

    /// Number of policies in the tree, this one included.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always false: a tree holds at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Pre-order iterator returned by [`PolicyNode::iter`].
pub struct Iter<'a> {
    stack: Vec<(usize, &'a PolicyNode)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (usize, &'a PolicyNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.overridden_by().iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}
