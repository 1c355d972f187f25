// Copyright (c) 2025-2026 Zensical and contributors

// SPDX-License-Identifier: MIT
// All contributions are certified under the DCO

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NON-INFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.

// ----------------------------------------------------------------------------

//! Sequence generation under a dependency constraint algebra.

use pw_model::{Action, Sequence};

use crate::permutations::Permutations;

// ----------------------------------------------------------------------------
// Enums
// ----------------------------------------------------------------------------

/// Relation an [`ActionDependency`] asserts between one action and a set of
/// others within a candidate permutation.
///
/// `Blocks` and `After` share an identical predicate below. The names
/// suggest different intended semantics (`Blocks` reads as "if `a` appears,
/// `bs` may not appear at all afterwards", a stronger claim than `After`'s
/// "if both appear, `a` comes later"), but nothing in the surveyed behavior
/// distinguishes them, so the equivalence is kept pending confirmation from
/// whoever owns the constraint vocabulary — see `DESIGN.md`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SequenceComparison {
    /// The permutation's first action must be `a`.
    StartsWith,
    /// The permutation's first action must not be `a`.
    DoesntStartWith,
    /// The permutation's last action must be `a`.
    EndsWith,
    /// The permutation's last action must not be `a`.
    DoesntEndWith,
    /// `a` must appear somewhere in the permutation.
    Contains,
    /// `a` must not appear anywhere in the permutation.
    DoesntContain,
    /// If `a` appears, it must come after every `b` in `bs` that appears.
    Blocks,
    /// If `a` appears, it must come after every `b` in `bs` that appears.
    After,
    /// If `a` appears, it must immediately follow every `b` in `bs` that
    /// appears.
    DirectlyAfter,
    /// If `a` appears, it must come before every `b` in `bs` that appears.
    Before,
    /// If `a` appears, it must immediately precede every `b` in `bs` that
    /// appears.
    DirectlyBefore,
}

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// A single ordering constraint on candidate sequences.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionDependency {
    /// The constrained action.
    pub action: Action,
    /// The relation `action` must satisfy.
    pub relation: SequenceComparison,
    /// The other actions the relation is evaluated against.
    pub others: Vec<Action>,
}

impl ActionDependency {
    /// Creates a dependency.
    #[must_use]
    pub fn new(
        action: Action, relation: SequenceComparison, others: Vec<Action>,
    ) -> Self {
        Self { action, relation, others }
    }

    /// Returns whether `permutation` satisfies this dependency.
    ///
    /// Positional relations (`BLOCKS`, `AFTER`, `DIRECTLY_AFTER`, `BEFORE`,
    /// `DIRECTLY_BEFORE`) vacuously hold when `action` is absent from
    /// `permutation`; `others` not present in `permutation` are ignored.
    #[must_use]
    pub fn is_satisfied(&self, permutation: &[Action]) -> bool {
        let index_of = |action: &Action| permutation.iter().position(|x| x == action);

        match self.relation {
            SequenceComparison::StartsWith => {
                permutation.first() == Some(&self.action)
            }
            SequenceComparison::DoesntStartWith => {
                permutation.first() != Some(&self.action)
            }
            SequenceComparison::EndsWith => {
                permutation.last() == Some(&self.action)
            }
            SequenceComparison::DoesntEndWith => {
                permutation.last() != Some(&self.action)
            }
            SequenceComparison::Contains => permutation.contains(&self.action),
            SequenceComparison::DoesntContain => {
                !permutation.contains(&self.action)
            }
            SequenceComparison::Blocks | SequenceComparison::After => {
                let Some(a) = index_of(&self.action) else { return true };
                self.others
                    .iter()
                    .filter_map(index_of)
                    .all(|b| a > b)
            }
            SequenceComparison::DirectlyAfter => {
                let Some(a) = index_of(&self.action) else { return true };
                self.others
                    .iter()
                    .filter_map(index_of)
                    .all(|b| a == b + 1)
            }
            SequenceComparison::Before => {
                let Some(a) = index_of(&self.action) else { return true };
                self.others
                    .iter()
                    .filter_map(index_of)
                    .all(|b| a < b)
            }
            SequenceComparison::DirectlyBefore => {
                let Some(a) = index_of(&self.action) else { return true };
                self.others
                    .iter()
                    .filter_map(index_of)
                    .all(|b| b > 0 && a == b - 1)
            }
        }
    }
}

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Enumerates every admissible sequence over `actions`.
///
/// All permutations of length `1..=max_length` are generated and kept iff
/// every dependency in `dependencies` is satisfied. Output count is bounded
/// by `Σ_{k=1..max_length} n!/(n-k)!`; callers with large `actions` should
/// size `max_length` accordingly, since no pruning happens during
/// enumeration (dependencies are checked per candidate, after the fact, per
/// the generator's design).
#[must_use]
pub fn generate_sequences(
    actions: &[Action], dependencies: &[ActionDependency], max_length: usize,
) -> Vec<Sequence> {
    let mut sequences = Vec::new();
    for k in 1..=max_length.min(actions.len()) {
        for candidate in Permutations::new(actions, k) {
            if dependencies.iter().all(|d| d.is_satisfied(&candidate)) {
                sequences.push(Sequence::new(candidate));
            }
        }
    }
    sequences
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn a(name: &str) -> Action {
        Action::new(name)
    }

    #[test]
    fn starts_with_filters_permutations() {
        let actions = vec![a("a"), a("b"), a("c")];
        let deps = vec![ActionDependency::new(
            a("a"),
            SequenceComparison::StartsWith,
            vec![],
        )];
        let sequences = generate_sequences(&actions, &deps, 3);
        assert!(!sequences.is_empty());
        assert!(sequences.iter().all(|s| s.actions[0] == a("a")));
    }

    #[test]
    fn after_requires_predecessor_when_both_present() {
        let actions = vec![a("a"), a("b")];
        let deps = vec![ActionDependency::new(
            a("b"),
            SequenceComparison::After,
            vec![a("a")],
        )];
        let sequences = generate_sequences(&actions, &deps, 2);
        let orderings: Vec<Vec<&str>> = sequences
            .iter()
            .map(|s| s.actions.iter().map(|x| x.name.as_str()).collect())
            .collect();
        assert!(orderings.contains(&vec!["a", "b"]));
        assert!(!orderings.contains(&vec!["b", "a"]));
        // length-1 sequences vacuously satisfy the relation.
        assert!(orderings.contains(&vec!["a"]));
        assert!(orderings.contains(&vec!["b"]));
    }

    #[test]
    fn directly_after_requires_adjacency() {
        let actions = vec![a("a"), a("b"), a("c")];
        let deps = vec![ActionDependency::new(
            a("c"),
            SequenceComparison::DirectlyAfter,
            vec![a("a")],
        )];
        let sequences = generate_sequences(&actions, &deps, 3);
        for seq in &sequences {
            if let (Some(ia), Some(ic)) = (
                seq.actions.iter().position(|x| *x == a("a")),
                seq.actions.iter().position(|x| *x == a("c")),
            ) {
                assert_eq!(ic, ia + 1);
            }
        }
    }

    #[test]
    fn max_length_bounds_generated_lengths() {
        let actions = vec![a("a"), a("b"), a("c")];
        let sequences = generate_sequences(&actions, &[], 2);
        assert!(sequences.iter().all(|s| s.len() <= 2));
        assert!(sequences.iter().any(|s| s.len() == 2));
    }
}
