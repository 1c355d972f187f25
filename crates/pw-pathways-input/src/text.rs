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

//! Text artifact rendering: `sequences.txt` and `xpositions.txt`.

use std::collections::HashSet;
use std::fmt::Write as _;

use pw_model::Action;

use crate::instance::{Instantiated, MaterializedInstances};

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Returns the textual key of one materialized occurrence of an action.
///
/// Always bracketed with the instance index, e.g. `a[0]`, unlike
/// [`Action::display_name`] which omits edition `0` — the instance index is
/// meaningful even at `0`, since it disambiguates this occurrence from ones
/// reached via a different precondition.
#[must_use]
pub fn instance_key(action: &Action, instance: u32) -> String {
    let name: String = action.name.chars().filter(|c| !c.is_whitespace()).collect();
    format!("{name}[{instance}]")
}

/// Renders the `xpositions.txt` artifact: one `key xposition` line per
/// distinct pair, first-seen order, starting with the `current` root.
#[must_use]
pub fn xpositions_text(materialized: &MaterializedInstances) -> String {
    let mut seen = HashSet::new();
    let mut output = String::new();

    let root_key = ("current".to_string(), format_xposition(materialized.root_xposition));
    if seen.insert(root_key.clone()) {
        writeln!(output, "{} {}", root_key.0, root_key.1).unwrap();
    }

    for sequence in &materialized.instances {
        for occurrence in sequence {
            let key = instance_key(&occurrence.action, occurrence.instance);
            let position = format_xposition(occurrence.tipping_point_xposition);
            if seen.insert((key.clone(), position.clone())) {
                writeln!(output, "{key} {position}").unwrap();
            }
        }
    }

    output
}

/// Renders the `sequences.txt` artifact: one `from to` line per distinct
/// adjacent pair, first-seen order.
///
/// A length-1 sequence contributes `(current, key_of_only_action)`. A longer
/// sequence contributes that same root edge plus one `(key(aᵢ),
/// key(aᵢ₊₁))` line per adjacent pair.
#[must_use]
pub fn sequences_text(materialized: &MaterializedInstances) -> String {
    let mut seen = HashSet::new();
    let mut output = String::new();

    let mut emit = |from: &str, to: &str, out: &mut String| {
        if seen.insert((from.to_string(), to.to_string())) {
            writeln!(out, "{from} {to}").unwrap();
        }
    };

    for sequence in &materialized.instances {
        let Some(first) = sequence.first() else { continue };
        let first_key = instance_key(&first.action, first.instance);
        emit("current", &first_key, &mut output);

        for pair in sequence.windows(2) {
            let [from, to]: &[Instantiated; 2] = pair.try_into().unwrap();
            let from_key = instance_key(&from.action, from.instance);
            let to_key = instance_key(&to.action, to.instance);
            emit(&from_key, &to_key, &mut output);
        }
    }

    output
}

/// Formats an x-position for textual output, trimming a trailing `.0`.
fn format_xposition(value: f64) -> String {
    if (value - value.trunc()).abs() < f64::EPSILON {
        format!("{}", value.trunc() as i64)
    } else {
        format!("{value}")
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pw_model::{Metric, Sequence};

    use super::*;
    use crate::instance::generate_action_instances;

    fn a(name: &str) -> Action {
        Action::new(name)
    }

    #[test]
    fn single_action_sequence_emits_current_edge_only() {
        let metric = Metric::new("cost");
        let sequences = vec![Sequence::new(vec![a("x")])];
        let materialized =
            generate_action_instances(&sequences, &metric, 0.0, None).unwrap();

        let text = sequences_text(&materialized);
        assert_eq!(text, "current x[0]\n");
    }

    #[test]
    fn chain_sequence_emits_root_and_adjacent_edges() {
        let metric = Metric::new("cost");
        let sequences = vec![Sequence::new(vec![a("x"), a("y"), a("z")])];
        let materialized =
            generate_action_instances(&sequences, &metric, 0.0, None).unwrap();

        let text = sequences_text(&materialized);
        assert_eq!(text, "current x[0]\nx[0] y[0]\ny[0] z[0]\n");
    }

    #[test]
    fn duplicate_edges_across_sequences_are_collapsed() {
        let metric = Metric::new("cost");
        let sequences = vec![
            Sequence::new(vec![a("x"), a("y")]),
            Sequence::new(vec![a("x"), a("y")]),
        ];
        let materialized =
            generate_action_instances(&sequences, &metric, 0.0, None).unwrap();

        let text = sequences_text(&materialized);
        assert_eq!(text, "current x[0]\nx[0] y[0]\n");
    }

    #[test]
    fn xpositions_starts_with_current_root() {
        let metric = Metric::new("cost");
        let sequences = vec![Sequence::new(vec![a("x")])];
        let materialized =
            generate_action_instances(&sequences, &metric, 3.0, None).unwrap();

        let text = xpositions_text(&materialized);
        assert!(text.starts_with("current 3\n"));
    }

    #[test]
    fn instance_key_strips_whitespace_and_brackets_instance_zero() {
        assert_eq!(instance_key(&a("solar panels"), 0), "solarpanels[0]");
    }
}
