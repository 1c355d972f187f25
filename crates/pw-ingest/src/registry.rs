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

//! Action token resolution and combination-consistency tracking.

use std::collections::BTreeMap;

use pw_model::{Action, Edition};

use crate::error::{Error, Result};

/// Form under which an action name has been used so far.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Form {
    /// Used without component syntax.
    Plain,
    /// Used with `name(a & b & ...)` syntax; keeps the edition and the
    /// ordered `(name, edition)` keys of its components, for consistency
    /// checking against later mentions.
    Combination(Edition, Vec<(String, Edition)>),
}

/// Action registry built up while parsing one sequence file.
///
/// Tracks every distinct `(name, edition)` action mentioned so far, plus
/// which [`Form`] each action name was first defined under, so that
/// inconsistent re-mentions can be rejected with [`Error::AmbiguousCombination`].
#[derive(Debug, Default)]
pub struct Registry {
    actions: BTreeMap<(String, Edition), Action>,
    forms: BTreeMap<String, Form>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the registry, returning all actions mentioned, keyed by
    /// identity.
    pub fn into_actions(self) -> BTreeMap<(String, Edition), Action> {
        self.actions
    }

    /// Returns the actions mentioned so far.
    pub fn actions(&self) -> &BTreeMap<(String, Edition), Action> {
        &self.actions
    }

    /// Resolves a plain `(name, edition)` mention, creating the action on
    /// first mention. Fails if the name was already locked to combination
    /// form by an earlier mention.
    pub fn resolve_plain(
        &mut self, name: &str, edition: Edition, line: usize,
    ) -> Result<Action> {
        match self.forms.get(name) {
            Some(Form::Combination(..)) => {
                // A bare mention of a name already defined as a combination
                // simply refers back to it (Scenario D); it only becomes
                // ambiguous if the bare form was registered *first*.
                if let Some(action) = self.actions.get(&(name.to_string(), edition)) {
                    return Ok(action.clone());
                }
                Err(Error::AmbiguousCombination(line, name.to_string()))
            }
            Some(Form::Plain) | None => {
                self.forms.entry(name.to_string()).or_insert(Form::Plain);
                Ok(self
                    .actions
                    .entry((name.to_string(), edition))
                    .or_insert_with(|| Action::with_edition(name, edition))
                    .clone())
            }
        }
    }

    /// Resolves a combination mention `name(edition)(components)`, checking
    /// that any earlier mention of `name` used consistent component syntax.
    pub fn resolve_combination(
        &mut self, name: &str, edition: Edition, components: Vec<Action>, line: usize,
    ) -> Result<Action> {
        let keys: Vec<(String, Edition)> =
            components.iter().map(|a| (a.name.clone(), a.edition)).collect();

        match self.forms.get(name) {
            Some(Form::Plain) => {
                return Err(Error::AmbiguousCombination(line, name.to_string()));
            }
            Some(Form::Combination(existing_edition, existing_keys)) => {
                if *existing_edition != edition || existing_keys != &keys {
                    return Err(Error::AmbiguousCombination(line, name.to_string()));
                }
                if let Some(action) = self.actions.get(&(name.to_string(), edition)) {
                    return Ok(action.clone());
                }
            }
            None => {}
        }

        let action = Action::combination(name, edition, components).map_err(|e| match e {
            // Unreachable via the grammar: the caller always supplies >= 2
            // component tokens before calling this.
            pw_model::Error::TooFewComponents(_) => Error::MalformedLine(line),
            pw_model::Error::DuplicateCombinationComponent(n, c, ed) => {
                Error::DuplicateCombinationComponent(line, n, c, ed)
            }
        })?;

        self.forms
            .insert(name.to_string(), Form::Combination(edition, keys));
        self.actions
            .insert((name.to_string(), edition), action.clone());
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_mention_after_combination_reuses_it() {
        let mut registry = Registry::new();
        let a = registry.resolve_plain("a", 0, 1).unwrap();
        let b = registry.resolve_plain("b", 0, 1).unwrap();
        let combo = registry
            .resolve_combination("c", 0, vec![a, b], 1)
            .unwrap();
        let again = registry.resolve_plain("c", 0, 2).unwrap();
        assert_eq!(combo, again);
    }

    #[test]
    fn plain_then_combination_is_ambiguous() {
        let mut registry = Registry::new();
        registry.resolve_plain("c", 0, 1).unwrap();
        let a = registry.resolve_plain("a", 0, 2).unwrap();
        let b = registry.resolve_plain("b", 0, 2).unwrap();
        assert!(registry.resolve_combination("c", 0, vec![a, b], 2).is_err());
    }

    #[test]
    fn inconsistent_combination_components_are_ambiguous() {
        let mut registry = Registry::new();
        let a = registry.resolve_plain("a", 0, 1).unwrap();
        let b = registry.resolve_plain("b", 0, 1).unwrap();
        let c = registry.resolve_plain("c", 0, 1).unwrap();
        registry
            .resolve_combination("x", 0, vec![a, b], 1)
            .unwrap();
        assert!(registry.resolve_combination("x", 0, vec![c], 2).is_err());
    }
}
