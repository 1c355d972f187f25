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

//! Action.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use crate::metric::{Metric, MetricValue};

// ----------------------------------------------------------------------------
// Types
// ----------------------------------------------------------------------------

/// Action edition.
///
/// A non-negative integer disambiguating multiple uses of the same action
/// name. Edition `0` denotes the default edition, and is never rendered as a
/// suffix in textual or display form.
pub type Edition = u32;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Color.
///
/// RGBA color, parsed from the hex notation `#RRGGBBAA` or `#RRGGBB` (in which
/// case alpha defaults to fully opaque). Used by [`ActionStyle`] and carried
/// through to the rendering payload emitted by the layout engine; this crate
/// never interprets the color beyond holding it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Creates an opaque color from red, green and blue channels.
    #[inline]
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Creates a color from red, green, blue and alpha channels.
    #[inline]
    #[must_use]
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

// ----------------------------------------------------------------------------

/// Action style.
///
/// Styling record carried by an [`Action`], holding the presentation metadata
/// that the layout engine forwards to the rendering payload without
/// interpreting it. Neither field is required by the pipeline itself.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionStyle {
    /// Color, if set via the style format.
    pub color: Option<Color>,
    /// Icon name, if set.
    pub icon: Option<String>,
}

// ----------------------------------------------------------------------------

/// Action.
///
/// A long-lived intervention identified by `(name, edition)`. Two actions are
/// equal, hash identically and compare as the same key in dedup maps iff their
/// name and edition match — see the [`PartialEq`], [`Eq`] and [`Hash`]
/// implementations below, which deliberately ignore style and metric data so
/// that re-mentioning an action in an input (e.g., with an updated style line)
/// never produces a distinct identity.
///
/// An [`ActionCombination`][] is not a separate type: it is an [`Action`] whose
/// [`Action::components`] is non-empty, i.e., a composite action whose effect
/// is the joint application of its components. The [`Action::combination`]
/// constructor enforces the invariant that a combination lists at least two
/// components, with no two components sharing `(name, edition)`.
///
/// [`ActionCombination`]: crate#actioncombination
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Action {
    /// Action name.
    pub name: String,
    /// Action edition, 0 denotes the default.
    pub edition: Edition,
    /// Styling record.
    pub style: ActionStyle,
    /// Metric data.
    pub metrics: BTreeMap<Metric, MetricValue>,
    /// Component actions, non-empty only for combinations.
    components: Vec<Action>,
}

// ----------------------------------------------------------------------------
// Enums
// ----------------------------------------------------------------------------

/// Action error.
#[derive(Clone, Debug, ThisError, PartialEq, Eq)]
pub enum Error {
    /// A combination was constructed with fewer than two components.
    #[error("action combination `{0}` must have at least two components")]
    TooFewComponents(String),

    /// A combination lists the same `(name, edition)` component twice.
    #[error(
        "action combination `{0}` lists component `{1}` (edition {2}) more \
         than once"
    )]
    DuplicateCombinationComponent(String, String, Edition),
}

/// Action result.
pub type Result<T = Action> = std::result::Result<T, Error>;

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Action {
    /// Creates a plain action with the default edition.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_edition(name, 0)
    }

    /// Creates a plain action with the given edition.
    #[must_use]
    pub fn with_edition(name: impl Into<String>, edition: Edition) -> Self {
        Self {
            name: name.into(),
            edition,
            style: ActionStyle::default(),
            metrics: BTreeMap::new(),
            components: Vec::new(),
        }
    }

    /// Creates an action combination from its ordered component actions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooFewComponents`] if fewer than two components are
    /// given, and [`Error::DuplicateCombinationComponent`] if two components
    /// share the same `(name, edition)` identity, per the edition-uniqueness
    /// invariant: `a(a[1] & a[2])` is legal, `a(b & b)` is not.
    pub fn combination(
        name: impl Into<String>, edition: Edition, components: Vec<Action>,
    ) -> Result {
        let name = name.into();
        if components.len() < 2 {
            return Err(Error::TooFewComponents(name));
        }
        for (i, a) in components.iter().enumerate() {
            for b in &components[..i] {
                if a.name == b.name && a.edition == b.edition {
                    return Err(Error::DuplicateCombinationComponent(
                        name,
                        a.name.clone(),
                        a.edition,
                    ));
                }
            }
        }
        Ok(Self {
            name,
            edition,
            style: ActionStyle::default(),
            metrics: BTreeMap::new(),
            components,
        })
    }

    /// Returns whether this action is a combination of other actions.
    #[inline]
    #[must_use]
    pub fn is_combination(&self) -> bool {
        !self.components.is_empty()
    }

    /// Returns the ordered component actions, if this is a combination.
    #[inline]
    #[must_use]
    pub fn components(&self) -> Option<&[Action]> {
        self.is_combination().then_some(&self.components)
    }

    /// Returns the `(name, edition)` identity of this action.
    #[inline]
    #[must_use]
    pub fn key(&self) -> (&str, Edition) {
        (&self.name, self.edition)
    }

    /// Returns the display name, e.g. `current`, `a`, `f[2]`.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.edition == 0 {
            self.name.clone()
        } else {
            format!("{}[{}]", self.name, self.edition)
        }
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl PartialEq for Action {
    /// Compares two actions by `(name, edition)` identity only.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.edition == other.edition
    }
}

impl Eq for Action {}

impl Hash for Action {
    /// Hashes an action by `(name, edition)` identity only.
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.edition.hash(state);
    }
}

impl PartialOrd for Action {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Action {
    /// Orders actions by `(name, edition)` identity, for deterministic
    /// display and iteration where no other order is mandated.
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (&self.name, self.edition).cmp(&(&other.name, other.edition))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_are_equal_by_name_and_edition_only() {
        let mut a = Action::with_edition("f", 1);
        a.style.icon = Some("tree".into());
        let b = Action::with_edition("f", 1);
        assert_eq!(a, b);
    }

    #[test]
    fn actions_differ_by_edition() {
        assert_ne!(Action::with_edition("f", 1), Action::with_edition("f", 2));
    }

    #[test]
    fn combination_requires_two_components() {
        let only = vec![Action::new("a")];
        assert_eq!(
            Action::combination("c", 0, only),
            Err(Error::TooFewComponents("c".into()))
        );
    }

    #[test]
    fn combination_rejects_duplicate_component_identity() {
        let components = vec![Action::new("b"), Action::new("b")];
        assert_eq!(
            Action::combination("a", 0, components),
            Err(Error::DuplicateCombinationComponent(
                "a".into(),
                "b".into(),
                0
            ))
        );
    }

    #[test]
    fn combination_allows_distinct_editions_of_same_name() {
        let components =
            vec![Action::with_edition("a", 1), Action::with_edition("a", 2)];
        assert!(Action::combination("a", 0, components).is_ok());
    }

    #[test]
    fn display_name_omits_default_edition() {
        assert_eq!(Action::new("current").display_name(), "current");
        assert_eq!(
            Action::with_edition("current", 1).display_name(),
            "current[1]"
        );
    }
}
