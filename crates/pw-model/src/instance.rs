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

//! Action instances.
//!
//! While [`Action`] models an intervention's identity and style, the types in
//! this module model its placement on a timeline once it has been fixed into
//! a pathway: the tipping point it begins or ends at, which occurrence (for
//! actions reused across a pathway map) it represents, and the begin/end pair
//! used to draw a horizontal segment in the layout engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::metric::{Metric, MetricValue};

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Action instance.
///
/// One occurrence of an action within a pathway map, numbered by
/// [`ActionInstance::instance`] when the same action identity recurs across
/// multiple pathways (see `pw-pathways-input`'s instance numbering). Carries
/// the tipping point at which this occurrence begins, and any metric data
/// specific to this occurrence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionInstance {
    /// The underlying action.
    pub action: Action,
    /// Zero-based occurrence number among instances sharing this action's
    /// identity.
    pub instance: u32,
    /// Tipping point at which this occurrence begins.
    pub tipping_point: f64,
    /// Metric data specific to this occurrence.
    pub metrics: BTreeMap<Metric, MetricValue>,
}

impl ActionInstance {
    /// Creates an action instance at the given tipping point.
    #[must_use]
    pub fn new(action: Action, instance: u32, tipping_point: f64) -> Self {
        Self { action, instance, tipping_point, metrics: BTreeMap::new() }
    }
}

// ----------------------------------------------------------------------------

/// Action begin marker.
///
/// Pairs an action with the tipping point at which it begins, without the
/// occurrence bookkeeping of [`ActionInstance`]. Used by the sequence
/// generator, which reasons about tipping points before instances are
/// numbered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionBegin {
    /// The underlying action.
    pub action: Action,
    /// Tipping point at which the action begins.
    pub tipping_point: f64,
}

/// Action end marker.
///
/// Pairs an action with the tipping point at which it ends, i.e. is
/// superseded by whatever follows it in a sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionEnd {
    /// The underlying action.
    pub action: Action,
    /// Tipping point at which the action ends.
    pub tipping_point: f64,
}

// ----------------------------------------------------------------------------

/// Action conversion.
///
/// An edge recorded while folding sequences into a sequence graph: a
/// transition from one action to the next, identified by the `(name,
/// edition)` pair of each endpoint so that the same conversion recurring
/// across multiple sequences collapses to a single graph edge.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionConversion {
    /// Action converted from.
    pub from: Action,
    /// Action converted to.
    pub to: Action,
}

impl ActionConversion {
    /// Creates a conversion between two actions.
    #[inline]
    #[must_use]
    pub fn new(from: Action, to: Action) -> Self {
        Self { from, to }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_compare_by_action_identity() {
        let a = ActionConversion::new(Action::new("a"), Action::new("b"));
        let b = ActionConversion::new(Action::new("a"), Action::new("b"));
        assert_eq!(a, b);
    }

    #[test]
    fn conversions_ignore_style_differences() {
        let mut from = Action::new("a");
        from.style.icon = Some("tree".into());
        let a = ActionConversion::new(from, Action::new("b"));
        let b = ActionConversion::new(Action::new("a"), Action::new("b"));
        assert_eq!(a, b);
    }

    #[test]
    fn instance_numbers_distinguish_recurring_actions() {
        let first = ActionInstance::new(Action::new("a"), 0, 10.0);
        let second = ActionInstance::new(Action::new("a"), 1, 25.0);
        assert_ne!(first, second);
    }
}
