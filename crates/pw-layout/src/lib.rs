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

//! Pathway map layout engines.
//!
//! Two layouts share the [`Position`]/[`PositionByNode`] output shape:
//!
//! - [`default_layout`] — diagnostic layout, ignores tipping points.
//! - [`classic_layout`] — metro-style layout used for production output,
//!   stacking one horizontal line per distinct action and placing transitions
//!   at their tipping points.
//!
//! Both read node coordinates from a separate map rather than mutating the
//! [`pw_pathway::PathwayMap`] itself, so the graph stays immutable to
//! consumers per the crate's concurrency model.

mod classic;
mod default;
mod position;
mod util;

pub use classic::{classic_layout, OverlapSpread};
pub use default::default_layout;
pub use position::{Position, PositionByNode};
pub use util::{action_level_by_first_occurrence, distribute, group_overlapping_regions};
