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

//! Pathway-input generator.
//!
//! Turns filtered [`Sequence`][]s into materialized action instances and the
//! two textual artifacts consumed by the map plotter: `sequences.txt` and
//! `xpositions.txt`. Three concerns live here:
//!
//! - Instance numbering, so repeated occurrences of the same action reached
//!   via different preconditions are told apart ([`generate_action_instances`]).
//! - Scenario time interpolation, turning a cumulative metric value into a
//!   calendar position when a scenario is available ([`interpolate_time`]).
//! - Atomic text rendering and writing
//!   ([`sequences_text`], [`xpositions_text`], [`write_pathway_input_files`]).
//!
//! [`Sequence`]: pw_model::Sequence

mod error;
mod instance;
mod interpolate;
mod io;
mod text;

pub use error::{Error, Result};
pub use instance::{
    generate_action_instances, require_time_series, Instantiated, MaterializedInstances,
};
pub use interpolate::interpolate_time;
pub use io::write_pathway_input_files;
pub use text::{instance_key, sequences_text, xpositions_text};
