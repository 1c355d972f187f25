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

//! Atomic text-artifact writing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Writes `sequences.txt` and `xpositions.txt` into `dir`.
///
/// Per §7's "writers stage to a temporary and rename" requirement, each file
/// is written to a sibling `.tmp` path first and only renamed into place once
/// fully written, so a failure partway through never leaves a truncated
/// artifact at the final path.
///
/// # Errors
///
/// Returns [`Error::WriteFailure`] naming the failing path if either file
/// can't be written or renamed.
pub fn write_pathway_input_files(
    dir: &Path, sequences_text: &str, xpositions_text: &str,
) -> Result<()> {
    write_atomic(&dir.join("sequences.txt"), sequences_text)?;
    write_atomic(&dir.join("xpositions.txt"), xpositions_text)?;
    Ok(())
}

/// Writes `content` to `path` via a temporary file and rename.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let tmp = tmp_path(path);
    fs::write(&tmp, content).map_err(|source| Error::WriteFailure {
        path: path.to_path_buf(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| Error::WriteFailure {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns the temporary sibling path used while staging a write to `path`.
fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_both_files_and_leaves_no_tmp_behind() {
        let dir = std::env::temp_dir().join(format!(
            "pw-pathways-input-test-{:?}",
            std::thread::current().id()
        ));
        fs::create_dir_all(&dir).unwrap();

        write_pathway_input_files(&dir, "current x[0]\n", "current 0\n").unwrap();

        assert_eq!(fs::read_to_string(dir.join("sequences.txt")).unwrap(), "current x[0]\n");
        assert_eq!(fs::read_to_string(dir.join("xpositions.txt")).unwrap(), "current 0\n");
        assert!(!dir.join("sequences.txt.tmp").exists());
        assert!(!dir.join("xpositions.txt.tmp").exists());

        fs::remove_dir_all(&dir).ok();
    }
}
