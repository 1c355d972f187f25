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

//! Hex color parsing.

use pw_model::Color;

use crate::error::{Error, Result};

/// Parses a hex RGBA color (`#RRGGBBAA`) or RGB color (`#RRGGBB`, alpha
/// defaults to fully opaque).
pub fn parse_color(token: &str, line: usize) -> Result<Color> {
    let hex = token
        .strip_prefix('#')
        .ok_or_else(|| Error::BadColor(line, token.to_string()))?;
    let bad = || Error::BadColor(line, token.to_string());
    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| bad());
    match hex.len() {
        6 => Ok(Color::rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        8 => Ok(Color::rgba(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            channel(&hex[6..8])?,
        )),
        _ => Err(bad()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb() {
        assert_eq!(parse_color("#112233", 1).unwrap(), Color::rgb(0x11, 0x22, 0x33));
    }

    #[test]
    fn parses_rgba() {
        assert_eq!(
            parse_color("#112233AA", 1).unwrap(),
            Color::rgba(0x11, 0x22, 0x33, 0xAA)
        );
    }

    #[test]
    fn rejects_missing_hash() {
        assert!(parse_color("112233", 1).is_err());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(parse_color("#1122", 1).is_err());
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert!(parse_color("#zzzzzz", 1).is_err());
    }
}
