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

//! Style line parsing.

use std::collections::BTreeMap;

use pw_model::{Action, Edition};

use crate::color::parse_color;
use crate::error::{Error, Result};

/// Applies a style file to an already-parsed action set, setting each
/// mentioned action's [`Action::style`][pw_model::Action] color in place.
///
/// # Errors
///
/// Returns [`Error::MalformedLine`] if a line doesn't split into exactly
/// two tokens, [`Error::UnknownAction`] if the named action wasn't present
/// in `actions`, and [`Error::BadColor`] if the color token fails to parse.
pub fn apply_styles(
    actions: &mut BTreeMap<(String, Edition), Action>, text: &str,
) -> Result<()> {
    for (line_no, raw_line) in text.lines().enumerate() {
        let line = line_no + 1;
        let stripped = match raw_line.find('#') {
            Some(i) => &raw_line[..i],
            None => raw_line,
        }
        .trim();
        if stripped.is_empty() {
            continue;
        }

        let mut tokens = stripped.split_whitespace();
        let name_tok = tokens.next().ok_or(Error::MalformedLine(line))?;
        let color_tok = tokens.next().ok_or(Error::MalformedLine(line))?;
        if tokens.next().is_some() {
            return Err(Error::MalformedLine(line));
        }

        let (name, edition) = split_name_edition(name_tok, line)?;
        let color = parse_color(color_tok, line)?;

        let action = actions
            .get_mut(&(name.clone(), edition))
            .ok_or_else(|| Error::UnknownAction(line, name_tok.to_string()))?;
        action.style.color = Some(color);
    }
    Ok(())
}

/// Splits a bare token into `(name, edition)`, defaulting edition to `0`.
fn split_name_edition(token: &str, line: usize) -> Result<(String, Edition)> {
    match token.find('[') {
        Some(open) => {
            if !token.ends_with(']') || open == 0 {
                return Err(Error::MalformedLine(line));
            }
            let name = token[..open].to_string();
            let digits = &token[open + 1..token.len() - 1];
            let edition: Edition =
                digits.parse().map_err(|_| Error::MalformedLine(line))?;
            Ok((name, edition))
        }
        None => Ok((token.to_string(), 0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequences::parse_sequences;

    #[test]
    fn applies_color_to_known_action() {
        let parsed = parse_sequences("current a\n").unwrap();
        let mut actions = parsed.actions;
        apply_styles(&mut actions, "a #112233\n").unwrap();
        assert_eq!(
            actions[&("a".to_string(), 0)].style.color,
            Some(pw_model::Color::rgb(0x11, 0x22, 0x33))
        );
    }

    #[test]
    fn rejects_unknown_action() {
        let mut actions = BTreeMap::new();
        assert_eq!(
            apply_styles(&mut actions, "a #112233\n"),
            Err(Error::UnknownAction(1, "a".to_string()))
        );
    }

    #[test]
    fn rejects_bad_color() {
        let parsed = parse_sequences("current a\n").unwrap();
        let mut actions = parsed.actions;
        assert!(apply_styles(&mut actions, "a notacolor\n").is_err());
    }
}
