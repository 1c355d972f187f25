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

//! Sequence line parsing.

use std::collections::BTreeMap;

use pw_model::{Action, Edition};

use crate::error::{Error, Result};
use crate::registry::Registry;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Parsed sequence file.
#[derive(Clone, Debug, Default)]
pub struct ParsedSequences {
    /// Transitions, in the order they appeared in the input.
    pub edges: Vec<(Action, Action)>,
    /// Every action mentioned, keyed by identity.
    pub actions: BTreeMap<(String, Edition), Action>,
}

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Parses a sequence file into an ordered list of `(from, to)` transitions.
///
/// Lines are UTF-8, `#`-delimited trailing comments and blank lines are
/// ignored, and each remaining line must split into exactly two
/// whitespace-separated tokens or [`Error::MalformedLine`] is returned.
///
/// # Errors
///
/// Returns [`Error::MalformedLine`] for a line that isn't `FROM WS TO`,
/// [`Error::AmbiguousCombination`] for an action name used inconsistently
/// as a plain action and a combination (or with differing component
/// lists), and [`Error::DuplicateCombinationComponent`] for a combination
/// listing the same component twice.
pub fn parse_sequences(text: &str) -> Result<ParsedSequences> {
    let mut registry = Registry::new();
    let mut edges = Vec::new();

    for (line_no, raw_line) in text.lines().enumerate() {
        let line = line_no + 1;
        let stripped = strip_comment(raw_line).trim();
        if stripped.is_empty() {
            continue;
        }

        let mut tokens = stripped.split_whitespace();
        let from_tok = tokens.next().ok_or(Error::MalformedLine(line))?;
        let to_tok = tokens.next().ok_or(Error::MalformedLine(line))?;
        if tokens.next().is_some() {
            return Err(Error::MalformedLine(line));
        }

        let from = parse_token(from_tok, line, &mut registry)?;
        let to = parse_token(to_tok, line, &mut registry)?;
        edges.push((from, to));
    }

    Ok(ParsedSequences { edges, actions: registry.into_actions() })
}

/// Strips a `#`-delimited end-of-line comment.
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(i) => &line[..i],
        None => line,
    }
}

/// Parses one action token: `name`, `name[k]`, or `name(a & b & ...)`.
fn parse_token(token: &str, line: usize, registry: &mut Registry) -> Result<Action> {
    if let Some(open) = token.find('(') {
        if !token.ends_with(')') {
            return Err(Error::MalformedLine(line));
        }
        let header = &token[..open];
        let (name, edition) = split_name_edition(header, line)?;
        let inner = &token[open + 1..token.len() - 1];

        let mut components = Vec::new();
        for part in inner.split('&') {
            let part = part.trim();
            if part.is_empty() {
                return Err(Error::MalformedLine(line));
            }
            let (cname, cedition) = split_name_edition(part, line)?;
            components.push(registry.resolve_plain(&cname, cedition, line)?);
        }

        registry.resolve_combination(&name, edition, components, line)
    } else {
        let (name, edition) = split_name_edition(token, line)?;
        registry.resolve_plain(&name, edition, line)
    }
}

/// Splits a bare token into `(name, edition)`, defaulting edition to `0`
/// when no `[k]` suffix is present.
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

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_b_single_edge() {
        let parsed = parse_sequences("current a\n").unwrap();
        assert_eq!(parsed.edges.len(), 1);
        assert_eq!(parsed.actions.len(), 2);
        assert_eq!(parsed.edges[0].0.name, "current");
        assert_eq!(parsed.edges[0].1.name, "a");
    }

    #[test]
    fn scenario_c_converging() {
        let text = "current a\ncurrent b\ncurrent c\na d\nb d\nc d\n";
        let parsed = parse_sequences(text).unwrap();
        assert_eq!(parsed.actions.len(), 5);
        assert_eq!(parsed.edges.len(), 6);
    }

    #[test]
    fn scenario_d_combination_resolves_to_shared_action() {
        let text = "current a\ncurrent b\na c(a & b)\nb c\n";
        let parsed = parse_sequences(text).unwrap();
        let c = &parsed.actions[&("c".to_string(), 0)];
        assert!(c.is_combination());
        assert_eq!(parsed.edges[2].1, *c);
        assert_eq!(parsed.edges[3].1, *c);
    }

    #[test]
    fn scenario_e_ambiguous_combination_rejected() {
        let text = "current a\ncurrent b\nb c\na c(a & b)\n";
        assert_eq!(
            parse_sequences(text),
            Err(Error::AmbiguousCombination(4, "c".to_string()))
        );
    }

    #[test]
    fn scenario_f_duplicate_component_rejected() {
        assert_eq!(
            parse_sequences("current a(b & b)\n"),
            Err(Error::DuplicateCombinationComponent(
                1,
                "a".to_string(),
                "b".to_string(),
                0
            ))
        );
    }

    #[test]
    fn scenario_f_distinct_editions_accepted() {
        let parsed = parse_sequences("current a(a[1] & a[2])\n").unwrap();
        assert!(parsed.actions[&("a".to_string(), 0)].is_combination());
    }

    #[test]
    fn scenario_g_malformed_line_too_many_tokens() {
        assert_eq!(parse_sequences("current a b\n"), Err(Error::MalformedLine(1)));
    }

    #[test]
    fn scenario_g_malformed_line_too_few_tokens() {
        assert_eq!(parse_sequences("current\n"), Err(Error::MalformedLine(1)));
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let text = "# a comment\n\ncurrent a # trailing\n";
        let parsed = parse_sequences(text).unwrap();
        assert_eq!(parsed.edges.len(), 1);
    }
}
