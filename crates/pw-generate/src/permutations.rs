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

//! Lazy k-permutation enumeration.

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Iterator over all length-`k` permutations of a slice, in lexicographic
/// order of index choice.
///
/// Built on an explicit stack of chosen indices rather than recursive
/// backtracking, so that generation for large `items`/`k` doesn't risk
/// overflowing the call stack; each [`Iterator::next`] call produces exactly
/// one permutation without materializing the rest, satisfying the generator's
/// enumerate-and-test streaming requirement.
pub struct Permutations<'a, T> {
    items: &'a [T],
    k: usize,
    used: Vec<bool>,
    stack: Vec<usize>,
    cursor: Vec<usize>,
    started: bool,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl<'a, T> Permutations<'a, T> {
    /// Creates an iterator over all length-`k` permutations of `items`.
    pub fn new(items: &'a [T], k: usize) -> Self {
        Self {
            items,
            k,
            used: vec![false; items.len()],
            stack: Vec::with_capacity(k),
            cursor: vec![0; k.max(1)],
            started: false,
        }
    }
}

impl<T: Clone> Iterator for Permutations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.k == 0 {
            if self.started {
                return None;
            }
            self.started = true;
            return Some(Vec::new());
        }
        if self.started {
            // Undo the previously yielded leaf so the search can resume.
            if let Some(last) = self.stack.pop() {
                self.used[last] = false;
            }
        }
        self.started = true;

        loop {
            let depth = self.stack.len();
            if depth == self.k {
                return Some(self.stack.iter().map(|&i| self.items[i].clone()).collect());
            }

            let mut c = self.cursor[depth];
            while c < self.items.len() && self.used[c] {
                c += 1;
            }

            if c < self.items.len() {
                self.used[c] = true;
                self.stack.push(c);
                self.cursor[depth] = c + 1;
                if depth + 1 == self.cursor.len() {
                    self.cursor.push(0);
                } else {
                    self.cursor[depth + 1] = 0;
                }
            } else {
                self.cursor[depth] = 0;
                if depth == 0 {
                    return None;
                }
                let last = self.stack.pop().expect("depth > 0 implies a chosen index");
                self.used[last] = false;
            }
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_zero_yields_one_empty_permutation() {
        let items = [1, 2, 3];
        let all: Vec<Vec<i32>> = Permutations::new(&items, 0).collect();
        assert_eq!(all, vec![Vec::<i32>::new()]);
    }

    #[test]
    fn length_one_yields_each_item_once() {
        let items = ['a', 'b', 'c'];
        let all: Vec<Vec<char>> = Permutations::new(&items, 1).collect();
        assert_eq!(all, vec![vec!['a'], vec!['b'], vec!['c']]);
    }

    #[test]
    fn full_length_count_matches_factorial() {
        let items = [1, 2, 3, 4];
        let all: Vec<Vec<i32>> = Permutations::new(&items, 4).collect();
        assert_eq!(all.len(), 24);
        assert_eq!(all.iter().collect::<std::collections::HashSet<_>>().len(), 24);
    }

    #[test]
    fn partial_length_count_matches_falling_factorial() {
        let items = [1, 2, 3, 4, 5];
        let all: Vec<Vec<i32>> = Permutations::new(&items, 2).collect();
        // 5 * 4 = 20 distinct ordered pairs.
        assert_eq!(all.len(), 20);
    }
}
