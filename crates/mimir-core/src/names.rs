// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! File and anchor names derived from assignment names.

use std::collections::HashSet;

const FALLBACK_NAME: &str = "assignment";

/// Longest sanitized name, in bytes. Leaves room under the usual 255-byte
/// file name limit for a `_{n}` counter and an extension.
pub const MAX_NAME_LEN: usize = 100;

/// Replace every character that is unsafe in a file name with `_`.
///
/// Letters and digits of any script are kept, as are `-`, `_` and `.`.
/// Leading and trailing `_`/`.` are trimmed so results are never hidden files
/// or `..`. Results are cut to at most [`MAX_NAME_LEN`] bytes on a character
/// boundary.
pub fn sanitize(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = truncate(replaced.trim_matches(|c| c == '_' || c == '.'))
        .trim_end_matches(|c| c == '_' || c == '.');
    if trimmed.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

fn truncate(name: &str) -> &str {
    if name.len() <= MAX_NAME_LEN {
        return name;
    }
    let mut end = MAX_NAME_LEN;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}

/// A set of names already in use. Comparison ignores case so the output is
/// also collision-free on case-insensitive filesystems.
#[derive(Default)]
pub struct UniqueNames {
    taken: HashSet<String>,
}

impl UniqueNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a name as used without returning it.
    pub fn reserve(&mut self, name: &str) {
        self.taken.insert(name.to_lowercase());
    }

    /// Claim `name` if it is free. Returns whether it was.
    pub fn try_claim(&mut self, name: &str) -> bool {
        self.taken.insert(name.to_lowercase())
    }

    /// Claim `base`, or the first of `base_2`, `base_3`, ... that is free.
    pub fn claim(&mut self, base: &str) -> String {
        if self.try_claim(base) {
            return base.to_string();
        }
        let mut n = 2;
        loop {
            let candidate = format!("{base}_{n}");
            if self.try_claim(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Map assignment names, in course order, to distinct sanitized names.
///
/// The result depends only on the sequence of names and `reserved`, so
/// repeated runs over the same course produce the same mapping.
pub fn unique_names<'a>(
    names: impl IntoIterator<Item = &'a str>,
    reserved: &[&str],
) -> Vec<String> {
    let mut taken = UniqueNames::new();
    for name in reserved {
        taken.reserve(name);
    }
    names
        .into_iter()
        .map(|name| taken.claim(&sanitize(name)))
        .collect()
}
