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

use std::fs::File;
use std::fs::OpenOptions;
use std::fs::create_dir_all;
use std::io::ErrorKind as IoErrorKind;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use mimir_core::ErrorKind;
use mimir_core::ErrorReport;
use mimir_core::Fallible;

/// Where a writer puts its output and whether it may replace existing files.
#[derive(Clone, Debug)]
pub struct OutputContext {
    root: PathBuf,
    overwrite: bool,
}

impl OutputContext {
    pub fn new(root: impl Into<PathBuf>, overwrite: bool) -> Self {
        Self {
            root: root.into(),
            overwrite,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// A context rooted at a subdirectory, with the same policy.
    pub fn child(&self, name: &str) -> Self {
        Self {
            root: self.root.join(name),
            overwrite: self.overwrite,
        }
    }

    /// Create the root directory if it does not exist.
    pub fn ensure_root(&self) -> Fallible<()> {
        create_dir_all(&self.root)?;
        Ok(())
    }

    /// Write a file at a path relative to the root, creating intermediate
    /// directories. Returns the full path written.
    pub fn write_file(&self, relative: &Path, contents: &str) -> Fallible<PathBuf> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            create_dir_all(parent)?;
        }
        write_file(&path, contents, self.overwrite)?;
        Ok(path)
    }
}

/// Write `contents` to `path`. When `overwrite` is false the file is created
/// with `create_new`, so an existing file fails with an overwrite error
/// before a single byte of it is touched.
pub fn write_file(path: &Path, contents: &str, overwrite: bool) -> Fallible<()> {
    let mut file = if overwrite {
        File::create(path)?
    } else {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| {
                if e.kind() == IoErrorKind::AlreadyExists {
                    ErrorReport::new(
                        ErrorKind::Overwrite,
                        format!(
                            "'{}' already exists. Use --overwrite to replace it.",
                            path.display()
                        ),
                    )
                } else {
                    e.into()
                }
            })?
    };
    file.write_all(contents.as_bytes())?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}
