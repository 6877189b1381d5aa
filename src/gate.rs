// NØNOS Operating System
// Copyright (C) 2026 NØNOS Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Ordered size checks over the boot images.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::budget::{ImageBudget, IMAGES, SECTOR_SIZE};

#[derive(Debug)]
pub enum GateError {
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, .. } => write!(f, "failed to read size of {}", path.display()),
        }
    }
}

impl std::error::Error for GateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// An image that does not fit in its sectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Oversize {
    pub file_name: &'static str,
    pub size: u64,
    pub sector_count: u64,
    pub exit_code: i32,
}

impl Oversize {
    fn new(image: &ImageBudget, size: u64) -> Self {
        Self {
            file_name: image.file_name,
            size,
            sector_count: image.sector_count,
            exit_code: image.exit_code,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }
}

impl fmt::Display for Oversize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} size {} > {} * {}",
            self.file_name, self.size, self.sector_count, SECTOR_SIZE
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Oversize(Oversize),
}

pub struct SizeGate {
    dir: PathBuf,
}

impl SizeGate {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn images(&self) -> &'static [ImageBudget] {
        &IMAGES
    }

    pub fn image_size(&self, image: &ImageBudget) -> Result<u64, GateError> {
        let path = self.dir.join(image.file_name);
        fs::metadata(&path)
            .map(|meta| meta.len())
            .map_err(|source| GateError::Io { path, source })
    }

    /// Checks each image in order and stops at the first one over budget.
    /// Later images are not touched once an earlier one fails.
    pub fn check(&self) -> Result<Verdict, GateError> {
        for image in self.images() {
            let size = self.image_size(image)?;
            if image.exceeded_by(size) {
                debug!(
                    image = image.file_name,
                    size,
                    max = image.max_bytes(),
                    "image over budget"
                );
                return Ok(Verdict::Oversize(Oversize::new(image, size)));
            }
            debug!(
                image = image.file_name,
                size,
                sectors = image.sectors_used(size),
                budget = image.sector_count,
                headroom = image.headroom(size),
                "image fits"
            );
        }
        Ok(Verdict::Pass)
    }
}
