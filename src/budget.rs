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

//! Sector budgets for the boot images.

/// Bytes per disk sector.
pub const SECTOR_SIZE: u64 = 512;

/// Sectors reserved for the boot loader image.
pub const LOADER_SECTOR_COUNT: u64 = 4;

/// Sectors reserved for the kernel image.
pub const KERNEL_SECTOR_COUNT: u64 = 100;

pub const LOADER_IMAGE: ImageBudget = ImageBudget::new("loader.bin", LOADER_SECTOR_COUNT, -1);
pub const KERNEL_IMAGE: ImageBudget = ImageBudget::new("kernel.bin", KERNEL_SECTOR_COUNT, -2);

/// Images in the order they are checked. The loader always goes first.
pub const IMAGES: [ImageBudget; 2] = [LOADER_IMAGE, KERNEL_IMAGE];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageBudget {
    pub file_name: &'static str,
    pub sector_count: u64,
    /// Process exit status when the image is over budget. Unix keeps the
    /// low byte, so -1 and -2 surface as 255 and 254.
    pub exit_code: i32,
}

impl ImageBudget {
    pub const fn new(file_name: &'static str, sector_count: u64, exit_code: i32) -> Self {
        Self {
            file_name,
            sector_count,
            exit_code,
        }
    }

    pub const fn max_bytes(&self) -> u64 {
        self.sector_count * SECTOR_SIZE
    }

    /// An image exactly filling its sectors still fits.
    pub const fn exceeded_by(&self, size: u64) -> bool {
        size > self.max_bytes()
    }

    pub const fn headroom(&self, size: u64) -> u64 {
        self.max_bytes().saturating_sub(size)
    }

    pub const fn sectors_used(&self, size: u64) -> u64 {
        size.div_ceil(SECTOR_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_bytes() {
        assert_eq!(LOADER_IMAGE.max_bytes(), 2048);
        assert_eq!(KERNEL_IMAGE.max_bytes(), 51200);
    }

    #[test]
    fn test_boundaries() {
        assert!(!LOADER_IMAGE.exceeded_by(2048));
        assert!(LOADER_IMAGE.exceeded_by(2049));
        assert!(!KERNEL_IMAGE.exceeded_by(51200));
        assert!(KERNEL_IMAGE.exceeded_by(51201));
        assert!(!KERNEL_IMAGE.exceeded_by(0));
    }

    #[test]
    fn test_headroom_and_sectors() {
        assert_eq!(LOADER_IMAGE.headroom(2000), 48);
        assert_eq!(LOADER_IMAGE.headroom(4096), 0);
        assert_eq!(KERNEL_IMAGE.sectors_used(0), 0);
        assert_eq!(KERNEL_IMAGE.sectors_used(512), 1);
        assert_eq!(KERNEL_IMAGE.sectors_used(513), 2);
    }

    #[test]
    fn test_check_order() {
        assert_eq!(IMAGES[0].file_name, "loader.bin");
        assert_eq!(IMAGES[1].file_name, "kernel.bin");
        assert_ne!(IMAGES[0].exit_code, IMAGES[1].exit_code);
        assert!(IMAGES.iter().all(|image| image.exit_code != 0 && image.exit_code != 1));
    }
}
