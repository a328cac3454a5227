// SPDX-License-Identifier: GPL-3.0-only

//! Configuration records for the three maintenance operations.
//!
//! Every field maps to one tool flag or positional operand. Fields left at
//! their default (empty string, `false`, `None`) emit nothing, so a
//! default record renders to an empty argument vector. Numeric flags are
//! `Option<u64>` because "present with value zero" and "absent" are
//! different argument vectors.

use crate::args::{ArgSpec, ToArgs};

/// Options for creating an ext4 filesystem with `mke2fs`.
#[derive(Debug, Default, Clone)]
pub struct CreateOptions {
    /// Device to create the filesystem on.
    pub device: String,
    /// Requested filesystem size; defaults to the whole device.
    pub size: String,
    /// Scan the device for bad blocks first (`-c`).
    pub check_for_bad_blocks: bool,
    /// Block size in bytes (`-b`); 1024, 2048 or 4096.
    pub block_size: Option<u64>,
    /// Cluster size in bytes for bigalloc filesystems (`-C`).
    pub cluster_size: Option<u64>,
    /// Bytes/inode ratio (`-i`); should not go below the block size.
    pub bytes_per_inode: Option<u64>,
    /// On-disk inode size in bytes (`-I`).
    pub inode_size: Option<u64>,
    /// Comma-separated journal options (`-J`).
    pub journal_options: String,
    /// Block groups packed into one flex_bg group (`-G`).
    pub flex_groups: Option<u64>,
    /// Override the default inode count (`-N`).
    pub inode_count: Option<u64>,
    /// Copy this directory's contents into the new filesystem (`-d`).
    pub root_directory: String,
    /// Percentage of blocks reserved for the super-user (`-m`).
    pub reserved_blocks_percentage: Option<u64>,
    /// Override the creator OS field (`-o`).
    pub creator_os: String,
    /// Blocks per block group (`-g`).
    pub blocks_per_group: Option<u64>,
    /// Volume label, at most 16 bytes (`-L`).
    pub label: String,
    /// Directory the filesystem was last mounted on (`-M`).
    pub last_mounted_dir: String,
    /// Comma-separated feature list (`-O`).
    pub features: String,
    /// Filesystem revision level (`-r`).
    pub revision: Option<u64>,
    /// Comma-separated extended options (`-E`).
    pub extended_options: String,
    /// Usage type: floppy, small or default (`-T`).
    pub usage_type: String,
    /// Filesystem UUID (`-U`).
    pub uuid: String,
    /// Kernel behavior on errors: continue, remount-ro or panic (`-e`).
    pub error_behavior: String,
    /// Back up overwritten blocks to this undo file (`-z`).
    pub undo_file: String,
    /// Create an ext3-style journal (`-j`).
    pub journal: bool,
    /// Go through the motions without writing anything (`-n`).
    pub dry_run: bool,
    /// Use direct I/O when writing to the device (`-D`).
    pub direct_io: bool,
    /// Create the filesystem even if the device looks in use (`-F`).
    pub force: bool,
    /// Write superblocks and group descriptors only (`-S`).
    pub superblocks_only: bool,
}

impl ToArgs for CreateOptions {
    fn to_args(&self) -> ArgSpec {
        let mut spec = ArgSpec::new();
        spec.positional(0, &self.device)
            .positional(1, &self.size)
            .switch('c', self.check_for_bad_blocks)
            .numeric('b', self.block_size)
            .numeric('C', self.cluster_size)
            .numeric('i', self.bytes_per_inode)
            .numeric('I', self.inode_size)
            .text('J', &self.journal_options)
            .numeric('G', self.flex_groups)
            .numeric('N', self.inode_count)
            .text('d', &self.root_directory)
            .numeric('m', self.reserved_blocks_percentage)
            .text('o', &self.creator_os)
            .numeric('g', self.blocks_per_group)
            .text('L', &self.label)
            .text('M', &self.last_mounted_dir)
            .text('O', &self.features)
            .numeric('r', self.revision)
            .text('E', &self.extended_options)
            .text('T', &self.usage_type)
            .text('U', &self.uuid)
            .text('e', &self.error_behavior)
            .text('z', &self.undo_file)
            .switch('j', self.journal)
            .switch('n', self.dry_run)
            .switch('D', self.direct_io)
            .switch('F', self.force)
            .switch('S', self.superblocks_only);
        spec
    }
}

/// Options for resizing an ext4 filesystem with `resize2fs`.
#[derive(Debug, Default, Clone)]
pub struct ResizeOptions {
    /// Device holding the filesystem to resize.
    pub device: String,
    /// Target size; defaults to filling the device.
    pub size: String,
    /// Skip safety checks (`-f`).
    pub force: bool,
    /// Flush the device's buffer cache first (`-F`).
    pub flush: bool,
    /// Shrink to the minimum possible size (`-M`).
    pub shrink: bool,
    /// Enable the 64-bit feature (`-b`).
    pub enable_64bit: bool,
    /// Disable the 64-bit feature (`-s`).
    pub disable_64bit: bool,
    /// RAID stride in filesystem blocks (`-S`).
    pub raid_stride: Option<u64>,
    /// Back up overwritten blocks to this undo file (`-z`).
    pub undo_file: String,
}

impl ToArgs for ResizeOptions {
    fn to_args(&self) -> ArgSpec {
        let mut spec = ArgSpec::new();
        spec.positional(0, &self.device)
            .positional(1, &self.size)
            .switch('f', self.force)
            .switch('F', self.flush)
            .switch('M', self.shrink)
            .switch('b', self.enable_64bit)
            .switch('s', self.disable_64bit)
            .numeric('S', self.raid_stride)
            .text('z', &self.undo_file);
        spec
    }
}

/// Options for checking an ext4 filesystem with `e2fsck`.
#[derive(Debug, Default, Clone)]
pub struct CheckOptions {
    /// Device holding the filesystem to check.
    pub device: String,
    /// Automatically apply safe repairs without prompting (`-p`).
    pub preen: bool,
    /// Read-only check; answer no to every prompt (`-n`).
    pub no_fix: bool,
    /// Scan for bad blocks (`-c`).
    pub check_for_bad_blocks: bool,
    /// Append to the existing bad blocks list (`-k`).
    pub append_bad_blocks: bool,
    /// Append bad blocks read from this file (`-l`).
    pub append_bad_blocks_file: String,
    /// Replace the bad blocks list with this file's contents (`-L`).
    pub bad_blocks_file: String,
    /// Check even if the filesystem seems clean (`-f`).
    pub force: bool,
    /// Optimize directories (`-D`).
    pub optimize_directories: bool,
    /// Flush the device's buffer cache first (`-F`).
    pub flush: bool,
    /// Use an alternative superblock (`-b`).
    pub superblock: Option<u64>,
    /// Block size of the filesystem (`-B`).
    pub block_size: Option<u64>,
    /// External journal device (`-j`).
    pub external_journal: String,
    /// Comma-separated extended options (`-E`).
    pub extended_options: String,
    /// Back up overwritten blocks to this undo file (`-z`).
    pub undo_file: String,
}

impl ToArgs for CheckOptions {
    fn to_args(&self) -> ArgSpec {
        let mut spec = ArgSpec::new();
        spec.positional(0, &self.device)
            .switch('p', self.preen)
            .switch('n', self.no_fix)
            .switch('c', self.check_for_bad_blocks)
            .switch('k', self.append_bad_blocks)
            .text('l', &self.append_bad_blocks_file)
            .text('L', &self.bad_blocks_file)
            .switch('f', self.force)
            .switch('D', self.optimize_directories)
            .switch('F', self.flush)
            .numeric('b', self.superblock)
            .numeric('B', self.block_size)
            .text('j', &self.external_journal)
            .text('E', &self.extended_options)
            .text('z', &self.undo_file);
        spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_records_render_empty() {
        assert!(CreateOptions::default().to_args().render().is_empty());
        assert!(ResizeOptions::default().to_args().render().is_empty());
        assert!(CheckOptions::default().to_args().render().is_empty());
    }

    #[test]
    fn create_renders_flags_before_device() {
        let opts = CreateOptions {
            device: "/dev/loop0".to_string(),
            label: "testvol".to_string(),
            ..Default::default()
        };
        assert_eq!(
            opts.to_args().render(),
            vec!["-L", "testvol", "/dev/loop0"]
        );
    }

    #[test]
    fn create_size_follows_device() {
        let opts = CreateOptions {
            device: "/dev/loop0".to_string(),
            size: "100M".to_string(),
            ..Default::default()
        };
        assert_eq!(opts.to_args().render(), vec!["/dev/loop0", "100M"]);
    }

    #[test]
    fn resize_shrink_is_single_flag() {
        let opts = ResizeOptions {
            device: "/dev/loop0".to_string(),
            shrink: true,
            ..Default::default()
        };
        assert_eq!(opts.to_args().render(), vec!["-M", "/dev/loop0"]);
    }

    #[test]
    fn check_superblock_zero_is_emitted() {
        let opts = CheckOptions {
            device: "/dev/loop0".to_string(),
            superblock: Some(0),
            ..Default::default()
        };
        assert_eq!(opts.to_args().render(), vec!["-b", "0", "/dev/loop0"]);
    }

    #[test]
    fn identical_records_render_identically() {
        let opts = CreateOptions {
            device: "/dev/loop0".to_string(),
            size: "1G".to_string(),
            block_size: Some(4096),
            reserved_blocks_percentage: Some(0),
            label: "data".to_string(),
            force: true,
            ..Default::default()
        };
        assert_eq!(opts.to_args().render(), opts.clone().to_args().render());
    }
}
