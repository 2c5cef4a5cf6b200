//! Filesystem and hashing helpers shared by the executor and project setup.

pub mod checksum;
pub mod fs;
