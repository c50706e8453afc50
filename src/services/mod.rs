pub mod archive;
pub mod config;
pub mod file_ops;
pub mod fs_utils;
pub mod roster;
pub mod scanner;
