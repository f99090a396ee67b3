//! Photo-or-drawing adapters - external adapters for the core ports.
//!
//! This crate provides adapters for:
//! - Filesystem image source and path lists
//! - Gaussian model parameter files

pub mod fs;
pub mod model;

pub use fs::{read_path_list, FsImageSource};
pub use model::{default_model_path, GaussianModel};
