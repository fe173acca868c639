//! Brandkit CLI internals: configuration, build orchestration, scaffolding.

pub mod build;
pub mod config;
pub mod project;

pub use build::{build, render_one, BuildError, BuildReport};
pub use config::{BrandkitConfig, LoadedConfig};
pub use project::create_project;
