// Application Layer - job dispatch

pub mod registry;

pub use registry::{JobRegistry, JobRegistryBuilder};
