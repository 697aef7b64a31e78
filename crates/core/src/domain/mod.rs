// Domain Layer - validated queue/job identity types

pub mod descriptor;
pub mod job;

pub use descriptor::StreamDescriptor;
pub use job::JobKind;
