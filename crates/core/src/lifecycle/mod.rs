mod registry;

pub use registry::{MountRegistry, MountTarget};
