pub mod exclusions;
pub mod scanner;
pub mod validation;

pub use exclusions::{DescriptorStatus, ExclusionSet};
pub use scanner::{DescriptorScanner, ScannedDescriptor};
pub use validation::{FileSystemValidator, PathValidator};
