//! Configuration model: option enums and the resolved project record

pub mod options;
pub mod project;

pub use options::{
    Choice, CssFramework, Framework, FrameworkFamily, Language, PackageManager, ProjectType,
    StateManagement,
};
pub use project::{ProjectConfiguration, ProjectName};
