pub mod connectivity;
pub mod manifest;
pub mod options;
pub mod package;

pub use connectivity::*;
pub use manifest::*;
pub use options::*;
pub use package::*;
