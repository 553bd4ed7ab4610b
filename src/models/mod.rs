pub mod report;
pub mod responses;

pub use report::*;
pub use responses::*;
