/// Field bags, resource references and create outcomes
pub mod fields;
/// Upload sources, reports and the tabular data interface
pub mod upload;

pub use fields::*;
pub use upload::*;
