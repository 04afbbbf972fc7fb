pub mod buildsupport;
pub mod discover;
pub mod emit;
pub mod error;
pub mod generator;
pub mod logging;
pub mod model;
pub mod persist;

pub use error::{Result, SignpostError};
pub use generator::Generator;
pub use model::{GenerateReport, GeneratedUnit, RouteDeclaration};
