#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod package;
mod report;
mod service;
mod workout;

pub use error::*;
pub use package::*;
pub use report::*;
pub use service::*;
pub use workout::*;
