#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod calendar;
mod error;
mod one_rep_max;
mod personal_record;
mod score;
mod series;
mod service;
mod workout;

pub use calendar::*;
pub use error::*;
pub use one_rep_max::*;
pub use personal_record::*;
pub use score::*;
pub use series::*;
pub use service::*;
pub use workout::*;
