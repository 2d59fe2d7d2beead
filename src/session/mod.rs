//! Editor session state: text buffers, validation gate, version registry,
//! action availability and the controller that orchestrates them.

mod availability;
mod controller;
mod pair;
mod validation;
mod versions;

pub use availability::*;
pub use controller::*;
pub use pair::*;
pub use validation::*;
pub use versions::*;
