mod error;
mod reqwest_transport;

pub use error::*;
pub use reqwest_transport::*;
