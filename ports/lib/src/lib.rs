mod functions;
mod models;
mod transport;

pub use functions::*;
pub use models::*;
pub use transport::*;
