mod backend_transport;

pub use backend_transport::*;
