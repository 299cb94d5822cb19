mod record;
mod transport;

pub use record::*;
pub use transport::*;
