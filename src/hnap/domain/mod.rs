mod lenient_deserializer;
mod modem_status;

pub use modem_status::*;
