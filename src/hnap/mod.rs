mod client;
mod domain;
mod fetch;
mod request;

pub use client::{ModemClientError, new_client};
pub use fetch::{Config, FetchError, fetch};
