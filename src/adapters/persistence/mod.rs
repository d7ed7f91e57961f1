//! Response persistence over the blob store port.

mod response_store;

pub use response_store::{ResponseStore, RESPONSES_KEY};
