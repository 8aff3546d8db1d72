pub mod fetch;
pub mod generation;
pub mod paths;

pub use fetch::{EndpointProbe, FetchError, HttpOptionSource, OptionSource, OptionsRequest};
pub use generation::{RequestLedger, Ticket};
pub use paths::{leaf_paths, locate_array, map_options, value_at_path};
