//! Milk Button Shared - the contract between the three processes.
//!
//! - Route paths and the multicast service type
//! - Wire-format DTOs (`/send` responses, config patches)
//! - `DiscoveredServer` and the announce/file-listing URL builders
//! - `JsonFileStore`, the whole-record config store both services persist through
//!
//! # Design Principles
//!
//! 1. **No business logic** - rules live in `milkbutton-domain`
//! 2. **Stable on-disk and on-wire names** - field names match existing deployments

pub mod config_store;
pub mod discovery;
pub mod requests;
pub mod responses;
pub mod routes;

pub use config_store::{JsonFileStore, StoreError};
pub use discovery::DiscoveredServer;
pub use requests::SenderConfigPatch;
pub use responses::SendResponse;
pub use routes::{announce_url, files_url, FILE_PARAM, SERVICE_TYPE};
