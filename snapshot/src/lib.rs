pub mod account_data;
pub mod account_snapshot;
pub mod account_snapshot_provider;
pub mod errors;
pub mod facets;
pub mod ledger_meta;

pub use riptide_providers::rpc_provider_config::RpcProviderConfig;
