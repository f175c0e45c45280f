pub mod responses;
pub mod rpc_provider_stub;
