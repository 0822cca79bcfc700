mod rpc;
pub use rpc::RpcWallet;
