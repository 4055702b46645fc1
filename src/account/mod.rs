//! Account API module
//!
//! The account API speaks JSON-RPC 2.0 over a single bearer-authenticated
//! `POST {base}/` endpoint. A populated `error` member in the response
//! becomes `Error::JsonRpc`.

mod client;
mod types;

pub use client::{AccountApiClient, DEFAULT_API_URL};
pub use types::{RpcFault, RpcRequest, RpcResponse};
