//! JSON-RPC envelope types

use crate::error::Error;
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};

/// JSON-RPC request envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcRequest {
    /// Protocol version, always "2.0"
    pub jsonrpc: &'static str,
    /// Request id echoed back by the server
    pub id: u64,
    /// Remote method name
    pub method: String,
    /// Positional parameters
    pub params: Vec<JsonValue>,
}

impl RpcRequest {
    /// Create a request envelope
    pub fn new(id: u64, method: impl Into<String>, params: Vec<JsonValue>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method: method.into(),
            params,
        }
    }
}

/// JSON-RPC response envelope
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RpcResponse {
    /// Method result (null on error)
    #[serde(default)]
    pub result: JsonValue,
    /// Fault details, `None` on success
    #[serde(default)]
    pub error: Option<RpcFault>,
}

impl RpcResponse {
    /// Return the result, or the fault as an error
    pub fn into_result(self) -> Result<JsonValue, Error> {
        match self.error {
            Some(fault) => Err(fault.into()),
            None => Ok(self.result),
        }
    }
}

/// Fault reported by the server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RpcFault {
    #[serde(default)]
    pub fault: String,
    #[serde(rename = "faultCode", default)]
    pub fault_code: i64,
    #[serde(rename = "faultString", default)]
    pub fault_string: String,
}

impl From<RpcFault> for Error {
    fn from(fault: RpcFault) -> Self {
        Error::JsonRpc {
            fault: fault.fault,
            fault_code: fault.fault_code,
            fault_string: fault.fault_string,
        }
    }
}
