// Gateway reply
// Bodies from the remote gateway are opaque JSON; an `err` key marks failure

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GatewayReply {
    Ok(Value),
    Err(Value),
}

impl GatewayReply {
    pub fn from_body(body: Value) -> Self {
        let failed = body
            .as_object()
            .map(|object| object.contains_key("err"))
            .unwrap_or(false);
        if failed {
            GatewayReply::Err(body)
        } else {
            GatewayReply::Ok(body)
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, GatewayReply::Ok(_))
    }

    pub fn into_body(self) -> Value {
        match self {
            GatewayReply::Ok(body) | GatewayReply::Err(body) => body,
        }
    }
}
