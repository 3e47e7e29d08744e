//! Rendering of contract messages into the JSON payloads and execute
//! instructions the chain expects.
//!
//! Every execute and query message is a JSON object with exactly one key, the
//! snake_case name of the method, whose value is the object of arguments, or
//! `{}` if the method takes none. Typed messages (the `ExecuteMsg` and
//! `QueryMsg` enums of the contract modules) satisfy this by construction;
//! [`encode_msg`] checks it for any [`Serialize`] value, and [`Call`] builds
//! such messages from a method name and arguments at runtime.
use crate::{
    chain::generated,
    constants::MSG_EXECUTE_CONTRACT_TYPE_URL,
    types::Coin,
};
use prost::Message;
use serde::{ser::SerializeMap, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("The sender address is empty.")]
    EmptySender,
    #[error("The contract address is empty.")]
    EmptyContract,
    #[error("The method name is empty.")]
    EmptyMethod,
    #[error("Could not serialize the message: {0}")]
    Json(#[from] serde_json::Error),
    #[error("A message must have exactly one top-level key, but has {0}.")]
    KeyCount(usize),
    #[error("A message must be a JSON object, but is {0}.")]
    NotAnObject(&'static str),
    #[error("The arguments of `{0}` must be a JSON object.")]
    InvalidArguments(String),
}

/// Convert a camelCase identifier to snake_case, e.g., `setBid` to `set_bid`.
/// Identifiers that are already snake_case are returned unchanged.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Check that `value` has the shape of a contract message.
pub fn check_single_key(value: &Value) -> Result<(), EncodeError> {
    let obj = value
        .as_object()
        .ok_or_else(|| EncodeError::NotAnObject(kind(value)))?;
    if obj.len() != 1 {
        return Err(EncodeError::KeyCount(obj.len()));
    }
    match obj.iter().next() {
        Some((_, Value::Object(_))) => Ok(()),
        Some((method, _)) => Err(EncodeError::InvalidArguments(method.clone())),
        None => Err(EncodeError::KeyCount(0)),
    }
}

/// Serialize a message to the bytes sent to the contract, checking that it
/// has the shape of a contract message. The bytes keep the field order of
/// the serialized type.
pub fn encode_msg<M: Serialize + ?Sized>(msg: &M) -> Result<Vec<u8>, EncodeError> {
    check_single_key(&serde_json::to_value(msg)?)?;
    Ok(serde_json::to_vec(msg)?)
}

/// A message assembled at runtime from a method name and its arguments. The
/// method name and the names of the arguments may be given in camelCase, they
/// are converted to snake_case. Nested values are passed through unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    method: String,
    args:   Map<String, Value>,
}

/// A call of an execute method.
pub type ExecuteCall = Call;
/// A call of a query.
pub type QueryCall = Call;

impl Call {
    /// `args` must be an object, or `null` for methods without arguments.
    pub fn new(method: &str, args: Value) -> Result<Self, EncodeError> {
        if method.is_empty() {
            return Err(EncodeError::EmptyMethod);
        }
        let method = to_snake_case(method);
        let args = match args {
            Value::Null => Map::new(),
            Value::Object(args) => args
                .into_iter()
                .map(|(k, v)| (to_snake_case(&k), v))
                .collect(),
            _ => return Err(EncodeError::InvalidArguments(method)),
        };
        Ok(Self { method, args })
    }

    /// A call of a method without arguments.
    pub fn without_args(method: &str) -> Result<Self, EncodeError> { Self::new(method, Value::Null) }

    pub fn method(&self) -> &str { &self.method }

    pub fn args(&self) -> &Map<String, Value> { &self.args }
}

impl Serialize for Call {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.method, &self.args)?;
        map.end()
    }
}

/// The instruction executing a message on a contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgExecuteContract {
    pub sender:   String,
    pub contract: String,
    /// UTF-8 JSON of the message.
    pub msg:      Vec<u8>,
    pub funds:    Vec<Coin>,
}

impl MsgExecuteContract {
    /// The message parsed as JSON.
    pub fn msg_json(&self) -> Result<Value, serde_json::Error> { serde_json::from_slice(&self.msg) }

    pub fn to_proto(&self) -> generated::MsgExecuteContract {
        generated::MsgExecuteContract {
            sender:   self.sender.clone(),
            contract: self.contract.clone(),
            msg:      self.msg.clone(),
            funds:    self.funds.iter().map(generated::Coin::from).collect(),
        }
    }
}

/// Build the instruction executing `msg` on `contract` on behalf of `sender`.
pub fn execute_instruction<M: Serialize + ?Sized>(
    sender: &str,
    contract: &str,
    msg: &M,
    funds: &[Coin],
) -> Result<MsgExecuteContract, EncodeError> {
    if sender.is_empty() {
        return Err(EncodeError::EmptySender);
    }
    if contract.is_empty() {
        return Err(EncodeError::EmptyContract);
    }
    Ok(MsgExecuteContract {
        sender:   sender.to_owned(),
        contract: contract.to_owned(),
        msg:      encode_msg(msg)?,
        funds:    funds.to_vec(),
    })
}

/// An unsigned message ready to be included in a transaction together with
/// other messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeObject {
    pub type_url: String,
    pub value:    MsgExecuteContract,
}

impl EncodeObject {
    pub fn execute(value: MsgExecuteContract) -> Self {
        Self {
            type_url: MSG_EXECUTE_CONTRACT_TYPE_URL.to_owned(),
            value,
        }
    }

    /// The message packed as a protobuf `Any`.
    pub fn to_any(&self) -> generated::Any {
        generated::Any {
            type_url: self.type_url.clone(),
            value:    self.value.to_proto().encode_to_vec(),
        }
    }
}

impl From<MsgExecuteContract> for EncodeObject {
    fn from(value: MsgExecuteContract) -> Self { Self::execute(value) }
}
