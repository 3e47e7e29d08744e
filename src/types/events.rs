//! Events emitted by transactions and typed decoders for the events the name
//! service contracts emit.
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub key:   String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key:   key.into(),
            value: value.into(),
        }
    }
}

/// An event of a transaction. Events emitted by contracts have their type
/// prefixed by `wasm-`; attributes added to the response directly end up in
/// the event of type `wasm`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub ty:         String,
    pub attributes: Vec<Attribute>,
}

impl Event {
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty:         ty.into(),
            attributes: Vec::new(),
        }
    }

    pub fn add_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(key, value));
        self
    }

    /// The value of the first attribute with the given key.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }

    /// All values of attributes with the given key, in emission order.
    pub fn attribute_values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.attributes
            .iter()
            .filter(move |a| a.key == key)
            .map(|a| a.value.as_str())
    }
}

/// The first event of the given type.
pub fn find_event<'a>(events: &'a [Event], ty: &str) -> Option<&'a Event> {
    events.iter().find(|e| e.ty == ty)
}

/// All events of the given type, in emission order.
pub fn find_events<'a>(events: &'a [Event], ty: &'a str) -> impl Iterator<Item = &'a Event> + 'a {
    events.iter().filter(move |e| e.ty == ty)
}

/// Addresses of contracts instantiated by a transaction, in instantiation
/// order.
pub fn instantiated_contracts(events: &[Event]) -> Vec<String> {
    find_events(events, "instantiate")
        .filter_map(|e| e.attribute("_contract_address"))
        .map(str::to_owned)
        .collect()
}

/// Token ids reported in the `wasm` events of a transaction, e.g., by a batch
/// of mint messages.
pub fn wasm_token_ids(events: &[Event]) -> BTreeSet<String> {
    find_events(events, "wasm")
        .flat_map(|e| e.attribute_values("token_id"))
        .map(str::to_owned)
        .collect()
}

/// The event emitted when renewal processing burns a name that was neither
/// funded for renewal nor bid on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BurnEvent {
    pub token_id: String,
}

impl BurnEvent {
    pub const EVENT_TYPE: &'static str = "wasm-burn";
    pub const TOKEN_ID_KEY: &'static str = "token_id-burned";

    /// Decode the first burn event among `events`. Returns `None` if there is
    /// no burn event or it lacks the token id.
    pub fn decode(events: &[Event]) -> Option<Self> {
        Self::decode_all(events).into_iter().next()
    }

    /// Decode all burn events among `events`.
    pub fn decode_all(events: &[Event]) -> Vec<Self> {
        find_events(events, Self::EVENT_TYPE)
            .filter_map(|e| e.attribute(Self::TOKEN_ID_KEY))
            .map(|token_id| BurnEvent {
                token_id: token_id.to_owned(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process_events() -> Vec<Event> {
        vec![
            Event::new("message").add_attribute("action", "/cosmwasm.wasm.v1.MsgExecuteContract"),
            Event::new("wasm").add_attribute("_contract_address", "stars1market"),
            Event::new("wasm-burn")
                .add_attribute("_contract_address", "stars1market")
                .add_attribute("token_id-burned", "testname2"),
        ]
    }

    #[test]
    fn decode_burn_event() {
        let events = process_events();
        assert_eq!(
            BurnEvent::decode(&events),
            Some(BurnEvent {
                token_id: "testname2".into(),
            })
        );
        assert_eq!(BurnEvent::decode(&events[..2]), None);
    }

    #[test]
    fn burn_event_without_token_id_is_not_decoded() {
        let events = vec![Event::new("wasm-burn").add_attribute("other", "x")];
        assert!(find_event(&events, "wasm-burn").is_some());
        assert_eq!(BurnEvent::decode(&events), None);
    }

    #[test]
    fn collect_token_ids_and_instantiations() {
        let events = vec![
            Event::new("instantiate").add_attribute("_contract_address", "stars1minter"),
            Event::new("instantiate").add_attribute("_contract_address", "stars1collection"),
            Event::new("wasm")
                .add_attribute("token_id", "1")
                .add_attribute("token_id", "2"),
            Event::new("wasm").add_attribute("token_id", "1"),
        ];
        assert_eq!(instantiated_contracts(&events), vec![
            "stars1minter".to_owned(),
            "stars1collection".to_owned()
        ]);
        assert_eq!(
            wasm_token_ids(&events).into_iter().collect::<Vec<_>>(),
            vec!["1".to_owned(), "2".to_owned()]
        );
    }

    #[test]
    fn event_json_uses_type_key() {
        let json = serde_json::to_value(Event::new("wasm").add_attribute("a", "b")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "wasm", "attributes": [{"key": "a", "value": "b"}]})
        );
    }
}
