//! An in-memory chain running simplified versions of the name service
//! contracts, so that the harness can be exercised without a node.
#![allow(dead_code)]

use name_service_sdk::{
    chain::{BroadcastError, QueryConnection, SigningConnection},
    constants::contract_keys::{MARKETPLACE, NAME_MINTER, SG721_NAME, WHITELIST_UPDATABLE},
    encoding::{EncodeObject, MsgExecuteContract},
    endpoints::{QueryError, QueryResult},
    harness::{
        config::ChainConfig,
        deploy::DeploymentParams,
        TestContext, TestUser,
    },
    marketplace::{self, Ask, Bid, ConfigResponse},
    name_minter::{self, name_price, ParamsResponse},
    sg721_name,
    types::{
        BurnEvent, Coin, Decimal, DeliverTxResponse, Event, Fee, InstantiateOptions,
        InstantiateResult, Timestamp, TransactionHash, Uint128, UploadResult,
    },
    whitelist,
};
use serde::Serialize;
use serde_json::{json, Value};
use sha2::{Digest, Sha256};
use std::{
    collections::BTreeMap,
    path::Path,
    sync::{Arc, Mutex},
};
use tempfile::TempDir;

pub const DENOM: &str = "ustars";
pub const SECONDS_PER_YEAR: u64 = 60 * 60 * 24 * 365;
pub const GENESIS_SECONDS: u64 = 1_700_000_000;
pub const USERS: [(&str, &str); 4] = [
    ("user1", "stars1user1"),
    ("user2", "stars1user2"),
    ("user3", "stars1user3"),
    ("user4", "stars1user4"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Marketplace,
    NameMinter,
    Collection,
    Whitelist,
}

impl Kind {
    /// The deployment labels instances with their registry key.
    fn from_label(label: &str) -> Option<Self> {
        match label {
            MARKETPLACE => Some(Kind::Marketplace),
            NAME_MINTER => Some(Kind::NameMinter),
            SG721_NAME => Some(Kind::Collection),
            WHITELIST_UPDATABLE => Some(Kind::Whitelist),
            _ => None,
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Kind::Marketplace => "market",
            Kind::NameMinter => "minter",
            Kind::Collection => "names",
            Kind::Whitelist => "whitelist",
        }
    }
}

#[derive(Clone, Debug, Default)]
struct World {
    time:            Timestamp,
    height:          u64,
    tx_count:        u64,
    codes:           BTreeMap<u64, String>,
    instances:       BTreeMap<String, Kind>,
    // marketplace
    operator:        String,
    min_price:       Uint128,
    setup:           Option<ConfigResponse>,
    asks:            BTreeMap<String, Ask>,
    next_ask_id:     u64,
    bids:            Vec<Bid>,
    // name minter
    minter_params:   Option<ParamsResponse>,
    // whitelist
    whitelist_admin: String,
    whitelist:       Vec<String>,
    // collection
    owners:          BTreeMap<String, String>,
}

type ContractResult<A> = Result<A, String>;

fn arg<'a>(args: &'a Value, key: &str) -> ContractResult<&'a str> {
    args.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| format!("missing field `{}`", key))
}

fn paid(funds: &[Coin]) -> Uint128 {
    funds
        .iter()
        .filter(|c| c.denom == DENOM)
        .fold(Uint128::zero(), |acc, c| acc + c.amount)
}

fn to_value<T: Serialize>(value: &T) -> ContractResult<Value> {
    serde_json::to_value(value).map_err(|e| e.to_string())
}

fn split_call(msg: &[u8]) -> ContractResult<(String, Value)> {
    let value: Value = serde_json::from_slice(msg).map_err(|e| e.to_string())?;
    let obj = value
        .as_object()
        .filter(|o| o.len() == 1)
        .ok_or("expected a single top-level key")?;
    let (method, args) = obj.iter().next().ok_or("empty message")?;
    Ok((method.clone(), args.clone()))
}

impl World {
    fn address_of(&self, kind: Kind) -> Option<&str> {
        self.instances
            .iter()
            .find(|(_, k)| **k == kind)
            .map(|(a, _)| a.as_str())
    }

    fn wasm_event(&self, kind: Kind, action: &str) -> Event {
        Event::new("wasm")
            .add_attribute("_contract_address", self.address_of(kind).unwrap_or_default())
            .add_attribute("action", action)
    }

    fn query(&self, address: &str, data: &[u8]) -> ContractResult<Value> {
        let kind = *self.instances.get(address).ok_or("no such contract")?;
        let (method, args) = split_call(data)?;
        match (kind, method.as_str()) {
            (Kind::Marketplace, "ask") => to_value(&self.asks.get(arg(&args, "token_id")?)),
            (Kind::Marketplace, "asks") => {
                let limit = args.get("limit").and_then(Value::as_u64).unwrap_or(10) as usize;
                let mut asks: Vec<_> = self.asks.values().cloned().collect();
                asks.sort_by_key(|a| a.id);
                asks.truncate(limit);
                to_value(&asks)
            }
            (Kind::Marketplace, "ask_count") => to_value(&(self.asks.len() as u64)),
            (Kind::Marketplace, "bids") => {
                let token_id = arg(&args, "token_id")?;
                let mut bids: Vec<_> = self
                    .bids
                    .iter()
                    .filter(|b| b.token_id == token_id)
                    .cloned()
                    .collect();
                bids.sort_by(|a, b| a.bidder.cmp(&b.bidder));
                to_value(&bids)
            }
            (Kind::Marketplace, "renewal_queue") => {
                let time: Timestamp = serde_json::from_value(args["time"].clone())
                    .map_err(|e| e.to_string())?;
                let mut queue: Vec<_> = self
                    .asks
                    .values()
                    .filter(|a| a.renewal_time.seconds() == time.seconds())
                    .cloned()
                    .collect();
                queue.sort_by_key(|a| a.id);
                to_value(&queue)
            }
            (Kind::Marketplace, "config") => to_value(&self.setup.as_ref().ok_or("not set up")?),
            (Kind::NameMinter, "params") => {
                to_value(&self.minter_params.as_ref().ok_or("not instantiated")?)
            }
            (Kind::NameMinter, "collection") => to_value(&json!({
                "collection": self.address_of(Kind::Collection).ok_or("no collection")?
            })),
            (Kind::Whitelist, "includes_address") => {
                let address = arg(&args, "address")?;
                to_value(&self.whitelist.iter().any(|a| a == address))
            }
            (Kind::Whitelist, "address_count") => to_value(&(self.whitelist.len() as u64)),
            (Kind::Collection, "owner_of") => {
                let owner = self
                    .owners
                    .get(arg(&args, "token_id")?)
                    .ok_or("token not found")?;
                to_value(&json!({"owner": owner, "approvals": []}))
            }
            (Kind::Collection, "num_tokens") => to_value(&json!({"count": self.owners.len()})),
            _ => Err(format!("unknown query {}", method)),
        }
    }

    fn ask_of_seller(&self, token_id: &str, sender: &str) -> ContractResult<Ask> {
        let ask = self.asks.get(token_id).ok_or("ask not found")?;
        if ask.seller != sender {
            return Err("unauthorized: only the seller".into());
        }
        Ok(ask.clone())
    }

    fn list(&mut self, seller: &str, token_id: &str) -> Event {
        self.next_ask_id += 1;
        self.asks.insert(token_id.to_owned(), Ask {
            id:           self.next_ask_id,
            renewal_fund: Uint128::zero(),
            renewal_time: self.time.plus_seconds(SECONDS_PER_YEAR),
            seller:       seller.to_owned(),
            token_id:     token_id.to_owned(),
        });
        Event::new("wasm-set-ask")
            .add_attribute("token_id", token_id)
            .add_attribute("seller", seller)
    }

    fn execute(&mut self, msg: &MsgExecuteContract) -> ContractResult<Vec<Event>> {
        let kind = *self
            .instances
            .get(&msg.contract)
            .ok_or("no such contract")?;
        let (method, args) = split_call(&msg.msg)?;
        let sender = msg.sender.as_str();
        let mut events = vec![Event::new("execute").add_attribute("_contract_address", &msg.contract)];
        match (kind, method.as_str()) {
            (Kind::NameMinter, "mint_and_list") => {
                let name = arg(&args, "name")?;
                let params = self.minter_params.clone().ok_or("not instantiated")?;
                let price = name_price(params.base_price, name).ok_or("invalid name length")?;
                if paid(&msg.funds) != price {
                    return Err(format!("incorrect payment, expected {}{}", price, DENOM));
                }
                if self.owners.contains_key(name) {
                    return Err("name already minted".into());
                }
                self.owners.insert(name.to_owned(), sender.to_owned());
                events.push(
                    self.wasm_event(Kind::Collection, "mint")
                        .add_attribute("token_id", name),
                );
                events.push(self.list(sender, name));
            }
            (Kind::Marketplace, "setup") => {
                if sender != self.operator || self.setup.is_some() {
                    return Err("unauthorized".into());
                }
                self.setup = Some(ConfigResponse {
                    collection: arg(&args, "collection")?.to_owned(),
                    minter:     arg(&args, "minter")?.to_owned(),
                });
            }
            (Kind::Marketplace, "set_bid") => {
                let token_id = arg(&args, "token_id")?;
                let amount = paid(&msg.funds);
                let ask = self.asks.get(token_id).ok_or("ask not found")?;
                if ask.seller == sender {
                    return Err("cannot bid on own name".into());
                }
                if amount < self.min_price {
                    return Err("price too small".into());
                }
                self.bids
                    .retain(|b| !(b.token_id == token_id && b.bidder == sender));
                self.bids.push(Bid {
                    amount,
                    bidder: sender.to_owned(),
                    created_time: self.time,
                    token_id: token_id.to_owned(),
                });
                events.push(Event::new("wasm-set-bid").add_attribute("token_id", token_id));
            }
            (Kind::Marketplace, "remove_bid") => {
                let token_id = arg(&args, "token_id")?;
                let before = self.bids.len();
                self.bids
                    .retain(|b| !(b.token_id == token_id && b.bidder == sender));
                if self.bids.len() == before {
                    return Err("bid not found".into());
                }
                events.push(Event::new("wasm-remove-bid").add_attribute("token_id", token_id));
            }
            (Kind::Marketplace, "accept_bid") => {
                let token_id = arg(&args, "token_id")?;
                let bidder = arg(&args, "bidder")?;
                let mut ask = self.ask_of_seller(token_id, sender)?;
                let position = self
                    .bids
                    .iter()
                    .position(|b| b.token_id == token_id && b.bidder == bidder)
                    .ok_or("bid not found")?;
                self.bids.remove(position);
                ask.seller = bidder.to_owned();
                self.asks.insert(token_id.to_owned(), ask);
                self.owners.insert(token_id.to_owned(), bidder.to_owned());
                events.push(
                    Event::new("wasm-finalize-sale")
                        .add_attribute("token_id", token_id)
                        .add_attribute("buyer", bidder),
                );
            }
            (Kind::Marketplace, "fund_renewal") => {
                let token_id = arg(&args, "token_id")?;
                let mut ask = self.ask_of_seller(token_id, sender)?;
                ask.renewal_fund = ask.renewal_fund + paid(&msg.funds);
                self.asks.insert(token_id.to_owned(), ask);
                events.push(Event::new("wasm-fund-renewal").add_attribute("token_id", token_id));
            }
            (Kind::Marketplace, "refund_renewal") => {
                let token_id = arg(&args, "token_id")?;
                let mut ask = self.ask_of_seller(token_id, sender)?;
                if ask.renewal_fund.is_zero() {
                    return Err("no renewal fund".into());
                }
                ask.renewal_fund = Uint128::zero();
                self.asks.insert(token_id.to_owned(), ask);
                events.push(Event::new("wasm-refund-renewal").add_attribute("token_id", token_id));
            }
            (Kind::Marketplace, "process_renewals") => {
                if sender != self.operator {
                    return Err("unauthorized: only the operator".into());
                }
                let time: Timestamp =
                    serde_json::from_value(args["time"].clone()).map_err(|e| e.to_string())?;
                events.extend(self.process_renewals(time));
            }
            (Kind::Whitelist, "add_addresses") => {
                if sender != self.whitelist_admin {
                    return Err("unauthorized".into());
                }
                let addresses: Vec<String> = serde_json::from_value(args["addresses"].clone())
                    .map_err(|e| e.to_string())?;
                for address in addresses {
                    if self.whitelist.contains(&address) {
                        return Err(format!("address already added: {}", address));
                    }
                    self.whitelist.push(address);
                }
            }
            _ => return Err(format!("unknown variant `{}`", method)),
        }
        Ok(events)
    }

    /// Asks due at `time` are renewed if funded, sold to the highest bidder
    /// if there is one, and burned otherwise.
    fn process_renewals(&mut self, time: Timestamp) -> Vec<Event> {
        let due: Vec<Ask> = self
            .asks
            .values()
            .filter(|a| a.renewal_time <= time)
            .cloned()
            .collect();
        let mut events = Vec::new();
        for mut ask in due {
            let highest_bid = self
                .bids
                .iter()
                .filter(|b| b.token_id == ask.token_id)
                .max_by_key(|b| b.amount)
                .cloned();
            if !ask.renewal_fund.is_zero() {
                ask.renewal_fund = Uint128::zero();
                ask.renewal_time = ask.renewal_time.plus_seconds(SECONDS_PER_YEAR);
                events.push(Event::new("wasm-renew").add_attribute("token_id", &ask.token_id));
                self.asks.insert(ask.token_id.clone(), ask);
            } else if let Some(bid) = highest_bid {
                self.bids
                    .retain(|b| !(b.token_id == bid.token_id && b.bidder == bid.bidder));
                ask.seller = bid.bidder.clone();
                ask.renewal_time = self.time.plus_seconds(SECONDS_PER_YEAR);
                self.owners.insert(ask.token_id.clone(), bid.bidder);
                events.push(
                    Event::new("wasm-finalize-sale").add_attribute("token_id", &ask.token_id),
                );
                self.asks.insert(ask.token_id.clone(), ask);
            } else {
                self.asks.remove(&ask.token_id);
                self.owners.remove(&ask.token_id);
                self.bids.retain(|b| b.token_id != ask.token_id);
                events.push(
                    Event::new(BurnEvent::EVENT_TYPE)
                        .add_attribute(BurnEvent::TOKEN_ID_KEY, &ask.token_id),
                );
            }
        }
        events
    }

    fn instantiate(&mut self, sender: &str, code_id: u64, msg: &[u8], label: &str) -> ContractResult<String> {
        if !self.codes.contains_key(&code_id) {
            return Err(format!("no code with id {}", code_id));
        }
        let kind = Kind::from_label(label).ok_or_else(|| format!("unknown label {}", label))?;
        let parse_err = |e: serde_json::Error| e.to_string();
        match kind {
            Kind::Marketplace => {
                let msg: marketplace::InstantiateMsg =
                    serde_json::from_slice(msg).map_err(parse_err)?;
                self.operator = msg.operator;
                self.min_price = msg.min_price;
            }
            Kind::NameMinter => {
                let msg: name_minter::InstantiateMsg =
                    serde_json::from_slice(msg).map_err(parse_err)?;
                if !self.codes.contains_key(&msg.collection_code_id) {
                    return Err("unknown collection code".into());
                }
                self.minter_params = Some(ParamsResponse {
                    min_name_length:   msg.min_name_length,
                    max_name_length:   msg.max_name_length,
                    base_price:        msg.base_price,
                    fair_burn_percent: Decimal::new(msg.fair_burn_bps as i64, 4),
                });
            }
            Kind::Collection => {
                let msg: sg721_name::InstantiateMsg =
                    serde_json::from_slice(msg).map_err(parse_err)?;
                if self.address_of(Kind::NameMinter) != Some(msg.base_init_msg.minter.as_str()) {
                    return Err("minter is not the name minter".into());
                }
            }
            Kind::Whitelist => {
                let msg: whitelist::InstantiateMsg =
                    serde_json::from_slice(msg).map_err(parse_err)?;
                self.whitelist_admin = sender.to_owned();
                self.whitelist = msg.addresses;
            }
        }
        let address = format!("stars1{}{}", kind.prefix(), self.instances.len() + 1);
        self.instances.insert(address.clone(), kind);
        Ok(address)
    }
}

/// A chain shared by all users. Every clone operates on the same state.
#[derive(Clone, Debug, Default)]
pub struct FakeChain {
    world: Arc<Mutex<World>>,
}

impl FakeChain {
    pub fn new() -> Self {
        let chain = Self::default();
        chain.set_time(Timestamp::from_seconds(GENESIS_SECONDS));
        chain
    }

    pub fn now(&self) -> Timestamp { self.world.lock().unwrap().time }

    pub fn set_time(&self, time: Timestamp) { self.world.lock().unwrap().time = time; }

    pub fn advance(&self, seconds: u64) {
        let mut world = self.world.lock().unwrap();
        world.time = world.time.plus_seconds(seconds);
    }

    pub fn owner(&self, name: &str) -> Option<String> {
        self.world.lock().unwrap().owners.get(name).cloned()
    }

    fn next_tx(world: &mut World) -> (u64, TransactionHash) {
        world.height += 1;
        world.tx_count += 1;
        (
            world.height,
            TransactionHash::of_tx_bytes(&world.tx_count.to_be_bytes()),
        )
    }

    /// Run the messages atomically: if any fails, none has an effect.
    fn run_tx(&self, msgs: &[MsgExecuteContract]) -> DeliverTxResponse {
        let mut world = self.world.lock().unwrap();
        let (height, transaction_hash) = Self::next_tx(&mut world);
        let snapshot = world.clone();
        let mut events = Vec::new();
        for (index, msg) in msgs.iter().enumerate() {
            match world.execute(msg) {
                Ok(evs) => events.extend(evs),
                Err(e) => {
                    *world = snapshot;
                    return DeliverTxResponse {
                        height,
                        transaction_hash,
                        code: 5,
                        codespace: "wasm".into(),
                        raw_log: format!(
                            "failed to execute message; message index: {}: {}: execute wasm \
                             contract failed",
                            index, e
                        ),
                        events: Vec::new(),
                        gas_used: 100_000,
                        gas_wanted: 130_000,
                    };
                }
            }
        }
        DeliverTxResponse {
            height,
            transaction_hash,
            code: 0,
            codespace: String::new(),
            raw_log: String::new(),
            events,
            gas_used: 100_000,
            gas_wanted: 130_000,
        }
    }
}

impl QueryConnection for FakeChain {
    async fn query_contract_smart(&self, address: &str, query_data: &[u8]) -> QueryResult<Vec<u8>> {
        let world = self.world.lock().unwrap();
        if !world.instances.contains_key(address) {
            return Err(QueryError::NotFound);
        }
        let value = world
            .query(address, query_data)
            .map_err(|e| tonic::Status::invalid_argument(format!("query wasm contract failed: {}", e)))?;
        Ok(serde_json::to_vec(&value).unwrap())
    }
}

/// Failures before inclusion in a block, e.g., of the simulation.
fn submission_failed(e: String) -> BroadcastError {
    let status = tonic::Status::invalid_argument(e);
    BroadcastError::Connection(status.into())
}

impl SigningConnection for FakeChain {
    async fn execute(
        &self,
        msg: MsgExecuteContract,
        _fee: Fee,
        _memo: Option<String>,
    ) -> Result<DeliverTxResponse, BroadcastError> {
        Ok(self.run_tx(std::slice::from_ref(&msg)))
    }

    async fn instantiate(
        &self,
        sender: &str,
        code_id: u64,
        msg: &[u8],
        label: &str,
        _fee: Fee,
        _options: InstantiateOptions,
    ) -> Result<InstantiateResult, BroadcastError> {
        let mut world = self.world.lock().unwrap();
        let contract_address = world
            .instantiate(sender, code_id, msg, label)
            .map_err(submission_failed)?;
        let (height, transaction_hash) = Self::next_tx(&mut world);
        Ok(InstantiateResult {
            events: vec![
                Event::new("instantiate").add_attribute("_contract_address", &contract_address)
            ],
            contract_address,
            height,
            transaction_hash,
            gas_wanted: 200_000,
            gas_used: 150_000,
        })
    }

    async fn instantiate2(
        &self,
        sender: &str,
        code_id: u64,
        _salt: &[u8],
        msg: &[u8],
        label: &str,
        fee: Fee,
        options: InstantiateOptions,
    ) -> Result<InstantiateResult, BroadcastError> {
        self.instantiate(sender, code_id, msg, label, fee, options)
            .await
    }

    async fn upload(
        &self,
        _sender: &str,
        wasm: Vec<u8>,
        _fee: Fee,
        _memo: Option<String>,
    ) -> Result<UploadResult, BroadcastError> {
        let mut world = self.world.lock().unwrap();
        let code_id = world.codes.len() as u64 + 1;
        let checksum = hex::encode(Sha256::digest(&wasm));
        world.codes.insert(code_id, checksum.clone());
        let (height, transaction_hash) = Self::next_tx(&mut world);
        Ok(UploadResult {
            code_id,
            checksum,
            original_size: wasm.len(),
            compressed_size: wasm.len(),
            height,
            transaction_hash,
            events: vec![Event::new("store_code")
                .add_attribute("code_id", code_id.to_string())],
            gas_wanted: 2_000_000,
            gas_used: 1_500_000,
        })
    }

    async fn sign_and_broadcast(
        &self,
        signer: &str,
        messages: Vec<EncodeObject>,
        _fee: Fee,
        _memo: Option<String>,
    ) -> Result<DeliverTxResponse, BroadcastError> {
        let msgs: Vec<_> = messages.into_iter().map(|m| m.value).collect();
        if msgs.iter().any(|m| m.sender != signer) {
            return Err(submission_failed("signer does not match message sender".into()));
        }
        Ok(self.run_tx(&msgs))
    }
}

/// A directory with fake artifacts of the four contracts and their
/// checksums. The directory is removed when the returned value is dropped.
pub fn write_artifacts() -> TempDir {
    let dir = tempfile::Builder::new()
        .prefix("name-service-e2e")
        .tempdir()
        .unwrap();
    let mut checksums = String::new();
    for file in [
        "name_marketplace.wasm",
        "name_minter.wasm",
        "sg721_name-aarch64.wasm",
        "whitelist_updatable.wasm",
    ] {
        let wasm = format!("\0asm {}", file).into_bytes();
        checksums.push_str(&format!("{}  {}\n", hex::encode(Sha256::digest(&wasm)), file));
        std::fs::write(dir.path().join(file), wasm).unwrap();
    }
    std::fs::write(dir.path().join("checksums.txt"), checksums).unwrap();
    dir
}

/// Configuration whose registry cache lives next to the artifacts.
pub fn chain_config(artifacts: &Path) -> ChainConfig {
    let cache_path = artifacts.join("tmp").join("test_cache.json");
    serde_json::from_value::<ChainConfig>(json!({
        "prefix": "stars",
        "grpc_endpoint": "http://localhost:9090",
        "gas_prices": "0.025",
        "denom": DENOM,
        "artifacts_path": artifacts,
        "cache_path": cache_path,
        "verify_checksums": true
    }))
    .unwrap()
}

pub fn users(chain: &FakeChain) -> Vec<TestUser<FakeChain>> {
    USERS
        .iter()
        .map(|(name, address)| TestUser::new(*name, *address, chain.clone()))
        .collect()
}

/// Prices of names that are a hundred times the base price should not get in
/// the way of the scenarios.
pub fn deployment_params() -> DeploymentParams {
    DeploymentParams {
        base_price: Uint128::new(1_000_000),
        ..DeploymentParams::default()
    }
}

/// A deployed name service. The artifacts and the registry cache are kept
/// for as long as the deployment is alive.
pub struct Deployment {
    pub context:   TestContext<FakeChain>,
    pub chain:     FakeChain,
    pub config:    ChainConfig,
    pub artifacts: TempDir,
}

pub async fn deployed() -> Deployment {
    let chain = FakeChain::new();
    let artifacts = write_artifacts();
    let config = chain_config(artifacts.path());
    let context = TestContext::initialize(&config, users(&chain), false, &deployment_params())
        .await
        .unwrap();
    Deployment {
        context,
        chain,
        config,
        artifacts,
    }
}
