//! The remote entities the store synchronizes, as served by the Blocktank API.

use serde::Deserialize;
use serde::Serialize;

/// Freshness tag tracked independently for each synchronized collection.
///
/// `Idle` means the last refresh (if any) succeeded; `Error` means it failed
/// and the previously held value is still being served.
#[derive(
    Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize, Default, strum::EnumIs,
)]
#[serde(rename_all = "lowercase")]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Error,
}

/// Channel capacity the service currently has available, in satoshis.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Capacity {
    pub local_balance: u64,
    pub remote_balance: u64,
}

/// Descriptor of the service's Lightning node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeInfo {
    pub active_channels_count: u32,
    pub alias: String,
    pub public_key: String,
    pub uris: Vec<String>,
}

/// A channel product the service offers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Service {
    pub product_id: String,
    pub description: String,
    pub available: bool,
    pub min_channel_size: u64,
    pub max_channel_size: u64,
    pub min_chan_expiry: u32,
    pub max_chan_expiry: u32,
}

/// Singleton service snapshot, wholesale-replaced on each successful refresh.
///
/// `Default` is the zero placeholder the store starts from before the first
/// refresh completes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InfoEntity {
    pub capacity: Capacity,
    pub services: Vec<Service>,
    pub node_info: NodeInfo,
}

/// A channel purchase order, identified by its `_id`.
///
/// Monetary fields are satoshi amounts; timestamps are unix epoch
/// milliseconds; `channel_expiry` is in weeks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderEntity {
    #[serde(rename = "_id")]
    pub id: String,
    pub state: u32,
    #[serde(rename = "stateMessage")]
    pub state_message: String,
    pub price: u64,
    pub total_amount: u64,
    pub amount_received: u64,
    pub btc_address: String,
    pub purchase_invoice: String,
    pub lnurl_string: String,
    pub local_balance: u64,
    pub remote_balance: u64,
    pub channel_expiry: u32,
    pub created_at: u64,
    pub order_expiry: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_deserializes_wire_names() {
        let json = r#"{
            "_id": "abc123",
            "state": 100,
            "stateMessage": "Paid",
            "price": 10000,
            "total_amount": 10500,
            "amount_received": 10500,
            "btc_address": "bc1qexample",
            "purchase_invoice": "lnbc1example",
            "lnurl_string": "lnurl1example",
            "local_balance": 1000000,
            "remote_balance": 2000000,
            "channel_expiry": 6,
            "created_at": 1656112233000,
            "order_expiry": 1656115833000
        }"#;

        let order: OrderEntity = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, "abc123");
        assert_eq!(order.state_message, "Paid");
        assert_eq!(order.remote_balance, 2_000_000);
    }

    #[test]
    fn info_default_is_zero_placeholder() {
        let info = InfoEntity::default();
        assert_eq!(info.capacity.local_balance, 0);
        assert!(info.services.is_empty());
        assert_eq!(info.node_info.alias, "");
    }

    #[test]
    fn request_state_defaults_to_idle() {
        assert!(RequestState::default().is_idle());
    }
}
