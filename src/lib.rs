//! Core logic for the Blocktank channel-purchase front-end.
//!
//! Two independent pieces live here: conversion of raw satoshi amounts into
//! locale-correct fiat and bitcoin display strings, and the store that
//! synchronizes node info and channel orders from the remote service. They
//! never call each other; the UI layer composes them.

pub mod bitcoin_unit;
pub mod client;
pub mod display_value;
pub mod entities;
pub mod fiat_amount;
pub mod fiat_currency;
pub mod locale;
pub mod prefs;
pub mod rates;
pub mod store;

pub use bitcoin_unit::BitcoinUnit;
pub use client::RemoteClient;
pub use client::RemoteError;
pub use display_value::format;
pub use display_value::DisplayValue;
pub use entities::InfoEntity;
pub use entities::OrderEntity;
pub use entities::RequestState;
pub use fiat_currency::FiatCurrency;
pub use locale::Locale;
pub use store::SyncStore;
