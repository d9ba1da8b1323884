use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceSpec {
    #[serde(default)]
    pub coins: i64,
    #[serde(default)]
    pub wood: u32,
    #[serde(default)]
    pub clay: u32,
    #[serde(default)]
    pub stone: u32,
    #[serde(default)]
    pub glass: u32,
    #[serde(default)]
    pub papyrus: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CardSpec {
    pub id: u16,
    pub name: String,
    pub age: u8,
    pub color: String,
    #[serde(default)]
    pub price: Option<PriceSpec>,
    #[serde(default)]
    pub chain_in: Option<String>,
    #[serde(default)]
    pub chain_out: Option<String>,
    #[serde(default)]
    pub scientific_symbol: Option<String>,
    #[serde(default)]
    pub effect: Option<BTreeMap<String, i64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WonderSpec {
    pub id: u16,
    pub name: String,
    #[serde(default)]
    pub price: Option<PriceSpec>,
    #[serde(default)]
    pub effect: Option<BTreeMap<String, i64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenSpec {
    pub id: u16,
    pub name: String,
    #[serde(default)]
    pub scientific_symbol: Option<String>,
    #[serde(default)]
    pub effect: Option<BTreeMap<String, i64>>,
}
