use crate::schema::{CardSpec, PriceSpec, TokenSpec, WonderSpec};
use anyhow::{bail, Context};
use duelis_core::{
    Bonus, CardColor, CardDef, Catalog, GameConfig, InstantEffect, Price, TokenDef, WonderDef,
};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const CARDS_FILE: &str = "cards.json";
const WONDERS_FILE: &str = "wonders.json";
const TOKENS_FILE: &str = "tokens.json";

pub fn builtin_catalog() -> anyhow::Result<Catalog> {
    let cards: Vec<CardSpec> =
        serde_json::from_str(include_str!("../assets/cards.json")).context("parse cards.json")?;
    let wonders: Vec<WonderSpec> = serde_json::from_str(include_str!("../assets/wonders.json"))
        .context("parse wonders.json")?;
    let tokens: Vec<TokenSpec> =
        serde_json::from_str(include_str!("../assets/tokens.json")).context("parse tokens.json")?;
    convert(cards, wonders, tokens)
}

pub fn load_catalog(dir: &Path) -> anyhow::Result<Catalog> {
    let cards: Vec<CardSpec> = load_json(dir.join(CARDS_FILE))?;
    let wonders: Vec<WonderSpec> = load_json(dir.join(WONDERS_FILE))?;
    let tokens: Vec<TokenSpec> = load_json(dir.join(TOKENS_FILE))?;
    convert(cards, wonders, tokens)
}

pub fn load_game_config(path: &Path) -> anyhow::Result<GameConfig> {
    load_json(path)
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))
}

fn convert(
    cards: Vec<CardSpec>,
    wonders: Vec<WonderSpec>,
    tokens: Vec<TokenSpec>,
) -> anyhow::Result<Catalog> {
    let cards = cards
        .into_iter()
        .enumerate()
        .map(|(index, spec)| {
            convert_card(index, spec).with_context(|| format!("card at index {index}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let wonders = wonders
        .into_iter()
        .enumerate()
        .map(|(index, spec)| {
            convert_wonder(index, spec).with_context(|| format!("wonder at index {index}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let tokens = tokens
        .into_iter()
        .enumerate()
        .map(|(index, spec)| {
            convert_token(index, spec).with_context(|| format!("token at index {index}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let catalog = Catalog {
        cards,
        wonders,
        tokens,
    };
    validate(&catalog)?;
    Ok(catalog)
}

fn convert_card(index: usize, spec: CardSpec) -> anyhow::Result<CardDef> {
    if spec.id as usize != index {
        bail!("id {} does not match its position", spec.id);
    }
    if !(1..=3).contains(&spec.age) {
        bail!("age {} out of range", spec.age);
    }
    let Some(color) = CardColor::from_name(&spec.color) else {
        bail!("unknown color {:?}", spec.color);
    };

    let mut bonuses = vec![(color.bonus(), 1)];
    if let Some(chain_out) = &spec.chain_out {
        bonuses.push((chain_symbol(chain_out)?, 1));
    }
    if let Some(symbol) = &spec.scientific_symbol {
        bonuses.push((science_symbol(symbol)?, 1));
    }
    let mut instants = Vec::new();
    split_effects(&spec.effect, &mut bonuses, &mut instants)?;

    let chain = spec
        .chain_in
        .as_deref()
        .map(chain_symbol)
        .transpose()?;

    Ok(CardDef {
        id: spec.id,
        name: spec.name,
        age: spec.age - 1,
        color,
        price: price(&spec.price, chain),
        bonuses,
        instants,
    })
}

fn convert_wonder(index: usize, spec: WonderSpec) -> anyhow::Result<WonderDef> {
    if spec.id as usize != index {
        bail!("id {} does not match its position", spec.id);
    }
    let mut bonuses = Vec::new();
    let mut instants = Vec::new();
    split_effects(&spec.effect, &mut bonuses, &mut instants)?;
    Ok(WonderDef {
        id: spec.id,
        name: spec.name,
        price: price(&spec.price, None),
        bonuses,
        instants,
    })
}

fn convert_token(index: usize, spec: TokenSpec) -> anyhow::Result<TokenDef> {
    if spec.id as usize != index {
        bail!("id {} does not match its position", spec.id);
    }
    let mut bonuses = vec![(Bonus::TokenMarker, 1)];
    if let Some(symbol) = &spec.scientific_symbol {
        bonuses.push((science_symbol(symbol)?, 1));
    }
    let mut instants = Vec::new();
    split_effects(&spec.effect, &mut bonuses, &mut instants)?;
    Ok(TokenDef {
        id: spec.id,
        name: spec.name,
        bonuses,
        instants,
    })
}

/// Resolve each named effect into an accumulating bonus or an instant;
/// unknown names are fatal here, never at runtime.
fn split_effects(
    effect: &Option<BTreeMap<String, i64>>,
    bonuses: &mut Vec<(Bonus, u32)>,
    instants: &mut Vec<(InstantEffect, i64)>,
) -> anyhow::Result<()> {
    let Some(effect) = effect else {
        return Ok(());
    };
    for (name, value) in effect {
        if let Some(bonus) = Bonus::from_name(name) {
            if *value < 0 {
                bail!("bonus {name} cannot be negative");
            }
            bonuses.push((bonus, *value as u32));
        } else if let Some(instant) = InstantEffect::from_name(name) {
            instants.push((instant, *value));
        } else {
            bail!("unknown effect {name:?}");
        }
    }
    Ok(())
}

fn price(spec: &Option<PriceSpec>, chain: Option<Bonus>) -> Price {
    let spec = spec.clone().unwrap_or_default();
    Price {
        coins: spec.coins,
        resources: [spec.wood, spec.clay, spec.stone, spec.glass, spec.papyrus],
        chain,
    }
}

fn chain_symbol(name: &str) -> anyhow::Result<Bonus> {
    match Bonus::from_name(name) {
        Some(bonus) if bonus.is_chain_symbol() => Ok(bonus),
        _ => bail!("unknown chain symbol {name:?}"),
    }
}

fn science_symbol(name: &str) -> anyhow::Result<Bonus> {
    match Bonus::from_name(name) {
        Some(bonus) if duelis_core::SCIENCE_RANGE.contains(&bonus.index()) => Ok(bonus),
        _ => bail!("unknown scientific symbol {name:?}"),
    }
}

fn validate(catalog: &Catalog) -> anyhow::Result<()> {
    for (age, expected) in [(0u8, 23usize), (1, 23), (2, 20)] {
        let count = catalog.age_deck(age).len();
        if count != expected {
            bail!("age {} deck holds {count} cards, expected {expected}", age + 1);
        }
    }
    if catalog.guild_deck().len() != 7 {
        bail!("guild deck holds {} cards, expected 7", catalog.guild_deck().len());
    }
    for card in &catalog.cards {
        if card.is_guild() && card.age != 2 {
            bail!("guild card {} outside age 3", card.name);
        }
    }
    Ok(())
}
