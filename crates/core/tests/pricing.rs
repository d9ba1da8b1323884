use duelis_core::{Assets, Bonus, BonusLedger, CardColor, CardDef, Price};

fn card(color: CardColor, price: Price) -> CardDef {
    CardDef {
        id: 0,
        name: "test card".to_string(),
        age: 0,
        color,
        price,
        bonuses: vec![(color.bonus(), 1)],
        instants: Vec::new(),
    }
}

fn price(coins: i64, resources: [u32; 5], chain: Option<Bonus>) -> Price {
    Price {
        coins,
        resources,
        chain,
    }
}

fn assets(ledger: &BonusLedger, opponent: &BonusLedger, card: Option<&CardDef>) -> Assets {
    Assets::for_player(ledger, 7, opponent, card)
}

#[test]
fn owned_chain_symbol_makes_the_price_free() {
    let mut ledger = BonusLedger::new();
    ledger.add(Bonus::Mask, 1);
    let opponent = BonusLedger::new();
    let target = card(
        CardColor::Blue,
        price(0, [0, 2, 0, 0, 0], Some(Bonus::Mask)),
    );
    let assets = assets(&ledger, &opponent, Some(&target));
    assert_eq!(assets.coins_for_price(&target.price), 0);
}

#[test]
fn urbanism_turns_the_chain_into_a_refund() {
    let mut ledger = BonusLedger::new();
    ledger.add(Bonus::Mask, 1);
    ledger.add(Bonus::Urbanism, 1);
    let opponent = BonusLedger::new();
    let target = card(
        CardColor::Blue,
        price(0, [0, 2, 0, 0, 0], Some(Bonus::Mask)),
    );
    let assets = assets(&ledger, &opponent, Some(&target));
    assert_eq!(assets.coins_for_price(&target.price), -4);
}

#[test]
fn missing_chain_symbol_prices_the_resources() {
    let ledger = BonusLedger::new();
    let opponent = BonusLedger::new();
    let target = card(
        CardColor::Blue,
        price(0, [0, 2, 0, 0, 0], Some(Bonus::Mask)),
    );
    let assets = assets(&ledger, &opponent, Some(&target));
    // two clay at the base trade cost of 2 each
    assert_eq!(assets.coins_for_price(&target.price), 4);
}

#[test]
fn covered_price_costs_only_the_base_coins() {
    let mut ledger = BonusLedger::new();
    ledger.add(Bonus::Wood, 2);
    ledger.add(Bonus::Glass, 1);
    let opponent = BonusLedger::new();
    let target = card(CardColor::Red, price(3, [2, 0, 0, 1, 0], None));
    let assets = assets(&ledger, &opponent, Some(&target));
    assert_eq!(assets.coins_for_price(&target.price), 3);
}

#[test]
fn opponent_production_raises_the_trade_cost() {
    let ledger = BonusLedger::new();
    let mut opponent = BonusLedger::new();
    opponent.add(Bonus::Wood, 2);
    let target = card(CardColor::Red, price(0, [2, 0, 0, 0, 0], None));
    let assets = assets(&ledger, &opponent, Some(&target));
    // each missing wood costs 2 + the opponent's two wood
    assert_eq!(assets.coins_for_price(&target.price), 8);
}

#[test]
fn trade_discount_caps_the_unit_cost_at_one() {
    let mut ledger = BonusLedger::new();
    ledger.add(Bonus::WoodTrade, 1);
    let mut opponent = BonusLedger::new();
    opponent.add(Bonus::Wood, 3);
    let target = card(CardColor::Red, price(0, [2, 0, 0, 0, 0], None));
    let assets = assets(&ledger, &opponent, Some(&target));
    assert_eq!(assets.coins_for_price(&target.price), 2);
}

#[test]
fn wildcards_cover_the_most_expensive_shortfall_first() {
    // architecture grants two universal wildcards when pricing a wonder
    let mut ledger = BonusLedger::new();
    ledger.add(Bonus::Architecture, 1);
    let mut opponent = BonusLedger::new();
    opponent.add(Bonus::Wood, 3); // wood trades at 5, glass at 2
    let wonder_price = price(0, [2, 0, 0, 1, 0], None);
    let assets = assets(&ledger, &opponent, None);
    // both wildcards must go to wood, leaving one glass at cost 2; a
    // glass-first allocation would cost 5 instead
    assert_eq!(assets.coins_for_price(&wonder_price), 2);
}

#[test]
fn general_pools_only_cover_their_own_resources() {
    let mut ledger = BonusLedger::new();
    ledger.add(Bonus::Materials, 2);
    let opponent = BonusLedger::new();
    let target = card(CardColor::Red, price(0, [1, 0, 0, 1, 0], None));
    let assets = assets(&ledger, &opponent, Some(&target));
    // materials cover the wood but never the glass
    assert_eq!(assets.coins_for_price(&target.price), 2);
}

#[test]
fn masonry_applies_to_blue_cards_only() {
    let mut ledger = BonusLedger::new();
    ledger.add(Bonus::Masonry, 1);
    let opponent = BonusLedger::new();

    let blue = card(CardColor::Blue, price(0, [0, 2, 0, 0, 0], None));
    let assets_blue = assets(&ledger, &opponent, Some(&blue));
    assert_eq!(assets_blue.coins_for_price(&blue.price), 0);

    let red = card(CardColor::Red, price(0, [0, 2, 0, 0, 0], None));
    let assets_red = assets(&ledger, &opponent, Some(&red));
    assert_eq!(assets_red.coins_for_price(&red.price), 4);
}

#[test]
fn pricing_is_pure() {
    let mut ledger = BonusLedger::new();
    ledger.add(Bonus::Materials, 1);
    ledger.add(Bonus::Wood, 1);
    let mut opponent = BonusLedger::new();
    opponent.add(Bonus::Clay, 1);
    let target = card(CardColor::Red, price(1, [2, 1, 0, 0, 0], None));
    let assets = assets(&ledger, &opponent, Some(&target));
    let first = assets.coins_for_price(&target.price);
    let second = assets.coins_for_price(&target.price);
    assert_eq!(first, second);
    // the ledger itself is untouched by pricing
    assert_eq!(ledger.get(Bonus::Materials), 1);
    assert_eq!(ledger.get(Bonus::Wood), 1);
}
