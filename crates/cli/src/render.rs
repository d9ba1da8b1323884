use duelis_core::{CardBoard, Catalog, Event, Game, Phase, SlotFace, Winner};

pub fn render_board(board: &CardBoard) -> String {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut last_row = usize::MAX;
    for slot in board.slots() {
        if slot.row != last_row {
            rows.push(Vec::new());
            last_row = slot.row;
        }
        let cell = match slot.face {
            SlotFace::Empty => ".".to_string(),
            SlotFace::FaceDown if slot.guild_back => "#".to_string(),
            SlotFace::FaceDown => "X".to_string(),
            SlotFace::Revealed(card) => format!("{card}"),
        };
        if let Some(row) = rows.last_mut() {
            row.push(cell);
        }
    }

    let mut out = String::new();
    for row in rows {
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

pub fn render_status(game: &Game) -> String {
    let mut out = format!(
        "age {} | phase {:?} | player {} to move | pawn {:+}\n",
        game.age + 1,
        game.phase,
        game.current_player,
        game.military.conflict_pawn
    );
    for player in &game.players {
        out.push_str(&format!(
            "  player {}: {} coins, {} cards, {}/{} wonders built, {} tokens\n",
            player.index,
            player.coins,
            player.cards.len(),
            player.built_wonders(),
            player.wonders.len(),
            player.progress_tokens.len()
        ));
    }
    out
}

pub fn describe_event(event: &Event, catalog: &Catalog) -> String {
    match event {
        Event::WonderDrafted { player, wonder } => {
            format!("player {player} drafts {}", catalog.wonder(*wonder).name)
        }
        Event::AgeStarted { age } => format!("age {} begins", age + 1),
        Event::CardBought {
            player,
            card,
            price,
        } => format!(
            "player {player} buys {} for {price} coins",
            catalog.card(*card).name
        ),
        Event::CardDiscarded {
            player,
            card,
            coins,
        } => format!(
            "player {player} discards {} for {coins} coins",
            catalog.card(*card).name
        ),
        Event::WonderBuilt {
            player,
            wonder,
            card,
            price,
        } => format!(
            "player {player} builds {} with {} for {price} coins",
            catalog.wonder(*wonder).name,
            catalog.card(*card).name
        ),
        Event::CardDestroyed { player, card } => {
            format!("player {player} loses {}", catalog.card(*card).name)
        }
        Event::ProgressTokenPicked { player, token } => {
            format!("player {player} picks {}", catalog.token(*token).name)
        }
        Event::DiscardedCardTaken { player, card } => format!(
            "player {player} takes {} from the discard pile",
            catalog.card(*card).name
        ),
        Event::ConflictPawnMoved { position } => {
            format!("conflict pawn at {position:+}")
        }
        Event::MilitaryTokenLost { player, coins } => {
            format!("player {player} loses a military token ({coins} coins)")
        }
        Event::StartPlayerPicked { second } => {
            format!("player {} will move second", second)
        }
        Event::GameFinished { winner } => match winner {
            Winner::Player(player) => format!("player {player} wins"),
            Winner::Draw => "the game is a draw".to_string(),
        },
    }
}

pub fn describe_action(game: &Game, action: &duelis_core::Action) -> String {
    use duelis_core::Action;
    let catalog = &game.catalog;
    match action {
        Action::BuyCard { card, .. } => format!("buy {}", catalog.card(*card).name),
        Action::DiscardCard { card, .. } => format!("discard {}", catalog.card(*card).name),
        Action::DestroyCard { card } => format!("destroy {}", catalog.card(*card).name),
        Action::PickWonder { wonder } => format!("draft {}", catalog.wonder(*wonder).name),
        Action::BuildWonder { wonder, card, .. } => format!(
            "build {} with {}",
            catalog.wonder(*wonder).name,
            catalog.card(*card).name
        ),
        Action::PickStartPlayer { player } => {
            format!("let player {} move second", player)
        }
        Action::PickProgressToken { token } => {
            format!("pick {}", catalog.token(*token).name)
        }
        Action::PickDiscardedCard { card } => {
            format!("take {} from the discard pile", catalog.card(*card).name)
        }
    }
}

pub fn phase_prompt(phase: Phase) -> &'static str {
    match phase {
        Phase::PickWonder => "draft a wonder",
        Phase::NormalTurn => "take a turn",
        Phase::PickProgressToken | Phase::PickRestProgressToken => "pick a progress token",
        Phase::PickStartPlayer => "choose who moves second",
        Phase::DestroyBrown => "destroy a brown card",
        Phase::DestroyGray => "destroy a gray card",
        Phase::SelectDiscarded => "take a discarded card",
        Phase::Finished => "game over",
    }
}
