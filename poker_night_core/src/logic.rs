use crate::card::evaluate_hand_strength;
use crate::error::GameError;
use crate::event::{GameEvent, ShowdownResult};
use crate::state::{GamePhase, GameState, Player, PlayerAction};
use rand::Rng;

// --- 决策来源 ---

/// 交互式玩家的决策入口。
/// 控制台前端基于标准输入实现，测试中则使用预先编排好的动作序列。
pub trait DecisionSource {
    fn decide(&mut self, player: &Player, highest_bet: u32) -> PlayerAction;
}

/// AI 玩家的决策逻辑。
/// 无人下注或掷硬币为正时跟注，否则在 `[1, chips)` 内随机加注。
/// AI 从不弃牌；筹码少于 2 时加注区间为空，退化为跟注。
pub fn ai_decision(player: &Player, highest_bet: u32, rng: &mut impl Rng) -> PlayerAction {
    if highest_bet == 0 || player.chips < 2 || rng.random_range(0..2) == 0 {
        PlayerAction::Call
    } else {
        PlayerAction::Raise(rng.random_range(1..player.chips))
    }
}

// --- 发牌 ---

/// 发底牌：两轮循环，每轮按顺序给每位玩家发一张
pub fn deal_hands(state: &mut GameState) -> Result<Vec<GameEvent>, GameError> {
    let mut events = vec![GameEvent::HandStarted {
        player_order: state.players.iter().map(|p| p.id).collect(),
    }];

    for _ in 0..2 {
        for player in &mut state.players {
            let card = state.deck.deal()?;
            player.receive_card(card);
        }
    }

    for player in &state.players {
        events.push(GameEvent::HoleCardsDealt {
            player_id: player.id,
            cards: (player.hand[0], player.hand[1]),
        });
    }

    Ok(events)
}

/// 推进游戏阶段并发出对应数量的公共牌。
/// 翻牌 3 张，转牌和河牌各 1 张；河牌之后不再有公共牌。
pub fn deal_community_cards(state: &mut GameState) -> Result<Vec<GameEvent>, GameError> {
    let (next_phase, count) = match state.phase {
        GamePhase::PreFlop => (GamePhase::Flop, 3),
        GamePhase::Flop => (GamePhase::Turn, 1),
        GamePhase::Turn => (GamePhase::River, 1),
        GamePhase::River | GamePhase::Showdown => return Ok(Vec::new()),
    };

    let mut cards = Vec::with_capacity(count);
    for _ in 0..count {
        cards.push(state.deck.deal()?);
    }
    state.community_cards.extend_from_slice(&cards);
    state.phase = next_phase;

    Ok(vec![GameEvent::CommunityCardsDealt {
        phase: next_phase,
        cards,
    }])
}

// --- 下注轮 ---

/// 执行一轮下注。
/// 按注册顺序对每位未弃牌的玩家征询一次动作；每轮的最高注从 0 开始。
/// 加注不会让先行动的玩家重新行动，一轮结束后统一清零所有人的下注额。
pub fn betting_round(
    state: &mut GameState,
    input: &mut dyn DecisionSource,
    rng: &mut impl Rng,
) -> Result<Vec<GameEvent>, GameError> {
    let mut events = vec![GameEvent::BettingRoundStarted { phase: state.phase }];
    let mut highest_bet: u32 = 0;

    for idx in 0..state.players.len() {
        if !state.players[idx].in_game {
            continue;
        }

        let action = if state.players[idx].is_ai {
            ai_decision(&state.players[idx], highest_bet, rng)
        } else {
            input.decide(&state.players[idx], highest_bet)
        };

        let player = &mut state.players[idx];
        let delta = match action {
            PlayerAction::Fold => {
                player.fold();
                0
            }
            PlayerAction::Call => {
                // 单次遍历下 current_bet 不会超过 highest_bet
                let delta = highest_bet - player.current_bet;
                player.bet(delta)?;
                delta
            }
            PlayerAction::Raise(amount) => {
                let total = highest_bet + amount;
                let delta = total - player.current_bet;
                player.bet(delta)?;
                highest_bet = total;
                delta
            }
        };
        state.pot += delta;

        events.push(GameEvent::PlayerActed {
            player_id: state.players[idx].id,
            action,
            delta,
            new_stack: state.players[idx].chips,
            new_pot: state.pot,
        });
    }

    for player in &mut state.players {
        player.reset_bet();
    }

    Ok(events)
}

// --- 摊牌 ---

/// 摊牌：只评估各玩家自己的底牌，公共牌不参与计分。
/// 牌力最高的所有玩家并列获胜；全部弃牌时没有赢家。
pub fn showdown(state: &mut GameState) -> Vec<GameEvent> {
    state.phase = GamePhase::Showdown;

    let results: Vec<ShowdownResult> = state
        .players_in_game()
        .map(|p| ShowdownResult {
            player_id: p.id,
            strength: evaluate_hand_strength(&p.hand),
        })
        .collect();

    let player_ids = match results.iter().map(|r| r.strength).max() {
        Some(best) => results
            .iter()
            .filter(|r| r.strength == best)
            .map(|r| r.player_id)
            .collect(),
        None => Vec::new(),
    };

    vec![
        GameEvent::Showdown { results },
        GameEvent::Winners { player_ids },
    ]
}

// --- 整局流程 ---

/// 完整地进行一局：发底牌、翻牌前下注，之后每发一次公共牌下注一轮，最后摊牌
pub fn play_hand(
    state: &mut GameState,
    input: &mut dyn DecisionSource,
    rng: &mut impl Rng,
) -> Result<Vec<GameEvent>, GameError> {
    let mut events = deal_hands(state)?;
    events.extend(betting_round(state, input, rng)?);
    for _ in 0..3 {
        events.extend(deal_community_cards(state)?);
        events.extend(betting_round(state, input, rng)?);
    }
    events.extend(showdown(state));
    Ok(events)
}

// --- 单元测试 ---
