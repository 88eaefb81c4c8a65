use std::io::Write;
use std::process::exit;

use rand::Rng;
use tracing::{error, info};

use poker_night_core::{
    betting_round, deal_community_cards, deal_hands, showdown, DecisionSource, GameError,
    GameEvent, GamePhase, GameState, Player, PlayerAction,
};

/// 从标准输入读取交互玩家动作的决策来源
struct ConsoleInput;

impl DecisionSource for ConsoleInput {
    fn decide(&mut self, player: &Player, highest_bet: u32) -> PlayerAction {
        println!(
            "\n轮到 {} 行动 (剩余筹码: {}, 当前最高注: {})",
            player.name, player.chips, highest_bet
        );
        print!("可用命令: fold | call | raise <金额> > ");
        std::io::stdout().flush().unwrap();

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line).is_err() {
            println!("读取输入失败, 视为弃牌");
            return PlayerAction::Fold;
        }
        parse_action(&line)
    }
}

/// 解析一行命令，无法识别的输入一律视为弃牌
fn parse_action(line: &str) -> PlayerAction {
    let lower = line.trim().to_lowercase();
    let parts: Vec<&str> = lower.split_whitespace().collect();
    match parts.as_slice() {
        ["fold"] => PlayerAction::Fold,
        ["call"] => PlayerAction::Call,
        ["raise", amount] => match amount.parse::<u32>() {
            Ok(n) => PlayerAction::Raise(n),
            Err(_) => {
                println!("无效的金额, 视为弃牌");
                PlayerAction::Fold
            }
        },
        _ => {
            println!("未知命令, 视为弃牌");
            PlayerAction::Fold
        }
    }
}

fn phase_name(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::PreFlop => "翻牌前",
        GamePhase::Flop => "翻牌",
        GamePhase::Turn => "转牌",
        GamePhase::River => "河牌",
        GamePhase::Showdown => "摊牌",
    }
}

/// 将一批游戏事件打印到控制台
fn render_events(state: &GameState, events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::HandStarted { player_order } => {
                let names: Vec<&str> = player_order
                    .iter()
                    .map(|id| state.player_name(id))
                    .collect();
                println!("--- 新的一局开始: {} ---", names.join(", "));
            }
            GameEvent::HoleCardsDealt { player_id, cards } => {
                println!(
                    "{} 的底牌: {} {}",
                    state.player_name(player_id),
                    cards.0,
                    cards.1
                );
            }
            GameEvent::BettingRoundStarted { phase } => {
                println!("\n=== {}下注轮 ===", phase_name(*phase));
            }
            GameEvent::PlayerActed {
                player_id,
                action,
                delta,
                new_stack,
                new_pot,
            } => {
                let name = state.player_name(player_id);
                match action {
                    PlayerAction::Fold => println!("{} 弃牌", name),
                    PlayerAction::Call => println!(
                        "{} 跟注 {} (剩余筹码: {}, 奖池: {})",
                        name, delta, new_stack, new_pot
                    ),
                    PlayerAction::Raise(amount) => println!(
                        "{} 加注 {}, 共投入 {} (剩余筹码: {}, 奖池: {})",
                        name, amount, delta, new_stack, new_pot
                    ),
                }
            }
            GameEvent::CommunityCardsDealt { phase, cards } => {
                let text: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
                println!("\n{}: {}", phase_name(*phase), text.join(" "));
            }
            GameEvent::Showdown { results } => {
                println!("\n=== 摊牌 ===");
                for result in results {
                    println!(
                        "{} 的牌力: {}",
                        state.player_name(&result.player_id),
                        result.strength
                    );
                }
            }
            GameEvent::Winners { player_ids } => {
                if player_ids.is_empty() {
                    println!("所有玩家都已弃牌, 本局没有赢家");
                } else {
                    for id in player_ids {
                        println!("赢家是 {}!", state.player_name(id));
                    }
                }
            }
        }
    }
}

/// 进行完整的一局并逐步打印过程
fn run_hand(
    state: &mut GameState,
    input: &mut dyn DecisionSource,
    rng: &mut impl Rng,
) -> Result<(), GameError> {
    let events = deal_hands(state)?;
    render_events(state, &events);
    let events = betting_round(state, input, rng)?;
    render_events(state, &events);

    for _ in 0..3 {
        let events = deal_community_cards(state)?;
        render_events(state, &events);
        let events = betting_round(state, input, rng)?;
        render_events(state, &events);
    }

    println!("\n--- 最终手牌 ---");
    for player in &state.players {
        println!("{}: {}", player.name, player.show_hand());
    }
    println!("奖池总额: {}", state.pot);

    let events = showdown(state);
    render_events(state, &events);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let players = vec![
        Player::new("Alice", false),
        Player::new("Cat", false),
        Player::new("Dog", false),
        Player::new("Bob (AI)", true),
    ];

    let mut rng = rand::rng();
    let mut state = GameState::new(players, &mut rng);
    info!("牌局开始, 共 {} 名玩家", state.players.len());

    let mut input = ConsoleInput;
    if let Err(e) = run_hand(&mut state, &mut input, &mut rng) {
        error!("牌局异常终止: {}", e);
        exit(1);
    }
    info!("牌局正常结束");
}

// --- 单元测试 ---
