use crate::card::{Card, Deck};
use crate::error::GameError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type PlayerId = Uuid;

/// 每位玩家入局时的初始筹码
pub const STARTING_CHIPS: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub hand: Vec<Card>,  // 底牌
    pub chips: u32,       // 剩余筹码
    pub current_bet: u32, // 本轮已投入的下注额
    pub in_game: bool,    // false 表示已弃牌
    pub is_ai: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GamePhase {
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
}

/// 玩家在下注轮中可执行的动作
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerAction {
    Fold,       // 弃牌
    Call,       // 跟注
    Raise(u32), // 加注，金额为在当前最高注之上增加的数额
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub players: Vec<Player>, // 按注册顺序行动
    pub community_cards: Vec<Card>,
    // 牌堆只在本地有意义，不参与序列化
    #[serde(skip)]
    pub deck: Deck,
    pub pot: u32, // 总奖池金额
    pub phase: GamePhase,
}

// --- Player 的实现方法 ---

impl Player {
    pub fn new(name: &str, is_ai: bool) -> Player {
        Player {
            id: Uuid::new_v4(),
            name: name.to_string(),
            hand: Vec::new(),
            chips: STARTING_CHIPS,
            current_bet: 0,
            in_game: true,
            is_ai,
        }
    }

    pub fn receive_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// 从筹码中扣除 `amount` 并累计到本轮下注额。
    /// 筹码不足时返回错误，玩家状态保持不变。
    pub fn bet(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.chips {
            return Err(GameError::InsufficientChips {
                required: amount,
                available: self.chips,
            });
        }
        self.chips -= amount;
        self.current_bet += amount;
        Ok(())
    }

    /// 弃牌后本局不再参与，无法恢复
    pub fn fold(&mut self) {
        self.in_game = false;
    }

    /// 清零本轮下注额，筹码与弃牌状态不受影响
    pub fn reset_bet(&mut self) {
        self.current_bet = 0;
    }

    /// 以逗号分隔的形式展示底牌
    pub fn show_hand(&self) -> String {
        self.hand
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// --- GameState 的实现方法 ---

impl GameState {
    pub fn new(players: Vec<Player>, rng: &mut impl Rng) -> GameState {
        GameState {
            players,
            community_cards: Vec::new(),
            deck: Deck::new(rng),
            pot: 0,
            phase: GamePhase::PreFlop,
        }
    }

    /// 按ID查找玩家昵称
    pub fn player_name(&self, id: &PlayerId) -> &str {
        self.players
            .iter()
            .find(|p| p.id == *id)
            .map_or("未知玩家", |p| p.name.as_str())
    }

    /// 仍未弃牌的玩家
    pub fn players_in_game(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.in_game)
    }
}

// --- 单元测试 ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use Rank::*;
    use Suit::*;

    // 辅助函数，用于快速创建牌
    fn card(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new("Alice", false);
        assert_eq!(player.name, "Alice");
        assert_eq!(player.chips, STARTING_CHIPS);
        assert_eq!(player.current_bet, 0);
        assert!(player.hand.is_empty());
        assert!(player.in_game);
        assert!(!player.is_ai);
    }

    #[test]
    fn test_bet_moves_chips_to_current_bet() {
        let mut player = Player::new("Alice", false);
        player.bet(40).unwrap();
        assert_eq!(player.chips, 60);
        assert_eq!(player.current_bet, 40);
    }

    #[test]
    fn test_bet_accumulates_within_round() {
        let mut player = Player::new("Alice", false);
        player.bet(10).unwrap();
        player.bet(15).unwrap();
        assert_eq!(player.chips, 75);
        assert_eq!(player.current_bet, 25);
    }

    #[test]
    fn test_bet_entire_stack() {
        let mut player = Player::new("Alice", false);
        player.bet(STARTING_CHIPS).unwrap();
        assert_eq!(player.chips, 0);
        assert_eq!(player.current_bet, STARTING_CHIPS);
    }

    #[test]
    fn test_bet_insufficient_chips_leaves_state_untouched() {
        let mut player = Player::new("Alice", false);
        let result = player.bet(101);
        assert_eq!(
            result,
            Err(GameError::InsufficientChips {
                required: 101,
                available: 100,
            })
        );
        assert_eq!(player.chips, 100);
        assert_eq!(player.current_bet, 0);
    }

    #[test]
    fn test_fold_is_permanent() {
        let mut player = Player::new("Alice", false);
        player.fold();
        assert!(!player.in_game);
        // 弃牌后重置下注额也不会恢复参与状态
        player.reset_bet();
        assert!(!player.in_game);
    }

    #[test]
    fn test_reset_bet_only_clears_current_bet() {
        let mut player = Player::new("Alice", false);
        player.bet(30).unwrap();
        player.reset_bet();
        assert_eq!(player.current_bet, 0);
        assert_eq!(player.chips, 70);
    }

    #[test]
    fn test_receive_card_grows_hand() {
        let mut player = Player::new("Alice", false);
        player.receive_card(card(Ace, Spade));
        player.receive_card(card(King, Heart));
        player.receive_card(card(Queen, Club));
        assert_eq!(player.hand.len(), 3);
    }

    #[test]
    fn test_show_hand_joins_with_comma() {
        let mut player = Player::new("Alice", false);
        player.receive_card(card(Ace, Spade));
        player.receive_card(card(King, Heart));
        assert_eq!(player.show_hand(), "♠️A, ♥️K");
    }

    #[test]
    fn test_new_game_state() {
        let players = vec![Player::new("Alice", false), Player::new("Bob", true)];
        let state = GameState::new(players, &mut StdRng::seed_from_u64(7));
        assert_eq!(state.players.len(), 2);
        assert_eq!(state.deck.len(), 52);
        assert!(state.community_cards.is_empty());
        assert_eq!(state.pot, 0);
        assert_eq!(state.phase, GamePhase::PreFlop);
    }

    #[test]
    fn test_player_name_lookup() {
        let players = vec![Player::new("Alice", false)];
        let state = GameState::new(players, &mut StdRng::seed_from_u64(7));
        let id = state.players[0].id;
        assert_eq!(state.player_name(&id), "Alice");
        assert_eq!(state.player_name(&Uuid::new_v4()), "未知玩家");
    }

    #[test]
    fn test_players_in_game_skips_folded() {
        let players = vec![
            Player::new("Alice", false),
            Player::new("Cat", false),
            Player::new("Dog", false),
        ];
        let mut state = GameState::new(players, &mut StdRng::seed_from_u64(7));
        state.players[1].fold();
        let names: Vec<&str> = state.players_in_game().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Dog"]);
    }
}
