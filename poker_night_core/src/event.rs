use crate::card::{Card, HandStrength};
use crate::state::{GamePhase, PlayerAction, PlayerId};
use serde::{Deserialize, Serialize};

// --- 游戏进程事件 ---
// 逻辑函数在推进游戏时产出事件批次，由上层（如控制台前端）负责呈现。

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// 新的一局开始
    HandStarted {
        /// 本局参与玩家的行动顺序
        player_order: Vec<PlayerId>,
    },

    /// 玩家收到两张底牌
    HoleCardsDealt {
        player_id: PlayerId,
        cards: (Card, Card),
    },

    /// 新的下注轮开始
    BettingRoundStarted { phase: GamePhase },

    /// 玩家执行了一个动作
    PlayerActed {
        player_id: PlayerId,
        action: PlayerAction,
        /// 本次动作投入奖池的筹码数
        delta: u32,
        /// 执行动作后，该玩家剩余的筹码
        new_stack: u32,
        /// 执行动作后，总奖池金额
        new_pot: u32,
    },

    /// 发出公共牌 (翻牌、转牌、河牌)
    CommunityCardsDealt {
        phase: GamePhase,
        cards: Vec<Card>,
    },

    /// 摊牌阶段，公布各玩家的牌力
    Showdown { results: Vec<ShowdownResult> },

    /// 本局赢家，所有玩家都弃牌时为空
    Winners { player_ids: Vec<PlayerId> },
}

/// 在 Showdown 事件中，用于描述单个玩家的结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownResult {
    pub player_id: PlayerId,
    /// 玩家底牌的简化牌力
    pub strength: HandStrength,
}
