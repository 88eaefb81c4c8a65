use thiserror::Error;

/// 游戏推进过程中可能出现的错误
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum GameError {
    /// 下注金额超过了玩家剩余的筹码
    #[error("筹码不足: 需要 {required}, 剩余 {available}")]
    InsufficientChips { required: u32, available: u32 },

    /// 从已发空的牌堆继续发牌
    #[error("牌堆已空, 无法继续发牌")]
    EmptyDeck,
}
