use crate::error::GameError;
use rand::Rng;
use rand::prelude::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
// --- 核心数据结构定义 ---

/// 花色 (Suit)
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Suit {
    Spade,   // 黑桃 ♠️
    Heart,   // 红心 ♥️
    Club,    // 梅花 ♣️
    Diamond, // 方块 ♦️
}

/// 点数 (Rank)
/// Ord 的派生让 Ace 默认是最大的
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

/// 单张扑克牌 (Card)
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }
}

/// 牌力等级 (HandStrength)
/// 简化规则只区分三档牌力，不考虑同花、顺子等真实牌型。
/// 变体的顺序从小到大排列，可以直接利用 `Ord` 进行比较。
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum HandStrength {
    HighCard,     // 高牌
    Pair,         // 一对
    ThreeOfAKind, // 三条
}

impl HandStrength {
    /// 牌力对应的数值分数
    pub fn score(&self) -> u32 {
        match self {
            HandStrength::HighCard => 1,
            HandStrength::Pair => 2,
            HandStrength::ThreeOfAKind => 3,
        }
    }
}

// --- 实现辅助功能 ---

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Suit::Spade => "♠️",
            Suit::Heart => "♥️",
            Suit::Club => "♣️",
            Suit::Diamond => "♦️",
        })
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "T",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            HandStrength::HighCard => "高牌",
            HandStrength::Pair => "一对",
            HandStrength::ThreeOfAKind => "三条",
        })
    }
}

// --- 牌堆 ---

/// 一副扑克牌 (Deck)
/// 新建时包含 52 张互不重复的牌并已洗乱，发牌从末尾取出。
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// 创建一副完整的 52 张扑克牌并立即洗乱
    pub fn new(rng: &mut impl Rng) -> Deck {
        let suits = [Suit::Spade, Suit::Heart, Suit::Club, Suit::Diamond];
        let ranks = [
            Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven,
            Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace,
        ];
        let mut cards = Vec::with_capacity(52);
        for &suit in &suits {
            for &rank in &ranks {
                cards.push(Card { rank, suit });
            }
        }
        let mut deck = Deck { cards };
        deck.shuffle(rng);
        deck
    }

    /// 均匀地重新洗乱整副牌
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.cards.shuffle(rng);
    }

    /// 发出牌堆顶部 (末尾) 的一张牌
    pub fn deal(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

// --- 牌力评估逻辑 ---

/// 评估一手牌的简化牌力
/// 只统计点数出现的次数，花色被忽略：
/// 任一点数出现 3 次及以上算三条，2 次及以上算一对，否则是高牌。
pub fn evaluate_hand_strength(hand: &[Card]) -> HandStrength {
    let mut counts: HashMap<Rank, u8> = HashMap::new();
    for card in hand {
        *counts.entry(card.rank).or_insert(0) += 1;
    }

    if counts.values().any(|&c| c >= 3) {
        HandStrength::ThreeOfAKind
    } else if counts.values().any(|&c| c >= 2) {
        HandStrength::Pair
    } else {
        HandStrength::HighCard
    }
}

// --- 单元测试 ---
