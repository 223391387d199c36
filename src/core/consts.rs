pub const NUM_SUITS: usize = 4;
pub const NUM_RANKS: usize = 13;
pub const NUM_CARDS: usize = NUM_SUITS * NUM_RANKS;
pub const TABLEAU_COLUMNS: usize = 7;
/// Cards dealt onto the tableau; the rest of the deck becomes the stock.
pub const TABLEAU_DEAL_SIZE: usize = TABLEAU_COLUMNS * (TABLEAU_COLUMNS + 1) / 2;

pub const ACE_RANK: u8 = 0;
pub const KING_RANK: u8 = (NUM_RANKS - 1) as u8;

/// End of a chain, or an empty pile.
pub const NULL_INDEX: u8 = NUM_CARDS as u8;
/// Face-down card placeholder. Only ever used for rendering.
pub const HIDDEN_INDEX: u8 = NUM_CARDS as u8 + 1;

// move ranking
pub const REVEAL_BONUS: i32 = 20;
pub const OPEN_COLUMN_BONUS: i32 = 15;
pub const WASTE_TO_TABLEAU_VALUE: i32 = 5;
pub const DRAW_VALUE: i32 = 1;
pub const HIGH_FOUNDATION_MAX_RANK: u8 = 2;
pub const MIDDLE_FOUNDATION_MAX_RANK: u8 = 5;
pub const HIGH_FOUNDATION_BONUS: i32 = 50;
pub const MIDDLE_FOUNDATION_BONUS: i32 = 30;
pub const LOW_FOUNDATION_BONUS: i32 = 20;

// generation
pub const DEFAULT_MAX_DEPTH: usize = 6;
pub const PROGRESS_LOG_INTERVAL: usize = 10_000;

// export
pub const START_COLOR: u32 = 0x1446A0FF;
pub const END_COLOR: u32 = 0xDB3069FF;
pub const WINNING_COLOR: u32 = 0x4CAF50FF;
pub const DEADEND_COLOR: u32 = 0xF5D547FF;
pub const NODE_MIN_SIZE: f32 = 1.0;
pub const NODE_MAX_SIZE: f32 = 4.0;
