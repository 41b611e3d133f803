pub mod normalize_token;
pub use normalize_token::normalize_token;

pub mod sorted_vocabulary;
pub use sorted_vocabulary::sorted_vocabulary;
