pub mod initialize;
pub mod start_vesting;
pub mod stop_vesting;
pub mod join;
pub mod claim_reward;
pub mod show_reward_to_claim;
pub mod round_views;
pub mod sweep_inactive_balance;

pub use initialize::*;
pub use start_vesting::*;
pub use stop_vesting::*;
pub use join::*;
pub use claim_reward::*;
pub use show_reward_to_claim::*;
pub use round_views::*;
pub use sweep_inactive_balance::*;
