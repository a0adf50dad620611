//! Assets module - the fixed-term asset model, withdrawals and interest math.

mod assets_model;
pub mod interest;
mod withdrawal_model;


// Re-export the public interface
pub use assets_model::{Asset, NewAsset};
pub use interest::{interest_return, quantize_rate, round_half_up};
pub use withdrawal_model::Withdrawal;
