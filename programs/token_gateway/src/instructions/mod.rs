pub mod admin;
pub mod initialize;
pub mod map_tokens;
pub mod request_deposit;
pub mod request_withdrawal;
pub mod submit_signature;
pub mod validator_registry;
pub mod withdraw;

pub use admin::*;
pub use initialize::*;
pub use map_tokens::*;
pub use request_deposit::*;
pub use request_withdrawal::*;
pub use submit_signature::*;
pub use validator_registry::*;
pub use withdraw::*;
