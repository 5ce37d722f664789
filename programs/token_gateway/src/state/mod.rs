pub mod deposit;
pub mod gateway;
pub mod token_registry;
pub mod validator_registry;
pub mod withdrawal;

pub use deposit::*;
pub use gateway::*;
pub use token_registry::*;
pub use validator_registry::*;
pub use withdrawal::*;
