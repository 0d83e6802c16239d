//! Execute handlers for the TimeLockr contract.
//!
//! - `ledger` - LockMessage and UnlockMessage
//! - `policy` - fee, minimum lock time and fee withdrawal
//! - `admin` - whitelist and ownership management

mod admin;
mod ledger;
mod policy;

pub use admin::*;
pub use ledger::*;
pub use policy::*;
