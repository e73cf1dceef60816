//! Combobot - Telegram bot serving daily crypto-game combos with Telebirr
//! receipt verification
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, and logging
//! - `receipt`: extraction of a transaction record from receipt OCR text
//! - `router`: pure dispatch of commands and callback labels to actions
//! - `combos`, `referrals`, `settings`: static data driving the responses
//! - `ocr`, `verification`: external collaborator seams
//! - `telegram`: teloxide integration and update handlers

pub mod cli;
pub mod combos;
pub mod core;
pub mod ocr;
pub mod receipt;
pub mod referrals;
pub mod router;
pub mod settings;
pub mod telegram;
pub mod verification;

// Re-export commonly used types for convenience
pub use self::core::{config, AppError, AppResult};
pub use receipt::{extract, TransactionRecord};
pub use router::{route, Action, ChatKind, DispatchEvent};
