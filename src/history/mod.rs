//! Round history.

pub mod ledger;

pub use ledger::{HistoryLedger, PlayedMove, RoundRecord, EMPTY_LEDGER};
