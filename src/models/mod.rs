pub mod filter;
pub mod store;
pub mod transaction;

pub use filter::FilterCriteria;
pub use store::StoreSnapshot;
pub use transaction::{CategoryRef, Entry, RawCategory, Transaction, TransactionType};
