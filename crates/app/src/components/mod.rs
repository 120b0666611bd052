pub mod chain_hash;
pub mod list_filters;
pub mod list_table;
pub mod status_badge;

pub use chain_hash::{ChainHash, ChainRef};
pub use list_filters::ListFilters;
pub use list_table::ListTable;
pub use status_badge::StatusBadge;
