mod columnar_log_store;
mod relational_log_store;

pub use columnar_log_store::{ColumnarConnector, ColumnarLogStore};
pub use relational_log_store::{RelationalConnector, RelationalLogStore};
