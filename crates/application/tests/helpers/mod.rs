mod captured_logs;
mod mock_stores;

#[allow(unused_imports)]
pub use captured_logs::CapturedLogs;
#[allow(unused_imports)]
pub use mock_stores::{MockColumnarConnector, MockLogTable, MockRelationalConnector};
