mod captured_logs;

pub use captured_logs::CapturedLogs;
