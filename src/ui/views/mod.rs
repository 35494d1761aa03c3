pub mod report;
pub mod watch;

/// Local wall-clock time as `HH:MM:SS`
pub fn timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
