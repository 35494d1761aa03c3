//! Interactive input - forwards lines of a reader to the watch loop

use std::io::BufRead;
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

/// Read `reader` line by line on a background thread, passing each line to
/// `on_line`.
///
/// The thread stops at end of input, on a read error, or when `on_line`
/// returns `false` (the receiving side has gone away).
pub fn spawn_line_reader<R, F>(reader: R, mut on_line: F) -> JoinHandle<()>
where
    R: BufRead + Send + 'static,
    F: FnMut(String) -> bool + Send + 'static,
{
    thread::spawn(move || {
        for line in reader.lines() {
            match line {
                Ok(line) => {
                    if !on_line(line) {
                        debug!("command receiver closed");
                        return;
                    }
                }
                Err(e) => {
                    warn!(err = %e, "stopped reading interactive commands");
                    return;
                }
            }
        }
        debug!("interactive input closed");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::mpsc::channel;

    #[test]
    fn forwards_every_line_in_order() {
        let (tx, rx) = channel();
        let input = Cursor::new("verbose\nfoo bar\n\nverbose\n");
        spawn_line_reader(input, move |line| tx.send(line).is_ok())
            .join()
            .unwrap();

        let lines: Vec<String> = rx.iter().collect();
        assert_eq!(lines, vec!["verbose", "foo bar", "", "verbose"]);
    }

    #[test]
    fn stops_when_receiver_is_gone() {
        let (tx, rx) = channel::<String>();
        drop(rx);
        let input = Cursor::new("a\nb\nc\n");
        let mut seen = 0;
        spawn_line_reader(input, move |line| {
            seen += 1;
            assert_eq!(seen, 1, "reader kept going after a failed send");
            tx.send(line).is_ok()
        })
        .join()
        .unwrap();
    }
}
