// Singleton Pattern: one process-wide logger, created lazily on first use.

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;
use tracing::debug;

pub struct Logger {
    lines_logged: AtomicUsize,
}

impl Logger {
    /// Returns the shared instance, building it on the first call.
    ///
    /// `OnceLock` makes the first-call initialization safe even if several
    /// threads race for it; every caller sees the same `&'static Logger`.
    pub fn global() -> &'static Logger {
        static INSTANCE: OnceLock<Logger> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            debug!("creating global logger");
            Logger {
                lines_logged: AtomicUsize::new(0),
            }
        })
    }

    pub fn log(&self, message: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Log: {}", message)?;
        self.lines_logged.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Total lines written through the shared instance since process start.
    pub fn lines_logged(&self) -> usize {
        self.lines_logged.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_same_instance() {
        let first = Logger::global();
        let second = Logger::global();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_log_format() {
        let mut out = Vec::new();
        Logger::global().log("System started.", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Log: System started.\n");
    }

    #[test]
    fn test_counter_is_shared() {
        // Other tests log through the same instance, so only check growth.
        let before = Logger::global().lines_logged();
        let mut out = Vec::new();
        Logger::global().log("one", &mut out).unwrap();
        Logger::global().log("two", &mut out).unwrap();
        assert!(Logger::global().lines_logged() >= before + 2);
    }

    #[test]
    fn test_same_instance_across_threads() {
        let addresses: Vec<usize> = (0..4)
            .map(|_| thread::spawn(|| Logger::global() as *const Logger as usize))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        let local = Logger::global() as *const Logger as usize;
        assert!(addresses.iter().all(|&addr| addr == local));
    }
}
