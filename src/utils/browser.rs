use tracing::{debug, warn};

/// URL of the live viewer's index on `port`
pub fn server_url(port: u16) -> String {
    format!("http://localhost:{}", port)
}

/// Open `target` in the default browser without waiting for it.
///
/// A failed launch is logged and otherwise ignored; the caller has already
/// printed where the output lives.
pub fn open_in_browser(target: &str) {
    match open::that_detached(target) {
        Ok(()) => debug!("Opened {}", target),
        Err(e) => warn!("Failed to open browser for {}: {}", target, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_url() {
        assert_eq!(server_url(8787), "http://localhost:8787");
        assert_eq!(server_url(80), "http://localhost:80");
    }
}
