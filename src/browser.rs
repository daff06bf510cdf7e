//! The page-rendering collaborator: a narrow capability interface over a
//! real browser, plus the headless Chrome implementation.
//!
//! The resolver only ever sees `PageEngine`/`Page`, so its scheme-fallback
//! logic is testable against a scripted fake with no network or Chrome
//! process involved.

use anyhow::{anyhow, Result};
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Navigation-level failures. All of these are recoverable per input;
/// only failing to launch the browser at all is fatal to the run.
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("navigation timed out")]
    Timeout,
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("certificate error: {0}")]
    Certificate(String),
    #[error("browser error: {0}")]
    Engine(String),
}

/// One isolated page context. Acquired per input, released on drop.
pub trait Page {
    /// Navigate to `url` and wait for the document to load, bounded by `timeout`.
    /// Server-side redirect chains are followed by the browser itself.
    fn navigate(&mut self, url: &str, timeout: Duration) -> Result<(), NavigationError>;

    /// Flat wait, used as the settle window for client-side redirects.
    fn wait(&mut self, duration: Duration);

    /// The browser's current address, read after navigation and settle.
    fn current_url(&self) -> String;
}

/// The opaque rendering engine: hands out isolated pages.
pub trait PageEngine {
    fn open_page(&self) -> Result<Box<dyn Page + '_>, NavigationError>;
}

/// Headless Chrome engine. The browser process (and its network context —
/// cookies, cache) is shared across the whole sequential run; tabs are not.
pub struct ChromeEngine {
    browser: Browser,
    user_agent: Option<String>,
}

impl ChromeEngine {
    /// Launch headless Chrome once for the run.
    /// Automatically disables the sandbox when running inside a container
    /// (detected via /.dockerenv or REDIRECTMAPPER_CONTAINER env var) and
    /// honors a CHROME_PATH override for the browser binary.
    pub fn launch(ignore_https_errors: bool, user_agent: Option<String>) -> Result<Self> {
        let is_container = std::env::var("REDIRECTMAPPER_CONTAINER").is_ok()
            || std::path::Path::new("/.dockerenv").exists();

        let chrome_path = std::env::var("CHROME_PATH")
            .ok()
            .map(std::path::PathBuf::from);

        let mut builder = LaunchOptions::default_builder();
        builder
            .headless(true)
            .ignore_certificate_errors(ignore_https_errors);
        if is_container {
            builder.sandbox(false);
        }
        if let Some(path) = chrome_path {
            builder.path(Some(path));
        }
        let options = builder
            .build()
            .map_err(|e| anyhow!("Failed to build Chrome launch options: {}", e))?;

        let browser = Browser::new(options)
            .map_err(|e| anyhow!("Failed to launch headless Chrome: {}", e))?;

        Ok(ChromeEngine {
            browser,
            user_agent,
        })
    }
}

impl PageEngine for ChromeEngine {
    fn open_page(&self) -> Result<Box<dyn Page + '_>, NavigationError> {
        let tab = self
            .browser
            .new_tab()
            .map_err(|e| NavigationError::Engine(format!("failed to open tab: {}", e)))?;

        if let Some(ua) = &self.user_agent {
            tab.set_user_agent(ua, None, None)
                .map_err(|e| NavigationError::Engine(format!("failed to set user agent: {}", e)))?;
        }

        Ok(Box::new(ChromeTab { tab }))
    }
}

/// A Chrome tab wrapped so it is closed on every exit path.
struct ChromeTab {
    tab: Arc<Tab>,
}

impl Page for ChromeTab {
    fn navigate(&mut self, url: &str, timeout: Duration) -> Result<(), NavigationError> {
        self.tab.set_default_timeout(timeout);
        self.tab
            .navigate_to(url)
            .map_err(|e| classify_chrome_error(&e))?;
        self.tab
            .wait_until_navigated()
            .map_err(|e| classify_chrome_error(&e))?;
        Ok(())
    }

    fn wait(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }

    fn current_url(&self) -> String {
        self.tab.get_url()
    }
}

impl Drop for ChromeTab {
    fn drop(&mut self) {
        if let Err(e) = self.tab.close(true) {
            debug!("Failed to close tab: {}", e);
        }
    }
}

/// Chrome reports transport failures as net::ERR_* strings inside the error
/// message; map them onto the navigation error taxonomy.
fn classify_chrome_error(err: &anyhow::Error) -> NavigationError {
    let msg = err.to_string();
    if msg.contains("ERR_CERT") || msg.contains("ERR_SSL") {
        NavigationError::Certificate(msg)
    } else if msg.contains("ERR_NAME_NOT_RESOLVED")
        || msg.contains("ERR_CONNECTION")
        || msg.contains("ERR_ADDRESS")
        || msg.contains("ERR_INTERNET_DISCONNECTED")
    {
        NavigationError::Connection(msg)
    } else if msg.contains("Timeout") || msg.contains("timed out") || msg.contains("never came") {
        NavigationError::Timeout
    } else {
        NavigationError::Engine(msg)
    }
}
