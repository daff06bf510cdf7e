//! Scripted fake page engine shared by the integration tests.
//!
//! Each candidate URL is matched against a script of steps; navigation
//! either fails with a given error or lands on a given final URL. The fake
//! records every page open/close so tests can assert per-input isolation.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use redirectmapper::browser::{NavigationError, Page, PageEngine};

/// What the fake browser should do for a given start URL.
#[derive(Clone)]
pub enum Script {
    /// Navigation succeeds and the address bar ends up at this URL.
    LandOn(&'static str),
    /// Navigation fails with a connection error.
    RefuseConnection,
    /// Navigation fails with a timeout.
    TimeOut,
    /// Navigation fails with a certificate error.
    BadCertificate,
}

#[derive(Default)]
pub struct FakeStats {
    pub pages_opened: usize,
    pub pages_closed: usize,
    pub navigations: Vec<String>,
    pub settle_waits: usize,
}

pub struct FakeEngine {
    scripts: HashMap<&'static str, Script>,
    pub stats: RefCell<FakeStats>,
}

impl FakeEngine {
    pub fn new(scripts: Vec<(&'static str, Script)>) -> Self {
        FakeEngine {
            scripts: scripts.into_iter().collect(),
            stats: RefCell::new(FakeStats::default()),
        }
    }
}

impl PageEngine for FakeEngine {
    fn open_page(&self) -> Result<Box<dyn Page + '_>, NavigationError> {
        self.stats.borrow_mut().pages_opened += 1;
        Ok(Box::new(FakePage {
            engine: self,
            current_url: String::new(),
        }))
    }
}

struct FakePage<'a> {
    engine: &'a FakeEngine,
    current_url: String,
}

impl Page for FakePage<'_> {
    fn navigate(&mut self, url: &str, _timeout: Duration) -> Result<(), NavigationError> {
        self.engine.stats.borrow_mut().navigations.push(url.to_string());
        match self.engine.scripts.get(url) {
            Some(Script::LandOn(final_url)) => {
                self.current_url = final_url.to_string();
                Ok(())
            }
            Some(Script::RefuseConnection) => Err(NavigationError::Connection(format!(
                "net::ERR_CONNECTION_REFUSED at {}",
                url
            ))),
            Some(Script::TimeOut) => Err(NavigationError::Timeout),
            Some(Script::BadCertificate) => Err(NavigationError::Certificate(format!(
                "net::ERR_CERT_AUTHORITY_INVALID at {}",
                url
            ))),
            // Anything unscripted behaves like an unresolvable host.
            None => Err(NavigationError::Connection(format!(
                "net::ERR_NAME_NOT_RESOLVED at {}",
                url
            ))),
        }
    }

    fn wait(&mut self, _duration: Duration) {
        self.engine.stats.borrow_mut().settle_waits += 1;
    }

    fn current_url(&self) -> String {
        self.current_url.clone()
    }
}

impl Drop for FakePage<'_> {
    fn drop(&mut self) {
        self.engine.stats.borrow_mut().pages_closed += 1;
    }
}
