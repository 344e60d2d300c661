use crate::{ChromeFinder, ChromeLauncher, Error, Profile, Result, ScrapeConfig};
use chromiumoxide::Page;
use chromiumoxide::browser::Browser;
use futures::StreamExt;
use std::process::Child;
use std::time::Duration;
use tokio::task::JoinHandle;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_RETRY_DELAY: Duration = Duration::from_millis(500);

/// One headless Chrome process plus the CDP connection into it
///
/// A session moves through exactly one lifetime: acquired, used, released.
/// Nothing survives across pipeline invocations. `release` must run on every
/// exit path; `Drop` backstops an abandoned session so the Chrome process
/// cannot outlive its owner.
pub struct BrowserSession {
    chrome: Option<Child>,
    page: Page,
    handler_task: JoinHandle<()>,
    // Keeps the CDP command channel open for the page handle
    _browser: Browser,
    _profile: Profile,
}

impl BrowserSession {
    /// Locate Chrome, spawn it headless with a fresh profile, and connect
    /// over the DevTools protocol
    ///
    /// Every failure here is fatal for the run. If Chrome was already
    /// spawned when the CDP handshake fails, the process is killed before
    /// the error is returned.
    pub async fn acquire(config: &ScrapeConfig) -> Result<Self> {
        let finder = ChromeFinder::new(config.chrome_path.clone());
        let chrome_binary = finder.find()?;
        tracing::debug!(path = %chrome_binary.display(), "located Chrome binary");

        let profile = Profile::create()?;
        let launcher = ChromeLauncher::new(
            chrome_binary,
            profile.path().to_path_buf(),
            config.debugging_port,
        );

        let mut chrome = launcher.launch()?;
        tracing::info!(pid = chrome.id(), "Chrome started");

        match Self::connect(config.debugging_port).await {
            Ok((browser, page, handler_task)) => Ok(Self {
                chrome: Some(chrome),
                page,
                handler_task,
                _browser: browser,
                _profile: profile,
            }),
            Err(e) => {
                let _ = chrome.kill();
                let _ = chrome.wait();
                Err(e)
            }
        }
    }

    /// Connect to Chrome with retries (the process may not be listening yet)
    async fn connect(debugging_port: u16) -> Result<(Browser, Page, JoinHandle<()>)> {
        let debug_url = format!("http://localhost:{}", debugging_port);

        let (browser, mut handler) = {
            let mut attempts_left = CONNECT_ATTEMPTS;
            loop {
                tracing::debug!("attempting CDP connection to {}", debug_url);
                match Browser::connect(&debug_url).await {
                    Ok(result) => {
                        tracing::debug!("CDP connection established");
                        break result;
                    }
                    Err(e) => {
                        attempts_left -= 1;
                        if attempts_left == 0 {
                            return Err(Error::DriverInit(format!(
                                "failed to connect to Chrome after {} attempts: {}",
                                CONNECT_ATTEMPTS, e
                            )));
                        }
                        tracing::debug!(
                            "CDP connection attempt failed, retrying ({} left)",
                            attempts_left
                        );
                        tokio::time::sleep(CONNECT_RETRY_DELAY).await;
                    }
                }
            }
        };

        // The handler must be polled for any page command to complete
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("CDP handler event error (continuing): {}", e);
                }
            }
        });

        // Chrome may still be creating its initial page
        tokio::time::sleep(Duration::from_millis(500)).await;

        let page = match Self::initial_page(&browser).await {
            Ok(page) => page,
            Err(e) => {
                handler_task.abort();
                return Err(e);
            }
        };

        Ok((browser, page, handler_task))
    }

    async fn initial_page(browser: &Browser) -> Result<Page> {
        let pages = browser
            .pages()
            .await
            .map_err(|e| Error::DriverInit(format!("failed to list Chrome pages: {}", e)))?;

        if let Some(page) = pages.first() {
            return Ok(page.clone());
        }

        browser
            .new_page("about:blank")
            .await
            .map_err(|e| Error::DriverInit(format!("failed to open a page: {}", e)))
    }

    /// The page this session drives
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Tear down the Chrome process and the CDP plumbing
    ///
    /// Idempotent: the second and later calls are no-ops. Never fails; a
    /// teardown problem is logged and the session is still considered closed.
    pub async fn release(&mut self) {
        let Some(mut chrome) = self.chrome.take() else {
            tracing::debug!("release called on an already closed session");
            return;
        };

        let pid = chrome.id();
        tracing::info!(pid, "closing browser session");

        let waited = tokio::task::spawn_blocking(move || {
            let _ = chrome.kill();
            chrome.wait()
        })
        .await;

        match waited {
            Ok(Ok(status)) => {
                tracing::debug!(pid, code = status.code().unwrap_or(-1), "Chrome exited")
            }
            Ok(Err(e)) => tracing::warn!(pid, "failed to reap Chrome process: {}", e),
            Err(e) => tracing::warn!(pid, "Chrome teardown task failed: {}", e),
        }

        self.handler_task.abort();
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        if let Some(mut chrome) = self.chrome.take() {
            tracing::warn!(
                pid = chrome.id(),
                "session dropped without release, killing Chrome"
            );
            let _ = chrome.kill();
            let _ = chrome.wait();
            self.handler_task.abort();
        }
    }
}

// Acquire/release against a live Chrome is exercised by running the CLI;
// the pure pieces (finder, launcher args, profile cleanup) have unit tests
// in their own modules.
