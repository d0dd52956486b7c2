use super::engine::RenderEngine;
use crate::config::RenderConfig;
use crate::error::CardError;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::emulation::SetDeviceMetricsOverrideParams;
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::{Page, ScreenshotParams};
use futures_util::StreamExt;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Headless Chromium driven over CDP. One browser per process, one page per
/// capture.
pub struct ChromiumEngine {
    browser: RwLock<Option<Browser>>,
    timeout_secs: u64,
}

fn render_error(context: &str, err: impl std::fmt::Display) -> CardError {
    CardError::Render(format!("{context}: {err}"))
}

impl ChromiumEngine {
    /// Launch the browser. The returned task drives the CDP connection and
    /// ends once the browser is closed.
    pub async fn launch(config: &RenderConfig) -> Result<(Self, JoinHandle<()>), CardError> {
        let mut builder = BrowserConfig::builder()
            .window_size(1280, 720)
            .request_timeout(Duration::from_secs(config.timeout_secs))
            .arg("--hide-scrollbars")
            .arg("--disable-gpu");
        if config.no_sandbox {
            builder = builder.no_sandbox();
        }
        if let Some(path) = &config.chrome_executable {
            builder = builder.chrome_executable(path);
        }
        let browser_config = builder
            .build()
            .map_err(|e| render_error("invalid browser config", e))?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| render_error("failed to launch browser", e))?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(err) = event {
                    tracing::debug!(error = %err, "browser handler event failed");
                }
            }
        });

        tracing::info!(timeout_secs = config.timeout_secs, "browser launched");
        Ok((
            Self {
                browser: RwLock::new(Some(browser)),
                timeout_secs: config.timeout_secs,
            },
            handler_task,
        ))
    }

    async fn open_page(&self) -> Result<Page, CardError> {
        let guard = self.browser.read().await;
        let browser = guard
            .as_ref()
            .ok_or_else(|| CardError::Render("browser already closed".into()))?;
        browser
            .new_page("about:blank")
            .await
            .map_err(|e| render_error("failed to open page", e))
    }

    async fn capture_on(page: &Page, markup: &str, width: u32, height: u32) -> Result<Vec<u8>, CardError> {
        page.execute(SetDeviceMetricsOverrideParams::new(
            i64::from(width),
            i64::from(height),
            1.0,
            false,
        ))
        .await
        .map_err(|e| render_error("failed to size page", e))?;

        page.set_content(markup)
            .await
            .map_err(|e| render_error("failed to load markup", e))?;

        page.screenshot(
            ScreenshotParams::builder()
                .format(CaptureScreenshotFormat::Png)
                .build(),
        )
        .await
        .map_err(|e| render_error("screenshot failed", e))
    }

    async fn capture_bounded(&self, markup: &str, width: u32, height: u32) -> Result<Vec<u8>, CardError> {
        let bound = Duration::from_secs(self.timeout_secs);
        let timed_out = || CardError::Timeout {
            secs: self.timeout_secs,
        };

        let page = tokio::time::timeout(bound, self.open_page())
            .await
            .map_err(|_| timed_out())??;

        let outcome = tokio::time::timeout(bound, Self::capture_on(&page, markup, width, height)).await;

        if let Err(err) = page.close().await {
            tracing::warn!(error = %err, "failed to close render page");
        }

        outcome.map_err(|_| timed_out())?
    }

    /// Close the browser. Later captures fail with a render error.
    pub async fn close(&self) {
        let Some(mut browser) = self.browser.write().await.take() else {
            return;
        };
        if let Err(err) = browser.close().await {
            tracing::warn!(error = %err, "failed to close browser");
        }
        if let Err(err) = browser.wait().await {
            tracing::warn!(error = %err, "failed to reap browser process");
        }
    }
}

impl RenderEngine for ChromiumEngine {
    fn capture<'a>(
        &'a self,
        markup: &'a str,
        width: u32,
        height: u32,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>, CardError>> + Send + 'a>> {
        Box::pin(self.capture_bounded(markup, width, height))
    }
}
