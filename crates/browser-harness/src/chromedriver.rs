//! Local chromedriver process owned by a browser session

use crate::error::{HarnessError, Result};
use serde_json::Value;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::{Child, Command};
use tracing::{debug, info, instrument};

const READY_ATTEMPTS: u32 = 50;
const READY_POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub struct ChromeDriver {
    child: Child,
    port: u16,
}

impl ChromeDriver {
    /// Start chromedriver on `port` and wait until it accepts sessions.
    ///
    /// The process is killed if the returned handle is dropped.
    #[instrument]
    pub async fn spawn(program: &str, port: u16) -> Result<Self> {
        let child = Command::new(program)
            .arg(format!("--port={port}"))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| HarnessError::DriverSpawn {
                program: program.to_string(),
                source,
            })?;

        let mut driver = Self { child, port };
        driver.wait_until_ready().await?;
        info!(port, "chromedriver ready");

        Ok(driver)
    }

    pub fn url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    async fn wait_until_ready(&mut self) -> Result<()> {
        let http = reqwest::Client::new();
        let status_url = format!("{}/status", self.url());

        for attempt in 0..READY_ATTEMPTS {
            if let Some(status) = self.child.try_wait()? {
                return Err(HarnessError::SessionSetup {
                    reason: format!("chromedriver exited before becoming ready ({status})"),
                });
            }

            if let Ok(response) = http.get(&status_url).send().await {
                if response.status().is_success() {
                    if let Ok(body) = response.json::<Value>().await {
                        if status_is_ready(&body) {
                            return Ok(());
                        }
                    }
                }
            }

            debug!(attempt, "chromedriver not ready yet");
            tokio::time::sleep(READY_POLL_INTERVAL).await;
        }

        Err(HarnessError::SessionSetup {
            reason: format!(
                "chromedriver on port {} did not become ready within {:?}",
                self.port,
                READY_POLL_INTERVAL * READY_ATTEMPTS
            ),
        })
    }

    pub async fn stop(mut self) -> Result<()> {
        if self.child.try_wait()?.is_none() {
            self.child.kill().await?;
        }
        Ok(())
    }
}

/// Whether a WebDriver `/status` body reports readiness.
pub fn status_is_ready(body: &Value) -> bool {
    body.pointer("/value/ready")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}
