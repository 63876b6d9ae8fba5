use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::json;

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests
        // Assumes debug profile; adjust if you run tests with --release
        let mut cmd = Command::new("target/debug/cookshare-api");
        cmd.env("COOKSHARE_API_PORT", port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Inherit environment so the server can see DATABASE_URL from .env (loaded by the server)
        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline { break; }
            let url = format!("{}/health", self.base_url);
            match client.get(&url).send().await {
                Ok(resp) => {
                    // Consider server ready on any non-404 response
                    if resp.status() == StatusCode::OK || resp.status() == StatusCode::SERVICE_UNAVAILABLE {
                        return Ok(());
                    }
                }
                Err(_) => {}
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    // Use stable get_or_init and convert init errors into a panic with context.
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Unique email per call so reruns never collide on the unique index
#[allow(dead_code)]
pub fn unique_email(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("{}+{}@cookshare.test", prefix, nanos)
}

/// Register a fresh account and log it in. Returns (email, username, token).
#[allow(dead_code)]
pub async fn register_and_login(
    server: &TestServer,
    prefix: &str,
) -> Result<(String, String, String)> {
    let client = reqwest::Client::new();
    let email = unique_email(prefix);
    let username = format!("{}-user", prefix);

    let res = client
        .post(format!("{}/api/auth/register", server.base_url))
        .json(&json!({ "username": username, "email": email, "password": "s3cret!pw" }))
        .send()
        .await?;
    anyhow::ensure!(
        res.status() == StatusCode::CREATED,
        "register failed with {}",
        res.status()
    );

    let res = client
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&json!({ "email": email, "password": "s3cret!pw" }))
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::OK, "login failed with {}", res.status());

    let body = res.json::<serde_json::Value>().await?;
    let token = body["token"]
        .as_str()
        .context("login response missing token")?
        .to_string();

    Ok((email, username, token))
}
