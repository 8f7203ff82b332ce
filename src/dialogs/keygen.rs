//! Tunnel key pair generation.
//!
//! Generation runs outside the dialog: [`spawn_key_generation`] detaches a
//! task and posts the result back as a form message. The dialog keeps
//! accepting edits and submits in the meantime, and a completion that
//! arrives after a manual edit overwrites it.

use std::{path::PathBuf, process::Stdio, sync::Arc};

use async_trait::async_trait;
use tokio::{process::Command, sync::mpsc::UnboundedSender, task::JoinHandle};
use tracing::{debug, instrument, warn};

use crate::services::network_manager::NetworkError;

/// Default location of the `wg` tool.
pub const DEFAULT_WG_BINARY: &str = "/usr/bin/wg";

/// A freshly generated key pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    /// Public half, shown to the operator.
    pub public_key: String,
    /// Private half, written into the profile.
    pub private_key: String,
}

/// Produces tunnel key pairs.
#[async_trait]
pub trait KeyGenerator: Send + Sync {
    /// Generates a new pair.
    ///
    /// # Errors
    /// Returns `NetworkError::KeyGenerationFailed` if no pair could be produced.
    async fn generate_key_pair(&self) -> Result<KeyPair, NetworkError>;
}

/// Generates keys with the `wg` command line tool.
#[derive(Debug, Clone)]
pub struct WgKeyGenerator {
    wg_binary: PathBuf,
}

impl WgKeyGenerator {
    /// Generator using the `wg` binary at `wg_binary`.
    pub fn new(wg_binary: impl Into<PathBuf>) -> Self {
        Self {
            wg_binary: wg_binary.into(),
        }
    }

    fn script(&self) -> String {
        let wg = self.wg_binary.display();
        format!("KEY=$({wg} genkey) && echo $KEY | {wg} pubkey && echo $KEY")
    }
}

impl Default for WgKeyGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_WG_BINARY)
    }
}

#[async_trait]
impl KeyGenerator for WgKeyGenerator {
    #[instrument(skip(self), fields(wg = %self.wg_binary.display()))]
    async fn generate_key_pair(&self) -> Result<KeyPair, NetworkError> {
        let output = Command::new("sh")
            .arg("-c")
            .arg(self.script())
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| NetworkError::KeyGenerationFailed(format!("cannot run shell: {e}")))?;

        if !output.status.success() {
            return Err(NetworkError::KeyGenerationFailed(format!(
                "key script exited with {}",
                output.status
            )));
        }

        parse_key_output(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Splits the key script output: public key first, private key second.
///
/// # Errors
/// Returns `NetworkError::KeyGenerationFailed` when either line is missing.
pub fn parse_key_output(stdout: &str) -> Result<KeyPair, NetworkError> {
    let mut lines = stdout.lines().map(str::trim);

    match (lines.next(), lines.next()) {
        (Some(public_key), Some(private_key))
            if !public_key.is_empty() && !private_key.is_empty() =>
        {
            Ok(KeyPair {
                public_key: public_key.to_string(),
                private_key: private_key.to_string(),
            })
        }
        _ => Err(NetworkError::KeyGenerationFailed(
            "expected a public and a private key line".to_string(),
        )),
    }
}

/// Runs `generator` on a detached task and sends the pair to `sender`.
///
/// Failures are logged and nothing is sent. A dialog closed before
/// completion simply drops the message.
pub fn spawn_key_generation<M>(
    generator: Arc<dyn KeyGenerator>,
    sender: UnboundedSender<M>,
) -> JoinHandle<()>
where
    M: From<KeyPair> + Send + 'static,
{
    tokio::spawn(async move {
        match generator.generate_key_pair().await {
            Ok(pair) => {
                if sender.send(M::from(pair)).is_err() {
                    debug!("dialog gone before key generation finished");
                }
            }
            Err(e) => warn!(error = %e, "key generation failed"),
        }
    })
}
