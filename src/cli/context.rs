use std::sync::Arc;

use tokio::sync::OnceCell;

use super::CliError;
use crate::{
    config::Config,
    dialogs::KeyGenerator,
    services::network_manager::{NetworkModel, NmNetworkModel},
};

/// Dependencies shared by every command.
///
/// The NetworkManager connection is opened on first use, so commands that
/// never touch the network work without a system bus.
pub struct CliContext {
    config: Config,
    network: OnceCell<Arc<dyn NetworkModel>>,
    key_generator: Arc<dyn KeyGenerator>,
}

impl CliContext {
    /// Context talking to NetworkManager on the system bus.
    pub fn new(config: Config) -> Self {
        let key_generator = Arc::new(config.keygen.generator());
        Self {
            config,
            network: OnceCell::new(),
            key_generator,
        }
    }

    /// Context using `model` instead of NetworkManager.
    pub fn with_network(config: Config, model: Arc<dyn NetworkModel>) -> Self {
        let context = Self::new(config);
        Self {
            network: OnceCell::new_with(Some(model)),
            ..context
        }
    }

    /// Builder: replaces the key generator.
    pub fn with_key_generator(mut self, generator: Arc<dyn KeyGenerator>) -> Self {
        self.key_generator = generator;
        self
    }

    /// Loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The network model, connecting on first call.
    ///
    /// # Errors
    /// Returns `CliError::ServiceError` when the system bus is unreachable.
    pub async fn network(&self) -> Result<Arc<dyn NetworkModel>, CliError> {
        let model = self
            .network
            .get_or_try_init(|| async {
                let model = NmNetworkModel::connect().await?;
                Ok::<_, CliError>(Arc::new(model) as Arc<dyn NetworkModel>)
            })
            .await?;

        Ok(model.clone())
    }

    /// Generator used by `keys generate`.
    pub fn key_generator(&self) -> Arc<dyn KeyGenerator> {
        self.key_generator.clone()
    }
}
