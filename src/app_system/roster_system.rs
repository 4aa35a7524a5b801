use tracing::{error, info};

use crate::actors::RosterActor;
use crate::clients::RosterClient;
use crate::config::RosterConfig;
use crate::validation::Validator;

/// Starts the roster actor and owns its task.
pub struct RosterSystem {
    pub roster_client: RosterClient,
    handle: tokio::task::JoinHandle<()>,
}

impl RosterSystem {
    pub fn new(config: &RosterConfig) -> Self {
        let (actor, roster_client) =
            RosterActor::new(config.mailbox_size, Validator::new(config.id_rule));
        let handle = tokio::spawn(actor.run());
        info!(mailbox_size = config.mailbox_size, id_rule = ?config.id_rule, "Roster system started");

        Self { roster_client, handle }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // Clones of the client may still be alive elsewhere.
        if let Err(e) = self.roster_client.shutdown().await {
            error!(error = %e, "Roster actor already stopped");
        }
        drop(self.roster_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
