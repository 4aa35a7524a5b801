use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::controller::{FormView, SubmitOutcome};
use crate::domain::{DraftEdit, Employee};
use crate::error::RosterError;
use crate::messages::RosterRequest;

// =============================================================================
// Client method macro
// =============================================================================

macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunication("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunication("Actor dropped".to_string()))?
            }
        }
    };
}

// =============================================================================
// Roster Client
// =============================================================================

/// Cloneable handle to the roster actor.
#[derive(Clone)]
pub struct RosterClient {
    sender: mpsc::Sender<RosterRequest>,
}

impl RosterClient {
    pub fn new(sender: mpsc::Sender<RosterRequest>) -> Self {
        Self { sender }
    }

    /// Asks the actor to stop once it has drained earlier requests.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), RosterError> {
        debug!("Sending shutdown request");
        self.sender
            .send(RosterRequest::Shutdown)
            .await
            .map_err(|_| RosterError::ActorCommunication("Actor closed".to_string()))
    }
}

client_method!(RosterClient => fn edit_draft(edit: DraftEdit) -> () as RosterRequest::EditDraft, Error = RosterError);
client_method!(RosterClient => fn submit() -> SubmitOutcome as RosterRequest::Submit, Error = RosterError);
client_method!(RosterClient => fn edit(record: Employee) -> () as RosterRequest::Edit, Error = RosterError);
client_method!(RosterClient => fn delete(id: String) -> Option<Employee> as RosterRequest::Delete, Error = RosterError);
client_method!(RosterClient => fn cancel() -> () as RosterRequest::Cancel, Error = RosterError);
client_method!(RosterClient => fn search(query: String) -> Vec<Employee> as RosterRequest::Search, Error = RosterError);
client_method!(RosterClient => fn get(id: String) -> Option<Employee> as RosterRequest::Get, Error = RosterError);
client_method!(RosterClient => fn list() -> Vec<Employee> as RosterRequest::List, Error = RosterError);
client_method!(RosterClient => fn view() -> FormView as RosterRequest::View, Error = RosterError);
