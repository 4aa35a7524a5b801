use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::clients::RosterClient;
use crate::controller::{RosterController, SubmitOutcome};
use crate::domain::{DraftEdit, Employee};
use crate::error::RosterError;
use crate::messages::{RosterRequest, ServiceResponse};
use crate::validation::Validator;

// =============================================================================
// ROSTER SERVICE
// =============================================================================

/// Owns the form state and applies requests one at a time, in arrival order.
pub struct RosterActor {
    receiver: mpsc::Receiver<RosterRequest>,
    controller: RosterController,
}

impl RosterActor {
    pub fn new(buffer_size: usize, validator: Validator) -> (Self, RosterClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            controller: RosterController::new(validator),
        };
        let client = RosterClient::new(sender);
        (actor, client)
    }

    /// Main loop. Ends on `Shutdown` or once every client has been dropped.
    #[instrument(name = "roster_service", skip(self))]
    pub async fn run(mut self) {
        info!("RosterService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RosterRequest::EditDraft { edit, respond_to } => {
                    self.handle_edit_draft(edit, respond_to);
                }
                RosterRequest::Submit { respond_to } => {
                    self.handle_submit(respond_to);
                }
                RosterRequest::Edit { record, respond_to } => {
                    self.handle_edit(record, respond_to);
                }
                RosterRequest::Delete { id, respond_to } => {
                    self.handle_delete(id, respond_to);
                }
                RosterRequest::Cancel { respond_to } => {
                    self.controller.cancel();
                    let _ = respond_to.send(Ok(()));
                }
                RosterRequest::Search { query, respond_to } => {
                    self.handle_search(query, respond_to);
                }
                RosterRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.controller.get(&id)));
                }
                RosterRequest::List { respond_to } => {
                    self.handle_list(respond_to);
                }
                RosterRequest::View { respond_to } => {
                    let _ = respond_to.send(Ok(self.controller.view()));
                }
                RosterRequest::Shutdown => {
                    info!("RosterService shutting down");
                    break;
                }
            }
        }
        info!("RosterService stopped");
    }

    #[instrument(skip(self, respond_to))]
    fn handle_edit_draft(&mut self, edit: DraftEdit, respond_to: ServiceResponse<(), RosterError>) {
        self.controller.edit_draft(edit);
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(fields(employee_id = %self.controller.draft().id), skip(self, respond_to))]
    fn handle_submit(&mut self, respond_to: ServiceResponse<SubmitOutcome, RosterError>) {
        debug!("Processing submit request");
        let _ = respond_to.send(self.controller.submit());
    }

    #[instrument(fields(employee_id = %record.id), skip(self, record, respond_to))]
    fn handle_edit(&mut self, record: Employee, respond_to: ServiceResponse<(), RosterError>) {
        self.controller.edit(record);
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(fields(employee_id = %id), skip(self, respond_to))]
    fn handle_delete(&mut self, id: String, respond_to: ServiceResponse<Option<Employee>, RosterError>) {
        let _ = respond_to.send(Ok(self.controller.delete(&id)));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_search(&self, query: String, respond_to: ServiceResponse<Vec<Employee>, RosterError>) {
        let _ = respond_to.send(Ok(self.controller.search(&query)));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list(&self, respond_to: ServiceResponse<Vec<Employee>, RosterError>) {
        let employees = self.controller.list();
        debug!(employee_count = employees.len(), "Listed employees");
        let _ = respond_to.send(Ok(employees));
    }
}
