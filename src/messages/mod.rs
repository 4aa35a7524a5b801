use tokio::sync::oneshot;

use crate::controller::{FormView, SubmitOutcome};
use crate::domain::{DraftEdit, Employee};
use crate::error::RosterError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed messages for the roster actor. Each variant includes its parameters
/// and a oneshot channel for the response.
#[derive(Debug)]
pub enum RosterRequest {
    EditDraft {
        edit: DraftEdit,
        respond_to: ServiceResponse<(), RosterError>,
    },
    Submit {
        respond_to: ServiceResponse<SubmitOutcome, RosterError>,
    },
    Edit {
        record: Employee,
        respond_to: ServiceResponse<(), RosterError>,
    },
    Delete {
        id: String,
        respond_to: ServiceResponse<Option<Employee>, RosterError>,
    },
    Cancel {
        respond_to: ServiceResponse<(), RosterError>,
    },
    Search {
        query: String,
        respond_to: ServiceResponse<Vec<Employee>, RosterError>,
    },
    Get {
        id: String,
        respond_to: ServiceResponse<Option<Employee>, RosterError>,
    },
    List {
        respond_to: ServiceResponse<Vec<Employee>, RosterError>,
    },
    View {
        respond_to: ServiceResponse<FormView, RosterError>,
    },
    Shutdown,
}
