//! # Mock Framework
//!
//! Utilities for testing roster client callers in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver. Then use helpers
//! like [`expect_submit`] or [`expect_get`] to assert what was sent and to
//! script the actor's reply.

use tokio::sync::mpsc;

use crate::clients::RosterClient;
use crate::controller::{FormView, SubmitOutcome};
use crate::domain::{DraftEdit, Employee};
use crate::error::RosterError;
use crate::messages::{RosterRequest, ServiceResponse};

/// Creates a client whose requests land on a receiver the test controls,
/// instead of a running `RosterActor`.
pub fn create_mock_client(buffer_size: usize) -> (RosterClient, mpsc::Receiver<RosterRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RosterClient::new(sender), receiver)
}

/// Helper to verify that the next message is an EditDraft request
pub async fn expect_edit_draft(
    receiver: &mut mpsc::Receiver<RosterRequest>,
) -> Option<(DraftEdit, ServiceResponse<(), RosterError>)> {
    match receiver.recv().await {
        Some(RosterRequest::EditDraft { edit, respond_to }) => Some((edit, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Submit request
pub async fn expect_submit(
    receiver: &mut mpsc::Receiver<RosterRequest>,
) -> Option<ServiceResponse<SubmitOutcome, RosterError>> {
    match receiver.recv().await {
        Some(RosterRequest::Submit { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Edit request
pub async fn expect_edit(
    receiver: &mut mpsc::Receiver<RosterRequest>,
) -> Option<(Employee, ServiceResponse<(), RosterError>)> {
    match receiver.recv().await {
        Some(RosterRequest::Edit { record, respond_to }) => Some((record, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get(
    receiver: &mut mpsc::Receiver<RosterRequest>,
) -> Option<(String, ServiceResponse<Option<Employee>, RosterError>)> {
    match receiver.recv().await {
        Some(RosterRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Search request
pub async fn expect_search(
    receiver: &mut mpsc::Receiver<RosterRequest>,
) -> Option<(String, ServiceResponse<Vec<Employee>, RosterError>)> {
    match receiver.recv().await {
        Some(RosterRequest::Search { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a View request
pub async fn expect_view(
    receiver: &mut mpsc::Receiver<RosterRequest>,
) -> Option<ServiceResponse<FormView, RosterError>> {
    match receiver.recv().await {
        Some(RosterRequest::View { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let submit_task = tokio::spawn(async move {
            client.edit_draft(DraftEdit::Name("Test".to_string())).await?;
            client.submit().await
        });

        let (edit, responder) = expect_edit_draft(&mut receiver).await.expect("Expected EditDraft request");
        assert_eq!(edit, DraftEdit::Name("Test".to_string()));
        responder.send(Ok(())).unwrap();

        let responder = expect_submit(&mut receiver).await.expect("Expected Submit request");
        responder.send(Err(RosterError::DuplicateId("1".to_string()))).unwrap();

        let result = submit_task.await.unwrap();
        assert_eq!(result, Err(RosterError::DuplicateId("1".to_string())));
    }
}
