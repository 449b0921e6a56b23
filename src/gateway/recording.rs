use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::domain::{Operation, OperationError, PaymentOperations};

/// Operations that succeed and remember the order they were called in
#[derive(Debug, Default)]
pub struct RecordingOperations {
    calls: Mutex<Vec<Operation>>,
}

impl RecordingOperations {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Every invocation so far, oldest first
    pub fn invocations(&self) -> Vec<Operation> {
        self.calls().clone()
    }

    /// Number of times `operation` was invoked
    pub fn count(&self, operation: Operation) -> usize {
        self.calls().iter().filter(|&&op| op == operation).count()
    }

    pub fn clear(&self) {
        self.calls().clear();
    }

    fn record(&self, operation: Operation) -> Result<(), OperationError> {
        debug!(%operation, "Recording operation");
        self.calls().push(operation);
        Ok(())
    }

    fn calls(&self) -> MutexGuard<'_, Vec<Operation>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PaymentOperations for RecordingOperations {
    fn pay_by_credit_card(&self) -> Result<(), OperationError> {
        self.record(Operation::PayByCreditCard)
    }

    fn refund_credit_card(&self) -> Result<(), OperationError> {
        self.record(Operation::RefundCreditCard)
    }

    fn pay_by_wallet(&self) -> Result<(), OperationError> {
        self.record(Operation::PayByWallet)
    }

    fn refund_wallet(&self) -> Result<(), OperationError> {
        self.record(Operation::RefundWallet)
    }

    fn pay_by_plan(&self) -> Result<(), OperationError> {
        self.record(Operation::PayByPlan)
    }

    fn refund_plan(&self) -> Result<(), OperationError> {
        self.record(Operation::RefundPlan)
    }
}
