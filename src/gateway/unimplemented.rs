use crate::domain::{Operation, OperationError, PaymentOperations};

/// Default operations: every call reports that no gateway is wired in
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedOperations;

impl PaymentOperations for UnimplementedOperations {
    fn pay_by_credit_card(&self) -> Result<(), OperationError> {
        Err(OperationError::NotImplemented(Operation::PayByCreditCard))
    }

    fn refund_credit_card(&self) -> Result<(), OperationError> {
        Err(OperationError::NotImplemented(Operation::RefundCreditCard))
    }

    fn pay_by_wallet(&self) -> Result<(), OperationError> {
        Err(OperationError::NotImplemented(Operation::PayByWallet))
    }

    fn refund_wallet(&self) -> Result<(), OperationError> {
        Err(OperationError::NotImplemented(Operation::RefundWallet))
    }

    fn pay_by_plan(&self) -> Result<(), OperationError> {
        Err(OperationError::NotImplemented(Operation::PayByPlan))
    }

    fn refund_plan(&self) -> Result<(), OperationError> {
        Err(OperationError::NotImplemented(Operation::RefundPlan))
    }
}
