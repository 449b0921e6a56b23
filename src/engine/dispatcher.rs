use tracing::{debug, warn};

use super::error::DispatchError;
use crate::domain::{PaymentOperations, Transaction, TransactionType};
use crate::source::TransactionSource;

/// Dispatcher routing each transaction of a batch to its payment operation
pub struct Dispatcher<S, P>
where
    S: TransactionSource,
    P: PaymentOperations,
{
    source: S,
    operations: P,
}

impl<S, P> Dispatcher<S, P>
where
    S: TransactionSource,
    P: PaymentOperations,
{
    /// Create a new dispatcher over the given collaborators
    pub fn new(source: S, operations: P) -> Self {
        Self { source, operations }
    }

    /// Process the current batch.
    ///
    /// Transactions are handled in source order. The first invalid
    /// transaction aborts the rest of the batch; operations already invoked
    /// for earlier transactions are not undone. Transactions with an
    /// unrecognized method are skipped without error.
    pub fn process(&self) -> Result<(), DispatchError> {
        let transactions = self.source.transactions()?;

        if transactions.is_empty() {
            return Err(DispatchError::EmptyBatch);
        }

        debug!(count = transactions.len(), "Dispatching batch");

        for tx in &transactions {
            let tx_type = validate(tx)?;
            self.dispatch(tx, tx_type)?;
        }

        Ok(())
    }

    /// Get reference to the injected operations
    pub fn operations(&self) -> &P {
        &self.operations
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn dispatch(&self, tx: &Transaction, tx_type: TransactionType) -> Result<(), DispatchError> {
        let Some(method) = tx.payment_method() else {
            warn!(id = tx.id, method = %tx.method, "Unknown payment method, skipping");
            return Ok(());
        };

        let operation = method.operations().select(tx_type);
        debug!(id = tx.id, %operation, "Dispatching transaction");

        operation.invoke(&self.operations)?;
        Ok(())
    }
}

/// Check a transaction is open and carries a known type
fn validate(tx: &Transaction) -> Result<TransactionType, DispatchError> {
    match tx.transaction_type() {
        Some(tx_type) if tx.is_open() => Ok(tx_type),
        _ => {
            warn!(id = tx.id, status = %tx.status, tx_type = %tx.tx_type, "Invalid transaction");
            Err(DispatchError::InvalidTransaction {
                id: tx.id,
                status: tx.status.clone(),
                tx_type: tx.tx_type.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Operation, OperationError, PaymentMethod};
    use crate::gateway::{RecordingOperations, UnimplementedOperations};
    use crate::source::{InMemoryTransactionSource, SourceError};

    fn dispatcher(
        transactions: Vec<Transaction>,
    ) -> Dispatcher<InMemoryTransactionSource, RecordingOperations> {
        Dispatcher::new(
            InMemoryTransactionSource::new(transactions),
            RecordingOperations::new(),
        )
    }

    fn dispatch_one(tx_type: TransactionType, method: PaymentMethod) -> Vec<Operation> {
        let dispatcher = dispatcher(vec![Transaction::open(0, tx_type, method)]);
        dispatcher.process().unwrap();
        dispatcher.operations().invocations()
    }

    struct FailingSource;

    impl TransactionSource for FailingSource {
        fn transactions(&self) -> Result<Vec<Transaction>, SourceError> {
            Err(SourceError::Unavailable("repository offline".to_string()))
        }
    }

    #[test]
    fn empty_batch_fails() {
        let dispatcher = dispatcher(vec![]);

        let result = dispatcher.process();

        assert!(matches!(result, Err(DispatchError::EmptyBatch)));
        assert!(dispatcher.operations().invocations().is_empty());
    }

    #[test]
    fn status_not_open_fails() {
        let dispatcher = dispatcher(vec![Transaction {
            id: 0,
            status: String::new(),
            ..Default::default()
        }]);

        let result = dispatcher.process();

        assert!(matches!(
            result,
            Err(DispatchError::InvalidTransaction { id: 0, .. })
        ));
    }

    #[test]
    fn closed_transaction_with_valid_tags_fails() {
        let dispatcher = dispatcher(vec![Transaction::new(4, "CLOSED", "PAYMENT", "PLAN")]);

        let result = dispatcher.process();

        match result {
            Err(DispatchError::InvalidTransaction { id, status, tx_type }) => {
                assert_eq!(id, 4);
                assert_eq!(status, "CLOSED");
                assert_eq!(tx_type, "PAYMENT");
            }
            other => panic!("Expected InvalidTransaction, got {:?}", other),
        }
        assert!(dispatcher.operations().invocations().is_empty());
    }

    #[test]
    fn invalid_type_fails() {
        let dispatcher = dispatcher(vec![Transaction::new(0, "OPEN", "", "")]);

        let result = dispatcher.process();

        assert!(matches!(
            result,
            Err(DispatchError::InvalidTransaction { .. })
        ));
    }

    #[test]
    fn invalid_type_fails_before_method_is_considered() {
        let dispatcher = dispatcher(vec![Transaction::new(0, "OPEN", "TRANSFER", "PAYPAL")]);

        assert!(dispatcher.process().is_err());
        assert!(dispatcher.operations().invocations().is_empty());
    }

    #[test]
    fn payment_by_credit_card_invokes_card_payment_only() {
        let invoked = dispatch_one(TransactionType::Payment, PaymentMethod::CreditCard);

        assert_eq!(invoked, vec![Operation::PayByCreditCard]);
        assert!(!invoked.contains(&Operation::RefundCreditCard));
    }

    #[test]
    fn payment_by_paypal_invokes_wallet_payment() {
        assert_eq!(
            dispatch_one(TransactionType::Payment, PaymentMethod::Paypal),
            vec![Operation::PayByWallet]
        );
    }

    #[test]
    fn payment_by_plan_invokes_plan_payment() {
        assert_eq!(
            dispatch_one(TransactionType::Payment, PaymentMethod::Plan),
            vec![Operation::PayByPlan]
        );
    }

    #[test]
    fn refund_by_credit_card_invokes_card_refund() {
        assert_eq!(
            dispatch_one(TransactionType::Refund, PaymentMethod::CreditCard),
            vec![Operation::RefundCreditCard]
        );
    }

    #[test]
    fn refund_by_paypal_invokes_wallet_refund() {
        assert_eq!(
            dispatch_one(TransactionType::Refund, PaymentMethod::Paypal),
            vec![Operation::RefundWallet]
        );
    }

    #[test]
    fn refund_by_plan_invokes_plan_refund() {
        assert_eq!(
            dispatch_one(TransactionType::Refund, PaymentMethod::Plan),
            vec![Operation::RefundPlan]
        );
    }

    #[test]
    fn mixed_batch_invokes_each_handler_once() {
        let dispatcher = dispatcher(vec![
            Transaction::open(0, TransactionType::Refund, PaymentMethod::Plan),
            Transaction::open(1, TransactionType::Payment, PaymentMethod::Paypal),
        ]);

        dispatcher.process().unwrap();

        let recorder = dispatcher.operations();
        assert_eq!(recorder.count(Operation::RefundPlan), 1);
        assert_eq!(recorder.count(Operation::PayByWallet), 1);
        assert_eq!(recorder.invocations().len(), 2);
    }

    #[test]
    fn unknown_method_is_skipped_silently() {
        let dispatcher = dispatcher(vec![Transaction::new(0, "OPEN", "PAYMENT", "BITCOIN")]);

        assert!(dispatcher.process().is_ok());
        assert!(dispatcher.operations().invocations().is_empty());
    }

    #[test]
    fn unknown_method_does_not_stop_later_transactions() {
        let dispatcher = dispatcher(vec![
            Transaction::new(0, "OPEN", "REFUND", ""),
            Transaction::open(1, TransactionType::Refund, PaymentMethod::CreditCard),
        ]);

        dispatcher.process().unwrap();

        assert_eq!(
            dispatcher.operations().invocations(),
            vec![Operation::RefundCreditCard]
        );
    }

    #[test]
    fn invalid_transaction_aborts_rest_of_batch() {
        let dispatcher = dispatcher(vec![
            Transaction::open(0, TransactionType::Payment, PaymentMethod::Plan),
            Transaction::new(1, "PENDING", "PAYMENT", "PLAN"),
            Transaction::open(2, TransactionType::Refund, PaymentMethod::Paypal),
        ]);

        let result = dispatcher.process();

        assert!(matches!(
            result,
            Err(DispatchError::InvalidTransaction { id: 1, .. })
        ));
        // Work before the failure stays done; nothing after it runs
        assert_eq!(
            dispatcher.operations().invocations(),
            vec![Operation::PayByPlan]
        );
    }

    #[test]
    fn processing_twice_repeats_invocations() {
        let dispatcher = dispatcher(vec![
            Transaction::open(0, TransactionType::Payment, PaymentMethod::CreditCard),
            Transaction::open(1, TransactionType::Refund, PaymentMethod::Plan),
        ]);

        dispatcher.process().unwrap();
        let first = dispatcher.operations().invocations();
        dispatcher.operations().clear();
        dispatcher.process().unwrap();
        let second = dispatcher.operations().invocations();

        assert_eq!(first, second);
    }

    #[test]
    fn operation_failure_propagates() {
        let dispatcher = Dispatcher::new(
            InMemoryTransactionSource::new(vec![Transaction::open(
                0,
                TransactionType::Payment,
                PaymentMethod::Paypal,
            )]),
            UnimplementedOperations,
        );

        let result = dispatcher.process();

        assert!(matches!(
            result,
            Err(DispatchError::Operation(OperationError::NotImplemented(
                Operation::PayByWallet
            )))
        ));
    }

    #[test]
    fn source_failure_propagates() {
        let dispatcher = Dispatcher::new(FailingSource, RecordingOperations::new());

        let result = dispatcher.process();

        assert!(matches!(
            result,
            Err(DispatchError::Source(SourceError::Unavailable(_)))
        ));
    }

    #[test]
    fn borrowed_collaborators_can_be_injected() {
        let source = InMemoryTransactionSource::new(vec![Transaction::open(
            9,
            TransactionType::Refund,
            PaymentMethod::Paypal,
        )]);
        let recorder = RecordingOperations::new();

        let dispatcher = Dispatcher::new(&source, &recorder);
        dispatcher.process().unwrap();

        assert_eq!(dispatcher.source().len(), 1);
        assert_eq!(recorder.invocations(), vec![Operation::RefundWallet]);
    }
}
