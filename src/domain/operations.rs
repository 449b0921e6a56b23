use std::fmt;
use std::sync::Arc;

use super::error::OperationError;
use super::transaction::{PaymentMethod, TransactionType};

/// The six gateway effects a transaction can be routed to
pub trait PaymentOperations: Send + Sync {
    fn pay_by_credit_card(&self) -> Result<(), OperationError>;
    fn refund_credit_card(&self) -> Result<(), OperationError>;
    fn pay_by_wallet(&self) -> Result<(), OperationError>;
    fn refund_wallet(&self) -> Result<(), OperationError>;
    fn pay_by_plan(&self) -> Result<(), OperationError>;
    fn refund_plan(&self) -> Result<(), OperationError>;
}

/// Handle naming one of the `PaymentOperations` methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    PayByCreditCard,
    RefundCreditCard,
    PayByWallet,
    RefundWallet,
    PayByPlan,
    RefundPlan,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::PayByCreditCard,
        Operation::RefundCreditCard,
        Operation::PayByWallet,
        Operation::RefundWallet,
        Operation::PayByPlan,
        Operation::RefundPlan,
    ];

    /// Call the operation this handle names
    pub fn invoke<P>(self, operations: &P) -> Result<(), OperationError>
    where
        P: PaymentOperations + ?Sized,
    {
        match self {
            Self::PayByCreditCard => operations.pay_by_credit_card(),
            Self::RefundCreditCard => operations.refund_credit_card(),
            Self::PayByWallet => operations.pay_by_wallet(),
            Self::RefundWallet => operations.refund_wallet(),
            Self::PayByPlan => operations.pay_by_plan(),
            Self::RefundPlan => operations.refund_plan(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PayByCreditCard => "pay_by_credit_card",
            Self::RefundCreditCard => "refund_credit_card",
            Self::PayByWallet => "pay_by_wallet",
            Self::RefundWallet => "refund_wallet",
            Self::PayByPlan => "pay_by_plan",
            Self::RefundPlan => "refund_plan",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pay and refund handles for one payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationPair {
    pub pay: Operation,
    pub refund: Operation,
}

impl OperationPair {
    /// Pick the handle matching the transaction type
    pub fn select(&self, tx_type: TransactionType) -> Operation {
        match tx_type {
            TransactionType::Payment => self.pay,
            TransactionType::Refund => self.refund,
        }
    }
}

impl PaymentMethod {
    /// Resolve the operation pair serving this method
    pub fn operations(&self) -> OperationPair {
        match self {
            Self::CreditCard => OperationPair {
                pay: Operation::PayByCreditCard,
                refund: Operation::RefundCreditCard,
            },
            Self::Paypal => OperationPair {
                pay: Operation::PayByWallet,
                refund: Operation::RefundWallet,
            },
            Self::Plan => OperationPair {
                pay: Operation::PayByPlan,
                refund: Operation::RefundPlan,
            },
        }
    }
}

macro_rules! forward_payment_operations {
    ($($method:ident),* $(,)?) => {
        $(
            fn $method(&self) -> Result<(), OperationError> {
                (**self).$method()
            }
        )*
    };
}

impl<T: PaymentOperations + ?Sized> PaymentOperations for &T {
    forward_payment_operations!(
        pay_by_credit_card,
        refund_credit_card,
        pay_by_wallet,
        refund_wallet,
        pay_by_plan,
        refund_plan,
    );
}

impl<T: PaymentOperations + ?Sized> PaymentOperations for Box<T> {
    forward_payment_operations!(
        pay_by_credit_card,
        refund_credit_card,
        pay_by_wallet,
        refund_wallet,
        pay_by_plan,
        refund_plan,
    );
}

// Lets the CLI keep a handle on a recorder after moving the dispatcher to a worker
impl<T: PaymentOperations + ?Sized> PaymentOperations for Arc<T> {
    forward_payment_operations!(
        pay_by_credit_card,
        refund_credit_card,
        pay_by_wallet,
        refund_wallet,
        pay_by_plan,
        refund_plan,
    );
}
