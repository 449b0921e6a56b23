use std::fmt;

/// The only status that permits a transaction to be dispatched
pub const OPEN_STATUS: &str = "OPEN";

/// Whether a transaction charges or reverses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Payment,
    Refund,
}

impl TransactionType {
    /// Parse a type tag (exact, case-sensitive)
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "PAYMENT" => Some(Self::Payment),
            "REFUND" => Some(Self::Refund),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Payment => "PAYMENT",
            Self::Refund => "REFUND",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment channel a transaction is routed through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    CreditCard,
    Paypal,
    Plan,
}

impl PaymentMethod {
    /// Parse a method tag (exact, case-sensitive)
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "CREDIT_CARD" => Some(Self::CreditCard),
            "PAYPAL" => Some(Self::Paypal),
            "PLAN" => Some(Self::Plan),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "CREDIT_CARD",
            Self::Paypal => "PAYPAL",
            Self::Plan => "PLAN",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pending payment or refund request.
///
/// Tags are kept verbatim so that malformed input stays representable;
/// the typed accessors return `None` for anything outside the known sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    pub id: i64,
    pub status: String,
    pub tx_type: String,
    pub method: String,
}

impl Transaction {
    /// Create a transaction from raw tags
    pub fn new(
        id: i64,
        status: impl Into<String>,
        tx_type: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self {
            id,
            status: status.into(),
            tx_type: tx_type.into(),
            method: method.into(),
        }
    }

    /// Create an open transaction with well-formed tags
    pub fn open(id: i64, tx_type: TransactionType, method: PaymentMethod) -> Self {
        Self::new(id, OPEN_STATUS, tx_type.as_str(), method.as_str())
    }

    pub fn is_open(&self) -> bool {
        self.status == OPEN_STATUS
    }

    pub fn transaction_type(&self) -> Option<TransactionType> {
        TransactionType::parse(&self.tx_type)
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        PaymentMethod::parse(&self.method)
    }
}
