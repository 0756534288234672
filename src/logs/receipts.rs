use alloy_network::AnyTransactionReceipt;
use alloy_rpc_types_eth::{Log, TransactionReceipt};

/// Uniform access to the log array carried by the receipt shapes alloy hands back.
pub trait ReceiptLogs {
    fn receipt_logs(&self) -> &[Log];
}

impl ReceiptLogs for TransactionReceipt {
    fn receipt_logs(&self) -> &[Log] {
        self.inner.logs()
    }
}

impl ReceiptLogs for AnyTransactionReceipt {
    fn receipt_logs(&self) -> &[Log] {
        // Access the inner ReceiptWithBloom through the AnyReceiptEnvelope
        let receipt_with_bloom = &self.inner.inner.inner;
        &receipt_with_bloom.receipt.logs
    }
}

impl ReceiptLogs for [Log] {
    fn receipt_logs(&self) -> &[Log] {
        self
    }
}

impl ReceiptLogs for Vec<Log> {
    fn receipt_logs(&self) -> &[Log] {
        self
    }
}
