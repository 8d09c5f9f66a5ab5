//! Abstraction over the network the contracts get deployed to so that the
//! deployment sequence can be tested against a mocked chain.

use {
    alloy::{
        network::{EthereumWallet, TransactionBuilder},
        providers::{DynProvider, Provider, ProviderBuilder},
        rpc::types::{TransactionReceipt, TransactionRequest},
        signers::local::PrivateKeySigner,
    },
    alloy_primitives::{Address, Bytes, TxHash},
    anyhow::{Context, Result},
    url::Url,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("transaction {0:?} reverted")]
    Reverted(TxHash),
    #[error("transaction {0:?} did not create a contract")]
    NoContractCreated(TxHash),
    #[error("node has no unlocked accounts and no private key was configured")]
    NoAccount,
}

/// Write access to the chain. Every method submits at most one transaction
/// and only returns once that transaction has been mined.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait Chain: Send + Sync {
    /// Chain ID of the connected network.
    async fn chain_id(&self) -> Result<u64>;

    /// Submits a contract creation transaction with the given creation code
    /// and returns the address of the created contract.
    async fn deploy(&self, code: Bytes) -> Result<Address>;

    /// Submits a transaction calling `to` with `calldata`.
    async fn transact(&self, to: Address, calldata: Bytes) -> Result<TxHash>;
}

/// [`Chain`] implementation backed by an Ethereum node.
pub struct Node {
    provider: DynProvider,
    from: Address,
}

impl Node {
    /// Connects to the node at `url`. Transactions are signed locally with
    /// `signer` if one is given; otherwise the node signs them with its first
    /// unlocked account.
    pub async fn connect(url: &Url, signer: Option<PrivateKeySigner>) -> Result<Self> {
        let node = match signer {
            Some(signer) => {
                let from = signer.address();
                let provider = ProviderBuilder::new()
                    .wallet(EthereumWallet::new(signer))
                    .connect_http(url.clone())
                    .erased();
                Self { provider, from }
            }
            None => {
                let provider = ProviderBuilder::new().connect_http(url.clone()).erased();
                let from = provider
                    .get_accounts()
                    .await
                    .context("could not fetch node accounts")?
                    .first()
                    .copied()
                    .ok_or(Error::NoAccount)?;
                Self { provider, from }
            }
        };
        Ok(node)
    }

    /// Account the transactions are sent from.
    pub fn sender(&self) -> Address {
        self.from
    }

    async fn submit(&self, tx: TransactionRequest) -> Result<TransactionReceipt> {
        let pending = self
            .provider
            .send_transaction(tx.with_from(self.from))
            .await
            .context("failed to submit transaction")?;
        let tx_hash = *pending.tx_hash();
        tracing::debug!(?tx_hash, "submitted transaction, waiting for receipt");

        let receipt = pending
            .get_receipt()
            .await
            .with_context(|| format!("failed to confirm transaction {tx_hash:?}"))?;
        Ok(ensure_success(receipt)?)
    }
}

/// Mined but reverted transactions count as failed.
fn ensure_success(receipt: TransactionReceipt) -> Result<TransactionReceipt, Error> {
    if !receipt.status() {
        return Err(Error::Reverted(receipt.transaction_hash));
    }
    Ok(receipt)
}

fn created_contract(receipt: &TransactionReceipt) -> Result<Address, Error> {
    receipt
        .contract_address
        .ok_or(Error::NoContractCreated(receipt.transaction_hash))
}

#[async_trait::async_trait]
impl Chain for Node {
    async fn chain_id(&self) -> Result<u64> {
        self.provider
            .get_chain_id()
            .await
            .context("could not fetch current chain id")
    }

    async fn deploy(&self, code: Bytes) -> Result<Address> {
        let receipt = self
            .submit(TransactionRequest::default().with_deploy_code(code))
            .await?;
        Ok(created_contract(&receipt)?)
    }

    async fn transact(&self, to: Address, calldata: Bytes) -> Result<TxHash> {
        let receipt = self
            .submit(TransactionRequest::default().with_to(to).with_input(calldata))
            .await?;
        Ok(receipt.transaction_hash)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        alloy_primitives::{address, b256},
        serde_json::json,
    };

    const TX: TxHash = b256!("0x5555555555555555555555555555555555555555555555555555555555555555");
    const CREATED: Address = address!("0x6000000000000000000000000000000000000006");

    /// Receipt as returned by `eth_getTransactionReceipt`.
    fn receipt(success: bool, contract_address: Option<Address>) -> TransactionReceipt {
        let status = if success { "0x1" } else { "0x0" };
        serde_json::from_value(json!({
            "type": "0x2",
            "status": status,
            "cumulativeGasUsed": "0x1d4c0",
            "logs": [],
            "logsBloom": format!("0x{}", "0".repeat(512)),
            "transactionHash": TX,
            "transactionIndex": "0x0",
            "blockHash": b256!("0x7777777777777777777777777777777777777777777777777777777777777777"),
            "blockNumber": "0x1",
            "gasUsed": "0x1d4c0",
            "effectiveGasPrice": "0x3b9aca00",
            "from": address!("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"),
            "to": null,
            "contractAddress": contract_address,
        }))
        .unwrap()
    }

    #[test]
    fn reverted_transaction_fails() {
        let err = ensure_success(receipt(false, Some(CREATED))).unwrap_err();

        assert!(matches!(err, Error::Reverted(hash) if hash == TX));
    }

    #[test]
    fn successful_transaction_passes() {
        let receipt = ensure_success(receipt(true, None)).unwrap();

        assert_eq!(receipt.transaction_hash, TX);
    }

    #[test]
    fn creation_without_contract_address_fails() {
        let err = created_contract(&receipt(true, None)).unwrap_err();

        assert!(matches!(err, Error::NoContractCreated(hash) if hash == TX));
    }

    #[test]
    fn returns_created_contract() {
        assert_eq!(created_contract(&receipt(true, Some(CREATED))).unwrap(), CREATED);
    }
}
