//! The deployment sequence.
//!
//! Steps run strictly one after another, each waiting for the previous
//! transaction to be mined:
//!
//! 1. deploy the Validator bound to the token
//! 2. deploy the Aggregator pointing at the Validator
//! 3. for [`Profile::Linked`], register the Aggregator on the Validator
//!
//! The first failing step aborts the run. Contracts deployed by earlier steps
//! stay on chain and every run deploys fresh instances.

use {
    crate::{chain::Chain, profile::Profile, report},
    alloy::sol_types::SolCall,
    alloy_primitives::{Address, Bytes, TxHash},
    anyhow::{Context, Result},
    contracts::{
        AGGREGATOR,
        Aggregator,
        Artifacts,
        LinkedAggregator,
        VALIDATOR,
        Validator,
        creation_code,
    },
    serde::Serialize,
    std::{io::Write, sync::Arc},
};

/// Creation bytecode of both contracts, without constructor arguments.
#[derive(Debug, Clone)]
pub struct Bytecode {
    pub validator: Bytes,
    pub aggregator: Bytes,
}

impl Bytecode {
    /// Reads both artifacts so that a missing artifact is reported before
    /// any transaction is sent.
    pub async fn load(artifacts: &Artifacts) -> Result<Self> {
        Ok(Self {
            validator: artifacts.load(VALIDATOR).await?.bytecode,
            aggregator: artifacts.load(AGGREGATOR).await?.bytecode,
        })
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub chain_id: u64,
    pub profile: Profile,
    pub validator: Address,
    pub aggregator: Address,
    /// Transaction registering the Aggregator on the Validator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<TxHash>,
}

pub struct Deployer {
    chain: Arc<dyn Chain>,
    bytecode: Bytecode,
    token: Address,
}

impl Deployer {
    pub fn new(chain: Arc<dyn Chain>, bytecode: Bytecode, token: Address) -> Self {
        Self {
            chain,
            bytecode,
            token,
        }
    }

    /// Runs the deployment sequence, writing a `deployed to:` line to `out`
    /// as soon as each contract is confirmed.
    pub async fn run(&self, profile: Profile, out: &mut impl Write) -> Result<Deployment> {
        let chain_id = self.chain.chain_id().await?;
        tracing::info!(chain_id, %profile, token = ?self.token, "starting deployment");

        let validator = self.deploy_validator().await?;
        tracing::info!(?validator, "Validator deployed");
        report::deployed(out, VALIDATOR, validator)?;

        let aggregator = self.deploy_aggregator(profile, validator).await?;
        tracing::info!(?aggregator, "Aggregator deployed");
        report::deployed(out, AGGREGATOR, aggregator)?;

        let link = if profile.links_aggregator() {
            let tx = self.link_aggregator(validator, aggregator).await?;
            tracing::info!(?tx, "Aggregator registered on Validator");
            Some(tx)
        } else {
            None
        };

        Ok(Deployment {
            chain_id,
            profile,
            validator,
            aggregator,
            link,
        })
    }

    async fn deploy_validator(&self) -> Result<Address> {
        let code = creation_code(
            &self.bytecode.validator,
            &Validator::constructorCall { token: self.token },
        );
        self.chain
            .deploy(code)
            .await
            .context("failed to deploy Validator")
    }

    async fn deploy_aggregator(&self, profile: Profile, validator: Address) -> Result<Address> {
        let code = match profile {
            Profile::Basic => creation_code(
                &self.bytecode.aggregator,
                &Aggregator::constructorCall { validator },
            ),
            Profile::Linked => creation_code(
                &self.bytecode.aggregator,
                &LinkedAggregator::constructorCall {
                    validator,
                    token: self.token,
                },
            ),
        };
        self.chain
            .deploy(code)
            .await
            .context("failed to deploy Aggregator")
    }

    async fn link_aggregator(&self, validator: Address, aggregator: Address) -> Result<TxHash> {
        let calldata = Validator::setAggregatorAddressCall { aggregator }.abi_encode();
        self.chain
            .transact(validator, calldata.into())
            .await
            .context("failed to register Aggregator on Validator")
    }
}
