use {
    crate::orchestrator::Deployment,
    alloy_primitives::Address,
    anyhow::{Context, Result},
    std::{io::Write, path::Path},
};

/// Announces a confirmed contract deployment. Flushed right away so the
/// line is visible even if a later step fails.
pub fn deployed(out: &mut impl Write, contract: &str, address: Address) -> std::io::Result<()> {
    writeln!(out, "{contract} deployed to: {address}")?;
    out.flush()
}

/// Stores the deployment as JSON, e.g. for scripts picking up the addresses.
pub async fn write_json(path: &Path, deployment: &Deployment) -> Result<()> {
    let json = serde_json::to_vec_pretty(deployment)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("I/O error while writing {path:?}"))?;
    tracing::debug!(?path, "wrote deployment report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::profile::Profile,
        alloy_primitives::address,
    };

    fn deployment() -> Deployment {
        Deployment {
            chain_id: 31337,
            profile: Profile::Basic,
            validator: address!("0x5FbDB2315678afecb367f032d93F642f64180aa3"),
            aggregator: address!("0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512"),
            link: None,
        }
    }

    #[test]
    fn prints_checksummed_address() {
        let mut out = Vec::new();

        deployed(&mut out, "Validator", deployment().validator).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Validator deployed to: 0x5FbDB2315678afecb367f032d93F642f64180aa3\n"
        );
    }

    #[tokio::test]
    async fn writes_json_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployment.json");

        write_json(&path, &deployment()).await.unwrap();

        let json: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(json["chainId"], 31337);
        assert_eq!(json["profile"], "basic");
        assert!(json.get("link").is_none());
    }
}
