//! Loading of compiled contract artifacts.
//!
//! Artifacts are the JSON documents the contracts toolchain emits next to
//! each compiled contract, for example
//! `artifacts/contracts/Validator.sol/Validator.json`. Only the fields needed
//! to create a contract are read.

use {
    alloy_primitives::Bytes,
    serde::Deserialize,
    std::path::PathBuf,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no artifact for {name} in {dir:?}")]
    NotFound { name: String, dir: PathBuf },
    #[error("I/O error while reading {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed artifact {path:?}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("artifact {path:?} contains {found} instead of {expected}")]
    NameMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },
    #[error("artifact {path:?} has no creation bytecode, is {name} abstract?")]
    EmptyBytecode { path: PathBuf, name: String },
}

/// A compiled contract ready to be deployed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub contract_name: String,
    /// Creation bytecode without constructor arguments.
    pub bytecode: Bytes,
}

/// Directory containing compiled artifacts.
#[derive(Debug, Clone)]
pub struct Artifacts {
    dir: PathBuf,
}

impl Artifacts {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the path of the artifact for `name`. Both the nested layout
    /// (`<dir>/<name>.sol/<name>.json`) and a flat layout
    /// (`<dir>/<name>.json`) are supported, nested first.
    pub async fn locate(&self, name: &str) -> Result<PathBuf, Error> {
        let candidates = [
            self.dir.join(format!("{name}.sol")).join(format!("{name}.json")),
            self.dir.join(format!("{name}.json")),
        ];
        for path in candidates {
            if tokio::fs::try_exists(&path)
                .await
                .map_err(|source| Error::Io {
                    path: path.clone(),
                    source,
                })?
            {
                return Ok(path);
            }
        }
        Err(Error::NotFound {
            name: name.to_string(),
            dir: self.dir.clone(),
        })
    }

    /// Reads and validates the artifact of the contract called `name`.
    pub async fn load(&self, name: &str) -> Result<Artifact, Error> {
        let path = self.locate(name).await?;
        let data = tokio::fs::read(&path).await.map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        let artifact: Artifact =
            serde_json::from_slice(&data).map_err(|source| Error::Malformed {
                path: path.clone(),
                source,
            })?;

        if artifact.contract_name != name {
            return Err(Error::NameMismatch {
                path,
                expected: name.to_string(),
                found: artifact.contract_name,
            });
        }
        if artifact.bytecode.is_empty() {
            return Err(Error::EmptyBytecode {
                path,
                name: artifact.contract_name,
            });
        }

        tracing::debug!(?path, size = artifact.bytecode.len(), "loaded artifact");
        Ok(artifact)
    }
}
