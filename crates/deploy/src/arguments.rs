use {
    crate::profile::Profile,
    alloy::signers::local::PrivateKeySigner,
    std::path::PathBuf,
    tracing::level_filters::LevelFilter,
    url::Url,
};

#[derive(clap::Parser)]
#[command(about = "Deploys the Validator and Aggregator contracts")]
pub struct Arguments {
    #[clap(flatten)]
    pub logging: LoggingArguments,

    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Private key of the deploying account. Expects a 32-byte hex encoded
    /// string. If omitted the first account unlocked on the node is used.
    #[clap(long, env, hide_env_values = true)]
    pub private_key: Option<PrivateKeySigner>,

    /// Path to the TOML deployment config holding the token address and the
    /// deployment profile.
    #[clap(long, env = "DEPLOY_CONFIG", default_value = "deploy.toml")]
    pub config: PathBuf,

    /// Directory containing the compiled contract artifacts.
    #[clap(long, env = "DEPLOY_ARTIFACTS", default_value = "artifacts/contracts")]
    pub artifacts: PathBuf,

    /// Overrides the deployment profile of the config file.
    #[clap(long, env = "DEPLOY_PROFILE", value_enum)]
    pub profile: Option<Profile>,

    /// Additionally write the deployed addresses as JSON to this file.
    #[clap(long, env = "DEPLOY_OUTPUT")]
    pub output: Option<PathBuf>,
}

#[derive(clap::Parser)]
pub struct LoggingArguments {
    #[clap(long, env, default_value = "warn,deploy=info,contracts=info")]
    pub log_filter: String,

    #[clap(long, env, default_value = "error")]
    pub log_stderr_threshold: LevelFilter,

    /// Output log events as JSON.
    #[clap(long, env)]
    pub use_json_logs: bool,
}

impl LoggingArguments {
    pub fn observe_config(&self) -> observe::Config {
        let mut config = observe::Config::default().with_env_filter(&self.log_filter);
        if let Some(level) = self.log_stderr_threshold.into_level() {
            config = config.with_stderr_threshold(level);
        }
        if self.use_json_logs {
            config = config.with_json_format();
        }
        config
    }
}

impl std::fmt::Display for LoggingArguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self {
            log_filter,
            log_stderr_threshold,
            use_json_logs,
        } = self;

        writeln!(f, "log_filter: {log_filter}")?;
        writeln!(f, "log_stderr_threshold: {log_stderr_threshold}")?;
        writeln!(f, "use_json_logs: {use_json_logs}")
    }
}

/// Arguments are printed with a custom `Display` impl to avoid accidentally
/// logging secrets. Secret values are printed as "SECRET".
impl std::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self {
            logging,
            node_url,
            private_key,
            config,
            artifacts,
            profile,
            output,
        } = self;

        write!(f, "{logging}")?;
        writeln!(f, "node_url: {node_url}")?;
        writeln!(
            f,
            "private_key: {:?}",
            private_key.as_ref().map(|_| "SECRET")
        )?;
        writeln!(f, "config: {config:?}")?;
        writeln!(f, "artifacts: {artifacts:?}")?;
        writeln!(f, "profile: {profile:?}")?;
        writeln!(f, "output: {output:?}")
    }
}
