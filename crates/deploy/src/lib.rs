pub mod arguments;
pub mod chain;
pub mod config;
pub mod orchestrator;
pub mod profile;
pub mod report;

use {
    crate::{
        arguments::Arguments,
        chain::Node,
        orchestrator::{Bytecode, Deployer},
    },
    anyhow::Result,
    clap::Parser,
    contracts::Artifacts,
    std::{io::Write, process::ExitCode, sync::Arc},
};

/// Entry point of the binary. Any error aborts the deployment, gets printed
/// to stderr and results in a non-zero exit code.
pub async fn start(args: impl Iterator<Item = String>) -> ExitCode {
    let args = Arguments::parse_from(args);
    observe::tracing::initialize(&args.logging.observe_config());
    observe::panic_hook::install();
    tracing::info!("running deploy with validated arguments:\n{}", args);

    let result = run(args).await;
    ExitCode::from(exit_status(result, &mut std::io::stderr()))
}

/// Maps the outcome of a run to the process exit status: 0 on success,
/// otherwise 1 after writing the full error chain to `stderr`.
fn exit_status(result: Result<()>, stderr: &mut impl Write) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            // Nothing left to report to if stderr is gone.
            let _ = writeln!(stderr, "Error: {err:?}");
            1
        }
    }
}

/// Assumes tracing has already been set up.
pub async fn run(args: Arguments) -> Result<()> {
    let config = config::load(&args.config).await?;
    let profile = args.profile.unwrap_or(config.profile);
    let bytecode = Bytecode::load(&Artifacts::new(&args.artifacts)).await?;

    let chain = Node::connect(&args.node_url, args.private_key).await?;
    tracing::info!(sender = ?chain.sender(), "connected to node");
    let deployment = Deployer::new(Arc::new(chain), bytecode, config.token)
        .run(profile, &mut std::io::stdout())
        .await?;

    if let Some(path) = &args.output {
        report::write_json(path, &deployment).await?;
    }
    Ok(())
}
