//! Resolves, runs and renders one command.

use serde_json::Value;

use cloudstack_client::catalog;
use cloudstack_client::{CloudStackClient, CommandSpec, Fallback, QueryParams, ResponseShape, Transport};
use cloudstack_core::JobId;

use crate::args::{Cli, Command, RunArgs};
use crate::error::CliError;

/// Runs the parsed command line and returns the text to print.
///
/// # Errors
/// Returns [`CliError`] if the configuration is incomplete, a parameter is
/// malformed or the command fails.
pub async fn execute(cli: Cli) -> Result<String, CliError> {
    match cli.command {
        Command::Commands => Ok(command_listing()),
        Command::Run(args) => {
            let config = cli.connection.client_config()?;
            let client = CloudStackClient::new(&config)?;
            run_args(&client, &args).await
        }
    }
}

/// Runs `args` against `client` and renders the result.
///
/// # Errors
/// See [`execute`].
pub async fn run_args<T: Transport>(client: &CloudStackClient<T>, args: &RunArgs) -> Result<String, CliError> {
    let spec = resolve(&args.command);
    let value = run(client, &spec, args.query_params()?, args.wait).await?;
    render(&value, args.compact)
}

/// The catalog entry for `name`, or an ad-hoc spec sending it as given.
///
/// Ad-hoc commands have no required parameters, return the unwrapped
/// envelope and surface a 404 as an error. Their name is leaked, so this is
/// called once per process from [`run_args`].
#[must_use]
pub(crate) fn resolve(name: &str) -> CommandSpec {
    if let Some(spec) = catalog::lookup(name) {
        return *spec;
    }
    tracing::debug!(command = %name, "not in catalog, sending as ad-hoc command");
    // One command runs per process.
    let name: &'static str = Box::leak(name.to_owned().into_boxed_str());
    let spec = CommandSpec::command(name, &[], ResponseShape::UnwrapOnly, Fallback::Error);
    CommandSpec { list: name.starts_with("list"), ..spec }
}

/// Runs `spec` and, when `wait` is set, polls the job it started.
///
/// # Errors
/// Returns [`CliError::NoJob`] if `wait` is set and the payload carries no
/// job id, and [`CliError::Client`] for any client failure including a failed
/// or timed-out job.
pub async fn run<T: Transport>(
    client: &CloudStackClient<T>,
    spec: &CommandSpec,
    params: QueryParams,
    wait: bool,
) -> Result<Value, CliError> {
    let payload = client.execute(spec, params).await?;
    if !wait {
        return Ok(payload);
    }

    let job_id = job_id_of(spec, &payload).ok_or_else(|| CliError::NoJob(spec.name.to_owned()))?;
    tracing::info!(command = %spec.name, job_id = %job_id, "waiting for job");
    let job = client.jobs().wait::<Value>(&job_id).await?;
    Ok(serde_json::to_value(job)?)
}

/// Finds the job id in a command payload.
fn job_id_of(spec: &CommandSpec, payload: &Value) -> Option<JobId> {
    let raw = match payload {
        Value::Object(map) => map.get("jobid")?,
        scalar if spec.shape == ResponseShape::Named("jobid") => scalar,
        _ => return None,
    };
    match raw {
        Value::String(s) if !s.is_empty() => Some(JobId::new(s.clone())),
        Value::Number(n) => Some(JobId::new(n.to_string())),
        _ => None,
    }
}

/// Renders a payload as JSON.
///
/// # Errors
/// Returns [`CliError::Output`] if serialization fails.
pub fn render(value: &Value, compact: bool) -> Result<String, CliError> {
    let text = if compact { serde_json::to_string(value)? } else { serde_json::to_string_pretty(value)? };
    Ok(text)
}

/// One line per distinct command name with its required parameters.
#[must_use]
pub fn command_listing() -> String {
    let mut seen: Vec<&str> = Vec::new();
    let mut out = String::new();
    for spec in catalog::ALL {
        if seen.contains(&spec.name) {
            continue;
        }
        seen.push(spec.name);
        out.push_str(spec.name);
        if !spec.required.is_empty() {
            out.push('\t');
            out.push_str(&spec.required.join(","));
        }
        out.push('\n');
    }
    out
}
