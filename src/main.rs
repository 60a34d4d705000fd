use clap::Parser;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use remote_invoker::config::{InvokerConfig, StatusPolicy};
use remote_invoker::domains::{Context, Scope};
use remote_invoker::error::Result;
use remote_invoker::interfaces::exchange::ServiceReference;
use remote_invoker::interfaces::invoker::{InvocationOutcome, RemoteInvoker};
use remote_invoker::interfaces::serializer::FormatType;
use remote_invoker::providers::memory::MemoryExchange;
use remote_invoker::services::invoker::HttpInvoker;

const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/switchyard-remote";

#[derive(Parser, Debug)]
#[command(name = "remote-invoke")]
#[command(about = "Invoke a remote service over HTTP and print its reply")]
struct Cli {
    #[arg(long, env = "REMOTE_INVOKE_ENDPOINT")]
    endpoint: Option<String>,

    #[arg(long, help = "JSON invoker config; flags override its values")]
    config: Option<String>,

    #[arg(long)]
    domain: String,

    #[arg(long)]
    service: String,

    #[arg(long, help = "Message content as JSON; anything else is sent as a string")]
    content: Option<String>,

    #[arg(long)]
    format: Option<FormatType>,

    #[arg(long, default_value_t = false, help = "Treat non-200 replies as faults")]
    strict_status: bool,

    #[arg(long = "property", value_parser = parse_property, help = "IN-scope context property, name=value")]
    properties: Vec<(String, Value)>,
}

fn parse_property(raw: &str) -> std::result::Result<(String, Value), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got `{raw}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err("property name is empty".to_string());
    }
    Ok((name.to_string(), parse_json_or_string(value)))
}

fn parse_json_or_string(raw: &str) -> Value {
    serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,remote_invoker=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => InvokerConfig::from_file(path)?,
        None => InvokerConfig::new(DEFAULT_ENDPOINT),
    };
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(format) = cli.format {
        config.format = Some(format);
    }
    if cli.strict_status {
        config.status_policy = Some(StatusPolicy::Fault);
    }
    let invoker = HttpInvoker::from_config(&config)?;

    let mut context = Context::new();
    for (name, value) in cli.properties {
        context.set_property(name, Scope::In, value);
    }
    let content = cli.content.as_deref().map(parse_json_or_string);
    let mut exchange = MemoryExchange::new(ServiceReference::new(cli.domain, cli.service), content)
        .with_context(context);

    match invoker.invoke(&mut exchange) {
        InvocationOutcome::Reply(content) => {
            println!("{}", json!({ "reply": content }));
            Ok(())
        }
        InvocationOutcome::Fault(err) => {
            eprintln!("{}", json!({ "fault": err.to_string() }));
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn properties_parse_json_values_with_string_fallback() {
        assert_eq!(
            parse_property("retries=3").unwrap(),
            ("retries".to_string(), json!(3))
        );
        assert_eq!(
            parse_property("user = alice").unwrap(),
            ("user".to_string(), json!(" alice"))
        );
        assert!(parse_property("novalue").is_err());
        assert!(parse_property("=1").is_err());
    }

    #[test]
    fn cli_accepts_repeated_properties() {
        let cli = Cli::try_parse_from([
            "remote-invoke",
            "--domain",
            "d1",
            "--service",
            "svcA",
            "--format",
            "msgpack",
            "--property",
            "a=1",
            "--property",
            "b={\"x\":true}",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(FormatType::MsgPack));
        assert_eq!(cli.properties.len(), 2);
        assert_eq!(cli.properties[1].1, json!({"x": true}));
    }
}
