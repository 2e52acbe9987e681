//! Argument parsing, validation and dispatch.
//!
//! Each invocation parses one subcommand, builds an API client through the
//! injected factory, runs one service call and prints the result. Help and
//! argument errors short-circuit before any client is constructed.

use std::io::Write;

use anyhow::{bail, Context, Result};
use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};

use alidns_provider::{
    AddInput, AlidnsClient, DelInput, DnsApi, QueryInput, RecordService, UpdateInput,
};

use crate::output::{print, OutputFormat};

/// Builds a [`DnsApi`] from access-key credentials.
pub type ApiFactory = Box<dyn Fn(&str, &str) -> alidns_provider::Result<Box<dyn DnsApi>>>;

/// Injected collaborators: output sinks and the API client factory.
pub struct Deps<'a> {
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
    pub new_api: ApiFactory,
}

impl<'a> Deps<'a> {
    /// Production wiring: a real [`AlidnsClient`] per invocation.
    pub fn new(stdout: &'a mut dyn Write, stderr: &'a mut dyn Write) -> Self {
        Self {
            stdout,
            stderr,
            new_api: Box::new(|ak, sk| {
                let client = AlidnsClient::new(ak, sk)?;
                Ok(Box::new(client) as Box<dyn DnsApi>)
            }),
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "alidns",
    version,
    about = "Manage Alibaba Cloud DNS records",
    subcommand_required = true,
    arg_required_else_help = true
)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "pretty", overrides_with = "output")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a DNS record
    #[command(after_help = "Examples:
  alidns add --ak <key-id> --sk <secret> --domain example.com --name www --type A --value 1.2.3.4
  alidns add --ak <key-id> --sk <secret> --domain example.com --name mail --type MX --value mx.example.com --priority 10")]
    Add(AddArgs),
    /// Delete DNS records by host record name and type
    #[command(after_help = "Examples:
  alidns del --ak <key-id> --sk <secret> --domain example.com --name www --type A")]
    Del(DelArgs),
    /// List the DNS records of a domain
    #[command(after_help = "Examples:
  alidns query --ak <key-id> --sk <secret> --domain example.com
  alidns query --ak <key-id> --sk <secret> --domain example.com --output json")]
    Query(QueryArgs),
    /// Update an existing DNS record by id
    #[command(after_help = "Examples:
  alidns update --ak <key-id> --sk <secret> --id 9999985 --name www --type A --value 5.6.7.8")]
    Update(UpdateArgs),
}

#[derive(Args, Debug)]
struct Credentials {
    /// Alibaba Cloud Access Key ID
    #[arg(long)]
    ak: String,
    /// Alibaba Cloud Access Key Secret
    #[arg(long)]
    sk: String,
}

#[derive(Args, Debug)]
struct AddArgs {
    #[command(flatten)]
    creds: Credentials,
    /// Domain to add the record to
    #[arg(long)]
    domain: String,
    /// Host record (RR), e.g. "www"
    #[arg(long)]
    name: String,
    /// Record type, e.g. A, CNAME, TXT
    #[arg(long = "type")]
    record_type: String,
    /// Record value
    #[arg(long)]
    value: String,
    /// TTL in seconds
    #[arg(long, default_value_t = 600)]
    ttl: i64,
    /// MX record priority
    #[arg(long, default_value_t = 1)]
    priority: i64,
    /// Routing line
    #[arg(long, default_value = "default")]
    line: String,
}

#[derive(Args, Debug)]
struct DelArgs {
    #[command(flatten)]
    creds: Credentials,
    /// Domain to delete records from
    #[arg(long)]
    domain: String,
    /// Host record (RR) to delete
    #[arg(long)]
    name: String,
    /// Record type to delete
    #[arg(long = "type")]
    record_type: String,
}

#[derive(Args, Debug)]
struct QueryArgs {
    #[command(flatten)]
    creds: Credentials,
    /// Domain to list records for
    #[arg(long)]
    domain: String,
}

#[derive(Args, Debug)]
struct UpdateArgs {
    #[command(flatten)]
    creds: Credentials,
    /// Record id to update
    #[arg(long)]
    id: String,
    /// Host record (RR)
    #[arg(long)]
    name: String,
    /// Record type
    #[arg(long = "type")]
    record_type: String,
    /// Record value
    #[arg(long)]
    value: String,
    /// TTL in seconds
    #[arg(long, default_value_t = 600)]
    ttl: i64,
    /// MX record priority
    #[arg(long, default_value_t = 1)]
    priority: i64,
    /// Routing line
    #[arg(long, default_value = "default")]
    line: String,
}

/// Runs one invocation end to end. `args` includes the binary name.
pub async fn run(args: Vec<String>, deps: Deps<'_>) -> Result<()> {
    let Deps {
        stdout,
        stderr,
        new_api,
    } = deps;

    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => return finish_parse(err, stderr),
    };
    let output = cli.output;

    let service = |creds: &Credentials| -> Result<RecordService> {
        let api = new_api(&creds.ak, &creds.sk).context("failed to create Alidns client")?;
        Ok(RecordService::new(api))
    };

    match cli.command {
        Command::Add(args) => {
            require_non_empty(&[
                ("--ak", &args.creds.ak),
                ("--sk", &args.creds.sk),
                ("--domain", &args.domain),
                ("--name", &args.name),
                ("--type", &args.record_type),
                ("--value", &args.value),
            ])?;
            let svc = service(&args.creds)?;
            let response = svc
                .add(AddInput {
                    domain_name: args.domain,
                    name: args.name,
                    record_type: args.record_type,
                    value: args.value,
                    ttl: args.ttl,
                    priority: args.priority,
                    line: args.line,
                })
                .await?;
            print(stdout, &response, output)
        }
        Command::Del(args) => {
            require_non_empty(&[
                ("--ak", &args.creds.ak),
                ("--sk", &args.creds.sk),
                ("--domain", &args.domain),
                ("--name", &args.name),
                ("--type", &args.record_type),
            ])?;
            let svc = service(&args.creds)?;
            let response = svc
                .del(DelInput {
                    domain_name: args.domain,
                    name: args.name,
                    record_type: args.record_type,
                })
                .await?;
            print(stdout, &response, output)
        }
        Command::Query(args) => {
            require_non_empty(&[
                ("--ak", &args.creds.ak),
                ("--sk", &args.creds.sk),
                ("--domain", &args.domain),
            ])?;
            let svc = service(&args.creds)?;
            let records = svc
                .query(QueryInput {
                    domain_name: args.domain,
                })
                .await?;
            print(stdout, &records, output)
        }
        Command::Update(args) => {
            require_non_empty(&[
                ("--ak", &args.creds.ak),
                ("--sk", &args.creds.sk),
                ("--id", &args.id),
                ("--name", &args.name),
                ("--type", &args.record_type),
                ("--value", &args.value),
            ])?;
            let svc = service(&args.creds)?;
            let response = svc
                .update(UpdateInput {
                    record_id: args.id,
                    name: args.name,
                    record_type: args.record_type,
                    value: args.value,
                    ttl: args.ttl,
                    priority: args.priority,
                    line: args.line,
                })
                .await?;
            print(stdout, &response, output)
        }
    }
}

/// Rejects blank values for required flags.
///
/// clap only enforces presence; a flag given as `--domain ""` still parses.
/// Every blank flag is named in one error so the caller fixes them all at
/// once, and nothing blank ever reaches the client factory.
fn require_non_empty(flags: &[(&str, &str)]) -> Result<()> {
    let blank: Vec<&str> = flags
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();
    if blank.is_empty() {
        Ok(())
    } else {
        bail!("required flags must not be empty: {}", blank.join(", "))
    }
}

/// Resolves a parse outcome that never reaches the service layer.
///
/// Requested help (or version) goes to the error stream and counts as
/// success; everything else becomes the invocation's terminal error.
fn finish_parse(err: clap::Error, stderr: &mut dyn Write) -> Result<()> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            write!(stderr, "{}", err.render())?;
            Ok(())
        }
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            write!(stderr, "{}", err.render())?;
            bail!("missing command")
        }
        _ => bail!("{}", err.render()),
    }
}
