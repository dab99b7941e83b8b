//! # provider-aws
//!
//! Command-line driver for the provider pieces in this crate.
//!
//! ## Usage
//!
//! ```bash
//! # Check a value against an EventBridge naming rule
//! provider-aws validate rule-name my-rule
//! provider-aws validate custom-event-bus-name default --key name
//!
//! # Read the aws_vpclattice_service_network data source and print its state
//! provider-aws service-network sn-0123456789abcdef0
//!
//! # Use a YAML provider config instead of environment variables
//! provider-aws --config provider.yaml service-network sn-0123456789abcdef0
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use provider_aws::config::ProviderConfig;
use provider_aws::diag::Diagnostics;
use provider_aws::observability::{logging, metrics};
use provider_aws::provider::events;
use provider_aws::provider::vpclattice::SERVICE_NETWORK_DATA_SOURCE_TYPE;
use provider_aws::provider::{data_source, read_data_source, AwsClient};
use provider_aws::schema::AttributeValue;
use provider_aws::validation::Validation;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::debug;

/// AWS provider CLI
#[derive(Parser)]
#[command(name = "provider-aws")]
#[command(about = "AWS provider validators and data sources", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Provider configuration file (YAML). Environment variables are used when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print collected metrics to stderr before exiting
    #[arg(long, global = true)]
    print_metrics: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a value against a naming rule
    Validate {
        #[arg(value_enum, value_name = "RULE")]
        rule: NameRule,

        #[arg(value_name = "VALUE")]
        value: String,

        /// Attribute name used in messages
        #[arg(long, default_value = "name")]
        key: String,
    },
    /// Read a VPC Lattice service network and print its state as JSON
    ServiceNetwork {
        /// Service network id or ARN
        #[arg(value_name = "IDENTIFIER")]
        identifier: String,
    },
    /// Show build information
    Version,
}

#[derive(Clone, Copy, ValueEnum)]
enum NameRule {
    RuleName,
    TargetId,
    ArchiveName,
    BusName,
    BusNameOrArn,
    SourceName,
    CustomEventBusName,
}

impl NameRule {
    fn validate(self, value: &str, key: &str) -> Validation {
        match self {
            NameRule::RuleName => events::validate_rule_name(value, key),
            NameRule::TargetId => events::validate_target_id(value, key),
            NameRule::ArchiveName => events::validate_archive_name(value, key),
            NameRule::BusName => events::validate_bus_name(value, key),
            NameRule::BusNameOrArn => events::validate_bus_name_or_arn(value, key),
            NameRule::SourceName => events::validate_source_name(value, key),
            NameRule::CustomEventBusName => events::validate_custom_event_bus_name(value, key),
        }
    }
}

fn print_diagnostics(diags: &Diagnostics) {
    for d in diags {
        eprintln!("{d}");
    }
}

fn validate_command(rule: NameRule, value: &str, key: &str) -> Result<()> {
    let mut diags = Diagnostics::new();
    diags.extend_validation(key, rule.validate(value, key));

    if diags.has_error() {
        metrics::increment_validation_failures();
        print_diagnostics(&diags);
        bail!("{value:?} is not a valid {key}");
    }

    print_diagnostics(&diags);
    println!("{value:?} is valid");
    Ok(())
}

async fn service_network_command(config: &ProviderConfig, identifier: String) -> Result<()> {
    let meta = AwsClient::connect(config)
        .await
        .context("Failed to create AWS client. Ensure AWS credentials are configured.")?;

    let ds = data_source(SERVICE_NETWORK_DATA_SOURCE_TYPE)
        .context("service network data source is not registered")?;

    let input = BTreeMap::from([(
        "service_network_identifier".to_string(),
        AttributeValue::String(identifier),
    )]);

    match read_data_source(ds.as_ref(), input, &meta).await {
        Ok(state) => {
            println!("{}", serde_json::to_string_pretty(&state)?);
            Ok(())
        }
        Err(diags) => {
            print_diagnostics(&diags);
            bail!("reading {SERVICE_NETWORK_DATA_SOURCE_TYPE} failed")
        }
    }
}

fn version_command() {
    println!("provider-aws {}", env!("CARGO_PKG_VERSION"));
    println!("  git:   {}", env!("BUILD_GIT_HASH"));
    println!("  built: {}", env!("BUILD_DATETIME"));
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ProviderConfig::load(cli.config.as_deref())?;
    logging::init_logging(&config)?;
    debug!(?config, "Loaded provider configuration");

    if config.enable_metrics {
        metrics::register_metrics()?;
    }

    let result = match cli.command {
        Commands::Validate { rule, value, key } => validate_command(rule, &value, &key),
        Commands::ServiceNetwork { identifier } => {
            service_network_command(&config, identifier).await
        }
        Commands::Version => {
            version_command();
            Ok(())
        }
    };

    if cli.print_metrics && config.enable_metrics {
        eprintln!("{}", metrics::gather_text()?);
    }

    result
}
