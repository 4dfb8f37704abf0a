//! Updates urgency and ordering of Asana tasks.
//!
//! Usage:
//!
//! ```text
//! todo-updater [--personal-access-token <token>] [field options] <command>
//!
//! todo-updater urgency --project-gid 1205994859505918
//! todo-updater task 1206000000000001 1206000000000002
//! todo-updater order --section-gid 1206005792093857
//! ```
//!
//! Every option can also be supplied through the environment variable named
//! in `--help`. Logging honours `RUST_LOG` and defaults to `info`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mockable::DefaultClock;
use std::process::ExitCode;
use std::sync::Arc;
use todo_updater::{
    config::{AsanaConfig, DEFAULT_ASANA_BASE_URL, FieldConfig},
    task::{
        adapters::asana::AsanaTaskTracker,
        domain::TaskGid,
        services::{ApplyReport, TaskUpdateService},
    },
};
use tokio::runtime::Builder;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Update Asana tasks with urgency based on custom fields.
#[derive(Debug, Parser)]
#[command(name = "todo-updater")]
#[command(version)]
struct Cli {
    /// Asana personal access token
    #[arg(long, env = "PERSONAL_ACCESS_TOKEN", hide_env_values = true)]
    personal_access_token: String,

    /// Gid of the custom field holding the open date
    #[arg(long, env = "OPEN_DATE_FIELD_GID", default_value = "1205994998304482")]
    open_date_field_gid: String,

    /// Gid of the custom field holding impact
    #[arg(long, env = "IMPACT_FIELD_GID", default_value = "1205872827118668")]
    impact_field_gid: String,

    /// Gid of the custom field holding size
    #[arg(long, env = "SIZE_FIELD_GID", default_value = "1205994859505931")]
    size_field_gid: String,

    /// Gid of the custom field holding urgency
    #[arg(long, env = "URGENCY_FIELD_GID", default_value = "1205994998304510")]
    urgency_field_gid: String,

    /// Gid of the custom field holding order
    #[arg(long, env = "ORDER_FIELD_GID", default_value = "1206071193914820")]
    order_field_gid: String,

    /// Asana API root
    #[arg(long, env = "ASANA_BASE_URL", default_value = DEFAULT_ASANA_BASE_URL)]
    asana_base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
enum Command {
    /// Order tasks in a section
    Order {
        /// Section whose tasks are re-ordered
        #[arg(long, env = "FIX_SECTION_ORDERING", default_value = "1206005792093857")]
        section_gid: String,
    },

    /// Update urgency of tasks in a project
    Urgency {
        /// Project whose tasks are updated
        #[arg(long, env = "PROJECT_GID", default_value = "1205994859505918")]
        project_gid: String,
    },

    /// Update urgency of specific tasks
    Task {
        /// Gids of the tasks to update
        #[arg(required = true)]
        task_gids: Vec<String>,
    },
}

impl Cli {
    fn field_config(&self) -> Result<FieldConfig> {
        FieldConfig::from_raw(
            &self.open_date_field_gid,
            &self.impact_field_gid,
            &self.size_field_gid,
            &self.urgency_field_gid,
            &self.order_field_gid,
        )
        .context("invalid custom field configuration")
    }

    fn asana_config(&self) -> AsanaConfig {
        AsanaConfig::new(self.personal_access_token.clone()).with_base_url(&self.asana_base_url)
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let runtime = match Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            error!(error = %err, "failed to start runtime");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(code) => code,
        Err(err) => {
            error!(error = ?err, "run failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let fields = cli.field_config()?;
    let tracker =
        AsanaTaskTracker::new(&cli.asana_config()).context("failed to build Asana client")?;
    let service = TaskUpdateService::new(Arc::new(tracker), Arc::new(DefaultClock), fields);

    let report = match cli.command {
        Command::Order { section_gid } => service.reorder_section(&section_gid).await,
        Command::Urgency { project_gid } => service.update_project_urgency(&project_gid).await,
        Command::Task { task_gids } => {
            let gids = task_gids
                .into_iter()
                .map(TaskGid::new)
                .collect::<Result<Vec<_>, _>>()
                .context("invalid task gid")?;
            service.update_task_urgency(&gids).await
        }
    };

    // Fetch failures are already logged by the service.
    Ok(report.map_or(ExitCode::FAILURE, |summary| summarise(&summary)))
}

fn summarise(report: &ApplyReport) -> ExitCode {
    info!(
        written = report.written(),
        failed = report.failures().len(),
        aborted = report.aborted(),
        "run finished"
    );
    if report.aborted() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
