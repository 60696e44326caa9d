use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};

use ddka_admin::app::access::{
    can_access_unified_search, ensure_unified_search_access, fetch_current_admin,
};
use ddka_admin::app::ports::HttpClientPort;
use ddka_admin::app::{to_export_values, ExportUseCase, SearchView, UnifiedSearch};
use ddka_admin::config::Config;
use ddka_admin::export::{default_fields, unified_fields, ExportField, FieldSelection};
use ddka_admin::infra::{FileDownload, ReqwestHttp};
use ddka_admin::logging;
use ddka_admin::render::{render_summary, render_view};
use ddka_admin::search::{
    EntityGroup, GroupFilter, SearchFilter, StatusFilter, StatusSummary,
};

#[derive(Parser)]
#[command(name = "ddka_admin")]
#[command(about = "Unified record search and CSV export for the DDKA back-office")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Clone)]
struct FilterArgs {
    /// Free-text query over name, email, phones, Aadhar, transaction id and ID labels
    #[arg(long, short = 'q', default_value = "")]
    query: String,
    /// all, pending, approved or rejected
    #[arg(long, default_value = "all")]
    status: StatusFilter,
    /// all, player, institution or official
    #[arg(long = "type", default_value = "all")]
    group: GroupFilter,
}

impl FilterArgs {
    fn to_filter(&self) -> SearchFilter {
        SearchFilter::new(self.query.clone(), self.status, self.group)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the merged player/institution/official table
    Search {
        #[command(flatten)]
        filter: FilterArgs,
        /// Print status counts per type under the table
        #[arg(long)]
        summary: bool,
    },
    /// Export records to CSV
    Export {
        #[command(flatten)]
        filter: FilterArgs,
        /// Field keys to include (comma-separated). Ignored with --all
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,
        /// Export every available field
        #[arg(long)]
        all: bool,
        /// Export raw entities of one type instead of the unified view.
        /// --query, --status and --type still select which entities are written
        #[arg(long)]
        raw: Option<EntityGroup>,
        /// Filename prefix
        #[arg(long)]
        prefix: Option<String>,
    },
    /// List exportable fields
    Fields {
        /// Entity type; omit for the unified view
        #[arg(long = "type")]
        group: Option<EntityGroup>,
    },
    /// Show the signed-in admin and capabilities
    Whoami,
}

fn selection_for(fields: &[ExportField], keys: &[String]) -> FieldSelection {
    let mut selection = FieldSelection::for_fields(fields);
    if keys.is_empty() {
        return selection;
    }
    selection.clear();
    for key in keys {
        if !selection.set(key.trim(), true) {
            warn!(field = %key, "Unknown export field ignored");
        }
    }
    selection
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load().context("loading configuration")?;
    let http: Arc<dyn HttpClientPort> = Arc::new(ReqwestHttp::new(&config.api)?);

    match cli.command {
        Commands::Search { filter, summary } => {
            ensure_unified_search_access(http.as_ref()).await?;
            let search = UnifiedSearch::new(http.clone());
            let view = search.view(&filter.to_filter()).await;
            print!("{}", render_view(&view));
            if summary {
                if let SearchView::Rows(rows) = &view {
                    println!();
                    print!("{}", render_summary(&StatusSummary::from_records(rows)));
                }
            }
        }
        Commands::Export { filter, fields, all, raw, prefix } => {
            ensure_unified_search_access(http.as_ref()).await?;
            let search = UnifiedSearch::new(http.clone());
            let download = FileDownload::new(&config.export.output_dir);
            let exporter = ExportUseCase::new(Arc::new(download));

            let (records, field_list, default_prefix) = match raw {
                Some(group) => {
                    let entities = search.fetch_raw(group, &filter.to_filter()).await?;
                    (entities, default_fields(group), group.export_prefix().to_string())
                }
                None => match search.view(&filter.to_filter()).await {
                    SearchView::Rows(rows) => (
                        to_export_values(&rows)?,
                        unified_fields(),
                        config.export.default_prefix.clone(),
                    ),
                    SearchView::Error(msg) => {
                        error!("{}", msg);
                        anyhow::bail!(msg);
                    }
                },
            };
            let prefix = prefix.unwrap_or(default_prefix);

            let result = if all {
                // Raw entities carry more than the default columns
                let every = if raw.is_some() { Vec::new() } else { field_list };
                exporter.export_all(&records, &every, &prefix)
            } else {
                exporter.export_selected(&records, &selection_for(&field_list, &fields), &prefix)
            };
            match result {
                Ok(receipt) => {
                    info!(location = %receipt.location, "Export saved");
                    println!(
                        "Exported {} rows x {} columns to {}",
                        receipt.rows, receipt.columns, receipt.location
                    );
                }
                Err(e) => {
                    println!("{}", e);
                    return Err(e.into());
                }
            }
        }
        Commands::Fields { group } => {
            let fields = match group {
                Some(group) => default_fields(group),
                None => unified_fields(),
            };
            for field in fields {
                println!("{:<16} {}", field.key, field.header());
            }
        }
        Commands::Whoami => match fetch_current_admin(http.as_ref()).await {
            Some(profile) => {
                println!("{}", serde_json::to_string_pretty(&profile)?);
                println!(
                    "unified search: {}",
                    if can_access_unified_search(&profile) {
                        "allowed"
                    } else {
                        "denied"
                    }
                );
            }
            None => anyhow::bail!("could not load the current admin"),
        },
    }
    Ok(())
}
