//! Command-line front end for campus catalogs.
//!
//! # Responsibility
//! - Load a resource or article document from disk.
//! - Print list pages, tag clouds, calendar days and detail lookups so the
//!   core can be exercised without a browser.

mod render;

use anyhow::Context;
use campus_core::index::DEFAULT_TAG_CLOUD_LIMIT;
use campus_core::projection::stats::{catalog_stats, filter_options};
use campus_core::{
    date_index, date_key, init_logging, load, resolve_by_date_key, resolve_by_id, tag_cloud,
    Article, Catalog, CatalogItem, Command, FileSource, FilterField, ListEngine, ListKind,
    LogTarget, Resource, SortKey, ViewState,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const EXIT_NOT_FOUND: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "campus", version, about = "Browse campus resource and article catalogs")]
struct Cli {
    /// trace|debug|info|warn|error
    #[arg(long, global = true, env = "CAMPUS_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Absolute directory for rolling log files; stderr when unset.
    #[arg(long, global = true, env = "CAMPUS_LOG_DIR")]
    log_dir: Option<String>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List academic resources.
    Resources {
        file: PathBuf,
        #[arg(long)]
        year: Option<String>,
        #[arg(long)]
        semester: Option<String>,
        #[arg(long)]
        subject: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// List blog articles.
    Articles {
        file: PathBuf,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        tag: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show the popular-tags cloud.
    Tags {
        file: PathBuf,
        #[arg(long, default_value_t = DEFAULT_TAG_CLOUD_LIMIT)]
        limit: usize,
    },
    /// Show resources scheduled on one day.
    Calendar {
        file: PathBuf,
        /// Day as YYYY-MM-DD.
        #[arg(long)]
        date: String,
    },
    /// Show catalog counters and filter choices.
    Stats { kind: Collection, file: PathBuf },
    /// Show one item by id.
    Show {
        kind: Collection,
        file: PathBuf,
        id: String,
    },
}

#[derive(Args, Debug)]
struct ListArgs {
    #[arg(long)]
    search: Option<String>,
    /// newest|oldest|title; unknown values sort newest first.
    #[arg(long)]
    sort: Option<String>,
    #[arg(long, default_value_t = 1)]
    page: u32,
    /// Defaults to the site's page size for this list.
    #[arg(long, env = "CAMPUS_PAGE_SIZE")]
    page_size: Option<u32>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Collection {
    Resources,
    Articles,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let target = LogTarget::from_dir(cli.log_dir.as_deref())?;
    init_logging(&cli.log_level, target).context("failed to initialize logging")?;
    info!("event=cli_start module=cli status=ok version={}", campus_core::core_version());

    let json = cli.json;
    match cli.command {
        Commands::Resources {
            file,
            year,
            semester,
            subject,
            list,
        } => {
            let catalog = load_catalog::<Resource>(&file)?;
            let filters = [
                (FilterField::Year, year),
                (FilterField::Semester, semester),
                (FilterField::SubjectCode, subject),
                (FilterField::SearchText, list.search.clone()),
            ];
            let state = view_state(filters, &list);
            let engine = ListEngine::new(&catalog, Some(page_size(&list, ListKind::Resources)));
            render::list(&engine.render(&state), json, render::resource_line)?;
        }
        Commands::Articles {
            file,
            category,
            tag,
            list,
        } => {
            let catalog = load_catalog::<Article>(&file)?;
            let kind = if tag.is_some() {
                ListKind::Tags
            } else {
                ListKind::Blog
            };
            let filters = [
                (FilterField::Category, category),
                (FilterField::Tag, tag),
                (FilterField::SearchText, list.search.clone()),
            ];
            let state = view_state(filters, &list);
            let engine = ListEngine::new(&catalog, Some(page_size(&list, kind)));
            render::list(&engine.render(&state), json, render::article_line)?;
        }
        Commands::Tags { file, limit } => {
            let catalog = load_catalog::<Article>(&file)?;
            render::tag_cloud(&tag_cloud(&catalog, limit), json)?;
        }
        Commands::Calendar { file, date } => {
            let catalog = load_catalog::<Resource>(&file)?;
            let day = campus_core::model::parse_calendar_date(&date)
                .with_context(|| format!("invalid date `{date}`, expected YYYY-MM-DD"))?;
            let index = date_index(&catalog);
            let key = date_key(day);
            let items = resolve_by_date_key(&index, &key);
            render::calendar_day(&key, items, &index, json)?;
        }
        Commands::Stats { kind, file } => match kind {
            Collection::Resources => {
                let catalog = load_catalog::<Resource>(&file)?;
                render::stats(&catalog_stats(&catalog), &filter_options(&catalog), json)?;
            }
            Collection::Articles => {
                let catalog = load_catalog::<Article>(&file)?;
                render::stats(&catalog_stats(&catalog), &filter_options(&catalog), json)?;
            }
        },
        Commands::Show { kind, file, id } => {
            let outcome = match kind {
                Collection::Resources => {
                    let catalog = load_catalog::<Resource>(&file)?;
                    resolve_by_id(&catalog, id.as_str())
                        .map(|item| render::resource_detail(item, json))
                }
                Collection::Articles => {
                    let catalog = load_catalog::<Article>(&file)?;
                    resolve_by_id(&catalog, id.as_str())
                        .map(|item| render::article_detail(&catalog, item, json))
                }
            };
            match outcome {
                Ok(printed) => printed?,
                Err(err) => {
                    eprintln!("{err}");
                    return Ok(ExitCode::from(EXIT_NOT_FOUND));
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn load_catalog<T: CatalogItem + DeserializeOwned>(path: &Path) -> anyhow::Result<Catalog<T>> {
    let source = FileSource::new(path);
    load(&source).with_context(|| format!("failed to load {}", T::COLLECTION))
}

/// Replays CLI flags as view commands; the page is set last because every
/// filter or sort change resets it.
fn view_state<const N: usize>(
    filters: [(FilterField, Option<String>); N],
    list: &ListArgs,
) -> ViewState {
    let mut commands: Vec<Command> = filters
        .into_iter()
        .map(|(field, value)| Command::set_filter(field, value.as_deref()))
        .collect();
    if let Some(sort) = list.sort.as_deref() {
        commands.push(Command::SetSort(SortKey::parse(sort)));
    }
    commands.push(Command::SetPage(list.page));
    ViewState::new().apply_all(commands)
}

fn page_size(list: &ListArgs, kind: ListKind) -> u32 {
    list.page_size.unwrap_or_else(|| kind.page_size())
}
