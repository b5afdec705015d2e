mod config;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use directory::{CopyField, NameCollator, Session, clipboard_payload};
use entity::{Employee, OfficeFilter};
use platform_api::{Materializer, RosterClient};
use platform_obs::{ObsConfig, init_tracing};
use platform_store::{ItemSize, PreferenceStore};
use tracing::info;

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "staffdir", version, about = "Company staff directory client")]
struct Cli {
    /// Directory service base URL (falls back to DIRECTORY_BASE_URL).
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Collation locale for name sorting (falls back to DIRECTORY_LOCALE).
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Preference file override (falls back to DIRECTORY_STATE_FILE).
    #[arg(long, global = true, value_name = "FILE")]
    state_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List employees after sorting and filtering.
    List(ListCommand),
    /// Show one employee's full record.
    Show { name: String },
    /// Print a clipboard payload for one employee.
    Copy {
        name: String,
        #[arg(long, value_enum, default_value = "email")]
        field: FieldArg,
    },
    /// Download an employee's photo into a temporary file and print its path.
    CopyImage {
        name: String,
        /// Suggested file name (defaults to the employee name).
        #[arg(long, value_name = "NAME")]
        file_name: Option<String>,
    },
    /// Read or persist the office filter preference.
    Office { value: Option<String> },
    /// Read or persist the grid column preference.
    Columns {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=8))]
        value: Option<u8>,
    },
    /// Read or persist the grid item size preference.
    ItemSize {
        #[arg(value_enum)]
        value: Option<ItemSizeArg>,
    },
}

#[derive(Args, Debug)]
struct ListCommand {
    /// Office filter for this invocation (defaults to the saved preference).
    #[arg(long)]
    office: Option<String>,

    /// Only employees whose start date is on or after this date.
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
    since: Option<NaiveDate>,

    /// Emit the refined roster as JSON.
    #[arg(long)]
    json: bool,

    /// Render a name grid using the saved column preference.
    #[arg(long, conflicts_with = "json")]
    grid: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FieldArg {
    Email,
    Name,
    Phone,
    ImageUrl,
    Card,
}

impl From<FieldArg> for CopyField {
    fn from(value: FieldArg) -> Self {
        match value {
            FieldArg::Email => CopyField::Email,
            FieldArg::Name => CopyField::Name,
            FieldArg::Phone => CopyField::Phone,
            FieldArg::ImageUrl => CopyField::ImageUrl,
            FieldArg::Card => CopyField::Card,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ItemSizeArg {
    Small,
    Medium,
    Large,
}

impl From<ItemSizeArg> for ItemSize {
    fn from(value: ItemSizeArg) -> Self {
        match value {
            ItemSizeArg::Small => ItemSize::Small,
            ItemSizeArg::Medium => ItemSize::Medium,
            ItemSizeArg::Large => ItemSize::Large,
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    raw.parse()
        .map_err(|_| format!("invalid date {raw:?}; expected YYYY-MM-DD"))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing(ObsConfig::default())?;
    let cli = Cli::parse();
    let config = AppConfig::load(cli.base_url, cli.locale, cli.state_file)?;
    match cli.command {
        Command::List(cmd) => run_list(cmd, &config).await,
        Command::Show { name } => run_show(&name, &config).await,
        Command::Copy { name, field } => run_copy(&name, field.into(), &config).await,
        Command::CopyImage { name, file_name } => {
            run_copy_image(&name, file_name.as_deref(), &config).await
        }
        Command::Office { value } => run_office(value.as_deref(), &config),
        Command::Columns { value } => run_columns(value, &config),
        Command::ItemSize { value } => run_item_size(value.map(Into::into), &config),
    }
}

async fn run_list(cmd: ListCommand, config: &AppConfig) -> Result<()> {
    let store = PreferenceStore::open(config.state_file.clone())?;
    let prefs = store.load();
    let office = match &cmd.office {
        Some(label) => config.office_filter(label)?,
        None => prefs.office.clone(),
    };
    let collator = NameCollator::new(&config.locale)?;
    let view = fetch_view(config, office, cmd.since, &collator).await?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else if cmd.grid {
        print!("{}", render::grid(&view, prefs.columns as usize));
    } else {
        print!("{}", render::table(&view));
    }
    Ok(())
}

async fn run_show(name: &str, config: &AppConfig) -> Result<()> {
    let roster = fetch_roster(config).await?;
    let employee = find_employee(&roster, name)?;
    println!("Name:   {}", employee.name);
    println!("Office: {}", employee.office_name);
    println!("Email:  {}", employee.email);
    println!("Phone:  {}", employee.telephone.as_deref().unwrap_or("-"));
    println!("Image:  {}", employee.image_url);
    if let Some(start_date) = &employee.start_date {
        println!("Start:  {start_date}");
    }
    Ok(())
}

async fn run_copy(name: &str, field: CopyField, config: &AppConfig) -> Result<()> {
    let roster = fetch_roster(config).await?;
    let employee = find_employee(&roster, name)?;
    match clipboard_payload(employee, field) {
        Some(payload) => {
            println!("{payload}");
            Ok(())
        }
        None => bail!("no telephone on record for {}", employee.name),
    }
}

async fn run_copy_image(name: &str, file_name: Option<&str>, config: &AppConfig) -> Result<()> {
    let roster = fetch_roster(config).await?;
    let employee = find_employee(&roster, name)?;
    let suggested = file_name.unwrap_or(&employee.name);
    let path = Materializer::new()
        .materialize(&employee.image_url, Some(suggested))
        .await
        .with_context(|| format!("could not copy image for {}", employee.name))?;
    println!("{}", path.display());
    Ok(())
}

fn run_office(value: Option<&str>, config: &AppConfig) -> Result<()> {
    let store = PreferenceStore::open(config.state_file.clone())?;
    let mut prefs = store.load();
    match value {
        None => println!("{}", prefs.office),
        Some(label) => {
            prefs.office = config.office_filter(label)?;
            store.save(&prefs)?;
            info!(office = %prefs.office, "office preference saved");
        }
    }
    Ok(())
}

fn run_columns(value: Option<u8>, config: &AppConfig) -> Result<()> {
    let store = PreferenceStore::open(config.state_file.clone())?;
    let mut prefs = store.load();
    match value {
        None => println!("{}", prefs.columns),
        Some(columns) => {
            prefs.columns = columns;
            store.save(&prefs)?;
            info!(columns, "column preference saved");
        }
    }
    Ok(())
}

fn run_item_size(value: Option<ItemSize>, config: &AppConfig) -> Result<()> {
    let store = PreferenceStore::open(config.state_file.clone())?;
    let mut prefs = store.load();
    match value {
        None => println!("{}", prefs.item_size),
        Some(item_size) => {
            prefs.item_size = item_size;
            store.save(&prefs)?;
            info!(%item_size, "item size preference saved");
        }
    }
    Ok(())
}

async fn fetch_roster(config: &AppConfig) -> Result<Vec<Employee>> {
    let client = RosterClient::new(config.require_base_url()?)?;
    client
        .fetch_employees()
        .await
        .context("could not fetch employees")
}

async fn fetch_view(
    config: &AppConfig,
    office: OfficeFilter,
    cutoff: Option<NaiveDate>,
    collator: &NameCollator,
) -> Result<Vec<Employee>> {
    let client = RosterClient::new(config.require_base_url()?)?;
    let mut session = Session::new();
    session.set_office(office);
    session.set_start_date_cutoff(cutoff);
    let ticket = session.begin_fetch();
    let employees = client
        .fetch_employees()
        .await
        .context("could not fetch employees")?;
    session.complete_fetch(ticket, employees);
    Ok(session.view(collator)?)
}

fn find_employee<'a>(roster: &'a [Employee], name: &str) -> Result<&'a Employee> {
    roster
        .iter()
        .find(|e| e.name == name)
        .or_else(|| {
            roster
                .iter()
                .find(|e| e.name.to_lowercase() == name.to_lowercase())
        })
        .ok_or_else(|| anyhow!("no employee named {name:?}"))
}
