use anyhow::bail;
use chrono::{Datelike, Utc};

use catalog::dashboards::{d400_library_overview, d401_yearly_summary};
use catalog::domain::{a001_book, a002_arts_plan_item};
use catalog::shared::config::{self, Config};
use catalog::shared::data::{FileStorage, RecordStore};
use catalog::shared::logger;
use catalog::system::auth::SessionGuard;
use catalog::system::settings::SettingsService;
use contracts::dashboards::d401_yearly_summary::dto::YearlySummaryRequest;
use contracts::shared::filter::CategoryScope;
use contracts::system::auth::LoginRequest;

const USAGE: &str = "usage: catalog <login USER PASSWORD | logout | overview | books [CATEGORY] [SEARCH] | arts-plan [CATEGORY] | yearly [YEAR] | settings>";

fn main() -> anyhow::Result<()> {
    let config = config::load_config()?;
    logger::init(&config::resolve_path(&config.logging.dir))?;

    let storage_path = config::resolve_path(&config.storage.path);
    tracing::info!("Using storage: {}", storage_path.display());
    let storage = FileStorage::open(&storage_path)?;
    let mut guard = SessionGuard::restore(storage, config.auth.clone())?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("overview");

    match command {
        "login" => {
            let (Some(username), Some(password)) = (args.get(1), args.get(2)) else {
                bail!(USAGE);
            };
            let request = LoginRequest {
                username: username.clone(),
                password: password.clone(),
            };
            if !guard.login(&request)? {
                bail!("Invalid credentials");
            }
            println!("Logged in as {}", username);
            return Ok(());
        }
        "logout" => {
            guard.logout()?;
            println!("Logged out");
            return Ok(());
        }
        _ => {}
    }

    if !guard.is_authenticated() {
        bail!("Not logged in, run `catalog login USER PASSWORD` first");
    }

    run_command(&config, guard, command, &args[args.len().min(1)..])
}

fn run_command(
    config: &Config,
    guard: SessionGuard<FileStorage>,
    command: &str,
    rest: &[String],
) -> anyhow::Result<()> {
    let (books, items) = if config.catalog.seed_demo_data {
        (a001_book::demo_books(), a002_arts_plan_item::demo_items())
    } else {
        (RecordStore::new(), RecordStore::new())
    };

    match command {
        "overview" => {
            let overview =
                d400_library_overview::service::compute(&books.all(), Utc::now().date_naive());
            println!("{}", serde_json::to_string_pretty(&overview)?);
        }
        "books" => {
            let scope = CategoryScope::from_route_param(rest.first().map(String::as_str))
                .map_err(anyhow::Error::msg)?;
            let mut screen = a001_book::books_screen(books, scope);
            if let Some(term) = rest.get(1) {
                screen.set_search(term.as_str());
            }
            let view = screen.view();
            tracing::info!("Books: {} shown, years {:?}", view.len(), view.available_years);
            println!("{}", serde_json::to_string_pretty(&view.records)?);
        }
        "arts-plan" => {
            let scope = CategoryScope::from_route_param(rest.first().map(String::as_str))
                .map_err(anyhow::Error::msg)?;
            let screen = a002_arts_plan_item::ArtsPlanScreen::new(items, scope);
            println!("{}", serde_json::to_string_pretty(&screen.view().records)?);
        }
        "yearly" => {
            let year = match rest.first() {
                Some(value) => value.parse()?,
                None => Utc::now().year(),
            };
            let summary =
                d401_yearly_summary::service::compute(&books.all(), YearlySummaryRequest { year });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        "settings" => {
            let settings = SettingsService::new(guard.into_storage());
            let json = serde_json::json!({
                "profile": settings.profile()?,
                "preferences": settings.preferences()?,
                "library": settings.library()?,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        _ => bail!(USAGE),
    }

    Ok(())
}
