//! Eu Indico - command-line client for the service-provider directory

#![allow(clippy::print_stdout, clippy::print_stderr)]

use anyhow::{bail, Context, Result};
use euindico_core::Navigation;
use euindico_lib::commands::{self, PageRefusal};
use euindico_lib::utils::logging::{error_label, init_tracing};
use euindico_lib::AppContext;
use tracing::{error, info, warn};

const USAGE: &str = "\
usage: euindico <command>

commands:
  login <email> <password>          sign in and store the session
  logout                            clear the stored session
  whoami                            show the signed-in user and menu
  open <path>                       resolve a route through the guard
  professions                       list the profession catalogue
  search <profession-id> [city-id]  search professionals
  help                              show this message";

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();

    let config = euindico_infra::config::load().context("failed to load configuration")?;
    let json_logs = std::env::var("EUINDICO_LOG_JSON").is_ok_and(|value| value == "1");
    init_tracing(&config.log_level, json_logs);

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => warn!(error = %err, "no .env file loaded"),
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    if matches!(args.as_slice(), [] | ["help" | "-h" | "--help"]) {
        println!("{USAGE}");
        return Ok(());
    }

    let ctx = match AppContext::new(config) {
        Ok(ctx) => ctx,
        Err(err) => {
            error!(error = %err, kind = error_label(&err), "failed to initialise application context");
            return Err(err).context("failed to initialise application context");
        }
    };
    info!(app = %ctx.config.app.name, version = %ctx.config.app.version, "started");

    match args.as_slice() {
        ["login", username, password] => match commands::login(&ctx, username, password).await {
            Ok(user) => println!("Olá, {}", user.name),
            Err(message) => bail!(message),
        },
        ["logout"] => commands::logout(&ctx).await,
        ["whoami"] => {
            let whoami = commands::whoami(&ctx);
            match whoami.greeting {
                Some(greeting) => println!("{greeting}"),
                None => println!("(anônimo)"),
            }
            let labels: Vec<&str> = whoami.menu.iter().map(|item| item.label).collect();
            println!("{}", labels.join(" | "));
        }
        ["open", path] => match commands::open(&ctx, path) {
            Navigation::Render(route) => println!("{route}"),
            Navigation::Redirect(route) => println!("-> {route}"),
        },
        ["professions"] => {
            for profession in commands::professions(&ctx).await.map_err(refused)? {
                println!("{:>5}  {}", profession.id, profession.name);
            }
        }
        ["search", profession, rest @ ..] if rest.len() <= 1 => {
            let profession_id = parse_id(profession)?;
            let city_id = rest.first().map(|city| parse_id(city)).transpose()?;
            let state =
                commands::search(&ctx, profession_id, city_id).await.map_err(refused)?;
            if let Some(message) = state.message {
                println!("{message}");
            }
            for found in state.results {
                println!("{:>5}  {}  {}  {}", found.id, found.name, found.contact, found.rating);
            }
        }
        _ => {
            eprintln!("{USAGE}");
            bail!("unrecognised command");
        }
    }

    Ok(())
}

fn parse_id(raw: &str) -> Result<i64> {
    raw.parse().with_context(|| format!("not a numeric id: {raw}"))
}

fn refused(refusal: PageRefusal) -> anyhow::Error {
    anyhow::anyhow!(refusal.to_string())
}
