use anyhow::Context;
use clap::Subcommand;

use geolookup::{
    ApiClient, Config, GeoRecord, Router, Session, SessionRepository,
    core::{
        navigation::ROOT_PATH,
        views::{HistoryView, LoginView, LookupView, NavBar, RegisterView},
    },
    models::GEO_COLUMNS,
};

#[derive(Subcommand)]
pub enum Command {
    /// Log in and remember the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "GEOLOOKUP_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "GEOLOOKUP_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Look up one or more IPs or search terms
    Lookup {
        #[arg(value_name = "QUERY", required = true)]
        values: Vec<String>,
    },
    /// Show every lookup recorded for the current user
    History,
    /// Revoke and forget the session token
    Logout,
    /// Show whether a session token is stored
    Status,
}

pub async fn run(command: Command, config: &Config) -> anyhow::Result<()> {
    let api = config.api_client()?;
    let session = config.open_session().await?;
    run_with(command, api, session).await
}

/// Run `command`, then close the store whether or not it succeeded.
async fn run_with(command: Command, api: ApiClient, session: Session) -> anyhow::Result<()> {
    let result = execute(command, api, &session).await;
    let closed = session.store().close().await;
    result.and(closed)
}

async fn execute(command: Command, api: ApiClient, session: &Session) -> anyhow::Result<()> {
    let mut router = Router::new(ROOT_PATH, session.is_authenticated());

    match command {
        Command::Login { email, password } => {
            let mut view = LoginView {
                email,
                password,
                ..Default::default()
            };
            anyhow::ensure!(view.is_valid(), "Enter a valid email and a password of at least 8 characters");
            let outcome = LoginView::submit(api, session.clone(), view.credentials()).await;
            match view.finish(&outcome) {
                Ok(path) => {
                    router.navigate(path, session.is_authenticated());
                    println!("Logged in ({})", router.path());
                }
                Err(_) => anyhow::bail!("{}", view.toast.visible().unwrap_or_default()),
            }
        }
        Command::Register {
            name,
            email,
            password,
        } => {
            let mut view = RegisterView {
                name,
                email,
                password,
                ..Default::default()
            };
            anyhow::ensure!(
                view.is_valid(),
                "Enter a name, a valid email and a password of at least 8 characters"
            );
            let outcome = RegisterView::submit(api, view.registration()).await;
            match view.finish(&outcome) {
                Ok(Some(path)) => {
                    router.navigate(path, session.is_authenticated());
                    println!("Registered; log in next ({})", router.path());
                }
                Ok(None) => println!("Registration accepted"),
                Err(_) => anyhow::bail!("{}", view.toast.visible().unwrap_or_default()),
            }
        }
        Command::Lookup { values } => {
            let mut view = LookupView::default();
            for value in values {
                view.search_value = value;
                let pending = view
                    .begin_submit(session)
                    .context("Not logged in; run `geolookup login` first")?;
                let outcome = LookupView::submit(api.clone(), pending).await;
                if view.finish_submit(outcome).is_some() {
                    eprintln!("{}", view.toast.visible().unwrap_or_default());
                }
            }
            print_records(&view.records, false);
        }
        Command::History => {
            let mut view = HistoryView::default();
            view.toggle();
            let records = HistoryView::load(api, session.token()).await;
            anyhow::ensure!(records.is_some(), "Could not fetch history");
            view.finish_load(records);
            print_records(&view.records, true);
        }
        Command::Logout => {
            let mut nav = NavBar::default();
            let token = nav
                .begin_logout(session)
                .context("Not logged in")?;
            let outcome = NavBar::logout(api, session.clone(), token).await;
            let path = nav.finish_logout(&outcome).context("Logout failed")?;
            router.navigate(path, session.is_authenticated());
            println!("Logged out ({})", router.path());
        }
        Command::Status => {
            match session.store().load_token().await? {
                Some(stored) => println!("Logged in since {}", stored.written_at),
                None => println!("Not logged in"),
            }
            println!("Screen: {}", router.route());
            if let Some(file) = session.store().session_file() {
                println!("Session file: {}", file.display());
            }
        }
    }

    Ok(())
}

fn print_records(records: &[GeoRecord], with_updated: bool) {
    if records.is_empty() {
        println!("No data available");
        return;
    }
    let width = GEO_COLUMNS.iter().map(|c| c.len()).max().unwrap_or_default();
    for (index, record) in records.iter().enumerate() {
        if index > 0 {
            println!();
        }
        for (column, value) in GEO_COLUMNS.iter().zip(record.cells()) {
            println!("{column:<width$}  {value}");
        }
        if with_updated {
            println!("{:<width$}  {}", "Updated", record.updated_at_label());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use geolookup::SessionDb;

    use super::*;

    async fn anonymous_session() -> Session {
        Session::load(SessionDb::in_memory().await.unwrap())
            .await
            .unwrap()
    }

    fn offline_api() -> ApiClient {
        ApiClient::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap()
    }

    #[tokio::test]
    async fn store_is_closed_after_failed_command() {
        let session = anonymous_session().await;
        let command = Command::Lookup {
            values: vec!["8.8.8.8".to_string()],
        };

        let err = run_with(command, offline_api(), session.clone())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Not logged in"));
        assert!(session.store().load_token().await.is_err());
    }

    #[tokio::test]
    async fn store_is_closed_after_successful_command() {
        let session = anonymous_session().await;
        run_with(Command::Status, offline_api(), session.clone())
            .await
            .unwrap();
        assert!(session.store().load_token().await.is_err());
    }
}
