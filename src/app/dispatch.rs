use crate::app::{compose, render};
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::draft::FALLBACK_MESSAGE;
use crate::error::SessionError;
use crate::fixtures;
use crate::session::{Role, SessionContext, SessionStore};
use crate::tone::{HttpToneAdvisor, ToneAdvisor};
use crate::ui::style as ui;
use anyhow::{Result, bail};
use tracing::warn;

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let store = SessionStore::new(config.session_path());

    match cli.command {
        Commands::Login { email, admin } => {
            let (email, role) = match email {
                Some(addr) => (addr, if admin { Role::Admin } else { Role::Employee }),
                None => compose::prompt_login(admin)?,
            };
            let session = SessionContext::login(&email, role)?;
            store.save(&session)?;
            println!(
                "  {}",
                ui::success(format!(
                    "Signed in as {} ({})",
                    session.email, session.role
                ))
            );
            println!("  {}", ui::dim(fixtures::DEMO_MODE_NOTE));
            Ok(())
        }

        Commands::Logout => {
            if store.clear()? {
                println!("  {}", ui::success(fixtures::LOGOUT_MESSAGE));
            } else {
                println!("  {}", ui::dim("No active session."));
            }
            Ok(())
        }

        Commands::Dashboard => {
            let session = require_session(&store)?;
            println!("{}", render::render_dashboard(&session, &config.quarter));
            Ok(())
        }

        Commands::Give { peer } => {
            require_session(&store)?;
            let Some(peer) = fixtures::peer_by_id(&peer) else {
                bail!("unknown peer id '{peer}' — peer ids are listed on the dashboard");
            };
            let advisor = HttpToneAdvisor::from_config(&config.tone);
            compose::run_give_flow(peer, &config.quarter, &advisor).await
        }

        Commands::Request => {
            require_session(&store)?;
            compose::run_request_wizard(&config.quarter)
        }

        Commands::Summary => {
            require_session(&store)?;
            println!("{}", render::render_summary());
            Ok(())
        }

        Commands::Admin => {
            let session = require_session(&store)?;
            if !session.is_admin() {
                bail!("admin role required — sign in with `vibecode login --admin`");
            }
            println!("{}", render::render_admin(&config.quarter));
            Ok(())
        }

        Commands::Tone { text } => {
            if text.trim().is_empty() {
                println!("  {}", ui::dim("Nothing to analyze."));
                return Ok(());
            }
            if crate::utils::text::char_count(&text) > crate::draft::MAX_FIELD_CHARS {
                println!(
                    "  {}",
                    ui::yellow(format!(
                        "Limited to {} characters, like the form fields",
                        crate::draft::MAX_FIELD_CHARS
                    ))
                );
                return Ok(());
            }
            let advisor = HttpToneAdvisor::from_config(&config.tone);
            match advisor.analyze(&text).await {
                Ok(guidance) => println!("  {guidance}"),
                Err(err) => {
                    warn!(error = %err, "tone check failed; showing fallback");
                    println!("  {}", ui::error(FALLBACK_MESSAGE));
                    println!(
                        "  {} {}",
                        ui::dim("endpoint:"),
                        ui::url(advisor.endpoint())
                    );
                }
            }
            Ok(())
        }
    }
}

fn require_session(store: &SessionStore) -> Result<SessionContext> {
    Ok(store.load()?.ok_or(SessionError::NotLoggedIn)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn require_session_reports_logged_out() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        let err = require_session(&store).unwrap_err();
        assert!(err.to_string().contains("not logged in"));
    }

    #[test]
    fn require_session_returns_saved_context() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        let session = SessionContext::login("dana@acme.com", Role::Admin).unwrap();
        store.save(&session).unwrap();

        let loaded = require_session(&store).unwrap();
        assert_eq!(loaded.email, "dana@acme.com");
        assert!(loaded.is_admin());
    }
}
