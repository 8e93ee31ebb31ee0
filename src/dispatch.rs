use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use crate::form::TeamQuery;
use crate::games::{fetch_games, games_panel};
use crate::logo::{LogoLookup, fetch_logo};
use crate::polls::{fetch_poll_ranks, polls_panel};
use crate::records::{fetch_record, record_panel};
use crate::source::DataSource;
use crate::state::{DataRegion, Delta};
use crate::theme::{LogoArt, decode_logo, theme_from_logo};

// One thread per operation; none waits on another.
pub fn dispatch_submission(
    source: Arc<dyn DataSource>,
    query: TeamQuery,
    generation: u64,
    tx: Sender<Delta>,
) -> Vec<JoinHandle<()>> {
    let mut handles = Vec::with_capacity(4);

    {
        let (source, query, tx) = (Arc::clone(&source), query.clone(), tx.clone());
        handles.push(thread::spawn(move || {
            let outcome = fetch_record(source.as_ref(), &query);
            let _ = tx.send(Delta::SetPanel {
                generation,
                region: DataRegion::Record,
                panel: record_panel(&outcome, &query.team),
            });
        }));
    }

    {
        let (source, query, tx) = (Arc::clone(&source), query.clone(), tx.clone());
        handles.push(thread::spawn(move || {
            let outcome = fetch_games(source.as_ref(), &query);
            let _ = tx.send(Delta::SetPanel {
                generation,
                region: DataRegion::Games,
                panel: games_panel(&outcome, &query.team, &query.year),
            });
        }));
    }

    {
        let (source, query, tx) = (Arc::clone(&source), query.clone(), tx.clone());
        handles.push(thread::spawn(move || {
            let outcome = fetch_poll_ranks(source.as_ref(), &query);
            let _ = tx.send(Delta::SetPanel {
                generation,
                region: DataRegion::Polls,
                panel: polls_panel(&outcome, &query.team, &query.year),
            });
        }));
    }

    handles.push(thread::spawn(move || {
        run_logo_theme(source.as_ref(), &query, generation, &tx);
    }));

    handles
}

// Failures here only ever reach the console.
pub fn run_logo_theme(
    source: &dyn DataSource,
    query: &TeamQuery,
    generation: u64,
    tx: &Sender<Delta>,
) {
    let logo = match fetch_logo(source, &query.year, &query.team) {
        Ok(LogoLookup::Found(logo)) => logo,
        Ok(LogoLookup::Missing) => {
            let _ = tx.send(Delta::Log(format!("[WARN] No logo found for {}", query.team)));
            return;
        }
        Err(err) => {
            let _ = tx.send(Delta::Log(format!("[ERROR] Error getting team logo: {err:#}")));
            return;
        }
    };

    let url = logo.url.clone();
    let _ = tx.send(Delta::SetLogo { generation, logo });

    let image = match source.proxy_image(&url).and_then(|bytes| decode_logo(&bytes)) {
        Ok(image) => image,
        Err(err) => {
            let _ = tx.send(Delta::Log(format!(
                "[WARN] Logo failed to load for color extraction. ({err:#})"
            )));
            return;
        }
    };

    let _ = tx.send(Delta::SetLogoArt {
        generation,
        art: LogoArt::from_image(&image),
    });

    match theme_from_logo(&image) {
        Ok(theme) => {
            let _ = tx.send(Delta::SetTheme { generation, theme });
        }
        Err(err) => {
            let _ = tx.send(Delta::Log(format!("[ERROR] Color extraction failed: {err:#}")));
        }
    }
}
