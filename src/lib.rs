// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use crate::application::{CardBoard, CardRepository, StatusMessage};
use crate::cli::args::{Args, Command, ConfigAction};
use crate::domain::{CardDraft, CardField};
use crate::infrastructure::config::{default_config_path, Config};
use crate::infrastructure::{HttpCardRepository, PageRenderer};
use crate::ports::{HtmlPresenter, TextPresenter};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// How `list` prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    Text,
    Json,
    Html,
}

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting cardbox with arguments");

    let Args {
        base_url,
        config,
        command,
        ..
    } = args;

    let config_path = match &config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    // Only commands that talk to the API need a connection
    let connect = || -> Result<CardBoard<HttpCardRepository>> {
        let config = match &config {
            Some(path) => Config::load(path)?,
            None => Config::load_or_default(&config_path)?,
        };
        let base_url = config.resolve_base_url(base_url.as_deref());
        info!(%base_url, "Using cards API");
        Ok(CardBoard::new(HttpCardRepository::new(&base_url)?))
    };

    match command {
        Command::Upload {
            image,
            name,
            company,
            title,
            email,
            phone,
            tags,
            json,
        } => {
            let mut draft = CardDraft::new();
            for (field, value) in [
                (CardField::Name, name),
                (CardField::Company, company),
                (CardField::Title, title),
                (CardField::Email, email),
                (CardField::Phone, phone),
                (CardField::Tags, tags),
            ] {
                draft.set(field, value.unwrap_or_default());
            }
            if let Some(path) = image {
                draft = select_image(draft, path);
            }
            // An invalid draft is rejected before config or network are touched
            if let Some(status) = StatusMessage::for_invalid(&draft) {
                bail!("{status}");
            }
            let mut board = connect()?;
            print!("{}", upload_card(&mut board, draft, json)?);
        }
        Command::List { search, json, html } => {
            let format = if json {
                ListFormat::Json
            } else if html {
                ListFormat::Html
            } else {
                ListFormat::Text
            };
            let mut board = connect()?;
            let output = list_cards(&mut board, search.as_deref(), format)?;
            if format == ListFormat::Html {
                let mut renderer = PageRenderer::new();
                let page = renderer.write_page(&output)?;
                renderer.open_in_browser(&page)?;
            } else {
                print!("{output}");
            }
        }
        Command::Delete { id } => {
            let mut board = connect()?;
            print!("{}", delete_card(&mut board, &id)?);
        }
        Command::Config { action } => {
            print!("{}", run_config(&action, &config_path)?);
        }
    }

    Ok(())
}

/// Attach the image only if it points at a readable file; otherwise the
/// draft stays without image and the upload is rejected.
fn select_image(draft: CardDraft, path: PathBuf) -> CardDraft {
    if path.is_file() {
        draft.with_image(path)
    } else {
        warn!(path = %path.display(), "Image is not a file, ignoring");
        draft
    }
}

/// Submit `draft` and describe the outcome. Fails when the upload did not happen.
///
/// With `json` the output is the created card only; the status goes to the log.
pub fn upload_card<R: CardRepository>(
    board: &mut CardBoard<R>,
    mut draft: CardDraft,
    json: bool,
) -> Result<String> {
    let status = board.submit(&mut draft);
    if status.is_failure() {
        bail!("{status}");
    }

    let card = board
        .cards()
        .first()
        .context("Uploaded card missing from list")?;
    if json {
        info!(id = %card.id, "{status}");
        return Ok(format!("{}\n", serde_json::to_string_pretty(card)?));
    }
    Ok(format!("{status}\n{}", TextPresenter::new().render_card(card)))
}

/// Load all cards, filter by `search` and render them.
pub fn list_cards<R: CardRepository>(
    board: &mut CardBoard<R>,
    search: Option<&str>,
    format: ListFormat,
) -> Result<String> {
    if let Err(e) = board.load() {
        let status = board.message().unwrap_or(StatusMessage::LoadFailed);
        return Err(anyhow::Error::new(e).context(status.to_string()));
    }
    board.set_search(search.unwrap_or_default());

    let view = board.view();
    debug!(visible = view.visible.len(), total = view.total, "Rendering cards");
    match format {
        ListFormat::Text => Ok(TextPresenter::new().render(&view)),
        ListFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&view.visible)?)),
        ListFormat::Html => Ok(HtmlPresenter::new().render(&view)),
    }
}

pub fn delete_card<R: CardRepository>(board: &mut CardBoard<R>, id: &str) -> Result<String> {
    let status = board.delete(id);
    if status.is_failure() {
        bail!("{status}: {id}");
    }
    Ok(format!("{status}: {id}\n"))
}

pub fn run_config(action: &ConfigAction, config_path: &Path) -> Result<String> {
    match action {
        ConfigAction::Init { force } => {
            if config_path.exists() && !force {
                bail!(
                    "Config file already exists: {} (use --force to overwrite)",
                    config_path.display()
                );
            }
            Config::create_default(config_path)?;
            info!(path = %config_path.display(), "Wrote default config");
            Ok(format!("Created {}\n", config_path.display()))
        }
        ConfigAction::Show => {
            let config = Config::load_or_default(config_path)?;
            let body = toml::to_string_pretty(&config).context("Failed to serialize config")?;
            Ok(format!("# {}\n{}", config_path.display(), body))
        }
    }
}
