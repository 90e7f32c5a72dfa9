//! folio CLI
//!
//! Terminal collaborator for the folio stores: renders the resolved portfolio
//! copy in the active language and exposes the language/theme preference
//! mutations. Both stores are reconciled against persisted state before any
//! command runs, so mutations always see confirmed values.

mod render;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use folio_i18n::{Language, LocaleStore};
use folio_prefs::{FilePrefs, PrefStore};
use folio_theme::{detect_system_scheme, ThemeStore};

use crate::render::Section;

#[derive(Parser)]
#[command(name = "folio", version, about = "Bilingual portfolio renderer")]
struct Cli {
    /// Preference file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    prefs: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the portfolio in the active (or given) language
    Show {
        /// Render in this language without persisting it (en|th)
        #[arg(long, value_name = "CODE")]
        lang: Option<String>,

        /// Render a single section
        #[arg(long, value_enum, value_name = "NAME")]
        section: Option<Section>,
    },

    /// Read or change the persisted language preference
    Lang {
        #[command(subcommand)]
        action: LangAction,
    },

    /// Read or change the persisted theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand)]
enum LangAction {
    /// Print the active language code
    Get,
    /// Switch the language and persist it (en|th)
    Set { code: String },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the active mode
    Get,
    /// Flip between light and dark and persist the result
    Toggle,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let prefs: Arc<dyn PrefStore> = match &cli.prefs {
        Some(path) => Arc::new(FilePrefs::at(path)),
        None => Arc::new(FilePrefs::default_location().context("locating preference file")?),
    };

    let locale = LocaleStore::new(prefs.clone()).context("loading translation catalogs")?;
    let theme = ThemeStore::new(prefs);

    // Reconcile before exposing any mutation: toggles and language switches
    // must only ever act on confirmed state.
    locale.initialize();
    theme.initialize(detect_system_scheme());
    tracing::debug!("reconciled: lang={} mode={}", locale.language(), theme.mode());

    match cli.command {
        Command::Show { lang, section } => {
            if let Some(code) = &lang {
                let parsed: Language = code
                    .parse()
                    .with_context(|| format!("cannot render in `{code}`"))?;
                // A view-only override, not a preference change.
                render::print(&locale, Some(parsed), section, theme.mode());
                return Ok(ExitCode::SUCCESS);
            }
            render::print(&locale, None, section, theme.mode());
        }
        Command::Lang { action } => match action {
            LangAction::Get => println!("{}", locale.language()),
            LangAction::Set { code } => {
                if !locale.set_language_code(&code) {
                    eprintln!("unsupported language code `{code}` (expected `en` or `th`)");
                    return Ok(ExitCode::from(2));
                }
                println!("{}", locale.language());
            }
        },
        Command::Theme { action } => match action {
            ThemeAction::Get => println!("{}", theme.mode()),
            ThemeAction::Toggle => println!("{}", theme.toggle()),
        },
    }

    Ok(ExitCode::SUCCESS)
}
