//! Plain-text rendering of the portfolio sections.
//!
//! This is deliberately dumb presentation: it only reads the resolved
//! dictionary and the current theme mode. The built-in catalogs are complete
//! (parity-checked), so a missing key here just echoes its path.

use clap::ValueEnum;

use folio_i18n::{Dictionary, Language, LocaleStore};
use folio_theme::ThemeMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Hero,
    Featured,
    Experience,
    Skills,
    Contact,
}

const EXPERIENCE_SLOTS: [&str; 4] = ["pos", "smilehouse", "smarthealth", "shoes"];

pub fn print(
    locale: &LocaleStore,
    lang_override: Option<Language>,
    section: Option<Section>,
    mode: ThemeMode,
) {
    let dict = match lang_override {
        Some(lang) => locale.dictionary_for(lang),
        None => locale.dictionary(),
    };

    println!("[{} / {}]", dict.language(), mode);
    println!();

    let sections = match section {
        Some(s) => vec![s],
        None => vec![
            Section::Hero,
            Section::Featured,
            Section::Experience,
            Section::Skills,
            Section::Contact,
        ],
    };
    for s in sections {
        match s {
            Section::Hero => hero(dict),
            Section::Featured => featured(dict),
            Section::Experience => experience(dict),
            Section::Skills => skills(dict),
            Section::Contact => contact(dict),
        }
        println!();
    }
}

fn line(dict: &Dictionary, key: &str) -> String {
    dict.text(key).unwrap_or(key).to_string()
}

fn bullets(dict: &Dictionary, key: &str) {
    for item in dict.list(key).unwrap_or_default() {
        println!("  - {item}");
    }
}

fn hero(dict: &Dictionary) {
    println!("{} {}", line(dict, "hero.greeting"), line(dict, "hero.name"));
    println!("{} {}", line(dict, "hero.title"), line(dict, "hero.subtitle"));
    println!("{}", line(dict, "hero.description"));
    println!("{}", line(dict, "hero.availability"));
}

fn featured(dict: &Dictionary) {
    println!("== {} ==", line(dict, "featured.badge"));
    println!(
        "{} - {}",
        line(dict, "featured.title"),
        line(dict, "featured.subtitle")
    );
    println!("{}", line(dict, "featured.description"));
    println!("{}", line(dict, "featured.featuresTitle"));
    bullets(dict, "featured.features");
    println!(
        "{}: {}",
        line(dict, "featured.techTitle"),
        line(dict, "featured.techDetail")
    );
}

fn experience(dict: &Dictionary) {
    println!("== {} ==", line(dict, "experience.title"));
    println!("{}", line(dict, "experience.subtitle"));
    for slot in EXPERIENCE_SLOTS {
        println!();
        println!(
            "{} @ {} ({})",
            line(dict, &format!("experience.{slot}.title")),
            line(dict, &format!("experience.{slot}.company")),
            line(dict, &format!("experience.{slot}.period")),
        );
        println!("{}", line(dict, &format!("experience.{slot}.description")));
        bullets(dict, &format!("experience.{slot}.achievements"));
        println!(
            "{} {} | {}",
            line(dict, &format!("experience.{slot}.impact")),
            line(dict, &format!("experience.{slot}.impactLabel")),
            line(dict, &format!("experience.{slot}.stack")),
        );
    }
}

fn skills(dict: &Dictionary) {
    println!("== {} ==", line(dict, "skills.title"));
    println!("{}", line(dict, "skills.subtitle"));
    for cat in ["languages", "frameworks", "databases", "tools"] {
        println!("  {}", line(dict, &format!("skills.categories.{cat}")));
    }
}

fn contact(dict: &Dictionary) {
    println!("== {} ==", line(dict, "contact.title"));
    println!("{}", line(dict, "contact.subtitle"));
    println!(
        "{} | {} | {}",
        line(dict, "contact.email"),
        line(dict, "contact.github"),
        line(dict, "contact.linkedin")
    );
    println!("{}", line(dict, "contact.location"));
}
