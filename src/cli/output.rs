use serde::Serialize;

use crate::model::card::{Card, CardKind};
use crate::model::settings::Settings;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct CardJson {
    pub title: String,
    pub kind: CardKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub notes: usize,
}

#[derive(Serialize)]
pub struct CardListJson {
    pub archive: String,
    pub cards: Vec<CardJson>,
}

#[derive(Serialize)]
pub struct SettingsJson {
    pub thumb_inverted: bool,
    pub notes_enabled: bool,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

pub fn card_to_json(card: &Card) -> CardJson {
    CardJson {
        title: card.title.clone(),
        kind: card.kind,
        size: card.size,
        modified: card.modified.map(|ts| ts.to_rfc3339()),
        notes: card.note_count,
    }
}

// ---------------------------------------------------------------------------
// Printers
// ---------------------------------------------------------------------------

pub fn print_cards(archive_name: &str, cards: &[&Card]) {
    println!("{}:", archive_name);
    for card in cards {
        println!("  {}", format_card_line(card));
    }
    if cards.is_empty() {
        println!("  (empty)");
    }
}

pub fn cards_to_json(archive_name: &str, cards: &[&Card]) -> CardListJson {
    CardListJson {
        archive: archive_name.to_string(),
        cards: cards.iter().map(|c| card_to_json(c)).collect(),
    }
}

pub fn format_card_line(card: &Card) -> String {
    let marker = match card.kind {
        CardKind::Folder => "d",
        CardKind::Document => "-",
    };
    let size = card.size_display().unwrap_or_default();
    let notes = if card.note_count > 0 {
        format!("  [{} notes]", card.note_count)
    } else {
        String::new()
    };
    format!("{} {:<40} {:>10}{}", marker, card.title, size, notes)
}

pub fn print_settings(settings: &Settings) {
    println!("thumb_inverted = {}", settings.is_thumb_inverted());
    println!("notes_enabled  = {}", settings.is_notes_enabled());
}

pub fn settings_to_json(settings: &Settings) -> SettingsJson {
    SettingsJson {
        thumb_inverted: settings.is_thumb_inverted(),
        notes_enabled: settings.is_notes_enabled(),
    }
}
