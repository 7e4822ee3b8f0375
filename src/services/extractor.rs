use scraper::{ElementRef, Html, Selector};

use crate::domain::source::SelectorSet;

pub const DEFAULT_COMPANY: &str = "Unknown";
pub const DEFAULT_LOCATION: &str = "Middle East";

/// Raw fields pulled from one card, before link resolution and country
/// inference. Only the title is guaranteed present.
pub struct PartialRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub link: String,
}

/// Finds the listing cards in a parsed page, capped at `max_cards` so a
/// malformed page cannot produce unbounded work.
pub fn extract_cards<'a>(
    document: &'a Html,
    selectors: &SelectorSet,
    max_cards: usize,
) -> Vec<ElementRef<'a>> {
    let card_selector = match Selector::parse(selectors.card) {
        Ok(selector) => selector,
        Err(e) => {
            log::error!("Invalid card selector {:?}: {:?}", selectors.card, e);
            return vec![];
        }
    };

    document.select(&card_selector).take(max_cards).collect()
}

/// Pulls the five fields out of one card. Missing company, location and link
/// get defaults; a card without a title is dropped entirely.
pub fn extract_fields(card: &ElementRef, selectors: &SelectorSet) -> Option<PartialRecord> {
    let title = match select_text(card, selectors.title) {
        Some(title) => title,
        None => {
            log::debug!("Skipping card without an extractable title");
            return None;
        }
    };

    Some(PartialRecord {
        title,
        company: select_text(card, selectors.company)
            .unwrap_or_else(|| DEFAULT_COMPANY.to_string()),
        location: select_text(card, selectors.location)
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
        link: select_href(card, selectors.link).unwrap_or_default(),
    })
}

fn select_text(card: &ElementRef, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    card.select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

fn select_href(card: &ElementRef, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    card.select(&selector)
        .next()
        .and_then(|element| element.value().attr("href"))
        .map(|href| href.to_string())
}
