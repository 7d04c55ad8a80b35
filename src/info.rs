//! Read-only metrics panel ("Projektanalyse").

use crate::dom::{append, el};
use raumplaner_core::metrics::{Metrics, StatCard, METRICS_HEADING, METRICS_INTRO};
use raumplaner_core::Configuration;
use web_sys as web;

struct CardWidget {
    value: web::Element,
    note: web::Element,
}

pub struct MetricsPanel {
    cards: Vec<CardWidget>,
}

impl MetricsPanel {
    pub fn mount(
        document: &web::Document,
        container: &web::Element,
        config: &Configuration,
    ) -> anyhow::Result<Self> {
        container.set_inner_html("");
        append(container, &el(document, "h2", "metrics-title", Some(METRICS_HEADING))?)?;
        append(container, &el(document, "p", "metrics-intro", Some(METRICS_INTRO))?)?;

        let grid = el(document, "div", "metrics-grid", None)?;
        append(container, &grid)?;
        let cards = Metrics::from_config(config)
            .stat_cards()
            .iter()
            .map(|card| stat_card(document, &grid, card))
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self { cards })
    }

    pub fn update(&self, config: &Configuration) {
        let metrics = Metrics::from_config(config);
        for (w, card) in self.cards.iter().zip(metrics.stat_cards().iter()) {
            w.value.set_text_content(Some(&card.value));
            w.note.set_text_content(Some(card.note));
        }
    }
}

fn stat_card(
    document: &web::Document,
    grid: &web::Element,
    card: &StatCard,
) -> anyhow::Result<CardWidget> {
    let node = el(document, "article", "stat-card", None)?;
    append(&node, &el(document, "span", "stat-label", Some(card.label))?)?;
    let value = el(document, "strong", "stat-value", Some(&card.value))?;
    append(&node, &value)?;
    let note = el(document, "p", "stat-note", Some(card.note))?;
    append(&node, &note)?;
    append(grid, &node)?;
    Ok(CardWidget { value, note })
}
