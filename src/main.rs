//! Demo driver for the reveal engine.
//!
//! Builds a synthetic page of animated sections, scrolls a viewport down and
//! back up through it, and logs every reveal event the engine emits.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use reveal_config::RevealConfig;
use reveal_dom::{Document, ElementId, Rect, Viewport};
use reveal_motion::{
    ANIMATE_ATTR, ANIMATION_ATTR, AnimationDescriptor, AnimationRegistry, Capabilities,
    DriverOptions, init_document,
};

const SECTION_COUNT: usize = 5;
const SECTION_HEIGHT: f64 = 400.0;
const SECTION_GAP: f64 = 300.0;

fn main() -> Result<()> {
    init_tracing();

    let mut config = RevealConfig::load_or_default();
    config.merge_with_env();

    let registry = if config.animations.is_empty() {
        demo_registry()
    } else {
        AnimationRegistry::from_config(&config)
    };

    let mut doc = Document::new();
    let sections = build_page(&mut doc)?;
    let mut viewport = Viewport::new(800.0, 600.0);

    let capabilities = Capabilities {
        intersection_observer: !config.engine.force_fallback,
    };
    let mut engine = init_document(
        &mut doc,
        &viewport,
        &registry,
        DriverOptions::from_config(&config),
        capabilities,
    )?;
    info!("watching {} sections", engine.watched_count());
    report(&engine.drain_events(), &doc);

    // Scroll to the bottom of the page and back in steps
    let page_height = SECTION_COUNT as f64 * (SECTION_HEIGHT + SECTION_GAP);
    let step = 150.0;
    let mut offsets: Vec<f64> = Vec::new();
    let mut y = 0.0;
    while y < page_height {
        y += step;
        offsets.push(y.min(page_height));
    }
    while y > 0.0 {
        y -= step;
        offsets.push(y.max(0.0));
    }

    for offset in offsets {
        engine.scroll_to(&mut doc, &mut viewport, offset)?;
        let events = engine.drain_events();
        if !events.is_empty() {
            info!("scrolled to {offset}");
            report(&events, &doc);
        }
    }

    for section in &sections {
        let el = doc.element(*section)?;
        info!(
            "section {:?}: data-animated={:?} style=\"{}\"",
            section,
            el.attribute("data-animated"),
            el.style_text()
        );
    }
    Ok(())
}

/// Install a tracing subscriber filtered by `RUST_LOG`, defaulting to `info`.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build a page of stacked sections, each holding three staggered cards.
fn build_page(doc: &mut Document) -> Result<Vec<ElementId>> {
    let mut sections = Vec::new();
    for i in 0..SECTION_COUNT {
        let top = i as f64 * (SECTION_HEIGHT + SECTION_GAP);
        let section = doc.create_element(doc.root(), "section")?;
        {
            let node = doc.element_mut(section)?;
            node.set_attribute(ANIMATE_ATTR, "");
            node.set_attribute(ANIMATION_ATTR, if i % 2 == 0 { "fade-up" } else { "pop" });
            node.set_rect(Rect::new(0.0, top, 800.0, SECTION_HEIGHT));
        }
        for c in 0..3 {
            let card = doc.create_element(section, "div")?;
            let node = doc.element_mut(card)?;
            node.add_class("card");
            node.set_rect(Rect::new(
                40.0 + 250.0 * c as f64,
                top + 80.0,
                220.0,
                240.0,
            ));
        }
        sections.push(section);
    }
    Ok(sections)
}

/// Registry used when no `reveal.toml` provides one.
fn demo_registry() -> AnimationRegistry {
    AnimationRegistry::new()
        .with(
            "fade-up",
            AnimationDescriptor::new()
                .with_child(".card")
                .with_before("opacity: 0; transform: translateY(24px)")
                .with_after("opacity: 1; transform: translateY(0)")
                .with_stagger(100),
        )
        .with(
            "pop",
            AnimationDescriptor::new()
                .with_before("transform: scale(0.9)")
                .with_after("transform: scale(1)"),
        )
}

fn report(events: &[reveal_motion::RevealEvent], _doc: &Document) {
    for event in events {
        info!(
            "{:?} {:?} via {} ({:?})",
            event.element,
            event.phase,
            event.animation,
            event.direction
        );
    }
}
