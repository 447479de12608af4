use std::rc::Rc;
use std::time::Duration;

use anyhow::Context;
use firstrun_core::prelude::*;
use firstrun_ui::*;

const PAGE_WIDTH: f32 = 390.0;

fn cards() -> Vec<CardDefinition> {
    vec![
        CardDefinition::new(
            "Welcome",
            "A fast, private browser that puts you in control.",
            "onboarding-welcome",
        ),
        CardDefinition::new(
            "Search your way",
            "Pick a search engine and get suggestions as you type.",
            "onboarding-search",
        ),
        CardDefinition::new(
            "Browse privately",
            "Private tabs forget your history when you close them.",
            "onboarding-private",
        ),
        CardDefinition::new(
            "Open in mail",
            "Send links straight to your favorite mail app.",
            "onboarding-mail",
        ),
        CardDefinition::new(
            "Take it with you",
            "Sync bookmarks, history and passwords across devices.",
            "onboarding-sync",
        )
        .with_action("Sign in to Sync", "sync.signin"),
    ]
}

fn load_config() -> anyhow::Result<CarouselConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing config {path}"))
        }
        None => Ok(CarouselConfig::default()),
    }
}

fn outline(view: &View, depth: usize, out: &mut String) {
    let alpha = view
        .modifier
        .alpha
        .map(|a| format!(" alpha={a:.2}"))
        .unwrap_or_default();
    let bg = view
        .modifier
        .background
        .map(|c| format!(" bg={}", c.to_hex()))
        .unwrap_or_default();
    out.push_str(&format!("{}{:?}{alpha}{bg}\n", "  ".repeat(depth), view.kind));
    for c in &view.children {
        outline(c, depth + 1, out);
    }
}

/// Runs fades to completion in real time, like a display-link would.
fn run_fades(carousel: &SharedCarousel) {
    while carousel.borrow_mut().tick() {
        std::thread::sleep(Duration::from_millis(16));
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    let carousel = OnboardingCarousel::new(
        cards(),
        &AllImages,
        config,
        PAGE_WIDTH,
        Rc::new(SystemClock),
    )?;
    let carousel = shared(carousel);
    carousel.borrow_mut().set_on_finished(|f| {
        if f.request_action {
            log::info!("host: run action {:?}", f.action);
        } else {
            log::info!("host: onboarding dismissed");
        }
    });

    // Drag across the first page, settle on page 1.
    for step in 0..=10 {
        let x = PAGE_WIDTH * step as f32 / 10.0;
        if let Some(update) = carousel.borrow_mut().on_scroll(x) {
            log::info!(
                "x={x:>6.1} indicator={} background={}",
                update.indicator_page,
                update.background.to_hex()
            );
        }
    }
    carousel.borrow_mut().on_settle(PAGE_WIDTH);
    run_fades(&carousel);

    // Bump the content size, then jump to the last card through the indicator.
    carousel.borrow_mut().on_font_scale_changed(1.3);
    let last = carousel.borrow().cards().len() - 1;
    let target = carousel.borrow_mut().on_indicator_select(last);
    if let Some(x) = target {
        carousel.borrow_mut().on_settle(x);
    }
    run_fades(&carousel);

    let mut tree = String::new();
    outline(&OnboardingView(&carousel), 0, &mut tree);
    log::info!("view tree:\n{tree}");

    carousel.borrow_mut().trigger_action();
    Ok(())
}
