use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use std::time::Duration;

use firstrun_core::{Color, TestClock, View, ViewKind};
use firstrun_ui::view::ids;
use firstrun_ui::*;

const W: f32 = 390.0;

fn five_cards() -> Vec<CardDefinition> {
    vec![
        CardDefinition::new("Welcome", "Browse fast and private.", "welcome"),
        CardDefinition::new("Search", "Search suggestions as you type.", "search"),
        CardDefinition::new("Private", "Private tabs forget everything.", "private"),
        CardDefinition::new("Mail", "Open links in your mail app.", "mail"),
        CardDefinition::new("Sync", "Your bookmarks on every device.", "sync")
            .with_action("Sign in to Sync", "sync.signin"),
    ]
}

fn config() -> CarouselConfig {
    CarouselConfig {
        start_color: Color::from_rgb(0, 100, 200),
        end_color: Color::from_rgb(200, 100, 0),
        ..CarouselConfig::default()
    }
}

fn build(cards: Vec<CardDefinition>) -> (OnboardingCarousel, TestClock) {
    let clock = TestClock::new();
    let carousel =
        OnboardingCarousel::new(cards, &AllImages, config(), W, Rc::new(clock.clone())).unwrap();
    (carousel, clock)
}

fn settle_fade(c: &mut OnboardingCarousel, clock: &TestClock) {
    clock.advance(Duration::from_millis(250));
    assert!(!c.tick());
}

#[test]
fn five_cards_at_rest() {
    let (c, _) = build(five_cards());
    assert_eq!(c.active_index(), 0);
    assert_eq!(c.overlay_alphas(), vec![1.0, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(c.background(), Color::from_rgb(0, 100, 200));
}

#[test]
fn half_page_drag_blends_background() {
    let (mut c, _) = build(five_cards());
    let update = c.on_scroll(0.5 * W).unwrap();
    assert_eq!(update.background, Color::from_rgb(100, 100, 100));
    assert_eq!(update.indicator_page, 0);

    c.on_scroll(W - 0.5);
    assert_eq!(c.indicator_page(), 0);
    c.on_scroll(W);
    assert_eq!(c.indicator_page(), 1);
    assert_eq!(c.background(), Color::from_rgb(200, 100, 0));
}

#[test]
fn background_stays_at_end_color_past_first_page() {
    let (mut c, _) = build(five_cards());
    c.on_scroll(3.5 * W);
    assert_eq!(c.background(), Color::from_rgb(200, 100, 0));
    assert_eq!(c.state().scroll_fraction, 1.0);
}

#[test]
fn settle_on_second_page_cross_fades() {
    let (mut c, clock) = build(five_cards());
    assert_eq!(c.on_settle(W), Some(1));
    assert_eq!(c.active_index(), 1);
    assert!(c.is_animating());

    clock.advance(Duration::from_millis(125));
    assert!(c.tick());
    let mid = c.overlay_alphas();
    assert!(mid[0] > 0.0 && mid[0] < 1.0);
    assert!(mid[1] > 0.0 && mid[1] < 1.0);

    clock.advance(Duration::from_millis(125));
    assert!(!c.tick());
    assert_eq!(c.overlay_alphas(), vec![0.0, 1.0, 0.0, 0.0, 0.0]);
}

#[test]
fn settling_on_the_same_page_is_a_no_op() {
    let (mut c, clock) = build(five_cards());
    assert_eq!(c.on_settle(0.0), None);
    assert_eq!(c.on_settle(W), Some(1));
    settle_fade(&mut c, &clock);
    assert_eq!(c.on_settle(W + 3.0), None);
    assert!(!c.is_animating());
}

#[test]
fn indicator_tap_matches_drag() {
    let (mut dragged, clock_a) = build(five_cards());
    let (mut tapped, clock_b) = build(five_cards());

    dragged.on_settle(3.0 * W);
    assert_eq!(tapped.on_indicator_select(3), Some(3.0 * W));
    assert_eq!(tapped.indicator_page(), 3);

    settle_fade(&mut dragged, &clock_a);
    settle_fade(&mut tapped, &clock_b);
    assert_eq!(dragged.active_index(), tapped.active_index());
    assert_eq!(dragged.overlay_alphas(), tapped.overlay_alphas());
    assert_eq!(dragged.offset(), tapped.offset());
    assert_eq!(dragged.background(), tapped.background());
    assert_eq!(dragged.indicator_page(), tapped.indicator_page());
    assert_eq!(dragged.state(), tapped.state());

    // repeated identical input starts nothing new
    assert_eq!(tapped.on_indicator_select(3), Some(3.0 * W));
    assert!(!tapped.is_animating());
    assert_eq!(tapped.on_indicator_select(9), None);
    assert_eq!(tapped.active_index(), 3);
}

#[test]
fn active_index_never_leaves_range() {
    let (mut c, clock) = build(five_cards());
    for x in [-10.0, -W, 2.0 * W, 5.0 * W, 40.0 * W, f32::INFINITY, f32::NAN] {
        c.on_scroll(x);
        c.on_settle(x);
        clock.advance(Duration::from_millis(50));
        c.tick();
        assert!(c.active_index() < 5);
        assert!(c.indicator_page() < 5);
    }
    assert_eq!(c.active_index(), 2);
}

#[test]
fn rapid_settles_last_one_wins() {
    let (mut c, clock) = build(five_cards());
    c.on_settle(W);
    clock.advance(Duration::from_millis(100));
    c.tick();
    c.on_settle(2.0 * W);
    clock.advance(Duration::from_millis(40));
    c.tick();
    c.on_settle(W);
    settle_fade(&mut c, &clock);
    assert_eq!(c.active_index(), 1);
    assert_eq!(c.overlay_alphas(), vec![0.0, 1.0, 0.0, 0.0, 0.0]);
}

#[test]
fn final_action_fires_finished_exactly_once() {
    let (mut c, clock) = build(five_cards());
    let events = Rc::new(RefCell::new(Vec::new()));
    c.set_on_finished({
        let events = events.clone();
        move |f| events.borrow_mut().push(f.clone())
    });

    c.on_settle(4.0 * W);
    settle_fade(&mut c, &clock);
    assert!(c.trigger_action());
    assert!(!c.trigger_action());
    assert!(!c.skip());

    assert_eq!(
        *events.borrow(),
        vec![Finished {
            request_action: true,
            action: Some(ActionId("sync.signin".into())),
        }]
    );
}

#[test]
fn missing_images_are_skipped() {
    let images: HashSet<String> = ["welcome", "sync"].iter().map(|s| s.to_string()).collect();
    let clock = TestClock::new();
    let c = OnboardingCarousel::new(five_cards(), &images, config(), W, Rc::new(clock)).unwrap();
    let titles: Vec<_> = c.cards().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Welcome", "Sync"]);
    assert_eq!(c.overlay_alphas(), vec![1.0, 0.0]);
}

#[test]
fn signals_notify_subscribers() {
    let (mut c, _) = build(five_cards());
    let pages = Rc::new(RefCell::new(Vec::new()));
    c.indicator_signal().subscribe({
        let pages = pages.clone();
        move |p| pages.borrow_mut().push(*p)
    });
    let colors = Rc::new(RefCell::new(0));
    c.background_signal().subscribe({
        let colors = colors.clone();
        move |_| *colors.borrow_mut() += 1
    });

    c.on_scroll(0.2 * W);
    c.on_scroll(0.6 * W);
    c.on_scroll(1.1 * W);
    c.on_scroll(1.4 * W);

    assert_eq!(*pages.borrow(), vec![1]);
    // 1.1w and 1.4w both clamp to the end color
    assert_eq!(*colors.borrow(), 3);
}

fn texts(view: &View) -> Vec<(String, f32)> {
    let mut out = Vec::new();
    view.walk(&mut |v| {
        if let ViewKind::Text {
            text, font_size, ..
        } = &v.kind
        {
            out.push((text.clone(), *font_size));
        }
    });
    out
}

fn button_text(view: &View, id: u64) -> Option<String> {
    match &view.find(id)?.kind {
        ViewKind::Button { text, .. } => Some(text.clone()),
        _ => None,
    }
}

#[test]
fn view_tree_reflects_state() {
    let (c, clock) = build(five_cards());
    let carousel = shared(c);

    let view = OnboardingView(&carousel);
    assert_eq!(view.modifier.background, Some(Color::from_rgb(0, 100, 200)));
    assert_eq!(view.find(ids::overlay(0)).unwrap().modifier.opacity(), 1.0);
    assert_eq!(view.find(ids::overlay(1)).unwrap().modifier.opacity(), 0.0);
    assert_eq!(view.find(ids::PAGER).unwrap().children.len(), 5);
    assert_eq!(button_text(&view, ids::SKIP).as_deref(), Some("Skip"));
    assert!(view.find(ids::ACTION).is_some());
    assert_eq!(texts(&view).len(), 10);

    carousel.borrow_mut().on_settle(4.0 * W);
    clock.advance(Duration::from_millis(250));
    carousel.borrow_mut().tick();

    let view = OnboardingView(&carousel);
    assert_eq!(button_text(&view, ids::SKIP).as_deref(), Some("Done"));
    assert_eq!(view.find(ids::overlay(4)).unwrap().modifier.opacity(), 1.0);
    match &view.find(ids::INDICATOR).unwrap().kind {
        ViewKind::PageIndicator { count, current, .. } => {
            assert_eq!((*count, *current), (5, 4));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn view_callbacks_drive_the_carousel() {
    let (c, _) = build(five_cards());
    let carousel = shared(c);
    let finished = Rc::new(RefCell::new(None));
    carousel.borrow_mut().set_on_finished({
        let finished = finished.clone();
        move |f| *finished.borrow_mut() = Some(f.clone())
    });

    let view = OnboardingView(&carousel);
    if let ViewKind::Pager {
        on_scroll: Some(scroll),
        on_settle: Some(settle),
        ..
    } = &view.find(ids::PAGER).unwrap().kind
    {
        scroll(0.5 * W);
        assert_eq!(carousel.borrow().background(), Color::from_rgb(100, 100, 100));
        settle(2.0 * W);
    } else {
        panic!("pager missing");
    }
    assert_eq!(carousel.borrow().active_index(), 2);

    if let ViewKind::PageIndicator {
        on_select: Some(select),
        ..
    } = &view.find(ids::INDICATOR).unwrap().kind
    {
        select(4);
    }
    assert_eq!(carousel.borrow().active_index(), 4);
    assert_eq!(carousel.borrow().offset(), 4.0 * W);
    assert_eq!(carousel.borrow().indicator_page(), 4);
    assert_eq!(carousel.borrow().background(), Color::from_rgb(200, 100, 0));

    if let ViewKind::Button {
        on_click: Some(click),
        ..
    } = &view.find(ids::ACTION).unwrap().kind
    {
        click();
    }
    let got = finished.borrow().clone().unwrap();
    assert!(got.request_action);
}

#[test]
fn view_uses_scaled_fonts() {
    let (mut c, _) = build(five_cards());
    c.on_font_scale_changed(1.5);
    let carousel = shared(c);
    let view = OnboardingView(&carousel);
    let sizes = texts(&view);
    assert_eq!(sizes[0], ("Welcome".to_string(), 42.0));
    assert_eq!(sizes[1].1, 25.5);
}

#[test]
fn indicator_tap_scrolls_the_rebuilt_pager() {
    let (c, clock) = build(five_cards());
    let carousel = shared(c);

    let view = OnboardingView(&carousel);
    match &view.find(ids::INDICATOR).unwrap().kind {
        ViewKind::PageIndicator {
            on_select: Some(select),
            ..
        } => select(3),
        other => panic!("unexpected {other:?}"),
    }
    clock.advance(Duration::from_millis(250));
    carousel.borrow_mut().tick();

    let view = OnboardingView(&carousel);
    match &view.find(ids::PAGER).unwrap().kind {
        ViewKind::Pager { offset, .. } => assert_eq!(*offset, 3.0 * W),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(view.modifier.background, Some(Color::from_rgb(200, 100, 0)));
    assert_eq!(view.find(ids::overlay(3)).unwrap().modifier.opacity(), 1.0);
    match &view.find(ids::INDICATOR).unwrap().kind {
        ViewKind::PageIndicator { current, .. } => assert_eq!(*current, 3),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn indicator_event_keeps_background_in_step_with_offset() {
    let (mut c, _) = build(five_cards());
    c.handle(CarouselEvent::IndicatorSelected(3));
    assert_eq!(c.offset(), 3.0 * W);
    assert_eq!(c.state().scroll_fraction, 1.0);
    assert_eq!(c.background(), Color::from_rgb(200, 100, 0));

    c.handle(CarouselEvent::IndicatorSelected(0));
    assert_eq!(c.offset(), 0.0);
    assert_eq!(c.background(), Color::from_rgb(0, 100, 200));
    assert_eq!(c.indicator_page(), 0);
}
