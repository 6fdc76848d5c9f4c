//! Validates parameter transitions, clamping, and input-event mapping

use trill::state::input::{
    Effect, InputEvent, Key, PinchDirection, SwipeDirection, apply,
};
use trill::state::settings::{ColorTarget, Rgb, Settings};

#[test]
fn test_dimension_never_leaves_bounds() {
    let mut settings = Settings::default();
    assert_eq!(settings.tiling.dimension, 9);

    for _ in 0..40 {
        settings = settings.decrement_dimension();
    }
    assert_eq!(settings.tiling.dimension, 2);

    for _ in 0..80 {
        settings = settings.increment_dimension();
    }
    assert_eq!(settings.tiling.dimension, 30);
}

#[test]
fn test_chance_steps_by_five_within_bounds() {
    let mut settings = Settings::default();
    assert!((settings.tiling.flip_chance - 50.0).abs() < 1e-12);

    settings = settings.increase_chance();
    assert!((settings.tiling.flip_chance - 55.0).abs() < 1e-12);

    for _ in 0..20 {
        settings = settings.increase_chance();
    }
    assert!((settings.tiling.flip_chance - 90.0).abs() < 1e-12);

    for _ in 0..40 {
        settings = settings.decrease_chance();
    }
    assert!((settings.tiling.flip_chance - 10.0).abs() < 1e-12);
}

#[test]
fn test_paper_toggle_round_trips() {
    let settings = Settings::default();
    assert!(settings.paper.is_off());

    let on = settings.toggle_paper();
    assert!((on.paper.opacity - 0.1).abs() < 1e-12);

    let off = on.toggle_paper();
    assert!(off.paper.is_off());
}

#[test]
fn test_run_toggle_flips_flag() {
    let settings = Settings::default();
    assert!(!settings.running);
    assert!(settings.toggle_run().running);
    assert!(!settings.toggle_run().toggle_run().running);
}

#[test]
fn test_viewport_rule_frames_large_and_bleeds_small() {
    let large = Settings::default().with_viewport(800.0, 600.0);
    assert!((large.canvas.width - 600.0).abs() < 1e-12);
    assert!((large.canvas.height - 600.0).abs() < 1e-12);
    assert!((large.canvas.padding - 120.0).abs() < 1e-12);

    let threshold = Settings::default().with_viewport(500.0, 500.0);
    assert!((threshold.canvas.padding - 120.0).abs() < 1e-12);
    assert!((threshold.canvas.drawable_width() - 260.0).abs() < 1e-12);

    let small = Settings::default().with_viewport(450.0, 400.0);
    assert!((small.canvas.width - 400.0).abs() < 1e-12);
    assert!(small.canvas.padding.abs() < 1e-12);
    assert!((small.canvas.drawable_width() - 400.0).abs() < 1e-12);
}

#[test]
fn test_hex_color_round_trip() {
    let color = Rgb::from_hex("#7e7b8a").unwrap();
    assert_eq!(color, Rgb::new(0x7e, 0x7b, 0x8a));
    assert_eq!(color.to_hex(), "#7e7b8a");

    assert_eq!(Rgb::from_hex("f5f5f5").unwrap(), Rgb::new(245, 245, 245));
    assert!(Rgb::from_hex("#1234").is_none());
    assert!(Rgb::from_hex("not-a-color").is_none());
}

#[test]
fn test_arrows_adjust_dimension_and_chance() {
    let settings = Settings::default();

    let (up, effect) = apply(settings, InputEvent::Key(Key::ArrowUp));
    assert_eq!(up.tiling.dimension, 10);
    assert_eq!(effect, Effect::Regenerate);

    let (down, _) = apply(settings, InputEvent::Key(Key::ArrowDown));
    assert_eq!(down.tiling.dimension, 8);

    let (right, _) = apply(settings, InputEvent::Key(Key::ArrowRight));
    assert!((right.tiling.flip_chance - 55.0).abs() < 1e-12);

    let (left, _) = apply(settings, InputEvent::Key(Key::ArrowLeft));
    assert!((left.tiling.flip_chance - 45.0).abs() < 1e-12);
}

#[test]
fn test_gestures_mirror_arrow_bindings() {
    let settings = Settings::default();

    let (swipe_up, effect) = apply(settings, InputEvent::Swipe(SwipeDirection::Up));
    assert_eq!(swipe_up.tiling.dimension, 10);
    assert_eq!(effect, Effect::Regenerate);

    let (swipe_down, _) = apply(settings, InputEvent::Swipe(SwipeDirection::Down));
    assert_eq!(swipe_down.tiling.dimension, 8);

    let (swipe_right, _) = apply(settings, InputEvent::Swipe(SwipeDirection::Right));
    assert!((swipe_right.tiling.flip_chance - 55.0).abs() < 1e-12);

    let (pinch_in, _) = apply(settings, InputEvent::Pinch(PinchDirection::In));
    assert_eq!(pinch_in.tiling.dimension, 10);

    let (pinch_out, _) = apply(settings, InputEvent::Pinch(PinchDirection::Out));
    assert_eq!(pinch_out.tiling.dimension, 8);
}

#[test]
fn test_save_exports_without_touching_state() {
    let settings = Settings::default();
    let (after, effect) = apply(settings, InputEvent::Key(Key::Save));

    assert_eq!(after, settings);
    assert_eq!(effect, Effect::Export);
}

#[test]
fn test_refresh_regenerates_without_touching_state() {
    let settings = Settings::default();
    let (after, effect) = apply(settings, InputEvent::Key(Key::Refresh));

    assert_eq!(after, settings);
    assert_eq!(effect, Effect::Regenerate);
}

#[test]
fn test_toggle_animation_flips_flag_without_render_effect() {
    let settings = Settings::default();
    let (after, effect) = apply(settings, InputEvent::Key(Key::ToggleAnimation));

    assert!(after.running);
    assert_eq!(effect, Effect::None);
}

#[test]
fn test_picker_toggle_and_color_pick_only_redraw() {
    let settings = Settings::default();

    let (toggled, effect) = apply(settings, InputEvent::Key(Key::TogglePickers));
    assert!(!toggled.pickers_visible);
    assert_eq!(effect, Effect::Redraw);

    let color = Rgb::new(10, 20, 30);
    let (picked, pick_effect) = apply(
        settings,
        InputEvent::PickColor {
            target: ColorTarget::Reverse,
            color,
        },
    );
    assert_eq!(picked.palette.reverse, color);
    assert_eq!(picked.palette.forward, settings.palette.forward);
    assert_eq!(pick_effect, Effect::Redraw);
}

#[test]
fn test_resize_event_applies_viewport_rule() {
    let settings = Settings::default();
    let (resized, effect) = apply(
        settings,
        InputEvent::Resize {
            width: 320.0,
            height: 480.0,
        },
    );

    assert!((resized.canvas.width - 320.0).abs() < 1e-12);
    assert!(resized.canvas.padding.abs() < 1e-12);
    assert_eq!(effect, Effect::Regenerate);
}
