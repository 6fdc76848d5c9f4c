//! Validates paper-grain texture generation counts and tuned ranges

use rand::SeedableRng;
use rand::rngs::StdRng;
use trill::pattern::paper::generate_paper;
use trill::state::settings::CanvasSpec;

fn small_canvas() -> CanvasSpec {
    // Drawable area 100x100
    CanvasSpec {
        width: 104.0,
        height: 104.0,
        padding: 2.0,
    }
}

#[test]
fn test_zero_opacity_short_circuits_to_empty() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(generate_paper(&small_canvas(), 0.0, &mut rng).is_empty());
}

#[test]
fn test_grain_grid_plus_thirty_speckles() {
    let mut rng = StdRng::seed_from_u64(2);
    let rects = generate_paper(&small_canvas(), 0.1, &mut rng);

    // 50x50 grain squares on the 2-pixel grid, then exactly 30 speckles.
    assert_eq!(rects.len(), 50 * 50 + 30);
}

#[test]
fn test_grain_squares_within_tuned_ranges() {
    let mut rng = StdRng::seed_from_u64(3);
    let rects = generate_paper(&small_canvas(), 0.1, &mut rng);

    let grain = &rects[..50 * 50];
    for rect in grain {
        assert!((rect.width - 2.0).abs() < 1e-12);
        assert!((rect.height - 2.0).abs() < 1e-12);
        assert!((rect.opacity - 0.1).abs() < 1e-12);
        assert!(
            (75.0..=95.0).contains(&rect.gray_percent),
            "grain gray {} out of range",
            rect.gray_percent
        );
        assert!(rect.x >= 0.0 && rect.x < 100.0);
        assert!(rect.y >= 0.0 && rect.y < 100.0);
    }
}

#[test]
fn test_speckles_within_tuned_ranges() {
    let opacity = 0.1;
    let mut rng = StdRng::seed_from_u64(4);
    let rects = generate_paper(&small_canvas(), opacity, &mut rng);

    let speckles = &rects[50 * 50..];
    assert_eq!(speckles.len(), 30);

    for rect in speckles {
        assert!(rect.width == 1.0 || rect.width == 2.0);
        assert!(rect.height == 1.0 || rect.height == 2.0);
        assert!(
            (40.0..=60.0).contains(&rect.gray_percent),
            "speckle gray {} out of range",
            rect.gray_percent
        );
        assert!(
            rect.opacity >= 2.5 * opacity - 1e-12 && rect.opacity <= 3.0 * opacity + 1e-12,
            "speckle opacity {} out of range",
            rect.opacity
        );
        assert!((0.0..=98.0).contains(&rect.x));
        assert!((0.0..=98.0).contains(&rect.y));
    }
}

#[test]
fn test_tiny_drawable_area_still_emits_speckles() {
    // No room for the grain grid, but the 30 speckles are unconditional.
    let canvas = CanvasSpec {
        width: 1.0,
        height: 1.0,
        padding: 0.0,
    };
    let mut rng = StdRng::seed_from_u64(5);

    let rects = generate_paper(&canvas, 0.1, &mut rng);

    assert_eq!(rects.len(), 30);
}
