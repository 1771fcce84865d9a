/*
 * ruler
 *
 * Copyright 2022 - Manos Pitsidianakis
 *
 * This file is part of ruler.
 *
 * ruler is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * ruler is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with ruler. If not, see <http://www.gnu.org/licenses/>.
 */

use ::ruler::prelude::*;
use ::ruler::ruler::layout::{visible_indices, Layout};

fn recorded(
    options: RulerOptions,
    (width, height): (f64, f64),
    scroll_pos: f64,
) -> Vec<Primitive> {
    let mut ruler = Ruler::new(options, RecordingHost::new(width, height));
    ruler.scroll(scroll_pos);
    ruler.resize();
    ruler.host_mut().take_primitives()
}

fn label_texts(prims: &[Primitive]) -> Vec<String> {
    prims
        .iter()
        .filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_redraw_is_identical() {
    let options = RulerOptions {
        range: [-120.0, 480.0].into(),
        range_background_color: Color::BLUE,
        text_background_color: Color::RED,
        ..RulerOptions::default()
    };
    let mut ruler = Ruler::new(options, RecordingHost::new(640.0, 30.0));
    ruler.scroll(-37.5);
    ruler.resize();
    let first = ruler.host_mut().take_primitives();
    ruler.scroll(-37.5);
    let second = ruler.host_mut().take_primitives();
    assert!(!first.is_empty());
    assert_eq!(first, second);

    ruler.scroll(12.0);
    assert_ne!(ruler.host_mut().take_primitives(), first);
}

#[test]
fn test_visible_index_range_and_tiers() {
    assert_eq!(visible_indices(0.0, 1.0, 50.0, 500.0), Some(0..=10));

    let options = RulerOptions::default();
    let layout = Layout::new(&options, Viewport::new(500.0, 30.0, 0.0));
    let ticks = layout.ticks();
    let first: Vec<(u32, TickTier)> = ticks
        .iter()
        .filter(|t| t.index == 0)
        .take(3)
        .map(|t| (t.segment, t.tier))
        .collect();
    assert_eq!(
        first,
        &[(0, TickTier::Main), (1, TickTier::Short), (2, TickTier::Long)]
    );
    assert_eq!(ticks[0].length, 30.0);
    assert_eq!(ticks[1].length, 7.0);
    assert_eq!(ticks[2].length, 10.0);
    // 0, 5, .., 495
    assert_eq!(ticks.len(), 100);
}

#[test]
fn test_no_negative_values() {
    let options = RulerOptions {
        negative_ruler: false,
        ..RulerOptions::default()
    };
    let layout = Layout::new(&options, Viewport::new(500.0, 30.0, -200.0));
    let ticks = layout.ticks();
    assert!(!ticks.is_empty());
    assert!(ticks.iter().all(|t| t.value >= 0.0));
    assert_eq!(ticks[0].value, 0.0);
    assert_eq!(ticks[0].pos, 200.0);
    assert!(layout.labels().iter().all(|l| l.value >= 0.0));

    let texts = label_texts(&recorded(options, (500.0, 30.0), -200.0));
    assert_eq!(texts.first().map(String::as_str), Some("0"));
    assert!(texts.iter().all(|t| !t.starts_with('-')));
}

#[test]
fn test_range_clips_ticks_and_labels() {
    let options = RulerOptions {
        range: [0.0, 100.0].into(),
        ..RulerOptions::default()
    };
    let layout = Layout::new(&options, Viewport::new(500.0, 30.0, 0.0));
    let values: Vec<f64> = layout.ticks().iter().map(|t| t.value).collect();
    assert!(values.contains(&50.0));
    assert!(values.contains(&100.0));
    assert!(!values.contains(&150.0));
    assert!(!values.contains(&105.0));
    let labels: Vec<f64> = layout.labels().iter().map(|l| l.value).collect();
    assert_eq!(labels, &[0.0, 50.0, 100.0]);
}

#[test]
fn test_positions_follow_values() {
    let options = RulerOptions {
        zoom: 2.5,
        unit: 20.0,
        segment: 4,
        ..RulerOptions::default()
    };
    let scroll_pos = 13.0;
    let layout = Layout::new(&options, Viewport::new(400.0, 30.0, scroll_pos));
    let ticks = layout.ticks();
    assert!(ticks.len() > 2);
    for tick in &ticks {
        assert!((tick.pos - (tick.value - scroll_pos) * 2.5).abs() < 1e-9);
        assert!(tick.pos >= 0.0 && tick.pos < 400.0);
    }
    assert!(ticks.windows(2).all(|w| w[0].value < w[1].value && w[0].pos < w[1].pos));
}

#[test]
fn test_text_format() {
    let texts = label_texts(&recorded(RulerOptions::default(), (200.0, 30.0), 0.0));
    assert_eq!(texts, &["0", "50", "100", "150", "200"]);

    let options = RulerOptions {
        text_format: Some(TextFormat::new(|v| format!("{v} mm"))),
        ..RulerOptions::default()
    };
    let texts = label_texts(&recorded(options, (200.0, 30.0), 0.0));
    assert_eq!(texts[..3], ["0 mm", "50 mm", "100 mm"]);

    let options = RulerOptions {
        text_format: Some(TextFormat::new(|_| String::new())),
        ..RulerOptions::default()
    };
    let texts = label_texts(&recorded(options, (200.0, 30.0), 0.0));
    assert!(texts.iter().all(String::is_empty));
}

#[test]
fn test_vertical_labels_are_rotated() {
    let options = RulerOptions {
        orientation: Orientation::Vertical,
        ..RulerOptions::default()
    };
    let prims = recorded(options, (30.0, 300.0), 0.0);
    let mut labels = 0;
    for p in &prims {
        if let Primitive::Text {
            text,
            bounds,
            rotation,
            ..
        } = p
        {
            labels += 1;
            let width =
                text.chars().count() as f64 * 10.0 * ::ruler::paint::recording::DEFAULT_ADVANCE_RATIO;
            assert!((rotation + std::f64::consts::FRAC_PI_2).abs() < 1e-9);
            assert!((bounds.height.abs() - width * BACKING_SCALE).abs() < 1e-9);
            assert!((bounds.width.abs() - 10.0 * BACKING_SCALE).abs() < 1e-9);
        }
    }
    assert!(labels > 0);

    let Some(Primitive::Stroke { segments, .. }) = prims
        .iter()
        .find(|p| matches!(p, Primitive::Stroke { .. }))
    else {
        panic!("no tick stroke in {prims:?}");
    };
    // Vertical ticks run across the ruler.
    assert!(segments.iter().all(|(a, b)| a.y == b.y));
}

#[test]
fn test_range_highlight_needs_both_ends() {
    let highlights = |range: ValueRange| {
        let options = RulerOptions {
            range,
            range_background_color: Color::GREEN,
            ..RulerOptions::default()
        };
        recorded(options, (300.0, 30.0), 0.0)
            .into_iter()
            .filter(|p| matches!(p, Primitive::FillRect { color, .. } if *color == Color::GREEN))
            .count()
    };
    assert_eq!(highlights(ValueRange::UNBOUNDED), 0);
    assert_eq!(highlights(ValueRange::new(0.0, f64::INFINITY)), 0);
    assert_eq!(highlights(ValueRange::new(f64::NEG_INFINITY, 10.0)), 0);
    assert_eq!(highlights(ValueRange::new(10.0, 60.0)), 1);
}

#[test]
fn test_degenerate_zoom() {
    for zoom in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let options = RulerOptions {
            zoom,
            ..RulerOptions::default()
        };
        let layout = Layout::new(&options, Viewport::new(300.0, 30.0, 0.0));
        assert!(layout.ticks().is_empty(), "zoom {zoom}");
        assert!(layout.labels().is_empty(), "zoom {zoom}");
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Background rectangles drawn behind labels, with the text that follows each.
fn label_backgrounds(prims: &[Primitive], color: Color) -> Vec<(Rect, String)> {
    prims
        .windows(2)
        .filter_map(|w| match w {
            [Primitive::FillRect { rect, color: c }, Primitive::Text { text, .. }] if *c == color => {
                Some((*rect, text.clone()))
            }
            _ => None,
        })
        .collect()
}

#[test]
fn test_horizontal_text_background() {
    // Label "50" is 12px wide; the device space is scaled by 2 and shifted by
    // half a pixel.
    for (text_align, x) in [
        (TextAlign::Left, (53.0 + 0.5) * 2.0),
        (TextAlign::Center, (50.0 - 6.0 + 0.5) * 2.0),
        (TextAlign::Right, (47.0 - 12.0 + 0.5) * 2.0),
    ] {
        let options = RulerOptions {
            text_align,
            text_background_color: Color::RED,
            ..RulerOptions::default()
        };
        let backgrounds = label_backgrounds(&recorded(options, (300.0, 30.0), 0.0), Color::RED);
        assert_eq!(backgrounds.len(), 7, "{text_align:?}");
        let (rect, _) = backgrounds
            .iter()
            .find(|(_, text)| text == "50")
            .expect("no background behind 50");
        assert!(close(rect.x, x), "{text_align:?}: {rect:?}");
        assert!(close(rect.y, 0.0));
        assert!(close(rect.width, 12.0 * BACKING_SCALE));
        assert!(close(rect.height, 30.0 * BACKING_SCALE));
    }
}

#[test]
fn test_vertical_text_background() {
    let options = RulerOptions {
        orientation: Orientation::Vertical,
        text_background_color: Color::RED,
        main_line_size: LineSize::Percent(50.0),
        ..RulerOptions::default()
    };
    let backgrounds = label_backgrounds(&recorded(options, (30.0, 300.0), 0.0), Color::RED);
    let (rect, _) = backgrounds
        .iter()
        .find(|(_, text)| text == "50")
        .expect("no background behind 50");
    // Rotated about (0, anchor.y) with anchor.y = 50 - 3: `mainLineSize`
    // across the ruler, the text width along it, ending at the anchor.
    let rect = rect.normalized();
    assert!(close(rect.width, 15.0 * BACKING_SCALE), "{rect:?}");
    assert!(close(rect.height, 12.0 * BACKING_SCALE), "{rect:?}");
    assert!(close(rect.x, 0.5 * BACKING_SCALE), "{rect:?}");
    assert!(close(rect.y, (47.0 - 12.0) * BACKING_SCALE), "{rect:?}");
}

#[test]
fn test_text_offset_moves_labels() {
    let viewport = Viewport::new(300.0, 30.0, 0.0);
    let plain = RulerOptions::default();
    let shifted = RulerOptions {
        text_offset: [4.0, -2.0],
        ..RulerOptions::default()
    };
    let before = Layout::new(&plain, viewport).labels();
    let after = Layout::new(&shifted, viewport).labels();
    assert_eq!(before.len(), after.len());
    for (a, b) in before.iter().zip(&after) {
        assert_eq!(b.anchor, a.anchor + Point::new(4.0, -2.0));
        assert_eq!(b.pos, a.pos);
    }

    let anchors = |options: RulerOptions| -> Vec<Point> {
        recorded(options, (300.0, 30.0), 0.0)
            .into_iter()
            .filter_map(|p| match p {
                Primitive::Text { anchor, .. } => Some(anchor),
                _ => None,
            })
            .collect()
    };
    for (a, b) in anchors(plain).into_iter().zip(anchors(shifted)) {
        assert!(close(b.x - a.x, 4.0 * BACKING_SCALE));
        assert!(close(b.y - a.y, -2.0 * BACKING_SCALE));
    }
}

#[test]
fn test_center_direction_labels() {
    let options = RulerOptions {
        direction: Direction::Center,
        ..RulerOptions::default()
    };
    let labels = Layout::new(&options, Viewport::new(300.0, 30.0, 0.0)).labels();
    assert!(!labels.is_empty());
    assert!(labels.iter().all(|l| l.anchor.y == 15.0));

    let options = RulerOptions {
        orientation: Orientation::Vertical,
        direction: Direction::Center,
        ..RulerOptions::default()
    };
    let labels = Layout::new(&options, Viewport::new(40.0, 300.0, 0.0)).labels();
    assert!(labels.iter().all(|l| l.anchor.x == 20.0));
}
