//! Integration tests for the plot composer and interactive sessions.

use rstest::rstest;

use termlot::{Encoding, Limits, Plot, PlotError, Session, Size, Styler};

fn plot(width: u16, height: u16) -> Plot {
    let mut p = Plot::new()
        .with_styler(Styler::plain())
        .with_terminal_size(120, 40);
    p.set_width(Size::Cells(width)).set_height(Size::Cells(height));
    p
}

// ==================== Layout Tests ====================

#[rstest]
#[case(Encoding::Braille)]
#[case(Encoding::Dot)]
#[case(Encoding::Density)]
#[case(Encoding::Ascii)]
fn test_frame_is_rectangular(#[case] encoding: Encoding) {
    let mut p = plot(30, 10);
    p.set_encoding(encoding);
    p.add_y(&[1.0, 3.0, 2.0], "").unwrap();
    let lines = p.lines().unwrap();

    assert_eq!(lines.len(), 10);
    // canvas is 30 - 1 (tick width) - 2 (borders) wide
    assert_eq!(lines[0].chars().count(), 27 + 2);
    for line in &lines[1..8] {
        assert_eq!(line.chars().count(), 27 + 2 + 1, "{line:?}");
    }
    assert_eq!(lines[8].chars().count(), 27 + 2);
}

#[test]
fn test_series_reaches_both_edges() {
    let mut p = plot(24, 8);
    p.set_encoding(Encoding::Dot);
    p.add(&[0.0, 1.0], &[0.0, 1.0], "").unwrap();
    let lines = p.lines().unwrap();
    let body = &lines[1..6];
    // top-right and bottom-left cells of the canvas
    let inner = |line: &str| line.chars().skip(1).take(21).collect::<Vec<char>>();
    assert_ne!(*inner(&body[0]).last().unwrap(), ' ');
    assert_ne!(inner(&body[4])[0], ' ');
}

#[test]
fn test_constant_series_widens_limits() {
    let mut p = plot(20, 8);
    p.add_y(&[2.0, 2.0, 2.0], "").unwrap();
    assert_eq!(p.ylimits().unwrap(), (1.0, 3.0));
    let lines = p.lines().unwrap();
    assert!(lines[1].ends_with('3'));
    assert!(lines[5].ends_with('1'));
}

#[test]
fn test_fixed_limits_clip_data() {
    let mut p = plot(20, 8);
    p.add(&[0.0, 10.0], &[-5.0, 5.0], "").unwrap();
    p.set_xlimits(Limits::fixed(2.0, 4.0).unwrap());
    p.set_ylimits(Limits::fixed(0.0, 1.0).unwrap());
    let lines = p.lines().unwrap();
    assert_eq!(lines.len(), 8);
    assert!(lines[7].starts_with(" 2"));
    assert!(lines[7].ends_with('4'));
}

#[test]
fn test_fixed_limits_with_distant_data() {
    let mut p = plot(20, 8);
    p.set_xlimits(Limits::fixed(0.0, 1.0).unwrap());
    p.add(&[0.0, 1e300], &[0.0, 1.0], "").unwrap();
    let lines = p.lines().unwrap();
    assert_eq!(lines.len(), 8);
    // only the start of the segment is on the canvas, at the bottom-left
    assert_ne!(lines[5].chars().nth(1), Some('\u{2800}'));
    assert!(lines[1..5]
        .iter()
        .all(|l| l.chars().skip(1).take(17).all(|c| c == '\u{2800}')));
}

#[test]
fn test_points_style_only_marks_data() {
    let mut p = plot(40, 8);
    p.set_encoding(Encoding::Ascii);
    p.add(&[0.0, 1.0], &[0.0, 1.0], "x").unwrap();
    let marked: usize = p
        .lines()
        .unwrap()
        .iter()
        .skip(1)
        .take(5)
        .map(|l| l.chars().skip(1).take(37).filter(|c| *c != ' ').count())
        .sum();
    assert_eq!(marked, 2);
}

#[test]
fn test_option_errors() {
    let mut p = plot(20, 8);
    assert!(matches!(p.add_y(&[1.0], "--"), Err(PlotError::RepeatedStyle(_))));
    assert!(matches!(p.add_y(&[1.0], "rg"), Err(PlotError::RepeatedColor(_))));
    assert!(matches!(p.add_y(&[1.0], "q"), Err(PlotError::InvalidOption('q'))));
    assert!(p.series().is_empty());
}

// ==================== Session Tests ====================

#[test]
fn test_session_hold_and_reset() {
    let base = plot(40, 12);
    let mut session = Session::with_base(Vec::new(), base);

    session.plot(None, &[0.0, 1.0, 0.0], "r").unwrap();
    session.hold(true);
    session.plot(Some(&[0.0, 2.0]), &[1.0, 0.0], "b:").unwrap();
    let plot = session.current_plot().unwrap();
    assert_eq!(plot.series().len(), 2);
    assert_eq!(plot.xlimits().unwrap(), (0.0, 2.0));

    session.set_legend(vec![Some("up".into()), Some("down".into())]).unwrap();
    session.reset();
    assert!(session.current_plot().is_none());

    let out = String::from_utf8(session.into_inner()).unwrap();
    // three full draws of 12 lines each
    assert_eq!(out.lines().count(), 36);
    assert!(out.contains(" down"));
}
