//! Three-column frame rendering.
//!
//! Fixed geometry for a 250×122 panel: a header row with the station title
//! and a right-aligned clock, a rule under the header, two vertical rules,
//! and three columns whose body lines pack upward when metrics are absent.

use chrono::{DateTime, Local};
use embedded_graphics::mono_font::iso_8859_1::{FONT_5X8, FONT_6X10};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};
use inkmon_panel::{Frame, PanelSpec};

use crate::collect::Snapshot;

/// Left edge of each column.
const COLUMN_X: [i32; 3] = [2, 85, 168];
/// Vertical rules separating the columns.
const SEPARATOR_X: [i32; 2] = [82, 165];
/// Top of the header text.
const HEADER_Y: i32 = 1;
/// Horizontal rule under the header.
const HEADER_RULE_Y: i32 = 11;
/// Vertical rules start just below the header rule.
const SEPARATOR_TOP_Y: i32 = 12;
/// First column row (the title).
const COLUMN_TOP_Y: i32 = 14;
/// Vertical space a column title occupies.
const TITLE_ADVANCE: i32 = 11;
/// Line pitch of body text.
const LINE_ADVANCE: i32 = 9;
/// Margin kept from the left and right canvas edges.
const EDGE_MARGIN: i32 = 2;

/// Draw the full dashboard onto any monochrome target.
///
/// Pure given its inputs: the same snapshot and timestamp draw the same
/// pixels. A sparse or empty snapshot is valid and renders just the chrome.
// SAFETY: panel dimensions and measured text widths are far below i32::MAX,
// and the y cursor advances at most once per body line; no cast can wrap
// and no addition can overflow.
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
pub fn render<D>(
    target: &mut D,
    header: &str,
    snapshot: &Snapshot,
    now: DateTime<Local>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let heading_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    let body_style = MonoTextStyle::new(&FONT_5X8, BinaryColor::On);
    let rule_style = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

    target.clear(BinaryColor::Off)?;

    let size = target.bounding_box().size;
    let width = size.width as i32;
    let height = size.height as i32;

    // Header: station title left, clock right-aligned to its measured width
    // so it never runs off the canvas edge.
    Text::with_baseline(
        header,
        Point::new(EDGE_MARGIN, HEADER_Y),
        heading_style,
        Baseline::Top,
    )
    .draw(target)?;

    let clock = now.format("%H:%M %b %d").to_string();
    let clock_width = heading_style
        .measure_string(&clock, Point::zero(), Baseline::Top)
        .bounding_box
        .size
        .width as i32;
    Text::with_baseline(
        &clock,
        Point::new(width - clock_width - EDGE_MARGIN, HEADER_Y),
        heading_style,
        Baseline::Top,
    )
    .draw(target)?;

    Line::new(
        Point::new(0, HEADER_RULE_Y),
        Point::new(width - 1, HEADER_RULE_Y),
    )
    .into_styled(rule_style)
    .draw(target)?;

    for x in SEPARATOR_X {
        Line::new(Point::new(x, SEPARATOR_TOP_Y), Point::new(x, height - 1))
            .into_styled(rule_style)
            .draw(target)?;
    }

    // Columns: title, then the present lines packed under it. Absent lines
    // were already dropped from the snapshot, so rows close up naturally.
    for (column, x) in snapshot.columns.iter().zip(COLUMN_X) {
        let mut y = COLUMN_TOP_Y;
        Text::with_baseline(&column.title, Point::new(x, y), heading_style, Baseline::Top)
            .draw(target)?;
        y += TITLE_ADVANCE;
        for line in &column.lines {
            Text::with_baseline(line, Point::new(x, y), body_style, Baseline::Top)
                .draw(target)?;
            y += LINE_ADVANCE;
        }
    }

    Ok(())
}

/// Render into an owned frame sized for `spec`.
pub fn render_frame(
    spec: &PanelSpec,
    header: &str,
    snapshot: &Snapshot,
    now: DateTime<Local>,
) -> Frame {
    let mut frame = Frame::new(spec.width, spec.height);
    match render(&mut frame, header, snapshot, now) {
        Ok(()) => frame,
        Err(never) => match never {},
    }
}
