use crate::model::{BarRow, LegendEntry};
use crate::svg::{Circle, Group, Rect, Text};
use crate::theme::Theme;

/// Stacked-bar section: one 40-unit-pitch row per entry, each with a label,
/// a display value, and a segmented track.
///
/// Segments are laid out cumulatively in order. Each one is drawn as a
/// fully-rounded rectangle, then squared off with a plain overlay rectangle
/// on every edge that abuts a neighbor, so the stack reads as a single
/// rounded pill no matter how many segments it has. Shares summing past 100
/// are not clamped; such rows simply overrun the track.
pub fn bar_section(rows: &[BarRow], theme: &Theme, section_padding: f64, bar_width: f64) -> Group {
    let mut section = Group::translated(0.0, section_padding);
    for (i, row) in rows.iter().enumerate() {
        let mut row_group = Group::translated(0.0, 40.0 * i as f64);
        row_group.push(Text::classed(2.0, 15.0, &row.label, "lang-name"));
        row_group.push(Text::classed(bar_width + 10.0, 33.0, &row.value, "lang-name"));

        let mut track = Group::translated(0.0, 25.0);
        track.push(Rect::rounded(0.0, 0.0, bar_width, 8.0, 5.0, &theme.track_fill));

        let last = row.segments.len().saturating_sub(1);
        let mut cumulative_percent = 0.0;
        for (j, segment) in row.segments.iter().enumerate() {
            let color = theme.resolve(&segment.color);
            // Floor keeps near-zero shares at a visible sliver width.
            let effective_percent = segment.percent.max(300.0 / bar_width);
            let segment_width = bar_width * effective_percent / 100.0;
            let segment_x = bar_width * cumulative_percent / 100.0;

            track.push(Rect::rounded(segment_x, 0.0, segment_width, 8.0, 5.0, color));

            if row.segments.len() > 1 {
                // Square off interior joints while keeping the true outer
                // corners of the whole bar rounded.
                let corner = (segment_width / 2.0).min(5.0);
                let mut overlay_width = segment_width - 2.0 * corner;
                let mut overlay_x = segment_x + corner;
                if j > 0 {
                    overlay_width += corner;
                    overlay_x -= corner;
                }
                if j < last {
                    overlay_width += corner;
                }
                track.push(Rect::new(overlay_x, 0.0, overlay_width, 8.0, color));
            }

            // The floor above affects geometry only; the running offset
            // advances by the nominal share.
            cumulative_percent += segment.percent;
        }

        row_group.push(track);
        section.push(row_group);
    }
    section
}

/// Legend grid: circle swatch plus label per entry, filled row-major into
/// `columns` columns of fixed 260/columns width. Long labels are not
/// measured and may run into the next column.
pub fn legend_section(
    entries: &[LegendEntry],
    theme: &Theme,
    columns: usize,
    section_padding: f64,
) -> Group {
    let mut section = Group::translated(0.0, section_padding);
    let cell_width = 260.0 / columns as f64;
    for (i, entry) in entries.iter().enumerate() {
        let mut cell = Group::translated(
            cell_width * (i % columns) as f64,
            20.0 * (i / columns) as f64,
        );
        cell.push(Circle {
            cx: 5.0,
            cy: 5.0,
            r: 5.0,
            fill: theme.resolve(&entry.color).to_string(),
        });
        cell.push(Text::classed(14.0, 9.0, &entry.label, "lang-name"));
        section.push(cell);
    }
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Segment;
    use crate::svg::Node;

    fn row(segments: Vec<Segment>) -> BarRow {
        BarRow {
            label: "Python".to_string(),
            value: "~3.4k lines".to_string(),
            segments,
        }
    }

    fn segment(percent: f64, color: &str) -> Segment {
        Segment {
            percent,
            color: Some(color.to_string()),
        }
    }

    fn track_rects(section: &Group) -> Vec<&Rect> {
        let Some(Node::Group(row_group)) = section.nodes.first() else {
            panic!("missing row group");
        };
        let Some(Node::Group(track)) = row_group.nodes.get(2) else {
            panic!("missing track group");
        };
        track
            .nodes
            .iter()
            .map(|node| match node {
                Node::Rect(rect) => rect,
                other => panic!("unexpected track node: {other:?}"),
            })
            .collect()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn section_and_row_offsets() {
        let rows = vec![row(vec![segment(100.0, "#3572a5")]); 3];
        let section = bar_section(&rows, &Theme::card_default(), 45.0, 210.0);
        assert_eq!((section.tx, section.ty), (0.0, 45.0));
        let offsets: Vec<f64> = section
            .nodes
            .iter()
            .map(|node| match node {
                Node::Group(group) => group.ty,
                other => panic!("unexpected section node: {other:?}"),
            })
            .collect();
        assert_eq!(offsets, vec![0.0, 40.0, 80.0]);
    }

    #[test]
    fn row_labels_and_track_placement() {
        let rows = vec![row(vec![segment(100.0, "#3572a5")])];
        let section = bar_section(&rows, &Theme::card_default(), 45.0, 210.0);
        let Some(Node::Group(row_group)) = section.nodes.first() else {
            panic!("missing row group");
        };
        let Node::Text(label) = &row_group.nodes[0] else {
            panic!("missing label");
        };
        assert_eq!((label.x, label.y), (2.0, 15.0));
        assert_eq!(label.class.as_deref(), Some("lang-name"));
        let Node::Text(value) = &row_group.nodes[1] else {
            panic!("missing value");
        };
        assert_eq!((value.x, value.y), (220.0, 33.0));
        let Node::Group(track) = &row_group.nodes[2] else {
            panic!("missing track");
        };
        assert_eq!((track.tx, track.ty), (0.0, 25.0));
    }

    #[test]
    fn single_full_segment_spans_track_with_rounded_ends() {
        let rows = vec![row(vec![segment(100.0, "#3572a5")])];
        let section = bar_section(&rows, &Theme::card_default(), 45.0, 210.0);
        let rects = track_rects(&section);
        // Track background plus one segment, no squaring overlay.
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].fill, "#ddd");
        assert_close(rects[1].x, 0.0);
        assert_close(rects[1].width, 210.0);
        assert_eq!(rects[1].rx, Some(5.0));
        assert_eq!(rects[1].ry, Some(5.0));
    }

    #[test]
    fn even_split_squares_only_the_shared_joint() {
        let rows = vec![row(vec![segment(50.0, "#3572a5"), segment(50.0, "#f1e05a")])];
        let section = bar_section(&rows, &Theme::card_default(), 45.0, 210.0);
        let rects = track_rects(&section);
        assert_eq!(rects.len(), 5);

        let (first, first_overlay) = (rects[1], rects[2]);
        assert_close(first.x, 0.0);
        assert_close(first.width, 105.0);
        // Overlay reaches the joint at 105 but leaves the left corner round.
        assert_close(first_overlay.x, 5.0);
        assert_close(first_overlay.width, 100.0);
        assert_eq!(first_overlay.rx, None);

        let (second, second_overlay) = (rects[3], rects[4]);
        assert_close(second.x, 105.0);
        assert_close(second.width, 105.0);
        // Overlay starts at the joint and leaves the right corner round.
        assert_close(second_overlay.x, 105.0);
        assert_close(second_overlay.width, 100.0);
    }

    #[test]
    fn tiny_segment_is_floored_but_advances_nominally() {
        let rows = vec![row(vec![
            Segment {
                percent: 0.1,
                color: None,
            },
            segment(50.0, "#f1e05a"),
        ])];
        let section = bar_section(&rows, &Theme::card_default(), 45.0, 210.0);
        let rects = track_rects(&section);

        // Floored to 300/210 percent of the track, i.e. 3 pixels.
        assert_close(rects[1].width, 3.0);
        assert_eq!(rects[1].fill, "#858585");

        // The next segment starts at the nominal 0.1%, not the floored share.
        assert_close(rects[3].x, 210.0 * 0.1 / 100.0);
    }

    #[test]
    fn overflowing_shares_overrun_the_track() {
        let rows = vec![row(vec![segment(80.0, "#3572a5"), segment(80.0, "#f1e05a")])];
        let section = bar_section(&rows, &Theme::card_default(), 45.0, 210.0);
        let rects = track_rects(&section);
        assert_close(rects[3].x, 168.0);
        assert!(rects[3].x + rects[3].width > 210.0);
    }

    #[test]
    fn builders_are_pure() {
        let rows = vec![row(vec![segment(60.0, "#3572a5"), segment(40.0, "#f1e05a")])];
        let theme = Theme::card_default();
        assert_eq!(
            bar_section(&rows, &theme, 45.0, 210.0),
            bar_section(&rows, &theme, 45.0, 210.0)
        );

        let entries = vec![
            LegendEntry {
                label: "Python".to_string(),
                color: Some("#3572a5".to_string()),
            };
            5
        ];
        assert_eq!(
            legend_section(&entries, &theme, 2, 80.0),
            legend_section(&entries, &theme, 2, 80.0)
        );
    }

    #[test]
    fn legend_grid_positions() {
        let entries: Vec<LegendEntry> = ["Python", "TypeScript", "Rust", "Go"]
            .iter()
            .map(|label| LegendEntry {
                label: label.to_string(),
                color: None,
            })
            .collect();
        let section = legend_section(&entries, &Theme::card_default(), 2, 80.0);
        assert_eq!((section.tx, section.ty), (0.0, 80.0));

        let cells: Vec<(f64, f64)> = section
            .nodes
            .iter()
            .map(|node| match node {
                Node::Group(group) => (group.tx, group.ty),
                other => panic!("unexpected legend node: {other:?}"),
            })
            .collect();
        assert_eq!(
            cells,
            vec![(0.0, 0.0), (130.0, 0.0), (0.0, 20.0), (130.0, 20.0)]
        );
    }

    #[test]
    fn legend_cells_hold_swatch_and_label() {
        let entries = vec![LegendEntry {
            label: "Rust".to_string(),
            color: Some("#dea584".to_string()),
        }];
        let section = legend_section(&entries, &Theme::card_default(), 2, 80.0);
        let Some(Node::Group(cell)) = section.nodes.first() else {
            panic!("missing cell");
        };
        let Node::Circle(swatch) = &cell.nodes[0] else {
            panic!("missing swatch");
        };
        assert_eq!((swatch.cx, swatch.cy, swatch.r), (5.0, 5.0, 5.0));
        assert_eq!(swatch.fill, "#dea584");
        let Node::Text(label) = &cell.nodes[1] else {
            panic!("missing label");
        };
        assert_eq!((label.x, label.y), (14.0, 9.0));
        assert_eq!(label.content, "Rust");
    }
}
