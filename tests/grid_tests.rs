// Host-side tests for the pillar grid spans.
// Rows are simulated the way CSS grid auto-placement fills them.

use constellation_core::grid::{span_class_for, DESKTOP_COLUMNS, TABLET_COLUMNS};
use constellation_core::{span_class, GridSpan, PillarId};

fn selections() -> impl Iterator<Item = Option<PillarId>> {
    std::iter::once(None).chain(PillarId::ALL.into_iter().map(Some))
}

/// Row widths produced by sequential placement into `columns`.
fn row_widths(spans: &[u8], columns: u8) -> Vec<u8> {
    let mut rows = Vec::new();
    let mut used = 0;
    for &s in spans {
        if used + s > columns {
            rows.push(used);
            used = 0;
        }
        used += s;
    }
    rows.push(used);
    rows
}

fn layout(selected: Option<PillarId>) -> Vec<GridSpan> {
    PillarId::ALL
        .iter()
        .map(|&p| span_class(p, selected))
        .collect()
}

#[test]
fn spans_fit_their_breakpoint() {
    for sel in selections() {
        for span in layout(sel) {
            assert!((1..=TABLET_COLUMNS).contains(&span.tablet));
            assert!((1..=DESKTOP_COLUMNS).contains(&span.desktop));
        }
    }
}

#[test]
fn every_layout_fills_its_rows() {
    for sel in selections() {
        let spans = layout(sel);
        let tablet: Vec<u8> = spans.iter().map(|s| s.tablet).collect();
        let desktop: Vec<u8> = spans.iter().map(|s| s.desktop).collect();
        for (widths, cols) in [(tablet, TABLET_COLUMNS), (desktop, DESKTOP_COLUMNS)] {
            let rows = row_widths(&widths, cols);
            assert!(
                rows.iter().all(|&w| w == cols),
                "selection {:?} leaves a gap at {} columns: {:?}",
                sel,
                cols,
                rows
            );
        }
    }
}

#[test]
fn selected_card_is_full_width() {
    for p in PillarId::ALL {
        assert_eq!(
            span_class(p, Some(p)),
            GridSpan {
                tablet: TABLET_COLUMNS,
                desktop: DESKTOP_COLUMNS
            }
        );
    }
}

#[test]
fn unselected_layout_widens_only_the_last_card() {
    let spans = layout(None);
    assert!(spans[..6]
        .iter()
        .all(|s| *s == GridSpan { tablet: 1, desktop: 1 }));
    assert_eq!(spans[6], GridSpan { tablet: 2, desktop: 3 });
}

#[test]
fn class_names_cover_all_breakpoints() {
    let span = GridSpan {
        tablet: 2,
        desktop: 3,
    };
    assert_eq!(span.class_names(), "col-span-1 md:col-span-2 lg:col-span-3");
}

#[test]
fn string_lookup_matches_typed_lookup() {
    let span = span_class_for("pillar3", Some("pillar3")).unwrap();
    assert_eq!(span, span_class(PillarId::Pillar3, Some(PillarId::Pillar3)));
    assert_eq!(
        span_class_for(" Pillar5 ", None).unwrap(),
        span_class(PillarId::Pillar5, None)
    );
}

#[test]
fn unknown_selection_falls_back_to_unselected() {
    assert_eq!(
        span_class_for("pillar7", Some("pillar9")).unwrap(),
        span_class(PillarId::Pillar7, None)
    );
}

#[test]
fn unknown_item_is_an_error() {
    assert!(span_class_for("pillar0", None).is_err());
    assert!(span_class_for("", Some("pillar1")).is_err());
}

#[test]
fn pillar_ids_round_trip_through_display() {
    for p in PillarId::ALL {
        assert_eq!(p.to_string().parse::<PillarId>().unwrap(), p);
    }
    assert_eq!(PillarId::Pillar4.index(), 3);
}
