//! Activity page - layout model
//!
//! Pure description of what an auth-gated trip page renders, top to bottom.
//! The component in `view.rs` maps every block onto a widget; nothing here
//! touches the reactive runtime, so the layout can be checked in plain tests.

use contracts::domain::a001_activity::aggregate::{ActivityCategory, ActivityEntry};
use contracts::domain::a002_trip::aggregate::TripId;

use crate::routes::routes::HOME_PATH;
use crate::system::auth::guard::ViewState;

/// Columns in one grid row
pub const GRID_COLUMNS: u8 = 12;
/// Cards laid out per row
pub const CARDS_PER_ROW: u8 = 3;
/// Columns taken by one card
pub const CARD_SPAN: u8 = GRID_COLUMNS / CARDS_PER_ROW;
/// Spacers between the delete control and the footer
pub const TRAILING_SPACERS: usize = 5;

pub const PAGE_TITLE: &str = "Demo Page";
pub const HOME_LINK_LABEL: &str = "Goto Homepage";

pub const DEMO_TRIP_ID: TripId = TripId(1);
pub const DEMO_IMAGE: &str = "/assets/sakura.svg";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpacerSize {
    Xl,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// One grid cell holding one card
#[derive(Clone, Debug, PartialEq)]
pub struct CardSlot {
    pub span: u8,
    pub entry: ActivityEntry,
}

/// Region shown only to authenticated users
#[derive(Clone, Debug, PartialEq)]
pub struct ContentSection {
    pub title: &'static str,
    pub home_link: NavLink,
    pub cards: Vec<CardSlot>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageBlock {
    Header { show_search_bar: bool },
    Content(ContentSection),
    RequireLogin,
    DeleteButton { trip_id: TripId },
    Spacer(SpacerSize),
    Footer,
}

impl PageBlock {
    /// The one block that depends on the auth state
    pub fn is_branch(&self) -> bool {
        matches!(self, PageBlock::Content(_) | PageBlock::RequireLogin)
    }
}

/// Ordered blocks of one render pass
#[derive(Clone, Debug, PartialEq)]
pub struct PageLayout {
    pub blocks: Vec<PageBlock>,
}

/// Cards keep input order; nothing is sorted or filtered.
pub fn compose_content(entries: &[ActivityEntry]) -> ContentSection {
    ContentSection {
        title: PAGE_TITLE,
        home_link: NavLink {
            href: HOME_PATH,
            label: HOME_LINK_LABEL,
        },
        cards: entries
            .iter()
            .cloned()
            .map(|entry| CardSlot {
                span: CARD_SPAN,
                entry,
            })
            .collect(),
    }
}

/// Block shown between the header and the delete control for `state`
pub fn compose_branch(state: ViewState, entries: &[ActivityEntry]) -> PageBlock {
    match state {
        ViewState::Authenticated => PageBlock::Content(compose_content(entries)),
        ViewState::Unauthenticated => PageBlock::RequireLogin,
    }
}

pub fn compose_page(state: ViewState, entries: &[ActivityEntry], trip_id: TripId) -> PageLayout {
    let mut blocks = Vec::with_capacity(4 + TRAILING_SPACERS);

    blocks.push(PageBlock::Header {
        show_search_bar: true,
    });
    blocks.push(compose_branch(state, entries));
    blocks.push(PageBlock::DeleteButton { trip_id });
    blocks.extend(std::iter::repeat(PageBlock::Spacer(SpacerSize::Xl)).take(TRAILING_SPACERS));
    blocks.push(PageBlock::Footer);

    PageLayout { blocks }
}

/// Activities shown on the demo trip
pub fn demo_activities() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry::new(1, "Disney", ActivityCategory::spot(), 2.8, "Japan", DEMO_IMAGE),
        ActivityEntry::new(2, "eating ramen", ActivityCategory::restaurant(), 4.0, "Japan", DEMO_IMAGE),
        ActivityEntry::new(3, "eating takotaki", ActivityCategory::restaurant(), 4.5, "Japan", DEMO_IMAGE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(layout: &PageLayout) -> Vec<&ActivityEntry> {
        layout
            .blocks
            .iter()
            .filter_map(|b| match b {
                PageBlock::Content(c) => Some(c),
                _ => None,
            })
            .flat_map(|c| c.cards.iter().map(|slot| &slot.entry))
            .collect()
    }

    fn count(layout: &PageLayout, pred: impl Fn(&PageBlock) -> bool) -> usize {
        layout.blocks.iter().filter(|b| pred(b)).count()
    }

    fn spacers() -> Vec<PageBlock> {
        vec![PageBlock::Spacer(SpacerSize::Xl); TRAILING_SPACERS]
    }

    #[test]
    fn test_three_cards_fill_one_row() {
        assert_eq!(CARD_SPAN, 4);
        assert_eq!(CARD_SPAN * CARDS_PER_ROW, GRID_COLUMNS);
    }

    #[test]
    fn test_unauthenticated_page() {
        let layout = compose_page(ViewState::Unauthenticated, &demo_activities(), TripId(1));

        let mut expected = vec![
            PageBlock::Header { show_search_bar: true },
            PageBlock::RequireLogin,
            PageBlock::DeleteButton { trip_id: TripId(1) },
        ];
        expected.extend(spacers());
        expected.push(PageBlock::Footer);

        assert_eq!(layout.blocks, expected);
        assert!(cards(&layout).is_empty());
    }

    #[test]
    fn test_authenticated_demo_page() {
        let layout = compose_page(ViewState::Authenticated, &demo_activities(), DEMO_TRIP_ID);

        let content = compose_content(&demo_activities());
        let mut expected = vec![
            PageBlock::Header { show_search_bar: true },
            PageBlock::Content(content),
            PageBlock::DeleteButton { trip_id: TripId(1) },
        ];
        expected.extend(spacers());
        expected.push(PageBlock::Footer);
        assert_eq!(layout.blocks, expected);

        let names: Vec<&str> = cards(&layout).iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Disney", "eating ramen", "eating takotaki"]);

        let first = cards(&layout)[0].clone();
        assert_eq!(first.id.value(), 1);
        assert_eq!(first.category.as_str(), "spot");
        assert_eq!(first.rating, 2.8);
        assert_eq!(first.country, "Japan");
        assert_eq!(count(&layout, |b| matches!(b, PageBlock::RequireLogin)), 0);
    }

    #[test]
    fn test_content_carries_title_and_home_link() {
        let content = compose_content(&[]);

        assert_eq!(content.title, "Demo Page");
        assert_eq!(content.home_link, NavLink { href: "/", label: "Goto Homepage" });
    }

    #[test]
    fn test_empty_entries_render_no_cards() {
        let layout = compose_page(ViewState::Authenticated, &[], TripId(1));

        assert!(cards(&layout).is_empty());
        assert_eq!(count(&layout, |b| matches!(b, PageBlock::Content(_))), 1);
    }

    #[test]
    fn test_entries_are_neither_sorted_nor_changed() {
        let entries = vec![
            ActivityEntry::new(30, "zoo", ActivityCategory::new("park"), 7.5, "Peru", "z.png"),
            ActivityEntry::new(10, "bakery", ActivityCategory::restaurant(), -1.0, "France", "b.png"),
            ActivityEntry::new(20, "museum", ActivityCategory::spot(), 3.3, "Chile", "m.png"),
            ActivityEntry::new(40, "aquarium", ActivityCategory::spot(), 0.0, "Japan", "a.png"),
        ];
        let layout = compose_page(ViewState::Authenticated, &entries, TripId(9));

        let shown: Vec<ActivityEntry> = cards(&layout).into_iter().cloned().collect();
        assert_eq!(shown, entries);

        let spans: Vec<u8> = match &layout.blocks[1] {
            PageBlock::Content(c) => c.cards.iter().map(|s| s.span).collect(),
            other => panic!("expected content, got {:?}", other),
        };
        assert_eq!(spans, vec![CARD_SPAN; 4]);
    }

    #[test]
    fn test_delete_button_gets_trip_id_in_both_states() {
        for state in [ViewState::Authenticated, ViewState::Unauthenticated] {
            let layout = compose_page(state, &demo_activities(), TripId(77));
            let ids: Vec<TripId> = layout
                .blocks
                .iter()
                .filter_map(|b| match b {
                    PageBlock::DeleteButton { trip_id } => Some(*trip_id),
                    _ => None,
                })
                .collect();

            assert_eq!(ids, vec![TripId(77)]);
        }
    }

    #[test]
    fn test_header_first_and_footer_last_once() {
        for state in [ViewState::Authenticated, ViewState::Unauthenticated] {
            let layout = compose_page(state, &demo_activities(), DEMO_TRIP_ID);

            assert_eq!(count(&layout, |b| matches!(b, PageBlock::Header { .. })), 1);
            assert_eq!(count(&layout, |b| matches!(b, PageBlock::Footer)), 1);
            assert_eq!(layout.blocks.first(), Some(&PageBlock::Header { show_search_bar: true }));
            assert_eq!(layout.blocks.last(), Some(&PageBlock::Footer));
        }
    }

    #[test]
    fn test_token_drives_branch() {
        let entries = demo_activities();
        let with_token = compose_page(ViewState::from_token(Some("abc")), &entries, DEMO_TRIP_ID);
        let without = compose_page(ViewState::from_token(None), &entries, DEMO_TRIP_ID);

        assert_eq!(cards(&with_token).len(), 3);
        assert_eq!(count(&with_token, |b| matches!(b, PageBlock::RequireLogin)), 0);
        assert!(cards(&without).is_empty());
        assert_eq!(count(&without, |b| matches!(b, PageBlock::RequireLogin)), 1);
    }

    #[test]
    fn test_only_branch_block_differs_between_states() {
        let entries = demo_activities();
        let signed_in = compose_page(ViewState::Authenticated, &entries, DEMO_TRIP_ID);
        let signed_out = compose_page(ViewState::Unauthenticated, &entries, DEMO_TRIP_ID);

        assert_eq!(signed_in.blocks.len(), signed_out.blocks.len());

        let differing: Vec<usize> = signed_in
            .blocks
            .iter()
            .zip(&signed_out.blocks)
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(differing, vec![1]);

        for layout in [&signed_in, &signed_out] {
            let branch: Vec<usize> = layout
                .blocks
                .iter()
                .enumerate()
                .filter(|(_, b)| b.is_branch())
                .map(|(i, _)| i)
                .collect();
            assert_eq!(branch, vec![1]);
        }

        assert_eq!(signed_in.blocks[1], compose_branch(ViewState::Authenticated, &entries));
        assert_eq!(signed_out.blocks[1], compose_branch(ViewState::Unauthenticated, &entries));
    }

    #[test]
    fn test_demo_image_is_shipped() {
        let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        let relative = DEMO_IMAGE.trim_start_matches('/');
        assert!(manifest.join(relative).is_file(), "missing asset {}", relative);

        let index = std::fs::read_to_string(manifest.join("index.html")).unwrap();
        assert!(index.contains(r#"rel="copy-dir" href="assets""#));

        assert!(demo_activities().iter().all(|e| e.image == DEMO_IMAGE));
    }

    #[test]
    fn test_compose_is_repeatable() {
        let entries = demo_activities();
        for state in [ViewState::Authenticated, ViewState::Unauthenticated] {
            let first = compose_page(state, &entries, DEMO_TRIP_ID);
            let second = compose_page(state, &entries, DEMO_TRIP_ID);
            assert_eq!(first, second);
        }
    }
}
