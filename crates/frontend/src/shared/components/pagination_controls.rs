use crate::shared::icons::icon;
use leptos::prelude::*;

/// Pages shown on each side of the current page.
const WINDOW_RADIUS: usize = 2;

/// One element of the pagination bar, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Previous(usize),
    Page { number: usize, active: bool },
    Ellipsis,
    Next(usize),
}

impl PageControl {
    /// Page loaded by clicking this control. The active page and the gap
    /// load nothing.
    pub fn target(&self) -> Option<usize> {
        match self {
            PageControl::Previous(page) | PageControl::Next(page) => Some(*page),
            PageControl::Page { number, active: false } => Some(*number),
            PageControl::Page { active: true, .. } | PageControl::Ellipsis => None,
        }
    }
}

pub fn total_pages(total_results: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total_results.div_ceil(page_size)
    }
}

/// Builds the pagination bar for a 1-based `current_page`.
///
/// Nothing is rendered for a single page. Otherwise: previous arrow, first
/// page and a gap when the window does not reach them, the window of
/// `current ± 2`, a gap and the last page, next arrow.
pub fn build_page_controls(current_page: usize, total_results: usize, page_size: usize) -> Vec<PageControl> {
    let pages = total_pages(total_results, page_size);
    if pages <= 1 {
        return Vec::new();
    }

    let current = current_page.clamp(1, pages);
    let start = current.saturating_sub(WINDOW_RADIUS).max(1);
    let end = (current + WINDOW_RADIUS).min(pages);

    let mut controls = Vec::new();
    if current > 1 {
        controls.push(PageControl::Previous(current - 1));
    }
    if start > 1 {
        controls.push(PageControl::Page {
            number: 1,
            active: false,
        });
        if start > 2 {
            controls.push(PageControl::Ellipsis);
        }
    }
    for number in start..=end {
        controls.push(PageControl::Page {
            number,
            active: number == current,
        });
    }
    if end < pages {
        if end < pages - 1 {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(PageControl::Page {
            number: pages,
            active: false,
        });
    }
    if current < pages {
        controls.push(PageControl::Next(current + 1));
    }
    controls
}

/// Page-number pagination bar. Renders nothing for an empty control set.
#[component]
pub fn PaginationControls(
    /// Controls produced by [`build_page_controls`]
    #[prop(into)]
    controls: Signal<Vec<PageControl>>,

    /// Callback with the 1-based page to load
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || !controls.get().is_empty()>
            <nav class="pagination" aria-label="Pagination">
                {move || controls.get().into_iter().map(|control| {
                    let select = move |_: leptos::ev::MouseEvent| {
                        if let Some(page) = control.target() {
                            on_page_change.run(page);
                        }
                    };
                    match control {
                        PageControl::Previous(_) => view! {
                            <button class="page-btn" title="Previous page" on:click=select>
                                {icon("chevron-left")}
                            </button>
                        }.into_any(),
                        PageControl::Next(_) => view! {
                            <button class="page-btn" title="Next page" on:click=select>
                                {icon("chevron-right")}
                            </button>
                        }.into_any(),
                        PageControl::Page { number, active } => view! {
                            <button
                                class=if active { "page-btn active" } else { "page-btn" }
                                aria-current=if active { Some("page") } else { None }
                                on:click=select
                            >
                                {number.to_string()}
                            </button>
                        }.into_any(),
                        PageControl::Ellipsis => view! {
                            <span class="page-dots">"..."</span>
                        }.into_any(),
                    }
                }).collect_view()}
            </nav>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: usize) -> PageControl {
        PageControl::Page {
            number,
            active: false,
        }
    }

    fn active(number: usize) -> PageControl {
        PageControl::Page {
            number,
            active: true,
        }
    }

    #[test]
    fn test_middle_page_has_both_gaps() {
        let controls = build_page_controls(6, 130, 12);
        assert_eq!(
            controls,
            vec![
                PageControl::Previous(5),
                page(1),
                PageControl::Ellipsis,
                page(4),
                page(5),
                active(6),
                page(7),
                page(8),
                PageControl::Ellipsis,
                page(11),
                PageControl::Next(7),
            ]
        );
    }

    #[test]
    fn test_single_page_renders_nothing() {
        assert!(build_page_controls(1, 0, 12).is_empty());
        assert!(build_page_controls(1, 12, 12).is_empty());
        assert!(build_page_controls(1, 5, 0).is_empty());
    }

    #[test]
    fn test_first_page() {
        assert_eq!(
            build_page_controls(1, 130, 12),
            vec![
                active(1),
                page(2),
                page(3),
                PageControl::Ellipsis,
                page(11),
                PageControl::Next(2),
            ]
        );
    }

    #[test]
    fn test_no_gap_when_window_touches_first_page() {
        assert_eq!(
            build_page_controls(4, 72, 12),
            vec![
                PageControl::Previous(3),
                page(1),
                page(2),
                page(3),
                active(4),
                page(5),
                page(6),
                PageControl::Next(5),
            ]
        );
    }

    #[test]
    fn test_last_page() {
        assert_eq!(
            build_page_controls(11, 130, 12),
            vec![
                PageControl::Previous(10),
                page(1),
                PageControl::Ellipsis,
                page(9),
                page(10),
                active(11),
            ]
        );
    }

    #[test]
    fn test_pages_always_in_range() {
        for total in 0..=400usize {
            let pages = total_pages(total, 12);
            for current in 1..=pages.max(1) {
                let controls = build_page_controls(current, total, 12);
                if pages <= 1 {
                    assert!(controls.is_empty());
                    continue;
                }

                let numbers: Vec<usize> = controls
                    .iter()
                    .filter_map(|c| match c {
                        PageControl::Page { number, .. } => Some(*number),
                        _ => None,
                    })
                    .collect();
                assert_eq!(numbers.first(), Some(&1));
                assert_eq!(numbers.last(), Some(&pages));
                assert!(numbers.windows(2).all(|w| w[0] < w[1]));
                assert!(controls
                    .iter()
                    .filter_map(PageControl::target)
                    .all(|p| (1..=pages).contains(&p)));
                let actives = controls
                    .iter()
                    .filter(|c| matches!(c, PageControl::Page { active: true, .. }))
                    .count();
                assert_eq!(actives, 1);
            }
        }
    }

    #[test]
    fn test_only_other_pages_are_click_targets() {
        assert_eq!(PageControl::Previous(2).target(), Some(2));
        assert_eq!(PageControl::Next(4).target(), Some(4));
        assert_eq!(page(5).target(), Some(5));
        assert_eq!(PageControl::Page { number: 3, active: true }.target(), None);
        assert_eq!(PageControl::Ellipsis.target(), None);
    }
}
