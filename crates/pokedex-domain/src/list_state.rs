//! List State Controller
//!
//! Owns the catalogue page currently on screen. The `page` query parameter
//! is authoritative: the controller re-derives its page from the URL on every
//! URL change and only ever asks the caller to *write* the URL, never fetches
//! on its own initiative.
//!
//! Flow: `Idle -> Loading -> {Ready, Failed}`, re-entered on each page change.

use std::convert::Infallible;
use std::str::FromStr;

use crate::error::AppResult;
use crate::models::{ListItem, PageResult, UpstreamPage};
use crate::pagination::{offset_for, page_query, parse_page_param, total_pages, PageRequest};
use crate::sequencer::RequestSequencer;

pub const LIST_ERROR_MESSAGE: &str = "Failed to load Pokémon. Try reloading the page.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Grid ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Numeric catalogue id
    #[default]
    Id,
    /// Lexicographic name
    Name,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Id => "id",
            SortOrder::Name => "name",
        }
    }
}

/// Unknown values fall back to id order.
impl FromStr for SortOrder {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "name" => SortOrder::Name,
            _ => SortOrder::Id,
        })
    }
}

/// A list fetch the caller must perform against the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub page: u32,
    pub limit: u32,
    pub offset: u32,
}

#[derive(Debug, Clone)]
pub struct ListController {
    page_size: u32,
    page: u32,
    state: LoadState,
    items: Vec<ListItem>,
    total_count: u64,
    /// Set once a page has loaded, so `total_pages` is meaningful
    total_known: bool,
    error: Option<String>,
    search: String,
    sort: SortOrder,
    sequencer: RequestSequencer,
}

impl ListController {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            page: 1,
            state: LoadState::Idle,
            items: Vec::new(),
            total_count: 0,
            total_known: false,
            error: None,
            search: String::new(),
            sort: SortOrder::default(),
            sequencer: RequestSequencer::new(),
        }
    }

    /// Re-derive the page from the URL's `page` value.
    ///
    /// Returns a ticket on first mount and whenever the page differs from the
    /// one already shown or in flight; `None` means nothing to fetch. Once the
    /// total is known, a page past the last one is ignored.
    pub fn sync_from_url(&mut self, page_param: Option<&str>) -> Option<FetchTicket> {
        let page = parse_page_param(page_param);
        if self.state != LoadState::Idle && page == self.page {
            return None;
        }
        if self.total_known && page > self.total_pages() {
            return None;
        }
        self.page = page;
        Some(self.begin_fetch())
    }

    fn begin_fetch(&mut self) -> FetchTicket {
        self.state = LoadState::Loading;
        self.error = None;
        FetchTicket {
            seq: self.sequencer.issue(),
            page: self.page,
            limit: self.page_size,
            offset: offset_for(self.page, self.page_size),
        }
    }

    /// Land the outcome of a fetch. Results for superseded tickets are
    /// dropped; returns whether the result was applied.
    pub fn complete(&mut self, ticket: FetchTicket, result: AppResult<UpstreamPage>) -> bool {
        if !self.sequencer.is_current(ticket.seq) {
            return false;
        }

        match result.and_then(PageResult::from_upstream) {
            Ok(page) => {
                self.items = page.items;
                self.total_count = page.total_count;
                self.total_known = true;
                self.state = LoadState::Ready;
            }
            Err(_) => {
                self.items.clear();
                self.error = Some(LIST_ERROR_MESSAGE.to_string());
                self.state = LoadState::Failed;
            }
        }
        true
    }

    /// URL to write for a navigation request, or `None` if the target page
    /// is outside `[1, total_pages]`.
    pub fn navigate(&self, request: PageRequest) -> Option<String> {
        request
            .resolve(self.page, self.total_pages())
            .map(page_query)
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    /// Filtered and sorted view of the loaded page. Never triggers a fetch.
    pub fn visible(&self) -> Vec<ListItem> {
        project(&self.items, &self.search, self.sort)
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_count, self.page_size)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn load_state(&self) -> LoadState {
        self.state
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }
}

/// Case-insensitive name filter, then sort. The source slice is untouched.
pub fn project(items: &[ListItem], search: &str, sort: SortOrder) -> Vec<ListItem> {
    let needle = search.to_lowercase();
    let mut visible: Vec<ListItem> = items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    match sort {
        SortOrder::Id => visible.sort_by_key(|item| item.id),
        SortOrder::Name => visible.sort_by(|a, b| a.name.cmp(&b.name)),
    }
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::RawListEntry;
    use crate::pagination::PAGE_SIZE;

    fn upstream_page(count: u64, ids: &[(u32, &str)]) -> UpstreamPage {
        UpstreamPage {
            count,
            next: None,
            previous: None,
            results: ids
                .iter()
                .map(|(id, name)| RawListEntry {
                    name: name.to_string(),
                    url: format!("https://pokeapi.co/api/v2/pokemon/{}/", id),
                })
                .collect(),
        }
    }

    fn twenty_from(start: u32) -> Vec<(u32, &'static str)> {
        (start..start + 20).map(|id| (id, "mon")).collect()
    }

    fn loaded(count: u64, ids: &[(u32, &str)]) -> ListController {
        let mut ctrl = ListController::new(PAGE_SIZE);
        let ticket = ctrl.sync_from_url(None).unwrap();
        assert!(ctrl.complete(ticket, Ok(upstream_page(count, ids))));
        ctrl
    }

    #[test]
    fn test_initial_mount_fetches_url_page() {
        let mut ctrl = ListController::new(PAGE_SIZE);
        assert_eq!(ctrl.load_state(), LoadState::Idle);

        let ticket = ctrl.sync_from_url(Some("3")).unwrap();
        assert_eq!(ticket.page, 3);
        assert_eq!(ticket.limit, 20);
        assert_eq!(ticket.offset, 40);
        assert_eq!(ctrl.load_state(), LoadState::Loading);
    }

    #[test]
    fn test_initial_mount_without_param_fetches_first_page() {
        let mut ctrl = ListController::new(PAGE_SIZE);
        let ticket = ctrl.sync_from_url(None).unwrap();
        assert_eq!(ticket.page, 1);
        assert_eq!(ticket.offset, 0);
    }

    #[test]
    fn test_total_pages_from_count() {
        let ctrl = loaded(1000, &twenty_from(1));
        assert_eq!(ctrl.load_state(), LoadState::Ready);
        assert_eq!(ctrl.items().len(), 20);
        assert_eq!(ctrl.total_pages(), 50);
    }

    #[test]
    fn test_navigate_then_url_change_fetches_once() {
        let mut ctrl = loaded(1000, &twenty_from(1));

        for page in [1u32, 2, 25, 50] {
            let url = ctrl.navigate(PageRequest::Number(page)).unwrap();
            assert_eq!(url, format!("/?page={}", page));

            let param = page.to_string();
            let ticket = ctrl.sync_from_url(Some(&param));
            if page == ctrl.page() && ticket.is_none() {
                // Already showing this page: URL unchanged, nothing to fetch.
                continue;
            }
            let ticket = ticket.unwrap();
            assert_eq!(ticket.offset, (page - 1) * 20);
            assert!(ctrl.sync_from_url(Some(&param)).is_none());
            assert!(ctrl.complete(ticket, Ok(upstream_page(1000, &twenty_from(ticket.offset + 1)))));
        }
    }

    #[test]
    fn test_navigate_out_of_range_is_noop() {
        let ctrl = loaded(1000, &twenty_from(1));
        assert_eq!(ctrl.navigate(PageRequest::Number(0)), None);
        assert_eq!(ctrl.navigate(PageRequest::Number(51)), None);
        assert_eq!(ctrl.navigate(PageRequest::Previous), None);
        assert_eq!(ctrl.load_state(), LoadState::Ready);
        assert_eq!(ctrl.page(), 1);
    }

    #[test]
    fn test_url_page_past_total_is_ignored() {
        let mut ctrl = loaded(1000, &twenty_from(1));
        assert_eq!(ctrl.total_pages(), 50);

        assert!(ctrl.sync_from_url(Some("999")).is_none());
        assert!(ctrl.sync_from_url(Some("51")).is_none());
        assert_eq!(ctrl.page(), 1);
        assert_eq!(ctrl.load_state(), LoadState::Ready);
        assert_eq!(ctrl.items().len(), 20);

        // The last page is still reachable
        let ticket = ctrl.sync_from_url(Some("50")).unwrap();
        assert_eq!(ticket.offset, 980);
    }

    #[test]
    fn test_url_page_before_first_load_is_fetched() {
        let mut ctrl = ListController::new(PAGE_SIZE);
        let ticket = ctrl.sync_from_url(Some("999")).unwrap();
        assert_eq!(ticket.page, 999);
        assert_eq!(ticket.offset, 19960);
    }

    #[test]
    fn test_navigate_last_and_next() {
        let mut ctrl = loaded(1000, &twenty_from(1));
        assert_eq!(ctrl.navigate(PageRequest::Last).as_deref(), Some("/?page=50"));
        assert_eq!(ctrl.navigate(PageRequest::Next).as_deref(), Some("/?page=2"));

        let ticket = ctrl.sync_from_url(Some("50")).unwrap();
        ctrl.complete(ticket, Ok(upstream_page(1000, &twenty_from(981))));
        assert_eq!(ctrl.navigate(PageRequest::Next), None);
    }

    #[test]
    fn test_failure_discards_items() {
        let mut ctrl = loaded(1000, &twenty_from(1));
        let ticket = ctrl.sync_from_url(Some("2")).unwrap();
        assert!(ctrl.complete(ticket, Err(AppError::Upstream)));

        assert_eq!(ctrl.load_state(), LoadState::Failed);
        assert!(ctrl.items().is_empty());
        assert_eq!(ctrl.error_message(), Some(LIST_ERROR_MESSAGE));
    }

    #[test]
    fn test_refetch_clears_previous_error() {
        let mut ctrl = ListController::new(PAGE_SIZE);
        let ticket = ctrl.sync_from_url(None).unwrap();
        ctrl.complete(ticket, Err(AppError::ClientFetch("offline".into())));
        assert!(ctrl.error_message().is_some());

        let ticket = ctrl.sync_from_url(Some("2")).unwrap();
        assert_eq!(ctrl.load_state(), LoadState::Loading);
        assert!(ctrl.error_message().is_none());
        assert!(ctrl.complete(ticket, Ok(upstream_page(40, &twenty_from(21)))));
        assert_eq!(ctrl.load_state(), LoadState::Ready);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut ctrl = ListController::new(PAGE_SIZE);
        let page_one = ctrl.sync_from_url(Some("1")).unwrap();
        let page_two = ctrl.sync_from_url(Some("2")).unwrap();

        assert!(ctrl.complete(page_two, Ok(upstream_page(1000, &twenty_from(21)))));
        assert!(!ctrl.complete(page_one, Ok(upstream_page(1000, &twenty_from(1)))));

        assert_eq!(ctrl.page(), 2);
        assert_eq!(ctrl.items()[0].id, 21);
    }

    #[test]
    fn test_stale_response_before_current_is_discarded() {
        let mut ctrl = ListController::new(PAGE_SIZE);
        let page_one = ctrl.sync_from_url(Some("1")).unwrap();
        let page_two = ctrl.sync_from_url(Some("2")).unwrap();

        assert!(!ctrl.complete(page_one, Ok(upstream_page(1000, &twenty_from(1)))));
        assert_eq!(ctrl.load_state(), LoadState::Loading);
        assert!(ctrl.items().is_empty());

        assert!(ctrl.complete(page_two, Ok(upstream_page(1000, &twenty_from(21)))));
        assert_eq!(ctrl.items()[0].id, 21);
    }

    #[test]
    fn test_stale_failure_does_not_clobber() {
        let mut ctrl = ListController::new(PAGE_SIZE);
        let page_one = ctrl.sync_from_url(Some("1")).unwrap();
        let page_two = ctrl.sync_from_url(Some("2")).unwrap();

        ctrl.complete(page_two, Ok(upstream_page(1000, &twenty_from(21))));
        assert!(!ctrl.complete(page_one, Err(AppError::Upstream)));
        assert_eq!(ctrl.load_state(), LoadState::Ready);
        assert_eq!(ctrl.items().len(), 20);
    }

    #[test]
    fn test_search_is_case_insensitive_and_idempotent() {
        let mut ctrl = loaded(
            3,
            &[(25, "pikachu"), (26, "raichu"), (1, "bulbasaur")],
        );
        ctrl.set_search("CHU");
        let once = ctrl.visible();
        assert_eq!(
            once.iter().map(|i| i.name.as_str()).collect::<Vec<_>>(),
            vec!["pikachu", "raichu"]
        );

        let twice = project(&once, "CHU", ctrl.sort());
        assert_eq!(once, twice);
        assert_eq!(ctrl.load_state(), LoadState::Ready);
    }

    #[test]
    fn test_sort_round_trip_is_non_destructive() {
        let mut ctrl = loaded(
            3,
            &[(25, "pikachu"), (4, "charmander"), (1, "bulbasaur")],
        );
        let by_id = ctrl.visible();
        assert_eq!(by_id.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 4, 25]);

        ctrl.set_sort(SortOrder::Name);
        let by_name = ctrl.visible();
        assert_eq!(
            by_name.iter().map(|i| i.name.as_str()).collect::<Vec<_>>(),
            vec!["bulbasaur", "charmander", "pikachu"]
        );

        ctrl.set_sort(SortOrder::Id);
        assert_eq!(ctrl.visible(), by_id);
        // Upstream order kept in the source collection
        assert_eq!(ctrl.items()[0].id, 25);
    }

    #[test]
    fn test_sort_order_strings() {
        assert_eq!("name".parse::<SortOrder>(), Ok(SortOrder::Name));
        assert_eq!("id".parse::<SortOrder>(), Ok(SortOrder::Id));
        assert_eq!("bogus".parse::<SortOrder>(), Ok(SortOrder::Id));
        assert_eq!(SortOrder::Name.as_str(), "name");
    }
}
