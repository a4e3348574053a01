//! Search session state and the stale-response guard

use super::error::SearchError;
use crate::filters::{FilterCriteria, SortKey, rank};
use crate::geo::Coordinate;
use crate::pagination::{Page, PaginationView};
use crate::places::Place;
use crate::provider::{PlaceSearch, ProviderError, SearchRequest};
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one issued search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchTicket(u64);

impl SearchTicket {
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// Outcome of completing a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Results applied; `count` places survived filtering
    Applied { count: usize },
    /// The search succeeded but nothing matched
    Empty,
    /// A newer search was issued; this response was discarded
    Stale,
}

/// Current criteria, sort key, reference location and page
///
/// Changing the criteria, sort key or reference re-ranks the last
/// candidate list and returns to page 1.
pub struct SearchSession {
    criteria: FilterCriteria,
    sort_key: SortKey,
    reference: Coordinate,
    latest: AtomicU64,
    candidates: Vec<Place>,
    ranked: Vec<Place>,
    view: PaginationView,
}

impl SearchSession {
    /// Create a session
    ///
    /// # Errors
    ///
    /// Returns `SearchError` if `criteria` are invalid or `page_size` is zero.
    pub fn new(
        reference: Coordinate,
        criteria: FilterCriteria,
        sort_key: SortKey,
        page_size: usize,
    ) -> Result<Self, SearchError> {
        criteria.validate()?;
        let view = PaginationView::new(page_size)?;

        Ok(Self {
            criteria,
            sort_key,
            reference,
            latest: AtomicU64::new(0),
            candidates: Vec::new(),
            ranked: Vec::new(),
            view,
        })
    }

    /// A search request around the reference location with the current radius
    #[must_use]
    pub const fn request(&self) -> SearchRequest {
        SearchRequest::new(self.reference, self.criteria.radius_meters)
    }

    /// Issue a ticket for `request`, superseding all earlier tickets
    pub fn begin(&self, request: &SearchRequest) -> SearchTicket {
        let ticket = SearchTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1);
        log::debug!(
            "Search #{} around {} within {}m",
            ticket.0,
            request.center,
            request.radius_meters
        );
        ticket
    }

    /// Whether `ticket` belongs to the most recently issued search
    #[must_use]
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Apply the provider response for `ticket`
    ///
    /// Stale responses (and stale failures) are discarded without touching
    /// the session. A current failure leaves the previous results in place.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Provider` if the current search failed.
    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        response: Result<Vec<Place>, ProviderError>,
    ) -> Result<SearchStatus, SearchError> {
        if !self.is_current(ticket) {
            log::debug!("Discarding response for stale search #{}", ticket.0);
            return Ok(SearchStatus::Stale);
        }

        let places = response?;
        log::debug!("Search #{} returned {} candidate(s)", ticket.0, places.len());

        self.candidates = places;
        self.rerank();

        if self.ranked.is_empty() {
            Ok(SearchStatus::Empty)
        } else {
            Ok(SearchStatus::Applied {
                count: self.ranked.len(),
            })
        }
    }

    /// Run a search synchronously: issue a ticket, query, and apply
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Provider` if the provider fails.
    pub fn search<P: PlaceSearch + ?Sized>(
        &mut self,
        provider: &P,
        request: &SearchRequest,
    ) -> Result<SearchStatus, SearchError> {
        let ticket = self.begin(request);
        let response = provider.nearby_search(request);
        self.complete(ticket, response)
    }

    fn rerank(&mut self) {
        self.ranked = rank(&self.candidates, &self.criteria, self.sort_key, &self.reference);
        self.view.reset();
    }

    /// Replace the filter criteria
    ///
    /// Returns `true` when the radius changed, since the provider has to be
    /// queried again for the new area.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::InvalidCriteria` if `criteria` are invalid; the
    /// session is left unchanged.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) -> Result<bool, SearchError> {
        criteria.validate()?;
        let radius_changed = criteria.radius_meters != self.criteria.radius_meters;
        self.criteria = criteria;
        self.rerank();
        Ok(radius_changed)
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.sort_key = sort_key;
        self.rerank();
    }

    /// Move the reference location; distances and distance order follow it
    pub fn set_reference(&mut self, reference: Coordinate) {
        self.reference = reference;
        self.rerank();
    }

    /// The current page of ranked places
    #[must_use]
    pub fn current_page(&self) -> Page<'_, Place> {
        self.view.view(&self.ranked)
    }

    pub fn go_to_page(&mut self, page_number: usize) -> Page<'_, Place> {
        self.view.go_to(page_number, self.ranked.len());
        self.current_page()
    }

    pub fn next_page(&mut self) -> Page<'_, Place> {
        self.view.next(self.ranked.len());
        self.current_page()
    }

    pub fn previous_page(&mut self) -> Page<'_, Place> {
        self.view.previous(self.ranked.len());
        self.current_page()
    }

    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub const fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    #[must_use]
    pub const fn reference(&self) -> Coordinate {
        self.reference
    }

    /// Candidates from the last applied search, unfiltered
    #[must_use]
    pub fn candidates(&self) -> &[Place] {
        &self.candidates
    }

    /// Filtered and sorted places
    #[must_use]
    pub fn ranked(&self) -> &[Place] {
        &self.ranked
    }
}
