use crate::{
    api::{ApiError, Enquiry, EnquiryPage},
    config::PAGE_SIZE,
};

/// Identifies one page request. Only the most recent ticket may settle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub page: u32,
    pub seq: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    Loaded,
    Stale,
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    pub items: Vec<Enquiry>,
    pub current_page: u32,
    pub total_count: u64,
    in_flight: Option<FetchTicket>,
    next_seq: u64,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            total_count: 0,
            in_flight: None,
            next_seq: 0,
        }
    }
}

pub fn total_pages(total_count: u64) -> u32 {
    let pages = total_count.div_ceil(PAGE_SIZE).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

impl PageState {
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_count)
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn can_go_previous(&self) -> bool {
        !self.is_loading() && self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_loading() && self.current_page < self.total_pages()
    }

    /// Starts a fetch of page `page`, or returns `None` when the page is out of
    /// range or another fetch has not settled yet.
    pub fn begin_fetch(&mut self, page: u32) -> Option<FetchTicket> {
        if page < 1 || page > self.total_pages() || self.is_loading() {
            return None;
        }
        self.next_seq += 1;
        let ticket = FetchTicket {
            page,
            seq: self.next_seq,
        };
        self.in_flight = Some(ticket);
        Some(ticket)
    }

    /// Applies a fetch result. A failure keeps the previous rows in place; a
    /// shrunken total pulls `current_page` back into range.
    pub fn settle(&mut self, ticket: FetchTicket, result: Result<EnquiryPage, ApiError>) -> Settled {
        if self.in_flight != Some(ticket) {
            return Settled::Stale;
        }
        self.in_flight = None;
        match result {
            Ok(page) => {
                self.items = page.results;
                self.total_count = page.count;
                self.current_page = ticket.page.min(self.total_pages());
                Settled::Loaded
            }
            Err(_) => Settled::Failed,
        }
    }
}
