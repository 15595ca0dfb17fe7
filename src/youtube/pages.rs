//! Lazy sequence of playlist membership pages.

use std::collections::HashSet;

use tracing::debug;

use super::{ApiError, ItemsPage, YouTubeApi};
use crate::playlist::PlaylistId;

/// Iterator over the membership pages of one playlist.
///
/// Each call to `next` performs one request, continuing from the token the
/// previous page returned. The sequence ends after the first page without a
/// continuation token. It is bounded: more than `max_pages` pages, or a token
/// the upstream already sent, yields an error and then ends the sequence.
/// A fresh `Pages` starts again from the first page.
pub struct Pages<'a> {
    api: &'a dyn YouTubeApi,
    playlist_id: &'a PlaylistId,
    max_pages: usize,
    next_token: Option<String>,
    seen_tokens: HashSet<String>,
    fetched: usize,
    done: bool,
}

impl<'a> Pages<'a> {
    pub fn new(api: &'a dyn YouTubeApi, playlist_id: &'a PlaylistId, max_pages: usize) -> Self {
        Self {
            api,
            playlist_id,
            max_pages: max_pages.max(1),
            next_token: None,
            seen_tokens: HashSet::new(),
            fetched: 0,
            done: false,
        }
    }

    /// Number of pages fetched so far.
    pub fn fetched(&self) -> usize {
        self.fetched
    }

    fn fail(&mut self, error: ApiError) -> Option<Result<ItemsPage, ApiError>> {
        self.done = true;
        Some(Err(error))
    }
}

impl Iterator for Pages<'_> {
    type Item = Result<ItemsPage, ApiError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.fetched >= self.max_pages {
            return self.fail(ApiError::PageLimitExceeded {
                limit: self.max_pages,
            });
        }

        let token = self.next_token.take();
        let page = match self.api.playlist_items(self.playlist_id, token.as_deref()) {
            Ok(page) => page,
            Err(e) => return self.fail(e),
        };
        self.fetched += 1;
        debug!(
            playlist = %self.playlist_id,
            page = self.fetched,
            entries = page.entries.len(),
            "Fetched playlist page"
        );

        match &page.next_page_token {
            None => self.done = true,
            Some(next) => {
                if !self.seen_tokens.insert(next.clone()) {
                    return self.fail(ApiError::ContinuationLoop {
                        token: next.clone(),
                    });
                }
                self.next_token = Some(next.clone());
            }
        }

        Some(Ok(page))
    }
}
