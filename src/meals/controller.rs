use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::Result;

use super::gateway::{MealGateway, DEFAULT_LIMIT};
use super::model::{MealDraft, MealPage, MealRecord};
use super::samples;

/// How much the effective page size grows per "load more".
const LOAD_MORE_STEP: u32 = 8;

/// What the view is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Loading,
    Dialog { edit: bool },
    ConfirmingDelete,
}

/// Owns the meal list and every piece of UI state around it: search term,
/// pagination, the add/edit dialog draft and the delete confirmation.
///
/// All mutation goes through these methods; nothing outside the controller
/// touches the list.
pub struct MealListController {
    gateway: Arc<dyn MealGateway>,
    meals: Vec<MealRecord>,
    search_term: String,
    default_limit: u32,
    limit: u32,
    page: u32,
    total_pages: u32,
    has_more_meals: bool,
    state: ViewState,
    draft: MealDraft,
    edit_index: Option<usize>,
    pending_delete: Option<PendingDelete>,
    alert: Option<String>,
    list_seq: u64,
}

#[derive(Debug)]
struct PendingDelete {
    index: usize,
    id: String,
}

impl MealListController {
    pub fn new(gateway: Arc<dyn MealGateway>) -> Self {
        Self {
            gateway,
            meals: Vec::new(),
            search_term: String::new(),
            default_limit: DEFAULT_LIMIT,
            limit: DEFAULT_LIMIT,
            page: 1,
            total_pages: 0,
            has_more_meals: false,
            state: ViewState::Idle,
            draft: MealDraft::default(),
            edit_index: None,
            pending_delete: None,
            alert: None,
            list_seq: 0,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.default_limit = limit;
        self.limit = limit;
        self
    }

    pub fn meals(&self) -> &[MealRecord] {
        &self.meals
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn has_more_meals(&self) -> bool {
        self.has_more_meals
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn draft(&self) -> &MealDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut MealDraft {
        &mut self.draft
    }

    /// The last failure message meant for the user, if any. Reading it
    /// clears it.
    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    /// First load on activation.
    pub async fn load_initial(&mut self) {
        self.reload(1, self.default_limit).await;
    }

    /// Asks for one larger single page rather than appending a second one;
    /// the server replaces the whole list so there is nothing to de-duplicate.
    pub async fn load_more(&mut self) {
        if !self.has_more_meals || self.state == ViewState::Loading {
            return;
        }
        self.reload(1, self.limit + LOAD_MORE_STEP).await;
    }

    /// Replaces the search term and reloads from the first page at the
    /// default page size.
    pub async fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.reload(1, self.default_limit).await;
    }

    async fn reload(&mut self, page: u32, limit: u32) {
        let seq = self.begin_list_request();
        let outcome = self.gateway.list(page, limit, &self.search_term).await;
        self.apply_list_outcome(seq, limit, outcome);
    }

    fn begin_list_request(&mut self) -> u64 {
        self.list_seq += 1;
        self.state = ViewState::Loading;
        self.list_seq
    }

    /// Applies a finished list request. A response whose sequence number is
    /// no longer the latest issued is dropped so an out-of-order completion
    /// cannot overwrite a fresher page.
    fn apply_list_outcome(&mut self, seq: u64, limit: u32, outcome: Result<MealPage>) {
        if seq != self.list_seq {
            debug!(seq, latest = self.list_seq, "dropping stale meal page");
            return;
        }
        self.state = ViewState::Idle;
        match outcome {
            Ok(fetched) => {
                self.page = fetched.page;
                self.limit = limit;
                self.total_pages = fetched.total_pages;
                self.has_more_meals = fetched.page < fetched.total_pages;
                self.meals = fetched.items;
            }
            Err(err) => {
                warn!(error = %err, "meal list fetch failed");
                if self.meals.is_empty() {
                    self.meals = samples::sample_meals();
                    self.has_more_meals = false;
                }
            }
        }
    }

    pub fn open_create_dialog(&mut self) {
        self.draft = MealDraft::default();
        self.edit_index = None;
        self.state = ViewState::Dialog { edit: false };
    }

    /// Opens the edit dialog for the meal at `index`, refreshing the draft
    /// from the backend when the record carries an id. A missing id or a
    /// failed fetch silently falls back to the local copy.
    pub async fn open_edit_dialog(&mut self, index: usize) {
        let Some(record) = self.meals.get(index) else {
            return;
        };
        let mut draft = MealDraft::from_record(record);
        if record.has_id() {
            match self.gateway.get_by_id(&record.id).await {
                Ok(fresh) => draft = MealDraft::from_record(&fresh),
                Err(err) => {
                    debug!(error = %err, id = %record.id, "edit refresh failed, keeping local copy")
                }
            }
        }
        self.draft = draft;
        self.edit_index = Some(index);
        self.state = ViewState::Dialog { edit: true };
    }

    pub fn close_dialog(&mut self) {
        self.state = ViewState::Idle;
        self.edit_index = None;
    }

    /// Create or update, depending on which dialog is open. A failure keeps
    /// the dialog open and stores an alert so the user can retry or cancel.
    pub async fn submit(&mut self) {
        let ViewState::Dialog { edit } = self.state else {
            return;
        };
        let outcome = if edit {
            self.submit_update().await
        } else {
            self.submit_create().await
        };
        if let Err(err) = outcome {
            warn!(error = %err, "meal submit failed");
            self.alert = Some(err.to_string());
        }
    }

    async fn submit_create(&mut self) -> Result<()> {
        let req = self.draft.to_create_request()?;
        self.gateway.create(&req).await?;
        self.close_dialog();
        // full reload, not a local splice: the list must show server state
        self.reload(1, self.default_limit).await;
        Ok(())
    }

    async fn submit_update(&mut self) -> Result<()> {
        let Some(index) = self.edit_index else {
            return Ok(());
        };
        if self.draft.id.is_empty() {
            // Never persisted: apply the whole draft locally, no network.
            let record = self.draft.to_record()?;
            if let Some(slot) = self.meals.get_mut(index) {
                *slot = record;
            }
            self.close_dialog();
            return Ok(());
        }
        let req = self.draft.to_update_request()?;
        let updated = self.gateway.update(&self.draft.id, &req).await?;
        if let Some(slot) = self.meals.get_mut(index) {
            // price is client-only, keep whatever the slot had
            let price = slot.price;
            *slot = updated;
            slot.price = price;
        }
        self.close_dialog();
        Ok(())
    }

    /// Marks the meal at `index` for deletion and asks for confirmation.
    pub fn request_delete(&mut self, index: usize) {
        let Some(record) = self.meals.get(index) else {
            return;
        };
        self.pending_delete = Some(PendingDelete {
            index,
            id: record.id.clone(),
        });
        self.state = ViewState::ConfirmingDelete;
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.state = ViewState::Idle;
    }

    /// Deletes the confirmed candidate. Records that never reached the
    /// server are only spliced out of the local list.
    pub async fn confirm_delete(&mut self) {
        let Some(PendingDelete { index, id }) = self.pending_delete.take() else {
            return;
        };
        self.state = ViewState::Idle;
        if !id.is_empty() {
            if let Err(err) = self.gateway.delete(&id).await {
                warn!(error = %err, %id, "meal delete failed");
                self.alert = Some(err.to_string());
                return;
            }
        }
        if index < self.meals.len() {
            self.meals.remove(index);
        }
    }
}
