//! Add/edit server form.
//!
//! DESIGN
//! ======
//! The form holds a [`ServerDraft`] and the field errors from the last
//! validation. Saving validates, awaits the backend, and only then writes
//! the record into the inventory page, so a failed save leaves the page
//! untouched.

#[cfg(test)]
#[path = "server_form_test.rs"]
mod server_form_test;

use inventory::validate::validate_server;
use inventory::{FieldErrors, ServerDraft, ServerField, ServerId, StoreError};
use time::OffsetDateTime;
use tracing::info;

use crate::net::api::{ApiError, Backend};
use crate::state::inventory::InventoryPage;

pub const ADDED_MESSAGE: &str = "Server added successfully!";
pub const UPDATED_MESSAGE: &str = "Server updated successfully!";
pub const ADD_ANOTHER_MESSAGE: &str = "Server saved successfully! Ready to add another.";

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("{0}")]
    Invalid(FieldErrors),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(ServerId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Saved {
    pub id: ServerId,
    pub message: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerForm {
    mode: FormMode,
    draft: ServerDraft,
    errors: FieldErrors,
}

impl ServerForm {
    #[must_use]
    pub fn add() -> Self {
        Self { mode: FormMode::Add, draft: ServerDraft::default(), errors: FieldErrors::new() }
    }

    /// Prefill from the record `id` on `page`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if `id` is unknown.
    pub fn edit(page: &InventoryPage, id: ServerId) -> Result<Self, StoreError> {
        let record = page.store().get(id).ok_or(StoreError::NotFound(id))?;
        Ok(Self {
            mode: FormMode::Edit(id),
            draft: ServerDraft::from_record(record),
            errors: FieldErrors::new(),
        })
    }

    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    #[must_use]
    pub fn draft(&self) -> &ServerDraft {
        &self.draft
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Edit one column and drop its stale error. Returns `false` for
    /// columns the form does not edit.
    pub fn set(&mut self, field: ServerField, value: impl Into<String>) -> bool {
        if !self.draft.set(field, value) {
            return false;
        }
        self.errors.clear(field.key());
        true
    }

    /// Replace the whole draft (e.g. from a JSON payload).
    pub fn set_draft(&mut self, draft: ServerDraft) {
        self.draft = draft;
        self.errors = FieldErrors::new();
    }

    /// Back to a blank add form.
    pub fn reset(&mut self) {
        *self = Self::add();
    }

    /// Run validation and keep the messages on the form.
    pub fn validate(&mut self) -> bool {
        match validate_server(&self.draft) {
            Ok(()) => {
                self.errors = FieldErrors::new();
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }

    /// # Errors
    ///
    /// Returns [`FormError::Invalid`] without calling the backend when the
    /// draft fails validation.
    pub async fn save(
        &mut self,
        backend: &dyn Backend,
        page: &mut InventoryPage,
        now: OffsetDateTime,
    ) -> Result<Saved, FormError> {
        if !self.validate() {
            return Err(FormError::Invalid(self.errors.clone()));
        }
        if let FormMode::Edit(id) = self.mode {
            if page.store().get(id).is_none() {
                return Err(StoreError::NotFound(id).into());
            }
        }
        backend.save_server(&self.draft).await?;
        let saved = match self.mode {
            FormMode::Add => {
                let id = page.add(self.draft.clone(), now)?;
                self.mode = FormMode::Edit(id);
                Saved { id, message: ADDED_MESSAGE }
            }
            FormMode::Edit(id) => {
                page.update(id, self.draft.clone(), now)?;
                Saved { id, message: UPDATED_MESSAGE }
            }
        };
        info!(id = %saved.id, hostname = %self.draft.hostname, "server form saved");
        Ok(saved)
    }

    /// Save, then clear the form for the next entry.
    ///
    /// # Errors
    ///
    /// Same as [`ServerForm::save`]; the form is kept on failure.
    pub async fn save_and_add_another(
        &mut self,
        backend: &dyn Backend,
        page: &mut InventoryPage,
        now: OffsetDateTime,
    ) -> Result<Saved, FormError> {
        let saved = self.save(backend, page, now).await?;
        self.reset();
        Ok(Saved { message: ADD_ANOTHER_MESSAGE, ..saved })
    }
}
