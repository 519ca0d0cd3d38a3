// Copyright (c) 2025 Kharcha Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use log::debug;
use thiserror::Error;

use crate::api::{ApiError, ExpenseBackend};
use crate::models::{Expense, ExpenseDraft};

/// How a failed write left the cache. `Unchanged` means the local
/// collection is exactly what it was before the call; `Reloaded` means the
/// optimistic mutation could not be confirmed and the cache was refreshed
/// from the server instead of patched back.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Unchanged(ApiError),
    #[error("{0}; local cache was reloaded from the server")]
    Reloaded(ApiError),
}

#[derive(Default)]
struct CacheState {
    expenses: Vec<Expense>,
    loaded: bool,
    // UI-facing busy indicator, set for any in-flight operation.
    loading: bool,
    // True only while a collection fetch is in flight; this, not
    // `loading`, is what `ensure_loaded` waiters sleep on, so a racing
    // write can never strand them.
    fetching: bool,
    last_error: Option<String>,
}

/// Process-wide mirror of the backend's expense collection.
///
/// Constructed once in `main` and passed by reference to every consumer.
/// Reads are snapshots of the cached collection; writes go through the
/// backend and mutate the cache only as the backend confirms, except for
/// `remove`, which is optimistic and reconciles by reloading on failure.
/// The full collection is fetched at most once per process unless a failed
/// delete forces a reload.
pub struct ExpenseStore<B: ExpenseBackend> {
    backend: B,
    state: Mutex<CacheState>,
    load_done: Condvar,
}

impl<B: ExpenseBackend> ExpenseStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: Mutex::new(CacheState::default()),
            load_done: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetch the collection if it has not been fetched yet. Callers racing
    /// an in-flight fetch wait for it instead of issuing a second one.
    pub fn ensure_loaded(&self) -> Result<(), StoreError> {
        let mut st = self.lock();
        loop {
            if st.loaded {
                debug!("serving cached expense collection");
                return Ok(());
            }
            if !st.fetching {
                break;
            }
            st = self
                .load_done
                .wait(st)
                .unwrap_or_else(PoisonError::into_inner);
        }
        st.fetching = true;
        st.loading = true;
        st.last_error = None;
        drop(st);

        debug!("fetching expense collection from server");
        let fetched = self.backend.list_all();

        let mut st = self.lock();
        st.fetching = false;
        st.loading = false;
        let out = match fetched {
            Ok(expenses) => {
                st.expenses = expenses;
                st.loaded = true;
                st.last_error = None;
                Ok(())
            }
            Err(err) => {
                st.last_error = Some(err.to_string());
                Err(StoreError::Unchanged(err))
            }
        };
        drop(st);
        self.load_done.notify_all();
        out
    }

    /// Create on the backend, then prepend the materialized record so the
    /// cache stays newest-first.
    pub fn add(&self, draft: &ExpenseDraft) -> Result<Expense, StoreError> {
        {
            let mut st = self.lock();
            st.loading = true;
            st.last_error = None;
        }
        match self.backend.create(draft) {
            Ok(expense) => {
                let mut st = self.lock();
                st.expenses.insert(0, expense.clone());
                st.loading = false;
                Ok(expense)
            }
            Err(err) => {
                let mut st = self.lock();
                st.loading = false;
                st.last_error = Some(err.to_string());
                Err(StoreError::Unchanged(err))
            }
        }
    }

    /// Full-record replace. On success the element keeps its position; on
    /// failure the cache is untouched.
    pub fn edit(&self, id: &str, draft: &ExpenseDraft) -> Result<Expense, StoreError> {
        {
            let mut st = self.lock();
            st.loading = true;
            st.last_error = None;
        }
        match self.backend.update(id, draft) {
            Ok(expense) => {
                let mut st = self.lock();
                if let Some(slot) = st.expenses.iter_mut().find(|e| e.id == id) {
                    *slot = expense.clone();
                }
                st.loading = false;
                Ok(expense)
            }
            Err(err) => {
                let mut st = self.lock();
                st.loading = false;
                st.last_error = Some(err.to_string());
                Err(StoreError::Unchanged(err))
            }
        }
    }

    /// Optimistic delete: the element disappears from the cache before the
    /// backend answers. If the backend refuses, the server's state is
    /// unknown, so the cache is reloaded wholesale rather than patched.
    pub fn remove(&self, id: &str) -> Result<(), StoreError> {
        {
            let mut st = self.lock();
            st.expenses.retain(|e| e.id != id);
            st.loading = true;
            st.last_error = None;
        }
        match self.backend.remove(id) {
            Ok(()) => {
                let mut st = self.lock();
                st.loading = false;
                Ok(())
            }
            Err(err) => {
                {
                    let mut st = self.lock();
                    st.loading = false;
                    st.loaded = false;
                }
                // Best effort; if the reload also fails the cache stays
                // unloaded and the next read fetches again.
                let _ = self.ensure_loaded();
                let mut st = self.lock();
                st.last_error = Some(err.to_string());
                drop(st);
                Err(StoreError::Reloaded(err))
            }
        }
    }

    /// Snapshot of the cached collection, newest first.
    pub fn expenses(&self) -> Vec<Expense> {
        self.lock().expenses.clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.lock().loaded
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    pub fn last_error(&self) -> Option<String> {
        self.lock().last_error.clone()
    }

    pub fn clear_error(&self) {
        self.lock().last_error = None;
    }
}
