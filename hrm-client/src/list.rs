//! Generic list view-model
//!
//! Fetch-on-mount, filter, sort and local-delete state shared by the
//! display screens. The visible view is always recomputed from the
//! raw fetched collection, never filtered in place, so re-applying
//! the same filter cannot narrow the result further.

use std::cmp::Ordering;
use std::future::Future;

use shared::models::{Attendance, Bonus, Complaint, Contract, Employee, Job, Project, Team, Warning};

use crate::ClientResult;

/// Record with a backend identity, required for local deletes
pub trait Keyed {
    fn key(&self) -> i64;
}

/// Load state for a list screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Sort direction over the chosen field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;
type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// View-model backing one list screen: the raw fetched records plus a
/// derived filtered/sorted view.
pub struct ListView<T> {
    state: ListState,
    records: Vec<T>,
    visible: Vec<T>,
    filter: Option<Predicate<T>>,
    sort: Option<(Comparator<T>, SortOrder)>,
}

impl<T: Clone> ListView<T> {
    pub fn new() -> Self {
        Self {
            state: ListState::Idle,
            records: Vec::new(),
            visible: Vec::new(),
            filter: None,
            sort: None,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// The raw fetched collection
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// The derived view the table renders
    pub fn visible(&self) -> &[T] {
        &self.visible
    }

    pub fn begin_load(&mut self) {
        self.state = ListState::Loading;
    }

    /// Accept a fetch outcome. Failures keep the previous records but
    /// surface the message for the screen's error banner.
    pub fn finish_load(&mut self, result: ClientResult<Vec<T>>) {
        match result {
            Ok(records) => {
                self.records = records;
                self.state = ListState::Loaded;
                self.recompute();
            }
            Err(error) => {
                self.state = ListState::Failed(error.to_string());
            }
        }
    }

    /// Drive a fetch future through the `Loading` state.
    pub async fn load<F>(&mut self, fetch: F)
    where
        F: Future<Output = ClientResult<Vec<T>>>,
    {
        self.begin_load();
        let result = fetch.await;
        self.finish_load(result);
    }

    /// Install a filter predicate and recompute the view.
    pub fn set_filter(&mut self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) {
        self.filter = Some(Box::new(predicate));
        self.recompute();
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
        self.recompute();
    }

    /// Install a comparator over the chosen field. Descending runs the
    /// comparator reversed; ties keep their fetched order either way.
    pub fn sort_by(
        &mut self,
        comparator: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
        order: SortOrder,
    ) {
        self.sort = Some((Box::new(comparator), order));
        self.recompute();
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
        self.recompute();
    }

    fn recompute(&mut self) {
        let mut view: Vec<T> = match &self.filter {
            Some(predicate) => self.records.iter().filter(|r| predicate(r)).cloned().collect(),
            None => self.records.clone(),
        };

        if let Some((comparator, order)) = &self.sort {
            match order {
                SortOrder::Ascending => view.sort_by(|a, b| comparator(a, b)),
                SortOrder::Descending => view.sort_by(|a, b| comparator(b, a)),
            }
        }

        self.visible = view;
    }
}

impl<T: Clone + Keyed> ListView<T> {
    /// Drop a record locally after a successful DELETE; no re-fetch.
    pub fn remove(&mut self, key: i64) {
        self.records.retain(|r| r.key() != key);
        self.visible.retain(|r| r.key() != key);
    }
}

impl<T: Clone> Default for ListView<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl Keyed for Employee {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for Project {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for Job {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for Contract {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for Team {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for Attendance {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for Warning {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for Bonus {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for Complaint {
    fn key(&self) -> i64 {
        self.id
    }
}
