//! Generic form view-model
//!
//! Submit lifecycle shared by the create screens. Validation rules run
//! at submit time, before any network call is built or issued; a
//! failing rule leaves the draft untouched. Fields reset to their
//! defaults only on a successful submit.

use std::future::Future;

use crate::{ClientError, ClientResult};

/// Submit lifecycle for a form screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Editing,
    Submitting,
    SubmitSucceeded,
    SubmitFailed(String),
}

type Rule<T> = Box<dyn Fn(&T) -> Result<(), String> + Send + Sync>;

/// View-model backing one form screen: the draft record plus its
/// submit-time validation rules.
pub struct FormView<T> {
    draft: T,
    state: FormState,
    rules: Vec<Rule<T>>,
}

impl<T: Default> FormView<T> {
    pub fn new() -> Self {
        Self {
            draft: T::default(),
            state: FormState::Editing,
            rules: Vec::new(),
        }
    }

    /// Add a submit-time rule. Rules run in insertion order and the
    /// first failure wins.
    pub fn with_rule(mut self, rule: impl Fn(&T) -> Result<(), String> + Send + Sync + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    /// Edits are always allowed; no input is disabled while a submit
    /// is in flight.
    pub fn draft_mut(&mut self) -> &mut T {
        &mut self.draft
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Run the rules against the current draft.
    pub fn validate(&self) -> ClientResult<()> {
        for rule in &self.rules {
            if let Err(message) = rule(&self.draft) {
                return Err(ClientError::Validation(message));
            }
        }
        Ok(())
    }

    /// Run the submit pipeline: validate, then await the call built
    /// from the current draft. The draft resets only on success.
    ///
    /// A validation failure is returned without leaving `Editing`;
    /// only a real submission moves through `Submitting` to a
    /// terminal state.
    pub async fn submit<F, Fut, R>(&mut self, submit: F) -> ClientResult<R>
    where
        T: Clone,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ClientResult<R>>,
    {
        if let Err(error) = self.validate() {
            return Err(error);
        }

        self.state = FormState::Submitting;
        match submit(self.draft.clone()).await {
            Ok(value) => {
                self.state = FormState::SubmitSucceeded;
                self.draft = T::default();
                Ok(value)
            }
            Err(error) => {
                self.state = FormState::SubmitFailed(error.to_string());
                Err(error)
            }
        }
    }

    /// Back to `Editing` once the outcome notification has been shown.
    pub fn acknowledge(&mut self) {
        self.state = FormState::Editing;
    }
}

impl<T: Default> Default for FormView<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Common submit-time rules
pub mod rules {
    use chrono::NaiveDate;

    /// Required field: fails when `filled` reports the field empty.
    pub fn required<T>(
        label: &'static str,
        filled: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> impl Fn(&T) -> Result<(), String> + Send + Sync + 'static {
        move |draft| {
            if filled(draft) {
                Ok(())
            } else {
                Err(format!("{label} is required"))
            }
        }
    }

    /// Two fields must match (password confirmation).
    pub fn matching<T>(
        label: &'static str,
        first: impl Fn(&T) -> &str + Send + Sync + 'static,
        second: impl Fn(&T) -> &str + Send + Sync + 'static,
    ) -> impl Fn(&T) -> Result<(), String> + Send + Sync + 'static {
        move |draft| {
            if first(draft) == second(draft) {
                Ok(())
            } else {
                Err(format!("{label} do not match"))
            }
        }
    }

    /// Start date must be strictly before the end date; absent dates
    /// are left to a `required` rule.
    pub fn ordered_dates<T>(
        range: impl Fn(&T) -> (Option<NaiveDate>, Option<NaiveDate>) + Send + Sync + 'static,
    ) -> impl Fn(&T) -> Result<(), String> + Send + Sync + 'static {
        move |draft| match range(draft) {
            (Some(start), Some(end)) if start >= end => {
                Err("End date must be after the start date".to_string())
            }
            _ => Ok(()),
        }
    }

    /// Numeric amount must be greater than zero.
    pub fn positive<T>(
        label: &'static str,
        value: impl Fn(&T) -> f64 + Send + Sync + 'static,
    ) -> impl Fn(&T) -> Result<(), String> + Send + Sync + 'static {
        move |draft| {
            if value(draft) > 0.0 {
                Ok(())
            } else {
                Err(format!("{label} must be greater than zero"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Draft {
        name: String,
        password: String,
        confirm: String,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        amount: f64,
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_missing_required_field_issues_no_call() {
        let called = AtomicBool::new(false);
        let mut form: FormView<Draft> =
            FormView::new().with_rule(rules::required("Name", |d: &Draft| !d.name.trim().is_empty()));

        let result = form
            .submit(|_draft| async {
                called.store(true, Ordering::SeqCst);
                Ok(())
            })
            .await;

        assert!(matches!(result, Err(ClientError::Validation(_))));
        assert!(!called.load(Ordering::SeqCst));
        // Rejected locally, so the machine never left Editing
        assert_eq!(*form.state(), FormState::Editing);
    }

    #[tokio::test]
    async fn test_success_resets_draft() {
        let mut form: FormView<Draft> = FormView::new();
        form.draft_mut().name = "Quarterly review".to_string();

        let result: ClientResult<()> = form.submit(|_draft| async { Ok(()) }).await;

        assert!(result.is_ok());
        assert_eq!(*form.state(), FormState::SubmitSucceeded);
        assert_eq!(*form.draft(), Draft::default());

        form.acknowledge();
        assert_eq!(*form.state(), FormState::Editing);
    }

    #[tokio::test]
    async fn test_failure_keeps_draft() {
        let mut form: FormView<Draft> = FormView::new();
        form.draft_mut().name = "kept".to_string();

        let result: ClientResult<()> = form
            .submit(|_draft| async { Err(ClientError::InvalidResponse("boom".into())) })
            .await;

        assert!(result.is_err());
        assert_eq!(form.draft().name, "kept");
        assert!(matches!(form.state(), FormState::SubmitFailed(_)));
    }

    #[test]
    fn test_password_confirmation_rule() {
        let rule = rules::matching("Passwords", |d: &Draft| &d.password, |d: &Draft| &d.confirm);

        let mut draft = Draft::default();
        draft.password = "secret".to_string();
        draft.confirm = "secre".to_string();
        assert!(rule(&draft).is_err());

        draft.confirm = "secret".to_string();
        assert!(rule(&draft).is_ok());
    }

    #[test]
    fn test_date_order_rule() {
        let rule = rules::ordered_dates(|d: &Draft| (d.start, d.end));

        let mut draft = Draft::default();
        assert!(rule(&draft).is_ok());

        draft.start = Some(date(2024, 7, 1));
        draft.end = Some(date(2024, 1, 1));
        assert!(rule(&draft).is_err());

        draft.end = Some(date(2024, 7, 1));
        assert!(rule(&draft).is_err());

        draft.end = Some(date(2024, 7, 2));
        assert!(rule(&draft).is_ok());
    }

    #[test]
    fn test_positive_amount_rule() {
        let rule = rules::positive("Amount", |d: &Draft| d.amount);

        let mut draft = Draft::default();
        assert!(rule(&draft).is_err());

        draft.amount = 150.0;
        assert!(rule(&draft).is_ok());
    }
}
