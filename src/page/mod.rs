//! The users page: view state plus the event handlers that drive it.
//!
//! Every mutation happens through `&mut self` on a single task. Network
//! calls are awaited in line; nothing is cancelled, de-duplicated, or
//! retried. An optional [`PageObserver`] sees the state after every
//! transition, which is how the loading indicator reaches the screen while
//! a request is in flight.

pub mod session;

use serde::Serialize;

use crate::api::UserApi;
use crate::constants::{CREATE_FAILED_MESSAGE, FETCH_FAILED_MESSAGE};
use crate::models::{FormError, FormField, NewUserForm, User};

/// Everything the page renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    /// Collection state, in server order.
    pub users: Vec<User>,
    /// True only while a list fetch is outstanding.
    pub loading: bool,
    /// Banner text from the last failure, cleared by the next successful fetch.
    pub error: Option<String>,
    pub draft: NewUserForm,
}

/// Receives the view state after each transition.
pub trait PageObserver: Send {
    fn on_change(&mut self, state: &ViewState);
}

impl<F> PageObserver for F
where
    F: FnMut(&ViewState) + Send,
{
    fn on_change(&mut self, state: &ViewState) {
        self(state)
    }
}

/// Result of a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend accepted the user. The list reload was attempted and the
    /// draft reset, whether or not the reload succeeded.
    Created,
    /// The draft failed local checks; nothing was sent.
    Rejected(FormError),
    /// The backend call failed; the draft is kept.
    Failed,
}

/// A stateful users page bound to a backend.
pub struct UsersPage<A> {
    api: A,
    state: ViewState,
    observer: Option<Box<dyn PageObserver>>,
    mounted: bool,
}

impl<A: UserApi> UsersPage<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ViewState::default(),
            observer: None,
            mounted: false,
        }
    }

    /// Attach an observer that is called after every state change.
    pub fn with_observer(mut self, observer: impl PageObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn users(&self) -> &[User] {
        &self.state.users
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn draft(&self) -> &NewUserForm {
        &self.state.draft
    }

    /// Activate the page. The first call loads the collection; later calls
    /// do nothing and return `false`.
    pub async fn mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        self.load().await;
        true
    }

    /// Fetch the collection and replace the local copy.
    ///
    /// On failure the previous collection is kept and the error banner is
    /// set. Returns whether the fetch succeeded.
    pub async fn load(&mut self) -> bool {
        self.state.loading = true;
        self.notify();

        let ok = match self.api.list_users().await {
            Ok(users) => {
                self.state.users = users;
                self.state.error = None;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch users");
                self.state.error = Some(FETCH_FAILED_MESSAGE.to_string());
                false
            }
        };

        self.state.loading = false;
        self.notify();
        ok
    }

    /// Update one draft field.
    pub fn edit(&mut self, field: FormField, value: impl Into<String>) {
        self.state.draft.set(field, value);
        self.notify();
    }

    /// Submit the draft.
    ///
    /// On success the collection is reloaded and then the draft is reset.
    /// On backend failure the banner is set and the draft is kept as typed.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let body = match self.state.draft.to_new_user() {
            Ok(body) => body,
            Err(err) => {
                tracing::debug!(error = %err, "draft rejected before sending");
                return SubmitOutcome::Rejected(err);
            }
        };

        match self.api.create_user(&body).await {
            Ok(()) => {
                self.load().await;
                self.state.draft.reset();
                self.notify();
                SubmitOutcome::Created
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to create user");
                self.state.error = Some(CREATE_FAILED_MESSAGE.to_string());
                self.notify();
                SubmitOutcome::Failed
            }
        }
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_change(&self.state);
        }
    }
}
