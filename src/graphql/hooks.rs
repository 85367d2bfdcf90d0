//! Reactive wrappers that let components issue operations through the shared
//! [`GraphqlClient`].

use std::marker::PhantomData;

use leptos::prelude::*;
use leptos::task::spawn_local;
use send_wrapper::SendWrapper;

use super::{FetchPolicy, GraphqlClient, GraphqlOperation};
use crate::models::UiState;
use crate::services::use_services;

/// Live result of a query. Re-runs cache-first whenever its variables change.
pub struct QueryHandle<Op: GraphqlOperation> {
    pub data: RwSignal<Option<Op::Data>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    variables: Signal<Op::Variables>,
    client: StoredValue<SendWrapper<GraphqlClient>>,
    ui: Option<UiState>,
    /// Id of the newest request; older responses are dropped.
    latest: StoredValue<u64>,
}

impl<Op: GraphqlOperation> Clone for QueryHandle<Op> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Op: GraphqlOperation> Copy for QueryHandle<Op> {}

impl<Op: GraphqlOperation> QueryHandle<Op> {
    pub fn new(
        client: GraphqlClient,
        variables: impl Fn() -> Op::Variables + Send + Sync + 'static,
        ui: Option<UiState>,
    ) -> Self {
        Self {
            data: RwSignal::new(None),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            variables: Signal::derive(variables),
            client: StoredValue::new(SendWrapper::new(client)),
            ui,
            latest: StoredValue::new(0),
        }
    }

    /// Force a server round-trip with the current variables.
    pub fn refetch(&self) {
        self.fetch(FetchPolicy::NetworkOnly);
    }

    /// Start a new request, superseding any still in flight.
    fn begin_request(&self) -> u64 {
        let request = self.latest.get_value() + 1;
        self.latest.set_value(request);
        self.loading.set(true);
        request
    }

    fn is_current(&self, request: u64) -> bool {
        self.latest.get_value() == request
    }

    fn fetch(&self, policy: FetchPolicy) {
        let handle = *self;
        let variables = self.variables.get_untracked();
        let client = self.client.get_value();

        let request = handle.begin_request();
        spawn_local(async move {
            let result = client.query::<Op>(&variables, policy).await;
            if !handle.is_current(request) {
                return;
            }
            match result {
                Ok(data) => {
                    handle.data.set(Some(data));
                    handle.error.set(None);
                }
                Err(e) => {
                    if let Some(ui) = handle.ui {
                        ui.report(&format!("{} failed", Op::NAME), &e);
                    }
                    handle.error.set(Some(e.to_string()));
                }
            }
            handle.loading.set(false);
        });
    }
}

pub fn use_query<Op: GraphqlOperation>(
    variables: impl Fn() -> Op::Variables + Send + Sync + 'static,
) -> QueryHandle<Op> {
    let services = use_services();
    let handle = QueryHandle::<Op>::new(
        services.client.clone(),
        variables,
        use_context::<UiState>(),
    );

    Effect::new(move |_| {
        handle.variables.track();
        handle.fetch(FetchPolicy::CacheFirst);
    });

    handle
}

/// A mutation that can be fired from event handlers.
///
/// While a call is in flight further calls are ignored, so a double click
/// submits once.
pub struct MutationHandle<Op: GraphqlOperation> {
    pub pending: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    client: StoredValue<SendWrapper<GraphqlClient>>,
    ui: Option<UiState>,
    _operation: PhantomData<fn() -> Op>,
}

impl<Op: GraphqlOperation> Clone for MutationHandle<Op> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Op: GraphqlOperation> Copy for MutationHandle<Op> {}

impl<Op: GraphqlOperation> MutationHandle<Op> {
    pub fn new(client: GraphqlClient, ui: Option<UiState>) -> Self {
        Self {
            pending: RwSignal::new(false),
            error: RwSignal::new(None),
            client: StoredValue::new(SendWrapper::new(client)),
            ui,
            _operation: PhantomData,
        }
    }

    /// Claim the in-flight slot. `false` if a call is already pending.
    pub fn try_begin(&self) -> bool {
        if self.pending.get_untracked() {
            false
        } else {
            self.pending.set(true);
            true
        }
    }

    /// Send the mutation; `on_completed` runs after a successful response.
    /// Returns `false` (and sends nothing) while a previous call is pending.
    pub fn run(
        &self,
        variables: Op::Variables,
        on_completed: impl FnOnce(Op::Data) + 'static,
    ) -> bool {
        if !self.try_begin() {
            return false;
        }

        let handle = *self;
        let client = self.client.get_value();
        spawn_local(async move {
            let result = client.mutate::<Op>(&variables).await;
            handle.pending.set(false);
            match result {
                Ok(data) => {
                    handle.error.set(None);
                    on_completed(data);
                }
                Err(e) => {
                    if let Some(ui) = handle.ui {
                        ui.report(&format!("{} failed", Op::NAME), &e);
                    }
                    handle.error.set(Some(e.to_string()));
                }
            }
        });
        true
    }
}

pub fn use_mutation<Op: GraphqlOperation>() -> MutationHandle<Op> {
    let services = use_services();
    MutationHandle::new(services.client.clone(), use_context::<UiState>())
}
