//! # Mock Framework
//!
//! Test doubles for a [`ResourceActor`](super::ResourceActor), so a client or an actor
//! that depends on another actor can be tested without spawning the real dependency.
//!
//! Two styles are available:
//!
//! - **Expectations** with [`MockClient`]: queue the replies up front, hand out
//!   [`MockClient::client`], then call [`MockClient::verify`].
//! - **Manual** with [`create_mock_client`] and the `expect_*` helpers: receive each
//!   request yourself and answer through its responder.
//!
//! ```rust,ignore
//! let mut carts = MockClient::<Cart>::new();
//! carts.expect_action(CartId(1)).return_ok(CartActionResult::Summary(summary));
//! carts.expect_action(CartId(1)).return_ok(CartActionResult::Release(empty));
//!
//! let cart_client = CartClient::new(carts.client());
//! // ... drive the order actor ...
//! carts.verify();
//! ```

use super::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest, Response};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::mpsc;

enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

impl<T: ActorEntity> Expectation<T> {
    fn describe(&self) -> String {
        match self {
            Expectation::Get { id, .. } => format!("Get({id})"),
            Expectation::Create { .. } => "Create".to_string(),
            Expectation::Update { id, .. } => format!("Update({id})"),
            Expectation::Delete { id, .. } => format!("Delete({id})"),
            Expectation::Action { id, .. } => format!("Action({id})"),
        }
    }
}

struct MockState<T: ActorEntity> {
    expectations: VecDeque<Expectation<T>>,
    failures: Vec<String>,
}

type Shared<T> = Arc<Mutex<MockState<T>>>;

/// A mock actor that answers requests from a queue of expectations.
///
/// Expectations are consumed in order. A request whose kind or id does not match the
/// next expectation is answered with [`FrameworkError::NotFound`] and recorded as a
/// failure, which [`MockClient::verify`] reports.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    state: Shared<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let state: Shared<T> = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            failures: Vec::new(),
        }));
        let task_state = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = task_state.lock().expectations.pop_front();
                if let Some(failure) = answer(request, next) {
                    task_state.lock().failures.push(failure);
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |response| Expectation::Action { id, response })
    }

    fn builder<R>(
        &mut self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            state: self.state.clone(),
            make: Box::new(make),
        }
    }

    /// Panics if an expectation is left over or a request did not match.
    pub fn verify(&self) {
        let state = self.state.lock();
        if !state.failures.is_empty() {
            panic!("Unexpected requests: {}", state.failures.join(", "));
        }
        if !state.expectations.is_empty() {
            let pending: Vec<String> = state.expectations.iter().map(|e| e.describe()).collect();
            panic!(
                "Not all expectations were met. {} remaining: {}",
                pending.len(),
                pending.join(", ")
            );
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Finishes an expectation with the reply the mock should send.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    state: Shared<T>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.make)(response);
        self.state.lock().expectations.push_back(expectation);
    }
}

/// Answers `request` from `expectation`; returns a failure description on mismatch.
fn answer<T: ActorEntity>(
    request: ResourceRequest<T>,
    expectation: Option<Expectation<T>>,
) -> Option<String> {
    fn reply<R>(respond_to: Response<R>, response: Result<R, FrameworkError>) -> Option<String> {
        let _ = respond_to.send(response);
        None
    }
    fn reject<R>(respond_to: Response<R>, got: String, wanted: Option<String>) -> Option<String> {
        let _ = respond_to.send(Err(FrameworkError::NotFound(got.clone())));
        Some(match wanted {
            Some(wanted) => format!("got {got}, expected {wanted}"),
            None => format!("got {got}, expected nothing"),
        })
    }

    let wanted = expectation.as_ref().map(Expectation::describe);
    match (request, expectation) {
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response }))
            if id == want =>
        {
            reply(respond_to, response)
        }
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            reply(respond_to, response)
        }
        (
            ResourceRequest::Update { id, respond_to, .. },
            Some(Expectation::Update { id: want, response }),
        ) if id == want => reply(respond_to, response),
        (
            ResourceRequest::Delete { id, respond_to },
            Some(Expectation::Delete { id: want, response }),
        ) if id == want => reply(respond_to, response),
        (
            ResourceRequest::Action { id, respond_to, .. },
            Some(Expectation::Action { id: want, response }),
        ) if id == want => reply(respond_to, response),
        (ResourceRequest::Get { id, respond_to }, _) => {
            reject(respond_to, format!("Get({id})"), wanted)
        }
        (ResourceRequest::Create { respond_to, .. }, _) => {
            reject(respond_to, "Create".to_string(), wanted)
        }
        (ResourceRequest::Update { id, respond_to, .. }, _) => {
            reject(respond_to, format!("Update({id})"), wanted)
        }
        (ResourceRequest::Delete { id, respond_to }, _) => {
            reject(respond_to, format!("Delete({id})"), wanted)
        }
        (ResourceRequest::Action { id, respond_to, .. }, _) => {
            reject(respond_to, format!("Action({id})"), wanted)
        }
    }
}

// =============================================================================
// MANUAL HELPERS
// =============================================================================

/// Creates a client whose requests arrive on the returned receiver.
///
/// Useful when a test wants to inspect the payload (e.g. assert that `add_item` sent
/// `CartAction::AddItem` with the resolved price) before choosing a reply.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message, if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message, if it is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
