//! # Generic Actor Server
//!
//! [`ResourceActor`] owns a map of entities and processes requests one at a time. That
//! sequential loop is what serializes cart mutations: two concurrent `add_item` calls
//! are queued on the channel and applied in arrival order, with no lock around the cart.

use super::client::ResourceClient;
use super::entity::ActorEntity;
use super::error::FrameworkError;
use super::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// Create it with [`ResourceActor::new`], which also returns the cloneable client, then
/// spawn [`ResourceActor::run`] with the entity's context:
///
/// ```rust,ignore
/// let (actor, client) = ResourceActor::<Cart>::new(32);
/// tokio::spawn(actor.run(store.clone()));
/// let cart_id = client.create(CartCreate::default()).await?;
/// ```
///
/// Ids come from an internal `u32` counter starting at 1 and converted with
/// `T::Id::from`. The counter advances even when creation fails, so ids are never
/// reused.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates the actor and its client.
    ///
    /// `buffer_size` is the channel capacity; senders wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// `context` is handed to each entity hook.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = entity_type_name::<T>();
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    let mut item = match T::from_create_params(id.clone(), params) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                    };
                    if let Err(e) = item.on_create(&context).await {
                        warn!(entity_type, %id, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.insert(id.clone(), item);
                    info!(entity_type, %id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(id));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    match item.on_update(update, &context).await {
                        Ok(()) => {
                            info!(entity_type, %id, "Updated");
                            let _ = respond_to.send(Ok(item.clone()));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = item
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

/// Short type name for log fields ("Cart" rather than the full module path).
fn entity_type_name<T>() -> &'static str {
    std::any::type_name::<T>()
        .rsplit("::")
        .next()
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: u32,
        value: i64,
    }

    #[derive(Debug)]
    struct CounterCreate {
        start: i64,
    }

    #[derive(Debug)]
    enum CounterAction {
        Add(i64),
    }

    #[derive(Debug, thiserror::Error, PartialEq)]
    enum CounterError {
        #[error("negative start")]
        NegativeStart,
        #[error("overflow")]
        Overflow,
    }

    #[async_trait]
    impl ActorEntity for Counter {
        type Id = u32;
        type Create = CounterCreate;
        type Update = i64;
        type Action = CounterAction;
        type ActionResult = i64;
        type Context = ();
        type Error = CounterError;

        fn from_create_params(id: u32, params: CounterCreate) -> Result<Self, CounterError> {
            if params.start < 0 {
                return Err(CounterError::NegativeStart);
            }
            Ok(Self {
                id,
                value: params.start,
            })
        }

        async fn on_update(&mut self, update: i64, _ctx: &()) -> Result<(), CounterError> {
            self.value = update;
            Ok(())
        }

        async fn handle_action(
            &mut self,
            action: CounterAction,
            _ctx: &(),
        ) -> Result<i64, CounterError> {
            match action {
                CounterAction::Add(n) => {
                    self.value = self.value.checked_add(n).ok_or(CounterError::Overflow)?;
                    Ok(self.value)
                }
            }
        }
    }

    #[tokio::test]
    async fn full_lifecycle_through_client() {
        let (actor, client) = ResourceActor::<Counter>::new(8);
        let handle = tokio::spawn(actor.run(()));

        let id = client.create(CounterCreate { start: 2 }).await.unwrap();
        assert_eq!(id, 1);

        assert_eq!(client.perform_action(id, CounterAction::Add(3)).await.unwrap(), 5);
        assert_eq!(client.update(id, 10).await.unwrap().value, 10);

        client.delete(id).await.unwrap();
        assert!(client.get(id).await.unwrap().is_none());

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn failed_create_is_not_stored_and_id_is_not_reused() {
        let (actor, client) = ResourceActor::<Counter>::new(8);
        tokio::spawn(actor.run(()));

        let err = client.create(CounterCreate { start: -1 }).await.unwrap_err();
        assert_eq!(
            err.downcast_entity::<CounterError>().ok(),
            Some(CounterError::NegativeStart)
        );
        assert!(client.get(1).await.unwrap().is_none());

        let id = client.create(CounterCreate { start: 0 }).await.unwrap();
        assert_eq!(id, 2);
    }

    #[tokio::test]
    async fn action_on_missing_entity_is_not_found() {
        let (actor, client) = ResourceActor::<Counter>::new(8);
        tokio::spawn(actor.run(()));

        let err = client
            .perform_action(42, CounterAction::Add(1))
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(id) if id == "42"));
    }

    #[test]
    fn entity_type_name_strips_module_path() {
        assert_eq!(entity_type_name::<Counter>(), "Counter");
    }
}
