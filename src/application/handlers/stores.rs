//! Store locator: city filter, mocked map, directions and call links.

use super::{HandlerContext, HandlerError};
use crate::domain::foundation::SessionId;
use crate::domain::notification::Toast;
use crate::domain::stores::{City, CityFilter, MapView, Store, StoreDirectory};

/// A browser-native link handed back to the client, with the toast text
/// shown when it is followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLink {
    pub url: String,
    pub message: String,
}

/// Per-session locator state.
#[derive(Debug, Clone)]
pub struct LocatorSnapshot {
    pub city: CityFilter,
    pub map: MapView,
    pub stores: Vec<Store>,
}

pub struct StoreHandler {
    ctx: HandlerContext,
    directory: &'static StoreDirectory,
}

impl StoreHandler {
    pub fn new(ctx: HandlerContext) -> Self {
        Self {
            ctx,
            directory: StoreDirectory::standard(),
        }
    }

    pub fn cities(&self) -> &'static [City] {
        self.directory.cities()
    }

    /// Stores in one city, or every store for `all`.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for a city the directory does not know
    pub fn list(&self, filter: &CityFilter) -> Result<Vec<&'static Store>, HandlerError> {
        if !self.directory.is_known(filter) {
            return Err(HandlerError::invalid_input(format!(
                "Unknown city: {}",
                filter.as_str()
            )));
        }
        Ok(self.directory.filter(filter))
    }

    pub fn store(&self, store_id: &str) -> Result<&'static Store, HandlerError> {
        self.directory
            .find(store_id)
            .ok_or_else(|| HandlerError::StoreNotFound(store_id.to_string()))
    }

    pub fn directions_link(&self, store_id: &str) -> Result<StoreLink, HandlerError> {
        let store = self.store(store_id)?;
        Ok(StoreLink {
            url: store.directions_url(),
            message: store.directions_message(),
        })
    }

    pub fn call_link(&self, store_id: &str) -> Result<StoreLink, HandlerError> {
        let store = self.store(store_id)?;
        Ok(StoreLink {
            url: store.call_link(),
            message: store.call_message(),
        })
    }

    /// "Get directions" clicked in a session: toast and return the link.
    pub async fn open_directions(
        &self,
        id: &SessionId,
        store_id: &str,
    ) -> Result<StoreLink, HandlerError> {
        let link = self.directions_link(store_id)?;
        drop(self.ctx.lock_session(id).await?);
        self.ctx.toast(*id, Toast::success(link.message.clone())).await;
        Ok(link)
    }

    /// "Call" clicked in a session: toast and return the `tel:` link.
    pub async fn place_call(&self, id: &SessionId, store_id: &str) -> Result<StoreLink, HandlerError> {
        let link = self.call_link(store_id)?;
        drop(self.ctx.lock_session(id).await?);
        self.ctx.toast(*id, Toast::success(link.message.clone())).await;
        Ok(link)
    }

    pub async fn locator(&self, id: &SessionId) -> Result<LocatorSnapshot, HandlerError> {
        let session = self.ctx.lock_session(id).await?;
        Ok(self.snapshot(&session.selected_city, &session.map))
    }

    pub async fn select_city(
        &self,
        id: &SessionId,
        filter: CityFilter,
    ) -> Result<LocatorSnapshot, HandlerError> {
        self.list(&filter)?;
        let mut session = self.ctx.lock_session(id).await?;
        session.selected_city = filter;
        Ok(self.snapshot(&session.selected_city, &session.map))
    }

    /// Clicking a map pin selects it; clicking it again clears the selection.
    pub async fn toggle_pin(
        &self,
        id: &SessionId,
        store_id: &str,
    ) -> Result<LocatorSnapshot, HandlerError> {
        self.store(store_id)?;
        let mut session = self.ctx.lock_session(id).await?;
        session.map.toggle_select(store_id);
        Ok(self.snapshot(&session.selected_city, &session.map))
    }

    pub async fn hover_pin(
        &self,
        id: &SessionId,
        store_id: Option<&str>,
    ) -> Result<LocatorSnapshot, HandlerError> {
        if let Some(store_id) = store_id {
            self.store(store_id)?;
        }
        let mut session = self.ctx.lock_session(id).await?;
        session.map.hover(store_id);
        Ok(self.snapshot(&session.selected_city, &session.map))
    }

    fn snapshot(&self, city: &CityFilter, map: &MapView) -> LocatorSnapshot {
        LocatorSnapshot {
            city: city.clone(),
            map: map.clone(),
            stores: self.directory.filter(city).into_iter().cloned().collect(),
        }
    }
}
