//! Cart mutations and the price summary.

use super::{HandlerContext, HandlerError};
use crate::domain::cart::{Cart, CartChange};
use crate::domain::foundation::SessionId;
use crate::domain::menu::MenuCatalog;
use crate::domain::notification::Toast;

/// Cart contents together with the panel visibility.
#[derive(Debug, Clone)]
pub struct CartSnapshot {
    pub cart: Cart,
    pub is_open: bool,
}

pub struct CartHandler {
    ctx: HandlerContext,
    catalog: &'static MenuCatalog,
}

impl CartHandler {
    pub fn new(ctx: HandlerContext) -> Self {
        Self {
            ctx,
            catalog: MenuCatalog::standard(),
        }
    }

    pub async fn view(&self, id: &SessionId) -> Result<CartSnapshot, HandlerError> {
        let session = self.ctx.lock_session(id).await?;
        Ok(CartSnapshot {
            cart: session.cart.clone(),
            is_open: session.cart_open,
        })
    }

    /// Adds one unit of a menu item.
    ///
    /// # Errors
    ///
    /// - `Catalog(ItemNotFound)` if the id is not on the menu
    pub async fn add_item(&self, id: &SessionId, item_id: &str) -> Result<CartSnapshot, HandlerError> {
        let item = self.catalog.get(item_id)?;
        let mut session = self.ctx.lock_session(id).await?;
        let change = session.cart.add_item(item);
        self.announce(*id, &change).await;
        Ok(CartSnapshot {
            cart: session.cart.clone(),
            is_open: session.cart_open,
        })
    }

    /// Sets a line's quantity. Zero removes the line; unknown ids are a no-op.
    pub async fn set_quantity(
        &self,
        id: &SessionId,
        item_id: &str,
        quantity: u32,
    ) -> Result<CartSnapshot, HandlerError> {
        let mut session = self.ctx.lock_session(id).await?;
        let change = session.cart.set_quantity(item_id, quantity);
        self.announce(*id, &change).await;
        Ok(CartSnapshot {
            cart: session.cart.clone(),
            is_open: session.cart_open,
        })
    }

    /// Removes a line. Unknown ids are a no-op.
    pub async fn remove_item(&self, id: &SessionId, item_id: &str) -> Result<CartSnapshot, HandlerError> {
        let mut session = self.ctx.lock_session(id).await?;
        let change = session.cart.remove_item(item_id);
        self.announce(*id, &change).await;
        Ok(CartSnapshot {
            cart: session.cart.clone(),
            is_open: session.cart_open,
        })
    }

    pub async fn set_open(&self, id: &SessionId, open: bool) -> Result<CartSnapshot, HandlerError> {
        let mut session = self.ctx.lock_session(id).await?;
        session.cart_open = open;
        if !open {
            // Closing the panel returns the checkout to the cart tab.
            session.checkout.back_to_cart();
        }
        Ok(CartSnapshot {
            cart: session.cart.clone(),
            is_open: session.cart_open,
        })
    }

    async fn announce(&self, id: SessionId, change: &CartChange) {
        if let Some(message) = change.message() {
            self.ctx.toast(id, Toast::success(message)).await;
        }
    }
}
