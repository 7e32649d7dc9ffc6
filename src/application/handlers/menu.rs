//! Menu browsing and the active category tab.

use super::{HandlerContext, HandlerError};
use crate::domain::foundation::SessionId;
use crate::domain::menu::{MenuCatalog, MenuCategory, MenuItem};

pub struct MenuHandler {
    ctx: HandlerContext,
    catalog: &'static MenuCatalog,
}

impl MenuHandler {
    pub fn new(ctx: HandlerContext) -> Self {
        Self {
            ctx,
            catalog: MenuCatalog::standard(),
        }
    }

    pub fn items(&self) -> &'static [MenuItem] {
        self.catalog.items()
    }

    pub fn by_category(&self, category: MenuCategory) -> Vec<&'static MenuItem> {
        self.catalog.by_category(category)
    }

    pub fn item(&self, id: &str) -> Result<&'static MenuItem, HandlerError> {
        Ok(self.catalog.get(id)?)
    }

    pub async fn active_category(&self, id: &SessionId) -> Result<MenuCategory, HandlerError> {
        Ok(self.ctx.lock_session(id).await?.active_category)
    }

    pub async fn select_category(
        &self,
        id: &SessionId,
        category: MenuCategory,
    ) -> Result<MenuCategory, HandlerError> {
        let mut session = self.ctx.lock_session(id).await?;
        session.active_category = category;
        Ok(category)
    }
}
