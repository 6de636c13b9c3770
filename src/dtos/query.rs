//! Query DTOs - Parametri di paginazione e filtro

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 15;
pub const MAX_PAGE_SIZE: u32 = 100;

/// ?page=&limit= ; senza nessuno dei due si ritorna la lista completa
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PageQuery {
    /// `(limit, offset)` da usare nella query, `None` se non è richiesta paginazione
    pub fn window(&self) -> Option<(u32, u32)> {
        if self.page.is_none() && self.limit.is_none() {
            return None;
        }
        let limit = self
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        let page = self.page.unwrap_or(1).max(1);
        Some((limit, (page - 1).saturating_mul(limit)))
    }
}

/// ?moduleId=&page=&limit=
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct ModuleFilterQuery {
    pub module_id: i32,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ModuleFilterQuery {
    pub fn paging(&self) -> PageQuery {
        PageQuery {
            page: self.page,
            limit: self.limit,
        }
    }
}
