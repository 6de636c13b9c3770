//! Pagination - Envelope per le liste paginate

use crate::dtos::query::PageQuery;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub page: u32,
    pub limit: u32,
    pub total_rows: i64,
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Costruisce la pagina a partire dalle righe già limitate e dal conteggio totale
    pub fn new(rows: Vec<T>, query: &PageQuery, total_rows: i64) -> Self {
        match query.window() {
            Some((limit, offset)) => {
                let total = u64::try_from(total_rows).unwrap_or(0);
                let total_pages = total.div_ceil(u64::from(limit));
                Self {
                    rows,
                    page: offset / limit + 1,
                    limit,
                    total_rows,
                    total_pages: u32::try_from(total_pages).unwrap_or(u32::MAX),
                }
            }
            None => {
                let limit = u32::try_from(rows.len()).unwrap_or(u32::MAX);
                Self {
                    rows,
                    page: 1,
                    limit,
                    total_rows,
                    total_pages: 1,
                }
            }
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            rows: self.rows.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            total_rows: self.total_rows,
            total_pages: self.total_pages,
        }
    }
}
