use serde::{Deserialize, Serialize};

/// Bloque de paginación de la lista de usuarios del admin
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    #[serde(rename = "totalCount")]
    pub total_count: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl Pagination {
    pub fn empty(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            total_count: 0,
            total_pages: 1,
        }
    }

    /// Recalcula a partir del largo de la página cuando el servidor
    /// no envía el bloque de paginación
    pub fn from_page_len(page: u32, limit: u32, len: usize) -> Self {
        let total_count = len as u32;
        let total_pages = if limit == 0 {
            1
        } else {
            ((total_count + limit - 1) / limit).max(1)
        };

        Self {
            page,
            limit,
            total_count,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_con_pagina_vacia() {
        let pagination = Pagination::from_page_len(1, 10, 0);
        assert_eq!(pagination.total_count, 0);
        assert_eq!(pagination.total_pages, 1);
    }

    #[test]
    fn fallback_redondea_hacia_arriba() {
        let pagination = Pagination::from_page_len(2, 10, 25);
        assert_eq!(pagination.page, 2);
        assert_eq!(pagination.total_count, 25);
        assert_eq!(pagination.total_pages, 3);
    }

    #[test]
    fn bloque_del_servidor_se_deserializa() {
        let pagination: Pagination = serde_json::from_value(serde_json::json!({
            "page": 3, "limit": 10, "totalCount": 42, "totalPages": 5
        }))
        .unwrap();

        assert_eq!(pagination.page, 3);
        assert_eq!(pagination.total_pages, 5);
    }
}
