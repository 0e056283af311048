//! Формат ответов контентного API (Strapi).
//!
//! Часть коллекций отдаётся в «плоском» виде (поля прямо в элементе `data`),
//! часть во вложенном, через `attributes` и `{ data: [...] }` для связей.
//! Оба варианта описаны здесь, страницы выбирают нужный.

use serde::{Deserialize, Deserializer, Serialize};

/// Размер страницы при постраничной выгрузке коллекций
pub const DEFAULT_PAGE_SIZE: u32 = 100;

// ============================================================================
// Envelope
// ============================================================================

/// Конверт ответа: `{ "data": ..., "meta": { "pagination": ... } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsResponse<T> {
    pub data: T,
    #[serde(default)]
    pub meta: CmsMeta,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CmsMeta {
    #[serde(default)]
    pub pagination: Option<CmsPagination>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CmsPagination {
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    #[serde(rename = "pageCount")]
    pub page_count: u32,
    #[serde(default)]
    pub total: u32,
}

/// Элемент во вложенном формате: `{ "id": 1, "attributes": { ... } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity<T> {
    pub id: i64,
    pub attributes: T,
}

/// Связь «один ко многим» во вложенном формате: `{ "data": [ ... ] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Relation<T> {
    #[serde(default, deserialize_with = "null_to_default")]
    pub data: Vec<Entity<T>>,
}

impl<T> Default for Relation<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T> Relation<T> {
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.data.iter().map(|e| &e.attributes)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Загруженный файл (изображение, документ)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub ext: Option<String>,
}

// ============================================================================
// Pagination
// ============================================================================

/// Запрос одной страницы коллекции
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn first(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size },
        }
    }

    /// Параметры запроса без ведущего `?` и `&`
    pub fn query(&self) -> String {
        format!(
            "pagination[page]={}&pagination[pageSize]={}",
            self.page, self.page_size
        )
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

/// Следующая страница после полученной; `None`, если выгрузка закончена.
///
/// Страницы запрашиваются строго последовательно: следующая только после
/// того, как ответ на текущую пришёл и в нём есть `pageCount`.
pub fn next_page(current: &CmsPagination) -> Option<PageRequest> {
    if current.page >= current.page_count {
        return None;
    }
    Some(PageRequest {
        page: current.page + 1,
        page_size: if current.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            current.page_size
        },
    })
}

// ============================================================================
// Serde helpers
// ============================================================================

/// `null` в JSON превращается в значение по умолчанию
pub fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Координаты приходят то числом, то строкой (decimal-поле в CMS)
pub fn flexible_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().replace(',', ".").parse().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_page_walks_until_page_count() {
        let p = CmsPagination {
            page: 1,
            page_size: 100,
            page_count: 3,
            total: 250,
        };
        let next = next_page(&p).unwrap();
        assert_eq!(next, PageRequest { page: 2, page_size: 100 });

        let last = CmsPagination { page: 3, ..p };
        assert_eq!(next_page(&last), None);
    }

    #[test]
    fn test_empty_collection_stops_immediately() {
        let p = CmsPagination {
            page: 1,
            page_size: 25,
            page_count: 0,
            total: 0,
        };
        assert_eq!(next_page(&p), None);
    }

    #[test]
    fn test_relation_null_and_missing_data() {
        #[derive(Debug, Deserialize)]
        struct Item {
            name: String,
        }

        let rel: Relation<Item> = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(rel.is_empty());
        let rel: Relation<Item> = serde_json::from_str(r#"{}"#).unwrap();
        assert!(rel.is_empty());
        let rel: Relation<Item> =
            serde_json::from_str(r#"{"data": [{"id": 1, "attributes": {"name": "A"}}]}"#).unwrap();
        assert_eq!(rel.items().next().unwrap().name, "A");
    }

    #[test]
    fn test_page_query() {
        assert_eq!(
            PageRequest::first(50).query(),
            "pagination[page]=1&pagination[pageSize]=50"
        );
        assert_eq!(PageRequest::first(0).page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_envelope_without_meta() {
        let resp: CmsResponse<Vec<i32>> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        assert_eq!(resp.data, vec![1, 2]);
        assert!(resp.meta.pagination.is_none());
    }

    #[derive(Deserialize)]
    struct Point {
        #[serde(default, deserialize_with = "flexible_f64")]
        lat: Option<f64>,
    }

    #[test]
    fn test_flexible_f64() {
        let a: Point = serde_json::from_str(r#"{"lat":55.5}"#).unwrap();
        let b: Point = serde_json::from_str(r#"{"lat":"55,5"}"#).unwrap();
        let c: Point = serde_json::from_str(r#"{"lat":null}"#).unwrap();
        let d: Point = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(a.lat, Some(55.5));
        assert_eq!(b.lat, Some(55.5));
        assert_eq!(c.lat, None);
        assert_eq!(d.lat, None);
    }
}
