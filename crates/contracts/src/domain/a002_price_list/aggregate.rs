use serde::{Deserialize, Serialize};

use crate::shared::cms::null_to_default;
use crate::shared::number_format::format_money;

/// Строка прейскуранта в том виде, в каком её отдаёт CMS.
///
/// Строки одного раздела связаны по `sectionName`. Строка с `isSubSection`
/// служит заголовком подраздела: код, наименование, единица и цена у неё пустые.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLineItem {
    #[serde(default, deserialize_with = "null_to_default")]
    pub id: i64,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub price: Option<PriceValue>,
    #[serde(rename = "sectionName")]
    pub section_name: String,
    #[serde(rename = "subSectionName", default)]
    pub sub_section_name: Option<String>,
    #[serde(rename = "isSubSection", default, deserialize_with = "null_to_default")]
    pub is_sub_section: bool,
    #[serde(rename = "sortOrder", default, deserialize_with = "null_to_default")]
    pub sort_order: i64,

    // Объединение ячеек задаётся в CMS вручную
    #[serde(rename = "rowSpanCode", default)]
    pub row_span_code: Option<u32>,
    #[serde(rename = "rowSpanName", default)]
    pub row_span_name: Option<u32>,
    #[serde(rename = "rowSpanUnit", default)]
    pub row_span_unit: Option<u32>,
    #[serde(rename = "rowSpanPrice", default)]
    pub row_span_price: Option<u32>,
}

/// Цена: число или произвольный текст («по договору», «от 1 500»)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Number(f64),
    Text(String),
}

impl PriceValue {
    pub fn display(&self) -> String {
        match self {
            PriceValue::Number(n) => format_money(*n),
            PriceValue::Text(s) => s.trim().to_string(),
        }
    }
}

impl PriceLineItem {
    /// Подпись строки-заголовка подраздела
    pub fn sub_section_label(&self) -> String {
        self.sub_section_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
            .trim()
            .to_string()
    }

    pub fn price_text(&self) -> String {
        self.price.as_ref().map(PriceValue::display).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_data_row() {
        let item: PriceLineItem = serde_json::from_str(
            r#"{
                "id": 7,
                "code": "1.1",
                "name": "Замена счётчика",
                "unit": "шт.",
                "price": 2500,
                "sectionName": "Учёт",
                "isSubSection": false,
                "sortOrder": 3,
                "rowSpanName": 2
            }"#,
        )
        .unwrap();
        assert_eq!(item.price_text(), "2 500,00");
        assert_eq!(item.row_span_name, Some(2));
        assert_eq!(item.row_span_code, None);
    }

    #[test]
    fn test_deserialize_header_row_with_nulls() {
        let item: PriceLineItem = serde_json::from_str(
            r#"{
                "sectionName": "Учёт",
                "subSectionName": "Однофазные приборы",
                "isSubSection": true,
                "code": null,
                "price": null,
                "sortOrder": 1
            }"#,
        )
        .unwrap();
        assert!(item.is_sub_section);
        assert_eq!(item.sub_section_label(), "Однофазные приборы");
        assert_eq!(item.price_text(), "");
    }

    #[test]
    fn test_null_flags_do_not_break_page() {
        let page: crate::shared::cms::CmsResponse<Vec<PriceLineItem>> = serde_json::from_str(
            r#"{
                "data": [
                    {"id": 1, "sectionName": "Учёт", "isSubSection": null, "sortOrder": null, "name": "Поверка"},
                    {"id": null, "sectionName": "Учёт", "isSubSection": false, "sortOrder": 2, "name": "Замена"}
                ],
                "meta": {"pagination": {"page": 1, "pageSize": 100, "pageCount": 1, "total": 2}}
            }"#,
        )
        .unwrap();
        assert_eq!(page.data.len(), 2);
        assert!(!page.data[0].is_sub_section);
        assert_eq!(page.data[0].sort_order, 0);
        assert_eq!(page.data[1].id, 0);
    }

    #[test]
    fn test_text_price_kept_as_is() {
        let item: PriceLineItem = serde_json::from_str(
            r#"{"sectionName":"S","price":" по договору "}"#,
        )
        .unwrap();
        assert_eq!(item.price_text(), "по договору");
    }
}
