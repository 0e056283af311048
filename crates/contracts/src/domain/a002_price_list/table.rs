use serde::{Deserialize, Serialize};

use super::aggregate::PriceLineItem;

/// Заголовки столбцов таблицы прейскуранта
pub const PRICE_COLUMNS: [&str; 4] = [
    "Код",
    "Наименование услуги",
    "Ед. изм.",
    "Стоимость, руб. (с НДС)",
];

/// Ячейка таблицы. `row_span == 0` или `col_span == 0`: ячейка перекрыта
/// соседней и не выводится.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceCell {
    pub text: String,
    pub row_span: u32,
    pub col_span: u32,
}

impl PriceCell {
    fn data(text: String, row_span: Option<u32>) -> Self {
        Self {
            text,
            row_span: row_span.unwrap_or(1),
            col_span: 1,
        }
    }

    fn suppressed() -> Self {
        Self {
            text: String::new(),
            row_span: 1,
            col_span: 0,
        }
    }

    pub fn is_rendered(&self) -> bool {
        self.row_span > 0 && self.col_span > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceRow {
    /// Заголовок подраздела во всю ширину таблицы
    Header { label: String },
    Data { cells: [PriceCell; 4] },
}

impl PriceRow {
    /// Четыре ячейки строки; у заголовка первая растянута на все столбцы,
    /// остальные подавлены (`col_span = 0`).
    pub fn cells(&self) -> [PriceCell; 4] {
        match self {
            PriceRow::Header { label } => [
                PriceCell {
                    text: label.clone(),
                    row_span: 1,
                    col_span: PRICE_COLUMNS.len() as u32,
                },
                PriceCell::suppressed(),
                PriceCell::suppressed(),
                PriceCell::suppressed(),
            ],
            PriceRow::Data { cells } => cells.clone(),
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, PriceRow::Header { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    pub section_name: String,
    pub rows: Vec<PriceRow>,
}

/// Собирает таблицу раздела из общего списка строк прейскуранта.
///
/// Строки отбираются по `sectionName` и сортируются по `sortOrder` (сортировка
/// устойчивая). Объединение ячеек не вычисляется: `rowSpan*` переносятся из
/// CMS как есть, отсутствующее значение равно 1. Если строк раздела нет,
/// таблицы нет.
pub fn build_price_table(items: &[PriceLineItem], section_name: &str) -> Option<PriceTable> {
    let mut section: Vec<&PriceLineItem> = items
        .iter()
        .filter(|i| i.section_name == section_name)
        .collect();

    if section.is_empty() {
        return None;
    }

    section.sort_by_key(|i| i.sort_order);

    let rows = section
        .into_iter()
        .map(|item| {
            if item.is_sub_section {
                PriceRow::Header {
                    label: item.sub_section_label(),
                }
            } else {
                PriceRow::Data {
                    cells: [
                        PriceCell::data(item.code.clone().unwrap_or_default(), item.row_span_code),
                        PriceCell::data(item.name.clone().unwrap_or_default(), item.row_span_name),
                        PriceCell::data(item.unit.clone().unwrap_or_default(), item.row_span_unit),
                        PriceCell::data(item.price_text(), item.row_span_price),
                    ],
                }
            }
        })
        .collect();

    Some(PriceTable {
        section_name: section_name.to_string(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_price_list::aggregate::PriceValue;

    fn data(section: &str, sort: i64, code: &str) -> PriceLineItem {
        PriceLineItem {
            id: sort,
            code: Some(code.to_string()),
            name: Some(format!("Услуга {}", code)),
            unit: Some("шт.".to_string()),
            price: Some(PriceValue::Number(100.0)),
            section_name: section.to_string(),
            sub_section_name: None,
            is_sub_section: false,
            sort_order: sort,
            row_span_code: None,
            row_span_name: None,
            row_span_unit: None,
            row_span_price: None,
        }
    }

    fn header(section: &str, sort: i64, label: &str) -> PriceLineItem {
        PriceLineItem {
            code: None,
            name: None,
            unit: None,
            price: None,
            sub_section_name: Some(label.to_string()),
            is_sub_section: true,
            ..data(section, sort, "")
        }
    }

    #[test]
    fn test_no_rows_for_section_means_no_table() {
        let items = vec![data("Учёт", 1, "1.1")];
        assert_eq!(build_price_table(&items, "Подключение"), None);
        assert_eq!(build_price_table(&[], "Учёт"), None);
    }

    #[test]
    fn test_rows_sorted_and_headers_in_place() {
        let items = vec![
            data("Учёт", 4, "1.2"),
            header("Учёт", 1, "Однофазные"),
            data("Другое", 2, "9.9"),
            data("Учёт", 2, "1.1"),
            header("Учёт", 3, "Трёхфазные"),
        ];
        let table = build_price_table(&items, "Учёт").unwrap();

        let kinds: Vec<String> = table
            .rows
            .iter()
            .map(|r| match r {
                PriceRow::Header { label } => format!("H:{}", label),
                PriceRow::Data { cells } => format!("D:{}", cells[0].text),
            })
            .collect();
        assert_eq!(kinds, vec!["H:Однофазные", "D:1.1", "H:Трёхфазные", "D:1.2"]);
    }

    #[test]
    fn test_header_spans_all_columns_and_suppresses_rest() {
        let table = build_price_table(&[header("S", 1, "Подраздел")], "S").unwrap();
        let cells = table.rows[0].cells();
        assert_eq!(cells[0].col_span, 4);
        assert_eq!(cells[0].text, "Подраздел");
        assert!(cells[1..].iter().all(|c| c.col_span == 0 && !c.is_rendered()));
    }

    #[test]
    fn test_row_spans_passed_through() {
        let mut first = data("S", 1, "2.1");
        first.row_span_price = Some(2);
        first.row_span_unit = Some(2);
        let mut second = data("S", 2, "2.2");
        second.row_span_price = Some(0);
        second.row_span_unit = Some(0);

        let table = build_price_table(&[second, first], "S").unwrap();
        let first_cells = table.rows[0].cells();
        let second_cells = table.rows[1].cells();

        assert_eq!(first_cells[0].row_span, 1);
        assert_eq!(first_cells[3].row_span, 2);
        assert!(!second_cells[2].is_rendered());
        assert!(!second_cells[3].is_rendered());
        assert!(second_cells[1].is_rendered());
    }

    #[test]
    fn test_equal_sort_order_keeps_cms_order() {
        let items = vec![data("S", 5, "a"), data("S", 5, "b"), data("S", 1, "c")];
        let table = build_price_table(&items, "S").unwrap();
        let codes: Vec<_> = table.rows.iter().map(|r| r.cells()[0].text.clone()).collect();
        assert_eq!(codes, vec!["c", "a", "b"]);
    }
}
