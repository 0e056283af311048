//! Каталог дополнительных услуг: разделы с бланками заявок и таблицами цен.

use serde::{Deserialize, Serialize};

use crate::domain::a002_price_list::{build_price_table, PriceLineItem, PriceTable};
use crate::shared::cms::{null_to_default, Media};
use crate::shared::site_config::SiteConfig;

pub const ADDITIONAL_SERVICES_PATH: &str = "/additionalServices";

/// Раздел каталога. Имя раздела совпадает с `sectionName` строк прейскуранта.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditionalServiceSection {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub sort: i64,
    #[serde(default)]
    pub description: Option<String>,
    /// Бланк заявки (PDF/DOCX), отдаётся как есть
    #[serde(default)]
    pub file: Option<Media>,
}

/// Ссылка на скачивание файла
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLink {
    pub title: String,
    pub href: String,
    /// «PDF», «DOCX» и т.п.; пусто, если расширение неизвестно
    pub kind: String,
}

impl AdditionalServiceSection {
    pub fn file_link(&self, config: &SiteConfig) -> Option<FileLink> {
        let file = self.file.as_ref()?;
        Some(FileLink {
            title: file.name.clone().unwrap_or_else(|| "Бланк заявки".to_string()),
            href: config.media_url(&file.url),
            kind: file
                .ext
                .as_deref()
                .unwrap_or_default()
                .trim_start_matches('.')
                .to_uppercase(),
        })
    }
}

/// Раздел вместе с его таблицей цен (если строки есть)
#[derive(Debug, Clone)]
pub struct ServiceCatalogueEntry {
    pub section: AdditionalServiceSection,
    pub table: Option<PriceTable>,
}

/// Разделы по возрастанию `sort`, при равенстве по имени
pub fn sorted_sections(mut sections: Vec<AdditionalServiceSection>) -> Vec<AdditionalServiceSection> {
    sections.sort_by(|a, b| a.sort.cmp(&b.sort).then_with(|| a.name.cmp(&b.name)));
    sections
}

/// Сопоставляет разделы и строки прейскуранта
pub fn build_catalogue(
    sections: Vec<AdditionalServiceSection>,
    prices: &[PriceLineItem],
) -> Vec<ServiceCatalogueEntry> {
    sorted_sections(sections)
        .into_iter()
        .map(|section| {
            let table = build_price_table(prices, &section.name);
            ServiceCatalogueEntry { section, table }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: i64, name: &str, sort: i64) -> AdditionalServiceSection {
        AdditionalServiceSection {
            id,
            name: name.to_string(),
            sort,
            description: None,
            file: None,
        }
    }

    #[test]
    fn test_sorted_sections() {
        let sorted = sorted_sections(vec![
            section(1, "Б", 2),
            section(2, "В", 1),
            section(3, "А", 2),
        ]);
        let names: Vec<_> = sorted.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["В", "А", "Б"]);
    }

    #[test]
    fn test_catalogue_section_without_prices_has_no_table() {
        let prices: Vec<PriceLineItem> = serde_json::from_str(
            r#"[{"sectionName":"Учёт","code":"1","name":"Поверка","sortOrder":1}]"#,
        )
        .unwrap();
        let catalogue = build_catalogue(
            vec![section(1, "Учёт", 1), section(2, "Испытания", 2)],
            &prices,
        );
        assert!(catalogue[0].table.is_some());
        assert!(catalogue[1].table.is_none());
    }

    #[test]
    fn test_file_link() {
        let mut s = section(1, "Учёт", 1);
        assert!(s.file_link(&SiteConfig::default()).is_none());

        s.file = Some(Media {
            url: "/uploads/zayavka.docx".to_string(),
            name: Some("Заявка".to_string()),
            ext: Some(".docx".to_string()),
        });
        let link = s.file_link(&SiteConfig::default()).unwrap();
        assert_eq!(link.kind, "DOCX");
        assert_eq!(link.href, "https://mosoblenergo.ru/back/uploads/zayavka.docx");
    }
}
