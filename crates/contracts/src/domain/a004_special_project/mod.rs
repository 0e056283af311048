//! Специальные проекты. Коллекция отдаётся в плоском формате.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::cms::{null_to_default, Media};
use crate::shared::date_utils::format_date;
use crate::shared::site_config::SiteConfig;

pub const SPECIAL_PROJECTS_PATH: &str = "/specialProjects";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialProject {
    pub id: i64,
    #[serde(rename = "documentId")]
    pub document_id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub sort: i64,
    #[serde(rename = "dateEvent", default)]
    pub date_event: Option<String>,
    #[serde(rename = "shortDescription", default)]
    pub short_description: Option<String>,
    /// Строка (markdown) или массив блоков rich text
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(rename = "mainPhoto", default)]
    pub main_photo: Option<Media>,
}

impl SpecialProject {
    /// Текст описания по абзацам
    pub fn description_paragraphs(&self) -> Vec<String> {
        match &self.description {
            Some(Value::String(s)) => s
                .split("\n\n")
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect(),
            Some(Value::Array(blocks)) => blocks
                .iter()
                .map(block_text)
                .filter(|p| !p.trim().is_empty())
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Текст блока rich text: конкатенация `text` всех дочерних узлов
fn block_text(block: &Value) -> String {
    let mut out = String::new();
    collect_text(block, &mut out);
    out
}

fn collect_text(node: &Value, out: &mut String) {
    if let Some(t) = node.get("text").and_then(Value::as_str) {
        out.push_str(t);
    }
    if let Some(children) = node.get("children").and_then(Value::as_array) {
        for child in children {
            collect_text(child, out);
        }
    }
}

/// Карточка проекта для списка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialProjectCard {
    pub id: i64,
    pub title: String,
    pub sort: i64,
    /// `DD.MM.YYYY`, если дата события задана
    pub date: Option<String>,
    pub short_description: String,
    pub image: Option<String>,
    pub link: String,
}

impl SpecialProjectCard {
    pub fn from_project(project: &SpecialProject, config: &SiteConfig) -> Self {
        Self {
            id: project.id,
            title: project.title.clone(),
            sort: project.sort,
            date: project.date_event.as_deref().and_then(format_date),
            short_description: project.short_description.clone().unwrap_or_default(),
            image: project.main_photo.as_ref().map(|m| config.media_url(&m.url)),
            link: special_project_path(&project.document_id),
        }
    }
}

pub fn special_project_path(document_id: &str) -> String {
    format!("{}/{}", SPECIAL_PROJECTS_PATH, document_id)
}

/// Карточки по убыванию `sort`
pub fn sort_cards(cards: &mut [SpecialProjectCard]) {
    cards.sort_by(|a, b| b.sort.cmp(&a.sort));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(json: &str) -> SpecialProject {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_card_from_project() {
        let p = project(
            r#"{
                "id": 4,
                "documentId": "abc123",
                "title": "Энергия детям",
                "sort": 10,
                "dateEvent": "2024-06-01",
                "shortDescription": "Экскурсии на подстанции",
                "mainPhoto": {"url": "/uploads/kids.jpg"}
            }"#,
        );
        let card = SpecialProjectCard::from_project(&p, &SiteConfig::default());
        assert_eq!(card.date.as_deref(), Some("01.06.2024"));
        assert_eq!(card.link, "/specialProjects/abc123");
        assert_eq!(
            card.image.as_deref(),
            Some("https://mosoblenergo.ru/back/uploads/kids.jpg")
        );
    }

    #[test]
    fn test_card_without_date_and_photo() {
        let p = project(r#"{"id":1,"documentId":"x","title":"T","dateEvent":null}"#);
        let card = SpecialProjectCard::from_project(&p, &SiteConfig::default());
        assert_eq!(card.date, None);
        assert_eq!(card.image, None);
        assert_eq!(card.short_description, "");
    }

    #[test]
    fn test_null_sort_is_zero() {
        let p = project(r#"{"id":2,"documentId":"y","title":"T","sort":null}"#);
        assert_eq!(p.sort, 0);
        assert_eq!(SpecialProjectCard::from_project(&p, &SiteConfig::default()).sort, 0);
    }

    #[test]
    fn test_sort_cards_descending() {
        let cfg = SiteConfig::default();
        let mut cards: Vec<_> = [1, 30, 7]
            .iter()
            .map(|s| {
                let p = project(&format!(
                    r#"{{"id":{s},"documentId":"d{s}","title":"T{s}","sort":{s}}}"#
                ));
                SpecialProjectCard::from_project(&p, &cfg)
            })
            .collect();
        sort_cards(&mut cards);
        let order: Vec<i64> = cards.iter().map(|c| c.sort).collect();
        assert_eq!(order, vec![30, 7, 1]);
    }

    #[test]
    fn test_description_from_blocks_and_markdown() {
        let blocks = project(
            r#"{"id":1,"documentId":"x","title":"T","description":[
                {"type":"paragraph","children":[{"type":"text","text":"Первый "},{"type":"text","text":"абзац"}]},
                {"type":"paragraph","children":[{"type":"text","text":""}]},
                {"type":"paragraph","children":[{"type":"text","text":"Второй"}]}
            ]}"#,
        );
        assert_eq!(blocks.description_paragraphs(), vec!["Первый абзац", "Второй"]);

        let md = project(r#"{"id":1,"documentId":"x","title":"T","description":"Раз\n\nДва"}"#);
        assert_eq!(md.description_paragraphs(), vec!["Раз", "Два"]);
    }
}
