//! Филиалы и производственные отделения.
//!
//! Коллекция `filialies` отдаётся во вложенном формате (`attributes`, связи
//! через `{ data: [...] }`). Любая вложенная часть может отсутствовать.

use serde::{Deserialize, Serialize};

use crate::shared::cms::{flexible_f64, null_to_default, Relation};

/// Параметры `populate` для страницы филиала
pub const FILIAL_POPULATE: &str = "populate[0]=proizvodstvennye_otdeleniyas\
&populate[1]=kontakties\
&populate[2]=proizvodstvennye_otdeleniyas.kontakties\
&populate[3]=work_schedule\
&populate[4]=proizvodstvennye_otdeleniyas.work_schedule";

/// Иконка метки на карте, лежит в медиатеке CMS
pub const PLACEMARK_ICON_PATH: &str = "/uploads/Point1_0971a3cd12.svg";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Filial {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub work_schedule: Vec<WorkScheduleEntry>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub kontakties: Relation<Contact>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub proizvodstvennye_otdeleniyas: Relation<ProductionDepartment>,
}

/// Производственное отделение филиала
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductionDepartment {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "flexible_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "flexible_f64")]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub work_schedule: Vec<WorkScheduleEntry>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub kontakties: Relation<Contact>,
}

/// Контакт: должность и телефон
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, deserialize_with = "null_to_default")]
    pub post: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub tel: String,
}

impl Contact {
    pub fn tel_href(&self) -> String {
        tel_href(&self.tel)
    }
}

/// Строка графика работы: «Пн-Чт» и «8:00-17:00»
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkScheduleEntry {
    #[serde(default, deserialize_with = "null_to_default")]
    pub days: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub times: String,
}

/// Ссылка `tel:` без пробелов, скобок и дефисов
pub fn tel_href(tel: &str) -> String {
    let digits: String = tel
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", digits)
}

pub fn filial_details_path(id: i64) -> String {
    format!("/filials/{}", id)
}

/// Метка отделения на карте
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPlacemark {
    /// [широта, долгота]
    pub coordinates: [f64; 2],
    pub balloon_content: String,
    pub hint_content: String,
}

impl MapPlacemark {
    /// Ключ элемента списка адресов: адрес и точные координаты
    pub fn list_key(&self) -> (String, [u64; 2]) {
        (self.hint_content.clone(), self.coordinates.map(f64::to_bits))
    }
}

/// Объявление, которое показывается на странице конкретного филиала
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceNotice {
    pub greeting: &'static str,
    pub message: &'static str,
    pub hotline_label: &'static str,
    pub connection_prefix: &'static str,
    pub connection_phone: &'static str,
    pub apology: &'static str,
}

impl Filial {
    pub fn departments(&self) -> impl Iterator<Item = &ProductionDepartment> {
        self.proizvodstvennye_otdeleniyas.items()
    }

    /// Метки для карты; отделения без координат пропускаются
    pub fn placemarks(&self) -> Vec<MapPlacemark> {
        self.departments()
            .filter_map(|d| {
                let (lat, lon) = (d.latitude?, d.longitude?);
                Some(MapPlacemark {
                    coordinates: [lat, lon],
                    balloon_content: format!("<div class=\"ballon-down\">{}</div>", d.name),
                    hint_content: d.address.clone().unwrap_or_default(),
                })
            })
            .collect()
    }

    /// Временное объявление о проблемах с телефонной линией в Мытищах
    pub fn service_notice(&self) -> Option<ServiceNotice> {
        if self.name.trim().to_lowercase() != "мытищинский филиал" {
            return None;
        }
        Some(ServiceNotice {
            greeting: "Уважаемые потребители!",
            message: "В связи с аварийной ситуацией, произошедшей на линии телефонной связи в г.о.Мытищи, дозвон по номеру +7 (495) 586-70-07 временно затруднен. По вопросам аварийных отключений и качеству электроэнергии вы можете обращаться по номеру",
            hotline_label: "«Горячей линии» +7 (495) 99-500-99",
            connection_prefix: ", по вопросам технологического присоединения",
            connection_phone: "+7 (495) 785-00-00",
            apology: "Приносим извинения за доставленные неудобства!",
        })
    }
}
