use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::issue::IssueCategory;

/// Поле формы обратной связи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FullName,
    Email,
    Phone,
    Address,
    IncidentDate,
    DeviceLocationAddress,
    InquiryReason,
    ClaimDateRange,
    ChargingStationAddress,
    ChargingStationId,
    ObjectLocationAddress,
    AccountNumber,
    PhotoMaterials,
    LineCharacteristics,
    ObjectName,
    TechnicalSpecs,
    ApplicationOrContractNumber,
}

/// Вид элемента ввода
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    DateTimeLocal,
    TextArea,
}

impl InputKind {
    /// Значение атрибута `type` для `<input>`; у `<textarea>` его нет
    pub fn html_type(&self) -> Option<&'static str> {
        match self {
            InputKind::Text => Some("text"),
            InputKind::Email => Some("email"),
            InputKind::Tel => Some("tel"),
            InputKind::DateTimeLocal => Some("datetime-local"),
            InputKind::TextArea => None,
        }
    }
}

impl FormField {
    /// Имя поля (атрибут `name`)
    pub fn name(&self) -> &'static str {
        match self {
            FormField::FullName => "fullName",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Address => "address",
            FormField::IncidentDate => "incidentDate",
            FormField::DeviceLocationAddress => "deviceLocationAddress",
            FormField::InquiryReason => "inquiryReason",
            FormField::ClaimDateRange => "claimDateRange",
            FormField::ChargingStationAddress => "chargingStationAddress",
            FormField::ChargingStationId => "chargingStationId",
            FormField::ObjectLocationAddress => "objectLocationAddress",
            FormField::AccountNumber => "accountNumber",
            FormField::PhotoMaterials => "photoMaterials",
            FormField::LineCharacteristics => "lineCharacteristics",
            FormField::ObjectName => "objectName",
            FormField::TechnicalSpecs => "technicalSpecs",
            FormField::ApplicationOrContractNumber => "applicationOrContractNumber",
        }
    }

    /// Вид поля. Причина обращения многострочная только в теме качества электроснабжения.
    pub fn input_kind(&self, category: IssueCategory) -> InputKind {
        match self {
            FormField::Email => InputKind::Email,
            FormField::Phone => InputKind::Tel,
            FormField::IncidentDate => InputKind::DateTimeLocal,
            FormField::InquiryReason if category == IssueCategory::PowerQuality => {
                InputKind::TextArea
            }
            _ => InputKind::Text,
        }
    }

    /// Подпись поля: placeholder в форме и заголовок блока в письме
    pub fn label(&self, category: IssueCategory) -> &'static str {
        match self {
            FormField::FullName => "ФИО заявителя",
            FormField::Email => "адрес электронной почты для обратной связи",
            FormField::Phone => "телефон для обратной связи",
            FormField::Address => match category {
                IssueCategory::MalfunctionOfPowerLines => {
                    "адрес места инцидента/ адрес нахождения объекта (г.о., населенный пункт, улица, номер дома)"
                }
                IssueCategory::TransferOfTheElectricGrid => "адрес нахождения объекта",
                _ => "адрес места инцидента",
            },
            FormField::IncidentDate => "дата и время инцидента",
            FormField::DeviceLocationAddress => "адрес нахождения энергопринимающих устройств",
            FormField::InquiryReason => "причина обращения",
            FormField::ClaimDateRange => "дата/период времени претензии",
            FormField::ChargingStationAddress => {
                "адрес нахождения ЭЗС / адрес предполагаемой установки ЭЗС"
            }
            FormField::ChargingStationId => "номер ЭЗС",
            FormField::ObjectLocationAddress => "адрес нахождения объекта",
            FormField::AccountNumber => "номер лицевого счета (при наличии)",
            FormField::PhotoMaterials => "фотоматериалы",
            FormField::LineCharacteristics => {
                "характеристика линии (магистральная линия/вводной провод в дом)"
            }
            FormField::ObjectName => "наименование объекта (ТП, линии электропередачи и ид.)",
            FormField::TechnicalSpecs => {
                "технические характеристики (класс напряжения, протяженность ВЛ/КЛ, трансформаторная мощность)"
            }
            FormField::ApplicationOrContractNumber => "номер заявки/договора (при наличии)",
        }
    }

    /// Поля с пометкой «(при наличии)» можно оставить пустыми
    pub fn is_required(&self) -> bool {
        !matches!(
            self,
            FormField::AccountNumber | FormField::ApplicationOrContractNumber
        )
    }
}

/// Значения полей формы. Отсутствующее поле равно пустой строке.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFieldValues(HashMap<FormField, String>);

impl FormFieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_label_depends_on_category() {
        assert_eq!(
            FormField::Address.label(IssueCategory::PowerOutage),
            "адрес места инцидента"
        );
        assert_eq!(
            FormField::Address.label(IssueCategory::TransferOfTheElectricGrid),
            "адрес нахождения объекта"
        );
        assert!(FormField::Address
            .label(IssueCategory::MalfunctionOfPowerLines)
            .starts_with("адрес места инцидента/ "));
    }

    #[test]
    fn test_input_kinds() {
        assert_eq!(
            FormField::IncidentDate.input_kind(IssueCategory::PowerOutage).html_type(),
            Some("datetime-local")
        );
        assert_eq!(
            FormField::InquiryReason.input_kind(IssueCategory::PowerQuality),
            InputKind::TextArea
        );
        assert_eq!(
            FormField::InquiryReason.input_kind(IssueCategory::AdditionalServices),
            InputKind::Text
        );
    }

    #[test]
    fn test_values_default_to_empty() {
        let values = FormFieldValues::new().with(FormField::FullName, "Иванов");
        assert_eq!(values.get(FormField::FullName), "Иванов");
        assert_eq!(values.get(FormField::Phone), "");
    }

    #[test]
    fn test_field_names_are_camel_case_wire_names() {
        let json = serde_json::to_string(&FormField::ApplicationOrContractNumber).unwrap();
        assert_eq!(json, format!("\"{}\"", FormField::ApplicationOrContractNumber.name()));
    }
}
