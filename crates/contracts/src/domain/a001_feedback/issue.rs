use serde::{Deserialize, Serialize};

use super::field::FormField;

// ============================================================================
// Issue category
// ============================================================================

/// Тема обращения, выбираемая первой в форме обратной связи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueCategory {
    #[serde(rename = "powerOutage")]
    PowerOutage,
    #[serde(rename = "powerQuality")]
    PowerQuality,
    #[serde(rename = "carElectricChargingStations")]
    CarElectricChargingStations,
    #[serde(rename = "electricitymeteringdevices")]
    ElectricityMeteringDevices,
    #[serde(rename = "malfunctionofpowerlines")]
    MalfunctionOfPowerLines,
    #[serde(rename = "transferoftheelectricgrid")]
    TransferOfTheElectricGrid,
    #[serde(rename = "connectionelectricnetworks")]
    ConnectionElectricNetworks,
    #[serde(rename = "additionalservices")]
    AdditionalServices,
    #[serde(rename = "other")]
    Other,
}

/// Тема письма, если тема обращения не выбрана
pub const FALLBACK_SUBJECT: &str = "Обращение в службу поддержки";

impl IssueCategory {
    /// Код темы (значение `<option>`)
    pub fn code(&self) -> &'static str {
        match self {
            IssueCategory::PowerOutage => "powerOutage",
            IssueCategory::PowerQuality => "powerQuality",
            IssueCategory::CarElectricChargingStations => "carElectricChargingStations",
            IssueCategory::ElectricityMeteringDevices => "electricitymeteringdevices",
            IssueCategory::MalfunctionOfPowerLines => "malfunctionofpowerlines",
            IssueCategory::TransferOfTheElectricGrid => "transferoftheelectricgrid",
            IssueCategory::ConnectionElectricNetworks => "connectionelectricnetworks",
            IssueCategory::AdditionalServices => "additionalservices",
            IssueCategory::Other => "other",
        }
    }

    /// Название темы для письма и окна предпросмотра
    pub fn display_name(&self) -> &'static str {
        match self {
            IssueCategory::PowerOutage => "Отключение электроэнергии",
            IssueCategory::PowerQuality => "Качество электроснабжения",
            IssueCategory::CarElectricChargingStations => "Автомобильные электрозарядные станции",
            IssueCategory::ElectricityMeteringDevices => {
                "Приборы учета электроэнергии (в т. ч. в садоводческих/огороднических некоммерческих товариществах)"
            }
            IssueCategory::MalfunctionOfPowerLines => "Неисправности линий электропередач",
            IssueCategory::TransferOfTheElectricGrid => {
                "Передача электросетевого хозяйства на баланс электросетевой организации"
            }
            IssueCategory::ConnectionElectricNetworks => {
                "Технологическое присоединение к электрическим сетям"
            }
            IssueCategory::AdditionalServices => "Дополнительные услуги",
            IssueCategory::Other => "Другое",
        }
    }

    /// Текст пункта в выпадающем списке.
    ///
    /// Совпадает с `display_name`, кроме «Другое», которое в списке зовётся «Прочее».
    pub fn option_label(&self) -> &'static str {
        match self {
            IssueCategory::Other => "Прочее",
            other => other.display_name(),
        }
    }

    pub fn all() -> Vec<IssueCategory> {
        vec![
            IssueCategory::PowerOutage,
            IssueCategory::PowerQuality,
            IssueCategory::CarElectricChargingStations,
            IssueCategory::ElectricityMeteringDevices,
            IssueCategory::MalfunctionOfPowerLines,
            IssueCategory::TransferOfTheElectricGrid,
            IssueCategory::ConnectionElectricNetworks,
            IssueCategory::AdditionalServices,
            IssueCategory::Other,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }

    /// Подтемы; пусто для тем без второго уровня
    pub fn sub_issues(&self) -> &'static [SubIssue] {
        match self {
            IssueCategory::CarElectricChargingStations => {
                &[SubIssue::Malfunction, SubIssue::Installation]
            }
            IssueCategory::MalfunctionOfPowerLines => &[
                SubIssue::ZoneMalfunction,
                SubIssue::Pruning,
                SubIssue::WireBreak,
                SubIssue::PillarCondition,
            ],
            _ => &[],
        }
    }

    pub fn has_sub_issues(&self) -> bool {
        !self.sub_issues().is_empty()
    }

    /// Поля, видимые для темы (и подтемы), в порядке вывода.
    ///
    /// Для тем с подтемами поля появляются только после выбора подтемы.
    pub fn visible_fields(&self, sub_issue: Option<SubIssue>) -> Vec<FormField> {
        use FormField::*;

        if self.has_sub_issues() && sub_issue.is_none() {
            return Vec::new();
        }

        let mut fields = vec![FullName, Email, Phone];
        match self {
            IssueCategory::PowerOutage => fields.extend([Address, IncidentDate]),
            IssueCategory::PowerQuality => {
                fields.extend([DeviceLocationAddress, InquiryReason, ClaimDateRange])
            }
            IssueCategory::CarElectricChargingStations => {
                fields.push(ChargingStationAddress);
                if sub_issue == Some(SubIssue::Malfunction) {
                    fields.push(ChargingStationId);
                }
            }
            IssueCategory::ElectricityMeteringDevices => {
                fields.extend([ObjectLocationAddress, AccountNumber])
            }
            IssueCategory::MalfunctionOfPowerLines => fields.extend([
                Address,
                IncidentDate,
                InquiryReason,
                PhotoMaterials,
                LineCharacteristics,
            ]),
            IssueCategory::TransferOfTheElectricGrid => {
                fields.extend([ObjectName, Address, TechnicalSpecs])
            }
            IssueCategory::ConnectionElectricNetworks => fields.push(ApplicationOrContractNumber),
            IssueCategory::AdditionalServices => fields.push(InquiryReason),
            IssueCategory::Other => {}
        }
        fields
    }

    /// Справка под полями формы (только для дополнительных услуг)
    pub fn hint(&self) -> Option<AdditionalServicesHint> {
        match self {
            IssueCategory::AdditionalServices => Some(AdditionalServicesHint::default()),
            _ => None,
        }
    }
}

/// Справка о дополнительных услугах: текст со ссылкой на раздел и контакты
#[derive(Debug, Clone, PartialEq)]
pub struct AdditionalServicesHint {
    pub intro: &'static str,
    pub catalogue_url: &'static str,
    pub instructions: &'static str,
    pub phones: &'static str,
    pub email: &'static str,
}

impl Default for AdditionalServicesHint {
    fn default() -> Self {
        Self {
            intro: "С полным списком и условиями оказания дополнительных услуг, а также с формами заявок и перечнем обязательных документов для оказания услуг Вы можете ознакомиться в разделе «Потребителям» по ссылке:",
            catalogue_url: "https://mosoblenergo.ru/additionalServices",
            instructions: "В случае заинтересованности прикрепите заполненную заявку на дополнительную услугу к письму. Если у Вас остались вопросы свяжитесь с нами по тел.:",
            phones: "8 (495) 780-39-62 доб. 3327, доб. 1096",
            email: "uslugi@mosoblenergo.ru",
        }
    }
}

// ============================================================================
// Sub issue
// ============================================================================

/// Подтема обращения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubIssue {
    // Автомобильные электрозарядные станции
    #[serde(rename = "malfunction")]
    Malfunction,
    #[serde(rename = "installation")]
    Installation,
    // Неисправности линий электропередач
    #[serde(rename = "zoneMalfunction")]
    ZoneMalfunction,
    #[serde(rename = "pruning")]
    Pruning,
    #[serde(rename = "wireBreak")]
    WireBreak,
    #[serde(rename = "pillarCondition")]
    PillarCondition,
}

/// Подпись подтемы, которую не удалось распознать
pub const SUB_ISSUE_NOT_SPECIFIED: &str = "Не указано";

impl SubIssue {
    pub fn code(&self) -> &'static str {
        match self {
            SubIssue::Malfunction => "malfunction",
            SubIssue::Installation => "installation",
            SubIssue::ZoneMalfunction => "zoneMalfunction",
            SubIssue::Pruning => "pruning",
            SubIssue::WireBreak => "wireBreak",
            SubIssue::PillarCondition => "pillarCondition",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubIssue::Malfunction => "Неисправность ЭЗС",
            SubIssue::Installation => "Установка ЭЗС",
            SubIssue::ZoneMalfunction => "Охранные зоны",
            SubIssue::Pruning => "Опиловка",
            SubIssue::WireBreak => "Обрыв проводов",
            SubIssue::PillarCondition => "Состояние опор",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        [
            SubIssue::Malfunction,
            SubIssue::Installation,
            SubIssue::ZoneMalfunction,
            SubIssue::Pruning,
            SubIssue::WireBreak,
            SubIssue::PillarCondition,
        ]
        .into_iter()
        .find(|s| s.code() == code)
    }
}

/// Подпись подтемы неисправности ЛЭП для строки «Выбранная подтема».
///
/// Распознаются только подтемы линий электропередач, для всего остального «Не указано».
pub fn power_line_sub_issue_label(code: &str) -> &'static str {
    SubIssue::from_code(code)
        .filter(|s| {
            IssueCategory::MalfunctionOfPowerLines
                .sub_issues()
                .contains(s)
        })
        .map(|s| s.label())
        .unwrap_or(SUB_ISSUE_NOT_SPECIFIED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use FormField::*;

    #[test]
    fn test_codes_roundtrip() {
        for c in IssueCategory::all() {
            assert_eq!(IssueCategory::from_code(c.code()), Some(c));
        }
        assert_eq!(IssueCategory::from_code(""), None);
        assert_eq!(IssueCategory::from_code("PowerOutage"), None);
    }

    #[test]
    fn test_other_label_differs_in_select() {
        assert_eq!(IssueCategory::Other.display_name(), "Другое");
        assert_eq!(IssueCategory::Other.option_label(), "Прочее");
        assert_eq!(
            IssueCategory::PowerOutage.option_label(),
            IssueCategory::PowerOutage.display_name()
        );
    }

    #[test]
    fn test_visible_fields_per_category() {
        let common = [FullName, Email, Phone];
        let expect = |extra: &[FormField]| {
            let mut v = common.to_vec();
            v.extend_from_slice(extra);
            v
        };

        assert_eq!(
            IssueCategory::PowerOutage.visible_fields(None),
            expect(&[Address, IncidentDate])
        );
        assert_eq!(
            IssueCategory::PowerQuality.visible_fields(None),
            expect(&[DeviceLocationAddress, InquiryReason, ClaimDateRange])
        );
        assert_eq!(
            IssueCategory::ElectricityMeteringDevices.visible_fields(None),
            expect(&[ObjectLocationAddress, AccountNumber])
        );
        assert_eq!(
            IssueCategory::TransferOfTheElectricGrid.visible_fields(None),
            expect(&[ObjectName, Address, TechnicalSpecs])
        );
        assert_eq!(
            IssueCategory::ConnectionElectricNetworks.visible_fields(None),
            expect(&[ApplicationOrContractNumber])
        );
        assert_eq!(
            IssueCategory::AdditionalServices.visible_fields(None),
            expect(&[InquiryReason])
        );
        assert_eq!(IssueCategory::Other.visible_fields(None), expect(&[]));
    }

    #[test]
    fn test_branching_categories_wait_for_sub_issue() {
        assert!(IssueCategory::CarElectricChargingStations
            .visible_fields(None)
            .is_empty());
        assert!(IssueCategory::MalfunctionOfPowerLines
            .visible_fields(None)
            .is_empty());

        assert_eq!(
            IssueCategory::CarElectricChargingStations.visible_fields(Some(SubIssue::Installation)),
            vec![FullName, Email, Phone, ChargingStationAddress]
        );
        assert_eq!(
            IssueCategory::CarElectricChargingStations.visible_fields(Some(SubIssue::Malfunction)),
            vec![FullName, Email, Phone, ChargingStationAddress, ChargingStationId]
        );
        assert_eq!(
            IssueCategory::MalfunctionOfPowerLines.visible_fields(Some(SubIssue::WireBreak)),
            vec![
                FullName,
                Email,
                Phone,
                Address,
                IncidentDate,
                InquiryReason,
                PhotoMaterials,
                LineCharacteristics
            ]
        );
    }

    #[test]
    fn test_sub_issues_only_for_two_categories() {
        let with_subs: Vec<_> = IssueCategory::all()
            .into_iter()
            .filter(|c| c.has_sub_issues())
            .collect();
        assert_eq!(
            with_subs,
            vec![
                IssueCategory::CarElectricChargingStations,
                IssueCategory::MalfunctionOfPowerLines
            ]
        );
    }

    #[test]
    fn test_power_line_sub_issue_label() {
        assert_eq!(power_line_sub_issue_label("zoneMalfunction"), "Охранные зоны");
        assert_eq!(power_line_sub_issue_label("pruning"), "Опиловка");
        assert_eq!(power_line_sub_issue_label("wireBreak"), "Обрыв проводов");
        assert_eq!(power_line_sub_issue_label("pillarCondition"), "Состояние опор");
        assert_eq!(power_line_sub_issue_label("malfunction"), "Не указано");
        assert_eq!(power_line_sub_issue_label("whatever"), "Не указано");
        assert_eq!(power_line_sub_issue_label(""), "Не указано");
    }

    #[test]
    fn test_hint_only_for_additional_services() {
        assert!(IssueCategory::AdditionalServices.hint().is_some());
        assert!(IssueCategory::Other.hint().is_none());
    }
}
