use serde::{Deserialize, Serialize};

use super::field::{FormField, FormFieldValues};
use super::issue::{power_line_sub_issue_label, IssueCategory, SubIssue, FALLBACK_SUBJECT};

/// Черновик письма: тема и текст. Нигде не хранится, только показывается и
/// передаётся почтовому клиенту.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

const PARAGRAPH: &str = "\n\n";
const LINE: &str = "\n";

/// Тема письма: название темы обращения или общая тема
pub fn email_subject(category: Option<IssueCategory>) -> &'static str {
    category
        .map(|c| c.display_name())
        .unwrap_or(FALLBACK_SUBJECT)
}

/// Собирает письмо по теме, коду подтемы и значениям полей.
///
/// Текст всегда начинается с ФИО, почты и телефона, затем идут поля темы в
/// фиксированном порядке. Последний блок у большинства тем завершается одним
/// переводом строки, у ЭЗС и неисправностей ЛЭП двумя.
pub fn compose_email(
    category: Option<IssueCategory>,
    sub_issue: &str,
    values: &FormFieldValues,
) -> EmailDraft {
    EmailDraft {
        subject: email_subject(category).to_string(),
        body: compose_body(category, sub_issue, values),
    }
}

fn compose_body(category: Option<IssueCategory>, sub_issue: &str, values: &FormFieldValues) -> String {
    let mut body = BodyBuilder::new(category.unwrap_or(IssueCategory::Other), values);
    body.block(FormField::FullName, PARAGRAPH)
        .block(FormField::Email, PARAGRAPH)
        .block(FormField::Phone, PARAGRAPH);

    let Some(category) = category else {
        return body.finish();
    };

    match category {
        IssueCategory::PowerOutage => {
            body.block(FormField::Address, PARAGRAPH)
                .block(FormField::IncidentDate, LINE);
        }
        IssueCategory::PowerQuality => {
            body.block(FormField::DeviceLocationAddress, PARAGRAPH)
                .block(FormField::InquiryReason, PARAGRAPH)
                .block(FormField::ClaimDateRange, LINE);
        }
        IssueCategory::CarElectricChargingStations => {
            body.block(FormField::ChargingStationAddress, PARAGRAPH);
            if sub_issue == SubIssue::Malfunction.code() {
                body.block(FormField::ChargingStationId, PARAGRAPH);
            }
        }
        IssueCategory::ElectricityMeteringDevices => {
            body.block(FormField::ObjectLocationAddress, PARAGRAPH)
                .block(FormField::AccountNumber, LINE);
        }
        IssueCategory::MalfunctionOfPowerLines => {
            body.line(&format!(
                "Выбранная подтема: {}",
                power_line_sub_issue_label(sub_issue)
            ))
            .block(FormField::Address, PARAGRAPH)
            .block(FormField::IncidentDate, PARAGRAPH)
            .block(FormField::InquiryReason, PARAGRAPH)
            .block(FormField::PhotoMaterials, PARAGRAPH)
            .block(FormField::LineCharacteristics, PARAGRAPH);
        }
        IssueCategory::TransferOfTheElectricGrid => {
            body.block(FormField::ObjectName, PARAGRAPH)
                .block(FormField::Address, PARAGRAPH)
                .block(FormField::TechnicalSpecs, LINE);
        }
        IssueCategory::ConnectionElectricNetworks => {
            body.block(FormField::ApplicationOrContractNumber, LINE);
        }
        IssueCategory::AdditionalServices => {
            body.block(FormField::InquiryReason, LINE);
        }
        IssueCategory::Other => {}
    }
    body.finish()
}

struct BodyBuilder<'a> {
    category: IssueCategory,
    values: &'a FormFieldValues,
    out: String,
}

impl<'a> BodyBuilder<'a> {
    fn new(category: IssueCategory, values: &'a FormFieldValues) -> Self {
        Self {
            category,
            values,
            out: String::new(),
        }
    }

    /// `подпись:\nзначение` + завершение
    fn block(&mut self, field: FormField, tail: &str) -> &mut Self {
        self.out.push_str(field.label(self.category));
        self.out.push_str(":\n");
        self.out.push_str(self.values.get(field));
        self.out.push_str(tail);
        self
    }

    fn line(&mut self, text: &str) -> &mut Self {
        self.out.push_str(text);
        self.out.push_str(PARAGRAPH);
        self
    }

    fn finish(self) -> String {
        self.out
    }
}
