use super::email::EmailDraft;

/// Ссылка `mailto:` с закодированными темой и текстом письма
pub fn build_mailto(recipient: &str, draft: &EmailDraft) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(&draft.subject),
        urlencoding::encode(&draft.body)
    )
}

/// Извлекает и раскодирует параметр из ссылки `mailto:`
pub fn decode_mailto_param(uri: &str, name: &str) -> Result<String, String> {
    let (_, query) = uri
        .split_once('?')
        .ok_or_else(|| format!("No query in mailto link: {}", uri))?;

    let raw = query
        .split('&')
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .ok_or_else(|| format!("Parameter '{}' not found", name))?;

    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .map_err(|e| format!("Invalid percent-encoding: {}", e))
}
