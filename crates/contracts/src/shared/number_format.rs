//! Утилиты форматирования цен для прейскуранта

/// Форматирует число с разделителем тысяч (пробел), запятой и указанным количеством знаков
///
/// # Примеры
///
/// ```
/// use contracts::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234,57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Вставляем пробелы каждые 3 цифры с конца целой части
    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(' ');
        }
        result.push(c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{},{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Денежное значение: два знака после запятой, целые рубли без копеек
///
/// # Примеры
///
/// ```
/// use contracts::shared::number_format::format_money;
/// assert_eq!(format_money(1234567.89), "1 234 567,89");
/// assert_eq!(format_money(1500.0), "1 500,00");
/// ```
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}
