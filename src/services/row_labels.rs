//! Метки рядов в стиле электронных таблиц: 0 -> "A", 25 -> "Z", 26 -> "AA".
//!
//! Биективная система счисления по основанию 26 без нулевой цифры.

use crate::error::{LayoutError, Result};

const RADIX: u64 = 26;

/// Индекс ряда (с нуля) -> метка из заглавных латинских букв.
///
/// Неотрицательность индекса гарантирует тип аргумента.
pub fn encode(index: u64) -> String {
    let mut letters = Vec::new();
    let mut n = index;
    loop {
        letters.push(char::from(b'A' + (n % RADIX) as u8));
        if n < RADIX {
            break;
        }
        n = n / RADIX - 1;
    }
    letters.iter().rev().collect()
}

/// Метка -> индекс ряда. Строчные буквы читаются как заглавные.
pub fn decode(label: &str) -> Result<u64> {
    if label.is_empty() {
        return Err(LayoutError::InvalidLabel(label.to_string()));
    }

    // u128, чтобы encode(u64::MAX) тоже читался обратно
    let mut acc: u128 = 0;
    for ch in label.chars() {
        if !ch.is_ascii_alphabetic() {
            return Err(LayoutError::InvalidLabel(label.to_string()));
        }
        let digit = u128::from(ch.to_ascii_uppercase() as u8 - b'A') + 1;
        acc = acc
            .checked_mul(u128::from(RADIX))
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| LayoutError::LabelOverflow(label.to_string()))?;
    }

    u64::try_from(acc - 1).map_err(|_| LayoutError::LabelOverflow(label.to_string()))
}
