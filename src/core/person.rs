use chrono::{Datelike, NaiveDate};
use unicode_normalization::UnicodeNormalization;

use crate::core::error::{NumerologyError, Result};
use crate::core::reduction::{digit_sum, reduce};
use crate::models::PersonFigures;

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`)
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        NumerologyError::invalid(format!("'{}' is not a valid YYYY-MM-DD calendar date", value))
    })
}

/// Split a date into (year, month, day), rejecting years before 1
pub(crate) fn date_components(date: NaiveDate) -> Result<(u64, u64, u64)> {
    let year = date.year();
    if year < 1 {
        return Err(NumerologyError::invalid(format!(
            "dates before year 1 are not supported, got {}",
            date
        )));
    }
    Ok((year as u64, date.month() as u64, date.day() as u64))
}

/// Strip a name down to ASCII letters and single spaces
///
/// Diacritics are removed by NFKD decomposition ("Peréz" -> "Perez").
/// Characters with no ASCII base letter are dropped.
pub fn normalize_name(name: &str) -> String {
    let ascii: String = name
        .nfkd()
        .filter(|c| c.is_ascii())
        .map(|c| if c.is_ascii_alphabetic() { c } else { ' ' })
        .collect();

    ascii.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Positional value of an ASCII letter: A,J,S -> 1 ... I,R -> 9
#[inline]
pub fn letter_value(letter: char) -> Option<u8> {
    if !letter.is_ascii_alphabetic() {
        return None;
    }
    let index = letter.to_ascii_uppercase() as u8 - b'A';
    Some(index % 9 + 1)
}

/// Life Path: every digit of the birthdate summed, then reduced
pub fn life_path(birthdate: NaiveDate) -> Result<u8> {
    let (year, month, day) = date_components(birthdate)?;
    reduce(digit_sum(year) + digit_sum(month) + digit_sum(day))
}

/// Expression: letter values of the normalized name summed, then reduced
pub fn expression(name: &str) -> Result<u8> {
    let normalized = normalize_name(name);
    let total: u64 = normalized
        .chars()
        .filter_map(letter_value)
        .map(u64::from)
        .sum();

    if total == 0 {
        return Err(NumerologyError::invalid(format!(
            "name '{}' contains no letters",
            name.trim()
        )));
    }
    reduce(total)
}

/// Personal Year: birth month and day digits plus the evaluation year digits
pub fn personal_year(birthdate: NaiveDate, evaluation_date: NaiveDate) -> Result<u8> {
    let (_, month, day) = date_components(birthdate)?;
    let (year, _, _) = date_components(evaluation_date)?;
    reduce(digit_sum(month) + digit_sum(day) + digit_sum(year))
}

/// Derive all figures for one competitor
///
/// `evaluation_date` supplies the year for the personal year figure; callers
/// pass the match date rather than today.
pub fn derive_person_figures(
    name: &str,
    birthdate: NaiveDate,
    evaluation_date: NaiveDate,
) -> Result<PersonFigures> {
    Ok(PersonFigures {
        life_path: life_path(birthdate)?,
        expression: expression(name)?,
        personal_year: personal_year(birthdate, evaluation_date)?,
    })
}
