//! Localized date formatting.

use chrono::{Locale, NaiveDate};

use crate::config::DateFormat;

/// strftime patterns of one date style family.
struct DatePatterns {
    medium: &'static str,
    long: &'static str,
    full: &'static str,
}

/// "Oct 23, 2025"
const MONTH_FIRST: DatePatterns = DatePatterns {
    medium: "%b %-d, %Y",
    long: "%B %-d, %Y",
    full: "%A, %B %-d, %Y",
};

/// "23 octobre 2025"
const DAY_FIRST: DatePatterns = DatePatterns {
    medium: "%-d %b %Y",
    long: "%-d %B %Y",
    full: "%A %-d %B %Y",
};

/// "23. Oktober 2025"
const GERMAN: DatePatterns = DatePatterns {
    medium: "%d.%m.%Y",
    long: "%-d. %B %Y",
    full: "%A, %-d. %B %Y",
};

/// "23. oktober 2025", ordinal dot without the comma after the weekday
const DAY_DOT: DatePatterns = DatePatterns {
    medium: "%d.%m.%Y",
    long: "%-d. %B %Y",
    full: "%A %-d. %B %Y",
};

/// "23 de octubre de 2025"
const IBERIAN: DatePatterns = DatePatterns {
    medium: "%-d %b %Y",
    long: "%-d de %B de %Y",
    full: "%A, %-d de %B de %Y",
};

/// "23 октября 2025 г."
const RUSSIAN: DatePatterns = DatePatterns {
    medium: "%d.%m.%Y",
    long: "%-d %B %Y г.",
    full: "%A, %-d %B %Y г.",
};

/// "23 жовтня 2025 р."
const UKRAINIAN: DatePatterns = DatePatterns {
    medium: "%d.%m.%Y",
    long: "%-d %B %Y р.",
    full: "%A, %-d %B %Y р.",
};

/// "2025. október 23."
const HUNGARIAN: DatePatterns = DatePatterns {
    medium: "%Y. %b %-d.",
    long: "%Y. %B %-d.",
    full: "%Y. %B %-d., %A",
};

/// "2025年10月23日"
const JAPANESE: DatePatterns = DatePatterns {
    medium: "%Y/%m/%d",
    long: "%Y年%-m月%-d日",
    full: "%Y年%-m月%-d日%A",
};

const CHINESE: DatePatterns = DatePatterns {
    medium: "%Y年%-m月%-d日",
    long: "%Y年%-m月%-d日",
    full: "%Y年%-m月%-d日%A",
};

/// "2025년 10월 23일"
const KOREAN: DatePatterns = DatePatterns {
    medium: "%Y. %-m. %-d.",
    long: "%Y년 %-m월 %-d일",
    full: "%Y년 %-m월 %-d일 %A",
};

/// Format a date for display in the given language.
///
/// Month and day names come from the matching locale; unknown languages fall
/// back to US English.
pub fn format_date(date: NaiveDate, format: DateFormat, lang: &str) -> String {
    let (locale, patterns) = locale_for(lang);
    let pattern = match format {
        DateFormat::Short => "%x",
        DateFormat::Medium => patterns.medium,
        DateFormat::Long => patterns.long,
        DateFormat::Full => patterns.full,
    };

    date.and_time(chrono::NaiveTime::MIN)
        .and_utc()
        .format_localized(pattern, locale)
        .to_string()
}

/// The chrono locale and date patterns of a two-letter language code.
fn locale_for(lang: &str) -> (Locale, &'static DatePatterns) {
    match lang {
        "fr" => (Locale::fr_FR, &DAY_FIRST),
        "it" => (Locale::it_IT, &DAY_FIRST),
        "nl" => (Locale::nl_NL, &DAY_FIRST),
        "sv" => (Locale::sv_SE, &DAY_FIRST),
        "el" => (Locale::el_GR, &DAY_FIRST),
        "pl" => (Locale::pl_PL, &DAY_FIRST),
        "ro" => (Locale::ro_RO, &DAY_FIRST),
        "tr" => (Locale::tr_TR, &DAY_FIRST),
        "he" => (Locale::he_IL, &DAY_FIRST),
        "id" => (Locale::id_ID, &DAY_FIRST),
        "de" => (Locale::de_DE, &GERMAN),
        "da" => (Locale::da_DK, &DAY_DOT),
        "nb" | "no" => (Locale::nb_NO, &DAY_DOT),
        "fi" => (Locale::fi_FI, &DAY_DOT),
        "cs" => (Locale::cs_CZ, &DAY_DOT),
        "sk" => (Locale::sk_SK, &DAY_DOT),
        "sl" => (Locale::sl_SI, &DAY_DOT),
        "hr" => (Locale::hr_HR, &DAY_DOT),
        "et" => (Locale::et_EE, &DAY_DOT),
        "es" => (Locale::es_ES, &IBERIAN),
        "pt" => (Locale::pt_PT, &IBERIAN),
        "ca" => (Locale::ca_ES, &IBERIAN),
        "ru" => (Locale::ru_RU, &RUSSIAN),
        "bg" => (Locale::bg_BG, &RUSSIAN),
        "uk" => (Locale::uk_UA, &UKRAINIAN),
        "hu" => (Locale::hu_HU, &HUNGARIAN),
        "ja" => (Locale::ja_JP, &JAPANESE),
        "zh" => (Locale::zh_CN, &CHINESE),
        "ko" => (Locale::ko_KR, &KOREAN),
        _ => (Locale::en_US, &MONTH_FIRST),
    }
}
