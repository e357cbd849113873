use chrono::{Datelike, Duration};

use crate::Time;

const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Absolute publication label, eg. "17 de Maio às 13:30h"
pub fn published_label(at: &Time) -> String {
    format!(
        "{} de {} às {}h",
        at.day(),
        MONTH_NAMES[at.month0() as usize],
        at.format("%H:%M"),
    )
}

/// Distance between `at` and `now`, eg. "há 2 dias" or "em 3 horas".
///
/// Taking `now` as an argument keeps this a pure function; callers
/// pass the current instant.
pub fn relative_label(at: &Time, now: &Time) -> String {
    if *at > *now {
        format!("em {}", distance_phrase(*at - *now))
    } else {
        format!("há {}", distance_phrase(*now - *at))
    }
}

fn distance_phrase(d: Duration) -> String {
    let days = d.num_days();
    if days >= 365 {
        counted(days / 365, "ano", "anos")
    } else if days >= 30 {
        counted(days / 30, "mês", "meses")
    } else if days >= 1 {
        counted(days, "dia", "dias")
    } else if d.num_hours() >= 1 {
        counted(d.num_hours(), "hora", "horas")
    } else if d.num_minutes() >= 1 {
        counted(d.num_minutes(), "minuto", "minutos")
    } else {
        String::from("poucos segundos")
    }
}

fn counted(n: i64, singular: &str, plural: &str) -> String {
    match n {
        1 => format!("1 {}", singular),
        n => format!("{} {}", n, plural),
    }
}
