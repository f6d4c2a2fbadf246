use anyhow::{bail, Result};

/// Year stamped on every `last_contact_date`.
pub const CONTACT_YEAR: u16 = 2022;

const MONTHS: [(&str, &str); 12] = [
    ("jan", "01"),
    ("feb", "02"),
    ("mar", "03"),
    ("apr", "04"),
    ("may", "05"),
    ("jun", "06"),
    ("jul", "07"),
    ("aug", "08"),
    ("sep", "09"),
    ("oct", "10"),
    ("nov", "11"),
    ("dec", "12"),
];

/// `"Jan "` → `Some("01")`; anything outside the twelve abbreviations → `None`.
pub fn month_number(raw: &str) -> Option<&'static str> {
    let key = super::utils::normalize(raw);
    MONTHS
        .iter()
        .find(|(abbrev, _)| *abbrev == key)
        .map(|(_, num)| *num)
}

/// Left-pad the trimmed day with `0` to two characters.
pub fn pad_day(raw: &str) -> String {
    format!("{:0>2}", raw.trim())
}

/// Build `"2022-MM-DD"` from a month abbreviation and a day.
///
/// The result is not checked against the calendar: `feb` + `30` gives `2022-02-30`.
pub fn last_contact_date(month: &str, day: &str) -> Result<String> {
    let Some(mm) = month_number(month) else {
        bail!(
            "month value {:?} is not a three-letter month abbreviation",
            month
        );
    };
    Ok(format!("{}-{}-{}", CONTACT_YEAR, mm, pad_day(day)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_abbreviation_maps() {
        let got: Vec<&str> = MONTHS
            .iter()
            .map(|(abbrev, _)| month_number(abbrev).unwrap())
            .collect();
        assert_eq!(
            got,
            vec!["01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12"]
        );
        assert_eq!(month_number(" MAY "), Some("05"));
        assert_eq!(month_number("june"), None);
        assert_eq!(month_number(""), None);
    }

    #[test]
    fn day_is_zero_padded() {
        assert_eq!(pad_day("5"), "05");
        assert_eq!(pad_day(" 7 "), "07");
        assert_eq!(pad_day("21"), "21");
    }

    #[test]
    fn dates_skip_calendar_validation() -> Result<()> {
        assert_eq!(last_contact_date("jan", "5")?, "2022-01-05");
        assert_eq!(last_contact_date("Feb", "30")?, "2022-02-30");
        Ok(())
    }

    #[test]
    fn unknown_month_is_an_error() {
        let err = last_contact_date("xyz", "1").unwrap_err();
        assert!(err.to_string().contains("\"xyz\""), "{}", err);
    }
}
