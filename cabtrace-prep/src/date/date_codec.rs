//! date and time formats used in file names and output tables.

pub mod filename {
    //! daily input files are addressed by a strftime template applied to the
    //! calendar date, for example `%Y-%-m-%-d.csv` -> `2018-10-1.csv`.
    use chrono::NaiveDate;

    pub const DEFAULT_FILENAME_FORMAT: &str = "%Y-%-m-%-d.csv";

    pub fn format_filename(date: &NaiveDate, template: &str) -> String {
        date.format(template).to_string()
    }
}

pub mod timestamp {
    //! (de)serializers for timestamps written to output tables, which use
    //! `yyyy-mm-dd HH:MM:SS` format.
    use chrono::NaiveDateTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub const OUTPUT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(OUTPUT_TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: String = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&value, OUTPUT_TIMESTAMP_FORMAT)
            .map_err(|e| D::Error::custom(format!("Invalid timestamp format: {e}")))
    }
}
