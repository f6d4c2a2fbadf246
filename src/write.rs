// src/write.rs
use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};
use tracing::debug;

/// A derived table that is persisted as its own CSV file.
pub trait OutputTable: Serialize {
    /// File name inside the output directory.
    const FILE_NAME: &'static str;
    /// Header row, in the same order as the serialized fields.
    const HEADERS: &'static [&'static str];
}

/// Write `rows` to `<dir>/<T::FILE_NAME>` with a header row and no index column.
///
/// The CSV is written to a hidden temp file next to the destination and renamed
/// over it, so an existing file is either fully replaced or left alone.
pub fn write_table<T: OutputTable>(dir: &Path, rows: &[T]) -> Result<PathBuf> {
    let path = dir.join(T::FILE_NAME);
    let tmp_path = dir.join(format!(".{}.tmp", T::FILE_NAME));

    let file = File::create(&tmp_path)
        .with_context(|| format!("creating {:?}", tmp_path))?;
    // headers go out by hand so an empty table still gets one
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
    wtr.write_record(T::HEADERS)
        .with_context(|| format!("writing header to {:?}", tmp_path))?;
    for row in rows {
        wtr.serialize(row)
            .with_context(|| format!("writing row to {:?}", tmp_path))?;
    }
    wtr.flush()
        .with_context(|| format!("flushing {:?}", tmp_path))?;
    drop(wtr);

    fs::rename(&tmp_path, &path)
        .with_context(|| format!("renaming {:?} -> {:?}", tmp_path, path))?;
    debug!(path = %path.display(), rows = rows.len(), "wrote table");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::client::ClientRecord;
    use crate::process::economics::EconomicsRecord;
    use tempfile::tempdir;

    #[test]
    fn missing_education_is_an_empty_field() -> Result<()> {
        let dir = tempdir()?;
        let rows = vec![
            ClientRecord {
                client_id: "1".into(),
                age: "56".into(),
                job: "admin".into(),
                marital: "married".into(),
                education: None,
                credit_default: 1,
                mortgage: 0,
            },
            ClientRecord {
                client_id: "2".into(),
                age: "40".into(),
                job: "services".into(),
                marital: "single".into(),
                education: Some("high_school".into()),
                credit_default: 0,
                mortgage: 1,
            },
        ];
        let path = write_table(dir.path(), &rows)?;
        assert_eq!(path, dir.path().join("client.csv"));
        assert_eq!(
            fs::read_to_string(&path)?,
            "client_id,age,job,marital,education,credit_default,mortgage\n\
             1,56,admin,married,,1,0\n\
             2,40,services,single,high_school,0,1\n"
        );
        assert!(!dir.path().join(".client.csv.tmp").exists());
        Ok(())
    }

    #[test]
    fn empty_table_still_gets_a_header_and_overwrites() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("economics.csv"), "stale contents\n")?;
        let rows: Vec<EconomicsRecord> = Vec::new();
        let path = write_table(dir.path(), &rows)?;
        assert_eq!(
            fs::read_to_string(path)?,
            "client_id,cons_price_idx,euribor_three_months\n"
        );
        Ok(())
    }
}
