use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;

use super::DatabaseError;

/// A persisted original/cleaned text pair. Never mutated or deleted;
/// storage owns the id sequence.
#[derive(Debug, Clone, Serialize)]
pub struct TextRecord {
    pub id: i64,
    pub original_text: String,
    pub cleaned_text: String,
}

/// Insert a new record and return the storage-assigned id.
pub fn insert_text_record(
    conn: &Connection,
    original: &str,
    cleaned: &str,
) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO texts (original_text, cleaned_text) VALUES (?1, ?2)",
        params![original, cleaned],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_text_record(conn: &Connection, id: i64) -> Result<Option<TextRecord>, DatabaseError> {
    let record = conn
        .query_row(
            "SELECT id, original_text, cleaned_text FROM texts WHERE id = ?1",
            params![id],
            |row| {
                Ok(TextRecord {
                    id: row.get(0)?,
                    original_text: row.get(1)?,
                    cleaned_text: row.get(2)?,
                })
            },
        )
        .optional()?;
    Ok(record)
}

pub fn count_text_records(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM texts", [], |row| row.get(0))?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;

    #[test]
    fn insert_assigns_increasing_ids() {
        let conn = open_memory_database().unwrap();
        let first = insert_text_record(&conn, "Raw A", "raw a").unwrap();
        let second = insert_text_record(&conn, "Raw B", "raw b").unwrap();
        assert!(second > first);
    }

    #[test]
    fn insert_then_get_roundtrip() {
        let conn = open_memory_database().unwrap();
        let id = insert_text_record(&conn, "Halo @x RT", "halo").unwrap();

        let record = get_text_record(&conn, id).unwrap().unwrap();
        assert_eq!(record.id, id);
        assert_eq!(record.original_text, "Halo @x RT");
        assert_eq!(record.cleaned_text, "halo");
    }

    #[test]
    fn get_unknown_id_returns_none() {
        let conn = open_memory_database().unwrap();
        assert!(get_text_record(&conn, 999).unwrap().is_none());
    }

    #[test]
    fn count_tracks_inserts() {
        let conn = open_memory_database().unwrap();
        assert_eq!(count_text_records(&conn).unwrap(), 0);
        insert_text_record(&conn, "a", "a").unwrap();
        assert_eq!(count_text_records(&conn).unwrap(), 1);
        insert_text_record(&conn, "b", "b").unwrap();
        assert_eq!(count_text_records(&conn).unwrap(), 2);
    }

    #[test]
    fn empty_strings_are_storable() {
        let conn = open_memory_database().unwrap();
        let id = insert_text_record(&conn, "", "").unwrap();
        let record = get_text_record(&conn, id).unwrap().unwrap();
        assert_eq!(record.original_text, "");
        assert_eq!(record.cleaned_text, "");
    }
}
