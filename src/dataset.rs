//! Extraction of raw tweets from uploaded CSV datasets.

use thiserror::Error;

/// Column that holds the raw tweet text in the source datasets.
const TWEET_COLUMN: &str = "Tweet";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("File is not valid CSV data: {0}")]
    Parse(#[from] csv::Error),

    #[error("Expected column `Tweet` not found in uploaded file")]
    MissingColumn,
}

/// Decode an uploaded CSV and return the `Tweet` column as an ordered list
/// of strings, one per row.
///
/// The source datasets are Windows-1252 / ISO-8859-1 encoded, not UTF-8, so
/// the bytes are decoded before parsing. Row order is preserved.
pub fn extract_tweets(bytes: &[u8]) -> Result<Vec<String>, DatasetError> {
    let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);

    let mut reader = csv::Reader::from_reader(decoded.as_bytes());

    let headers = reader.headers()?.clone();
    let tweet_idx = headers
        .iter()
        .position(|h| h == TWEET_COLUMN)
        .ok_or(DatasetError::MissingColumn)?;

    let mut tweets = Vec::new();
    for record in reader.records() {
        let record = record?;
        tweets.push(record.get(tweet_idx).unwrap_or_default().to_string());
    }
    Ok(tweets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_tweet_column_in_row_order() {
        let csv = b"User,Tweet\nalice,first tweet\nbob,second tweet\n";
        let tweets = extract_tweets(csv).unwrap();
        assert_eq!(tweets, vec!["first tweet", "second tweet"]);
    }

    #[test]
    fn tweet_column_position_does_not_matter() {
        let csv = b"Tweet,User\nonly one,carol\n";
        let tweets = extract_tweets(csv).unwrap();
        assert_eq!(tweets, vec!["only one"]);
    }

    #[test]
    fn missing_tweet_column_is_schema_error() {
        let csv = b"User,Text\nalice,hello\n";
        let err = extract_tweets(csv).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn));
    }

    #[test]
    fn empty_file_is_schema_error() {
        let err = extract_tweets(b"").unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn));
    }

    #[test]
    fn ragged_rows_are_parse_error() {
        let csv = b"User,Tweet\nalice,hello,extra-field\n";
        let err = extract_tweets(csv).unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }

    #[test]
    fn decodes_single_byte_western_encoding() {
        // 0xE9 is `é` in ISO-8859-1 and would be rejected as invalid UTF-8.
        let csv = b"Tweet\ncaf\xe9 enak\n";
        let tweets = extract_tweets(csv).unwrap();
        assert_eq!(tweets, vec!["café enak"]);
    }

    #[test]
    fn quoted_fields_with_commas_survive() {
        let csv = b"User,Tweet\nalice,\"halo, semua\"\n";
        let tweets = extract_tweets(csv).unwrap();
        assert_eq!(tweets, vec!["halo, semua"]);
    }
}
