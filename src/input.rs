use std::{fs, io, num::ParseIntError, path::Path, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("file not found or unreadable: {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("input has no count line")]
    MissingCount,
    #[error("invalid count {line:?}")]
    InvalidCount {
        line: String,
        #[source]
        source: ParseIntError,
    },
    #[error("input declares {count} values but has no data line")]
    MissingData { count: usize },
    #[error("invalid number {token:?}")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("input declares {expected} values but only {found} are present")]
    TooFewValues { expected: usize, found: usize },
}

/// Reads and parses an input file, see [`parse_input`].
pub fn read_input(path: impl AsRef<Path>) -> Result<Vec<i32>, InputError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| InputError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_input(&text)
}

/// Parses the two-line input format: a count `n` on the first line and whitespace-separated
/// integers on the second. Only the first `n` integers are taken; anything past them is not
/// inspected.
pub fn parse_input(text: &str) -> Result<Vec<i32>, InputError> {
    let mut lines = text.lines();
    let count_line = lines
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .ok_or(InputError::MissingCount)?;
    let count: usize = count_line
        .parse()
        .map_err(|source| InputError::InvalidCount {
            line: count_line.to_owned(),
            source,
        })?;
    if count == 0 {
        return Ok(Vec::new());
    }

    let data_line = lines.next().ok_or(InputError::MissingData { count })?;
    let data = data_line
        .split_whitespace()
        .take(count)
        .map(|token| {
            token.parse().map_err(|source| InputError::InvalidNumber {
                token: token.to_owned(),
                source,
            })
        })
        .collect::<Result<Vec<i32>, _>>()?;
    if data.len() < count {
        return Err(InputError::TooFewValues {
            expected: count,
            found: data.len(),
        });
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{parse_input, read_input, InputError};

    #[test]
    fn takes_declared_count() {
        let data = parse_input("5\n5 2 9 1 6 3 15\n").unwrap();
        assert_eq!(data, [5, 2, 9, 1, 6]);
    }

    #[test]
    fn tolerates_extra_whitespace() {
        let data = parse_input(" 3 \r\n -1   0\t7  \n").unwrap();
        assert_eq!(data, [-1, 0, 7]);
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(parse_input("0\n").unwrap().is_empty());
        assert!(parse_input("0").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(parse_input(""), Err(InputError::MissingCount)));
        assert!(matches!(
            parse_input("ten\n1 2"),
            Err(InputError::InvalidCount { .. })
        ));
        assert!(matches!(
            parse_input("2"),
            Err(InputError::MissingData { count: 2 })
        ));
        match parse_input("3\n1 x 3") {
            Err(InputError::InvalidNumber { token, .. }) => assert_eq!(token, "x"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            parse_input("4\n1 2 3"),
            Err(InputError::TooFewValues {
                expected: 4,
                found: 3
            })
        ));
    }

    #[test]
    fn reads_file() {
        fs::create_dir_all("./target").unwrap();
        let path = "./target/read_input_test.txt";
        fs::write(path, "4\n8 -2 5 0 99\n").unwrap();
        assert_eq!(read_input(path).unwrap(), [8, -2, 5, 0]);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file() {
        let err = read_input("./target/does_not_exist.txt").unwrap_err();
        assert!(matches!(err, InputError::Unreadable { .. }));
        assert!(err.to_string().contains("does_not_exist.txt"));
    }
}
