//! CSV message table writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::Message;
use crate::error::Result;

const HEADER: [&str; 5] = ["Date", "Time", "Sender", "Content", "Media"];

/// Writes messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Date`, `Time`, `Sender`, `Content`, `Media`
/// - Multiline content is quoted, newlines preserved
/// - Encoding: UTF-8
pub fn write_csv(messages: &[Message], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(messages, file)
}

/// Converts messages to a CSV string, same format as [`write_csv`].
pub fn to_csv(messages: &[Message]) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(messages, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(messages: &[Message], sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(HEADER)?;
    for msg in messages {
        writer.write_record([
            msg.date.as_str(),
            msg.time.as_str(),
            msg.sender.as_str(),
            msg.content.as_str(),
            if msg.is_media { "true" } else { "false" },
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_to_csv_basic() {
        let messages = vec![
            Message::new("01/02/2024", "09:00:00", "Alice", "Hello"),
            Message::new("05/03/2023", "14:30", "Carol", "<Media omitted>"),
        ];
        let csv = to_csv(&messages).unwrap();

        assert!(csv.starts_with("Date;Time;Sender;Content;Media\n"));
        assert!(csv.contains("01/02/2024;09:00:00;Alice;Hello;false"));
        assert!(csv.contains("05/03/2023;14:30;Carol;<Media omitted>;true"));
    }

    #[test]
    fn test_multiline_and_delimiter_are_quoted() {
        let mut msg = Message::new("01/02/2024", "09:00:00", "Alice", "a;b");
        msg.push_line("second");
        let csv = to_csv(&[msg]).unwrap();
        assert!(csv.contains("\"a;b\nsecond\""));
    }

    #[test]
    fn test_write_csv_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let messages = vec![Message::new("01/02/2024", "09:00:00", "Bob", "Hi there")];
        write_csv(&messages, temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("Bob;Hi there"));
    }

    #[test]
    fn test_empty_has_header_only() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(csv, "Date;Time;Sender;Content;Media\n");
    }
}
