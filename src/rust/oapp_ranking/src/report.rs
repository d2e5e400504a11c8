//! Prints a sample of the ordered configs.

use oapp_api::ConfigRecord;
use oapp_config::ReportFormat;
use std::io::Write;

/// Writes the first `sample_size` records (or fewer) to `out`.
///
/// Text format mirrors the classic script output: a header line, then
/// one record per line. JSON format writes a single array and nothing
/// else, so it can be piped.
pub fn write_report<W: Write>(
    out: &mut W,
    records: &[ConfigRecord],
    sample_size: usize,
    format: ReportFormat,
) -> std::io::Result<()> {
    let sample = &records[..records.len().min(sample_size)];
    match format {
        ReportFormat::Text => {
            writeln!(out, "First {sample_size} in desired order:")?;
            for record in sample {
                writeln!(out, "{record}")?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, sample)?;
            writeln!(out)?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod test {
    use super::*;

    fn records(n: usize) -> Vec<ConfigRecord> {
        (0..n).map(|i| ConfigRecord::new(format!("app{i}"))).collect()
    }

    fn render(records: &[ConfigRecord], sample_size: usize, format: ReportFormat) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, records, sample_size, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn prints_at_most_sample_size() {
        let text = render(&records(15), 10, ReportFormat::Text);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "First 10 in desired order:");
        assert_eq!(lines[1], r#"{"oappId":"app0"}"#);
        assert_eq!(lines[10], r#"{"oappId":"app9"}"#);
    }

    #[test]
    fn short_list_prints_everything() {
        let text = render(&records(3), 10, ReportFormat::Text);
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn empty_list_prints_header_only() {
        let text = render(&[], 10, ReportFormat::Text);
        assert_eq!(text, "First 10 in desired order:\n");
    }

    #[test]
    fn json_format_is_an_array() {
        let text = render(&records(5), 2, ReportFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        let array = parsed.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[1]["oappId"], "app1");
    }
}
