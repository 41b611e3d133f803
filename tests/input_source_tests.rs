use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use word_ranker::{rank_words_from_reader, Error, InputSource};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("word_ranker_{}_{}", std::process::id(), name))
}

#[cfg(test)]
mod input_source_tests {
    use super::*;

    #[test]
    fn test_from_path_picks_variant() {
        assert_eq!(InputSource::from_path(None), InputSource::Stdin);
        assert_eq!(
            InputSource::from_path(Some(Path::new("notes.txt"))),
            InputSource::File(PathBuf::from("notes.txt"))
        );
        assert_eq!(
            InputSource::from_path(Some(Path::new("notes.txt.gz"))),
            InputSource::GzipFile(PathBuf::from("notes.txt.gz"))
        );
    }

    #[test]
    fn test_reads_plain_file() {
        let path = temp_path("plain.txt");
        fs::write(&path, "red green red\nblue red green\n").unwrap();

        let reader = InputSource::from_path(Some(&path)).open().unwrap();
        let report = rank_words_from_reader(reader).unwrap();
        fs::remove_file(&path).unwrap();

        let counts: Vec<(usize, &str)> = report
            .entries()
            .iter()
            .map(|entry| (entry.count, entry.token.as_str()))
            .collect();
        assert_eq!(counts, vec![(3, "red"), (2, "green"), (1, "blue")]);
    }

    #[test]
    fn test_reads_gzip_file() {
        let path = temp_path("compressed.txt.gz");
        {
            let file = File::create(&path).unwrap();
            let mut encoder = GzEncoder::new(file, Compression::default());
            encoder.write_all(b"zip zap zip\n").unwrap();
            encoder.finish().unwrap();
        }

        let reader = InputSource::from_path(Some(&path)).open().unwrap();
        let report = rank_words_from_reader(reader).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(report.entries().len(), 2);
        assert_eq!(report.entries()[0].token, "zip");
        assert_eq!(report.entries()[0].count, 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = temp_path("does_not_exist.txt");

        let result = InputSource::from_path(Some(&path)).open();

        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
