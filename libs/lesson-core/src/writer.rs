//! Tab-separated lesson output, one file per period.

use std::fs;
use std::path::PathBuf;

use crate::lesson::Lesson;

/// Render one lesson as `term<TAB>translation` lines joined by a
/// single newline, with no trailing newline.
pub fn render(lesson: &Lesson) -> String {
    let lines: Vec<String> = lesson
        .pairs()
        .iter()
        .map(|p| format!("{}\t{}", p.term, p.translation))
        .collect();
    lines.join("\n")
}

/// Write every lesson to `"<prefix> <key>.txt"` in key order,
/// overwriting existing files. Returns the paths written. A failure
/// partway through leaves earlier files on disk.
pub fn write_lessons(prefix: &str, lessons: &[(String, Lesson)]) -> std::io::Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(lessons.len());
    for (key, lesson) in lessons {
        let path = PathBuf::from(format!("{prefix} {key}.txt"));
        tracing::info!("Writing {}", path.display());
        fs::write(&path, render(lesson))?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pair;
    use pretty_assertions::assert_eq;

    fn lesson(pairs: &[(&str, &str)]) -> Lesson {
        let mut lesson = Lesson::default();
        for (term, translation) in pairs {
            lesson.add(Pair::new(*term, *translation));
        }
        lesson
    }

    #[test]
    fn render_joins_with_tabs_and_newlines() {
        let lesson = lesson(&[("hello", "sawasdee"), ("bye", "laa gorn")]);
        assert_eq!(render(&lesson), "hello\tsawasdee\nbye\tlaa gorn");
    }

    #[test]
    fn render_has_no_trailing_newline() {
        let lesson = lesson(&[("yes", "chai")]);
        assert_eq!(render(&lesson), "yes\tchai");
    }

    #[test]
    fn render_empty_lesson_is_empty() {
        assert_eq!(render(&Lesson::default()), "");
    }

    #[test]
    fn write_lessons_creates_one_file_per_key() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("thai").to_string_lossy().to_string();
        let lessons = vec![
            ("2023-01".to_string(), lesson(&[("hello", "sawasdee")])),
            ("2023-02".to_string(), lesson(&[("yes", "chai")])),
        ];

        let written = write_lessons(&prefix, &lessons).unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(written[0], dir.path().join("thai 2023-01.txt"));
        assert_eq!(
            fs::read_to_string(&written[0]).unwrap(),
            "hello\tsawasdee"
        );
        assert_eq!(fs::read_to_string(&written[1]).unwrap(), "yes\tchai");
    }

    #[test]
    fn write_lessons_overwrites_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("thai").to_string_lossy().to_string();
        let path = dir.path().join("thai 2023-01.txt");
        fs::write(&path, "stale").unwrap();

        let lessons = vec![("2023-01".to_string(), lesson(&[("hello", "sawasdee")]))];
        write_lessons(&prefix, &lessons).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\tsawasdee");
    }
}
