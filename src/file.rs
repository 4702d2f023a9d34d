/*
 * file.rs -- Question and progress file handling
 * Copyright (C) 2022 Arnoldas Rauba
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 *
 */

use crate::ent::{Progress, Question, QuizError, Result};
use log::debug;
use std::fs::File;
use std::io::prelude::*;
use std::io::Read;
use std::path::Path;

/// Load the question table from a JSON file of the form
/// `{"version": 1, "questions": [{"question", "options", "answer"}, ...]}`.
pub fn load_questions(path: &Path) -> Result<Vec<Question>> {
    let unavailable = |detail: String| QuizError::DataUnavailable {
        path: path.to_path_buf(),
        detail,
    };
    let input: json::JsonValue = {
        let mut file = File::open(path).map_err(|e| unavailable(e.to_string()))?;
        let mut file_data = String::new();
        file.read_to_string(&mut file_data)
            .map_err(|e| unavailable(e.to_string()))?;
        json::parse(&file_data).map_err(|e| unavailable(e.to_string()))?
    };
    if input["version"] != 1i32 {
        return Err(unavailable(format!(
            "unsupported version {}",
            input["version"]
        )));
    }
    let data = &input["questions"];
    if !data.is_array() {
        return Err(unavailable(String::from("\"questions\" is not an array")));
    }
    let mut table = Vec::new();
    for (i, entry) in data.members().enumerate() {
        let question = entry["question"]
            .as_str()
            .ok_or_else(|| unavailable(format!("question {}: missing \"question\"", i)))?;
        let answer = entry["answer"]
            .as_str()
            .ok_or_else(|| unavailable(format!("question {}: missing \"answer\"", i)))?;
        let mut options = Vec::new();
        for opt in entry["options"].members() {
            let opt = opt
                .as_str()
                .ok_or_else(|| unavailable(format!("question {}: non-string option", i)))?;
            options.push(String::from(opt));
        }
        if options.len() < 2 {
            return Err(unavailable(format!(
                "question {}: fewer than two options",
                i
            )));
        }
        if !options.iter().any(|o| o == answer) {
            return Err(unavailable(format!(
                "question {}: answer not among options",
                i
            )));
        }
        table.push(Question {
            question: String::from(question),
            options,
            answer: String::from(answer),
        });
    }
    debug!("loaded {} questions from {}", table.len(), path.display());
    Ok(table)
}

fn get_file_type(path: &Path) -> Option<std::fs::FileType> {
    match std::fs::metadata(path) {
        Ok(m) => Some(m.file_type()),
        Err(_e) => None,
    }
}

/// Load the progress record, or a zeroed one if the file does not exist
/// yet. An existing but unreadable record is an error, not a reset.
pub fn load_progress(path: &Path) -> Result<Progress> {
    if !match get_file_type(path) {
        Some(ftype) => ftype.is_file(),
        None => false,
    } {
        debug!("no progress at {}, starting fresh", path.display());
        return Ok(Progress::default());
    }
    let unavailable = |detail: String| QuizError::DataUnavailable {
        path: path.to_path_buf(),
        detail,
    };
    let mut buf = Vec::<u8>::new();
    File::open(path)
        .and_then(|mut f| f.read_to_end(&mut buf))
        .map_err(|e| unavailable(e.to_string()))?;
    serde_json::from_slice(&buf).map_err(|e| unavailable(e.to_string()))
}

/// Overwrite the progress record on disk. No merge: the file always holds
/// exactly the last saved state.
pub fn save_progress(progress: &Progress, path: &Path) -> Result<()> {
    let write_failed = |detail: String| QuizError::StorageWrite {
        path: path.to_path_buf(),
        detail,
    };
    let outdata = serde_json::to_vec_pretty(progress).map_err(|e| write_failed(e.to_string()))?;
    let mut f = File::create(path).map_err(|e| write_failed(e.to_string()))?;
    f.write_all(&outdata).map_err(|e| write_failed(e.to_string()))?;
    debug!("wrote progress to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn question(text: &str, options: &[&str], answer: &str) -> Question {
        Question {
            question: String::from(text),
            options: options.iter().map(|o| String::from(*o)).collect(),
            answer: String::from(answer),
        }
    }

    #[test]
    fn loads_a_valid_question_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        fs::write(
            &path,
            r#"{"version": 1, "questions": [
                {"question": "2+2?", "options": ["3", "4"], "answer": "4"},
                {"question": "Capital of France?", "options": ["Paris", "Rome"], "answer": "Paris"}
            ]}"#,
        )
        .unwrap();
        let table = load_questions(&path).unwrap();
        assert_eq!(
            table,
            vec![
                question("2+2?", &["3", "4"], "4"),
                question("Capital of France?", &["Paris", "Rome"], "Paris"),
            ]
        );
    }

    #[test]
    fn missing_question_file_is_data_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_questions(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, QuizError::DataUnavailable { .. }));
    }

    #[test]
    fn malformed_question_file_is_data_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        for body in [
            "{not json",
            r#"{"version": 2, "questions": []}"#,
            r#"{"version": 1, "questions": 7}"#,
            r#"{"version": 1, "questions": [{"question": "q", "options": ["a"], "answer": "a"}]}"#,
            r#"{"version": 1, "questions": [{"question": "q", "options": ["a", "b"], "answer": "c"}]}"#,
            r#"{"version": 1, "questions": [{"options": ["a", "b"], "answer": "a"}]}"#,
        ] {
            fs::write(&path, body).unwrap();
            let err = load_questions(&path).unwrap_err();
            assert!(
                matches!(err, QuizError::DataUnavailable { .. }),
                "accepted: {}",
                body
            );
        }
    }

    #[test]
    fn absent_progress_defaults_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let progress = load_progress(&dir.path().join("progress.json")).unwrap();
        assert_eq!(progress, Progress::default());
    }

    #[test]
    fn progress_survives_a_save_load_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        let progress = Progress {
            attempted: 5,
            correct: 3,
            incorrect: 2,
            missed_questions: vec![question("2+2?", &["3", "4"], "4")],
        };
        save_progress(&progress, &path).unwrap();
        assert_eq!(load_progress(&path).unwrap(), progress);
    }

    #[test]
    fn malformed_progress_is_data_unavailable_not_a_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        fs::write(&path, "][").unwrap();
        let err = load_progress(&path).unwrap_err();
        assert!(matches!(err, QuizError::DataUnavailable { .. }));
    }

    #[test]
    fn save_into_a_missing_directory_is_a_storage_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/progress.json");
        let err = save_progress(&Progress::default(), &path).unwrap_err();
        assert!(matches!(err, QuizError::StorageWrite { .. }));
    }
}
