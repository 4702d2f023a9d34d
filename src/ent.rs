/*
 * ent.rs -- Data structures for question and progress records
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

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    /// The question file or the progress file is missing or malformed.
    #[error("data unavailable: {}: {detail}", .path.display())]
    DataUnavailable { path: PathBuf, detail: String },

    /// The progress record could not be persisted.
    #[error("storage write failed: {}: {detail}", .path.display())]
    StorageWrite { path: PathBuf, detail: String },
}

pub type Result<T> = std::result::Result<T, QuizError>;

#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl Question {
    /// Correctness is decided by option text, never by display position.
    pub fn assess(&self, option_text: &str) -> bool {
        option_text == self.answer
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub attempted: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub missed_questions: Vec<Question>,
}

impl Progress {
    /// Record one presented question.
    /// Keeps `attempted == correct + incorrect`; a failed question is
    /// stored verbatim for later review.
    pub fn record(&mut self, question: &Question, pass: bool) {
        self.attempted += 1;
        if pass {
            self.correct += 1;
        } else {
            self.incorrect += 1;
            self.missed_questions.push(question.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question {
            question: String::from("2+2?"),
            options: vec![String::from("3"), String::from("4")],
            answer: String::from("4"),
        }
    }

    #[test]
    fn assess_compares_option_text() {
        let q = question();
        assert!(q.assess("4"));
        assert!(!q.assess("3"));
        assert!(!q.assess(""));
    }

    #[test]
    fn default_progress_is_all_zero() {
        let p = Progress::default();
        assert_eq!(p.attempted, 0);
        assert_eq!(p.correct, 0);
        assert_eq!(p.incorrect, 0);
        assert!(p.missed_questions.is_empty());
    }

    #[test]
    fn record_keeps_the_counter_invariant() {
        let q = question();
        let mut p = Progress::default();
        p.record(&q, true);
        p.record(&q, false);
        p.record(&q, false);
        assert_eq!(p.attempted, 3);
        assert_eq!(p.correct + p.incorrect, p.attempted);
        assert_eq!(p.missed_questions, vec![q.clone(), q]);
    }
}
