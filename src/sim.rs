/*
 * sim.rs -- Quiz session control
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

use crate::ent::{Progress, Question};
use rand::prelude::*;

/// One step of the session, handed to the UI callback.
/// `Prompt` carries the shuffled, labelled choices and a slot for the raw
/// reply; everything else is display-only.
pub enum UiMessage<'a> {
    Prompt {
        question: &'a str,
        num: usize,
        total: usize,
        choices: &'a [(char, &'a str)],
        reply: &'a mut String,
    },
    Reject,
    Correct,
    Incorrect { answer: &'a str },
    Reveal { answer: &'a str },
    ReviewBegin,
    NothingToReview,
    Score { correct: u32, attempted: u32 },
}

/// Present one question: shuffle a borrowed copy of its options, label
/// them from 'a', and keep prompting until the reply matches a label.
/// Returns whether the chosen option text equals the stored answer,
/// together with the canonical answer.
pub fn ask_question<R, F>(
    question: &Question,
    num: usize,
    total: usize,
    rng: &mut R,
    ui: &mut F,
) -> (bool, String)
where
    R: Rng,
    F: FnMut(UiMessage),
{
    let mut shuffled: Vec<&str> = question.options.iter().map(String::as_str).collect();
    shuffled.shuffle(rng);
    let choices: Vec<(char, &str)> = shuffled
        .iter()
        .enumerate()
        .map(|(i, &opt)| ((b'a' + i as u8) as char, opt))
        .collect();
    loop {
        let mut reply = String::new();
        ui(UiMessage::Prompt {
            question: &question.question,
            num,
            total,
            choices: &choices,
            reply: &mut reply,
        });
        let reply = reply.trim().to_lowercase();
        if let Some(&(_, chosen)) = choices.iter().find(|(label, _)| label.to_string() == reply) {
            return (question.assess(chosen), question.answer.clone());
        }
        ui(UiMessage::Reject);
    }
}

pub struct Simulation<R: Rng> {
    pub progress: Progress,
    rng: R,
}

impl<R: Rng> Simulation<R> {
    pub fn new(progress: Progress, rng: R) -> Simulation<R> {
        Simulation { progress, rng }
    }

    /// Run a fresh quiz over the full table, in an order shuffled once
    /// per run. The progress record is updated in memory only; the caller
    /// persists it afterwards, exactly once.
    pub fn run_quiz<F>(&mut self, mut questions: Vec<Question>, ui: &mut F)
    where
        F: FnMut(UiMessage),
    {
        questions.shuffle(&mut self.rng);
        let total = questions.len();
        for (index, question) in questions.iter().enumerate() {
            let (pass, answer) = ask_question(question, index + 1, total, &mut self.rng, ui);
            self.progress.record(question, pass);
            if pass {
                ui(UiMessage::Correct);
            } else {
                ui(UiMessage::Incorrect { answer: &answer });
            }
        }
    }

    /// Replay the missed questions in stored order, revealing the answer
    /// after each one without touching the counters. Clears the missed
    /// list and returns true if there was anything to review, so the
    /// caller knows whether a save is due; on an empty list nothing is
    /// changed and no save must happen.
    pub fn review<F>(&mut self, ui: &mut F) -> bool
    where
        F: FnMut(UiMessage),
    {
        if self.progress.missed_questions.is_empty() {
            ui(UiMessage::NothingToReview);
            return false;
        }
        ui(UiMessage::ReviewBegin);
        let missed = std::mem::take(&mut self.progress.missed_questions);
        let total = missed.len();
        for (index, question) in missed.iter().enumerate() {
            let (_, answer) = ask_question(question, index + 1, total, &mut self.rng, ui);
            ui(UiMessage::Reveal { answer: &answer });
        }
        true
    }
}
