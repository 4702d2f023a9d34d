/*
 * main.rs -- Core application
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

extern crate clap;
extern crate crossterm;
extern crate ctrlc;
extern crate env_logger;
extern crate rand;

mod args;
mod cli;

use clap::Parser;
use rand::thread_rng;
use std::io::BufRead;
use viktorina::ent::QuizError;
use viktorina::file;
use viktorina::sim::{Simulation, UiMessage};

fn init() {
    use crossterm::{cursor, ExecutableCommand};
    ctrlc::set_handler(|| {
        std::io::stdout().lock().execute(cursor::Show).unwrap();
        println!();
        println!("Viso gero!");
        std::process::exit(0);
    })
    .unwrap();

    print!(
        "    VIKTORINA {} -- Klausimų programa / Multiple-choice quiz runner
    Copyright (C) 2022 Arnoldas Rauba

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.

    Press ENTER to begin
",
        viktorina::version()
    );
    cli::standby(&mut std::io::stdin().lock().lines());
}

fn run(args: &args::Args) -> Result<(), QuizError> {
    let progress = file::load_progress(&args.progress)?;
    let mut sim = Simulation::new(progress, thread_rng());
    if args.review {
        if sim.review(&mut cli::handle) {
            file::save_progress(&sim.progress, &args.progress)?;
        }
    } else {
        let questions = file::load_questions(&args.inpath)?;
        sim.run_quiz(questions, &mut cli::handle);
        file::save_progress(&sim.progress, &args.progress)?;
        cli::handle(UiMessage::Score {
            correct: sim.progress.correct,
            attempted: sim.progress.attempted,
        });
    }
    Ok(())
}

fn main() {
    env_logger::init();
    init();
    let args = args::Args::parse();
    cli::cls();
    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
