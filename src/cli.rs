use crossterm::{cursor, terminal, ExecutableCommand};
use std::io::{stdin, stdout, BufRead, Lines, StdinLock, Write};
use viktorina::sim::UiMessage;

pub fn cls() {
    stdout()
        .lock()
        .execute(terminal::Clear(terminal::ClearType::All))
        .unwrap()
        .execute(cursor::MoveTo(0, 1))
        .unwrap();
}

pub fn standby(lines: &mut Lines<StdinLock>) {
    stdout().lock().execute(cursor::Hide).unwrap();
    if let Some(x) = lines.next() {
        x.unwrap();
    }
    stdout().lock().execute(cursor::Show).unwrap();
    cls();
}

fn read_reply(reply: &mut String) {
    match stdin().lock().lines().next() {
        Some(Ok(line)) => *reply = line,
        // Closed stdin ends the session like an interrupt would;
        // the current run is not saved.
        _ => {
            println!();
            println!("Viso gero!");
            std::process::exit(0);
        }
    }
}

/// Render one session message on the console. The only input point is
/// `Prompt`, which reads a single line from stdin into the message.
pub fn handle(msg: UiMessage) {
    match msg {
        UiMessage::Prompt {
            question,
            num,
            total,
            choices,
            reply,
        } => {
            println!();
            println!("🔹 {}/{} {}", num, total, question);
            for (label, text) in choices {
                println!("  {}) {}", label, text);
            }
            let labels: Vec<String> = choices.iter().map(|(l, _)| l.to_string()).collect();
            print!("\nYour answer ({}): ", labels.join("/"));
            stdout().lock().flush().unwrap();
            read_reply(reply);
        }
        UiMessage::Reject => println!("❌ Invalid choice."),
        UiMessage::Correct => println!("✅ Correct!"),
        UiMessage::Incorrect { answer } => {
            println!("❌ Wrong! The correct answer is: {}", answer)
        }
        UiMessage::Reveal { answer } => println!("✅ Correct answer: {}", answer),
        UiMessage::ReviewBegin => {
            println!("📌 Review mode: re-attempting previously missed questions.")
        }
        UiMessage::NothingToReview => println!("🎉 No missed questions to review! Well done!"),
        UiMessage::Score { correct, attempted } => {
            println!();
            println!("🎯 Quiz finished! Score: {}/{}", correct, attempted);
            println!("🔄 Run with --review to revisit missed questions.");
        }
    }
}
