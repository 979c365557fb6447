use crate::Error;
use colored::Colorize;
use log::debug;
use marubatsu::QuizState;
use std::io::{self, BufRead, Write};

const COMMANDS: &str = "t/f to answer, < or > to move between questions, q to quit";

#[derive(Debug, PartialEq)]
pub(crate) enum Choice {
    Answer(bool),
    Next,
    Previous,
    Quit,
    Unknown,
}

impl Choice {
    pub(crate) fn from_str(input: &str) -> Choice {
        match input.trim().to_lowercase().as_str() {
            "t" | "true" | "y" | "yes" => Choice::Answer(true),
            "f" | "false" | "n" | "no" => Choice::Answer(false),
            ">" | "next" => Choice::Next,
            "<" | "prev" | "back" => Choice::Previous,
            "q" | "quit" => Choice::Quit,
            _ => Choice::Unknown,
        }
    }
}

fn print_question(quiz: &QuizState, out: &mut impl Write) -> io::Result<()> {
    let leading = format!("{}/{}. ", quiz.cursor() + 1, quiz.len());
    writeln!(
        out,
        "{}{}",
        leading.cyan(),
        quiz.current_question_text().black().bold().on_white()
    )?;

    if let Ok(correct) = quiz.is_current_correct() {
        let indent = " ".repeat(leading.len());
        if correct {
            writeln!(out, "{}{}", indent, "You answered this correctly.".green())?;
        } else {
            writeln!(out, "{}{}", indent, "You answered this incorrectly.".red())?;
        }
    }
    Ok(())
}

fn print_summary(quiz: &QuizState, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", quiz.summary().to_string().bold())
}

/// Plays `quiz` until every question is answered, the player quits, or
/// `input` runs dry. The summary is printed in all three cases.
pub fn cli_loop<R: BufRead, W: Write>(
    quiz: &mut QuizState,
    input: &mut R,
    out: &mut W,
) -> Result<(), Error> {
    let mut line = String::new();
    while !quiz.is_game_over() {
        print_question(quiz, out)?;
        write!(out, "{} ", format!("Answer ({}):", COMMANDS).cyan())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("[Quiz] Input closed.");
            writeln!(out)?;
            print_summary(quiz, out)?;
            return Ok(());
        }
        let choice = Choice::from_str(&line);
        debug!("choice: {:?}", choice);

        match choice {
            Choice::Answer(value) => {
                if quiz.answer(value)? {
                    writeln!(out, "{}", "Correct!".bright_green())?;
                } else {
                    writeln!(out, "{}", "Wrong!".bright_red())?;
                }
            }
            Choice::Next => {
                if !quiz.advance() {
                    writeln!(out, "{}", "This is the last question.".yellow())?;
                }
            }
            Choice::Previous => {
                if !quiz.retreat() {
                    writeln!(out, "{}", "This is the first question.".yellow())?;
                }
            }
            Choice::Quit => {
                writeln!(out, "{}", "Quitting Early!".cyan())?;
                print_summary(quiz, out)?;
                return Ok(());
            }
            Choice::Unknown => {
                writeln!(out, "{}", format!("Unknown input. Use {}.", COMMANDS).yellow())?;
            }
        }
    }

    writeln!(out, "{}", "Game over!".cyan())?;
    print_summary(quiz, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use marubatsu::Question;

    fn play(input: &str) -> (QuizState, String) {
        let mut quiz = QuizState::from_questions(vec![
            Question::new("A", true),
            Question::new("B", false),
            Question::new("C", true),
        ])
        .unwrap();
        let mut out = Vec::new();
        cli_loop(&mut quiz, &mut input.as_bytes(), &mut out).unwrap();
        (quiz, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parses_answers() {
        assert_eq!(Choice::from_str("t"), Choice::Answer(true));
        assert_eq!(Choice::from_str("  Yes "), Choice::Answer(true));
        assert_eq!(Choice::from_str("F"), Choice::Answer(false));
        assert_eq!(Choice::from_str("no\n"), Choice::Answer(false));
    }

    #[test]
    fn parses_navigation_and_quit() {
        assert_eq!(Choice::from_str(">"), Choice::Next);
        assert_eq!(Choice::from_str("back"), Choice::Previous);
        assert_eq!(Choice::from_str("q"), Choice::Quit);
    }

    #[test]
    fn anything_else_is_unknown() {
        assert_eq!(Choice::from_str(""), Choice::Unknown);
        assert_eq!(Choice::from_str("maybe"), Choice::Unknown);
    }

    #[test]
    fn answering_everything_ends_with_game_over_summary() {
        let (quiz, out) = play("t\nf\nt\n");

        assert!(quiz.is_game_over());
        assert_eq!(out.matches("Correct!").count(), 3);
        assert!(out.contains("Game over!"));
        assert!(out.contains("Your score: 3"));
        assert!(out.contains("Questions answered: 3"));
    }

    #[test]
    fn quitting_early_prints_summary() {
        let (quiz, out) = play("t\nq\nf\n");

        assert!(!quiz.is_game_over());
        assert_eq!(quiz.answered_count(), 1);
        assert!(out.contains("Quitting Early!"));
        assert!(out.contains("Your score: 1"));
        assert!(!out.contains("Game over!"));
    }

    #[test]
    fn empty_input_stops_with_summary() {
        let (quiz, out) = play("");

        assert_eq!(quiz.answered_count(), 0);
        assert!(out.contains("Your score: 0"));
        assert!(!out.contains("Unknown input"));
        assert_eq!(out.matches("Answer (").count(), 1);
    }

    #[test]
    fn input_closing_mid_game_stops_with_summary() {
        let (quiz, out) = play("t\n");

        assert_eq!(quiz.answered_count(), 1);
        assert!(out.contains("Your score: 1"));
        assert_eq!(out.matches("Answer (").count(), 2);
    }

    #[test]
    fn navigation_notices_at_both_ends() {
        let (quiz, out) = play("<\n>\n>\n>\n");

        assert_eq!(quiz.cursor(), 2);
        assert!(out.contains("This is the first question."));
        assert!(out.contains("This is the last question."));
    }

    #[test]
    fn revisited_question_shows_its_status() {
        let (_, out) = play("f\n<\n");

        assert!(out.contains("Wrong!"));
        assert!(out.contains("You answered this incorrectly."));
    }

    #[test]
    fn unknown_input_lists_every_command() {
        let (_, out) = play("maybe\n");

        assert!(out.contains("Unknown input."));
        assert!(out.contains("< or > to move between questions, q to quit"));
    }
}
