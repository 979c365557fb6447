use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use log::{debug, warn};
use marubatsu::{QuestionBank, QuizState};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

mod cli;

#[derive(Parser, Debug)]
#[command(name = "○×クイズ (Marubatsu)")]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, value_name = "FILE")]
    bank: Option<PathBuf>,
    #[arg(short, long, default_value_t = QuizState::DEFAULT_SIZE)]
    question_count: usize,
    #[arg(short, long)]
    seed: Option<u64>,
    #[arg(short, long, default_value = "error")]
    log_level: String,
}

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error(transparent)]
    Quiz(#[from] marubatsu::Error),
    #[error("terminal I/O failed")]
    Io(#[from] io::Error),
}

fn main() -> Result<(), Error> {
    //INIT START
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level)).init();

    let bank = match args.bank {
        Some(path) => QuestionBank::from_json_file(path)?,
        None => QuestionBank::builtin(),
    };
    debug!("[Setup] Bank holds {} questions.", bank.len());

    let mut rng = match args.seed {
        Some(seed) => {
            debug!("[Setup] Seeding with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let mut quiz = match QuizState::new(&bank, args.question_count, &mut rng) {
        Ok(quiz) => quiz,
        Err(err) => {
            warn!("[Setup] Cannot start quiz: {}", err);
            println!("{}", setup_failure_message(&err).yellow());
            return Err(err.into());
        }
    };
    debug!("[Setup] Questions: {:?}", quiz.questions());

    // INIT DONE

    println!(
        "{}",
        format!("==========> ○× Quiz ({} questions) <==========", quiz.len()).cyan()
    );
    let stdin = io::stdin();
    let stdout = io::stdout();
    cli::cli_loop(&mut quiz, &mut stdin.lock(), &mut stdout.lock())
}

fn setup_failure_message(err: &marubatsu::Error) -> String {
    format!("Cannot start the quiz: {}.", err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_questions_is_reported_as_such() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = QuizState::new(&QuestionBank::builtin(), 0, &mut rng).unwrap_err();

        let message = setup_failure_message(&err);
        assert!(message.contains("a quiz needs at least one question"));
        assert!(!message.contains("bank of"));
    }

    #[test]
    fn oversized_quiz_names_the_bank_size() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = QuizState::new(&QuestionBank::builtin(), 11, &mut rng).unwrap_err();

        assert!(setup_failure_message(&err).contains("cannot sample 11 questions from a bank of 10"));
    }
}
