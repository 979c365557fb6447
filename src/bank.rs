use crate::error::{Error, Result};
use crate::question::Question;
use log::{debug, info, warn};
use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::slice::Iter;
use std::time::Instant;

#[derive(Serialize, Deserialize, Debug)]
struct BankJson {
    questions: Vec<QuestionJson>,
}
#[derive(Serialize, Deserialize, Debug)]
struct QuestionJson {
    question: String,
    answer: bool,
}

/// The catalog every quiz session draws its questions from. Built once,
/// then only ever lent out by shared reference.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if let Some(index) = questions.iter().position(|q| q.text().trim().is_empty()) {
            warn!("[Bank] Entry #{} has no question text.", index);
            return Err(Error::MalformedEntry { index });
        }

        Ok(Self {
            questions: questions.iter().map(Question::fresh_copy).collect(),
        })
    }

    pub fn builtin() -> Self {
        let questions = [
            ("Is water wet?", true),
            ("Is fire hot?", true),
            ("Is ice cold?", true),
            ("Is 5 greater than 6?", false),
            ("Can deer fly?", false),
            ("Is this app working?", true),
            ("Are puzzles puzzling?", true),
            ("Can dolphins breathe air?", true),
            ("Are potatoes fruits?", false),
            ("Is false equal to true?", false),
        ]
        .into_iter()
        .map(|(text, answer)| Question::new(text, answer))
        .collect();

        Self { questions }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let content: BankJson = serde_json::from_str(json)?;
        Self::new(
            content
                .questions
                .into_iter()
                .map(|q| Question::new(q.question, q.answer))
                .collect(),
        )
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let now = Instant::now();
        let json = std::fs::read_to_string(path)?;
        let bank = Self::from_json_str(&json)?;
        info!(
            "[Bank] Loaded {} questions from {:?} in {} ms.",
            bank.len(),
            path,
            now.elapsed().as_millis()
        );
        Ok(bank)
    }

    pub fn to_json_string(&self) -> Result<String> {
        let content = BankJson {
            questions: self
                .questions
                .iter()
                .map(|q| QuestionJson {
                    question: q.text().to_owned(),
                    answer: q.correct_answer(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&content)?)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> Iter<'_, Question> {
        self.questions.iter()
    }

    /// Draws `n` distinct questions uniformly at random, without replacement.
    /// Every returned question is a fresh copy, so answering it leaves the
    /// bank untouched.
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<Question>> {
        if n > self.questions.len() {
            warn!(
                "[Bank] Asked for {} questions but the bank only holds {}.",
                n,
                self.questions.len()
            );
            return Err(Error::InvalidArgument(format!(
                "cannot sample {} questions from a bank of {}",
                n,
                self.questions.len()
            )));
        }

        let picked = index::sample(rng, self.questions.len(), n);
        debug!("[Bank] Picked indices {:?}", picked);
        Ok(picked
            .iter()
            .map(|i| self.questions[i].fresh_copy())
            .collect())
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a Question;
    type IntoIter = Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
