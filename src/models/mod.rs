pub mod algorithm;
pub mod loaders;
pub mod question;

pub use algorithm::Algorithm;
pub use loaders::{load_question_list, save_question_list};
pub use question::{number_questions, NumberedQuestion, QuestionList};
