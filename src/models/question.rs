use serde::{Deserialize, Serialize};

/// 题目列表
///
/// 按位置排列的题干字符串，空字符串表示尚未填写的题目，导出时跳过
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionList {
    #[serde(default)]
    pub questions: Vec<String>,
}

/// 带编号的题目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberedQuestion<'a> {
    /// 题号（从1开始，不计空题）
    pub number: usize,
    pub text: &'a str,
}

impl QuestionList {
    pub fn new(questions: Vec<String>) -> Self {
        Self { questions }
    }

    /// 新题目集：只有一个空位
    pub fn blank() -> Self {
        Self {
            questions: vec![String::new()],
        }
    }

    /// 非空题目数量
    pub fn filled_count(&self) -> usize {
        self.questions.iter().filter(|q| !q.is_empty()).count()
    }

    /// 按顺序给非空题目编号
    pub fn numbered(&self) -> Vec<NumberedQuestion<'_>> {
        number_questions(&self.questions)
    }
}

/// 给非空题目连续编号，空题不占用题号
pub fn number_questions<S: AsRef<str>>(questions: &[S]) -> Vec<NumberedQuestion<'_>> {
    questions
        .iter()
        .map(AsRef::as_ref)
        .filter(|q| !q.is_empty())
        .enumerate()
        .map(|(idx, text)| NumberedQuestion {
            number: idx + 1,
            text,
        })
        .collect()
}

impl From<Vec<String>> for QuestionList {
    fn from(questions: Vec<String>) -> Self {
        Self::new(questions)
    }
}
