/// 相似度打分算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum Algorithm {
    /// TF-IDF 与 Word2Vec
    TfidfWord2vec,
    /// BERT
    Bert,
    /// 平滑逆频率（ARORA）
    SmoothInverseFrequency,
    /// Universal Sentence Encoder
    #[default]
    UniversalSentenceEncoder,
}

impl Algorithm {
    /// 全部可选算法，按菜单顺序排列
    pub const ALL: [Algorithm; 4] = [
        Algorithm::TfidfWord2vec,
        Algorithm::Bert,
        Algorithm::SmoothInverseFrequency,
        Algorithm::UniversalSentenceEncoder,
    ];

    /// 菜单中显示的名称
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::TfidfWord2vec => "TFIDF_word2vec",
            Algorithm::Bert => "BERT",
            Algorithm::SmoothInverseFrequency => "Smooth inverse frequency",
            Algorithm::UniversalSentenceEncoder => "Universal Sentence Encoder",
        }
    }

    /// 后端接口使用的参数值
    pub fn api_param(self) -> &'static str {
        match self {
            Algorithm::TfidfWord2vec => "tf-idf and Word2Vec",
            Algorithm::Bert => "BERT",
            Algorithm::SmoothInverseFrequency => "ARORA",
            Algorithm::UniversalSentenceEncoder => "USE",
        }
    }

    /// 从显示名称或接口参数解析（忽略大小写）
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|algo| {
            algo.name().eq_ignore_ascii_case(s) || algo.api_param().eq_ignore_ascii_case(s)
        })
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
