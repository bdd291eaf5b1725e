//! PDF 渲染
//!
//! 先把标题和题目排成逐页的文本块（坐标以页面顶部为原点，单位 pt），
//! 再用 lopdf 编码成 PDF 字节流。

use crate::error::{ExportError, ExportResult};
use crate::export::metrics::wrap_text;
#[cfg(test)]
use crate::export::metrics::glyph_width;
use crate::export::{DocumentRenderer, DOCUMENT_TITLE};
use crate::models::NumberedQuestion;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use tracing::debug;

pub const PDF_FILE_NAME: &str = "questions.pdf";

/// 页面版式参数
#[derive(Debug, Clone, PartialEq)]
pub struct PdfLayout {
    /// A4 宽度
    pub page_width: f32,
    /// A4 高度
    pub page_height: f32,
    /// 计算可打印宽度时使用的版面宽度
    pub layout_width: f32,
    pub left_margin: f32,
    pub right_margin: f32,
    pub bottom_margin: f32,
    /// 标题基线位置
    pub title_y: f32,
    pub title_font_size: f32,
    pub body_font_size: f32,
    /// 每页第一题之前的游标位置
    pub top_offset: f32,
    pub line_height: f32,
    /// 题干相对题号的缩进
    pub text_indent: f32,
}

impl Default for PdfLayout {
    fn default() -> Self {
        Self {
            page_width: 595.28,
            page_height: 841.89,
            layout_width: 570.0,
            left_margin: 50.0,
            right_margin: 50.0,
            bottom_margin: 120.0,
            title_y: 60.0,
            title_font_size: 20.0,
            body_font_size: 12.0,
            top_offset: 80.0,
            line_height: 20.0,
            text_indent: 20.0,
        }
    }
}

impl PdfLayout {
    /// 题干可用宽度
    pub fn printable_width(&self) -> f32 {
        self.layout_width - self.left_margin - self.right_margin
    }

    /// 游标超过该值后换页
    pub fn break_threshold(&self) -> f32 {
        self.page_height - self.bottom_margin
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Regular,
    Bold,
}

impl FontFace {
    fn resource_name(self) -> &'static str {
        match self {
            FontFace::Regular => "F1",
            FontFace::Bold => "F2",
        }
    }
}

/// 一段定位好的文本
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    /// 距页面顶部的距离
    pub y: f32,
    pub face: FontFace,
    pub size: f32,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageContent {
    pub runs: Vec<TextRun>,
}

/// PDF 渲染器
///
/// 换页检查只在一道题的全部行输出之后进行，
/// 因此单道超长题目会越过页面底部而不会在题目中间换页。
pub struct PdfRenderer {
    layout: PdfLayout,
    pages: Vec<PageContent>,
    cursor: f32,
    title: Option<String>,
}

impl PdfRenderer {
    pub fn new(layout: PdfLayout) -> Self {
        let cursor = layout.top_offset;
        Self {
            layout,
            pages: vec![PageContent::default()],
            cursor,
            title: None,
        }
    }

    /// 已排好的页面
    pub fn pages(&self) -> &[PageContent] {
        &self.pages
    }

    fn push_run(&mut self, run: TextRun) {
        if let Some(page) = self.pages.last_mut() {
            page.runs.push(run);
        }
    }

    fn encode(&self) -> ExportResult<Vec<u8>> {
        let layout = &self.layout;
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let regular_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let bold_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => regular_id,
                "F2" => bold_id,
            },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for page in &self.pages {
            let mut operations = Vec::with_capacity(page.runs.len() * 5);
            for run in &page.runs {
                operations.push(Operation::new("BT", vec![]));
                operations.push(Operation::new(
                    "Tf",
                    vec![run.face.resource_name().into(), run.size.into()],
                ));
                operations.push(Operation::new(
                    "Td",
                    vec![run.x.into(), (layout.page_height - run.y).into()],
                ));
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::string_literal(encode_win_ansi(&run.text))],
                ));
                operations.push(Operation::new("ET", vec![]));
            }

            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), layout.page_width.into(), layout.page_height.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(
                encode_win_ansi(self.title.as_deref().unwrap_or(DOCUMENT_TITLE))
            ),
            "CreationDate" => Object::string_literal(
                format!("D:{}", chrono::Local::now().format("%Y%m%d%H%M%S"))
            ),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);
        doc.compress();

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).map_err(lopdf::Error::from)?;

        debug!("PDF 编码完成: {} 页, {} 字节", self.pages.len(), bytes.len());

        Ok(bytes)
    }
}

impl DocumentRenderer for PdfRenderer {
    fn file_name(&self) -> &str {
        PDF_FILE_NAME
    }

    fn render_title(&mut self, title: &str) -> ExportResult<()> {
        check_encodable(title, 0)?;
        let run = TextRun {
            x: self.layout.left_margin,
            y: self.layout.title_y,
            face: FontFace::Bold,
            size: self.layout.title_font_size,
            text: title.to_string(),
        };
        self.push_run(run);
        self.title = Some(title.to_string());
        Ok(())
    }

    fn render_items(&mut self, items: &[NumberedQuestion<'_>]) -> ExportResult<()> {
        let left = self.layout.left_margin;
        let line_height = self.layout.line_height;
        let size = self.layout.body_font_size;
        let width = self.layout.printable_width();

        for item in items {
            check_encodable(item.text, item.number)?;
            let lines = wrap_text(item.text, size, width);

            // 题号与第一行题干同一基线
            let number_run = TextRun {
                x: left,
                y: self.cursor + line_height,
                face: FontFace::Regular,
                size,
                text: format!("{}. ", item.number),
            };
            self.push_run(number_run);

            for line in lines {
                self.cursor += line_height;
                let run = TextRun {
                    x: left + self.layout.text_indent,
                    y: self.cursor,
                    face: FontFace::Regular,
                    size,
                    text: line,
                };
                self.push_run(run);
            }

            if self.cursor > self.layout.break_threshold() {
                self.cursor = self.layout.top_offset;
                self.pages.push(PageContent::default());
            }
        }

        Ok(())
    }

    fn finish(&mut self) -> ExportResult<Vec<u8>> {
        self.encode()
    }
}

/// 标准字体 WinAnsi 编码下的字节
///
/// 0x81 0x8D 0x8F 0x90 0x9D 在 WinAnsi 中未定义
fn win_ansi_byte(c: char) -> Option<u8> {
    match c {
        ' '..='~' | '\u{A0}'..='\u{FF}' => Some(c as u32 as u8),
        _ => WIN_ANSI_HIGH
            .iter()
            .find(|(ch, _)| *ch == c)
            .map(|(_, byte)| *byte),
    }
}

/// WinAnsi 0x80-0x9F 区段
const WIN_ANSI_HIGH: [(char, u8); 27] = [
    ('€', 0x80), ('‚', 0x82), ('ƒ', 0x83), ('„', 0x84), ('…', 0x85), ('†', 0x86),
    ('‡', 0x87), ('ˆ', 0x88), ('‰', 0x89), ('Š', 0x8A), ('‹', 0x8B), ('Œ', 0x8C),
    ('Ž', 0x8E), ('‘', 0x91), ('’', 0x92), ('“', 0x93), ('”', 0x94), ('•', 0x95),
    ('–', 0x96), ('—', 0x97), ('˜', 0x98), ('™', 0x99), ('š', 0x9A), ('›', 0x9B),
    ('œ', 0x9C), ('ž', 0x9E), ('Ÿ', 0x9F),
];

fn check_encodable(text: &str, question: usize) -> ExportResult<()> {
    for ch in text.chars() {
        if ch.is_whitespace() {
            continue;
        }
        if win_ansi_byte(ch).is_none() {
            return Err(ExportError::UnsupportedCharacter { question, ch });
        }
    }
    Ok(())
}

fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().filter_map(win_ansi_byte).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::number_questions;

    fn render(questions: &[&str]) -> PdfRenderer {
        let mut renderer = PdfRenderer::new(PdfLayout::default());
        renderer.render_title("Questions").unwrap();
        renderer.render_items(&number_questions(questions)).unwrap();
        renderer
    }

    fn numbers(renderer: &PdfRenderer) -> Vec<String> {
        renderer
            .pages()
            .iter()
            .flat_map(|p| p.runs.iter())
            .filter(|r| r.x == 50.0 && r.face == FontFace::Regular)
            .map(|r| r.text.clone())
            .collect()
    }

    #[test]
    fn default_layout_metrics() {
        let layout = PdfLayout::default();
        assert_eq!(layout.printable_width(), 470.0);
        assert!((layout.break_threshold() - 721.89).abs() < 1e-3);
    }

    #[test]
    fn empty_list_renders_only_title() {
        let renderer = render(&[]);
        assert_eq!(renderer.pages().len(), 1);
        let runs = &renderer.pages()[0].runs;
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "Questions");
        assert_eq!(runs[0].face, FontFace::Bold);
        assert_eq!(runs[0].size, 20.0);
        assert_eq!((runs[0].x, runs[0].y), (50.0, 60.0));
    }

    #[test]
    fn numbering_skips_empty_slots() {
        let renderer = render(&["", "A", "", "B"]);
        assert_eq!(numbers(&renderer), vec!["1. ", "2. "]);
    }

    #[test]
    fn number_shares_baseline_with_first_line() {
        let renderer = render(&["Q1", "Q2"]);
        let runs = &renderer.pages()[0].runs;
        // 标题, 1., Q1, 2., Q2
        assert_eq!(runs.len(), 5);
        assert_eq!((runs[1].x, runs[1].y), (50.0, 100.0));
        assert_eq!((runs[2].x, runs[2].y), (70.0, 100.0));
        assert_eq!(runs[2].text, "Q1");
        assert_eq!((runs[3].x, runs[3].y), (50.0, 120.0));
        assert_eq!((runs[4].x, runs[4].y), (70.0, 120.0));
    }

    #[test]
    fn page_breaks_after_cursor_passes_threshold() {
        // 起始 80，每题 20，第 33 题后游标为 740 > 721.89
        let questions: Vec<String> = (1..=40).map(|i| format!("Question {}", i)).collect();
        let refs: Vec<&str> = questions.iter().map(String::as_str).collect();
        let renderer = render(&refs);

        assert_eq!(renderer.pages().len(), 2);
        // 标题 + 33 题 * 2
        assert_eq!(renderer.pages()[0].runs.len(), 1 + 33 * 2);
        let second = &renderer.pages()[1].runs;
        assert_eq!(second[0].text, "34. ");
        assert_eq!(second[0].y, 100.0);
        assert_eq!(numbers(&renderer).len(), 40);
    }

    #[test]
    fn long_question_overflows_without_mid_question_break() {
        let long = "overflow ".repeat(800);
        let renderer = render(&[long.trim(), "after"]);

        assert_eq!(renderer.pages().len(), 2);
        let first = &renderer.pages()[0].runs;
        let lowest = first.iter().map(|r| r.y).fold(0.0_f32, f32::max);
        assert!(lowest > PdfLayout::default().page_height);

        let second = &renderer.pages()[1].runs;
        assert_eq!(second[0].text, "2. ");
        assert_eq!(second[1].text, "after");
    }

    #[test]
    fn unsupported_character_is_reported_with_number() {
        let mut renderer = PdfRenderer::new(PdfLayout::default());
        let err = renderer
            .render_items(&number_questions(&["ok", "", "什么是所有权？"]))
            .unwrap_err();
        assert!(matches!(
            err,
            ExportError::UnsupportedCharacter { question: 2, ch: '什' }
        ));
    }

    #[test]
    fn smart_quotes_are_encodable() {
        assert_eq!(encode_win_ansi("“x”"), vec![0x93, b'x', 0x94]);
        assert_eq!(encode_win_ansi("café"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(
            encode_win_ansi("™Œœ Šš Žž Ÿƒ„†‡ˆ‰‹›˜"),
            vec![
                0x99, 0x8C, 0x9C, b' ', 0x8A, 0x9A, b' ', 0x8E, 0x9E, b' ', 0x9F, 0x83, 0x84,
                0x86, 0x87, 0x88, 0x89, 0x8B, 0x9B, 0x98,
            ]
        );
    }

    #[test]
    fn every_encodable_character_has_a_width() {
        let printable = (' '..='~').chain('\u{A0}'..='\u{FF}');
        let high = WIN_ANSI_HIGH.iter().map(|(ch, _)| *ch);
        for ch in printable.chain(high) {
            assert!(win_ansi_byte(ch).is_some(), "{:?}", ch);
            assert!(glyph_width(ch).is_some(), "missing width for {:?}", ch);
        }
    }

    #[test]
    fn cp1252_only_text_exports() {
        let questions = ["Rust™ basics", "Œuvre complète", "Škoda—50‰ rate"];
        let mut renderer = render(&questions);
        assert_eq!(numbers(&renderer).len(), 3);
        assert!(renderer.finish().is_ok());
    }

    #[test]
    fn info_title_follows_rendered_title() {
        let mut renderer = PdfRenderer::new(PdfLayout::default());
        renderer.render_title("Week 3 Quiz").unwrap();
        let bytes = renderer.finish().unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let info = doc.get_dictionary(info_id).unwrap();
        assert_eq!(info.get(b"Title").unwrap().as_str().unwrap(), b"Week 3 Quiz");
    }

    #[test]
    fn encoded_document_has_expected_page_count() {
        let mut renderer = render(&["What is ownership?", "", "What is borrowing?"]);
        let bytes = renderer.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }
}
