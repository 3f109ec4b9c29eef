//! Oracle prompt composition.
//!
//! The user prompt carries the request (character, attributes, budget, notes).
//! The system instruction is fixed and defines the nine-marker output contract
//! that [`crate::parser`] reads back.

use std::fmt::Write;

use crate::attributes::ResolvedAttributes;
use crate::currency::format_vnd;
use crate::oracle::OraclePrompt;
use crate::parser::Section;
use crate::suggestion::SuggestionRequest;

/// Bumped whenever the output contract in the system instruction changes.
pub const SYSTEM_INSTRUCTION_VERSION: &str = "cosplay-advisor/3";

/// Shown instead of a budget figure when the request sets no positive budget.
pub const UNLIMITED_BUDGET: &str = "Không giới hạn";

/// Shown for an attribute that neither the profile nor the request provides.
const UNSPECIFIED: &str = "không rõ";

/// Build the complete oracle request for a suggestion.
pub fn compose(request: &SuggestionRequest, attributes: &ResolvedAttributes) -> OraclePrompt {
    OraclePrompt {
        system_instruction: system_instruction(),
        user_prompt: user_prompt(request, attributes),
    }
}

/// Build the user prompt.
pub fn user_prompt(request: &SuggestionRequest, attributes: &ResolvedAttributes) -> String {
    let mut prompt = String::new();

    let _ = writeln!(prompt, "Tôi muốn cosplay nhân vật: {}", request.character_name.trim());
    prompt.push_str("Thông tin cá nhân:\n");
    let _ = writeln!(prompt, "- Chiều cao: {}", measurement(attributes.height, "cm"));
    let _ = writeln!(prompt, "- Cân nặng: {}", measurement(attributes.weight, "kg"));
    let _ = writeln!(
        prompt,
        "- Giới tính: {}",
        attributes.gender.as_deref().unwrap_or(UNSPECIFIED)
    );

    match request.budget_ceiling() {
        Some(budget) => {
            let _ = writeln!(prompt, "- Ngân sách: {} VND", format_vnd(budget));
        }
        None => {
            let _ = writeln!(prompt, "- Ngân sách: {UNLIMITED_BUDGET}");
        }
    }

    if let Some(notes) = request.notes.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        let _ = writeln!(prompt, "- Ghi chú thêm: {notes}");
    }

    prompt.push_str(
        "\nHãy phân tích chi tiết nhân vật này bao gồm:\
         \n- Xuất xứ và bối cảnh (anime/game/manga nào)\
         \n- Tính cách và đặc điểm nhân vật\
         \n- Đặc điểm ngoại hình chi tiết (tóc, mắt, cao thấp, vóc dáng)\
         \n- Trang phục đặc trưng và ý nghĩa\
         \n- Các pose/biểu cảm đặc trưng\
         \n- Mức độ phổ biến trong cộng đồng cosplay\
         \nRồi đưa ra gợi ý cosplay toàn diện và thực tế cho tôi.",
    );

    prompt
}

fn measurement(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{v} {unit}"),
        None => UNSPECIFIED.to_string(),
    }
}

/// Build the fixed system instruction.
///
/// Lists every marker of [`Section::ALL`] in order, with the content expected
/// under each.
pub fn system_instruction() -> String {
    let mut out = String::from(
        "Bạn là một chuyên gia cosplay chuyên nghiệp với kiến thức sâu rộng về anime, manga, \
         game và văn hóa otaku. Bạn hiểu rõ các nhân vật, bối cảnh, tính cách và ý nghĩa của \
         từng series.\n\n\
         Định dạng phản hồi theo cấu trúc sau, mỗi phần bắt đầu bằng đúng thẻ trong ngoặc vuông:\n",
    );

    for section in Section::ALL {
        let _ = write!(out, "\n{}\n{}\n", section.tag(), section_guidance(section));
    }

    let tags: Vec<String> = Section::ALL.iter().map(|s| s.tag()).collect();
    let _ = write!(
        out,
        "\n**QUAN TRỌNG: Phải bao gồm đầy đủ TẤT CẢ {} phần: {}. Không được bỏ sót phần nào!**\n\
         Không dùng ký tự '[' hoặc ']' ở bất kỳ đâu ngoài các thẻ trên.\n\
         Hãy sử dụng tiếng Việt, đưa ra lời khuyên thực tế và có thể thực hiện.\n\
         (phiên bản định dạng: {SYSTEM_INSTRUCTION_VERSION})\n",
        tags.len(),
        tags.join(", "),
    );

    out
}

fn section_guidance(section: Section) -> &'static str {
    match section {
        Section::CharacterDescription => {
            "Mô tả toàn diện về nhân vật: xuất xứ (series, năm ra mắt, thể loại), vai trò, \
             tính cách, ngoại hình (tóc, mắt, chiều cao, vóc dáng), trang phục, phụ kiện, \
             pose đặc trưng và mức độ phổ biến trong cộng đồng cosplay."
        }
        Section::DifficultyLevel => {
            "EASY/MEDIUM/HARD (chỉ trả về 1 từ dựa trên độ phức tạp trang phục, makeup và props)"
        }
        Section::SuitabilityScore => {
            "Chỉ trả về một con số từ 1-10 (mức độ phù hợp dựa trên thông số cơ thể và đặc điểm nhân vật)"
        }
        Section::BudgetAnalysis => {
            "Ước tính tổng chi phí theo từng mục (trang phục, phụ kiện, makeup, props), so sánh \
             với ngân sách đề ra, gợi ý tối ưu hóa, độ bền và khả năng tái sử dụng."
        }
        Section::Recommendations => {
            "Hướng dẫn từng bước: trang phục chính, phụ kiện, makeup, tóc/wig, props, contact lens."
        }
        Section::ItemsList => {
            "Checklist theo thứ tự ưu tiên: bắt buộc, quan trọng, tùy chọn, DIY được \
             (ghi rõ ước tính giá cho từng item)."
        }
        Section::Tips => {
            "Mẹo chuẩn bị trước event, makeup, tạo dáng, chăm sóc costume, thể hiện tính cách \
             nhân vật và chụp ảnh."
        }
        Section::Alternatives => {
            "Gợi ý 2-3 nhân vật thay thế (tương tự, dễ hơn, phù hợp thông số hơn) kèm lý do."
        }
        Section::TaobaoKeywords => {
            "Bắt buộc 5-7 từ khóa tiếng Trung cho Taobao, mỗi từ khóa một dòng, kết hợp tên \
             nhân vật với cosplay, trang phục, tóc giả, phụ kiện. Tất cả từ khóa phải thuộc ĐÚNG \
             nhân vật được yêu cầu. Không viết gì khác trong phần này."
        }
    }
}
