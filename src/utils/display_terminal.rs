//! 부트스트랩 진행 상황을 터미널에 출력하는 유틸리티

/// 고정 너비 박스 제목을 출력합니다.
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

/// 박스 제목 문자열 (내부 콘텐츠 50칸)
pub fn boxed_title(title: &str) -> String {
    let content_width = 50;
    let border = "═".repeat(content_width);

    format!("╔{}╗\n║{:^50}║\n╚{}╝", border, title, border)
}

pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

pub fn print_step_complete(step: u8, description: &str) {
    println!("✓ Step {}: {}", step, description);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 컬렉션별 문서 수 요약을 출력합니다.
pub fn print_collection_summary(collections: &[(&str, usize)]) {
    println!();
    print_boxed_title("🐾 CATTERY READY");
    for (name, count) in collections {
        println!("{}", summary_line(name, *count));
    }
    println!();
}

fn summary_line(name: &str, count: usize) -> String {
    format!("   📦 {:<8} {:>6} documents", name, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_has_three_lines_of_equal_width() {
        let boxed = boxed_title("READY");
        let widths: Vec<usize> = boxed.lines().map(|line| line.chars().count()).collect();

        assert_eq!(widths, vec![52, 52, 52]);
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(summary_line("cats", 3), "   📦 cats          3 documents");
    }
}
