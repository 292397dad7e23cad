//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 등록된 라우트 목록 등을 시각적으로 표현합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// 텍스트는 자동으로 중앙 정렬됩니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║              User Management Backend             ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Connecting to MongoDB
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
///
/// ```text
/// ✓ Step 2: Routes configured (6 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 서브 작업의 상태를 표시합니다
///
/// ```text
///    ├─ Storage: mongodb
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 라우트 그룹에 등록된 엔드포인트 목록을 출력합니다
///
/// ```text
/// Routes configured for UsersRoutes
///    ├─ GET    /users
///    ├─ POST   /users
/// ```
pub fn print_route_group(group: &str, endpoints: &[(&str, &str)]) {
    println!("Routes configured for {}", group);
    for (method, path) in endpoints {
        println!("   ├─ {:<6} {}", method, path);
    }
}

/// 서버 시작 요약을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                 🚀 SERVER STARTED                ║
/// ╚══════════════════════════════════════════════════╝
///    🌐 Address: 0.0.0.0:3000
///    💾 Storage: mongodb
///    🧵 Workers: 4
/// ```
pub fn print_final_summary(address: &str, storage: &str, workers: usize) {
    println!();
    print_boxed_title("🚀 SERVER STARTED");
    println!("   🌐 Address: {}", address);
    println!("   💾 Storage: {}", storage);
    println!("   🧵 Workers: {}", workers);
    println!();
}
