// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持中文（默认）和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// 渲染路径一律显式传入 locale，不修改全局语言
// ==========================================

/// 翻译消息（指定语言，无参数）
///
/// # 示例
/// ```no_run
/// use oee_kpi::i18n::t_in;
/// let title = t_in("en", "metric.oee");
/// ```
pub fn t_in(locale: &str, key: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 翻译消息（指定语言，带参数）
///
/// # 示例
/// ```no_run
/// use oee_kpi::i18n::t_in_with_args;
/// let msg = t_in_with_args("en", "alert.oee", &[("threshold", "85")]);
/// ```
pub fn t_in_with_args(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    let mut result = t_in(locale, key);
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
