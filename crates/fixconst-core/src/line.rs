// crates/fixconst-core/src/line.rs

use crate::config::NormalizeConfig;

/// True when line 1 already carries the sentinel arch.
pub fn is_normalized_arch_line(line: &str, cfg: &NormalizeConfig) -> bool {
    line.contains(cfg.sentinel.as_str())
}

/// `GOARCH: mips\n` -> `GOARCH: mips, 386, amd64, riscv64\n`
pub fn tag_arch_line(line: &str, cfg: &NormalizeConfig) -> String {
    let mut out = String::with_capacity(line.len() + 32);
    out.push_str(line.trim_end());
    out.push_str(&cfg.arch_suffix());
    out.push('\n');
    out
}

/// Rewrite one `name = [type:]value` line to `name = value\n`.
///
/// Returns `None` for anything that does not split into exactly two parts
/// on `=` (blank lines, comments, `a = b = c`). Callers drop those lines.
pub fn rewrite_assignment(line: &str) -> Option<String> {
    let (left, right) = line.split_once('=')?;
    if right.contains('=') {
        return None;
    }

    let name = left.trim();
    let value = match right.split_once(':') {
        Some((_ty, v)) => v.trim(),
        None => right.trim(),
    };

    Some(format!("{name} = {value}\n"))
}
