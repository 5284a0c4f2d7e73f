//! Line- and word-granularity structural diff.
//!
//! Both texts are normalized (CRLF/CR to LF, trailing whitespace stripped per
//! line, whole text trimmed), then aligned twice with a longest-common-
//! subsequence diff: once by whole lines, once by whitespace-delimited words.
//! Line runs carry 1-based line numbers assigned independently per side as
//! the runs are walked in order.

use shared_types::{DiffReport, DiffStats, DiffTag, LineDiffRun, LineSpan, WordDiffRun};

/// Normalize line endings and trailing whitespace before diffing.
pub fn normalize(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let stripped: Vec<&str> = unified.split('\n').map(str::trim_end).collect();
    stripped.join("\n").trim().to_string()
}

fn split_lines(normalized: &str) -> Vec<&str> {
    if normalized.is_empty() {
        Vec::new()
    } else {
        normalized.split('\n').collect()
    }
}

/// One aligned element: the tag plus an index into A (removed/unchanged) or
/// B (added).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DiffOp {
    tag: DiffTag,
    index: usize,
}

/// Classic LCS alignment over two sequences, O(n·m) table plus backtrack.
/// Removed elements are emitted before added elements at a replacement site.
fn lcs_ops<T: PartialEq>(a: &[T], b: &[T]) -> Vec<DiffOp> {
    let n = a.len();
    let m = b.len();

    let mut table = vec![vec![0usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }

    let mut ops = Vec::with_capacity(n + m);
    let mut i = n;
    let mut j = m;
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
            ops.push(DiffOp {
                tag: DiffTag::Unchanged,
                index: i - 1,
            });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table[i][j - 1] >= table[i - 1][j]) {
            ops.push(DiffOp {
                tag: DiffTag::Added,
                index: j - 1,
            });
            j -= 1;
        } else {
            ops.push(DiffOp {
                tag: DiffTag::Removed,
                index: i - 1,
            });
            i -= 1;
        }
    }
    ops.reverse();
    ops
}

/// Coalesce per-element ops into maximal (tag, elements) runs.
fn coalesce<'a, T: AsRef<str>>(
    ops: &[DiffOp],
    a: &'a [T],
    b: &'a [T],
) -> Vec<(DiffTag, Vec<&'a str>)> {
    let mut runs: Vec<(DiffTag, Vec<&str>)> = Vec::new();
    for op in ops {
        let element = match op.tag {
            DiffTag::Added => b[op.index].as_ref(),
            _ => a[op.index].as_ref(),
        };
        match runs.last_mut() {
            Some((tag, elements)) if *tag == op.tag => elements.push(element),
            _ => runs.push((op.tag, vec![element])),
        }
    }
    runs
}

/// Line-granularity diff with 1-based line numbering per side.
fn line_diff(lines_a: &[&str], lines_b: &[&str]) -> Vec<LineDiffRun> {
    let ops = lcs_ops(lines_a, lines_b);
    let runs = coalesce(&ops, lines_a, lines_b);

    let mut next_line_a = 1usize;
    let mut next_line_b = 1usize;
    runs.into_iter()
        .map(|(tag, lines)| {
            let count = lines.len();
            let span_a = (tag != DiffTag::Added).then(|| {
                let span = LineSpan {
                    start: next_line_a,
                    end: next_line_a + count - 1,
                };
                next_line_a += count;
                span
            });
            let span_b = (tag != DiffTag::Removed).then(|| {
                let span = LineSpan {
                    start: next_line_b,
                    end: next_line_b + count - 1,
                };
                next_line_b += count;
                span
            });
            LineDiffRun {
                tag,
                content: lines.join("\n"),
                lines_a: span_a,
                lines_b: span_b,
            }
        })
        .collect()
}

/// Word-granularity diff over the full normalized text, no line numbers.
fn word_diff(normalized_a: &str, normalized_b: &str) -> Vec<WordDiffRun> {
    let words_a: Vec<&str> = normalized_a.split_whitespace().collect();
    let words_b: Vec<&str> = normalized_b.split_whitespace().collect();
    let ops = lcs_ops(&words_a, &words_b);
    coalesce(&ops, &words_a, &words_b)
        .into_iter()
        .map(|(tag, words)| WordDiffRun {
            tag,
            content: words.join(" "),
        })
        .collect()
}

/// Derive aggregate statistics from the line runs. Only non-empty line
/// fragments are counted.
fn stats(line_runs: &[LineDiffRun]) -> DiffStats {
    let mut added_lines = 0;
    let mut removed_lines = 0;
    let mut unchanged_lines = 0;

    for run in line_runs {
        let non_empty = run.content.split('\n').filter(|l| !l.is_empty()).count();
        match run.tag {
            DiffTag::Added => added_lines += non_empty,
            DiffTag::Removed => removed_lines += non_empty,
            DiffTag::Unchanged => unchanged_lines += non_empty,
        }
    }

    let total_lines = added_lines + removed_lines + unchanged_lines;
    let change_percent = if total_lines == 0 {
        0.0
    } else {
        let raw = (added_lines + removed_lines) as f64 / total_lines as f64 * 100.0;
        (raw * 100.0).round() / 100.0
    };

    DiffStats {
        added_lines,
        removed_lines,
        unchanged_lines,
        total_lines,
        change_percent,
    }
}

fn summary(stats: &DiffStats) -> String {
    if stats.added_lines == 0 && stats.removed_lines == 0 {
        "The documents are identical.".to_string()
    } else {
        format!(
            "{}% changed; {} lines added and {} lines removed.",
            stats.change_percent, stats.added_lines, stats.removed_lines
        )
    }
}

/// Run the full structural diff: line runs, word runs, statistics, summary.
pub fn diff_documents(text_a: &str, text_b: &str) -> DiffReport {
    let normalized_a = normalize(text_a);
    let normalized_b = normalize(text_b);

    let lines_a = split_lines(&normalized_a);
    let lines_b = split_lines(&normalized_b);

    let line_runs = line_diff(&lines_a, &lines_b);
    let word_runs = word_diff(&normalized_a, &normalized_b);
    let stats = stats(&line_runs);
    let summary = summary(&stats);

    DiffReport {
        line_runs,
        word_runs,
        stats,
        summary,
    }
}
