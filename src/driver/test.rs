use super::*;

const SAMPLE_PROGRAM: &str = "BEGIN
INTEGER A, B, C, E, M, N, G, H, I, a, c
INPUT A, B, C
LET B = A */ M
LET G = a + c
temp = <s%**h - j / w +d +*$&;
M = A/B+C
N = G/H-I+a*B/c
WRITE M
WRITEE F;
END";

fn compile_default(source: &str) -> String {
    compile_with(source, &TraceLines::default()).to_string()
}

fn report_lines(report: &CompileReport) -> Vec<String> {
    report.entries().iter().map(|entry| entry.report.to_string()).collect()
}

#[test]
fn test_sample_program() {
    let report = compile_with(SAMPLE_PROGRAM, &TraceLines::default());
    assert_eq!(report.len(), 11);
    assert_eq!(report.error_count(), 3);

    let lines = report_lines(&report);
    assert_eq!(lines[0], "No Error");
    assert_eq!(lines[1], "No Error");
    assert_eq!(lines[2], "No Error");
    assert_eq!(lines[3], "Lexical Error: Invalid symbol or operator combination: '*/'");
    assert!(lines[4].starts_with("No Error\n  [Stage 1] Lexical Analysis: Tokens -> [LET, G, =, a, +, c]"));
    assert_eq!(lines[5], "Lexical Error: Invalid symbol or operator combination: '**'");
    assert!(lines[6].starts_with("No Error\n  [Stage 1]"));
    assert!(lines[7].starts_with("No Error\n  [Stage 1]"));
    assert_eq!(lines[8], "No Error");
    assert_eq!(lines[9], "Lexical Error: Misspelled keyword: 'WRITEE'");
    assert_eq!(lines[10], "No Error");
}

#[test]
fn test_sample_trace_contents() {
    let report = compile_with(SAMPLE_PROGRAM, &TraceLines::default());
    let trace = report.entries()[4].report.trace().expect("line 5 should be traced");

    assert_eq!(trace.intermediate, "G := a+c");
    assert_eq!(trace.generated, "LOAD G STORE LOAD a+LOAD c");
    assert_eq!(trace.optimized, "MOV G STOR LOAD a+LOAD c");

    // 第 9 行通过了检查，但不在展开列表中
    assert!(report.entries()[8].report.trace().is_none());
}

#[test]
fn test_output_format() {
    let output = compile_default("BEGIN\nLET X = 5\nEND");
    assert_eq!(
        output,
        "Line 1: No Error\n\nLine 2: Lexical Error: Numbers are not allowed: '5'\n\nLine 3: No Error"
    );
}

#[test]
fn test_every_line_gets_one_entry_in_order() {
    let source = "BEGIN\nWRITE X\nINTEGER X\nWRITE X\n\nEND";
    let report = compile_with(source, &TraceNone);
    let numbers: Vec<usize> = report.entries().iter().map(|entry| entry.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);

    let lines = report_lines(&report);
    assert_eq!(lines[1], "Semantic Error: Undeclared identifier: 'X'");
    assert_eq!(lines[3], "No Error");
    // 空行也是一行
    assert_eq!(lines[4], "No Error");
}

#[test]
fn test_input_requires_declaration() {
    let output = compile_default("INTEGER X, Y\nINPUT X\nINPUT Z");
    assert_eq!(
        output,
        "Line 1: No Error\n\nLine 2: No Error\n\nLine 3: Semantic Error: Undeclared identifier in INPUT: 'Z'"
    );
}

#[test]
fn test_lexical_errors_take_priority() {
    // `**` 在词法阶段就被拒绝，轮不到语法阶段的运算符序列检查
    let output = compile_default("INTEGER A, B\nA = A ** B");
    assert!(output.ends_with("Line 2: Lexical Error: Invalid symbol or operator combination: '**'"));

    // 语法错误优先于语义错误
    let output = compile_default("A = B = C");
    assert_eq!(output, "Line 1: Syntax Error: Multiple '=' symbols found, invalid assignment.");
}

#[test]
fn test_operator_runs_outside_the_denylist_are_syntax_errors() {
    let output = compile_default("INTEGER A, B\nA = A +- B");
    assert!(output.ends_with("Line 2: Syntax Error: Invalid operator sequence: '+-'"));

    // 含有黑名单组合的更长序列仍然是词法错误
    for line in ["A = A *** B", "A = A **- B"] {
        let output = compile_default(&format!("INTEGER A, B\n{}", line));
        assert!(
            output.ends_with("Line 2: Lexical Error: Invalid symbol or operator combination: '**'"),
            "unexpected output for `{}`: {}",
            line,
            output
        );
    }
}

#[test]
fn test_write_list_with_comma() {
    let output = compile_default("INTEGER B\nWRITE A, B");
    assert_eq!(output, "Line 1: No Error\n\nLine 2: No Error");
}

#[test]
fn test_trailing_semicolon_never_passes() {
    let output = compile_default("INTEGER X\nWRITE X;");
    assert!(output.ends_with("Line 2: Lexical Error: Invalid symbol or operator combination: ';'"));
}

#[test]
fn test_compile_is_idempotent() {
    let first = compile_default(SAMPLE_PROGRAM);
    let second = compile_default(SAMPLE_PROGRAM);
    assert_eq!(first, second);
}

#[test]
fn test_declarations_do_not_leak_between_compiles() {
    let _ = compile_default("INTEGER Q");
    let output = compile_default("WRITE Q");
    assert_eq!(output, "Line 1: Semantic Error: Undeclared identifier: 'Q'");
}

#[test]
fn test_trace_all_and_custom_policies() {
    let source = "INTEGER X, A, B\nLET X = A + B";

    let report = compile_with(source, &TraceAll);
    assert!(report.entries().iter().all(|entry| entry.report.trace().is_some()));

    let only_assignments = |_: usize, line: &str| line.contains('=');
    let report = compile_with(source, &only_assignments);
    assert!(report.entries()[0].report.trace().is_none());

    let trace = report.entries()[1].report.trace().expect("assignment should be traced");
    assert_eq!(trace.intermediate, "X := A+B");
    assert_eq!(trace.generated, "LOAD X STORE LOAD A+LOAD B");
    assert_eq!(trace.binary.split(' ').count(), "LET X = A + B".chars().count());
}

#[test]
fn test_short_input_with_explicit_lines() {
    // 输入短于默认的展开行号时，调用方可以自己选择
    let report = compile_with("INTEGER A\nA = A", &TraceLines::new([2]));
    assert!(report.entries()[1].report.trace().is_some());
}

#[test]
fn test_failed_lines_are_never_traced() {
    let report = compile_with("LET X = 5", &TraceAll);
    assert!(report.entries()[0].report.trace().is_none());
    assert!(report.entries()[0].report.error().is_some());
}

#[test]
fn test_outer_whitespace_is_trimmed() {
    let source = "\n\n  BEGIN  \r\n   END\n\n";
    let report = compile_with(source, &TraceNone);
    assert_eq!(report.len(), 2);

    let first = &report.entries()[0];
    assert_eq!(first.text, "BEGIN");
    assert_eq!(&source[first.offset..first.offset + first.text.len()], "BEGIN");

    let second = &report.entries()[1];
    assert_eq!(second.text, "END");
    assert_eq!(&source[second.offset..second.offset + second.text.len()], "END");
}

#[test]
fn test_empty_input_is_a_single_clean_line() {
    assert_eq!(compile_default(""), "Line 1: No Error");
}
