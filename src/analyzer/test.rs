// In src/analyzer/test.rs

use super::*;

/// 辅助函数：按顺序检查多行，返回最后一行的结果。
/// 前面的行必须全部通过，否则测试失败。
fn check_after(setup: &[&str], line: &str) -> Result<(), SemanticError> {
    let mut declarations = Declarations::new();
    for prior in setup {
        if let Err(err) = check(prior, &mut declarations) {
            panic!("Setup line `{}` failed unexpectedly: {}", prior, err);
        }
    }
    check(line, &mut declarations)
}

#[cfg(test)]
mod declarations {
    use super::*;

    #[test]
    fn test_integer_declares_every_name() {
        let mut declarations = Declarations::new();
        assert_eq!(check("INTEGER A, B, C, a, c", &mut declarations), Ok(()));

        let mut names: Vec<&str> = declarations.iter().collect();
        names.sort();
        assert_eq!(names, vec!["A", "B", "C", "a", "c"]);
    }

    #[test]
    fn test_redeclaration_is_idempotent() {
        let mut declarations = Declarations::new();
        assert_eq!(check("INTEGER A, B", &mut declarations), Ok(()));
        assert_eq!(check("INTEGER B, A", &mut declarations), Ok(()));
        assert_eq!(declarations.len(), 2);
    }

    #[test]
    fn test_empty_pieces_are_ignored() {
        let mut declarations = Declarations::new();
        assert_eq!(check("INTEGER A,, B,", &mut declarations), Ok(()));
        assert_eq!(declarations.len(), 2);
        assert!(!declarations.is_declared(""));
    }

    #[test]
    fn test_reset_forgets_everything() {
        let mut declarations = Declarations::new();
        check("INTEGER X", &mut declarations).unwrap();
        declarations.reset();
        assert!(declarations.is_empty());
        assert!(check("WRITE X", &mut declarations).is_err());
    }
}

#[cfg(test)]
mod input {
    use super::*;

    #[test]
    fn test_declared_inputs_pass() {
        assert_eq!(check_after(&["INTEGER X, Y"], "INPUT X"), Ok(()));
        assert_eq!(check_after(&["INTEGER X, Y"], "INPUT Y, X"), Ok(()));
    }

    #[test]
    fn test_undeclared_input() {
        let err = check_after(&["INTEGER X, Y"], "INPUT Z").unwrap_err();
        assert_eq!(err, SemanticError::UndeclaredInInput { name: "Z".to_string(), span: 6..7 });
        assert_eq!(err.to_string(), "Undeclared identifier in INPUT: 'Z'");
    }

    #[test]
    fn test_first_undeclared_input_is_reported() {
        let err = check_after(&["INTEGER A"], "INPUT A,  Q, R").unwrap_err();
        assert_eq!(err, SemanticError::UndeclaredInInput { name: "Q".to_string(), span: 10..11 });
    }

    #[test]
    fn test_bare_input_names_an_empty_identifier() {
        let err = check_after(&["INTEGER A"], "INPUT").unwrap_err();
        assert_eq!(err.to_string(), "Undeclared identifier in INPUT: ''");
    }
}

#[cfg(test)]
mod statements {
    use super::*;

    #[test]
    fn test_assignment_with_declared_names() {
        assert_eq!(check_after(&["INTEGER G, a, c"], "LET G = a + c"), Ok(()));
        assert_eq!(check_after(&["INTEGER M, A, B, C"], "M = A/B+C"), Ok(()));
    }

    #[test]
    fn test_undeclared_name_in_expression() {
        let err = check_after(&["INTEGER X, A"], "LET X = A + B").unwrap_err();
        assert_eq!(err, SemanticError::Undeclared { name: "B".to_string(), span: 12..13 });
        assert_eq!(err.to_string(), "Undeclared identifier: 'B'");
    }

    #[test]
    fn test_declarations_are_case_sensitive() {
        let err = check_after(&["INTEGER a"], "WRITE A").unwrap_err();
        assert!(matches!(err, SemanticError::Undeclared { ref name, .. } if name == "A"));
    }

    #[test]
    fn test_multi_letter_identifiers_are_not_checked() {
        assert_eq!(check_after(&[], "temp = total + x1"), Ok(()));
    }

    #[test]
    fn test_keywords_alone_pass() {
        assert_eq!(check_after(&[], "BEGIN"), Ok(()));
        assert_eq!(check_after(&[], "END"), Ok(()));
    }

    #[test]
    fn test_names_glued_to_commas_are_skipped() {
        // 一般语句只在空白和运算符处切分，`A,` 不是单字母标识符
        assert_eq!(check_after(&["INTEGER B"], "WRITE A, B"), Ok(()));

        let err = check_after(&[], "WRITE A, B").unwrap_err();
        assert_eq!(err, SemanticError::Undeclared { name: "B".to_string(), span: 9..10 });
    }

    #[test]
    fn test_declaration_only_counts_for_later_lines() {
        // 同一行里的名字不会被自己声明
        let err = check_after(&[], "WRITE M").unwrap_err();
        assert!(matches!(err, SemanticError::Undeclared { .. }));
    }
}
