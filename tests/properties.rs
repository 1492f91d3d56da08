use std::collections::HashSet;

use coverage_core::{Columns, Mark, Table, build_matrix};
use proptest::prelude::*;

fn ident() -> impl Strategy<Value = String> {
    prop_oneof!["[A-C]-[1-4]", " [A-C]-[1-4] "]
}

fn requirement_rows() -> impl Strategy<Value = Vec<(Option<String>, Option<String>)>> {
    let covered = prop::option::of(prop::collection::vec(ident(), 0..4).prop_map(|v| v.join(",")));
    prop::collection::vec((prop::option::of(ident()), covered), 0..8)
}

fn test_codes() -> impl Strategy<Value = Vec<Option<String>>> {
    prop::collection::vec(prop::option::of(ident()), 0..6)
}

fn mk_tables(reqs: &[(Option<String>, Option<String>)], tests: &[Option<String>]) -> (Table, Table) {
    let mut req_table = Table::new(["ID", "Cubierto por"]);
    for (id, covered) in reqs {
        req_table.push_row(vec![id.clone(), covered.clone()]);
    }
    let mut test_table = Table::new(["Código de Prueba"]);
    for code in tests {
        test_table.push_row(vec![code.clone()]);
    }
    (req_table, test_table)
}

proptest! {
    #[test]
    fn every_listed_cell_is_defined(reqs in requirement_rows(), tests in test_codes()) {
        let (r, t) = mk_tables(&reqs, &tests);
        let report = build_matrix(&r, &t, &Columns::default());

        for test in &report.test_codes {
            for req in &report.requirement_ids {
                let mark = report.matrix.mark(test, req);
                prop_assert!(matches!(mark, Some(Mark::Covered) | Some(Mark::Uncovered)));
            }
        }
    }

    #[test]
    fn no_keys_outside_the_test_list(reqs in requirement_rows(), tests in test_codes()) {
        let (r, t) = mk_tables(&reqs, &tests);
        let report = build_matrix(&r, &t, &Columns::default());

        let listed: HashSet<&String> = report.test_codes.iter().collect();
        let keyed: HashSet<&String> = report.matrix.tests().iter().collect();
        prop_assert_eq!(listed, keyed);
    }

    #[test]
    fn covered_cells_are_backed_by_a_row(reqs in requirement_rows(), tests in test_codes()) {
        let (r, t) = mk_tables(&reqs, &tests);
        let report = build_matrix(&r, &t, &Columns::default());

        for test in report.matrix.tests() {
            for req in report.matrix.requirements() {
                let backed = reqs.iter().any(|(id, covered)| {
                    id.as_deref().map(str::trim) == Some(req.as_str())
                        && covered
                            .as_deref()
                            .is_some_and(|c| c.split(',').any(|tok| tok.trim() == test))
                });
                let mark = report.matrix.mark(test, req);
                prop_assert_eq!(mark == Some(Mark::Covered), backed);
            }
        }
    }

    #[test]
    fn building_is_idempotent(reqs in requirement_rows(), tests in test_codes()) {
        let (r, t) = mk_tables(&reqs, &tests);
        let first = build_matrix(&r, &t, &Columns::default());
        let second = build_matrix(&r, &t, &Columns::default());
        prop_assert_eq!(first, second);
    }
}
