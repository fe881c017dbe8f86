use std::time::Duration;

use crate::evaluator::{Candidate, Verdict, evaluate_candidate};
use crate::expression::DivisionMode;
use crate::formula::{Formula, FormulaError};
use crate::solver::{
    AlphameticSolver, SearchBudget, SearchRun, SearchState, SearchStrategy, SolverConfig,
    SolverError,
};

fn sequential() -> AlphameticSolver {
    AlphameticSolver::default()
}

fn parallel() -> AlphameticSolver {
    AlphameticSolver::new(SolverConfig::default().with_strategy(SearchStrategy::Parallel))
}

fn with_budget(budget: SearchBudget) -> AlphameticSolver {
    AlphameticSolver::new(SolverConfig::default().with_budget(budget))
}

fn assert_candidate_valid(formula: &str, solver: &AlphameticSolver) {
    let parsed = match Formula::parse(formula) {
        Ok(f) => f,
        Err(e) => panic!("{}", e),
    };
    let solution = solver.solve(formula);
    assert!(solution.is_ok(), "no solution for {}", formula);
    if let Ok(solution) = solution {
        let candidate = Candidate::substitute(&parsed, solution.assignment());
        let text = candidate.to_string();
        assert_eq!(
            evaluate_candidate(&text, DivisionMode::Exact),
            Ok(Verdict::Valid),
            "candidate {} does not hold",
            text
        );
    }
}

#[test]
fn test_send_more_money() {
    let solution = sequential().solve("SEND + MORE = MONEY");
    assert!(solution.is_ok());
    if let Ok(solution) = solution {
        assert_eq!(
            solution.to_pairs(),
            vec![
                ('S', 9),
                ('E', 5),
                ('N', 6),
                ('D', 7),
                ('M', 1),
                ('O', 0),
                ('R', 8),
                ('Y', 2),
            ]
        );
        assert_eq!(solution.digit_for('O'), Some(0));
        assert_eq!(solution.digit_for('Z'), None);
        assert_eq!(
            solution.to_string(),
            "S=9, E=5, N=6, D=7, M=1, O=0, R=8, Y=2"
        );
    }
}

#[test]
fn test_x_over_x_equals_x() {
    let solution = sequential().solve("X / X = X ");
    assert_eq!(solution.map(|s| s.to_pairs()), Ok(vec![('X', 1)]));
}

#[test]
fn test_two_plus_two_equals_four() {
    assert_candidate_valid("TWO + TWO = FOUR", &sequential());
}

#[test]
fn test_degenerate_formula_takes_first_assignment() {
    let report = sequential().search("AB = AB");
    assert_eq!(report.state, SearchState::Solved);
    assert_eq!(report.examined, 1);
    assert_eq!(
        report.outcome.map(|s| s.to_pairs()),
        Ok(vec![('A', 1), ('B', 2)])
    );
}

#[test]
fn test_single_zero_is_a_legal_operand() {
    let report = sequential().search("A + A = A");
    assert_eq!(report.outcome.map(|s| s.to_pairs()), Ok(vec![('A', 0)]));
    // 0 is the last digit of the alphabet
    assert_eq!(report.examined, 10);
}

#[test]
fn test_unsolvable_formula_exhausts() {
    let report = sequential().search("AB + AB = A");
    assert_eq!(report.outcome, Err(SolverError::NoSolutionFound));
    assert_eq!(report.state, SearchState::Exhausted);
    assert_eq!(report.examined, 90);
}

#[test]
fn test_too_many_letters_never_searches() {
    let report = sequential().search("ABCDEF + GHIJK = KJIHGFEDCBA");
    assert_eq!(
        report.outcome,
        Err(SolverError::Formula(FormulaError::TooManyLetters { count: 11 }))
    );
    assert_eq!(report.state, SearchState::Rejected);
    assert_eq!(report.examined, 0);
}

#[test]
fn test_input_errors_are_distinguishable() {
    for bad in ["SEND + MORE", "TWO + 2 = FOUR", "A = B = C", "a = b"] {
        let result = sequential().solve(bad);
        assert!(
            result.as_ref().is_err_and(SolverError::is_input_error),
            "{} gave {:?}",
            bad,
            result
        );
    }
    assert!(!SolverError::NoSolutionFound.is_input_error());
    assert!(!SolverError::SearchBudgetExceeded { examined: 3 }.is_input_error());
}

#[test]
fn test_sequential_search_is_deterministic() {
    let first = sequential().solve("TWO + TWO = FOUR");
    let second = sequential().solve("TWO + TWO = FOUR");
    assert_eq!(first, second);

    let first = sequential().solve("AB + AB = A");
    let second = sequential().solve("AB + AB = A");
    assert_eq!(first, second);
}

#[test]
fn test_candidate_budget_is_exact() {
    let solver = with_budget(SearchBudget::unlimited().with_max_candidates(90));
    assert_eq!(
        solver.solve("AB + AB = A"),
        Err(SolverError::NoSolutionFound)
    );

    let report = with_budget(SearchBudget::unlimited().with_max_candidates(89)).search("AB + AB = A");
    assert_eq!(
        report.outcome,
        Err(SolverError::SearchBudgetExceeded { examined: 89 })
    );
    assert_eq!(report.state, SearchState::BudgetExceeded);
}

#[test]
fn test_budget_does_not_hide_early_solution() {
    let solver = with_budget(SearchBudget::unlimited().with_max_candidates(1));
    assert!(solver.solve("AB = AB").is_ok());
}

#[test]
fn test_expired_time_limit() {
    let solver = with_budget(SearchBudget::unlimited().with_time_limit(Duration::ZERO));
    assert_eq!(
        solver.solve("SEND + MORE = MONEY"),
        Err(SolverError::SearchBudgetExceeded { examined: 0 })
    );
}

#[test]
fn test_parallel_finds_unique_solution() {
    let report = parallel().search("SEND + MORE = MONEY");
    assert!(report.parallel);
    assert_eq!(report.state, SearchState::Solved);
    if let Ok(solution) = report.outcome {
        assert_eq!(solution.digit_for('M'), Some(1));
        assert_eq!(solution.digit_for('S'), Some(9));
        assert_eq!(solution.digit_for('Y'), Some(2));
    }
}

#[test]
fn test_parallel_solution_is_valid() {
    assert_candidate_valid("TWO + TWO = FOUR", &parallel());
}

#[test]
fn test_parallel_exhausts_whole_space() {
    let report = parallel().search("AB + AB = A");
    assert_eq!(report.outcome, Err(SolverError::NoSolutionFound));
    assert_eq!(report.examined, 90);
}

#[test]
fn test_parallel_budget() {
    let solver = AlphameticSolver::new(
        SolverConfig::default()
            .with_strategy(SearchStrategy::Parallel)
            .with_budget(SearchBudget::unlimited().with_max_candidates(10)),
    );
    let report = solver.search("AB + AB = A");
    assert_eq!(report.state, SearchState::BudgetExceeded);
    assert!(report.examined <= 10);
}

#[test]
fn test_auto_strategy_threshold() {
    assert!(!SearchStrategy::Auto.is_parallel_for(6));
    assert!(SearchStrategy::Auto.is_parallel_for(7));
    assert!(!SearchStrategy::Sequential.is_parallel_for(10));
    assert!(SearchStrategy::Parallel.is_parallel_for(1));

    let solver = AlphameticSolver::new(SolverConfig::default().with_strategy(SearchStrategy::Auto));
    let report = solver.search("X / X = X");
    assert!(!report.parallel);
}

#[test]
fn test_run_lifecycle() {
    let run = SearchRun::new(SolverConfig::default());
    assert_eq!(run.state(), SearchState::Created);
    assert!(!run.state().is_terminal());

    let report = run.execute("X / X = X");
    assert_eq!(report.state, SearchState::Solved);
    assert!(report.state.is_terminal());
}

#[test]
fn test_search_preparsed_formula() {
    let formula = match Formula::parse("A + A = A") {
        Ok(f) => f,
        Err(e) => panic!("{}", e),
    };
    let report = sequential().search_formula(&formula);
    assert_eq!(report.outcome.map(|s| s.to_pairs()), Ok(vec![('A', 0)]));
}
