//! Tests for outcome accessors and search statistics

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use hopgrid::solver::{BestSoFar, Board, Outcome, SearchStats};

    fn stats() -> SearchStats {
        SearchStats {
            dead_ends: 3,
            elapsed: Duration::from_millis(120),
        }
    }

    // Tests accessors on a solved outcome
    // Verified by reporting best.number for solved boards
    #[test]
    fn test_solved_accessors() {
        let mut board = Board::new(1).unwrap();
        board.place([0, 0], 1);
        let outcome = Outcome::Solved {
            board,
            stats: stats(),
        };

        assert!(outcome.is_solved());
        assert_eq!(outcome.highest_number(), 1);
        assert_eq!(outcome.board().value_at([0, 0]), 1);
        assert_eq!(outcome.stats().dead_ends, 3);
        assert_eq!(outcome.stats().elapsed, Duration::from_millis(120));
    }

    // Tests an exhausted outcome reports its best attempt
    // Verified by returning the cell count as the highest number
    #[test]
    fn test_exhausted_accessors() {
        let mut attempt = Board::new(3).unwrap();
        attempt.place([0, 0], 1);
        attempt.place([2, 2], 2);
        let outcome = Outcome::Exhausted {
            best: BestSoFar {
                number: 2,
                board: attempt,
            },
            stats: stats(),
        };

        assert!(!outcome.is_solved());
        assert_eq!(outcome.highest_number(), 2);
        assert_eq!(outcome.board().value_at([2, 2]), 2);
    }

    // Tests a cancelled outcome keeps both the frozen and the best board
    // Verified by conflating halted with the best board
    #[test]
    fn test_cancelled_keeps_halted_and_best() {
        let mut halted = Board::new(3).unwrap();
        halted.place([0, 0], 1);
        halted.place([2, 2], 2);

        let mut best_board = Board::new(3).unwrap();
        best_board.place([0, 0], 1);

        let outcome = Outcome::Cancelled {
            best: BestSoFar {
                number: 1,
                board: best_board,
            },
            halted,
            stats: stats(),
        };

        assert!(!outcome.is_solved());
        assert_eq!(outcome.highest_number(), 1);
        assert_eq!(outcome.board().value_at([2, 2]), 0);
        match outcome {
            Outcome::Cancelled { halted, .. } => assert_eq!(halted.value_at([2, 2]), 2),
            Outcome::Solved { .. } | Outcome::Exhausted { .. } => {
                unreachable!("constructed as cancelled")
            }
        }
    }
}
