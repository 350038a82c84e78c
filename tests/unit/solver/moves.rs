//! Tests for hop generation, freedom counting, and candidate ordering

#[cfg(test)]
mod tests {
    use hopgrid::solver::Board;
    use hopgrid::solver::moves::{MOVE_OFFSETS, candidate_moves, open_degree, open_moves, order_moves};

    // Tests the offset table holds the eight hops in their fixed order
    // Verified by reordering the straight and diagonal groups
    #[test]
    fn test_offsets_are_fixed() {
        assert_eq!(
            MOVE_OFFSETS,
            [
                [3, 0],
                [-3, 0],
                [0, 3],
                [0, -3],
                [2, 2],
                [-2, -2],
                [2, -2],
                [-2, 2],
            ]
        );
    }

    // Tests raw candidate generation applies offsets in table order
    // Verified by swapping row and column in the offset sum
    #[test]
    fn test_candidate_moves_in_generation_order() {
        assert_eq!(
            candidate_moves([5, 5]),
            [
                [8, 5],
                [2, 5],
                [5, 8],
                [5, 2],
                [7, 7],
                [3, 3],
                [7, 3],
                [3, 7],
            ]
        );
    }

    // Tests bounds and occupancy filtering of candidates from a corner
    // Verified by disabling the occupancy check
    #[test]
    fn test_open_moves_filters_corner() {
        let mut board = Board::new(10).unwrap();
        assert_eq!(open_moves(&board, [0, 0]), vec![[3, 0], [0, 3], [2, 2]]);

        board.place([3, 0], 2);
        assert_eq!(open_moves(&board, [0, 0]), vec![[0, 3], [2, 2]]);
    }

    // Tests freedom counts at a corner and in the open center
    // Verified by counting occupied destinations as open
    #[test]
    fn test_open_degree() {
        let empty = Board::new(10).unwrap();
        assert_eq!(open_degree(&empty, [0, 0]), 3);
        assert_eq!(open_degree(&empty, [4, 4]), 8);

        let mut board = Board::new(10).unwrap();
        board.place([7, 4], 2);
        assert_eq!(open_degree(&board, [4, 4]), 7);
    }

    // Tests ascending-freedom ordering with ties kept in generation order
    // Verified by switching to an unstable sort with a coordinate tie-break
    #[test]
    fn test_order_moves_is_stable_on_ties() {
        let mut board = Board::new(10).unwrap();
        board.place([4, 4], 1);

        // Freedom per candidate of (4, 4): the two 4s and the lone 5 lead,
        // then four 6s in generation order, then the 7.
        let mut moves = open_moves(&board, [4, 4]);
        order_moves(&board, &mut moves);

        assert_eq!(
            moves,
            vec![
                [1, 4],
                [4, 1],
                [2, 2],
                [7, 4],
                [4, 7],
                [6, 2],
                [2, 6],
                [6, 6],
            ]
        );
    }

    // Tests that ordering leaves an empty candidate list untouched
    // Verified by indexing into the first element unconditionally
    #[test]
    fn test_order_moves_empty() {
        let board = Board::new(2).unwrap();
        let mut moves = open_moves(&board, [0, 0]);
        assert!(moves.is_empty());

        order_moves(&board, &mut moves);
        assert!(moves.is_empty());
    }
}
