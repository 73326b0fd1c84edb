//! Summary and board pretty-printing for rank 0's final output.

use crate::bitboard::Bitboard;

/// Prints the two summary lines to standard output.
pub fn print_summary(num_solutions: usize, max_queens: usize) {
    println!("Number of solutions: {num_solutions}");
    println!("Maximum number of queens: {max_queens}");
}

/// Pretty-prints one board: a numbered column header, a dash divider, then
/// one row per board row, each prefixed with its row index and a vertical
/// bar, `x` for occupied and `o` for empty. Column width is sized to the
/// largest index so headers stay aligned for any supported `N`.
pub fn print_board(board: &Bitboard) {
    let n = board.size();
    let width = index_width(n);

    print!("{:>width$}   ", "", width = width);
    for i in 0..n {
        print!("{i:>width$} ");
    }
    println!();

    print!("{:>width$}   ", "", width = width);
    for _ in 0..n {
        print!("{:->width$} ", "", width = width);
    }
    println!();

    for r in 0..n {
        print!("{r:>width$} | ");
        for c in 0..n {
            let cell = if board.is_occupied(r, c) { "x" } else { "o" };
            print!("{cell:>width$} ");
        }
        println!();
    }
    println!();
}

/// Column/row index width: as many digits as the largest index needs.
fn index_width(n: usize) -> usize {
    if n <= 1 {
        1
    } else {
        (n - 1).to_string().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_width_grows_with_board_size() {
        assert_eq!(index_width(1), 1);
        assert_eq!(index_width(9), 1);
        assert_eq!(index_width(10), 2);
        assert_eq!(index_width(100), 2);
        assert_eq!(index_width(101), 3);
    }

    #[test]
    fn print_board_does_not_panic_on_small_and_large_boards() {
        let b = Bitboard::new(4).unwrap();
        print_board(&b);
        let mut b = Bitboard::new(12).unwrap();
        b.set_occupied(0, 0);
        b.set_occupied(11, 11);
        print_board(&b);
    }
}
