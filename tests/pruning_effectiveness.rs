//! Node-count comparisons for the benchmarking toggles.
//!
//! Pruning and move ordering must change only how much of the tree is
//! visited, never which move is chosen or what it scores.

use kinarow::{choose_move, Board, Player, SearchConfig, SearchResult};

fn search(board_str: &str, player: Player, config: &SearchConfig) -> SearchResult {
    let mut board = Board::from_string(board_str).unwrap();
    choose_move(&mut board, player, config).unwrap()
}

#[test]
fn pruning_never_visits_more_nodes_or_changes_the_decision() {
    let positions = [
        ("X.O .X. ...", Player::O),
        (".X. OXO ...", Player::X),
        ("XO. ..X ..O", Player::X),
    ];

    for (board_str, player) in positions {
        let pruned = search(board_str, player, &SearchConfig::default());
        let unpruned = search(board_str, player, &SearchConfig::default().with_pruning(false));

        assert!(
            pruned.nodes <= unpruned.nodes,
            "pruning visited more nodes ({} > {}) on:\n{board_str}",
            pruned.nodes,
            unpruned.nodes
        );
        assert_eq!(
            pruned.best_move, unpruned.best_move,
            "pruning changed the chosen move on:\n{board_str}"
        );
        assert_eq!(
            pruned.score, unpruned.score,
            "pruning changed the score on:\n{board_str}"
        );
    }
}

#[test]
fn pruning_cuts_the_empty_board_tree_substantially() {
    let pruned = search(".........", Player::X, &SearchConfig::default());
    let unpruned = search(
        ".........",
        Player::X,
        &SearchConfig::default().with_pruning(false),
    );

    assert_eq!(pruned.best_move, unpruned.best_move);
    assert_eq!(pruned.score, unpruned.score);
    assert!(
        pruned.nodes * 2 < unpruned.nodes,
        "expected a large cut from pruning, got {} vs {}",
        pruned.nodes,
        unpruned.nodes
    );
}

#[test]
fn ordering_helps_on_a_tactical_position() {
    // The center completes X's main diagonal; trying it first collapses
    // the rest of the tree
    let board_str = "X.O O.. ..X";
    let ordered = search(board_str, Player::X, &SearchConfig::default());
    let row_major = search(
        board_str,
        Player::X,
        &SearchConfig::default().with_move_ordering(false),
    );

    assert!(
        ordered.nodes <= row_major.nodes,
        "ordering visited more nodes ({} > {})",
        ordered.nodes,
        row_major.nodes
    );
    assert_eq!(ordered.score, row_major.score);
    assert_eq!(ordered.best_move, row_major.best_move);
}

#[test]
fn toggles_agree_under_a_depth_limit() {
    // Heuristic frontier instead of terminal leaves; the toggles must still
    // agree on the decision
    let board_str = "X... .O.. ..X. ....";
    let base = SearchConfig::default().with_max_depth(3);

    let reference = search(board_str, Player::O, &base);
    for pruning in [true, false] {
        for ordering in [true, false] {
            let config = base
                .clone()
                .with_pruning(pruning)
                .with_move_ordering(ordering);
            let result = search(board_str, Player::O, &config);
            assert_eq!(
                result.score, reference.score,
                "score diverged with pruning={pruning} ordering={ordering}"
            );
        }
    }

    // Within one ordering, pruning must also preserve the chosen move
    let unpruned = search(board_str, Player::O, &base.clone().with_pruning(false));
    assert_eq!(reference.best_move, unpruned.best_move);
}
